use ahash::AHashMap;
use parking_lot::RwLock;

use crate::graph::Edge;

/// Edge lists keyed by `(edge collection, vertex id)`.
#[derive(Default)]
pub struct AdjacencyCache {
    inner: RwLock<AHashMap<(String, String), Vec<Edge>>>,
}

impl AdjacencyCache {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(AHashMap::new()),
        }
    }

    pub fn get(&self, collection: &str, vertex_id: &str) -> Option<Vec<Edge>> {
        self.inner
            .read()
            .get(&(collection.to_string(), vertex_id.to_string()))
            .cloned()
    }

    pub fn insert(&self, collection: &str, vertex_id: &str, edges: Vec<Edge>) {
        self.inner
            .write()
            .insert((collection.to_string(), vertex_id.to_string()), edges);
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }
}
