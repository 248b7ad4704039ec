use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{graph::Vertex, path::Path};

/// Caller-owned accumulator handed to every visitor call. The built-in
/// visitors only touch `visited` and `count`; `data` is free for custom ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TraversalResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visited: Option<Visited>,
    #[serde(default)]
    pub count: u64,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub data: Map<String, Value>,
}

/// Tracking slots. A `None` slot is left alone by the tracking visitor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Visited {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertices: Option<Vec<Vertex>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<Path>>,
}

impl TraversalResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// A result with both tracking slots enabled.
    pub fn tracking() -> Self {
        Self {
            visited: Some(Visited {
                vertices: Some(Vec::new()),
                paths: Some(Vec::new()),
            }),
            ..Self::default()
        }
    }

    pub fn visited_vertices(&self) -> &[Vertex] {
        self.visited
            .as_ref()
            .and_then(|visited| visited.vertices.as_deref())
            .unwrap_or(&[])
    }

    pub fn visited_paths(&self) -> &[Path] {
        self.visited
            .as_ref()
            .and_then(|visited| visited.paths.as_deref())
            .unwrap_or(&[])
    }

    pub fn vertex_ids(&self) -> Vec<&str> {
        self.visited_vertices()
            .iter()
            .map(|v| v.id.as_str())
            .collect()
    }

    pub fn path_ids(&self) -> Vec<Vec<&str>> {
        self.visited_paths().iter().map(Path::vertex_ids).collect()
    }
}
