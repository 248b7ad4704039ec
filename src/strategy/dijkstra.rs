use std::collections::BinaryHeap;

use ahash::{AHashMap, AHashSet};
use tracing::debug;

use super::{IterationGuard, Target, TraversalStrategy, heap::MinEntry};
use crate::{
    config::TraversalConfig,
    errors::TraversalError,
    graph::{Edge, Vertex},
    path::Path,
    result::TraversalResult,
};

#[derive(Debug)]
pub(crate) struct SearchNode {
    pub vertex: Vertex,
    pub dist: f64,
    pub parent: Option<usize>,
    pub parent_edge: Option<Edge>,
    pub visited: bool,
    /// The filter declined to visit this vertex; it is left out when the
    /// found path is reported.
    pub hidden: bool,
}

/// Search nodes keyed by vertex id, created lazily with an infinite distance.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    pub nodes: Vec<SearchNode>,
    index: AHashMap<String, usize>,
}

impl NodeArena {
    pub fn node_for(&mut self, id: &str, vertex: &Vertex) -> usize {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(SearchNode {
            vertex: vertex.clone(),
            dist: f64::INFINITY,
            parent: None,
            parent_edge: None,
            visited: false,
            hidden: false,
        });
        self.index.insert(id.to_string(), idx);
        idx
    }

    /// Node indices from the search start to `idx`.
    pub fn chain(&self, idx: usize) -> Vec<usize> {
        let mut chain = Vec::new();
        let mut cursor = Some(idx);
        while let Some(current) = cursor {
            chain.push(current);
            cursor = self.nodes[current].parent;
        }
        chain.reverse();
        chain
    }

    pub fn path_to(&self, idx: usize) -> Path {
        let mut path = Path::new();
        for node in self.chain(idx) {
            let node = &self.nodes[node];
            path.push(node.parent_edge.clone(), node.vertex.clone());
        }
        path
    }
}

/// Relaxes the connections of `current`; returns without expanding when the
/// filter prunes it.
fn settle(
    config: &TraversalConfig<'_>,
    arena: &mut NodeArena,
    heap: &mut BinaryHeap<MinEntry>,
    seq: &mut u64,
    current: usize,
) -> Result<(), TraversalError> {
    let datasource = config.datasource();
    arena.nodes[current].visited = true;
    let vertex = arena.nodes[current].vertex.clone();
    let path = arena.path_to(current);

    let decision = config.filter(&vertex, &path)?;
    if !decision.visit {
        arena.nodes[current].hidden = true;
    }
    if !decision.expand {
        return Ok(());
    }

    let base = arena.nodes[current].dist;
    for connection in config.expand(&vertex, &path)? {
        let neighbor = arena.node_for(datasource.vertex_id(&connection.vertex), &connection.vertex);
        if arena.nodes[neighbor].visited {
            continue;
        }
        let alt = base + config.edge_weight(&vertex, &connection.vertex, &connection.edge);
        if alt < arena.nodes[neighbor].dist {
            let node = &mut arena.nodes[neighbor];
            node.dist = alt;
            node.parent = Some(current);
            node.parent_edge = Some(connection.edge);
            heap.push(MinEntry {
                score: alt,
                seq: *seq,
                node: neighbor,
            });
            *seq += 1;
        }
    }
    Ok(())
}

fn seed(
    config: &TraversalConfig<'_>,
    arena: &mut NodeArena,
    heap: &mut BinaryHeap<MinEntry>,
    start: &Vertex,
) {
    let start_idx = arena.node_for(config.datasource().vertex_id(start), start);
    arena.nodes[start_idx].dist = 0.0;
    heap.push(MinEntry {
        score: 0.0,
        seq: 0,
        node: start_idx,
    });
}

/// Shortest path to a single end vertex. Once the end vertex is popped, every
/// vertex on the path from the start is visited in order.
#[derive(Default)]
pub struct DijkstraStrategy {
    arena: NodeArena,
}

impl DijkstraStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TraversalStrategy for DijkstraStrategy {
    fn requires_end_vertex(&self) -> bool {
        true
    }

    fn run(
        &mut self,
        config: &TraversalConfig<'_>,
        result: &mut TraversalResult,
        start: &Vertex,
        target: Option<&Target>,
    ) -> Result<(), TraversalError> {
        let end_id = target
            .ok_or_else(|| TraversalError::config("invalid end vertex specified for traversal"))?
            .single()?;
        let datasource = config.datasource();
        let mut guard = IterationGuard::new(config.max_iterations());
        let mut heap = BinaryHeap::new();
        let mut seq = 1;
        self.arena = NodeArena::default();
        seed(config, &mut self.arena, &mut heap, start);

        while let Some(entry) = heap.pop() {
            guard.tick()?;
            let current = entry.node;

            if datasource.vertex_id(&self.arena.nodes[current].vertex) == end_id {
                for idx in self.arena.chain(current) {
                    if self.arena.nodes[idx].hidden {
                        continue;
                    }
                    let path = self.arena.path_to(idx);
                    config.visit(result, &self.arena.nodes[idx].vertex, &path, None)?;
                }
                debug!(examined = guard.count(), "dijkstra reached end vertex");
                return Ok(());
            }

            if self.arena.nodes[current].visited {
                continue;
            }
            if self.arena.nodes[current].dist.is_infinite() {
                break;
            }
            settle(config, &mut self.arena, &mut heap, &mut seq, current)?;
        }

        debug!(examined = guard.count(), "dijkstra exhausted without reaching end vertex");
        Ok(())
    }
}

/// Dijkstra towards a set of end vertices. Each target is visited with its
/// shortest path as soon as it is popped; the search stops once all are found.
#[derive(Default)]
pub struct DijkstraMultiStrategy {
    arena: NodeArena,
}

impl DijkstraMultiStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TraversalStrategy for DijkstraMultiStrategy {
    fn requires_end_vertex(&self) -> bool {
        true
    }

    fn run(
        &mut self,
        config: &TraversalConfig<'_>,
        result: &mut TraversalResult,
        start: &Vertex,
        target: Option<&Target>,
    ) -> Result<(), TraversalError> {
        let target = target
            .ok_or_else(|| TraversalError::config("invalid end vertex specified for traversal"))?;
        let mut pending: AHashSet<&str> = target.as_ids().iter().map(String::as_str).collect();
        if pending.is_empty() {
            return Ok(());
        }

        let datasource = config.datasource();
        let mut guard = IterationGuard::new(config.max_iterations());
        let mut heap = BinaryHeap::new();
        let mut seq = 1;
        self.arena = NodeArena::default();
        seed(config, &mut self.arena, &mut heap, start);

        while let Some(entry) = heap.pop() {
            guard.tick()?;
            let current = entry.node;

            if pending.remove(datasource.vertex_id(&self.arena.nodes[current].vertex)) {
                let path = self.arena.path_to(current);
                config.visit(result, &self.arena.nodes[current].vertex, &path, None)?;
                if pending.is_empty() {
                    debug!(examined = guard.count(), "dijkstra reached every end vertex");
                    return Ok(());
                }
            }

            if self.arena.nodes[current].visited {
                continue;
            }
            if self.arena.nodes[current].dist.is_infinite() {
                break;
            }
            settle(config, &mut self.arena, &mut heap, &mut seq, current)?;
        }

        debug!(
            examined = guard.count(),
            unreached = pending.len(),
            "dijkstra exhausted before reaching every end vertex"
        );
        Ok(())
    }
}
