use ahash::AHashMap;
use tracing::debug;

use super::{IterationGuard, Target, TraversalStrategy, heap::IndexedMinHeap};
use crate::{
    config::{Order, TraversalConfig},
    errors::TraversalError,
    graph::{Edge, Vertex},
    path::Path,
    result::TraversalResult,
};

#[derive(Debug)]
struct AStarNode {
    vertex: Vertex,
    g: f64,
    f: f64,
    opened: bool,
    closed: bool,
    hidden: bool,
    parent: Option<usize>,
    parent_edge: Option<Edge>,
}

/// A* towards a single end vertex. `g` accumulates edge weights from the
/// `weight`/`defaultWeight` attributes (1 per edge otherwise); `h` comes from
/// the `distance` callback measured against the end vertex, or is the
/// constant 1 when no callback is configured, so the result is only
/// guaranteed shortest for unit weights.
#[derive(Default)]
pub struct AStarStrategy {
    nodes: Vec<AStarNode>,
    index: AHashMap<String, usize>,
}

impl AStarStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    fn node_for(&mut self, id: &str, vertex: &Vertex) -> usize {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(AStarNode {
            vertex: vertex.clone(),
            g: 0.0,
            f: 0.0,
            opened: false,
            closed: false,
            hidden: false,
            parent: None,
            parent_edge: None,
        });
        self.index.insert(id.to_string(), idx);
        idx
    }

    fn chain(&self, idx: usize) -> Vec<usize> {
        let mut chain = Vec::new();
        let mut cursor = Some(idx);
        while let Some(current) = cursor {
            chain.push(current);
            cursor = self.nodes[current].parent;
        }
        chain.reverse();
        chain
    }

    fn path_to(&self, idx: usize) -> Path {
        let mut path = Path::new();
        for node in self.chain(idx) {
            let node = &self.nodes[node];
            path.push(node.parent_edge.clone(), node.vertex.clone());
        }
        path
    }

    fn report(
        &self,
        config: &TraversalConfig<'_>,
        result: &mut TraversalResult,
        end: usize,
    ) -> Result<(), TraversalError> {
        let mut chain = self.chain(end);
        if config.order() == Order::PreOrder {
            chain.reverse();
        }
        for idx in chain {
            if self.nodes[idx].hidden {
                continue;
            }
            let path = self.path_to(idx);
            config.visit(result, &self.nodes[idx].vertex, &path, None)?;
        }
        Ok(())
    }
}

impl TraversalStrategy for AStarStrategy {
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
        let mut heap = IndexedMinHeap::new();
        self.nodes.clear();
        self.index.clear();

        // The heuristic needs the end document; without a distance callback
        // it is never consulted.
        let end_vertex = match config.distance() {
            Some(_) => Some(datasource.vertex(end_id)?),
            None => None,
        };

        let start_idx = self.node_for(datasource.vertex_id(start), start);
        self.nodes[start_idx].opened = true;
        heap.push(start_idx, 0.0);

        while let Some(current) = heap.pop() {
            guard.tick()?;

            if datasource.vertex_id(&self.nodes[current].vertex) == end_id {
                self.report(config, result, current)?;
                debug!(examined = guard.count(), "a* reached end vertex");
                return Ok(());
            }

            self.nodes[current].closed = true;
            let vertex = self.nodes[current].vertex.clone();
            let path = self.path_to(current);
            let decision = config.filter(&vertex, &path)?;
            if !decision.visit {
                self.nodes[current].hidden = true;
            }
            if !decision.expand {
                continue;
            }

            let base = self.nodes[current].g;
            for connection in config.expand(&vertex, &path)? {
                let neighbor =
                    self.node_for(datasource.vertex_id(&connection.vertex), &connection.vertex);
                if self.nodes[neighbor].closed {
                    continue;
                }
                let g = base + config.attribute_weight(&connection.edge);
                if !g.is_finite() {
                    continue;
                }
                if self.nodes[neighbor].opened && g >= self.nodes[neighbor].g {
                    continue;
                }
                let h = match (config.distance(), &end_vertex) {
                    (Some(distance), Some(end)) => {
                        distance(config, &connection.vertex, end, &connection.edge)
                    }
                    _ => 1.0,
                };
                let node = &mut self.nodes[neighbor];
                node.parent = Some(current);
                node.parent_edge = Some(connection.edge);
                node.g = g;
                node.f = g + h;
                node.opened = true;
                heap.push(neighbor, node.f);
            }
        }

        debug!(examined = guard.count(), "a* exhausted without reaching end vertex");
        Ok(())
    }
}
