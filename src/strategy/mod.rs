//! Traversal algorithms. Every strategy is instantiated fresh for a single
//! `traverse` call and owns all of its per-call state.

mod astar;
mod breadth_first;
mod depth_first;
mod dijkstra;
mod heap;

use tracing::warn;

pub use astar::AStarStrategy;
pub use breadth_first::BreadthFirstStrategy;
pub use depth_first::DepthFirstStrategy;
pub use dijkstra::{DijkstraMultiStrategy, DijkstraStrategy};

use crate::{
    config::{Strategy, TraversalConfig},
    errors::TraversalError,
    graph::{Edge, Vertex},
    path::Path,
    result::TraversalResult,
    uniqueness::UniquenessTracker,
};

/// End vertex (or vertices) for the shortest-path strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    ids: Vec<String>,
}

impl Target {
    pub fn vertex(vertex: &Vertex) -> Self {
        Self::id(vertex.id.clone())
    }

    pub fn id(id: impl Into<String>) -> Self {
        Self {
            ids: vec![id.into()],
        }
    }

    pub fn ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn as_ids(&self) -> &[String] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The only id, for strategies searching towards a single vertex.
    pub fn single(&self) -> Result<&str, TraversalError> {
        match self.ids.as_slice() {
            [id] => Ok(id),
            _ => Err(TraversalError::config("invalid end vertex specified for traversal")),
        }
    }
}

pub trait TraversalStrategy {
    fn requires_end_vertex(&self) -> bool {
        false
    }

    fn run(
        &mut self,
        config: &TraversalConfig<'_>,
        result: &mut TraversalResult,
        start: &Vertex,
        target: Option<&Target>,
    ) -> Result<(), TraversalError>;
}

/// A new, empty strategy instance for `strategy`.
pub fn create(strategy: Strategy) -> Box<dyn TraversalStrategy> {
    match strategy {
        Strategy::DepthFirst => Box::new(DepthFirstStrategy::new()),
        Strategy::BreadthFirst => Box::new(BreadthFirstStrategy::new()),
        Strategy::Dijkstra => Box::new(DijkstraStrategy::new()),
        Strategy::DijkstraMulti => Box::new(DijkstraMultiStrategy::new()),
        Strategy::AStar => Box::new(AStarStrategy::new()),
    }
}

/// Counts examined work items and fails once the configured ceiling is passed.
#[derive(Debug)]
pub(crate) struct IterationGuard {
    limit: u64,
    count: u64,
}

impl IterationGuard {
    pub fn new(limit: u64) -> Self {
        Self { limit, count: 0 }
    }

    pub fn tick(&mut self) -> Result<(), TraversalError> {
        self.count += 1;
        if self.count > self.limit {
            warn!(limit = self.limit, "traversal exceeded iteration ceiling");
            return Err(TraversalError::TooManyIterations { limit: self.limit });
        }
        Ok(())
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Uniqueness check for a candidate that already sits at the end of `path`.
/// Path-scoped sets are reloaded from everything before it.
pub(crate) fn admit_candidate(
    config: &TraversalConfig<'_>,
    tracker: &mut UniquenessTracker,
    path: &Path,
    vertex: &Vertex,
    edge: Option<&Edge>,
) -> bool {
    if !tracker.is_active() {
        return true;
    }
    let datasource = config.datasource();
    let ancestor_vertices = &path.vertices[..path.vertices.len().saturating_sub(1)];
    let ancestor_edges = match edge {
        Some(_) => &path.edges[..path.edges.len().saturating_sub(1)],
        None => &path.edges[..],
    };
    tracker.load_ancestors(
        ancestor_vertices.iter().map(|v| datasource.vertex_id(v)),
        ancestor_edges.iter().map(|e| datasource.edge_id(e)),
    );
    tracker.admit(
        datasource.vertex_id(vertex),
        edge.map(|e| datasource.edge_id(e)),
    )
}
