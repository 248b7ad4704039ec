//! Expanders turn "vertex + direction" into the list of connections a
//! strategy may walk next.

use tracing::trace;

use crate::{
    config::TraversalConfig,
    datasource::Datasource,
    errors::TraversalError,
    graph::{Direction, Edge, Vertex},
    path::{Connection, Path},
};

pub trait Expander {
    fn expand(
        &self,
        config: &TraversalConfig<'_>,
        vertex: &Vertex,
        path: &Path,
    ) -> Result<Vec<Connection>, TraversalError>;

    /// Whether the expander reads `labels` from the configuration.
    fn requires_labels(&self) -> bool {
        false
    }
}

impl<F> Expander for F
where
    F: Fn(&TraversalConfig<'_>, &Vertex, &Path) -> Result<Vec<Connection>, TraversalError>,
{
    fn expand(
        &self,
        config: &TraversalConfig<'_>,
        vertex: &Vertex,
        path: &Path,
    ) -> Result<Vec<Connection>, TraversalError> {
        self(config, vertex, path)
    }
}

/// Built-in expander following the edges of one direction, optionally
/// restricted to the configured labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeExpander {
    direction: Direction,
    with_labels: bool,
}

impl EdgeExpander {
    pub fn new(direction: Direction, with_labels: bool) -> Self {
        Self {
            direction,
            with_labels,
        }
    }

    pub fn outbound() -> Self {
        Self::new(Direction::Outbound, false)
    }

    pub fn inbound() -> Self {
        Self::new(Direction::Inbound, false)
    }

    pub fn any() -> Self {
        Self::new(Direction::Any, false)
    }

    pub fn outbound_with_labels() -> Self {
        Self::new(Direction::Outbound, true)
    }

    pub fn inbound_with_labels() -> Self {
        Self::new(Direction::Inbound, true)
    }

    pub fn any_with_labels() -> Self {
        Self::new(Direction::Any, true)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn peer(
        &self,
        config: &TraversalConfig<'_>,
        datasource: &dyn Datasource,
        edge: &Edge,
        vertex: &Vertex,
    ) -> Result<Vertex, TraversalError> {
        if !config.build_vertices() {
            let id = match self.direction {
                Direction::Outbound => datasource.edge_to(edge),
                Direction::Inbound => datasource.edge_from(edge),
                Direction::Any => {
                    if datasource.edge_from(edge) == datasource.vertex_id(vertex) {
                        datasource.edge_to(edge)
                    } else {
                        datasource.edge_from(edge)
                    }
                }
            };
            return Ok(Vertex::stub(id));
        }
        match self.direction {
            Direction::Outbound => datasource.in_vertex(edge),
            Direction::Inbound => datasource.out_vertex(edge),
            Direction::Any => datasource.peer_vertex(edge, vertex),
        }
    }
}

impl Expander for EdgeExpander {
    fn expand(
        &self,
        config: &TraversalConfig<'_>,
        vertex: &Vertex,
        path: &Path,
    ) -> Result<Vec<Connection>, TraversalError> {
        let datasource = config.datasource();
        let mut edges = datasource.edges(vertex, self.direction)?;
        if edges.len() > 1 {
            if let Some(sort) = config.sort() {
                edges.sort_by(|left, right| sort(left, right));
            }
        }

        let mut connections = Vec::with_capacity(edges.len());
        for edge in edges {
            if self.with_labels && !label_admitted(config, datasource.label(&edge)) {
                continue;
            }
            let peer = match self.peer(config, datasource, &edge, vertex) {
                Ok(peer) => peer,
                Err(err @ (TraversalError::NotFound(_) | TraversalError::InvalidInput(_))) => {
                    trace!(edge = %edge.id, error = %err, "skipping edge with unresolvable peer");
                    continue;
                }
                Err(err) => return Err(err),
            };
            if let Some(expand_filter) = config.expand_filter() {
                if !expand_filter(config, &peer, &edge, path)? {
                    continue;
                }
            }
            connections.push(Connection::new(edge, peer));
        }
        Ok(connections)
    }

    fn requires_labels(&self) -> bool {
        self.with_labels
    }
}

fn label_admitted(config: &TraversalConfig<'_>, label: Option<&str>) -> bool {
    match label {
        Some(label) => config.labels().iter().any(|allowed| allowed == label),
        None => false,
    }
}
