//! Datasource capability trait consumed by expanders and strategies. The
//! traversal never writes through it; every method is a lookup against the
//! backing graph. Two store-backed realizations are provided: one over a single
//! edge collection and one over a named multi-collection graph.

use tracing::trace;

use crate::{
    errors::TraversalError,
    graph::{Direction, Edge, GraphDefinition, GraphStore, Vertex},
};

pub trait Datasource {
    /// Loads the full vertex document. Fails with `NotFound` for ids that do
    /// not resolve (dangling edge endpoints included).
    fn vertex(&self, id: &str) -> Result<Vertex, TraversalError>;
    fn out_edges(&self, vertex: &Vertex) -> Result<Vec<Edge>, TraversalError>;
    fn in_edges(&self, vertex: &Vertex) -> Result<Vec<Edge>, TraversalError>;

    fn all_edges(&self, vertex: &Vertex) -> Result<Vec<Edge>, TraversalError> {
        let mut edges = self.in_edges(vertex)?;
        edges.extend(self.out_edges(vertex)?);
        Ok(edges)
    }

    fn vertex_id<'v>(&self, vertex: &'v Vertex) -> &'v str {
        &vertex.id
    }

    fn edge_id<'e>(&self, edge: &'e Edge) -> &'e str {
        &edge.id
    }

    fn edge_from<'e>(&self, edge: &'e Edge) -> &'e str {
        &edge.from
    }

    fn edge_to<'e>(&self, edge: &'e Edge) -> &'e str {
        &edge.to
    }

    fn label<'e>(&self, edge: &'e Edge) -> Option<&'e str> {
        edge.label.as_deref()
    }

    /// Document the edge points to (`_to`).
    fn in_vertex(&self, edge: &Edge) -> Result<Vertex, TraversalError> {
        self.vertex(self.edge_to(edge))
    }

    /// Document the edge starts from (`_from`).
    fn out_vertex(&self, edge: &Edge) -> Result<Vertex, TraversalError> {
        self.vertex(self.edge_from(edge))
    }

    fn peer_vertex(&self, edge: &Edge, vertex: &Vertex) -> Result<Vertex, TraversalError> {
        let id = self.vertex_id(vertex);
        if self.edge_from(edge) == id {
            return self.in_vertex(edge);
        }
        if self.edge_to(edge) == id {
            return self.out_vertex(edge);
        }
        Err(TraversalError::invalid_input(format!(
            "edge {} does not touch vertex {id}",
            self.edge_id(edge)
        )))
    }

    fn edges(&self, vertex: &Vertex, direction: Direction) -> Result<Vec<Edge>, TraversalError> {
        match direction {
            Direction::Outbound => self.out_edges(vertex),
            Direction::Inbound => self.in_edges(vertex),
            Direction::Any => self.all_edges(vertex),
        }
    }
}

/// Datasource over one edge collection of a [`GraphStore`].
pub struct CollectionDatasource<'s> {
    store: &'s GraphStore,
    collection: String,
    use_index: bool,
}

impl<'s> CollectionDatasource<'s> {
    pub fn new(store: &'s GraphStore, edge_collection: &str) -> Self {
        Self {
            store,
            collection: edge_collection.to_string(),
            use_index: true,
        }
    }

    /// Bypasses the adjacency index and queries the store on every lookup.
    pub fn without_index(mut self) -> Self {
        self.use_index = false;
        self
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    fn lookup(&self, vertex: &Vertex, direction: Direction) -> Result<Vec<Edge>, TraversalError> {
        if self.use_index {
            self.store.edges(&self.collection, &vertex.id, direction)
        } else {
            self.store
                .edges_uncached(&self.collection, &vertex.id, direction)
        }
    }
}

impl Datasource for CollectionDatasource<'_> {
    fn vertex(&self, id: &str) -> Result<Vertex, TraversalError> {
        self.store.get_vertex(id)
    }

    fn out_edges(&self, vertex: &Vertex) -> Result<Vec<Edge>, TraversalError> {
        self.lookup(vertex, Direction::Outbound)
    }

    fn in_edges(&self, vertex: &Vertex) -> Result<Vec<Edge>, TraversalError> {
        self.lookup(vertex, Direction::Inbound)
    }

    fn all_edges(&self, vertex: &Vertex) -> Result<Vec<Edge>, TraversalError> {
        self.lookup(vertex, Direction::Any)
    }
}

/// Datasource over every edge collection of a named graph definition.
pub struct GraphDatasource<'s> {
    store: &'s GraphStore,
    definition: GraphDefinition,
}

impl<'s> GraphDatasource<'s> {
    pub fn open(store: &'s GraphStore, graph_name: &str) -> Result<Self, TraversalError> {
        let definition = store.graph_definition(graph_name)?;
        trace!(graph = graph_name, collections = ?definition.edge_collections(), "graph datasource opened");
        Ok(Self { store, definition })
    }

    pub fn definition(&self) -> &GraphDefinition {
        &self.definition
    }

    fn collect(&self, vertex: &Vertex, direction: Direction) -> Result<Vec<Edge>, TraversalError> {
        let mut edges = Vec::new();
        for collection in self.definition.edge_collections() {
            edges.extend(self.store.edges(collection, &vertex.id, direction)?);
        }
        Ok(edges)
    }
}

impl Datasource for GraphDatasource<'_> {
    fn vertex(&self, id: &str) -> Result<Vertex, TraversalError> {
        self.store.get_vertex(id)
    }

    fn out_edges(&self, vertex: &Vertex) -> Result<Vec<Edge>, TraversalError> {
        self.collect(vertex, Direction::Outbound)
    }

    fn in_edges(&self, vertex: &Vertex) -> Result<Vec<Edge>, TraversalError> {
        self.collect(vertex, Direction::Inbound)
    }

    fn all_edges(&self, vertex: &Vertex) -> Result<Vec<Edge>, TraversalError> {
        self.collect(vertex, Direction::Any)
    }
}

impl<D> Datasource for &D
where
    D: Datasource + ?Sized,
{
    fn vertex(&self, id: &str) -> Result<Vertex, TraversalError> {
        (**self).vertex(id)
    }

    fn out_edges(&self, vertex: &Vertex) -> Result<Vec<Edge>, TraversalError> {
        (**self).out_edges(vertex)
    }

    fn in_edges(&self, vertex: &Vertex) -> Result<Vec<Edge>, TraversalError> {
        (**self).in_edges(vertex)
    }

    fn all_edges(&self, vertex: &Vertex) -> Result<Vec<Edge>, TraversalError> {
        (**self).all_edges(vertex)
    }

    fn vertex_id<'v>(&self, vertex: &'v Vertex) -> &'v str {
        (**self).vertex_id(vertex)
    }

    fn edge_id<'e>(&self, edge: &'e Edge) -> &'e str {
        (**self).edge_id(edge)
    }

    fn edge_from<'e>(&self, edge: &'e Edge) -> &'e str {
        (**self).edge_from(edge)
    }

    fn edge_to<'e>(&self, edge: &'e Edge) -> &'e str {
        (**self).edge_to(edge)
    }

    fn label<'e>(&self, edge: &'e Edge) -> Option<&'e str> {
        (**self).label(edge)
    }

    fn in_vertex(&self, edge: &Edge) -> Result<Vertex, TraversalError> {
        (**self).in_vertex(edge)
    }

    fn out_vertex(&self, edge: &Edge) -> Result<Vertex, TraversalError> {
        (**self).out_vertex(edge)
    }

    fn peer_vertex(&self, edge: &Edge, vertex: &Vertex) -> Result<Vertex, TraversalError> {
        (**self).peer_vertex(edge, vertex)
    }
}
