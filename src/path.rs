use serde::{Deserialize, Serialize};

use crate::graph::{Edge, Vertex};

/// Vertices and edges walked from the start vertex to the current one.
/// `vertices.len() == edges.len() + 1` whenever a path is handed out.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Path {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(vertex: Vertex) -> Self {
        Self {
            vertices: vec![vertex],
            edges: Vec::new(),
        }
    }

    /// Number of vertices on the path.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn last_vertex(&self) -> Option<&Vertex> {
        self.vertices.last()
    }

    pub fn vertex_ids(&self) -> Vec<&str> {
        self.vertices.iter().map(|v| v.id.as_str()).collect()
    }

    pub fn edge_ids(&self) -> Vec<&str> {
        self.edges.iter().map(|e| e.id.as_str()).collect()
    }

    pub(crate) fn push(&mut self, edge: Option<Edge>, vertex: Vertex) {
        if let Some(edge) = edge {
            self.edges.push(edge);
        }
        self.vertices.push(vertex);
    }

    pub(crate) fn pop(&mut self) {
        self.vertices.pop();
        if self.edges.len() >= self.vertices.len() && !self.edges.is_empty() {
            self.edges.pop();
        }
    }
}

/// One expansion candidate: the edge taken and the vertex it leads to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Connection {
    pub edge: Edge,
    pub vertex: Vertex,
}

impl Connection {
    pub fn new(edge: Edge, vertex: Vertex) -> Self {
        Self { edge, vertex }
    }
}
