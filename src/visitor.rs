use crate::{
    config::TraversalConfig, errors::TraversalError, graph::Vertex, path::Connection, path::Path,
    result::TraversalResult,
};

/// Called once per visited vertex. `connections` is only supplied in
/// pre-order-expander mode, where it holds the about-to-be-expanded
/// connections (possibly empty).
pub trait Visitor {
    fn visit(
        &self,
        config: &TraversalConfig<'_>,
        result: &mut TraversalResult,
        vertex: &Vertex,
        path: &Path,
        connections: Option<&[Connection]>,
    ) -> Result<(), TraversalError>;
}

impl<F> Visitor for F
where
    F: Fn(
        &TraversalConfig<'_>,
        &mut TraversalResult,
        &Vertex,
        &Path,
        Option<&[Connection]>,
    ) -> Result<(), TraversalError>,
{
    fn visit(
        &self,
        config: &TraversalConfig<'_>,
        result: &mut TraversalResult,
        vertex: &Vertex,
        path: &Path,
        connections: Option<&[Connection]>,
    ) -> Result<(), TraversalError> {
        self(config, result, vertex, path, connections)
    }
}

/// Copies the vertex and its path into whichever `result.visited` slots exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackingVisitor;

impl Visitor for TrackingVisitor {
    fn visit(
        &self,
        _config: &TraversalConfig<'_>,
        result: &mut TraversalResult,
        vertex: &Vertex,
        path: &Path,
        _connections: Option<&[Connection]>,
    ) -> Result<(), TraversalError> {
        let Some(visited) = result.visited.as_mut() else {
            return Ok(());
        };
        if let Some(vertices) = visited.vertices.as_mut() {
            vertices.push(vertex.clone());
        }
        if let Some(paths) = visited.paths.as_mut() {
            paths.push(path.clone());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CountingVisitor;

impl Visitor for CountingVisitor {
    fn visit(
        &self,
        _config: &TraversalConfig<'_>,
        result: &mut TraversalResult,
        _vertex: &Vertex,
        _path: &Path,
        _connections: Option<&[Connection]>,
    ) -> Result<(), TraversalError> {
        result.count += 1;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopVisitor;

impl Visitor for NoopVisitor {
    fn visit(
        &self,
        _config: &TraversalConfig<'_>,
        _result: &mut TraversalResult,
        _vertex: &Vertex,
        _path: &Path,
        _connections: Option<&[Connection]>,
    ) -> Result<(), TraversalError> {
        Ok(())
    }
}
