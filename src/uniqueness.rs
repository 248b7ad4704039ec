use ahash::AHashSet;

use crate::config::{Uniqueness, UniquenessConfig};

/// Per-call dedup state for the vertex and edge axes.
///
/// `Global` sets live for the whole call. `Path` sets are rebuilt from the
/// ancestors of the candidate before every check, so sibling branches never
/// see each other's marks.
#[derive(Debug)]
pub struct UniquenessTracker {
    config: UniquenessConfig,
    vertices: AHashSet<String>,
    edges: AHashSet<String>,
}

impl UniquenessTracker {
    pub fn new(config: UniquenessConfig) -> Self {
        Self {
            config,
            vertices: AHashSet::new(),
            edges: AHashSet::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.config.vertices != Uniqueness::None || self.config.edges != Uniqueness::None
    }

    /// Reloads the `Path`-scoped sets from the candidate's ancestors
    /// (the candidate itself must not be included).
    pub fn load_ancestors<'i>(
        &mut self,
        vertex_ids: impl IntoIterator<Item = &'i str>,
        edge_ids: impl IntoIterator<Item = &'i str>,
    ) {
        if self.config.vertices == Uniqueness::Path {
            self.vertices.clear();
            self.vertices.extend(vertex_ids.into_iter().map(str::to_string));
        }
        if self.config.edges == Uniqueness::Path {
            self.edges.clear();
            self.edges.extend(edge_ids.into_iter().map(str::to_string));
        }
    }

    /// Checks the candidate against both axes, marking what it passes.
    /// The edge axis is checked (and marked) before the vertex axis.
    pub fn admit(&mut self, vertex_id: &str, edge_id: Option<&str>) -> bool {
        if let Some(edge_id) = edge_id {
            if !admit_axis(self.config.edges, &mut self.edges, edge_id) {
                return false;
            }
        }
        admit_axis(self.config.vertices, &mut self.vertices, vertex_id)
    }
}

pub fn admit_axis(mode: Uniqueness, seen: &mut AHashSet<String>, id: &str) -> bool {
    match mode {
        Uniqueness::None => true,
        Uniqueness::Path | Uniqueness::Global => {
            if seen.contains(id) {
                return false;
            }
            seen.insert(id.to_string());
            true
        }
    }
}
