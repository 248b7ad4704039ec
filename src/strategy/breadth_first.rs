use tracing::debug;

use super::{IterationGuard, Target, TraversalStrategy, admit_candidate};
use crate::{
    config::{Order, TraversalConfig},
    errors::TraversalError,
    graph::{Edge, Vertex},
    path::Path,
    result::TraversalResult,
    uniqueness::UniquenessTracker,
};

struct QueueItem {
    edge: Option<Edge>,
    vertex: Vertex,
    parent: Option<usize>,
    visit: Option<bool>,
}

/// Level-order walk over a growable list. Entries stay in the list after
/// being examined so any path can be rebuilt from parent indices, and a
/// backward pass over the same list delivers post-order visits.
#[derive(Default)]
pub struct BreadthFirstStrategy {
    items: Vec<QueueItem>,
}

impl BreadthFirstStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    fn path_to(&self, index: usize) -> Path {
        let mut chain = Vec::new();
        let mut cursor = Some(index);
        while let Some(idx) = cursor {
            chain.push(idx);
            cursor = self.items[idx].parent;
        }
        let mut path = Path::new();
        for idx in chain.into_iter().rev() {
            let item = &self.items[idx];
            path.push(item.edge.clone(), item.vertex.clone());
        }
        path
    }
}

impl TraversalStrategy for BreadthFirstStrategy {
    fn run(
        &mut self,
        config: &TraversalConfig<'_>,
        result: &mut TraversalResult,
        start: &Vertex,
        _target: Option<&Target>,
    ) -> Result<(), TraversalError> {
        let mut guard = IterationGuard::new(config.max_iterations());
        let mut tracker = UniquenessTracker::new(config.uniqueness());
        let reverse = config.reverse_connections();
        let order = config.order();

        self.items.clear();
        self.items.push(QueueItem {
            edge: None,
            vertex: start.clone(),
            parent: None,
            visit: None,
        });

        let mut index = 0;
        while index < self.items.len() {
            guard.tick()?;
            self.items[index].visit = Some(false);
            let path = self.path_to(index);
            let vertex = self.items[index].vertex.clone();
            let edge = self.items[index].edge.clone();

            if !admit_candidate(config, &mut tracker, &path, &vertex, edge.as_ref()) {
                index += 1;
                continue;
            }

            let decision = config.filter(&vertex, &path)?;
            if order == Order::PreOrder && decision.visit {
                config.visit(result, &vertex, &path, None)?;
            } else {
                self.items[index].visit = Some(decision.visit);
            }

            if decision.expand {
                let mut connections = config.expand(&vertex, &path)?;
                if reverse {
                    connections.reverse();
                }
                if order == Order::PreOrderExpander && decision.visit {
                    config.visit(result, &vertex, &path, Some(connections.as_slice()))?;
                }
                for connection in connections {
                    self.items.push(QueueItem {
                        edge: Some(connection.edge),
                        vertex: connection.vertex,
                        parent: Some(index),
                        visit: None,
                    });
                }
            } else if order == Order::PreOrderExpander && decision.visit {
                config.visit(result, &vertex, &path, Some(&[][..]))?;
            }
            index += 1;
        }

        if order == Order::PostOrder {
            for index in (0..self.items.len()).rev() {
                guard.tick()?;
                if self.items[index].visit == Some(true) {
                    let path = self.path_to(index);
                    config.visit(result, &self.items[index].vertex, &path, None)?;
                }
            }
        }

        debug!(
            examined = guard.count(),
            discovered = self.items.len(),
            "breadth-first traversal finished"
        );
        Ok(())
    }
}
