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

struct StackItem {
    edge: Option<Edge>,
    vertex: Vertex,
    /// `None` until first examined, then whether a post-order visit is owed.
    visit: Option<bool>,
}

/// Iterative depth-first walk. An item stays on the stack while its subtree
/// is explored and is popped on its second examination; the current path is
/// kept in step with the stack instead of being rebuilt per item.
#[derive(Default)]
pub struct DepthFirstStrategy {
    stack: Vec<StackItem>,
    path: Path,
}

impl DepthFirstStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TraversalStrategy for DepthFirstStrategy {
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

        self.stack.clear();
        self.path = Path::new();
        self.stack.push(StackItem {
            edge: None,
            vertex: start.clone(),
            visit: None,
        });

        while let Some(top) = self.stack.len().checked_sub(1) {
            guard.tick()?;

            if let Some(owed) = self.stack[top].visit {
                if order == Order::PostOrder && owed {
                    config.visit(result, &self.stack[top].vertex, &self.path, None)?;
                }
                self.stack.pop();
                self.path.pop();
                continue;
            }

            self.stack[top].visit = Some(false);
            let vertex = self.stack[top].vertex.clone();
            let edge = self.stack[top].edge.clone();
            self.path.push(edge.clone(), vertex.clone());

            if !admit_candidate(config, &mut tracker, &self.path, &vertex, edge.as_ref()) {
                self.stack.pop();
                self.path.pop();
                continue;
            }

            let decision = config.filter(&vertex, &self.path)?;
            if order == Order::PreOrder && decision.visit {
                config.visit(result, &vertex, &self.path, None)?;
            } else {
                self.stack[top].visit = Some(decision.visit);
            }

            if decision.expand {
                let mut connections = config.expand(&vertex, &self.path)?;
                if reverse {
                    connections.reverse();
                }
                if order == Order::PreOrderExpander && decision.visit {
                    config.visit(result, &vertex, &self.path, Some(connections.as_slice()))?;
                }
                self.stack
                    .extend(connections.into_iter().map(|connection| StackItem {
                        edge: Some(connection.edge),
                        vertex: connection.vertex,
                        visit: None,
                    }));
            } else if order == Order::PreOrderExpander && decision.visit {
                config.visit(result, &vertex, &self.path, Some(&[][..]))?;
            }
        }

        debug!(examined = guard.count(), "depth-first traversal finished");
        Ok(())
    }
}
