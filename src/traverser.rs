use tracing::debug;

use crate::{
    config::TraversalConfig,
    errors::TraversalError,
    graph::Vertex,
    result::TraversalResult,
    strategy::{self, Target},
};

/// How a traversal call ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// A callback raised [`TraversalError::Aborted`]; the result holds
    /// whatever was gathered up to that point.
    Aborted(String),
}

impl Outcome {
    pub fn is_aborted(&self) -> bool {
        matches!(self, Outcome::Aborted(_))
    }
}

/// Runs traversals with one validated configuration. The traverser itself
/// holds no per-call state, so it can be reused for any number of calls.
#[derive(Clone, Debug)]
pub struct Traverser<'a> {
    config: TraversalConfig<'a>,
}

impl<'a> Traverser<'a> {
    pub fn new(config: TraversalConfig<'a>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TraversalConfig<'a> {
        &self.config
    }

    #[tracing::instrument(
        skip(self, result, start, target),
        fields(
            start = %start.id,
            strategy = ?self.config.strategy(),
            order = ?self.config.order(),
        )
    )]
    pub fn traverse(
        &self,
        result: &mut TraversalResult,
        start: &Vertex,
        target: Option<&Target>,
    ) -> Result<Outcome, TraversalError> {
        let mut strategy = strategy::create(self.config.strategy());

        if start.id.trim().is_empty() {
            return Err(TraversalError::config(
                "invalid startVertex specified for traversal",
            ));
        }
        if strategy.requires_end_vertex() {
            let blank = match target {
                Some(target) => target.as_ids().iter().any(|id| id.trim().is_empty()),
                None => true,
            };
            if blank {
                return Err(TraversalError::config(
                    "invalid end vertex specified for traversal",
                ));
            }
        }

        debug!("traversal started");
        match strategy.run(&self.config, result, start, target) {
            Ok(()) => {
                debug!("traversal completed");
                Ok(Outcome::Completed)
            }
            Err(TraversalError::Aborted(message)) => {
                debug!(%message, "traversal aborted by callback");
                Ok(Outcome::Aborted(message))
            }
            Err(err) => Err(err),
        }
    }
}
