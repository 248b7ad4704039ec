use thiserror::Error;

pub const ABORT_MESSAGE: &str = "traversal intentionally aborted by user";

#[derive(Debug, Error)]
pub enum TraversalError {
    #[error("connection error: {0}")]
    ConnectionError(String),
    #[error("schema error: {0}")]
    SchemaError(String),
    #[error("query error: {0}")]
    QueryError(String),
    #[error("document not found: {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid traversal configuration: {0}")]
    Config(String),
    /// A filter produced something other than a directive. Counted as a
    /// configuration error, see [`TraversalError::is_config`].
    #[error("malformed filter result: {0}")]
    MalformedFilterResult(String),
    #[error("too many iterations (limit {limit})")]
    TooManyIterations { limit: u64 },
    /// Raised by a visitor, filter or expander to stop the traversal early.
    /// `Traverser::traverse` swallows it and returns the partial result.
    #[error("{0}")]
    Aborted(String),
    #[error("callback failed: {0}")]
    Callback(String),
}

impl TraversalError {
    pub fn connection<T: Into<String>>(msg: T) -> Self {
        TraversalError::ConnectionError(msg.into())
    }

    pub fn schema<T: Into<String>>(msg: T) -> Self {
        TraversalError::SchemaError(msg.into())
    }

    pub fn query<T: Into<String>>(msg: T) -> Self {
        TraversalError::QueryError(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        TraversalError::NotFound(msg.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        TraversalError::InvalidInput(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        TraversalError::Config(msg.into())
    }

    pub fn callback<T: Into<String>>(msg: T) -> Self {
        TraversalError::Callback(msg.into())
    }

    pub fn aborted() -> Self {
        TraversalError::Aborted(ABORT_MESSAGE.to_string())
    }

    pub fn aborted_with<T: Into<String>>(msg: T) -> Self {
        TraversalError::Aborted(msg.into())
    }

    /// Configuration errors, including malformed filter results.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            TraversalError::Config(_) | TraversalError::MalformedFilterResult(_)
        )
    }

    pub fn is_abort(&self) -> bool {
        matches!(self, TraversalError::Aborted(_))
    }
}
