//! Configurable graph traversal engine.
//!
//! A [`Traverser`] walks a graph exposed through the [`Datasource`] trait with
//! one of five strategies (depth-first, breadth-first, Dijkstra, multi-target
//! Dijkstra, A*). What gets visited and expanded is decided by composable
//! [`Filter`]s, neighbours come from an [`Expander`], and results are recorded
//! by a [`Visitor`] into a caller-owned [`TraversalResult`].
//!
//! The bundled [`GraphStore`] keeps vertex and edge documents in SQLite and
//! backs the two built-in datasources. Run `cargo bench` for the criterion
//! traversal benchmarks.

pub mod cache;
pub mod config;
pub mod datasource;
pub mod errors;
pub mod expander;
pub mod filter;
pub mod graph;
pub mod path;
pub mod result;
pub mod schema;
pub mod strategy;
pub mod traverser;
pub mod uniqueness;
pub mod visitor;

pub use crate::config::{
    ItemOrder, Order, Strategy, TraversalConfig, TraversalConfigBuilder, TraversalOptions,
    Uniqueness, UniquenessConfig,
};
pub use crate::datasource::{CollectionDatasource, Datasource, GraphDatasource};
pub use crate::errors::{ABORT_MESSAGE, TraversalError};
pub use crate::expander::{EdgeExpander, Expander};
pub use crate::filter::{
    Directive, Filter, FilterDecision, MatchingAttributesFilter, MaxDepthFilter, MinDepthFilter,
    VisitAllFilter,
};
pub use crate::graph::{Direction, Edge, EdgeDefinition, GraphDefinition, GraphStore, Vertex};
pub use crate::path::{Connection, Path};
pub use crate::result::{TraversalResult, Visited};
pub use crate::strategy::Target;
pub use crate::traverser::{Outcome, Traverser};
pub use crate::visitor::{CountingVisitor, NoopVisitor, TrackingVisitor, Visitor};
