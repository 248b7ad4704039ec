//! Visit/expand filters and the directive algebra they share.
//!
//! A filter answers with a [`Directive`]; several filters are combined by
//! concatenating their raw directives and normalizing once. `Exclude`
//! anywhere suppresses the visit, `Prune` anywhere suppresses expansion.

use std::rc::Rc;

use serde_json::Value;

use crate::{config::TraversalConfig, errors::TraversalError, graph::Vertex, path::Path};

pub const EXCLUDE: &str = "exclude";
pub const PRUNE: &str = "prune";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Directive {
    /// Visit and expand.
    #[default]
    Visit,
    /// Do not visit, but still expand.
    Exclude,
    /// Visit, but do not expand.
    Prune,
    All(Vec<Directive>),
    /// Anything else a dynamic filter produced. Normalizing it fails.
    Unrecognized(String),
}

impl Directive {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" => Directive::Visit,
            EXCLUDE => Directive::Exclude,
            PRUNE => Directive::Prune,
            other => Directive::Unrecognized(other.to_string()),
        }
    }

    /// Reads a directive from JSON: `null`, a string, or a (nested) array.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Directive::Visit,
            Value::String(raw) => Directive::parse(raw),
            Value::Array(items) => Directive::All(items.iter().map(Directive::from_value).collect()),
            other => Directive::Unrecognized(other.to_string()),
        }
    }

    fn flatten_into(self, out: &mut Vec<Directive>) {
        match self {
            Directive::All(items) => out.extend(items),
            other => out.push(other),
        }
    }
}

impl From<&str> for Directive {
    fn from(raw: &str) -> Self {
        Directive::parse(raw)
    }
}

impl From<Vec<Directive>> for Directive {
    fn from(items: Vec<Directive>) -> Self {
        Directive::All(items)
    }
}

impl From<Option<Directive>> for Directive {
    fn from(directive: Option<Directive>) -> Self {
        directive.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterDecision {
    pub visit: bool,
    pub expand: bool,
}

impl Default for FilterDecision {
    fn default() -> Self {
        Self {
            visit: true,
            expand: true,
        }
    }
}

pub fn normalize(directive: &Directive) -> Result<FilterDecision, TraversalError> {
    let mut decision = FilterDecision::default();
    apply_directive(directive, &mut decision)?;
    Ok(decision)
}

fn apply_directive(
    directive: &Directive,
    decision: &mut FilterDecision,
) -> Result<(), TraversalError> {
    match directive {
        Directive::Visit => {}
        Directive::Exclude => decision.visit = false,
        Directive::Prune => decision.expand = false,
        Directive::All(items) => {
            for item in items {
                apply_directive(item, decision)?;
            }
        }
        Directive::Unrecognized(raw) => {
            return Err(TraversalError::MalformedFilterResult(raw.clone()));
        }
    }
    Ok(())
}

pub trait Filter {
    fn filter(
        &self,
        config: &TraversalConfig<'_>,
        vertex: &Vertex,
        path: &Path,
    ) -> Result<Directive, TraversalError>;
}

impl<F> Filter for F
where
    F: Fn(&TraversalConfig<'_>, &Vertex, &Path) -> Result<Directive, TraversalError>,
{
    fn filter(
        &self,
        config: &TraversalConfig<'_>,
        vertex: &Vertex,
        path: &Path,
    ) -> Result<Directive, TraversalError> {
        self(config, vertex, path)
    }
}

/// Visits and expands everything. Used when no filter is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisitAllFilter;

impl Filter for VisitAllFilter {
    fn filter(
        &self,
        _config: &TraversalConfig<'_>,
        _vertex: &Vertex,
        _path: &Path,
    ) -> Result<Directive, TraversalError> {
        Ok(Directive::Visit)
    }
}

/// Prunes once the path holds more than `max_depth` vertices.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxDepthFilter;

impl Filter for MaxDepthFilter {
    fn filter(
        &self,
        config: &TraversalConfig<'_>,
        _vertex: &Vertex,
        path: &Path,
    ) -> Result<Directive, TraversalError> {
        if path.len() as u64 > config.max_depth() {
            return Ok(Directive::Prune);
        }
        Ok(Directive::Visit)
    }
}

/// Excludes vertices while the path holds at most `min_depth` vertices.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinDepthFilter;

impl Filter for MinDepthFilter {
    fn filter(
        &self,
        config: &TraversalConfig<'_>,
        _vertex: &Vertex,
        path: &Path,
    ) -> Result<Directive, TraversalError> {
        if path.len() as u64 <= config.min_depth() {
            return Ok(Directive::Exclude);
        }
        Ok(Directive::Visit)
    }
}

/// Visits a vertex only when it equals every attribute of at least one of the
/// configured example objects. Empty examples never match.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchingAttributesFilter;

impl Filter for MatchingAttributesFilter {
    fn filter(
        &self,
        config: &TraversalConfig<'_>,
        vertex: &Vertex,
        _path: &Path,
    ) -> Result<Directive, TraversalError> {
        let include = config.matching_attributes().iter().any(|example| {
            !example.is_empty()
                && example
                    .iter()
                    .all(|(key, expected)| vertex.attribute_equals(key, expected))
        });
        if include {
            Ok(Directive::Visit)
        } else {
            Ok(Directive::Exclude)
        }
    }
}

/// The configured filters, applied in order and normalized together.
#[derive(Clone, Default)]
pub struct FilterChain<'a> {
    filters: Vec<Rc<dyn Filter + 'a>>,
}

impl<'a> FilterChain<'a> {
    pub fn new(filters: Vec<Rc<dyn Filter + 'a>>) -> Self {
        Self { filters }
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Runs every filter, concatenates the raw directives and normalizes once.
    pub fn combine(
        &self,
        config: &TraversalConfig<'_>,
        vertex: &Vertex,
        path: &Path,
    ) -> Result<Directive, TraversalError> {
        let mut collected = Vec::with_capacity(self.filters.len());
        for filter in &self.filters {
            filter
                .filter(config, vertex, path)?
                .flatten_into(&mut collected);
        }
        Ok(Directive::All(collected))
    }

    pub fn decide(
        &self,
        config: &TraversalConfig<'_>,
        vertex: &Vertex,
        path: &Path,
    ) -> Result<FilterDecision, TraversalError> {
        if self.filters.is_empty() {
            return Ok(FilterDecision::default());
        }
        normalize(&self.combine(config, vertex, path)?)
    }
}
