//! Traversal configuration: every recognized option, validated and defaulted
//! once by [`TraversalConfigBuilder::build`]. The built config is immutable.
//!
//! String shorthands are accepted for the enumerations (`"depth-first"`,
//! `"PreOrderExpander"`, `"dijkstra_multi"`): case is ignored as are `-` and
//! `_`. A plain-data [`TraversalOptions`] can be loaded from JSON and applied
//! on top of a builder.

use std::{cmp::Ordering, fmt, rc::Rc, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    datasource::Datasource,
    errors::TraversalError,
    expander::{EdgeExpander, Expander},
    filter::{
        Directive, Filter, FilterChain, FilterDecision, MatchingAttributesFilter, MaxDepthFilter,
        MinDepthFilter,
    },
    graph::{Direction, Edge, Vertex},
    path::{Connection, Path},
    result::TraversalResult,
    visitor::{CountingVisitor, NoopVisitor, TrackingVisitor, Visitor},
};

pub const DEFAULT_MAX_ITERATIONS: u64 = 10_000_000;
pub const DEFAULT_MIN_DEPTH: u64 = 0;
pub const DEFAULT_MAX_DEPTH: u64 = 256;

/// When the visitor fires relative to a vertex's expansion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Order {
    #[default]
    PreOrder,
    PostOrder,
    /// Pre-order, and the visitor also receives the connection list.
    PreOrderExpander,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemOrder {
    #[default]
    Forward,
    Backward,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    #[default]
    DepthFirst,
    BreadthFirst,
    Dijkstra,
    DijkstraMulti,
    AStar,
}

impl Strategy {
    pub fn requires_end_vertex(self) -> bool {
        matches!(
            self,
            Strategy::Dijkstra | Strategy::DijkstraMulti | Strategy::AStar
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Uniqueness {
    #[default]
    None,
    Path,
    Global,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniquenessConfig {
    pub vertices: Uniqueness,
    pub edges: Uniqueness,
}

impl UniquenessConfig {
    pub fn new(vertices: Uniqueness, edges: Uniqueness) -> Self {
        Self { vertices, edges }
    }

    pub fn none() -> Self {
        Self::new(Uniqueness::None, Uniqueness::None)
    }
}

impl Default for UniquenessConfig {
    fn default() -> Self {
        Self::new(Uniqueness::None, Uniqueness::Path)
    }
}

fn shorthand(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '-' && *c != '_')
        .collect::<String>()
        .to_lowercase()
}

fn invalid_value(param: &str, raw: &str) -> TraversalError {
    TraversalError::config(format!("invalid value '{raw}' for {param}"))
}

impl FromStr for Order {
    type Err = TraversalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match shorthand(s).as_str() {
            "preorder" => Ok(Order::PreOrder),
            "postorder" => Ok(Order::PostOrder),
            "preorderexpander" => Ok(Order::PreOrderExpander),
            _ => Err(invalid_value("order", s)),
        }
    }
}

impl FromStr for ItemOrder {
    type Err = TraversalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match shorthand(s).as_str() {
            "forward" => Ok(ItemOrder::Forward),
            "backward" => Ok(ItemOrder::Backward),
            _ => Err(invalid_value("itemOrder", s)),
        }
    }
}

impl FromStr for Strategy {
    type Err = TraversalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match shorthand(s).as_str() {
            "depthfirst" => Ok(Strategy::DepthFirst),
            "breadthfirst" => Ok(Strategy::BreadthFirst),
            "dijkstra" => Ok(Strategy::Dijkstra),
            "dijkstramulti" => Ok(Strategy::DijkstraMulti),
            "astar" => Ok(Strategy::AStar),
            _ => Err(invalid_value("strategy", s)),
        }
    }
}

impl FromStr for Uniqueness {
    type Err = TraversalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match shorthand(s).as_str() {
            "none" => Ok(Uniqueness::None),
            "path" => Ok(Uniqueness::Path),
            "global" => Ok(Uniqueness::Global),
            _ => Err(invalid_value("uniqueness", s)),
        }
    }
}

impl FromStr for Direction {
    type Err = TraversalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match shorthand(s).as_str() {
            "outbound" => Ok(Direction::Outbound),
            "inbound" => Ok(Direction::Inbound),
            "any" => Ok(Direction::Any),
            _ => Err(invalid_value("direction", s)),
        }
    }
}

/// Resolves `outbound`, `inbound`, `any` and their `-with-labels` variants.
pub fn parse_expander(name: &str) -> Result<EdgeExpander, TraversalError> {
    let normalized = shorthand(name);
    let (direction, with_labels) = match normalized.strip_suffix("withlabels") {
        Some(direction) => (direction, true),
        None => (normalized.as_str(), false),
    };
    let direction = Direction::from_str(direction).map_err(|_| invalid_value("expander", name))?;
    Ok(EdgeExpander::new(direction, with_labels))
}

fn parse_visitor<'a>(name: &str) -> Result<Rc<dyn Visitor + 'a>, TraversalError> {
    match shorthand(name).as_str() {
        "tracking" => Ok(Rc::new(TrackingVisitor)),
        "counting" => Ok(Rc::new(CountingVisitor)),
        "noop" | "nothing" | "donothing" => Ok(Rc::new(NoopVisitor)),
        _ => Err(invalid_value("visitor", name)),
    }
}

pub type SortFn<'a> = Rc<dyn Fn(&Edge, &Edge) -> Ordering + 'a>;
/// `(config, from, to, edge) -> weight` for Dijkstra; `(config, vertex, end,
/// edge) -> estimate` for A*.
pub type DistanceFn<'a> = Rc<dyn Fn(&TraversalConfig<'_>, &Vertex, &Vertex, &Edge) -> f64 + 'a>;
pub type ExpandFilterFn<'a> =
    Rc<dyn Fn(&TraversalConfig<'_>, &Vertex, &Edge, &Path) -> Result<bool, TraversalError> + 'a>;

#[derive(Clone)]
pub struct TraversalConfig<'a> {
    order: Order,
    item_order: ItemOrder,
    strategy: Strategy,
    uniqueness: UniquenessConfig,
    visitor: Rc<dyn Visitor + 'a>,
    filter: FilterChain<'a>,
    expander: Rc<dyn Expander + 'a>,
    datasource: Rc<dyn Datasource + 'a>,
    max_iterations: u64,
    min_depth: u64,
    max_depth: u64,
    build_vertices: bool,
    distance: Option<DistanceFn<'a>>,
    weight: Option<String>,
    default_weight: Option<f64>,
    sort: Option<SortFn<'a>>,
    expand_filter: Option<ExpandFilterFn<'a>>,
    labels: Vec<String>,
    matching_attributes: Vec<Map<String, Value>>,
}

impl<'a> TraversalConfig<'a> {
    pub fn builder() -> TraversalConfigBuilder<'a> {
        TraversalConfigBuilder::new()
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn item_order(&self) -> ItemOrder {
        self.item_order
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn uniqueness(&self) -> UniquenessConfig {
        self.uniqueness
    }

    pub fn datasource(&self) -> &dyn Datasource {
        &*self.datasource
    }

    pub fn max_iterations(&self) -> u64 {
        self.max_iterations
    }

    pub fn min_depth(&self) -> u64 {
        self.min_depth
    }

    pub fn max_depth(&self) -> u64 {
        self.max_depth
    }

    pub fn build_vertices(&self) -> bool {
        self.build_vertices
    }

    pub fn weight_attribute(&self) -> Option<&str> {
        self.weight.as_deref()
    }

    pub fn default_weight(&self) -> Option<f64> {
        self.default_weight
    }

    pub fn distance(&self) -> Option<&DistanceFn<'a>> {
        self.distance.as_ref()
    }

    pub fn sort(&self) -> Option<&SortFn<'a>> {
        self.sort.as_ref()
    }

    pub fn expand_filter(&self) -> Option<&ExpandFilterFn<'a>> {
        self.expand_filter.as_ref()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn matching_attributes(&self) -> &[Map<String, Value>] {
        &self.matching_attributes
    }

    pub fn filter_count(&self) -> usize {
        self.filter.len()
    }

    /// Whether freshly discovered connections are walked in reverse so that
    /// each order/itemOrder/strategy combination reproduces the visit order
    /// of the matching recursive walk.
    pub fn reverse_connections(&self) -> bool {
        match self.order {
            Order::PostOrder => self.item_order == ItemOrder::Forward,
            Order::PreOrder | Order::PreOrderExpander => matches!(
                (self.item_order, self.strategy),
                (ItemOrder::Backward, Strategy::BreadthFirst)
                    | (ItemOrder::Forward, Strategy::DepthFirst)
            ),
        }
    }

    pub fn filter(&self, vertex: &Vertex, path: &Path) -> Result<FilterDecision, TraversalError> {
        self.filter.decide(self, vertex, path)
    }

    pub fn visit(
        &self,
        result: &mut TraversalResult,
        vertex: &Vertex,
        path: &Path,
        connections: Option<&[Connection]>,
    ) -> Result<(), TraversalError> {
        self.visitor.visit(self, result, vertex, path, connections)
    }

    pub fn expand(&self, vertex: &Vertex, path: &Path) -> Result<Vec<Connection>, TraversalError> {
        self.expander.expand(self, vertex, path)
    }

    /// Weight of an edge read from the configured attribute: the numeric
    /// attribute, else `default_weight`, else infinity. Without a weight
    /// attribute every edge weighs 1.
    pub fn attribute_weight(&self, edge: &Edge) -> f64 {
        match &self.weight {
            Some(attribute) => edge
                .number(attribute)
                .or(self.default_weight)
                .unwrap_or(f64::INFINITY),
            None => 1.0,
        }
    }

    /// Cost of walking `edge` from `from` to `to`: the distance callback when
    /// set, else [`TraversalConfig::attribute_weight`].
    pub fn edge_weight(&self, from: &Vertex, to: &Vertex, edge: &Edge) -> f64 {
        match &self.distance {
            Some(distance) => distance(self, from, to, edge),
            None => self.attribute_weight(edge),
        }
    }

    /// Total weight of a reported path under the same model Dijkstra uses.
    pub fn path_weight(&self, path: &Path) -> f64 {
        path.edges
            .iter()
            .enumerate()
            .map(|(idx, edge)| match (path.vertices.get(idx), path.vertices.get(idx + 1)) {
                (Some(from), Some(to)) => self.edge_weight(from, to, edge),
                _ => f64::INFINITY,
            })
            .sum()
    }
}

impl fmt::Debug for TraversalConfig<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraversalConfig")
            .field("order", &self.order)
            .field("item_order", &self.item_order)
            .field("strategy", &self.strategy)
            .field("uniqueness", &self.uniqueness)
            .field("filters", &self.filter.len())
            .field("max_iterations", &self.max_iterations)
            .field("min_depth", &self.min_depth)
            .field("max_depth", &self.max_depth)
            .field("build_vertices", &self.build_vertices)
            .field("weight", &self.weight)
            .field("default_weight", &self.default_weight)
            .field("labels", &self.labels)
            .finish_non_exhaustive()
    }
}

pub struct TraversalConfigBuilder<'a> {
    order: Order,
    item_order: ItemOrder,
    strategy: Strategy,
    uniqueness: UniquenessConfig,
    visitor: Rc<dyn Visitor + 'a>,
    filters: Vec<Rc<dyn Filter + 'a>>,
    expander: Rc<dyn Expander + 'a>,
    datasource: Option<Rc<dyn Datasource + 'a>>,
    max_iterations: u64,
    min_depth: u64,
    max_depth: u64,
    build_vertices: bool,
    distance: Option<DistanceFn<'a>>,
    weight: Option<String>,
    default_weight: Option<f64>,
    sort: Option<SortFn<'a>>,
    expand_filter: Option<ExpandFilterFn<'a>>,
    labels: Vec<String>,
    matching_attributes: Vec<Map<String, Value>>,
}

impl Default for TraversalConfigBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TraversalConfigBuilder<'a> {
    pub fn new() -> Self {
        Self {
            order: Order::default(),
            item_order: ItemOrder::default(),
            strategy: Strategy::default(),
            uniqueness: UniquenessConfig::default(),
            visitor: Rc::new(TrackingVisitor),
            filters: Vec::new(),
            expander: Rc::new(EdgeExpander::outbound()),
            datasource: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            min_depth: DEFAULT_MIN_DEPTH,
            max_depth: DEFAULT_MAX_DEPTH,
            build_vertices: true,
            distance: None,
            weight: None,
            default_weight: None,
            sort: None,
            expand_filter: None,
            labels: Vec::new(),
            matching_attributes: Vec::new(),
        }
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    pub fn item_order(mut self, item_order: ItemOrder) -> Self {
        self.item_order = item_order;
        self
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn uniqueness(mut self, vertices: Uniqueness, edges: Uniqueness) -> Self {
        self.uniqueness = UniquenessConfig::new(vertices, edges);
        self
    }

    pub fn datasource(mut self, datasource: impl Datasource + 'a) -> Self {
        self.datasource = Some(Rc::new(datasource));
        self
    }

    pub fn visitor(mut self, visitor: impl Visitor + 'a) -> Self {
        self.visitor = Rc::new(visitor);
        self
    }

    pub fn visitor_fn<F>(self, visitor: F) -> Self
    where
        F: Fn(
                &TraversalConfig<'_>,
                &mut TraversalResult,
                &Vertex,
                &Path,
                Option<&[Connection]>,
            ) -> Result<(), TraversalError>
            + 'a,
    {
        self.visitor(visitor)
    }

    /// Appends a filter. Filters run in the order they were added, after the
    /// automatic depth filters.
    pub fn filter(mut self, filter: impl Filter + 'a) -> Self {
        self.filters.push(Rc::new(filter));
        self
    }

    pub fn filter_fn<F>(self, filter: F) -> Self
    where
        F: Fn(&TraversalConfig<'_>, &Vertex, &Path) -> Result<Directive, TraversalError> + 'a,
    {
        self.filter(filter)
    }

    pub fn expander(mut self, expander: impl Expander + 'a) -> Self {
        self.expander = Rc::new(expander);
        self
    }

    pub fn expander_fn<F>(self, expander: F) -> Self
    where
        F: Fn(&TraversalConfig<'_>, &Vertex, &Path) -> Result<Vec<Connection>, TraversalError>
            + 'a,
    {
        self.expander(expander)
    }

    pub fn max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn min_depth(mut self, min_depth: u64) -> Self {
        self.min_depth = min_depth;
        self
    }

    pub fn max_depth(mut self, max_depth: u64) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn build_vertices(mut self, build_vertices: bool) -> Self {
        self.build_vertices = build_vertices;
        self
    }

    pub fn distance<F>(mut self, distance: F) -> Self
    where
        F: Fn(&TraversalConfig<'_>, &Vertex, &Vertex, &Edge) -> f64 + 'a,
    {
        self.distance = Some(Rc::new(distance));
        self
    }

    pub fn weight(mut self, attribute: &str) -> Self {
        self.weight = Some(attribute.to_string());
        self
    }

    pub fn default_weight(mut self, weight: f64) -> Self {
        self.default_weight = Some(weight);
        self
    }

    pub fn sort<F>(mut self, sort: F) -> Self
    where
        F: Fn(&Edge, &Edge) -> Ordering + 'a,
    {
        self.sort = Some(Rc::new(sort));
        self
    }

    pub fn expand_filter<F>(mut self, expand_filter: F) -> Self
    where
        F: Fn(&TraversalConfig<'_>, &Vertex, &Edge, &Path) -> Result<bool, TraversalError> + 'a,
    {
        self.expand_filter = Some(Rc::new(expand_filter));
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.labels = vec![label.to_string()];
        self
    }

    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Example objects for [`MatchingAttributesFilter`]. A single object is
    /// treated as a one-element list.
    pub fn matching_attributes(mut self, examples: Value) -> Result<Self, TraversalError> {
        self.matching_attributes = examples_from_value(examples)?;
        Ok(self)
    }

    pub fn order_name(self, name: &str) -> Result<Self, TraversalError> {
        Ok(self.order(name.parse()?))
    }

    pub fn item_order_name(self, name: &str) -> Result<Self, TraversalError> {
        Ok(self.item_order(name.parse()?))
    }

    pub fn strategy_name(self, name: &str) -> Result<Self, TraversalError> {
        Ok(self.strategy(name.parse()?))
    }

    pub fn uniqueness_names(self, vertices: &str, edges: &str) -> Result<Self, TraversalError> {
        Ok(self.uniqueness(vertices.parse()?, edges.parse()?))
    }

    pub fn expander_name(self, name: &str) -> Result<Self, TraversalError> {
        Ok(self.expander(parse_expander(name)?))
    }

    pub fn visitor_name(mut self, name: &str) -> Result<Self, TraversalError> {
        self.visitor = parse_visitor(name)?;
        Ok(self)
    }

    /// Applies every option that is set. Options carrying `matchingAttributes`
    /// also enable the [`MatchingAttributesFilter`].
    pub fn options(mut self, options: &TraversalOptions) -> Result<Self, TraversalError> {
        if let Some(order) = &options.order {
            self = self.order_name(order)?;
        }
        if let Some(item_order) = &options.item_order {
            self = self.item_order_name(item_order)?;
        }
        if let Some(strategy) = &options.strategy {
            self = self.strategy_name(strategy)?;
        }
        if let Some(uniqueness) = &options.uniqueness {
            let defaults = UniquenessConfig::default();
            let vertices = match &uniqueness.vertices {
                Some(raw) => raw.parse()?,
                None => defaults.vertices,
            };
            let edges = match &uniqueness.edges {
                Some(raw) => raw.parse()?,
                None => defaults.edges,
            };
            self = self.uniqueness(vertices, edges);
        }
        if let Some(visitor) = &options.visitor {
            self = self.visitor_name(visitor)?;
        }
        if let Some(expander) = &options.expander {
            self = self.expander_name(expander)?;
        }
        if let Some(max_iterations) = options.max_iterations {
            self = self.max_iterations(max_iterations);
        }
        if let Some(min_depth) = options.min_depth {
            self = self.min_depth(min_depth);
        }
        if let Some(max_depth) = options.max_depth {
            self = self.max_depth(max_depth);
        }
        if let Some(build_vertices) = options.build_vertices {
            self = self.build_vertices(build_vertices);
        }
        if let Some(weight) = &options.weight {
            self = self.weight(weight);
        }
        if let Some(default_weight) = options.default_weight {
            self = self.default_weight(default_weight);
        }
        if let Some(labels) = &options.labels {
            self = self.labels(labels.clone().into_vec());
        }
        if let Some(examples) = &options.matching_attributes {
            self.matching_attributes = examples.clone().into_vec();
            self = self.filter(MatchingAttributesFilter);
        }
        Ok(self)
    }

    pub fn build(self) -> Result<TraversalConfig<'a>, TraversalError> {
        let datasource = self
            .datasource
            .ok_or_else(|| TraversalError::config("invalid datasource"))?;
        if self.max_iterations == 0 {
            return Err(TraversalError::config("maxIterations must be positive"));
        }
        if let Some(weight) = &self.weight {
            if weight.trim().is_empty() {
                return Err(TraversalError::config("weight attribute must not be blank"));
            }
        }
        if let Some(default_weight) = self.default_weight {
            if default_weight.is_nan() || default_weight < 0.0 {
                return Err(TraversalError::config(
                    "defaultWeight must be a non-negative number",
                ));
            }
        }
        if self.expander.requires_labels() && self.labels.is_empty() {
            return Err(TraversalError::config(
                "label-restricted expander needs at least one label",
            ));
        }

        let mut filters: Vec<Rc<dyn Filter + 'a>> = Vec::with_capacity(self.filters.len() + 2);
        if self.min_depth > 0 {
            filters.push(Rc::new(MinDepthFilter));
        }
        if self.max_depth > 0 {
            filters.push(Rc::new(MaxDepthFilter));
        }
        filters.extend(self.filters);

        Ok(TraversalConfig {
            order: self.order,
            item_order: self.item_order,
            strategy: self.strategy,
            uniqueness: self.uniqueness,
            visitor: self.visitor,
            filter: FilterChain::new(filters),
            expander: self.expander,
            datasource,
            max_iterations: self.max_iterations,
            min_depth: self.min_depth,
            max_depth: self.max_depth,
            build_vertices: self.build_vertices,
            distance: self.distance,
            weight: self.weight,
            default_weight: self.default_weight,
            sort: self.sort,
            expand_filter: self.expand_filter,
            labels: self.labels,
            matching_attributes: self.matching_attributes,
        })
    }
}

/// A single value or a list of them; JSON configs may use either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UniquenessOptions {
    pub vertices: Option<String>,
    pub edges: Option<String>,
}

/// Plain-data traversal options, e.g. loaded from JSON. Unset fields keep the
/// builder's current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TraversalOptions {
    pub order: Option<String>,
    pub item_order: Option<String>,
    pub strategy: Option<String>,
    pub uniqueness: Option<UniquenessOptions>,
    pub visitor: Option<String>,
    pub expander: Option<String>,
    pub max_iterations: Option<u64>,
    pub min_depth: Option<u64>,
    pub max_depth: Option<u64>,
    pub build_vertices: Option<bool>,
    pub weight: Option<String>,
    pub default_weight: Option<f64>,
    pub labels: Option<OneOrMany<String>>,
    pub matching_attributes: Option<OneOrMany<Map<String, Value>>>,
}

impl TraversalOptions {
    pub fn from_json(raw: &str) -> Result<Self, TraversalError> {
        serde_json::from_str(raw).map_err(|e| TraversalError::config(e.to_string()))
    }
}

fn examples_from_value(value: Value) -> Result<Vec<Map<String, Value>>, TraversalError> {
    match value {
        Value::Object(example) => Ok(vec![example]),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(example) => Ok(example),
                other => Err(TraversalError::config(format!(
                    "matchingAttributes entries must be objects, got {other}"
                ))),
            })
            .collect(),
        other => Err(TraversalError::config(format!(
            "matchingAttributes must be an object or a list of objects, got {other}"
        ))),
    }
}
