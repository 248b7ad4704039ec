mod common;

use common::{EDGES, keys, people_store, start, strs, world_store};
use graph_traverser::{
    CollectionDatasource, Direction, ItemOrder, Order, Strategy, TraversalConfig,
    TraversalError, TraversalOptions, TraversalResult, Traverser, Uniqueness, UniquenessConfig,
    config::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_ITERATIONS, parse_expander},
};

#[test]
fn test_enum_shorthands() {
    assert_eq!("depth-first".parse::<Strategy>().unwrap(), Strategy::DepthFirst);
    assert_eq!("BreadthFirst".parse::<Strategy>().unwrap(), Strategy::BreadthFirst);
    assert_eq!("dijkstra_multi".parse::<Strategy>().unwrap(), Strategy::DijkstraMulti);
    assert_eq!("A-Star".parse::<Strategy>().unwrap(), Strategy::AStar);
    assert_eq!("preorder-expander".parse::<Order>().unwrap(), Order::PreOrderExpander);
    assert_eq!("post_order".parse::<Order>().unwrap(), Order::PostOrder);
    assert_eq!("BACKWARD".parse::<ItemOrder>().unwrap(), ItemOrder::Backward);
    assert_eq!("global".parse::<Uniqueness>().unwrap(), Uniqueness::Global);
    assert_eq!("any".parse::<Direction>().unwrap(), Direction::Any);

    let err = "sideways".parse::<Strategy>().unwrap_err();
    assert!(matches!(err, TraversalError::Config(msg) if msg.contains("sideways")));
    assert!("unique".parse::<Uniqueness>().is_err());
}

#[test]
fn test_expander_names() {
    assert_eq!(parse_expander("outbound").unwrap().direction(), Direction::Outbound);
    let labeled = parse_expander("inbound-with-labels").unwrap();
    assert_eq!(labeled.direction(), Direction::Inbound);
    assert!(graph_traverser::Expander::requires_labels(&labeled));
    assert!(parse_expander("upward").is_err());
}

#[test]
fn test_defaults() {
    let store = world_store();
    let config = TraversalConfig::builder()
        .datasource(CollectionDatasource::new(&store, EDGES))
        .build()
        .expect("config");
    assert_eq!(config.strategy(), Strategy::DepthFirst);
    assert_eq!(config.order(), Order::PreOrder);
    assert_eq!(config.item_order(), ItemOrder::Forward);
    assert_eq!(
        config.uniqueness(),
        UniquenessConfig::new(Uniqueness::None, Uniqueness::Path)
    );
    assert_eq!(config.max_iterations(), DEFAULT_MAX_ITERATIONS);
    assert_eq!(config.max_iterations(), 10_000_000);
    assert_eq!(config.min_depth(), 0);
    assert_eq!(config.max_depth(), DEFAULT_MAX_DEPTH);
    assert!(config.build_vertices());
    assert_eq!(config.filter_count(), 1);
    assert!(config.weight_attribute().is_none());
}

#[test]
fn test_missing_datasource_is_config_error() {
    let err = TraversalConfig::builder().build().unwrap_err();
    assert!(matches!(err, TraversalError::Config(_)));
}

#[test]
fn test_invalid_numbers_are_rejected() {
    let store = world_store();
    let zero = TraversalConfig::builder()
        .datasource(CollectionDatasource::new(&store, EDGES))
        .max_iterations(0)
        .build();
    assert!(matches!(zero, Err(TraversalError::Config(_))));

    let negative = TraversalConfig::builder()
        .datasource(CollectionDatasource::new(&store, EDGES))
        .default_weight(-1.0)
        .build();
    assert!(matches!(negative, Err(TraversalError::Config(_))));
}

#[test]
fn test_reverse_connections_table() {
    let store = world_store();
    let reverse = |strategy: Strategy, order: Order, item_order: ItemOrder| {
        TraversalConfig::builder()
            .datasource(CollectionDatasource::new(&store, EDGES))
            .strategy(strategy)
            .order(order)
            .item_order(item_order)
            .build()
            .expect("config")
            .reverse_connections()
    };
    use ItemOrder::{Backward, Forward};
    use Order::{PostOrder, PreOrder, PreOrderExpander};
    use Strategy::{BreadthFirst, DepthFirst, Dijkstra};

    assert!(reverse(DepthFirst, PreOrder, Forward));
    assert!(!reverse(DepthFirst, PreOrder, Backward));
    assert!(!reverse(BreadthFirst, PreOrder, Forward));
    assert!(reverse(BreadthFirst, PreOrder, Backward));
    assert!(reverse(BreadthFirst, PreOrderExpander, Backward));
    assert!(reverse(DepthFirst, PostOrder, Forward));
    assert!(reverse(BreadthFirst, PostOrder, Forward));
    assert!(!reverse(DepthFirst, PostOrder, Backward));
    assert!(!reverse(Dijkstra, PreOrder, Forward));
}

#[test]
fn test_options_from_json() {
    let options = TraversalOptions::from_json(
        r#"{
            "strategy": "breadth-first",
            "order": "post-order",
            "itemOrder": "backward",
            "uniqueness": { "vertices": "global" },
            "expander": "any",
            "maxIterations": 500,
            "maxDepth": 3,
            "buildVertices": false,
            "weight": "cost",
            "defaultWeight": 2.5,
            "labels": "likes"
        }"#,
    )
    .expect("options");
    let store = world_store();
    let config = TraversalConfig::builder()
        .datasource(CollectionDatasource::new(&store, EDGES))
        .options(&options)
        .expect("apply")
        .build()
        .expect("config");
    assert_eq!(config.strategy(), Strategy::BreadthFirst);
    assert_eq!(config.order(), Order::PostOrder);
    assert_eq!(config.item_order(), ItemOrder::Backward);
    assert_eq!(
        config.uniqueness(),
        UniquenessConfig::new(Uniqueness::Global, Uniqueness::Path)
    );
    assert_eq!(config.max_iterations(), 500);
    assert_eq!(config.max_depth(), 3);
    assert!(!config.build_vertices());
    assert_eq!(config.weight_attribute(), Some("cost"));
    assert_eq!(config.default_weight(), Some(2.5));
    assert_eq!(config.labels(), ["likes".to_string()]);
}

#[test]
fn test_options_reject_unknown_fields_and_values() {
    let err = TraversalOptions::from_json(r#"{ "stratgy": "dijkstra" }"#).unwrap_err();
    assert!(matches!(err, TraversalError::Config(_)));

    let options = TraversalOptions::from_json(r#"{ "order": "in-order" }"#).expect("options");
    let err = TraversalConfig::builder().options(&options).err().expect("bad order");
    assert!(matches!(err, TraversalError::Config(_)));
}

#[test]
fn test_options_matching_attributes_enable_filter() {
    let options = TraversalOptions::from_json(
        r#"{
            "expander": "any",
            "uniqueness": { "vertices": "global", "edges": "none" },
            "matchingAttributes": [{ "name": "Alice" }, { "name": "Frank" }]
        }"#,
    )
    .expect("options");
    let store = people_store();
    let config = TraversalConfig::builder()
        .datasource(CollectionDatasource::new(&store, EDGES))
        .options(&options)
        .expect("apply")
        .build()
        .expect("config");
    let mut result = TraversalResult::tracking();
    Traverser::new(config)
        .traverse(&mut result, &start(&store, "Alice"), None)
        .expect("traverse");
    assert_eq!(keys(&result), strs(&["Alice", "Frank"]));
}

#[test]
fn test_named_visitor_and_label_expander_from_options() {
    let options = TraversalOptions::from_json(
        r#"{
            "expander": "outbound_with_labels",
            "labels": ["likes"],
            "visitor": "counting",
            "uniqueness": { "vertices": "global", "edges": "none" }
        }"#,
    )
    .expect("options");
    let store = people_store();
    let config = TraversalConfig::builder()
        .datasource(CollectionDatasource::new(&store, EDGES))
        .options(&options)
        .expect("apply")
        .build()
        .expect("config");
    let mut result = TraversalResult::new();
    Traverser::new(config)
        .traverse(&mut result, &start(&store, "Alice"), None)
        .expect("traverse");
    assert_eq!(result.count, 3);
}
