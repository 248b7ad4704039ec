mod common;

use common::{EDGES, add_vertex, keys, letters_store, start, strs, vertex_id};
use graph_traverser::{
    CollectionDatasource, Datasource, Direction, Edge, EdgeDefinition, EdgeExpander,
    GraphDatasource, GraphDefinition, GraphStore, TraversalConfig, TraversalError,
    TraversalResult, Traverser, Uniqueness,
};
use serde_json::json;

fn letters_walk(
    expander: EdgeExpander,
    from: &str,
    vertices: Uniqueness,
    edges: Uniqueness,
) -> Vec<String> {
    let store = letters_store();
    let config = TraversalConfig::builder()
        .datasource(CollectionDatasource::new(&store, EDGES))
        .expander(expander)
        .uniqueness(vertices, edges)
        .sort(|left, right| left.key.cmp(&right.key))
        .build()
        .expect("config");
    let mut result = TraversalResult::tracking();
    Traverser::new(config)
        .traverse(&mut result, &start(&store, from), None)
        .expect("traverse");
    keys(&result)
}

#[test]
fn test_full_outbound_walk() {
    assert_eq!(
        letters_walk(
            EdgeExpander::outbound(),
            "A",
            Uniqueness::None,
            Uniqueness::Path
        ),
        strs(&["A", "B", "C", "D", "E", "F", "G", "H", "I", "H", "D", "E", "F"])
    );
}

#[test]
fn test_full_inbound_walk() {
    assert_eq!(
        letters_walk(
            EdgeExpander::inbound(),
            "F",
            Uniqueness::None,
            Uniqueness::Path
        ),
        strs(&["F", "D", "A", "C", "B", "A"])
    );
}

#[test]
fn test_global_vertex_uniqueness() {
    assert_eq!(
        letters_walk(
            EdgeExpander::outbound(),
            "A",
            Uniqueness::Global,
            Uniqueness::None
        ),
        strs(&["A", "B", "C", "D", "E", "F", "G", "H", "I"])
    );
}

#[test]
fn test_path_vertex_uniqueness_on_acyclic_graph() {
    assert_eq!(
        letters_walk(
            EdgeExpander::outbound(),
            "A",
            Uniqueness::Path,
            Uniqueness::None
        ),
        strs(&["A", "B", "C", "D", "E", "F", "G", "H", "I", "H", "D", "E", "F"])
    );
}

#[test]
fn test_global_edge_uniqueness() {
    assert_eq!(
        letters_walk(
            EdgeExpander::outbound(),
            "A",
            Uniqueness::None,
            Uniqueness::Global
        ),
        strs(&["A", "B", "C", "D", "E", "F", "G", "H", "I", "H", "D"])
    );
}

#[test]
fn test_path_uniqueness_on_cycles() {
    let store = GraphStore::open_in_memory().expect("store");
    for key in ["A", "B", "C"] {
        add_vertex(&store, key);
    }
    for (from, to) in [("A", "B"), ("B", "C"), ("C", "A"), ("B", "A")] {
        common::add_edge(&store, from, to);
    }
    let config = TraversalConfig::builder()
        .datasource(CollectionDatasource::new(&store, EDGES))
        .uniqueness(Uniqueness::Path, Uniqueness::None)
        .build()
        .expect("config");
    let mut result = TraversalResult::tracking();
    Traverser::new(config)
        .traverse(&mut result, &start(&store, "A"), None)
        .expect("traverse");
    assert_eq!(keys(&result), strs(&["A", "B", "C"]));
    for path in result.visited_paths() {
        let mut ids = path.vertex_ids();
        let len = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), len);
    }
}

#[test]
fn test_path_uniqueness_allows_same_vertex_on_sibling_paths() {
    let store = GraphStore::open_in_memory().expect("store");
    for key in ["A", "B", "C", "D"] {
        add_vertex(&store, key);
    }
    for (from, to) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")] {
        common::add_edge(&store, from, to);
    }
    let config = TraversalConfig::builder()
        .datasource(CollectionDatasource::new(&store, EDGES))
        .uniqueness(Uniqueness::Path, Uniqueness::Path)
        .build()
        .expect("config");
    let mut result = TraversalResult::tracking();
    Traverser::new(config)
        .traverse(&mut result, &start(&store, "A"), None)
        .expect("traverse");
    assert_eq!(
        result.path_ids(),
        vec![
            vec!["vertices/A"],
            vec!["vertices/A", "vertices/B"],
            vec!["vertices/A", "vertices/B", "vertices/D"],
            vec!["vertices/A", "vertices/C"],
            vec!["vertices/A", "vertices/C", "vertices/D"],
        ]
    );
}

#[test]
fn test_indexed_and_direct_lookups_agree() {
    let store = letters_store();
    let indexed = CollectionDatasource::new(&store, EDGES);
    let direct = CollectionDatasource::new(&store, EDGES).without_index();
    let d = store.get_vertex(&vertex_id("D")).expect("D");
    for direction in [Direction::Outbound, Direction::Inbound, Direction::Any] {
        assert_eq!(
            indexed.edges(&d, direction).expect("indexed"),
            direct.edges(&d, direction).expect("direct")
        );
    }
    let any: Vec<String> = indexed
        .all_edges(&d)
        .expect("any")
        .into_iter()
        .map(|e| e.key)
        .collect();
    assert_eq!(any, strs(&["CD", "AD", "DE", "DF"]));
    assert!(store.cached_adjacency_entries() > 0);
}

#[test]
fn test_peer_vertex_requires_touching_edge() {
    let store = letters_store();
    let source = CollectionDatasource::new(&store, EDGES);
    let edge = store.get_edge("edges/AB").expect("edge");
    let a = store.get_vertex(&vertex_id("A")).expect("A");
    let b = store.get_vertex(&vertex_id("B")).expect("B");
    let c = store.get_vertex(&vertex_id("C")).expect("C");
    assert_eq!(source.peer_vertex(&edge, &a).expect("peer").key, "B");
    assert_eq!(source.peer_vertex(&edge, &b).expect("peer").key, "A");
    assert!(matches!(
        source.peer_vertex(&edge, &c),
        Err(TraversalError::InvalidInput(_))
    ));
    assert_eq!(source.in_vertex(&edge).expect("in").key, "B");
    assert_eq!(source.out_vertex(&edge).expect("out").key, "A");
}

fn social_graph() -> GraphStore {
    let store = GraphStore::open_in_memory().expect("store");
    for id in ["users/ann", "users/ben", "users/cid"] {
        store
            .insert_vertex(&graph_traverser::Vertex::new(id, json!({})))
            .expect("user");
    }
    store
        .insert_vertex(&graph_traverser::Vertex::new("cities/oslo", json!({})))
        .expect("city");
    for (id, from, to) in [
        ("knows/1", "users/ann", "users/ben"),
        ("livesIn/1", "users/ann", "cities/oslo"),
        ("knows/2", "users/ben", "users/cid"),
        ("livesIn/2", "users/cid", "cities/oslo"),
    ] {
        store
            .insert_edge(&Edge::new(id, from, to, json!({})))
            .expect("edge");
    }
    store
        .save_graph(&GraphDefinition::new(
            "social",
            vec![
                EdgeDefinition::new("knows", &["users"], &["users"]),
                EdgeDefinition::new("livesIn", &["users"], &["cities"]),
            ],
        ))
        .expect("graph");
    store
}

#[test]
fn test_graph_datasource_spans_edge_collections() {
    let store = social_graph();
    let source = GraphDatasource::open(&store, "social").expect("graph");
    assert_eq!(source.definition().edge_collections(), vec!["knows", "livesIn"]);

    let config = TraversalConfig::builder()
        .datasource(source)
        .uniqueness(Uniqueness::Global, Uniqueness::None)
        .build()
        .expect("config");
    let mut result = TraversalResult::tracking();
    let ann = store.get_vertex("users/ann").expect("ann");
    Traverser::new(config)
        .traverse(&mut result, &ann, None)
        .expect("traverse");
    assert_eq!(
        result.vertex_ids(),
        vec!["users/ann", "users/ben", "users/cid", "cities/oslo"]
    );
}

#[test]
fn test_graph_datasource_inbound() {
    let store = social_graph();
    let source = GraphDatasource::open(&store, "social").expect("graph");
    let oslo = store.get_vertex("cities/oslo").expect("oslo");
    let edges: Vec<String> = source
        .in_edges(&oslo)
        .expect("in")
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(edges, vec!["livesIn/1", "livesIn/2"]);
    assert!(source.out_edges(&oslo).expect("out").is_empty());
}

#[test]
fn test_unknown_graph_is_not_found() {
    let store = social_graph();
    assert!(matches!(
        GraphDatasource::open(&store, "missing"),
        Err(TraversalError::NotFound(_))
    ));
}
