#![allow(dead_code)]

use graph_traverser::{
    Directive, Edge, GraphStore, Path, TraversalConfig, TraversalError, TraversalResult, Vertex,
};
use serde_json::json;

pub const VERTICES: &str = "vertices";
pub const EDGES: &str = "edges";

pub fn vertex_id(key: &str) -> String {
    format!("{VERTICES}/{key}")
}

pub fn add_vertex(store: &GraphStore, key: &str) -> Vertex {
    let vertex = Vertex::new(vertex_id(key), json!({ "name": key }));
    store.insert_vertex(&vertex).expect("vertex");
    vertex
}

pub fn add_edge(store: &GraphStore, from: &str, to: &str) -> Edge {
    add_edge_with(store, &format!("{from}x{to}"), from, to, json!({}))
}

pub fn add_edge_with(
    store: &GraphStore,
    key: &str,
    from: &str,
    to: &str,
    data: serde_json::Value,
) -> Edge {
    let edge = Edge::new(format!("{EDGES}/{key}"), vertex_id(from), vertex_id(to), data);
    store.insert_edge(&edge).expect("edge");
    edge
}

pub fn add_labeled_edge(store: &GraphStore, key: &str, from: &str, to: &str, label: &str) -> Edge {
    let edge = Edge::new(format!("{EDGES}/{key}"), vertex_id(from), vertex_id(to), json!({}))
        .with_label(label);
    store.insert_edge(&edge).expect("edge");
    edge
}

/// World → continents → countries. Insertion order fixes expansion order.
pub fn world_store() -> GraphStore {
    let store = GraphStore::open_in_memory().expect("store");
    let continents = [
        "Europe",
        "Asia",
        "America",
        "Australia",
        "Africa",
        "Antarctica",
    ];
    add_vertex(&store, "World");
    for continent in continents {
        add_vertex(&store, continent);
    }
    for country in ["DE", "FR", "GB", "IE", "CN", "JP", "TW", "US", "MX", "AU", "AN"] {
        add_vertex(&store, country);
    }
    for continent in continents {
        add_edge(&store, "World", continent);
    }
    for (continent, countries) in [
        ("Europe", &["DE", "FR", "GB", "IE"][..]),
        ("Asia", &["CN", "JP", "TW"][..]),
        ("America", &["US", "MX"][..]),
        ("Australia", &["AU"][..]),
        ("Antarctica", &["AN"][..]),
    ] {
        for country in countries {
            add_edge(&store, continent, country);
        }
    }
    store
}

/// Skips Antarctica and IE, never expands Africa.
pub fn world_filter(
    _config: &TraversalConfig<'_>,
    vertex: &Vertex,
    _path: &Path,
) -> Result<Directive, TraversalError> {
    match vertex.key.as_str() {
        "Antarctica" | "IE" => Ok(Directive::Exclude),
        "Africa" => Ok(Directive::Prune),
        _ => Ok(Directive::Visit),
    }
}

/// Who likes or hates whom; every edge carries a label.
pub fn people_store() -> GraphStore {
    let store = GraphStore::open_in_memory().expect("store");
    for name in ["Alice", "Bob", "Charly", "Diana", "Eric", "Frank"] {
        add_vertex(&store, name);
    }
    for (idx, (from, to, label)) in [
        ("Alice", "Bob", "likes"),
        ("Bob", "Alice", "likes"),
        ("Alice", "Diana", "hates"),
        ("Alice", "Eric", "hates"),
        ("Eric", "Alice", "hates"),
        ("Bob", "Charly", "likes"),
        ("Charly", "Diana", "hates"),
        ("Diana", "Charly", "hates"),
        ("Diana", "Alice", "likes"),
        ("Diana", "Eric", "likes"),
        ("Alice", "Frank", "l"),
        ("Frank", "Bob", "likes"),
    ]
    .into_iter()
    .enumerate()
    {
        add_labeled_edge(&store, &format!("e{idx}"), from, to, label);
    }
    store
}

/// A..I with edges keyed by their endpoints (`AB`, `BC`, ...).
pub fn letters_store() -> GraphStore {
    let store = GraphStore::open_in_memory().expect("store");
    for key in ["A", "B", "C", "D", "E", "F", "G", "H", "I"] {
        add_vertex(&store, key);
    }
    for pair in ["AB", "BC", "CD", "AD", "DE", "DF", "BG", "BI", "GH", "IH"] {
        let (from, to) = pair.split_at(1);
        add_edge_with(&store, pair, from, to, json!({}));
    }
    store
}

/// Weighted directed graph given as `(from, to, weight)` triples.
pub fn weighted_store(vertices: &[&str], edges: &[(&str, &str, f64)]) -> GraphStore {
    let store = GraphStore::open_in_memory().expect("store");
    for key in vertices {
        add_vertex(&store, key);
    }
    for (from, to, weight) in edges {
        add_edge_with(
            &store,
            &format!("{from}x{to}"),
            from,
            to,
            json!({ "weight": weight }),
        );
    }
    store
}

pub fn start(store: &GraphStore, key: &str) -> Vertex {
    store.get_vertex(&vertex_id(key)).expect("start vertex")
}

pub fn keys(result: &TraversalResult) -> Vec<String> {
    result
        .visited_vertices()
        .iter()
        .map(|v| v.key.clone())
        .collect()
}

pub fn path_keys(path: &Path) -> Vec<String> {
    path.vertices.iter().map(|v| v.key.clone()).collect()
}

pub fn edge_keys(path: &Path) -> Vec<String> {
    path.edges.iter().map(|e| e.key.clone()).collect()
}

pub fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
