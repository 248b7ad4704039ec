use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::TraversalError;

/// A vertex document. Identified by `_id` (`collection/key`); all other
/// attributes are store-defined and carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vertex {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Vertex {
    /// Builds a vertex from its id and an attribute object. A non-object
    /// payload is stored under the `value` attribute.
    pub fn new(id: impl Into<String>, attributes: Value) -> Self {
        let id = id.into();
        Self {
            key: key_of(&id).to_string(),
            id,
            attributes: into_object(attributes, VERTEX_SYSTEM_ATTRIBUTES),
        }
    }

    /// Cheap placeholder carrying only `_id`/`_key`, used when expanders are
    /// told not to load full documents.
    pub fn stub(id: impl Into<String>) -> Self {
        Self::new(id, Value::Null)
    }

    pub fn collection(&self) -> &str {
        collection_of(&self.id)
    }

    pub fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "_id" => Some(Value::String(self.id.clone())),
            "_key" => Some(Value::String(self.key.clone())),
            _ => self.attributes.get(name).cloned(),
        }
    }

    pub fn attribute_equals(&self, name: &str, expected: &Value) -> bool {
        match name {
            "_id" => expected.as_str() == Some(self.id.as_str()),
            "_key" => expected.as_str() == Some(self.key.as_str()),
            _ => self.attributes.get(name) == Some(expected),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_from")]
    pub from: String,
    #[serde(rename = "_to")]
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        attributes: Value,
    ) -> Self {
        let id = id.into();
        Self {
            key: key_of(&id).to_string(),
            id,
            from: from.into(),
            to: to.into(),
            label: None,
            attributes: into_object(attributes, EDGE_SYSTEM_ATTRIBUTES),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn collection(&self) -> &str {
        collection_of(&self.id)
    }

    /// Numeric attribute lookup used by the weighted strategies.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.attributes.get(name).and_then(Value::as_f64)
    }

    pub fn touches(&self, vertex_id: &str) -> bool {
        self.from == vertex_id || self.to == vertex_id
    }
}

/// One relation of a named graph: edges stored in `collection` connect
/// vertices of the `from` collections to vertices of the `to` collections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EdgeDefinition {
    pub collection: String,
    pub from: Vec<String>,
    pub to: Vec<String>,
}

impl EdgeDefinition {
    pub fn new(collection: &str, from: &[&str], to: &[&str]) -> Self {
        Self {
            collection: collection.to_string(),
            from: from.iter().map(|c| c.to_string()).collect(),
            to: to.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphDefinition {
    pub name: String,
    pub edge_definitions: Vec<EdgeDefinition>,
}

impl GraphDefinition {
    pub fn new(name: &str, edge_definitions: Vec<EdgeDefinition>) -> Self {
        Self {
            name: name.to_string(),
            edge_definitions,
        }
    }

    /// Edge collections in definition order, without duplicates.
    pub fn edge_collections(&self) -> Vec<&str> {
        let mut collections: Vec<&str> = Vec::with_capacity(self.edge_definitions.len());
        for def in &self.edge_definitions {
            if !collections.contains(&def.collection.as_str()) {
                collections.push(def.collection.as_str());
            }
        }
        collections
    }
}

pub fn key_of(id: &str) -> &str {
    id.split_once('/').map(|(_, key)| key).unwrap_or(id)
}

pub fn collection_of(id: &str) -> &str {
    id.split_once('/').map(|(collection, _)| collection).unwrap_or("")
}

pub fn validate_document_id(id: &str) -> Result<(), TraversalError> {
    match id.split_once('/') {
        Some((collection, key))
            if !collection.trim().is_empty() && !key.trim().is_empty() && !key.contains('/') =>
        {
            Ok(())
        }
        _ => Err(TraversalError::invalid_input(format!(
            "document id must look like 'collection/key', got '{id}'"
        ))),
    }
}

pub fn validate_vertex(vertex: &Vertex) -> Result<(), TraversalError> {
    validate_document_id(&vertex.id)?;
    if key_of(&vertex.id) != vertex.key {
        return Err(TraversalError::invalid_input(format!(
            "vertex key '{}' does not match id '{}'",
            vertex.key, vertex.id
        )));
    }
    Ok(())
}

pub fn validate_edge(edge: &Edge) -> Result<(), TraversalError> {
    validate_document_id(&edge.id)?;
    validate_document_id(&edge.from)?;
    validate_document_id(&edge.to)?;
    if let Some(label) = &edge.label {
        if label.trim().is_empty() {
            return Err(TraversalError::invalid_input("edge label must not be blank"));
        }
    }
    Ok(())
}

pub fn validate_graph(definition: &GraphDefinition) -> Result<(), TraversalError> {
    if definition.name.trim().is_empty() {
        return Err(TraversalError::invalid_input("graph name must be set"));
    }
    if definition.edge_definitions.is_empty() {
        return Err(TraversalError::invalid_input(
            "graph needs at least one edge definition",
        ));
    }
    for def in &definition.edge_definitions {
        if def.collection.trim().is_empty() || def.from.is_empty() || def.to.is_empty() {
            return Err(TraversalError::invalid_input(format!(
                "incomplete edge definition in graph '{}'",
                definition.name
            )));
        }
    }
    Ok(())
}

pub fn row_to_vertex(row: &rusqlite::Row<'_>) -> Result<Vertex, rusqlite::Error> {
    let id: String = row.get(0)?;
    let data: String = row.get(1)?;
    let value = parse_data(&data)?;
    Ok(Vertex::new(id, value))
}

pub fn row_to_edge(row: &rusqlite::Row<'_>) -> Result<Edge, rusqlite::Error> {
    let id: String = row.get(0)?;
    let from: String = row.get(1)?;
    let to: String = row.get(2)?;
    let label: Option<String> = row.get(3)?;
    let data: String = row.get(4)?;
    let value = parse_data(&data)?;
    let mut edge = Edge::new(id, from, to, value);
    edge.label = label;
    Ok(edge)
}

fn parse_data(data: &str) -> Result<Value, rusqlite::Error> {
    serde_json::from_str(data).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            data.len(),
            rusqlite::types::Type::Text,
            Box::new(e),
        )
    })
}

const VERTEX_SYSTEM_ATTRIBUTES: &[&str] = &["_id", "_key"];
const EDGE_SYSTEM_ATTRIBUTES: &[&str] = &["_id", "_key", "_from", "_to", "label"];

/// Attribute object for a document. System attributes are carried by the
/// document fields and dropped here so they serialize once.
fn into_object(value: Value, system: &[&str]) -> Map<String, Value> {
    match value {
        Value::Object(mut map) => {
            map.retain(|key, _| !system.contains(&key.as_str()));
            map
        }
        Value::Null => Map::new(),
        other => {
            let mut map = Map::new();
            map.insert("value".to_string(), other);
            map
        }
    }
}
