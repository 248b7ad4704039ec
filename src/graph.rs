//! Embedded SQLite document store backing the built-in datasources.

mod types;

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

pub use types::{
    Edge, EdgeDefinition, GraphDefinition, Vertex, collection_of, key_of, validate_document_id,
};

use crate::{cache::AdjacencyCache, errors::TraversalError, schema::ensure_schema};
use types::{row_to_edge, row_to_vertex, validate_edge, validate_graph, validate_vertex};

const EDGE_COLUMNS: &str = "id, from_id, to_id, label, data";

/// Which edges of a vertex to enumerate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Outbound,
    Inbound,
    Any,
}

pub struct GraphStore {
    conn: Connection,
    outbound_cache: AdjacencyCache,
    inbound_cache: AdjacencyCache,
    any_cache: AdjacencyCache,
}

impl GraphStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, TraversalError> {
        let conn =
            Connection::open(path).map_err(|e| TraversalError::connection(e.to_string()))?;
        ensure_schema(&conn)?;
        Ok(Self::from_connection(conn))
    }

    pub fn open_in_memory() -> Result<Self, TraversalError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| TraversalError::connection(e.to_string()))?;
        ensure_schema(&conn)?;
        Ok(Self::from_connection(conn))
    }

    pub fn insert_vertex(&self, vertex: &Vertex) -> Result<String, TraversalError> {
        validate_vertex(vertex)?;
        let data = serde_json::to_string(&vertex.attributes)
            .map_err(|e| TraversalError::invalid_input(e.to_string()))?;
        self.conn
            .execute(
                "INSERT INTO graph_vertices(id, collection, data) VALUES(?1, ?2, ?3)",
                params![vertex.id.as_str(), vertex.collection(), data],
            )
            .map_err(|e| map_insert_error(e, &vertex.id))?;
        Ok(vertex.id.clone())
    }

    pub fn get_vertex(&self, id: &str) -> Result<Vertex, TraversalError> {
        self.conn
            .query_row(
                "SELECT id, data FROM graph_vertices WHERE id=?1",
                params![id],
                |row| row_to_vertex(row),
            )
            .map_err(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => {
                    TraversalError::not_found(format!("vertex {id}"))
                }
                other => TraversalError::query(other.to_string()),
            })
    }

    /// Removes the vertex together with every edge touching it.
    pub fn delete_vertex(&self, id: &str) -> Result<(), TraversalError> {
        let affected = self
            .conn
            .execute("DELETE FROM graph_vertices WHERE id=?1", params![id])
            .map_err(|e| TraversalError::query(e.to_string()))?;
        if affected == 0 {
            return Err(TraversalError::not_found(format!("vertex {id}")));
        }
        self.conn
            .execute(
                "DELETE FROM graph_edges WHERE from_id=?1 OR to_id=?1",
                params![id],
            )
            .map_err(|e| TraversalError::query(e.to_string()))?;
        self.invalidate_caches();
        Ok(())
    }

    /// Inserts an edge. Endpoints only need to be well-formed ids; they are
    /// not required to exist, so dangling edges can be stored.
    pub fn insert_edge(&self, edge: &Edge) -> Result<String, TraversalError> {
        validate_edge(edge)?;
        let data = serde_json::to_string(&edge.attributes)
            .map_err(|e| TraversalError::invalid_input(e.to_string()))?;
        self.conn
            .execute(
                "INSERT INTO graph_edges(id, collection, from_id, to_id, label, data) VALUES(?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    edge.id.as_str(),
                    edge.collection(),
                    edge.from.as_str(),
                    edge.to.as_str(),
                    edge.label.as_deref(),
                    data,
                ],
            )
            .map_err(|e| map_insert_error(e, &edge.id))?;
        self.invalidate_caches();
        Ok(edge.id.clone())
    }

    pub fn get_edge(&self, id: &str) -> Result<Edge, TraversalError> {
        self.conn
            .query_row(
                &format!("SELECT {EDGE_COLUMNS} FROM graph_edges WHERE id=?1"),
                params![id],
                |row| row_to_edge(row),
            )
            .map_err(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => {
                    TraversalError::not_found(format!("edge {id}"))
                }
                other => TraversalError::query(other.to_string()),
            })
    }

    pub fn delete_edge(&self, id: &str) -> Result<(), TraversalError> {
        let affected = self
            .conn
            .execute("DELETE FROM graph_edges WHERE id=?1", params![id])
            .map_err(|e| TraversalError::query(e.to_string()))?;
        if affected == 0 {
            return Err(TraversalError::not_found(format!("edge {id}")));
        }
        self.invalidate_caches();
        Ok(())
    }

    pub fn vertex_ids(&self) -> Result<Vec<String>, TraversalError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id FROM graph_vertices ORDER BY id")
            .map_err(|e| TraversalError::query(e.to_string()))?;
        let rows = stmt
            .query_map([], |row| row.get(0))
            .map_err(|e| TraversalError::query(e.to_string()))?;
        let mut ids = Vec::new();
        for id in rows {
            ids.push(id.map_err(|e| TraversalError::query(e.to_string()))?);
        }
        Ok(ids)
    }

    pub fn save_graph(&self, definition: &GraphDefinition) -> Result<(), TraversalError> {
        validate_graph(definition)?;
        let encoded = serde_json::to_string(definition)
            .map_err(|e| TraversalError::invalid_input(e.to_string()))?;
        self.conn
            .execute(
                "INSERT INTO graph_definitions(name, definition) VALUES(?1, ?2)",
                params![definition.name.as_str(), encoded],
            )
            .map_err(|e| map_insert_error(e, &definition.name))?;
        Ok(())
    }

    pub fn graph_definition(&self, name: &str) -> Result<GraphDefinition, TraversalError> {
        let encoded: Option<String> = self
            .conn
            .query_row(
                "SELECT definition FROM graph_definitions WHERE name=?1",
                params![name],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| TraversalError::query(e.to_string()))?;
        let encoded = encoded.ok_or_else(|| TraversalError::not_found(format!("graph {name}")))?;
        serde_json::from_str(&encoded).map_err(|e| TraversalError::query(e.to_string()))
    }

    pub fn drop_graph(&self, name: &str) -> Result<(), TraversalError> {
        let affected = self
            .conn
            .execute("DELETE FROM graph_definitions WHERE name=?1", params![name])
            .map_err(|e| TraversalError::query(e.to_string()))?;
        if affected == 0 {
            return Err(TraversalError::not_found(format!("graph {name}")));
        }
        Ok(())
    }
}

impl GraphStore {
    /// Edges of `vertex_id` inside one edge collection, served from the
    /// adjacency cache when possible. Order is insertion order within each
    /// direction.
    pub fn edges(
        &self,
        collection: &str,
        vertex_id: &str,
        direction: Direction,
    ) -> Result<Vec<Edge>, TraversalError> {
        let cache = match direction {
            Direction::Outbound => &self.outbound_cache,
            Direction::Inbound => &self.inbound_cache,
            Direction::Any => &self.any_cache,
        };
        if let Some(cached) = cache.get(collection, vertex_id) {
            return Ok(cached);
        }
        let result = self.edges_uncached(collection, vertex_id, direction)?;
        cache.insert(collection, vertex_id, result.clone());
        Ok(result)
    }

    pub fn outgoing(&self, collection: &str, vertex_id: &str) -> Result<Vec<Edge>, TraversalError> {
        self.edges(collection, vertex_id, Direction::Outbound)
    }

    pub fn incoming(&self, collection: &str, vertex_id: &str) -> Result<Vec<Edge>, TraversalError> {
        self.edges(collection, vertex_id, Direction::Inbound)
    }

    /// Edges in either direction, self loops reported once.
    pub fn touching(&self, collection: &str, vertex_id: &str) -> Result<Vec<Edge>, TraversalError> {
        self.edges(collection, vertex_id, Direction::Any)
    }

    /// Same as [`GraphStore::edges`] but always runs the query.
    pub fn edges_uncached(
        &self,
        collection: &str,
        vertex_id: &str,
        direction: Direction,
    ) -> Result<Vec<Edge>, TraversalError> {
        // Any lists inbound edges before outbound ones, like `Datasource::all_edges`.
        let (predicate, ordering) = match direction {
            Direction::Outbound => ("from_id=?2", "seq"),
            Direction::Inbound => ("to_id=?2", "seq"),
            Direction::Any => (
                "(from_id=?2 OR to_id=?2)",
                "CASE WHEN to_id=?2 THEN 0 ELSE 1 END, seq",
            ),
        };
        let sql = format!(
            "SELECT {EDGE_COLUMNS} FROM graph_edges WHERE collection=?1 AND {predicate} ORDER BY {ordering}"
        );
        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| TraversalError::query(e.to_string()))?;
        let rows = stmt
            .query_map(params![collection, vertex_id], |row| row_to_edge(row))
            .map_err(|e| TraversalError::query(e.to_string()))?;
        let mut result = Vec::new();
        for item in rows {
            result.push(item.map_err(|e| TraversalError::query(e.to_string()))?);
        }
        Ok(result)
    }

    pub fn cached_adjacency_entries(&self) -> usize {
        self.outbound_cache.len() + self.inbound_cache.len() + self.any_cache.len()
    }

    fn invalidate_caches(&self) {
        self.outbound_cache.clear();
        self.inbound_cache.clear();
        self.any_cache.clear();
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn,
            outbound_cache: AdjacencyCache::new(),
            inbound_cache: AdjacencyCache::new(),
            any_cache: AdjacencyCache::new(),
        }
    }
}

fn map_insert_error(err: rusqlite::Error, id: &str) -> TraversalError {
    match err {
        rusqlite::Error::SqliteFailure(code, _)
            if code.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            TraversalError::invalid_input(format!("duplicate document {id}"))
        }
        other => TraversalError::query(other.to_string()),
    }
}
