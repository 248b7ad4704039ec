use rusqlite::Connection;

use crate::errors::TraversalError;

pub fn ensure_schema(conn: &Connection) -> Result<(), TraversalError> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS graph_vertices (
            id         TEXT PRIMARY KEY,
            collection TEXT NOT NULL,
            data       TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS graph_edges (
            seq        INTEGER PRIMARY KEY AUTOINCREMENT,
            id         TEXT NOT NULL UNIQUE,
            collection TEXT NOT NULL,
            from_id    TEXT NOT NULL,
            to_id      TEXT NOT NULL,
            label      TEXT,
            data       TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS graph_definitions (
            name       TEXT PRIMARY KEY,
            definition TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_vertices_collection ON graph_vertices(collection);
        CREATE INDEX IF NOT EXISTS idx_edges_from ON graph_edges(collection, from_id);
        CREATE INDEX IF NOT EXISTS idx_edges_to ON graph_edges(collection, to_id);
        "#,
    )
    .map_err(|e| TraversalError::schema(e.to_string()))?;
    Ok(())
}
