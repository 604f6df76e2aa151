use std::path::Path;

use rusqlite::Connection;
use thiserror::Error;

pub mod queries;
pub mod schema;

pub fn init_store(db_path: &Path) -> anyhow::Result<Connection> {
    let conn = Connection::open(db_path)?;

    // Enable WAL mode
    conn.pragma_update(None, "journal_mode", &"WAL")?;
    conn.pragma_update(None, "synchronous", &"NORMAL")?;

    // Create schema
    schema::create_tables(&conn)?;

    Ok(conn)
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store access failed: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("log '{key}' holds invalid JSON: {source}")]
    Corrupt {
        key: String,
        source: serde_json::Error,
    },
    #[error("failed to encode log '{key}': {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
}

/// Read/write surface for named activity logs. Values are opaque JSON
/// blobs; a missing key reads as `None` and writes are last-write-wins.
pub trait LogStore {
    fn read_log(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
    fn write_log(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;
}

pub struct SqliteLogStore {
    conn: Connection,
}

impl SqliteLogStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn open(db_path: &Path) -> anyhow::Result<Self> {
        Ok(Self::new(init_store(db_path)?))
    }

    pub fn open_in_memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::create_tables(&conn)?;
        Ok(Self::new(conn))
    }
}

impl LogStore for SqliteLogStore {
    fn read_log(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let result: Result<Vec<u8>, _> = self.conn.query_row(
            "SELECT value FROM activity_logs WHERE key = ?1",
            [key],
            |row| row.get(0),
        );

        match result {
            Ok(blob) => Ok(Some(blob)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_log(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let now = chrono::Utc::now().timestamp();
        self.conn.execute(
            "INSERT INTO activity_logs (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                 value = excluded.value,
                 updated_at = excluded.updated_at",
            rusqlite::params![key, value, now],
        )?;
        Ok(())
    }
}
