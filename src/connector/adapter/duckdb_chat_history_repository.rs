use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use duckdb::{params, Connection};
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::{validate_user_message, ChatHistoryRepository};
use crate::domain::{ChatHistoryRecord, DomainError};

/// Raw row as read from DuckDB: id, user_message, llm_reply, timestamp in µs since epoch.
type RecordRow = (i64, String, String, i64);

pub struct DuckdbChatHistoryRepository {
    conn: Arc<Mutex<Connection>>,
}

impl DuckdbChatHistoryRepository {
    pub fn new(db_path: &Path) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path)
            .map_err(|e| DomainError::storage(format!("Failed to open DuckDB database: {}", e)))?;
        Self::initialize_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn in_memory() -> Result<Self, DomainError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            DomainError::storage(format!("Failed to open DuckDB in-memory DB: {}", e))
        })?;
        Self::initialize_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create a new adapter using an existing shared connection.
    pub async fn with_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, DomainError> {
        let conn_guard = conn.lock().await;
        Self::initialize_schema(&conn_guard)?;
        drop(conn_guard);

        Ok(Self { conn })
    }

    /// Returns a clone of the shared connection Arc.
    pub fn shared_connection(&self) -> Arc<Mutex<Connection>> {
        Arc::clone(&self.conn)
    }

    fn initialize_schema(conn: &Connection) -> Result<(), DomainError> {
        conn.execute_batch(
            r#"
            CREATE SEQUENCE IF NOT EXISTS chat_history_id_seq START 1;

            CREATE TABLE IF NOT EXISTS chat_history (
                id BIGINT PRIMARY KEY DEFAULT nextval('chat_history_id_seq'),
                user_message TEXT NOT NULL,
                llm_reply TEXT NOT NULL,
                "timestamp" TIMESTAMP NOT NULL DEFAULT current_timestamp
            );
            "#,
        )
        .map_err(|e| DomainError::storage(format!("Failed to initialize chat_history schema: {}", e)))?;

        debug!("DuckDB chat_history table initialized");
        Ok(())
    }

    fn to_record((id, user_message, llm_reply, micros): RecordRow) -> Result<ChatHistoryRecord, DomainError> {
        let timestamp = DateTime::<Utc>::from_timestamp_micros(micros).ok_or_else(|| {
            DomainError::storage(format!("Invalid timestamp {} for chat exchange #{}", micros, id))
        })?;
        Ok(ChatHistoryRecord::new(id, user_message, llm_reply, timestamp))
    }
}

#[async_trait]
impl ChatHistoryRepository for DuckdbChatHistoryRepository {
    async fn insert(
        &self,
        user_message: &str,
        llm_reply: &str,
    ) -> Result<ChatHistoryRecord, DomainError> {
        validate_user_message(user_message)?;

        let conn = self.conn.lock().await;
        let (id, micros) = conn
            .query_row(
                r#"INSERT INTO chat_history (user_message, llm_reply) VALUES (?, ?)
                   RETURNING id, epoch_us("timestamp")"#,
                params![user_message, llm_reply],
                |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)),
            )
            .map_err(|e| DomainError::storage(format!("Failed to insert chat exchange: {}", e)))?;

        debug!("Inserted chat exchange #{} into DuckDB", id);
        Self::to_record((id, user_message.to_string(), llm_reply.to_string(), micros))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ChatHistoryRecord>, DomainError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare(
                r#"SELECT id, user_message, llm_reply, epoch_us("timestamp")
                   FROM chat_history WHERE id = ?"#,
            )
            .map_err(|e| DomainError::storage(format!("Failed to prepare statement: {}", e)))?;

        let mut rows = stmt
            .query_map(params![id], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                ))
            })
            .map_err(|e| DomainError::storage(format!("Failed to query chat history: {}", e)))?;

        let first = rows.next();
        match first {
            Some(row) => {
                let row = row.map_err(|e| DomainError::storage(format!("Failed to read row: {}", e)))?;
                Ok(Some(Self::to_record(row)?))
            }
            None => Ok(None),
        }
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<ChatHistoryRecord>, DomainError> {
        let conn = self.conn.lock().await;
        let sql = format!(
            r#"SELECT id, user_message, llm_reply, epoch_us("timestamp")
               FROM chat_history ORDER BY id DESC LIMIT {}"#,
            limit
        );
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::storage(format!("Failed to prepare statement: {}", e)))?;

        let rows = stmt
            .query_map(params![], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                ))
            })
            .map_err(|e| DomainError::storage(format!("Failed to query chat history: {}", e)))?;

        let mut records = Vec::new();
        for row in rows {
            let row = row.map_err(|e| DomainError::storage(format!("Failed to read row: {}", e)))?;
            records.push(Self::to_record(row)?);
        }

        Ok(records)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let conn = self.conn.lock().await;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM chat_history", params![], |row| row.get(0))
            .map_err(|e| DomainError::storage(format!("Failed to count chat history: {}", e)))?;

        Ok(count as u64)
    }
}
