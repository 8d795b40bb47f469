//! Database Connection and Setup
//!
//! Manages the SQLite connection and creates the schema.

use rusqlite::types::Type;
use rusqlite::{Connection, Row, Transaction, TransactionBehavior};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult};

/// Shared connection handle. One statement sequence at a time in-process;
/// writers in other processes are serialised by `BEGIN IMMEDIATE`.
pub type SharedConnection = Arc<Mutex<Connection>>;

/// Database state wrapper
#[derive(Clone)]
pub struct DbState {
    conn: SharedConnection,
}

impl DbState {
    pub fn connection(&self) -> SharedConnection {
        self.conn.clone()
    }
}

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

/// Open (or create) the database at `db_path`. `:memory:` opens a private
/// in-memory database.
pub fn init_db(db_path: &Path) -> DomainResult<DbState> {
    let conn = if db_path.as_os_str() == ":memory:" {
        Connection::open_in_memory()?
    } else {
        Connection::open(db_path)?
    };

    conn.busy_timeout(Duration::from_secs(5))?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    create_schema(&conn)?;
    log::info!("database ready at {}", db_path.display());

    Ok(DbState {
        conn: Arc::new(Mutex::new(conn)),
    })
}

/// Create tables if they don't exist
///
/// No UNIQUE(scope, position) index: SQLite checks uniqueness row by row
/// inside an UPDATE, which rejects a shift-by-one half way through.
fn create_schema(conn: &Connection) -> DomainResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS todo_lists (
            id TEXT PRIMARY KEY,
            owner_id TEXT NOT NULL,
            name TEXT NOT NULL,
            description TEXT,
            color TEXT NOT NULL DEFAULT '#3b82f6',
            position INTEGER NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_todo_lists_owner ON todo_lists(owner_id, position);

        CREATE TABLE IF NOT EXISTS todos (
            id TEXT PRIMARY KEY,
            list_id TEXT NOT NULL REFERENCES todo_lists(id) ON DELETE CASCADE,
            title TEXT NOT NULL,
            note TEXT,
            due_date TEXT,
            priority TEXT CHECK (priority IN ('low', 'medium', 'high')),
            is_completed INTEGER NOT NULL DEFAULT 0,
            completed_at TEXT,
            position INTEGER NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_todos_list ON todos(list_id, position);",
    )?;
    Ok(())
}

/// Run `f` inside an immediate transaction. Commits on `Ok`, rolls back when
/// the transaction is dropped on `Err`.
pub(crate) fn in_transaction<T>(
    conn: &mut Connection,
    f: impl FnOnce(&Transaction<'_>) -> DomainResult<T>,
) -> DomainResult<T> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let value = f(&tx)?;
    tx.commit()?;
    Ok(value)
}

/// Read a TEXT column holding a UUID
pub(crate) fn uuid_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Uuid> {
    let raw: String = row.get(idx)?;
    Uuid::parse_str(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
