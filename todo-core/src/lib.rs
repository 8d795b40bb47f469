//! Todo Core
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and SQLite implementations;
//!   the only place that writes `position`
//! - commands: Operations exposed to the web layer, with validation and
//!   ownership checks

use std::path::Path;
use std::sync::Arc;

pub mod commands;
pub mod domain;
pub mod repository;
pub mod seed;

use domain::DomainResult;
use repository::{init_db, ListRepository, TodoRepository};

/// Application state shared across commands
#[derive(Clone)]
pub struct CoreState {
    pub lists: Arc<ListRepository>,
    pub todos: Arc<TodoRepository>,
}

impl CoreState {
    /// Open the database at `db_path` (`:memory:` for a private in-memory one)
    pub fn open(db_path: &Path) -> DomainResult<Self> {
        let db = init_db(db_path)?;
        Ok(Self {
            lists: Arc::new(ListRepository::new(db.connection())),
            todos: Arc::new(TodoRepository::new(db.connection())),
        })
    }

    pub fn in_memory() -> DomainResult<Self> {
        Self::open(Path::new(":memory:"))
    }
}
