//! Todo Positioning Operations
//!
//! Operations for managing todo positions within their list.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension};
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult};
use crate::repository::db::in_transaction;
use crate::repository::positioning::{self, RepositionOutcome, Siblings};

/// Trait for todo positioning operations
#[async_trait]
pub trait TodoPositioningOperations {
    /// Move a todo to `new_index` within its list. Out-of-range indexes are
    /// clamped; moving to the current index is a no-op.
    async fn reposition(&self, id: Uuid, new_index: i64) -> DomainResult<RepositionOutcome>;
}

#[async_trait]
impl TodoPositioningOperations for super::todo_repo::TodoRepository {
    async fn reposition(&self, id: Uuid, new_index: i64) -> DomainResult<RepositionOutcome> {
        let mut conn = self.conn.lock().await;
        let id = id.to_string();

        in_transaction(&mut conn, |tx| {
            let list_id: String = tx
                .query_row(
                    "SELECT list_id FROM todos WHERE id = ?1",
                    params![id],
                    |row| row.get(0),
                )
                .optional()?
                .ok_or_else(|| DomainError::not_found(format!("Todo {}", id)))?;

            positioning::move_within(tx, Siblings::Todos, &list_id, &id, new_index)
        })
    }
}
