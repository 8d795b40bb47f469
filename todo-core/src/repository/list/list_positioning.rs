//! List Positioning Operations
//!
//! Reordering of an owner's lists in the sidebar.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension};
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, OwnerId};
use crate::repository::db::in_transaction;
use crate::repository::positioning::{self, RepositionOutcome, Siblings};

/// Trait for list positioning operations
#[async_trait]
pub trait ListPositioningOperations {
    /// Move one list to `new_index` among its owner's lists (clamped)
    async fn reposition(&self, id: Uuid, new_index: i64) -> DomainResult<RepositionOutcome>;

    /// Apply a full ordering posted by a drag-and-drop sidebar
    async fn reorder(&self, owner: &OwnerId, ordered_ids: &[Uuid]) -> DomainResult<usize>;
}

#[async_trait]
impl ListPositioningOperations for super::list_repo::ListRepository {
    async fn reposition(&self, id: Uuid, new_index: i64) -> DomainResult<RepositionOutcome> {
        let mut conn = self.conn.lock().await;
        let id = id.to_string();

        in_transaction(&mut conn, |tx| {
            let owner: String = tx
                .query_row(
                    "SELECT owner_id FROM todo_lists WHERE id = ?1",
                    params![id],
                    |row| row.get(0),
                )
                .optional()?
                .ok_or_else(|| DomainError::not_found(format!("List {}", id)))?;

            positioning::move_within(tx, Siblings::Lists, &owner, &id, new_index)
        })
    }

    async fn reorder(&self, owner: &OwnerId, ordered_ids: &[Uuid]) -> DomainResult<usize> {
        let mut conn = self.conn.lock().await;
        let requested: Vec<String> = ordered_ids.iter().map(Uuid::to_string).collect();

        let changed = in_transaction(&mut conn, |tx| {
            positioning::apply_order(tx, Siblings::Lists, owner.as_str(), &requested)
        })?;

        log::debug!("reordered lists of {} ({} rows rewritten)", owner, changed);
        Ok(changed)
    }
}
