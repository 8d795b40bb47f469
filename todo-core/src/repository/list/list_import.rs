//! List Import Operations
//!
//! Writes complete lists, todos included, for an owner who has none yet.

use async_trait::async_trait;
use rusqlite::params;

use crate::domain::{DomainResult, OwnerId, Todo, TodoList};
use crate::repository::db::in_transaction;
use crate::repository::todo::insert_todo;

use super::list_repo::insert_list;

#[async_trait]
pub trait ListImportOperations {
    /// Append `lists` with their todos for `owner`, all or nothing.
    /// Returns false without writing if the owner already has a list.
    async fn import_if_empty(&self, owner: &OwnerId, lists: &[(TodoList, Vec<Todo>)]) -> DomainResult<bool>;
}

#[async_trait]
impl ListImportOperations for super::list_repo::ListRepository {
    async fn import_if_empty(&self, owner: &OwnerId, lists: &[(TodoList, Vec<Todo>)]) -> DomainResult<bool> {
        let mut conn = self.conn.lock().await;

        let imported = in_transaction(&mut conn, |tx| {
            let existing: i64 = tx.query_row(
                "SELECT COUNT(*) FROM todo_lists WHERE owner_id = ?1",
                params![owner.as_str()],
                |row| row.get(0),
            )?;
            if existing > 0 {
                return Ok(false);
            }

            for (list, todos) in lists {
                insert_list(tx, &TodoList {
                    owner_id: owner.clone(),
                    ..list.clone()
                })?;
                for todo in todos {
                    insert_todo(tx, &Todo {
                        list_id: list.id,
                        ..todo.clone()
                    })?;
                }
            }
            Ok(true)
        })?;

        if imported {
            log::info!("imported {} lists for {}", lists.len(), owner);
        }
        Ok(imported)
    }
}
