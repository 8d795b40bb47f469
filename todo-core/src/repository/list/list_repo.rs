//! List Repository - Core CRUD Operations
//!
//! SQLite-backed implementation for TodoList CRUD operations.
//! Reordering lives in `list_positioning`.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, ListFilter, OwnerId, TodoList};
use crate::repository::db::{in_transaction, uuid_column, SharedConnection};
use crate::repository::positioning::{self, Siblings};
use crate::repository::traits::{Repository, ScopeAuthority, SearchableRepository};

const LIST_COLUMNS: &str = "id, owner_id, name, description, color, position, created_at";

/// SQLite implementation of the TodoList repository
pub struct ListRepository {
    pub(super) conn: SharedConnection,
}

impl ListRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<TodoList> for ListRepository {
    async fn create(&self, entity: &TodoList) -> DomainResult<TodoList> {
        let mut conn = self.conn.lock().await;
        let position = in_transaction(&mut conn, |tx| insert_list(tx, entity))?;

        log::info!("created list {} at position {}", entity.id, position);
        Ok(TodoList {
            position,
            ..entity.clone()
        })
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<TodoList>> {
        let conn = self.conn.lock().await;
        let sql = format!("SELECT {} FROM todo_lists WHERE id = ?1", LIST_COLUMNS);
        let list = conn
            .query_row(&sql, params![id.to_string()], row_to_list)
            .optional()?;
        Ok(list)
    }

    async fn list(&self, owner: &OwnerId) -> DomainResult<Vec<TodoList>> {
        let conn = self.conn.lock().await;
        let sql = format!(
            "SELECT {} FROM todo_lists WHERE owner_id = ?1 ORDER BY position, id",
            LIST_COLUMNS
        );
        let mut stmt = conn.prepare_cached(&sql)?;
        let lists = stmt
            .query_map(params![owner.as_str()], row_to_list)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lists)
    }

    async fn update(&self, entity: &TodoList) -> DomainResult<TodoList> {
        let conn = self.conn.lock().await;
        let changed = conn.execute(
            "UPDATE todo_lists SET name = ?1, description = ?2, color = ?3 WHERE id = ?4",
            params![entity.name, entity.description, entity.color, entity.id.to_string()],
        )?;
        if changed == 0 {
            return Err(DomainError::not_found(format!("List {}", entity.id)));
        }
        Ok(entity.clone())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        let mut conn = self.conn.lock().await;

        let deleted = in_transaction(&mut conn, |tx| {
            let owner: Option<String> = tx
                .query_row(
                    "SELECT owner_id FROM todo_lists WHERE id = ?1",
                    params![id.to_string()],
                    |row| row.get(0),
                )
                .optional()?;
            let Some(owner) = owner else {
                return Ok(false);
            };

            // todos go with it through ON DELETE CASCADE
            tx.execute("DELETE FROM todo_lists WHERE id = ?1", params![id.to_string()])?;
            positioning::renumber(tx, Siblings::Lists, &owner)?;
            Ok(true)
        })?;

        if deleted {
            log::info!("deleted list {}", id);
        }
        Ok(deleted)
    }
}

#[async_trait]
impl SearchableRepository<TodoList> for ListRepository {
    type Filter = ListFilter;

    async fn search(&self, owner: &OwnerId, filter: &ListFilter) -> DomainResult<Vec<TodoList>> {
        let mut lists = self.list(owner).await?;
        lists.retain(|list| filter.matches(list));
        Ok(lists)
    }
}

#[async_trait]
impl ScopeAuthority for ListRepository {
    async fn owns_scope(&self, actor: &OwnerId, list_id: Uuid) -> DomainResult<bool> {
        let conn = self.conn.lock().await;
        let owned: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM todo_lists WHERE id = ?1 AND owner_id = ?2)",
            params![list_id.to_string(), actor.as_str()],
            |row| row.get(0),
        )?;
        Ok(owned)
    }
}

/// Append `list` to its owner's lists. Runs inside the caller's transaction.
pub(super) fn insert_list(conn: &Connection, list: &TodoList) -> DomainResult<i64> {
    let position = positioning::next_position(conn, Siblings::Lists, list.owner_id.as_str())?;
    conn.execute(
        "INSERT INTO todo_lists (id, owner_id, name, description, color, position, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            list.id.to_string(),
            list.owner_id.as_str(),
            list.name,
            list.description,
            list.color,
            position,
            list.created_at,
        ],
    )?;
    Ok(position)
}

/// Convert a database row to TodoList
fn row_to_list(row: &Row<'_>) -> rusqlite::Result<TodoList> {
    Ok(TodoList {
        id: uuid_column(row, 0)?,
        owner_id: OwnerId::from_stored(row.get(1)?),
        name: row.get(2)?,
        description: row.get(3)?,
        color: row.get(4)?,
        position: row.get(5)?,
        created_at: row.get(6)?,
    })
}
