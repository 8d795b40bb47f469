//! Todo Repository - Core CRUD Operations
//!
//! SQLite-backed implementation for Todo CRUD operations.
//! Specialized operations are in separate modules:
//! - todo_positioning: Drag-and-drop reordering
//! - todo_search: Filtered views of a list

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, Priority, Todo};
use crate::repository::db::{in_transaction, uuid_column, SharedConnection};
use crate::repository::positioning::{self, Siblings};
use crate::repository::traits::Repository;

const TODO_COLUMNS: &str =
    "id, list_id, title, note, due_date, priority, is_completed, completed_at, position, created_at";

/// SQLite implementation of the Todo repository
pub struct TodoRepository {
    pub(super) conn: SharedConnection,
}

impl TodoRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Flip completion from the stored state, stamping or clearing `completed_at`
    pub async fn toggle_completed(&self, id: Uuid, now: DateTime<Utc>) -> DomainResult<Todo> {
        let mut conn = self.conn.lock().await;
        let id = id.to_string();

        in_transaction(&mut conn, |tx| {
            let mut todo =
                select_todo(tx, &id)?.ok_or_else(|| DomainError::not_found(format!("Todo {}", id)))?;
            todo.toggle(now);
            tx.execute(
                "UPDATE todos SET is_completed = ?1, completed_at = ?2 WHERE id = ?3",
                params![todo.is_completed, todo.completed_at, id],
            )?;
            Ok(todo)
        })
    }

    /// Number of open todos in a list
    pub async fn incomplete_count(&self, list_id: Uuid) -> DomainResult<i64> {
        let conn = self.conn.lock().await;
        let count = conn.query_row(
            "SELECT COUNT(*) FROM todos WHERE list_id = ?1 AND is_completed = 0",
            params![list_id.to_string()],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

#[async_trait]
impl Repository<Todo> for TodoRepository {
    async fn create(&self, entity: &Todo) -> DomainResult<Todo> {
        let mut conn = self.conn.lock().await;
        let position = in_transaction(&mut conn, |tx| insert_todo(tx, entity))?;

        log::info!("created todo {} in list {} at position {}", entity.id, entity.list_id, position);
        Ok(Todo {
            position,
            ..entity.clone()
        })
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Todo>> {
        let conn = self.conn.lock().await;
        select_todo(&conn, &id.to_string())
    }

    async fn list(&self, list_id: &Uuid) -> DomainResult<Vec<Todo>> {
        let conn = self.conn.lock().await;
        let sql = format!(
            "SELECT {} FROM todos WHERE list_id = ?1 ORDER BY position, id",
            TODO_COLUMNS
        );
        let mut stmt = conn.prepare_cached(&sql)?;
        let todos = stmt
            .query_map(params![list_id.to_string()], row_to_todo)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(todos)
    }

    async fn update(&self, entity: &Todo) -> DomainResult<Todo> {
        let mut conn = self.conn.lock().await;
        let id = entity.id.to_string();

        // completion has its own write path; see `toggle_completed`
        in_transaction(&mut conn, |tx| {
            let changed = tx.execute(
                "UPDATE todos SET title = ?1, note = ?2, due_date = ?3, priority = ?4 WHERE id = ?5",
                params![
                    entity.title,
                    entity.note,
                    entity.due_date,
                    entity.priority.map(|p| p.as_str()),
                    id,
                ],
            )?;
            if changed == 0 {
                return Err(DomainError::not_found(format!("Todo {}", entity.id)));
            }
            select_todo(tx, &id)?.ok_or_else(|| DomainError::not_found(format!("Todo {}", entity.id)))
        })
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        let mut conn = self.conn.lock().await;

        let deleted = in_transaction(&mut conn, |tx| {
            let list_id: Option<String> = tx
                .query_row(
                    "SELECT list_id FROM todos WHERE id = ?1",
                    params![id.to_string()],
                    |row| row.get(0),
                )
                .optional()?;
            let Some(list_id) = list_id else {
                return Ok(false);
            };

            tx.execute("DELETE FROM todos WHERE id = ?1", params![id.to_string()])?;
            positioning::renumber(tx, Siblings::Todos, &list_id)?;
            Ok(true)
        })?;

        if deleted {
            log::info!("deleted todo {}", id);
        }
        Ok(deleted)
    }
}

/// Append `todo` to its list. Runs inside the caller's transaction.
pub(crate) fn insert_todo(conn: &Connection, todo: &Todo) -> DomainResult<i64> {
    let list_id = todo.list_id.to_string();
    let position = positioning::next_position(conn, Siblings::Todos, &list_id)?;
    conn.execute(
        "INSERT INTO todos (id, list_id, title, note, due_date, priority, is_completed, completed_at, position, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            todo.id.to_string(),
            list_id,
            todo.title,
            todo.note,
            todo.due_date,
            todo.priority.map(|p| p.as_str()),
            todo.is_completed,
            todo.completed_at,
            position,
            todo.created_at,
        ],
    )?;
    Ok(position)
}

fn select_todo(conn: &Connection, id: &str) -> DomainResult<Option<Todo>> {
    let sql = format!("SELECT {} FROM todos WHERE id = ?1", TODO_COLUMNS);
    let todo = conn.query_row(&sql, params![id], row_to_todo).optional()?;
    Ok(todo)
}

/// Convert a database row to Todo
fn row_to_todo(row: &Row<'_>) -> rusqlite::Result<Todo> {
    let priority: Option<String> = row.get(5)?;
    Ok(Todo {
        id: uuid_column(row, 0)?,
        list_id: uuid_column(row, 1)?,
        title: row.get(2)?,
        note: row.get(3)?,
        due_date: row.get(4)?,
        priority: priority.as_deref().and_then(Priority::parse),
        is_completed: row.get(6)?,
        completed_at: row.get(7)?,
        position: row.get(8)?,
        created_at: row.get(9)?,
    })
}
