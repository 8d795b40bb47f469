//! Commands for Todo CRUD, search and ordering

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{owned_list, todo_not_found};
use crate::domain::{
    validate_title, DomainResult, OwnerId, Priority, Todo, TodoFilter, TodoUpdate,
};
use crate::repository::{
    RepositionOutcome, Repository, ScopeAuthority, SearchableRepository, TodoPositioningOperations,
};
use crate::CoreState;

/// Quick-add form: title only
#[derive(Debug, Clone, Deserialize)]
pub struct NewTodo {
    pub list_id: Uuid,
    pub title: String,
}

/// A todo plus the refreshed open-todo count of its list
#[derive(Debug, Clone, Serialize)]
pub struct TodoWithCount {
    pub todo: Todo,
    pub incomplete_count: i64,
}

/// Load a todo whose list the actor owns
async fn owned_todo(state: &CoreState, actor: &OwnerId, id: Uuid) -> DomainResult<Todo> {
    let todo = state.todos.find_by_id(id).await?.ok_or_else(todo_not_found)?;
    if !state.lists.owns_scope(actor, todo.list_id).await? {
        return Err(todo_not_found());
    }
    Ok(todo)
}

/// Search a list by title substring and/or priority.
///
/// Blank text and unknown priorities are ignored rather than rejected.
pub async fn search_todos(
    state: &CoreState,
    actor: &OwnerId,
    list_id: Uuid,
    text: Option<&str>,
    priority: Option<&str>,
) -> DomainResult<Vec<Todo>> {
    let list = owned_list(state, actor, list_id).await?;
    let filter = TodoFilter::new(text, priority);
    state.todos.search(&list.id, &filter).await
}

/// Append a new todo to a list
pub async fn create_todo(state: &CoreState, actor: &OwnerId, new: &NewTodo) -> DomainResult<TodoWithCount> {
    let list = owned_list(state, actor, new.list_id).await?;
    let title = validate_title(&new.title)?;

    let todo = Todo {
        id: Uuid::new_v4(),
        list_id: list.id,
        title,
        note: None,
        due_date: None,
        priority: Some(Priority::default()),
        is_completed: false,
        completed_at: None,
        position: 0,
        created_at: Utc::now(),
    };
    let todo = state.todos.create(&todo).await?;
    let incomplete_count = state.todos.incomplete_count(list.id).await?;
    Ok(TodoWithCount {
        todo,
        incomplete_count,
    })
}

/// Get one todo, which must belong to `list_id`
pub async fn get_todo(state: &CoreState, actor: &OwnerId, list_id: Uuid, id: Uuid) -> DomainResult<Todo> {
    let list = owned_list(state, actor, list_id).await?;
    match state.todos.find_by_id(id).await? {
        Some(todo) if todo.list_id == list.id => Ok(todo),
        _ => Err(todo_not_found()),
    }
}

/// Apply an edit form to a todo. Completion is left as stored.
pub async fn update_todo(
    state: &CoreState,
    actor: &OwnerId,
    id: Uuid,
    update: &TodoUpdate,
) -> DomainResult<Todo> {
    let mut todo = owned_todo(state, actor, id).await?;
    update.apply(&mut todo)?;
    state.todos.update(&todo).await
}

/// Flip completion of a todo
pub async fn toggle_todo(state: &CoreState, actor: &OwnerId, id: Uuid) -> DomainResult<TodoWithCount> {
    let todo = owned_todo(state, actor, id).await?;
    let todo = state.todos.toggle_completed(todo.id, Utc::now()).await?;
    let incomplete_count = state.todos.incomplete_count(todo.list_id).await?;
    Ok(TodoWithCount {
        todo,
        incomplete_count,
    })
}

/// Delete a todo; later siblings move up one slot
pub async fn delete_todo(state: &CoreState, actor: &OwnerId, id: Uuid) -> DomainResult<()> {
    let todo = owned_todo(state, actor, id).await?;
    if !state.todos.delete(todo.id).await? {
        return Err(todo_not_found());
    }
    Ok(())
}

/// Drag-and-drop: move a todo to `position` within its list
pub async fn reorder_todo(
    state: &CoreState,
    actor: &OwnerId,
    id: Uuid,
    position: i64,
) -> DomainResult<RepositionOutcome> {
    let todo = owned_todo(state, actor, id).await?;
    state.todos.reposition(todo.id, position).await
}
