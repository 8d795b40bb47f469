//! Commands for Todo List CRUD + ordering

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{list_not_found, owned_list};
use crate::domain::{DomainResult, ListDraft, ListFilter, OwnerId, Todo, TodoList};
use crate::repository::{
    ListPositioningOperations, RepositionOutcome, Repository, SearchableRepository,
};
use crate::CoreState;

/// Create / edit form of a list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListForm {
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl ListForm {
    fn draft(&self) -> DomainResult<ListDraft> {
        ListDraft::new(&self.name, self.description.as_deref(), self.color.as_deref())
    }
}

/// A list together with its ordered todos
#[derive(Debug, Clone, Serialize)]
pub struct ListDetail {
    pub list: TodoList,
    pub todos: Vec<Todo>,
    pub incomplete_count: i64,
}

/// The actor's lists in sidebar order, optionally filtered by name
pub async fn list_lists(
    state: &CoreState,
    actor: &OwnerId,
    query: Option<&str>,
) -> DomainResult<Vec<TodoList>> {
    state.lists.search(actor, &ListFilter::new(query)).await
}

/// Create a new list at the end of the sidebar
pub async fn create_list(state: &CoreState, actor: &OwnerId, form: &ListForm) -> DomainResult<TodoList> {
    let draft = form.draft()?;
    let list = TodoList {
        id: Uuid::new_v4(),
        owner_id: actor.clone(),
        name: draft.name,
        description: draft.description,
        color: draft.color,
        position: 0,
        created_at: Utc::now(),
    };
    state.lists.create(&list).await
}

/// Get a list with its todos
pub async fn get_list(state: &CoreState, actor: &OwnerId, id: Uuid) -> DomainResult<ListDetail> {
    let list = owned_list(state, actor, id).await?;
    let todos = state.todos.list(&list.id).await?;
    let incomplete_count = todos.iter().filter(|t| !t.is_completed).count() as i64;
    Ok(ListDetail {
        list,
        todos,
        incomplete_count,
    })
}

/// Rename / recolour a list
pub async fn update_list(
    state: &CoreState,
    actor: &OwnerId,
    id: Uuid,
    form: &ListForm,
) -> DomainResult<TodoList> {
    let mut list = owned_list(state, actor, id).await?;
    let draft = form.draft()?;
    list.name = draft.name;
    list.description = draft.description;
    list.color = draft.color;
    state.lists.update(&list).await
}

/// Delete a list and its todos
pub async fn delete_list(state: &CoreState, actor: &OwnerId, id: Uuid) -> DomainResult<()> {
    let list = owned_list(state, actor, id).await?;
    if !state.lists.delete(list.id).await? {
        return Err(list_not_found());
    }
    Ok(())
}

/// Move one list to a new sidebar index
pub async fn reposition_list(
    state: &CoreState,
    actor: &OwnerId,
    id: Uuid,
    position: i64,
) -> DomainResult<RepositionOutcome> {
    let list = owned_list(state, actor, id).await?;
    state.lists.reposition(list.id, position).await
}

/// Apply a full sidebar ordering and return the lists in their new order
pub async fn reorder_lists(
    state: &CoreState,
    actor: &OwnerId,
    ordered_ids: &[Uuid],
) -> DomainResult<Vec<TodoList>> {
    state.lists.reorder(actor, ordered_ids).await?;
    state.lists.list(actor).await
}
