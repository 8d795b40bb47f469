//! Commands Layer
//!
//! Operations the web layer calls on behalf of an actor. Every command checks
//! that the actor owns the list it touches; a foreign list is reported exactly
//! like a missing one.

mod list_cmd;
mod todo_cmd;

pub use list_cmd::*;
pub use todo_cmd::*;

use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, OwnerId, TodoList};
use crate::repository::{Repository, ScopeAuthority};
use crate::CoreState;

fn list_not_found() -> DomainError {
    DomainError::not_found("List not found")
}

fn todo_not_found() -> DomainError {
    DomainError::not_found("Todo not found")
}

/// Load a list the actor owns
async fn owned_list(state: &CoreState, actor: &OwnerId, list_id: Uuid) -> DomainResult<TodoList> {
    if !state.lists.owns_scope(actor, list_id).await? {
        return Err(list_not_found());
    }
    state
        .lists
        .find_by_id(list_id)
        .await?
        .ok_or_else(list_not_found)
}
