//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has no storage dependencies.

mod entity;
mod filter;
mod owner;
mod priority;
mod todo;
mod todo_list;

pub use entity::{DomainError, DomainResult, Entity, Positioned};
pub use filter::{ListFilter, TextFilter, TodoFilter};
pub use owner::OwnerId;
pub use priority::{Priority, PriorityFilter};
pub use todo::{validate_title, Todo, TodoUpdate, DUE_DATE_FORMAT, MAX_TODO_TITLE_LEN};
pub use todo_list::{ListDraft, TodoList, DEFAULT_LIST_COLOR, MAX_LIST_NAME_LEN};
