//! Todo Repository Module
//!
//! This module provides todo repository functionality split into specialized sub-modules:
//! - todo_repo: Core CRUD operations
//! - todo_positioning: Position management
//! - todo_search: Filtered views

mod todo_positioning;
mod todo_repo;
mod todo_search;

pub use todo_repo::TodoRepository;
pub(crate) use todo_repo::insert_todo;

pub use todo_positioning::TodoPositioningOperations;
