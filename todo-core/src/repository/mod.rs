//! Repository Layer
//!
//! Data access abstractions and their SQLite implementations.

mod db;
mod list;
mod positioning;
mod todo;
mod traits;


pub use db::{init_db, DbState, SharedConnection};
pub use list::{ListImportOperations, ListPositioningOperations, ListRepository};
pub use positioning::RepositionOutcome;
pub use todo::{TodoPositioningOperations, TodoRepository};
pub use traits::{Repository, ScopeAuthority, SearchableRepository};
