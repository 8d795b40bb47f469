//! List Repository Module
//!
//! - list_repo: Core CRUD operations, search and ownership checks
//! - list_positioning: Sidebar ordering
//! - list_import: Whole lists with their todos in one transaction

mod list_import;
mod list_positioning;
mod list_repo;

pub use list_repo::ListRepository;

pub use list_import::ListImportOperations;
pub use list_positioning::ListPositioningOperations;
