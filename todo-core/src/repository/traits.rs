//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{DomainResult, OwnerId, Positioned};

/// Core repository trait for CRUD operations on ranked entities
///
/// Position is owned by the store: `create` appends at the end of the scope
/// whatever position the argument carries, `update` never writes it and
/// `delete` renumbers the remaining siblings.
#[async_trait]
pub trait Repository<T: Positioned>: Send + Sync {
    /// Create a new entity at the end of its scope
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// All entities of a scope, in position order
    async fn list(&self, scope: &T::Scope) -> DomainResult<Vec<T>>;

    /// Update an existing entity's content
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID. Returns false if nothing was deleted.
    async fn delete(&self, id: T::Id) -> DomainResult<bool>;
}

/// Extension for repositories that support filtered views of a scope
#[async_trait]
pub trait SearchableRepository<T: Positioned>: Repository<T> {
    type Filter: Send + Sync;

    /// Entities of `scope` matching every active predicate, in position order
    async fn search(&self, scope: &T::Scope, filter: &Self::Filter) -> DomainResult<Vec<T>>;
}

/// Answers whether an actor may read and modify a list
#[async_trait]
pub trait ScopeAuthority: Send + Sync {
    async fn owns_scope(&self, actor: &OwnerId, list_id: Uuid) -> DomainResult<bool>;
}
