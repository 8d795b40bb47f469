//! Todo Search
//!
//! Filtered, position-ordered views of one list. Predicates are evaluated in
//! Rust so that case folding covers non-ASCII titles the same way everywhere.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{DomainResult, Todo, TodoFilter};
use crate::repository::traits::{Repository, SearchableRepository};

#[async_trait]
impl SearchableRepository<Todo> for super::todo_repo::TodoRepository {
    type Filter = TodoFilter;

    async fn search(&self, list_id: &Uuid, filter: &TodoFilter) -> DomainResult<Vec<Todo>> {
        let mut todos = self.list(list_id).await?;
        todos.retain(|todo| filter.matches(todo));
        log::debug!(
            "search in list {} ({:?}) matched {} todos",
            list_id,
            filter,
            todos.len()
        );
        Ok(todos)
    }
}
