//! Todo List Entity
//!
//! A named, ordered collection of todos belonging to one owner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::{DomainError, DomainResult, Entity, Positioned};
use super::owner::OwnerId;

pub const MAX_LIST_NAME_LEN: usize = 100;
pub const DEFAULT_LIST_COLOR: &str = "#3b82f6";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: Uuid,
    pub owner_id: OwnerId,
    pub name: String,
    pub description: Option<String>,
    /// Hex colour shown next to the list name
    pub color: String,
    /// Rank among the owner's lists
    pub position: i64,
    pub created_at: DateTime<Utc>,
}

impl Entity for TodoList {
    type Id = Uuid;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Positioned for TodoList {
    type Scope = OwnerId;

    fn scope(&self) -> &OwnerId {
        &self.owner_id
    }

    fn position(&self) -> i64 {
        self.position
    }
}

/// Validated user input for creating or updating a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDraft {
    pub name: String,
    pub description: Option<String>,
    pub color: String,
}

impl ListDraft {
    pub fn new(name: &str, description: Option<&str>, color: Option<&str>) -> DomainResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::invalid("Name is required"));
        }
        if name.chars().count() > MAX_LIST_NAME_LEN {
            return Err(DomainError::invalid(format!(
                "Name must be {} characters or less",
                MAX_LIST_NAME_LEN
            )));
        }

        Ok(Self {
            name: name.to_string(),
            description: non_blank(description),
            color: non_blank(color).unwrap_or_else(|| DEFAULT_LIST_COLOR.to_string()),
        })
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
