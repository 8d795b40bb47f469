//! Todo Entity
//!
//! A single task inside a todo list.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::{DomainError, DomainResult, Entity, Positioned};
use super::priority::Priority;
use super::todo_list::non_blank;

pub const MAX_TODO_TITLE_LEN: usize = 200;

/// Format used by `datetime-local` form inputs
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub list_id: Uuid,
    pub title: String,
    pub note: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    pub priority: Option<Priority>,
    pub is_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    /// Rank among the todos of the same list
    pub position: i64,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Flip completion, stamping or clearing `completed_at`
    pub fn toggle(&mut self, now: DateTime<Utc>) {
        self.is_completed = !self.is_completed;
        self.completed_at = if self.is_completed { Some(now) } else { None };
    }
}

impl Entity for Todo {
    type Id = Uuid;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Positioned for Todo {
    type Scope = Uuid;

    fn scope(&self) -> &Uuid {
        &self.list_id
    }

    fn position(&self) -> i64 {
        self.position
    }
}

/// Trim and validate a todo title
pub fn validate_title(title: &str) -> DomainResult<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(DomainError::invalid("Title is required"));
    }
    if title.chars().count() > MAX_TODO_TITLE_LEN {
        return Err(DomainError::invalid(format!(
            "Title must be {} characters or less",
            MAX_TODO_TITLE_LEN
        )));
    }
    Ok(title.to_string())
}

/// Edit form for an existing todo, as submitted by the client
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TodoUpdate {
    pub title: String,
    pub note: Option<String>,
    /// `YYYY-MM-DDTHH:MM`; blank clears the date, an unparsable value keeps it
    pub due_date: Option<String>,
    /// Absent, blank and unknown values all mean low
    pub priority: Option<String>,
}

impl TodoUpdate {
    /// Apply the edit to `todo`. Nothing is changed if validation fails.
    pub fn apply(&self, todo: &mut Todo) -> DomainResult<()> {
        let title = validate_title(&self.title)?;

        todo.title = title;
        todo.note = non_blank(self.note.as_deref());

        match non_blank(self.due_date.as_deref()) {
            None => todo.due_date = None,
            Some(raw) => match NaiveDateTime::parse_from_str(&raw, DUE_DATE_FORMAT) {
                Ok(due) => todo.due_date = Some(due),
                Err(e) => log::debug!("keeping due date of {}, bad input {:?}: {}", todo.id, raw, e),
            },
        }

        todo.priority = Some(
            self.priority
                .as_deref()
                .and_then(Priority::parse)
                .unwrap_or_default(),
        );

        Ok(())
    }
}
