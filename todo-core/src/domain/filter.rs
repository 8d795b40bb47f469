//! Search predicates
//!
//! Filters never fail: blank text and unknown categories simply drop the
//! corresponding predicate. Active predicates are AND-combined.

use super::priority::PriorityFilter;
use super::todo::Todo;
use super::todo_list::TodoList;

/// Case-insensitive substring predicate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFilter(Option<String>);

impl TextFilter {
    pub fn new(raw: Option<&str>) -> Self {
        let needle = raw
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);
        Self(needle)
    }

    pub fn matches(&self, haystack: &str) -> bool {
        match &self.0 {
            None => true,
            Some(needle) => haystack.to_lowercase().contains(needle.as_str()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFilter {
    pub text: TextFilter,
    pub priority: PriorityFilter,
}

impl TodoFilter {
    pub fn new(text: Option<&str>, priority: Option<&str>) -> Self {
        Self {
            text: TextFilter::new(text),
            priority: PriorityFilter::from_raw(priority),
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        self.text.matches(&todo.title) && self.priority.matches(todo.priority)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub text: TextFilter,
}

impl ListFilter {
    pub fn new(text: Option<&str>) -> Self {
        Self {
            text: TextFilter::new(text),
        }
    }

    pub fn matches(&self, list: &TodoList) -> bool {
        self.text.matches(&list.name)
    }
}
