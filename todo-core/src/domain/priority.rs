//! Todo priority
//!
//! A small fixed category attached to todos, also used as the category
//! predicate of the search filter.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Given to new todos and to edits without a usable priority
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Strict parse: `None` for anything outside the enumeration
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(raw))
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category predicate of a todo query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    Any,
    Only(Priority),
}

impl PriorityFilter {
    /// Permissive parse: empty, absent and unknown values all mean `Any`
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.and_then(Priority::parse) {
            Some(p) => PriorityFilter::Only(p),
            None => PriorityFilter::Any,
        }
    }

    /// Todos without a priority never match a specific category
    pub fn matches(&self, priority: Option<Priority>) -> bool {
        match self {
            PriorityFilter::Any => true,
            PriorityFilter::Only(wanted) => priority == Some(*wanted),
        }
    }
}
