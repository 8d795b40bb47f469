//! Demo data
//!
//! Gives a fresh install something to drag around.

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{DomainResult, OwnerId, Priority, Todo, TodoList};
use crate::repository::ListImportOperations;
use crate::CoreState;

struct DemoList {
    name: &'static str,
    description: &'static str,
    color: &'static str,
    todos: &'static [(&'static str, Option<&'static str>, Priority)],
}

const DEMO_LISTS: &[DemoList] = &[
    DemoList {
        name: "Work Tasks",
        description: "Important work items",
        color: "#3b82f6",
        todos: &[
            ("Review project plan", Some("Check the new requirements document"), Priority::High),
            ("Update documentation", None, Priority::Medium),
            ("Send weekly report", None, Priority::Low),
        ],
    },
    DemoList {
        name: "Personal",
        description: "Personal tasks and reminders",
        color: "#10b981",
        todos: &[
            ("Buy groceries", None, Priority::Medium),
            ("Call mom", None, Priority::High),
        ],
    },
];

/// Seed demo lists for `owner` unless they already have lists.
/// Either every demo list is written or none is. Returns whether anything
/// was written.
pub async fn seed_demo_data(state: &CoreState, owner: &OwnerId) -> DomainResult<bool> {
    let batch: Vec<(TodoList, Vec<Todo>)> = DEMO_LISTS
        .iter()
        .map(|demo| {
            let list = TodoList {
                id: Uuid::new_v4(),
                owner_id: owner.clone(),
                name: demo.name.to_string(),
                description: Some(demo.description.to_string()),
                color: demo.color.to_string(),
                position: 0,
                created_at: Utc::now(),
            };
            let todos = demo
                .todos
                .iter()
                .map(|&(title, note, priority)| Todo {
                    id: Uuid::new_v4(),
                    list_id: list.id,
                    title: title.to_string(),
                    note: note.map(str::to_string),
                    due_date: None,
                    priority: Some(priority),
                    is_completed: false,
                    completed_at: None,
                    position: 0,
                    created_at: Utc::now(),
                })
                .collect();
            (list, todos)
        })
        .collect();

    let seeded = state.lists.import_if_empty(owner, &batch).await?;
    if !seeded {
        log::debug!("demo data for {} already present", owner);
    }
    Ok(seeded)
}
