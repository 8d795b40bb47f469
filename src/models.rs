use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Target index of a drag-and-drop move
#[derive(Debug, Deserialize)]
pub struct PositionRequest {
    pub position: i64,
}

/// Ids arrive as raw strings; entries that are not UUIDs are skipped
#[derive(Debug, Deserialize)]
pub struct ReorderListsRequest {
    pub list_ids: Vec<String>,
}

impl ReorderListsRequest {
    pub fn parsed_ids(&self) -> Vec<Uuid> {
        self.list_ids
            .iter()
            .filter_map(|raw| Uuid::parse_str(raw.trim()).ok())
            .collect()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListsQuery {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchTodosQuery {
    pub list_id: Uuid,
    pub q: Option<String>,
    pub priority: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TodoScopeQuery {
    pub list_id: Uuid,
}
