pub mod lists;
pub mod todos;

use axum::Json;

use crate::models::{ApiMessage, ApiResponse};

pub async fn healthcheck() -> Json<ApiResponse<ApiMessage>> {
    Json(ApiResponse {
        data: ApiMessage {
            message: "ok".to_string(),
        },
    })
}
