use axum::{extract::State, http::StatusCode, Json};
use todo_core::commands::{self, ListDetail, ListForm};
use todo_core::domain::TodoList;
use uuid::Uuid;

use crate::{
    error::AppResult,
    extract::{Actor, ApiJson, ApiPath, ApiQuery},
    models::{ApiResponse, ListsQuery, PositionRequest, ReorderListsRequest},
    state::AppState,
};

pub async fn list_lists(
    State(state): State<AppState>,
    Actor(actor): Actor,
    ApiQuery(query): ApiQuery<ListsQuery>,
) -> AppResult<Json<ApiResponse<Vec<TodoList>>>> {
    let lists = commands::list_lists(&state.core, &actor, query.q.as_deref()).await?;
    Ok(Json(ApiResponse { data: lists }))
}

pub async fn create_list(
    State(state): State<AppState>,
    Actor(actor): Actor,
    ApiJson(form): ApiJson<ListForm>,
) -> AppResult<(StatusCode, Json<ApiResponse<TodoList>>)> {
    let list = commands::create_list(&state.core, &actor, &form).await?;
    tracing::info!(list_id = %list.id, position = list.position, "list created");
    Ok((StatusCode::CREATED, Json(ApiResponse { data: list })))
}

pub async fn get_list(
    State(state): State<AppState>,
    Actor(actor): Actor,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<ApiResponse<ListDetail>>> {
    let detail = commands::get_list(&state.core, &actor, id).await?;
    Ok(Json(ApiResponse { data: detail }))
}

pub async fn update_list(
    State(state): State<AppState>,
    Actor(actor): Actor,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(form): ApiJson<ListForm>,
) -> AppResult<Json<ApiResponse<TodoList>>> {
    let list = commands::update_list(&state.core, &actor, id, &form).await?;
    Ok(Json(ApiResponse { data: list }))
}

pub async fn delete_list(
    State(state): State<AppState>,
    Actor(actor): Actor,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<StatusCode> {
    commands::delete_list(&state.core, &actor, id).await?;
    tracing::info!(list_id = %id, "list deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn reposition_list(
    State(state): State<AppState>,
    Actor(actor): Actor,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<PositionRequest>,
) -> AppResult<StatusCode> {
    let outcome = commands::reposition_list(&state.core, &actor, id, body.position).await?;
    tracing::debug!(list_id = %id, ?outcome, "list repositioned");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn reorder_lists(
    State(state): State<AppState>,
    Actor(actor): Actor,
    ApiJson(body): ApiJson<ReorderListsRequest>,
) -> AppResult<Json<ApiResponse<Vec<TodoList>>>> {
    let lists = commands::reorder_lists(&state.core, &actor, &body.parsed_ids()).await?;
    Ok(Json(ApiResponse { data: lists }))
}
