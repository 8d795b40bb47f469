use axum::{extract::State, http::StatusCode, Json};
use todo_core::commands::{self, NewTodo, TodoWithCount};
use todo_core::domain::{Todo, TodoUpdate};
use uuid::Uuid;

use crate::{
    error::AppResult,
    extract::{Actor, ApiJson, ApiPath, ApiQuery},
    models::{ApiResponse, PositionRequest, SearchTodosQuery, TodoScopeQuery},
    state::AppState,
};

pub async fn search_todos(
    State(state): State<AppState>,
    Actor(actor): Actor,
    ApiQuery(query): ApiQuery<SearchTodosQuery>,
) -> AppResult<Json<ApiResponse<Vec<Todo>>>> {
    let todos = commands::search_todos(
        &state.core,
        &actor,
        query.list_id,
        query.q.as_deref(),
        query.priority.as_deref(),
    )
    .await?;
    Ok(Json(ApiResponse { data: todos }))
}

pub async fn create_todo(
    State(state): State<AppState>,
    Actor(actor): Actor,
    ApiJson(new): ApiJson<NewTodo>,
) -> AppResult<(StatusCode, Json<ApiResponse<TodoWithCount>>)> {
    let created = commands::create_todo(&state.core, &actor, &new).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse { data: created })))
}

pub async fn get_todo(
    State(state): State<AppState>,
    Actor(actor): Actor,
    ApiPath(id): ApiPath<Uuid>,
    ApiQuery(query): ApiQuery<TodoScopeQuery>,
) -> AppResult<Json<ApiResponse<Todo>>> {
    let todo = commands::get_todo(&state.core, &actor, query.list_id, id).await?;
    Ok(Json(ApiResponse { data: todo }))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Actor(actor): Actor,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(update): ApiJson<TodoUpdate>,
) -> AppResult<Json<ApiResponse<Todo>>> {
    let todo = commands::update_todo(&state.core, &actor, id, &update).await?;
    Ok(Json(ApiResponse { data: todo }))
}

pub async fn toggle_todo(
    State(state): State<AppState>,
    Actor(actor): Actor,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<ApiResponse<TodoWithCount>>> {
    let toggled = commands::toggle_todo(&state.core, &actor, id).await?;
    Ok(Json(ApiResponse { data: toggled }))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Actor(actor): Actor,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<StatusCode> {
    commands::delete_todo(&state.core, &actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn reorder_todo(
    State(state): State<AppState>,
    Actor(actor): Actor,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<PositionRequest>,
) -> AppResult<StatusCode> {
    let outcome = commands::reorder_todo(&state.core, &actor, id, body.position).await?;
    tracing::debug!(todo_id = %id, ?outcome, "todo repositioned");
    Ok(StatusCode::NO_CONTENT)
}
