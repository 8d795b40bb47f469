use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    routes::{healthcheck, lists, todos},
    state::AppState,
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/api/lists", get(lists::list_lists).post(lists::create_list))
        .route("/api/lists/reorder", post(lists::reorder_lists))
        .route(
            "/api/lists/{id}",
            get(lists::get_list)
                .put(lists::update_list)
                .delete(lists::delete_list),
        )
        .route("/api/lists/{id}/reposition", post(lists::reposition_list))
        .route("/api/todos", post(todos::create_todo))
        .route("/api/todos/search", get(todos::search_todos))
        .route(
            "/api/todos/{id}",
            get(todos::get_todo)
                .put(todos::update_todo)
                .delete(todos::delete_todo),
        )
        .route("/api/todos/{id}/toggle", patch(todos::toggle_todo))
        .route("/api/todos/{id}/reorder", post(todos::reorder_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
