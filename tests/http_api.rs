use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
};
use serde_json::{json, Value};
use todo_app::{build_router, state::AppState};
use todo_core::CoreState;
use tower::ServiceExt;

const ALICE: &str = "alice";
const BOB: &str = "bob";

fn app() -> axum::Router {
    let core = CoreState::in_memory().expect("in-memory database should open");
    build_router(AppState::new(core))
}

async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    owner: Option<&str>,
    payload: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(owner) = owner {
        builder = builder.header("x-owner-id", owner);
    }
    let body = match payload {
        Some(payload) => {
            builder = builder.header("content-type", "application/json");
            Body::from(payload.to_string())
        }
        None => Body::empty(),
    };
    let request = builder.body(body).expect("request should build");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("response expected");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body should be readable");

    if body.is_empty() {
        return (status, Value::Null);
    }

    let json = serde_json::from_slice::<Value>(&body).expect("body should be valid JSON");
    (status, json)
}

async fn create_list(app: &axum::Router, owner: &str, name: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/lists",
        Some(owner),
        Some(json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_str().expect("list id").to_string()
}

async fn create_todo(app: &axum::Router, owner: &str, list_id: &str, title: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/todos",
        Some(owner),
        Some(json!({ "list_id": list_id, "title": title })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["todo"]["id"].as_str().expect("todo id").to_string()
}

async fn todo_titles(app: &axum::Router, owner: &str, list_id: &str) -> Vec<String> {
    let (status, body) = send(app, Method::GET, &format!("/api/lists/{list_id}"), Some(owner), None).await;
    assert_eq!(status, StatusCode::OK);
    body["data"]["todos"]
        .as_array()
        .expect("todos array")
        .iter()
        .map(|t| t["title"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn health_needs_no_owner() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["message"], "ok");
}

#[tokio::test]
async fn missing_owner_is_unauthorized() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/lists", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());

    let (status, _) = send(&app, Method::GET, "/api/lists", Some("   "), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_list_validates_name() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/lists",
        Some(ALICE),
        Some(json!({ "name": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name is required");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/lists",
        Some(ALICE),
        Some(json!({ "name": "Errands", "description": "  " })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["color"], "#3b82f6");
    assert_eq!(body["data"]["position"], 0);
    assert!(body["data"]["description"].is_null());
}

#[tokio::test]
async fn drag_last_todo_to_top() {
    let app = app();
    let list_id = create_list(&app, ALICE, "Chores").await;
    let mut ids = Vec::new();
    for title in ["A", "B", "C", "D"] {
        ids.push(create_todo(&app, ALICE, &list_id, title).await);
    }

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/todos/{}/reorder", ids[3]),
        Some(ALICE),
        Some(json!({ "position": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    assert_eq!(todo_titles(&app, ALICE, &list_id).await, vec!["D", "A", "B", "C"]);

    let (_, detail) = send(&app, Method::GET, &format!("/api/lists/{list_id}"), Some(ALICE), None).await;
    let positions: Vec<i64> = detail["data"]["todos"]
        .as_array()
        .expect("todos array")
        .iter()
        .map(|t| t["position"].as_i64().unwrap_or(-1))
        .collect();
    assert_eq!(positions, vec![0, 1, 2, 3]);
}

#[tokio::test]
async fn reorder_clamps_out_of_range_index() {
    let app = app();
    let list_id = create_list(&app, ALICE, "Chores").await;
    let a = create_todo(&app, ALICE, &list_id, "A").await;
    create_todo(&app, ALICE, &list_id, "B").await;
    create_todo(&app, ALICE, &list_id, "C").await;

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/todos/{a}/reorder"),
        Some(ALICE),
        Some(json!({ "position": 9999 })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(todo_titles(&app, ALICE, &list_id).await, vec!["B", "C", "A"]);
}

#[tokio::test]
async fn non_integer_position_is_rejected() {
    let app = app();
    let list_id = create_list(&app, ALICE, "Chores").await;
    let a = create_todo(&app, ALICE, &list_id, "A").await;
    create_todo(&app, ALICE, &list_id, "B").await;

    for position in [json!("first"), json!(1.5), Value::Null] {
        let (status, body) = send(
            &app,
            Method::POST,
            &format!("/api/todos/{a}/reorder"),
            Some(ALICE),
            Some(json!({ "position": position })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    assert_eq!(todo_titles(&app, ALICE, &list_id).await, vec!["A", "B"]);
}

#[tokio::test]
async fn foreign_todo_is_not_found() {
    let app = app();
    let list_id = create_list(&app, ALICE, "Private").await;
    let todo_id = create_todo(&app, ALICE, &list_id, "Secret").await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/todos/{todo_id}/reorder"),
        Some(BOB),
        Some(json!({ "position": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Todo not found");

    let (status, body) = send(&app, Method::GET, &format!("/api/lists/{list_id}"), Some(BOB), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "List not found");

    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/todos/search?list_id={list_id}"),
        Some(BOB),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_ids_are_bad_requests() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/lists/not-a-uuid", Some(ALICE), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = send(
        &app,
        Method::GET,
        "/api/todos/search?list_id=nope",
        Some(ALICE),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_combines_text_and_priority() {
    let app = app();
    let list_id = create_list(&app, ALICE, "Shopping").await;

    let milk = create_todo(&app, ALICE, &list_id, "Buy milk").await;
    let bread = create_todo(&app, ALICE, &list_id, "Buy bread").await;
    create_todo(&app, ALICE, &list_id, "Call plumber").await;

    for (id, title, priority) in [(&milk, "Buy milk", "high"), (&bread, "Buy bread", "low")] {
        let (status, _) = send(
            &app,
            Method::PUT,
            &format!("/api/todos/{id}"),
            Some(ALICE),
            Some(json!({ "title": title, "priority": priority })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let search = |query: &str| format!("/api/todos/search?list_id={list_id}{query}");
    let titles = |body: &Value| -> Vec<String> {
        body["data"]
            .as_array()
            .expect("todo array")
            .iter()
            .map(|t| t["title"].as_str().unwrap_or_default().to_string())
            .collect()
    };

    let (status, body) = send(&app, Method::GET, &search("&q=BUY&priority=high"), Some(ALICE), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["Buy milk"]);

    let (_, body) = send(&app, Method::GET, &search("&q=buy"), Some(ALICE), None).await;
    assert_eq!(titles(&body), vec!["Buy milk", "Buy bread"]);

    let (_, body) = send(&app, Method::GET, &search("&priority=low"), Some(ALICE), None).await;
    assert_eq!(titles(&body), vec!["Buy bread", "Call plumber"]);

    let (status, body) = send(&app, Method::GET, &search("&priority=urgent&q=%20%20"), Some(ALICE), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["Buy milk", "Buy bread", "Call plumber"]);
}

#[tokio::test]
async fn toggle_updates_incomplete_count() {
    let app = app();
    let list_id = create_list(&app, ALICE, "Today").await;
    let first = create_todo(&app, ALICE, &list_id, "First").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/todos",
        Some(ALICE),
        Some(json!({ "list_id": list_id, "title": "Second" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["incomplete_count"], 2);
    assert_eq!(body["data"]["todo"]["position"], 1);

    let (status, body) = send(&app, Method::PATCH, &format!("/api/todos/{first}/toggle"), Some(ALICE), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["todo"]["is_completed"], true);
    assert!(body["data"]["todo"]["completed_at"].is_string());
    assert_eq!(body["data"]["incomplete_count"], 1);

    let (_, body) = send(&app, Method::PATCH, &format!("/api/todos/{first}/toggle"), Some(ALICE), None).await;
    assert_eq!(body["data"]["todo"]["is_completed"], false);
    assert!(body["data"]["todo"]["completed_at"].is_null());
    assert_eq!(body["data"]["incomplete_count"], 2);
}

#[tokio::test]
async fn delete_todo_renumbers_siblings() {
    let app = app();
    let list_id = create_list(&app, ALICE, "Chores").await;
    create_todo(&app, ALICE, &list_id, "A").await;
    let b = create_todo(&app, ALICE, &list_id, "B").await;
    create_todo(&app, ALICE, &list_id, "C").await;

    let (status, _) = send(&app, Method::DELETE, &format!("/api/todos/{b}"), Some(ALICE), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/todos/{b}?list_id={list_id}"),
        Some(ALICE),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, detail) = send(&app, Method::GET, &format!("/api/lists/{list_id}"), Some(ALICE), None).await;
    let todos = detail["data"]["todos"].as_array().expect("todos array");
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0]["title"], "A");
    assert_eq!(todos[1]["title"], "C");
    assert_eq!(todos[1]["position"], 1);
}

#[tokio::test]
async fn list_reposition_and_bulk_reorder() {
    let app = app();
    create_list(&app, ALICE, "A").await;
    let b = create_list(&app, ALICE, "B").await;
    let c = create_list(&app, ALICE, "C").await;
    let foreign = create_list(&app, BOB, "Bob's").await;

    let names = |body: &Value| -> Vec<String> {
        body["data"]
            .as_array()
            .expect("list array")
            .iter()
            .map(|l| l["name"].as_str().unwrap_or_default().to_string())
            .collect()
    };

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/lists/{c}/reposition"),
        Some(ALICE),
        Some(json!({ "position": -5 })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, Method::GET, "/api/lists", Some(ALICE), None).await;
    assert_eq!(names(&body), vec!["C", "A", "B"]);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/lists/reorder",
        Some(ALICE),
        Some(json!({ "list_ids": [b, foreign, b] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["B", "C", "A"]);

    let (_, body) = send(&app, Method::GET, "/api/lists", Some(BOB), None).await;
    assert_eq!(names(&body), vec!["Bob's"]);

    let (_, body) = send(&app, Method::GET, "/api/lists?q=a", Some(ALICE), None).await;
    assert_eq!(names(&body), vec!["A"]);
}

#[tokio::test]
async fn bulk_reorder_skips_malformed_ids() {
    let app = app();
    let a = create_list(&app, ALICE, "A").await;
    create_list(&app, ALICE, "B").await;
    let c = create_list(&app, ALICE, "C").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/lists/reorder",
        Some(ALICE),
        Some(json!({ "list_ids": [c, "list-row-7", "", a] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["data"]
        .as_array()
        .expect("list array")
        .iter()
        .map(|l| l["name"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}

#[tokio::test]
async fn delete_list_cascades() {
    let app = app();
    let keep = create_list(&app, ALICE, "Keep").await;
    let doomed = create_list(&app, ALICE, "Doomed").await;
    let todo = create_todo(&app, ALICE, &doomed, "Gone too").await;

    let (status, _) = send(&app, Method::DELETE, &format!("/api/lists/{doomed}"), Some(ALICE), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/todos/{todo}?list_id={doomed}"),
        Some(ALICE),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/lists/{keep}"),
        Some(ALICE),
        Some(json!({ "name": "Kept", "color": "#10b981" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Kept");
    assert_eq!(body["data"]["color"], "#10b981");
    assert_eq!(body["data"]["position"], 0);
}

#[tokio::test]
async fn new_and_edited_todos_default_to_low_priority() {
    let app = app();
    let list_id = create_list(&app, ALICE, "Errands").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/todos",
        Some(ALICE),
        Some(json!({ "list_id": list_id, "title": "Post letter" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["todo"]["priority"], "low");
    let todo_id = body["data"]["todo"]["id"].as_str().expect("todo id").to_string();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/todos/{todo_id}"),
        Some(ALICE),
        Some(json!({ "title": "Post letter", "priority": "high" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["priority"], "high");

    for payload in [
        json!({ "title": "Post letter" }),
        json!({ "title": "Post letter", "priority": "" }),
    ] {
        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/api/todos/{todo_id}"),
            Some(ALICE),
            Some(payload),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["priority"], "low");
    }
}

#[tokio::test]
async fn get_todo_checks_list_membership() {
    let app = app();
    let home = create_list(&app, ALICE, "Home").await;
    let work = create_list(&app, ALICE, "Work").await;
    let todo_id = create_todo(&app, ALICE, &home, "Water plants").await;

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/todos/{todo_id}?list_id={home}"),
        Some(ALICE),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], todo_id.as_str());
    assert_eq!(body["data"]["title"], "Water plants");
    assert_eq!(body["data"]["list_id"], home.as_str());

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/todos/{todo_id}?list_id={work}"),
        Some(ALICE),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Todo not found");
}
