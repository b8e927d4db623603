use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

use taskboard::{routes::router, state::AppState, test_helpers::test_state};

async fn send(state: &Arc<AppState>, request: Request<Body>) -> axum::response::Response {
    router(state.clone()).oneshot(request).await.unwrap()
}

async fn json_response(
    state: &Arc<AppState>,
    request: Request<Body>,
) -> (StatusCode, serde_json::Value) {
    let response = send(state, request).await;
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn add_task_request(name: &str, due_date: &str, category_id: i64) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/tasks/add")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "name": name,
                "description": format!("{name} description"),
                "dueDate": due_date,
                "categoryId": category_id,
            })
            .to_string(),
        ))
        .unwrap()
}

fn list_tasks_request() -> Request<Body> {
    Request::builder().uri("/tasks").body(Body::empty()).unwrap()
}

async fn seeded_category_id(state: &Arc<AppState>) -> i64 {
    let (status, categories) = json_response(
        state,
        Request::builder()
            .uri("/categories")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    categories.as_array().unwrap()[0]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn categories_are_listed_by_name_without_color() {
    let state = test_state().await;

    let (status, categories) = json_response(
        &state,
        Request::builder()
            .uri("/categories")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let categories = categories.as_array().unwrap();
    assert!(!categories.is_empty());
    let names: Vec<&str> = categories
        .iter()
        .map(|category| category["name"].as_str().unwrap())
        .collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
    assert!(categories[0]["color"].is_null());
}

#[tokio::test]
async fn empty_store_lists_no_tasks() {
    let state = test_state().await;

    let (status, tasks) = json_response(&state, list_tasks_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tasks, json!([]));
}

#[tokio::test]
async fn added_task_appears_with_formatted_due_date() {
    let state = test_state().await;
    let category_id = seeded_category_id(&state).await;

    let response = send(&state, add_task_request("Ship release", "2024-03-15", category_id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());

    let (status, tasks) = json_response(&state, list_tasks_request()).await;
    assert_eq!(status, StatusCode::OK);
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 1);

    let task = &tasks[0];
    assert_eq!(task["name"].as_str(), Some("Ship release"));
    assert_eq!(task["description"].as_str(), Some("Ship release description"));
    assert_eq!(task["dueDate"].as_str(), Some("Fri Mar 15 2024"));
    assert!(task["category"].as_str().is_some());
    assert!(task["color"].as_str().unwrap().starts_with('#'));
    assert!(task["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn tasks_are_listed_most_recent_id_first() {
    let state = test_state().await;
    let category_id = seeded_category_id(&state).await;

    for name in ["first", "second", "third"] {
        let response = send(&state, add_task_request(name, "2024-06-01", category_id)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let (_, tasks) = json_response(&state, list_tasks_request()).await;
    let ids: Vec<i64> = tasks
        .as_array()
        .unwrap()
        .iter()
        .map(|task| task["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids.len(), 3);
    assert!(ids.windows(2).all(|pair| pair[0] > pair[1]));
    assert_eq!(tasks.as_array().unwrap()[0]["name"].as_str(), Some("third"));
}

#[tokio::test]
async fn unknown_category_is_a_client_error_and_inserts_nothing() {
    let state = test_state().await;

    let (status, error) =
        json_response(&state, add_task_request("Orphan", "2024-03-15", 999_999)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error["error"].as_str(), Some("Unknown category"));

    let (_, tasks) = json_response(&state, list_tasks_request()).await;
    assert_eq!(tasks.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn invalid_due_date_is_rejected() {
    let state = test_state().await;
    let category_id = seeded_category_id(&state).await;

    let (status, error) =
        json_response(&state, add_task_request("Bad date", "yesterday", category_id)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"].as_str(), Some("Invalid due date"));
}

#[tokio::test]
async fn malformed_body_is_a_client_error() {
    let state = test_state().await;

    let response = send(
        &state,
        Request::builder()
            .method("POST")
            .uri("/tasks/add")
            .header("content-type", "application/json")
            .body(Body::from("{\"name\": \"missing the rest\"}"))
            .unwrap(),
    )
    .await;
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn deleting_a_task_removes_it() {
    let state = test_state().await;
    let category_id = seeded_category_id(&state).await;

    let response = send(&state, add_task_request("Doomed", "2024-03-15", category_id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let (_, tasks) = json_response(&state, list_tasks_request()).await;
    let id = tasks.as_array().unwrap()[0]["id"].as_i64().unwrap();

    let response = send(
        &state,
        Request::builder()
            .method("POST")
            .uri(format!("/tasks/delete?id={id}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());

    let (_, tasks) = json_response(&state, list_tasks_request()).await;
    assert_eq!(tasks.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn deleting_a_missing_id_is_a_no_op() {
    let state = test_state().await;
    let category_id = seeded_category_id(&state).await;

    let response = send(&state, add_task_request("Survivor", "2024-03-15", category_id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(
        &state,
        Request::builder()
            .method("POST")
            .uri("/tasks/delete?id=999999")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let (_, tasks) = json_response(&state, list_tasks_request()).await;
    assert_eq!(tasks.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn delete_without_an_id_is_a_client_error() {
    let state = test_state().await;

    let response = send(
        &state,
        Request::builder()
            .method("POST")
            .uri("/tasks/delete")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
