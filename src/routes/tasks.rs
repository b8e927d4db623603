use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sea_orm::SqlErr;
use serde::{Deserialize, Serialize};

use crate::{
    db::{
        entities::{category, task},
        task_repo,
    },
    error::AppError,
    state::AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub name: String,
    pub description: String,
    pub due_date: String,
    pub category_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct DeleteTaskParams {
    pub id: i32,
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[serde(rename = "dueDate")]
    pub due_date: String,
    pub category: String,
    pub color: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/tasks", get(list_tasks))
        .route("/tasks/add", post(add_task))
        .route("/tasks/delete", post(delete_task))
        .with_state(state)
}

async fn list_tasks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TaskResponse>>, AppError> {
    let tasks = task_repo::list_tasks(&state.db)
        .await
        .map_err(|_| AppError::new(StatusCode::INTERNAL_SERVER_ERROR, "Task fetch failed"))?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

async fn add_task(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateTaskRequest>,
) -> Result<StatusCode, AppError> {
    let due_date = parse_due_date(&body.due_date)?;
    task_repo::insert_task(
        &state.db,
        &body.name,
        &body.description,
        due_date,
        body.category_id,
    )
    .await
    .map_err(|err| match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            AppError::new(StatusCode::UNPROCESSABLE_ENTITY, "Unknown category")
        }
        _ => AppError::new(StatusCode::INTERNAL_SERVER_ERROR, "Create task failed"),
    })?;
    Ok(StatusCode::OK)
}

async fn delete_task(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DeleteTaskParams>,
) -> Result<StatusCode, AppError> {
    // an id with no matching row removes nothing and still succeeds
    let _removed = task_repo::delete_task(&state.db, params.id)
        .await
        .map_err(|_| AppError::new(StatusCode::INTERNAL_SERVER_ERROR, "Delete task failed"))?;
    Ok(StatusCode::OK)
}

/// Accepts the date-only string the form submits. Stored as midnight with no
/// timezone so the read-back date never shifts with the server's locale.
fn parse_due_date(raw: &str) -> Result<NaiveDateTime, AppError> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::new(StatusCode::BAD_REQUEST, "Invalid due date"))?;
    Ok(date.and_time(NaiveTime::MIN))
}

/// Calendar-date form, e.g. `Fri Mar 15 2024`.
fn format_due_date(stored: NaiveDateTime) -> String {
    stored.date().format("%a %b %d %Y").to_string()
}

impl From<(task::Model, category::Model)> for TaskResponse {
    fn from((task, category): (task::Model, category::Model)) -> Self {
        Self {
            id: task.id,
            name: task.name,
            description: task.description,
            due_date: format_due_date(task.due_date),
            category: category.name,
            color: category.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{format_due_date, parse_due_date};

    #[test]
    fn due_date_round_trips_without_timezone_shift() {
        let stored = parse_due_date("2024-03-15").expect("date should parse");
        assert_eq!(stored.to_string(), "2024-03-15 00:00:00");
        assert_eq!(format_due_date(stored), "Fri Mar 15 2024");
    }

    #[test]
    fn due_date_input_is_trimmed() {
        let stored = parse_due_date(" 2024-12-01 ").expect("date should parse");
        assert_eq!(format_due_date(stored), "Sun Dec 01 2024");
    }

    #[test]
    fn garbage_due_date_is_rejected() {
        let err = parse_due_date("not-a-date").expect_err("parse should fail");
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
    }
}
