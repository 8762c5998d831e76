use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use mongodb::bson::oid::ObjectId;
use serde_json::json;

use crate::state::AppState;

use super::dto::{CreateTask, UpdateTask};
use super::model::TaskResponse;
use super::queries;

type Rejection = (StatusCode, Json<serde_json::Value>);

fn parse_id(raw: &str) -> Result<ObjectId, Rejection> {
    ObjectId::parse_str(raw).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "Invalid task id" })),
        )
    })
}

fn db_error(e: mongodb::error::Error) -> Rejection {
    eprintln!("Database error on tasks: {e}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "detail": "Database error" })),
    )
}

fn not_found() -> Rejection {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "detail": "Task not found" })),
    )
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateTask>,
) -> Result<impl IntoResponse, Rejection> {
    let task = queries::create_task(&state.db, body)
        .await
        .map_err(db_error)?;

    Ok(Json(TaskResponse::from(task)))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, Rejection> {
    let tasks = queries::list_tasks(&state.db).await.map_err(db_error)?;

    let response: Vec<TaskResponse> = tasks.into_iter().map(TaskResponse::from).collect();
    Ok(Json(response))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateTask>,
) -> Result<impl IntoResponse, Rejection> {
    let id = parse_id(&id)?;

    let matched = queries::update_task(&state.db, id, &body)
        .await
        .map_err(db_error)?;

    if !matched {
        return Err(not_found());
    }

    Ok(Json(json!({ "message": "Task updated successfully" })))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Rejection> {
    let id = parse_id(&id)?;

    let deleted = queries::delete_task(&state.db, id)
        .await
        .map_err(db_error)?;

    if !deleted {
        return Err(not_found());
    }

    Ok(Json(json!({ "message": "Task deleted successfully" })))
}
