use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use mongodb::bson::oid::ObjectId;
use serde_json::json;

use crate::state::AppState;

use super::{queries, CreateTodo, TodoResponse};

type Rejection = (StatusCode, Json<serde_json::Value>);

fn db_error(e: mongodb::error::Error) -> Rejection {
    eprintln!("Database error on todos: {e}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "detail": "Database error" })),
    )
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateTodo>,
) -> Result<impl IntoResponse, Rejection> {
    let item = queries::create_todo(&state.db, body.content)
        .await
        .map_err(db_error)?;

    Ok(Json(TodoResponse::from(item)))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, Rejection> {
    let items = queries::list_todos(&state.db).await.map_err(db_error)?;

    let response: Vec<TodoResponse> = items.into_iter().map(TodoResponse::from).collect();
    Ok(Json(response))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Rejection> {
    let id = ObjectId::parse_str(&id).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "Invalid todo id" })),
        )
    })?;

    let deleted = queries::delete_todo(&state.db, id)
        .await
        .map_err(db_error)?;

    if !deleted {
        return Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "Todo not found" })),
        ));
    }

    Ok(Json(json!({ "message": "Todo deleted successfully" })))
}
