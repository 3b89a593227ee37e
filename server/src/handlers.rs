use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use todo_core::{Health, NewTodo, Todo, TodoPatch};

use crate::error::ApiError;
use crate::store::TodoStore;

// Extractors are taken as `Result` so their rejections go through `ApiError`
// and come back as JSON like every other failure.
type JsonBody<T> = Result<Json<T>, JsonRejection>;
type IdPath = Result<Path<i64>, PathRejection>;

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Todo API" }))
}

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

pub async fn list_todos<S: TodoStore>(
    State(store): State<S>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(store.list().await?))
}

pub async fn get_todo<S: TodoStore>(
    State(store): State<S>,
    id: IdPath,
) -> Result<Json<Todo>, ApiError> {
    let Path(id) = id?;
    Ok(Json(store.get(id).await?))
}

pub async fn create_todo<S: TodoStore>(
    State(store): State<S>,
    input: JsonBody<NewTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(input) = input?;
    let todo = store.create(input).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo<S: TodoStore>(
    State(store): State<S>,
    id: IdPath,
    patch: JsonBody<TodoPatch>,
) -> Result<Json<Todo>, ApiError> {
    let Path(id) = id?;
    let Json(patch) = patch?;
    Ok(Json(store.update(id, patch).await?))
}

pub async fn delete_todo<S: TodoStore>(
    State(store): State<S>,
    id: IdPath,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
