//! To-do item endpoints
//!
//! Each handler acquires one connection, runs its statements on it and
//! releases it when the handler returns, whichever way it returns.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    routing::get,
    Json, Router,
};

use crate::db::{ItemRepo, NewItem};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::TodoItemDto;

/// GET /todoitems - list all items, unordered
async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<TodoItemDto>>, ApiError> {
    let mut conn = state.db().connect().await?;
    let items = ItemRepo::new(&mut conn).list().await?;

    Ok(Json(items.into_iter().map(TodoItemDto::from).collect()))
}

/// GET /todoitems/{id} - get a single item
async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<TodoItemDto>, ApiError> {
    let mut conn = state.db().connect().await?;
    let item = ItemRepo::new(&mut conn)
        .get(id)
        .await?
        .ok_or_else(|| ApiError::item_not_found(id))?;

    Ok(Json(TodoItemDto::from(item)))
}

/// POST /todoitems - create an item; any `id` in the body is ignored
async fn create_item(
    State(state): State<AppState>,
    Json(req): Json<TodoItemDto>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<TodoItemDto>), ApiError> {
    let new = NewItem {
        item_name: req.item_name,
        is_complete: req.is_complete,
    };

    let mut conn = state.db().connect().await?;
    let item = ItemRepo::new(&mut conn).create(&new).await?;
    tracing::info!(id = item.id, "todo item created");

    let location = format!("/todoitems/{}", item.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TodoItemDto::from(item)),
    ))
}

/// PUT /todoitems/{id} - overwrite name and completion flag
async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<TodoItemDto>,
) -> Result<Json<TodoItemDto>, ApiError> {
    let mut conn = state.db().connect().await?;
    let mut repo = ItemRepo::new(&mut conn);

    let mut item = repo
        .get(id)
        .await?
        .ok_or_else(|| ApiError::item_not_found(id))?;

    item.item_name = req.item_name;
    item.is_complete = req.is_complete;

    if repo.update(&item).await? == 0 {
        // Deleted between the read and the write
        tracing::debug!(id, "update matched no rows");
    }

    Ok(Json(TodoItemDto::from(item)))
}

/// DELETE /todoitems/{id} - delete an item
async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let mut conn = state.db().connect().await?;
    let mut repo = ItemRepo::new(&mut conn);

    if repo.get(id).await?.is_none() {
        return Err(ApiError::item_not_found(id));
    }

    if repo.delete(id).await? == 0 {
        tracing::debug!(id, "delete matched no rows");
    }

    Ok(StatusCode::NO_CONTENT)
}

/// To-do item routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/todoitems", get(list_items).post(create_item))
        .route(
            "/todoitems/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}
