//! User handlers. Users are always returned with their favorites.

use crate::error::AppError;
use crate::extractors::{JsonBody, PathParam};
use crate::model::NewUser;
use crate::response::{created, ok, ok_many};
use crate::service::{FavoriteService, UserService};
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;

pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(ok_many(UserService::list(&state.pool).await?))
}

pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewUser>,
) -> Result<impl IntoResponse, AppError> {
    Ok(created(UserService::create(&state.pool, body).await?))
}

pub async fn read_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(UserService::get(&state.pool, id).await?))
}

pub async fn delete_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(UserService::delete(&state.pool, id).await?))
}

/// GET /users/:id/favorites
pub async fn list_user_favorites(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok_many(FavoriteService::list_for_user(&state.pool, id).await?))
}
