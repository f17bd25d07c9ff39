//! Favorites handlers. The `:kind` path segment is one of planets, characters, vehicles.

use crate::error::AppError;
use crate::extractors::{JsonBody, PathParam};
use crate::model::{FavoriteKind, FavoriteRequest};
use crate::response::{created, ok, ok_many};
use crate::service::FavoriteService;
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;

fn parse_kind(segment: &str) -> Result<FavoriteKind, AppError> {
    FavoriteKind::from_segment(segment)
        .ok_or_else(|| AppError::NotFound(format!("favorites of type '{}'", segment)))
}

pub async fn list_favorites(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(ok_many(FavoriteService::list(&state.pool).await?))
}

/// POST /favorites: the body names exactly one target.
pub async fn create_favorite(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<FavoriteRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new = body.into_new(None)?;
    Ok(created(FavoriteService::create(&state.pool, new).await?))
}

pub async fn list_favorites_by_kind(
    State(state): State<AppState>,
    PathParam(kind): PathParam<String>,
) -> Result<impl IntoResponse, AppError> {
    let kind = parse_kind(&kind)?;
    Ok(ok_many(FavoriteService::list_by_kind(&state.pool, kind).await?))
}

/// POST /favorites/:kind: the body must carry the key matching `kind` and no other target.
pub async fn create_favorite_of_kind(
    State(state): State<AppState>,
    PathParam(kind): PathParam<String>,
    JsonBody(body): JsonBody<FavoriteRequest>,
) -> Result<impl IntoResponse, AppError> {
    let kind = parse_kind(&kind)?;
    let new = body.into_new(Some(kind))?;
    Ok(created(FavoriteService::create(&state.pool, new).await?))
}

pub async fn read_favorite(
    State(state): State<AppState>,
    PathParam((kind, id)): PathParam<(String, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = parse_kind(&kind)?;
    Ok(ok(FavoriteService::get(&state.pool, kind, id).await?))
}

pub async fn delete_favorite(
    State(state): State<AppState>,
    PathParam((kind, id)): PathParam<(String, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = parse_kind(&kind)?;
    Ok(ok(FavoriteService::delete(&state.pool, kind, id).await?))
}
