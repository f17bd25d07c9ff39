//! Generic resource handlers: list, create, read, delete. Instantiated per record type in the router.

use crate::error::AppError;
use crate::extractors::{JsonBody, PathParam};
use crate::model::Resource;
use crate::response::{created, ok, ok_many};
use crate::service::CrudService;
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::de::DeserializeOwned;

pub async fn list<R: Resource>(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = CrudService::list::<R>(&state.pool).await?;
    Ok(ok_many(rows))
}

pub async fn create<R>(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<R::New>,
) -> Result<impl IntoResponse, AppError>
where
    R: Resource,
    R::New: DeserializeOwned,
{
    let row = CrudService::create::<R>(&state.pool, body).await?;
    tracing::info!(table = R::TABLE, "created");
    Ok(created(row))
}

pub async fn read<R: Resource>(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> Result<impl IntoResponse, AppError> {
    let row = CrudService::get::<R>(&state.pool, id).await?;
    Ok(ok(row))
}

pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> Result<impl IntoResponse, AppError> {
    let row = CrudService::delete::<R>(&state.pool, id).await?;
    Ok(ok(row))
}
