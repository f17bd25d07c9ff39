//! Service routes (liveness, readiness, build info) and the JSON fallbacks for
//! unmatched paths and methods.

use crate::error::error_body;
use crate::model::{Character, Favorite, Planet, Resource, User, Vehicle};
use crate::state::AppState;
use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Instant;

const RESOURCES: [&str; 5] = [User::TABLE, Planet::TABLE, Character::TABLE, Vehicle::TABLE, Favorite::TABLE];

#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    backend: &'static str,
    database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u128>,
}

/// Liveness only; never touches the database.
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Round-trips `SELECT 1`. 503 when the pool cannot serve it.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let started = Instant::now();
    match sqlx::query("SELECT 1").fetch_optional(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(Readiness {
                status: "ok",
                backend: state.backend.as_str(),
                database: "ok",
                latency_ms: Some(started.elapsed().as_millis()),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, backend = state.backend.as_str(), "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Readiness {
                    status: "degraded",
                    backend: state.backend.as_str(),
                    database: "unavailable",
                    latency_ms: None,
                }),
            )
        }
    }
}

async fn version() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Build info plus the configured backend and the resource collections served.
async fn info(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "backend": state.backend.as_str(),
        "resources": RESOURCES,
    }))
}

pub async fn fallback(uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(error_body("not_found", format!("not found: {}", uri.path()))),
    )
}

/// The path exists but has no handler for this method (there are no PUT/PATCH routes).
pub async fn method_not_allowed(method: Method, uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(error_body(
            "method_not_allowed",
            format!("method not allowed: {} {}", method, uri.path()),
        )),
    )
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .route("/info", get(info))
        .with_state(state)
}
