//! Star Wars REST backend: planets, characters, vehicles, users, and user favorites.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod settings;
pub mod sql;
pub mod state;
pub mod store;

pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::{api_routes, common_routes};
pub use service::{CrudService, FavoriteService, UserService};
pub use settings::Settings;
pub use state::AppState;
pub use store::{connect, Backend};

use axum::Router;
use tower_http::{limit::RequestBodyLimitLayer, normalize_path::NormalizePath, trace::TraceLayer};

/// The served application: the router behind trailing-slash normalization,
/// so `/planets/` and `/planets` hit the same route.
pub type App = NormalizePath<Router>;

/// Connect to `database_url`, create missing tables, and wrap the pool in [`AppState`].
pub async fn bootstrap(database_url: &str, max_connections: u32) -> Result<AppState, AppError> {
    let backend = Backend::from_url(database_url)?;
    let pool = connect(database_url, max_connections).await?;
    apply_migrations(&pool, backend).await?;
    Ok(AppState::new(pool, backend))
}

/// The full application. Unmatched paths and methods get the JSON error body.
pub fn app(state: AppState, body_limit: usize) -> App {
    let router = Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .method_not_allowed_fallback(routes::method_not_allowed)
        .fallback(routes::fallback)
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http());
    NormalizePath::trim_trailing_slash(router)
}
