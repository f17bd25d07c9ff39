//! Shared application state for all routes.

use crate::store::Backend;
use sqlx::AnyPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
    pub backend: Backend,
}

impl AppState {
    pub fn new(pool: AnyPool, backend: Backend) -> Self {
        AppState { pool, backend }
    }
}
