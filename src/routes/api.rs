//! Resource, user and favorites routes.

use crate::handlers::resource::{create, delete, list, read};
use crate::handlers::{
    create_favorite, create_favorite_of_kind, create_user, delete_favorite, delete_user, list_favorites,
    list_favorites_by_kind, list_user_favorites, list_users, read_favorite, read_user,
};
use crate::model::{Character, Planet, Resource, Vehicle};
use crate::state::AppState;
use axum::{routing::get, Router};

/// GET/POST /{table} and GET/DELETE /{table}/:id for one record type.
fn resource_routes<R>() -> Router<AppState>
where
    R: Resource,
    R::New: serde::de::DeserializeOwned,
{
    let collection = format!("/{}", R::TABLE);
    let item = format!("/{}/:id", R::TABLE);
    Router::new()
        .route(&collection, get(list::<R>).post(create::<R>))
        .route(&item, get(read::<R>).delete(delete::<R>))
}

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .merge(resource_routes::<Planet>())
        .merge(resource_routes::<Character>())
        .merge(resource_routes::<Vehicle>())
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(read_user).delete(delete_user))
        .route("/users/:id/favorites", get(list_user_favorites))
        .route("/favorites", get(list_favorites).post(create_favorite))
        .route("/favorites/:kind", get(list_favorites_by_kind).post(create_favorite_of_kind))
        .route("/favorites/:kind/:id", get(read_favorite).delete(delete_favorite))
        .with_state(state)
}
