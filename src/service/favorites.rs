//! Favorites linkage: typed filters, target checks, and nesting favorites under users.

use super::crud::{not_found, CrudService};
use crate::error::AppError;
use crate::model::{Favorite, FavoriteKind, FavoriteTarget, NewFavorite, NewUser, Resource, User, UserWithFavorites};
use sqlx::AnyPool;
use std::collections::HashMap;

pub struct FavoriteService;

impl FavoriteService {
    pub async fn list(pool: &AnyPool) -> Result<Vec<Favorite>, AppError> {
        CrudService::list::<Favorite>(pool).await
    }

    /// Favorites pointing at `kind`, i.e. rows whose matching key is set.
    pub async fn list_by_kind(pool: &AnyPool, kind: FavoriteKind) -> Result<Vec<Favorite>, AppError> {
        CrudService::list_where_set::<Favorite>(pool, kind.column()).await
    }

    pub async fn list_for_user(pool: &AnyPool, user_id: i64) -> Result<Vec<Favorite>, AppError> {
        if !CrudService::exists(pool, User::TABLE, user_id).await? {
            return Err(not_found(User::NAME, user_id));
        }
        CrudService::list_where::<Favorite>(pool, "user_id", user_id).await
    }

    /// One favorite by id; a favorite of another kind counts as missing.
    pub async fn get(pool: &AnyPool, kind: FavoriteKind, id: i64) -> Result<Favorite, AppError> {
        match CrudService::read::<Favorite>(pool, id).await? {
            Some(fav) if fav.target().map(FavoriteTarget::kind) == Some(kind) => Ok(fav),
            _ => Err(not_found(&format!("{} favorite", kind.name()), id)),
        }
    }

    /// Create a favorite after checking the user and the target exist.
    pub async fn create(pool: &AnyPool, new: NewFavorite) -> Result<Favorite, AppError> {
        if !CrudService::exists(pool, User::TABLE, new.user_id).await? {
            return Err(not_found(User::NAME, new.user_id));
        }
        let kind = new.target.kind();
        if !CrudService::exists(pool, kind.table(), new.target.id()).await? {
            return Err(not_found(kind.name(), new.target.id()));
        }
        let fav = CrudService::create::<Favorite>(pool, new).await?;
        tracing::info!(favorite_id = fav.id, user_id = fav.user_id, kind = kind.name(), "favorite created");
        Ok(fav)
    }

    /// Delete a favorite of `kind` by id. Returns the deleted row.
    pub async fn delete(pool: &AnyPool, kind: FavoriteKind, id: i64) -> Result<Favorite, AppError> {
        Self::get(pool, kind, id).await?;
        CrudService::delete::<Favorite>(pool, id).await
    }
}

pub struct UserService;

impl UserService {
    /// All users, each with its favorites. Two queries, grouped in memory.
    pub async fn list(pool: &AnyPool) -> Result<Vec<UserWithFavorites>, AppError> {
        let users = CrudService::list::<User>(pool).await?;
        let mut by_user: HashMap<i64, Vec<Favorite>> = HashMap::new();
        for fav in CrudService::list::<Favorite>(pool).await? {
            by_user.entry(fav.user_id).or_default().push(fav);
        }
        Ok(users
            .into_iter()
            .map(|user| {
                let favorites = by_user.remove(&user.id).unwrap_or_default();
                UserWithFavorites { user, favorites }
            })
            .collect())
    }

    pub async fn get(pool: &AnyPool, id: i64) -> Result<UserWithFavorites, AppError> {
        let user = CrudService::get::<User>(pool, id).await?;
        let favorites = CrudService::list_where::<Favorite>(pool, "user_id", id).await?;
        Ok(UserWithFavorites { user, favorites })
    }

    pub async fn create(pool: &AnyPool, new: NewUser) -> Result<UserWithFavorites, AppError> {
        let user = CrudService::create::<User>(pool, new).await?;
        tracing::info!(user_id = user.id, "user created");
        Ok(UserWithFavorites { user, favorites: Vec::new() })
    }

    /// Delete a user. Its favorites go with it (ON DELETE CASCADE) and are returned.
    pub async fn delete(pool: &AnyPool, id: i64) -> Result<UserWithFavorites, AppError> {
        let favorites = CrudService::list_where::<Favorite>(pool, "user_id", id).await?;
        let user = CrudService::delete::<User>(pool, id).await?;
        Ok(UserWithFavorites { user, favorites })
    }
}
