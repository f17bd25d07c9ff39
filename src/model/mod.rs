//! Typed records, one per table, and the traits the generic CRUD service works through.

mod character;
mod favorite;
mod planet;
mod user;
mod vehicle;

pub use character::{Character, NewCharacter};
pub use favorite::{Favorite, FavoriteKind, FavoriteRequest, FavoriteTarget, NewFavorite};
pub use planet::{NewPlanet, Planet};
pub use user::{NewUser, User, UserWithFavorites};
pub use vehicle::{NewVehicle, Vehicle};

use crate::error::AppError;
use serde::Serialize;
use sqlx::any::{AnyArguments, AnyRow};
use sqlx::{Any, FromRow};

pub type AnyQueryAs<'q, O> = sqlx::query::QueryAs<'q, Any, O, AnyArguments<'q>>;

/// A table-backed record with an integer `id` primary key.
pub trait Resource: for<'r> FromRow<'r, AnyRow> + Serialize + Send + Sync + Unpin + 'static {
    /// Table name.
    const TABLE: &'static str;
    /// Singular name used in messages, e.g. "planet".
    const NAME: &'static str;
    /// Every column except `id`, in table order.
    const COLUMNS: &'static [&'static str];

    type New: Insertable + Send + 'static;
}

/// The body of an INSERT: which columns it writes, and their values in that order.
pub trait Insertable {
    fn columns(&self) -> &'static [&'static str];

    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }

    fn bind<'q, O: Send>(self, query: AnyQueryAs<'q, O>) -> AnyQueryAs<'q, O>;
}
