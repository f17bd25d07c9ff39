//! HTTP handlers for resources, users, and favorites.

pub mod favorites;
pub mod resource;
pub mod users;
pub use favorites::*;
pub use users::*;
