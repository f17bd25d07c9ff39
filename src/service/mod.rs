//! Persistence services: generic CRUD plus favorites and users.

mod crud;
mod favorites;
pub mod validation;
pub use crud::CrudService;
pub use favorites::{FavoriteService, UserService};
pub use validation::RequestValidator;
