use super::{AnyQueryAs, Favorite, Insertable, Resource};
use crate::error::AppError;
use crate::service::validation::{RequestValidator, NAME_MAX, USER_NAME_MAX};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub user_name: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub user_name: String,
    pub email: String,
}

/// API shape of a user: the row plus every favorite it owns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWithFavorites {
    #[serde(flatten)]
    pub user: User,
    pub favorites: Vec<Favorite>,
}

impl Resource for User {
    const TABLE: &'static str = "users";
    const NAME: &'static str = "user";
    const COLUMNS: &'static [&'static str] = &["user_name", "email"];

    type New = NewUser;
}

impl Insertable for NewUser {
    fn columns(&self) -> &'static [&'static str] {
        User::COLUMNS
    }

    fn validate(&self) -> Result<(), AppError> {
        RequestValidator::max_lengths(&[
            ("user_name", self.user_name.as_str(), USER_NAME_MAX),
            ("email", self.email.as_str(), NAME_MAX),
        ])
    }

    fn bind<'q, O: Send>(self, query: AnyQueryAs<'q, O>) -> AnyQueryAs<'q, O> {
        query.bind(self.user_name).bind(self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_flat_with_favorites() {
        let user = UserWithFavorites {
            user: User { id: 1, user_name: "luke".into(), email: "luke@tatooine.net".into() },
            favorites: vec![],
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "user_name": "luke", "email": "luke@tatooine.net", "favorites": [] })
        );
    }

    #[test]
    fn email_limit_applies() {
        let user = NewUser { user_name: "leia".into(), email: "x".repeat(NAME_MAX + 1) };
        assert!(user.validate().is_err());
    }
}
