use super::{AnyQueryAs, Insertable, Resource};
use crate::error::AppError;
use crate::service::validation::{RequestValidator, NAME_MAX, URL_MAX};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Character {
    pub id: i64,
    pub url: String,
    pub name: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub height: i64,
    pub mass: i64,
    pub gender: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewCharacter {
    pub url: String,
    pub name: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub height: i64,
    pub mass: i64,
    pub gender: String,
}

impl Resource for Character {
    const TABLE: &'static str = "characters";
    const NAME: &'static str = "character";
    const COLUMNS: &'static [&'static str] = &[
        "url",
        "name",
        "hair_color",
        "skin_color",
        "eye_color",
        "birth_year",
        "height",
        "mass",
        "gender",
    ];

    type New = NewCharacter;
}

impl Insertable for NewCharacter {
    fn columns(&self) -> &'static [&'static str] {
        Character::COLUMNS
    }

    fn validate(&self) -> Result<(), AppError> {
        RequestValidator::max_lengths(&[
            ("url", self.url.as_str(), URL_MAX),
            ("name", self.name.as_str(), NAME_MAX),
            ("hair_color", self.hair_color.as_str(), NAME_MAX),
            ("skin_color", self.skin_color.as_str(), NAME_MAX),
            ("eye_color", self.eye_color.as_str(), NAME_MAX),
            ("birth_year", self.birth_year.as_str(), NAME_MAX),
            ("gender", self.gender.as_str(), NAME_MAX),
        ])
    }

    fn bind<'q, O: Send>(self, query: AnyQueryAs<'q, O>) -> AnyQueryAs<'q, O> {
        query
            .bind(self.url)
            .bind(self.name)
            .bind(self.hair_color)
            .bind(self.skin_color)
            .bind(self.eye_color)
            .bind(self.birth_year)
            .bind(self.height)
            .bind(self.mass)
            .bind(self.gender)
    }
}
