use super::{AnyQueryAs, Insertable, Resource};
use crate::error::AppError;
use crate::service::validation::{RequestValidator, NAME_MAX, URL_MAX};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Planet {
    pub id: i64,
    pub url: String,
    pub diameter: i64,
    pub rotation_period: i64,
    pub orbital_period: i64,
    pub name: String,
    pub terrain: String,
    pub population: i64,
    pub gravity: String,
    pub climate: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewPlanet {
    pub url: String,
    pub diameter: i64,
    pub rotation_period: i64,
    pub orbital_period: i64,
    pub name: String,
    pub terrain: String,
    pub population: i64,
    pub gravity: String,
    pub climate: String,
}

impl Resource for Planet {
    const TABLE: &'static str = "planets";
    const NAME: &'static str = "planet";
    const COLUMNS: &'static [&'static str] = &[
        "url",
        "diameter",
        "rotation_period",
        "orbital_period",
        "name",
        "terrain",
        "population",
        "gravity",
        "climate",
    ];

    type New = NewPlanet;
}

impl Insertable for NewPlanet {
    fn columns(&self) -> &'static [&'static str] {
        Planet::COLUMNS
    }

    fn validate(&self) -> Result<(), AppError> {
        RequestValidator::max_lengths(&[
            ("url", self.url.as_str(), URL_MAX),
            ("name", self.name.as_str(), NAME_MAX),
            ("terrain", self.terrain.as_str(), NAME_MAX),
            ("gravity", self.gravity.as_str(), NAME_MAX),
            ("climate", self.climate.as_str(), NAME_MAX),
        ])
    }

    fn bind<'q, O: Send>(self, query: AnyQueryAs<'q, O>) -> AnyQueryAs<'q, O> {
        query
            .bind(self.url)
            .bind(self.diameter)
            .bind(self.rotation_period)
            .bind(self.orbital_period)
            .bind(self.name)
            .bind(self.terrain)
            .bind(self.population)
            .bind(self.gravity)
            .bind(self.climate)
    }
}
