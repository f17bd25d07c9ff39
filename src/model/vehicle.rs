use super::{AnyQueryAs, Insertable, Resource};
use crate::error::AppError;
use crate::service::validation::{RequestValidator, NAME_MAX, URL_MAX};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub url: String,
    pub name: String,
    pub vehicle_class: String,
    pub manufacturer: String,
    pub model: String,
    pub crew: i64,
    pub cost_in_credits: i64,
    pub length: f64,
    pub passengers: i64,
    pub max_atmosphering_speed: i64,
    pub cargo_capacity: i64,
    pub consumables: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewVehicle {
    pub url: String,
    pub name: String,
    pub vehicle_class: String,
    pub manufacturer: String,
    pub model: String,
    pub crew: i64,
    pub cost_in_credits: i64,
    pub length: f64,
    pub passengers: i64,
    pub max_atmosphering_speed: i64,
    pub cargo_capacity: i64,
    pub consumables: String,
}

impl Resource for Vehicle {
    const TABLE: &'static str = "vehicles";
    const NAME: &'static str = "vehicle";
    const COLUMNS: &'static [&'static str] = &[
        "url",
        "name",
        "vehicle_class",
        "manufacturer",
        "model",
        "crew",
        "cost_in_credits",
        "length",
        "passengers",
        "max_atmosphering_speed",
        "cargo_capacity",
        "consumables",
    ];

    type New = NewVehicle;
}

impl Insertable for NewVehicle {
    fn columns(&self) -> &'static [&'static str] {
        Vehicle::COLUMNS
    }

    fn validate(&self) -> Result<(), AppError> {
        RequestValidator::max_lengths(&[
            ("url", self.url.as_str(), URL_MAX),
            ("name", self.name.as_str(), NAME_MAX),
            ("vehicle_class", self.vehicle_class.as_str(), NAME_MAX),
            ("manufacturer", self.manufacturer.as_str(), NAME_MAX),
            ("model", self.model.as_str(), NAME_MAX),
            ("consumables", self.consumables.as_str(), NAME_MAX),
        ])
    }

    fn bind<'q, O: Send>(self, query: AnyQueryAs<'q, O>) -> AnyQueryAs<'q, O> {
        query
            .bind(self.url)
            .bind(self.name)
            .bind(self.vehicle_class)
            .bind(self.manufacturer)
            .bind(self.model)
            .bind(self.crew)
            .bind(self.cost_in_credits)
            .bind(self.length)
            .bind(self.passengers)
            .bind(self.max_atmosphering_speed)
            .bind(self.cargo_capacity)
            .bind(self.consumables)
    }
}
