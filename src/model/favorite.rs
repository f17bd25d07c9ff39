//! Favorites: a join row from a user to exactly one planet, character or vehicle.

use super::{AnyQueryAs, Character, Insertable, Planet, Resource, Vehicle};
use crate::error::AppError;
use crate::service::validation::RequestValidator;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row shape. All three target keys are always serialized, `null` where unset,
/// so clients can tell what a favorite points at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub planet_id: Option<i64>,
    pub character_id: Option<i64>,
    pub vehicle_id: Option<i64>,
}

impl Favorite {
    /// The target this row points at, or None when the row does not hold exactly one.
    pub fn target(&self) -> Option<FavoriteTarget> {
        let candidates = [
            self.planet_id.map(FavoriteTarget::Planet),
            self.character_id.map(FavoriteTarget::Character),
            self.vehicle_id.map(FavoriteTarget::Vehicle),
        ];
        RequestValidator::exactly_one(&candidates, &[]).ok()
    }
}

impl Resource for Favorite {
    const TABLE: &'static str = "favorites";
    const NAME: &'static str = "favorite";
    const COLUMNS: &'static [&'static str] = &["user_id", "planet_id", "character_id", "vehicle_id"];

    type New = NewFavorite;
}

/// Which kind of resource a favorite targets. Parsed from the plural path segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FavoriteKind {
    Planet,
    Character,
    Vehicle,
}

impl FavoriteKind {
    pub const ALL: [FavoriteKind; 3] = [FavoriteKind::Planet, FavoriteKind::Character, FavoriteKind::Vehicle];

    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "planets" => Some(FavoriteKind::Planet),
            "characters" => Some(FavoriteKind::Character),
            "vehicles" => Some(FavoriteKind::Vehicle),
            _ => None,
        }
    }

    /// Foreign key column on `favorites`.
    pub fn column(self) -> &'static str {
        match self {
            FavoriteKind::Planet => "planet_id",
            FavoriteKind::Character => "character_id",
            FavoriteKind::Vehicle => "vehicle_id",
        }
    }

    /// Table the foreign key points at.
    pub fn table(self) -> &'static str {
        match self {
            FavoriteKind::Planet => Planet::TABLE,
            FavoriteKind::Character => Character::TABLE,
            FavoriteKind::Vehicle => Vehicle::TABLE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FavoriteKind::Planet => Planet::NAME,
            FavoriteKind::Character => Character::NAME,
            FavoriteKind::Vehicle => Vehicle::NAME,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i64),
    Character(i64),
    Vehicle(i64),
}

impl FavoriteTarget {
    pub fn kind(self) -> FavoriteKind {
        match self {
            FavoriteTarget::Planet(_) => FavoriteKind::Planet,
            FavoriteTarget::Character(_) => FavoriteKind::Character,
            FavoriteTarget::Vehicle(_) => FavoriteKind::Vehicle,
        }
    }

    pub fn id(self) -> i64 {
        match self {
            FavoriteTarget::Planet(id) | FavoriteTarget::Character(id) | FavoriteTarget::Vehicle(id) => id,
        }
    }
}

/// A favorite ready to insert. The target enum rules out rows with zero or several targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NewFavorite {
    pub user_id: i64,
    pub target: FavoriteTarget,
}

impl Insertable for NewFavorite {
    fn columns(&self) -> &'static [&'static str] {
        match self.target.kind() {
            FavoriteKind::Planet => &["user_id", "planet_id"],
            FavoriteKind::Character => &["user_id", "character_id"],
            FavoriteKind::Vehicle => &["user_id", "vehicle_id"],
        }
    }

    fn bind<'q, O: Send>(self, query: AnyQueryAs<'q, O>) -> AnyQueryAs<'q, O> {
        query.bind(self.user_id).bind(self.target.id())
    }
}

/// Request body for creating a favorite.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRequest {
    pub user_id: i64,
    #[serde(default)]
    pub planet_id: Option<i64>,
    #[serde(default)]
    pub character_id: Option<i64>,
    #[serde(default)]
    pub vehicle_id: Option<i64>,
}

impl FavoriteRequest {
    /// Resolve the single target. With `expected`, that kind's key is required.
    pub fn into_new(self, expected: Option<FavoriteKind>) -> Result<NewFavorite, AppError> {
        let candidates = [
            self.planet_id.map(FavoriteTarget::Planet),
            self.character_id.map(FavoriteTarget::Character),
            self.vehicle_id.map(FavoriteTarget::Vehicle),
        ];
        if let Some(kind) = expected {
            if !candidates.iter().flatten().any(|t| t.kind() == kind) {
                return Err(AppError::Validation(format!("{} is required", kind.column())));
            }
        }
        let names: Vec<&str> = FavoriteKind::ALL.iter().map(|k| k.column()).collect();
        let target = RequestValidator::exactly_one(&candidates, &names)?;
        Ok(NewFavorite { user_id: self.user_id, target })
    }
}
