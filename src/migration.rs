//! Schema bootstrap: DDL for every table, generated from static definitions.
//! Order follows foreign key dependencies. Idempotent (IF NOT EXISTS throughout).

use crate::error::AppError;
use crate::model::{Character, Favorite, Planet, Resource, User, Vehicle};
use crate::store::Backend;
use sqlx::AnyPool;

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    Int,
    Float,
    Text,
}

#[derive(Clone, Copy, Debug)]
pub struct ColumnDef {
    pub name: &'static str,
    pub ty: ColumnType,
    pub nullable: bool,
    /// Referenced table; the foreign key always targets its `id` and cascades on delete.
    pub references: Option<&'static str>,
}

#[derive(Clone, Copy, Debug)]
pub struct CheckDef {
    pub name: &'static str,
    pub expression: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct TableDef {
    pub name: &'static str,
    /// Data columns; `id` is implicit.
    pub columns: &'static [ColumnDef],
    pub checks: &'static [CheckDef],
    /// Single-column, non-unique indexes.
    pub indexes: &'static [&'static str],
}

const fn required(name: &'static str, ty: ColumnType) -> ColumnDef {
    ColumnDef { name, ty, nullable: false, references: None }
}

const fn foreign_key(name: &'static str, table: &'static str, nullable: bool) -> ColumnDef {
    ColumnDef { name, ty: ColumnType::Int, nullable, references: Some(table) }
}

use ColumnType::{Float, Int, Text};

pub const TABLES: &[TableDef] = &[
    TableDef {
        name: User::TABLE,
        columns: &[required("user_name", Text), required("email", Text)],
        checks: &[],
        indexes: &[],
    },
    TableDef {
        name: Planet::TABLE,
        columns: &[
            required("url", Text),
            required("diameter", Int),
            required("rotation_period", Int),
            required("orbital_period", Int),
            required("name", Text),
            required("terrain", Text),
            required("population", Int),
            required("gravity", Text),
            required("climate", Text),
        ],
        checks: &[],
        indexes: &[],
    },
    TableDef {
        name: Character::TABLE,
        columns: &[
            required("url", Text),
            required("name", Text),
            required("hair_color", Text),
            required("skin_color", Text),
            required("eye_color", Text),
            required("birth_year", Text),
            required("height", Int),
            required("mass", Int),
            required("gender", Text),
        ],
        checks: &[],
        indexes: &[],
    },
    TableDef {
        name: Vehicle::TABLE,
        columns: &[
            required("url", Text),
            required("name", Text),
            required("vehicle_class", Text),
            required("manufacturer", Text),
            required("model", Text),
            required("crew", Int),
            required("cost_in_credits", Int),
            required("length", Float),
            required("passengers", Int),
            required("max_atmosphering_speed", Int),
            required("cargo_capacity", Int),
            required("consumables", Text),
        ],
        checks: &[],
        indexes: &[],
    },
    TableDef {
        name: Favorite::TABLE,
        columns: &[
            foreign_key("user_id", User::TABLE, false),
            foreign_key("planet_id", Planet::TABLE, true),
            foreign_key("character_id", Character::TABLE, true),
            foreign_key("vehicle_id", Vehicle::TABLE, true),
        ],
        checks: &[CheckDef {
            name: "favorites_single_target",
            expression: "(CASE WHEN \"planet_id\" IS NULL THEN 0 ELSE 1 END) \
                + (CASE WHEN \"character_id\" IS NULL THEN 0 ELSE 1 END) \
                + (CASE WHEN \"vehicle_id\" IS NULL THEN 0 ELSE 1 END) = 1",
        }],
        indexes: &["user_id"],
    },
];

fn id_column(backend: Backend) -> &'static str {
    match backend {
        Backend::Postgres => "\"id\" BIGSERIAL PRIMARY KEY",
        Backend::Sqlite => "\"id\" INTEGER PRIMARY KEY AUTOINCREMENT",
    }
}

fn type_str(ty: ColumnType, backend: Backend) -> &'static str {
    match (ty, backend) {
        (Int, Backend::Postgres) => "BIGINT",
        (Int, Backend::Sqlite) => "INTEGER",
        (Float, Backend::Postgres) => "DOUBLE PRECISION",
        (Float, Backend::Sqlite) => "REAL",
        (Text, _) => "TEXT",
    }
}

/// CREATE TABLE statement for one table.
pub fn create_table_sql(table: &TableDef, backend: Backend) -> String {
    let mut defs = vec![id_column(backend).to_string()];
    for c in table.columns {
        let mut def = format!("{} {}", quote(c.name), type_str(c.ty, backend));
        if !c.nullable {
            def.push_str(" NOT NULL");
        }
        if let Some(target) = c.references {
            def.push_str(&format!(" REFERENCES {} (\"id\") ON DELETE CASCADE", quote(target)));
        }
        defs.push(def);
    }
    for ch in table.checks {
        defs.push(format!("CONSTRAINT {} CHECK ({})", quote(ch.name), ch.expression));
    }
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n  {}\n)",
        quote(table.name),
        defs.join(",\n  ")
    )
}

/// CREATE INDEX statements for one table.
pub fn create_index_sql(table: &TableDef) -> Vec<String> {
    table
        .indexes
        .iter()
        .map(|col| {
            format!(
                "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
                quote(&format!("{}_{}_idx", table.name, col)),
                quote(table.name),
                quote(col)
            )
        })
        .collect()
}

/// Create every table and index that does not exist yet.
pub async fn apply_migrations(pool: &AnyPool, backend: Backend) -> Result<(), AppError> {
    for table in TABLES {
        let ddl = create_table_sql(table, backend);
        tracing::debug!(sql = %ddl, "migration");
        sqlx::query(&ddl).execute(pool).await?;
        for sql in create_index_sql(table) {
            tracing::debug!(sql = %sql, "migration");
            sqlx::query(&sql).execute(pool).await?;
        }
    }
    tracing::info!(tables = TABLES.len(), "schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(name: &str) -> &'static TableDef {
        TABLES.iter().find(|t| t.name == name).unwrap()
    }

    fn column_names(name: &str) -> Vec<&'static str> {
        table(name).columns.iter().map(|c| c.name).collect()
    }

    #[test]
    fn definitions_match_record_columns() {
        assert_eq!(column_names(User::TABLE), User::COLUMNS);
        assert_eq!(column_names(Planet::TABLE), Planet::COLUMNS);
        assert_eq!(column_names(Character::TABLE), Character::COLUMNS);
        assert_eq!(column_names(Vehicle::TABLE), Vehicle::COLUMNS);
        assert_eq!(column_names(Favorite::TABLE), Favorite::COLUMNS);
    }

    #[test]
    fn referenced_tables_are_created_first() {
        for (i, t) in TABLES.iter().enumerate() {
            for target in t.columns.iter().filter_map(|c| c.references) {
                let pos = TABLES.iter().position(|x| x.name == target).unwrap();
                assert!(pos < i, "{} references {} before it exists", t.name, target);
            }
        }
    }

    #[test]
    fn sqlite_users_ddl() {
        assert_eq!(
            create_table_sql(table("users"), Backend::Sqlite),
            "CREATE TABLE IF NOT EXISTS \"users\" (\n  \
             \"id\" INTEGER PRIMARY KEY AUTOINCREMENT,\n  \
             \"user_name\" TEXT NOT NULL,\n  \
             \"email\" TEXT NOT NULL\n)"
        );
    }

    #[test]
    fn postgres_types() {
        let ddl = create_table_sql(table("vehicles"), Backend::Postgres);
        assert!(ddl.contains("\"id\" BIGSERIAL PRIMARY KEY"));
        assert!(ddl.contains("\"length\" DOUBLE PRECISION NOT NULL"));
        assert!(ddl.contains("\"crew\" BIGINT NOT NULL"));
    }

    #[test]
    fn favorites_have_cascading_keys_and_check() {
        let ddl = create_table_sql(table("favorites"), Backend::Sqlite);
        assert!(ddl.contains("\"user_id\" INTEGER NOT NULL REFERENCES \"users\" (\"id\") ON DELETE CASCADE"));
        assert!(ddl.contains("\"planet_id\" INTEGER REFERENCES \"planets\" (\"id\") ON DELETE CASCADE"));
        assert!(ddl.contains("CONSTRAINT \"favorites_single_target\" CHECK"));
        assert_eq!(
            create_index_sql(table("favorites")),
            vec!["CREATE INDEX IF NOT EXISTS \"favorites_user_id_idx\" ON \"favorites\" (\"user_id\")"]
        );
    }
}
