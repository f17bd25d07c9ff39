//! Connection handling: backend detection, pool creation, and database bootstrap for PostgreSQL.

use crate::error::{AppError, ConfigError};
use sqlx::any::AnyPoolOptions;
use sqlx::{AnyPool, Connection};

/// Relational backend behind the `Any` pool. Only DDL differs between the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Postgres => "postgres",
            Backend::Sqlite => "sqlite",
        }
    }

    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(Backend::Postgres)
        } else if url.starts_with("sqlite:") {
            Ok(Backend::Sqlite)
        } else {
            Err(ConfigError::UnsupportedDatabase(redact(url)))
        }
    }
}

/// Open a pool on `database_url`. For PostgreSQL the target database is created first if missing.
/// In-memory SQLite is pinned to a single connection that never expires, since every
/// connection would otherwise see its own empty database.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<AnyPool, AppError> {
    sqlx::any::install_default_drivers();
    let backend = Backend::from_url(database_url)?;
    if backend == Backend::Postgres {
        create_database_if_missing(database_url).await?;
    }

    let mut opts = AnyPoolOptions::new().max_connections(max_connections.max(1));
    if backend == Backend::Sqlite && database_url.contains(":memory:") {
        opts = opts
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }
    let pool = opts.connect(database_url).await?;
    tracing::info!(backend = backend.as_str(), url = %redact(database_url), "connected to database");
    Ok(pool)
}

/// Maintenance connection for a PostgreSQL URL: the same server, database `postgres`.
#[derive(Debug, PartialEq, Eq)]
struct AdminTarget {
    url: String,
    database: String,
}

impl AdminTarget {
    fn from_url(url: &str) -> Result<Self, ConfigError> {
        let (head, query) = match url.split_once('?') {
            Some((head, q)) => (head, Some(q)),
            None => (url, None),
        };
        let authority_start = head.find("://").map(|i| i + 3).unwrap_or(0);
        let slash = head
            .rfind('/')
            .filter(|&i| i >= authority_start)
            .ok_or_else(|| ConfigError::InvalidVar { name: "DATABASE_URL", value: redact(url) })?;
        let database = head[slash + 1..].trim().to_string();
        let url = match query {
            Some(q) => format!("{}/postgres?{}", &head[..slash], q),
            None => format!("{}/postgres", &head[..slash]),
        };
        Ok(AdminTarget { url, database })
    }

    fn needs_creation(&self) -> bool {
        !self.database.is_empty() && self.database != "postgres"
    }
}

/// Create the database named in a PostgreSQL `database_url` when the server lacks it.
async fn create_database_if_missing(database_url: &str) -> Result<(), AppError> {
    let target = AdminTarget::from_url(database_url)?;
    if !target.needs_creation() {
        return Ok(());
    }
    let mut conn = sqlx::PgConnection::connect(&target.url).await?;
    let found = sqlx::query("SELECT 1 FROM pg_database WHERE datname = $1")
        .bind(&target.database)
        .fetch_optional(&mut conn)
        .await?;
    if found.is_none() {
        tracing::info!(database = %target.database, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&target.database)))
            .execute(&mut conn)
            .await?;
    }
    conn.close().await?;
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Hide the password part of a URL before it reaches logs or error messages.
fn redact(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            let userinfo = &url[scheme_end + 3..at];
            match userinfo.split_once(':') {
                Some((user, _)) => format!("{}{}:***{}", &url[..scheme_end + 3], user, &url[at..]),
                None => url.to_string(),
            }
        }
        _ => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_backend() {
        assert_eq!(Backend::from_url("postgres://localhost/db").unwrap(), Backend::Postgres);
        assert_eq!(Backend::from_url("postgresql://localhost/db").unwrap(), Backend::Postgres);
        assert_eq!(Backend::from_url("sqlite::memory:").unwrap(), Backend::Sqlite);
        assert!(matches!(
            Backend::from_url("mysql://localhost/db"),
            Err(ConfigError::UnsupportedDatabase(_))
        ));
    }

    #[test]
    fn admin_target_points_at_postgres() {
        let target = AdminTarget::from_url("postgres://u:p@localhost:5432/starwars").unwrap();
        assert_eq!(target.url, "postgres://u:p@localhost:5432/postgres");
        assert_eq!(target.database, "starwars");
        assert!(target.needs_creation());

        let target = AdminTarget::from_url("postgres://localhost/starwars?sslmode=disable").unwrap();
        assert_eq!(target.url, "postgres://localhost/postgres?sslmode=disable");
    }

    #[test]
    fn admin_target_skips_maintenance_db() {
        assert!(!AdminTarget::from_url("postgres://localhost/postgres").unwrap().needs_creation());
        assert!(!AdminTarget::from_url("postgres://localhost/").unwrap().needs_creation());
        assert!(matches!(
            AdminTarget::from_url("postgres://localhost"),
            Err(ConfigError::InvalidVar { name: "DATABASE_URL", .. })
        ));
    }

    #[test]
    fn redacts_password() {
        assert_eq!(redact("postgres://app:secret@db:5432/x"), "postgres://app:***@db:5432/x");
        assert_eq!(redact("sqlite:///tmp/test.db"), "sqlite:///tmp/test.db");
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("star\"wars"), "\"star\"\"wars\"");
    }
}
