//! Builds parameterized INSERT, SELECT and DELETE statements for a table.
//! Identifiers come from static table definitions only; values are always `$n` parameters.

/// Quote identifier (safe: only from static definitions).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Primary key column shared by every table.
pub const ID_COLUMN: &str = "id";

/// `id` followed by the data columns, quoted and comma separated.
fn select_column_list(columns: &[&str]) -> String {
    std::iter::once(ID_COLUMN)
        .chain(columns.iter().copied())
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row, ordered by id.
pub fn select_all(table: &str, columns: &[&str]) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(columns),
        quoted(table),
        quoted(ID_COLUMN)
    )
}

/// SELECT by primary key. Caller binds the id as `$1`.
pub fn select_by_id(table: &str, columns: &[&str]) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        select_column_list(columns),
        quoted(table),
        quoted(ID_COLUMN)
    )
}

/// SELECT rows where `column = $1`, ordered by id.
pub fn select_where_eq(table: &str, columns: &[&str], column: &str) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1 ORDER BY {}",
        select_column_list(columns),
        quoted(table),
        quoted(column),
        quoted(ID_COLUMN)
    )
}

/// SELECT rows where `column` is set, ordered by id.
pub fn select_where_not_null(table: &str, columns: &[&str], column: &str) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} IS NOT NULL ORDER BY {}",
        select_column_list(columns),
        quoted(table),
        quoted(column),
        quoted(ID_COLUMN)
    )
}

/// SELECT 1 when a row with id `$1` exists.
pub fn exists_by_id(table: &str) -> String {
    format!("SELECT 1 FROM {} WHERE {} = $1", quoted(table), quoted(ID_COLUMN))
}

/// INSERT one row binding `insert_columns` in order; id comes from the database.
/// Columns left out of the insert take their default (NULL for the optional ones).
pub fn insert(table: &str, insert_columns: &[&str], columns: &[&str]) -> String {
    let cols: Vec<String> = insert_columns.iter().map(|c| quoted(c)).collect();
    let placeholders: Vec<String> = (1..=insert_columns.len()).map(|n| format!("${}", n)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(table),
        cols.join(", "),
        placeholders.join(", "),
        select_column_list(columns)
    )
}

/// DELETE by primary key, returning the removed row. Caller binds the id as `$1`.
pub fn delete(table: &str, columns: &[&str]) -> String {
    format!(
        "DELETE FROM {} WHERE {} = $1 RETURNING {}",
        quoted(table),
        quoted(ID_COLUMN),
        select_column_list(columns)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[&str] = &["user_name", "email"];

    #[test]
    fn insert_numbers_placeholders_in_column_order() {
        assert_eq!(
            insert("users", COLUMNS, COLUMNS),
            r#"INSERT INTO "users" ("user_name", "email") VALUES ($1, $2) RETURNING "id", "user_name", "email""#
        );
    }

    #[test]
    fn insert_subset_returns_every_column() {
        let all = &["user_id", "planet_id", "vehicle_id"];
        assert_eq!(
            insert("favorites", &["user_id", "vehicle_id"], all),
            r#"INSERT INTO "favorites" ("user_id", "vehicle_id") VALUES ($1, $2) RETURNING "id", "user_id", "planet_id", "vehicle_id""#
        );
    }

    #[test]
    fn select_all_orders_by_id() {
        assert_eq!(
            select_all("users", COLUMNS),
            r#"SELECT "id", "user_name", "email" FROM "users" ORDER BY "id""#
        );
    }

    #[test]
    fn delete_returns_row() {
        assert_eq!(
            delete("planets", &["name"]),
            r#"DELETE FROM "planets" WHERE "id" = $1 RETURNING "id", "name""#
        );
    }

    #[test]
    fn not_null_filter() {
        assert_eq!(
            select_where_not_null("favorites", &["user_id", "planet_id"], "planet_id"),
            r#"SELECT "id", "user_id", "planet_id" FROM "favorites" WHERE "planet_id" IS NOT NULL ORDER BY "id""#
        );
    }

    #[test]
    fn quotes_embedded_quotes() {
        assert_eq!(quoted("we\"ird"), "\"we\"\"ird\"");
    }
}
