//! Request validation: column width limits and favorite target rules.

use crate::error::AppError;

pub const NAME_MAX: usize = 250;
pub const URL_MAX: usize = 1000;
pub const USER_NAME_MAX: usize = 50;

pub struct RequestValidator;

impl RequestValidator {
    /// Each `(column, value, max)` must fit its column width. Reports the first violation.
    pub fn max_lengths(fields: &[(&str, &str, usize)]) -> Result<(), AppError> {
        for (col, value, max) in fields {
            if value.chars().count() > *max {
                return Err(AppError::Validation(format!(
                    "{} must be at most {} characters",
                    col, max
                )));
            }
        }
        Ok(())
    }

    /// Exactly one of `candidates` may be set; `names` lists the columns for the error message.
    pub fn exactly_one<T: Copy>(candidates: &[Option<T>], names: &[&str]) -> Result<T, AppError> {
        let mut set = candidates.iter().flatten();
        match (set.next(), set.next()) {
            (Some(v), None) => Ok(*v),
            _ => Err(AppError::Validation(format!(
                "exactly one of {} must be set",
                names.join(", ")
            ))),
        }
    }
}
