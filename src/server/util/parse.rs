use std::str::FromStr;

use sea_orm::DbErr;

use crate::server::error::internal::InternalError;

/// Parses a string column into its domain type.
///
/// Status and role columns are stored as plain strings; a value that no longer
/// parses indicates corrupted data rather than bad input, so the failure is
/// surfaced as a database error from the repository.
///
/// # Arguments
/// - `field` - Column name, included in the error message
/// - `value` - The stored string
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(DbErr::Custom)` - Wrapping `InternalError::ParseStoredValue`
pub fn parse_stored<T: FromStr>(field: &'static str, value: String) -> Result<T, DbErr> {
    value.parse::<T>().map_err(|_| {
        DbErr::Custom(InternalError::ParseStoredValue { field, value }.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::access::Role;

    #[test]
    fn parses_known_value() {
        let role: Role = parse_stored("role", "manager".to_string()).unwrap();
        assert_eq!(role, Role::Manager);
    }

    #[test]
    fn reports_field_and_value_on_failure() {
        let err = parse_stored::<Role>("role", "wizard".to_string()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("role"));
        assert!(message.contains("wizard"));
    }
}
