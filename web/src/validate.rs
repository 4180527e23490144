use regex::Regex;
use std::sync::OnceLock;

use crate::error::{AppError, Result};

/// Message shown when the view control is used with an incomplete selection.
pub const MISSING_SELECTION: &str = "Please select both a database and a table.";

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap())
}

/// Check whether a string is a well-formed MySQL identifier.
pub fn is_valid_name(name: &str) -> bool {
    name_pattern().is_match(name)
}

/// Validate a database or table identifier before it is placed in a URL.
pub fn identifier(name: &str, what: &str) -> Result<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "{} must contain only letters, digits and underscores",
            what
        )))
    }
}

/// Validate the database/table pair read from the selectors at view time.
pub fn view_selection(database: &str, table: &str) -> Result<()> {
    if database.is_empty() || table.is_empty() {
        return Err(AppError::validation(MISSING_SELECTION));
    }
    identifier(database, "Database name")?;
    identifier(table, "Table name")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers() {
        assert!(is_valid_name("sales"));
        assert!(is_valid_name("order_items_2024"));
        assert!(is_valid_name("X"));
    }

    #[test]
    fn rejects_hostile_identifiers() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("sales;DROP TABLE users"));
        assert!(!is_valid_name("a/b"));
        assert!(!is_valid_name("a b"));
        assert!(!is_valid_name("café"));
    }

    #[test]
    fn view_selection_requires_both_values() {
        let err = view_selection("", "orders").unwrap_err();
        assert_eq!(err.user_message(), MISSING_SELECTION);

        let err = view_selection("sales", "").unwrap_err();
        assert_eq!(err.user_message(), MISSING_SELECTION);

        assert!(view_selection("sales", "orders").is_ok());
    }

    #[test]
    fn view_selection_rejects_bad_identifiers() {
        assert!(view_selection("sales", "orders/2024").is_err());
        assert!(view_selection("sa les", "orders").is_err());
    }
}
