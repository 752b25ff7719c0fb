//! Recipe row type for database queries.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

use crate::error::{RecipeError, Result};
use crate::storage::types::{Recipe, RecipeId};

/// Columns selected for every recipe read, in `RecipeRow::from_row` order.
pub const RECIPE_COLUMNS: &str = "id, title, ingredients, steps, tags, created_at";

/// Raw row data from the recipes table, before parsing into domain types.
#[derive(Debug)]
pub struct RecipeRow {
    pub id: RecipeId,
    pub title: String,
    pub ingredients: String,
    pub steps: String,
    pub tags: String,
    pub created_at: String,
}

impl RecipeRow {
    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            ingredients: row.get(2)?,
            steps: row.get(3)?,
            tags: row.get(4)?,
            created_at: row.get(5)?,
        })
    }
}

impl TryFrom<RecipeRow> for Recipe {
    type Error = RecipeError;

    fn try_from(row: RecipeRow) -> Result<Self> {
        let created_at = parse_timestamp(&row.created_at)?;

        Ok(Recipe {
            id: row.id,
            title: row.title,
            ingredients: row.ingredients,
            steps: row.steps,
            tags: row.tags,
            created_at,
        })
    }
}

/// Format a timestamp for storage (RFC 3339, UTC, `Z` suffix).
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parse a stored timestamp.
///
/// Accepts RFC 3339 as well as naive ISO-8601 (`T` or space separated),
/// which is read as UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }

    Err(RecipeError::StorageRead(format!(
        "Invalid created_at timestamp: {}",
        value
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_uses_z_suffix() {
        let value = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_timestamp(&value), "2024-01-02T03:04:05Z");
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let parsed = parse_timestamp("2024-01-02T05:04:05+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
    }

    #[test]
    fn test_parse_naive_timestamps_as_utc() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(parse_timestamp("2024-01-02T03:04:05").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-01-02 03:04:05").unwrap(), expected);

        let fractional = parse_timestamp("2024-01-02T03:04:05.250000").unwrap();
        assert_eq!(fractional.date_naive(), expected.date_naive());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_timestamp("yesterday").unwrap_err();
        assert!(matches!(err, RecipeError::StorageRead(_)));
    }
}
