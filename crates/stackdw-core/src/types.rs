//! SQL column types used by the warehouse schema.

/// The storage type of a column.
///
/// The warehouse uses a deliberately small type vocabulary: integers,
/// booleans, naive timestamps, bounded strings, and two unbounded text
/// columns (`Posts.Body`, `Users.AboutMe`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    BigInt,
    /// Boolean flag.
    Boolean,
    /// Naive timestamp; the origin dataset records no timezone.
    DateTime,
    /// Bounded string with an explicit maximum character length.
    Varchar(u32),
    /// Unbounded text.
    Text,
}

impl SqlType {
    /// The SQL rendering of this type, as emitted in DDL.
    #[must_use]
    pub fn sql_name(&self) -> String {
        match self {
            SqlType::Integer => "INTEGER".to_string(),
            SqlType::BigInt => "BIGINT".to_string(),
            SqlType::Boolean => "BOOLEAN".to_string(),
            SqlType::DateTime => "TIMESTAMP".to_string(),
            SqlType::Varchar(max) => format!("VARCHAR({max})"),
            SqlType::Text => "TEXT".to_string(),
        }
    }

    /// Maximum character length for bounded string types.
    ///
    /// Returns `None` for every non-`Varchar` type; unbounded `Text`
    /// carries no bound by definition.
    #[must_use]
    pub const fn max_length(&self) -> Option<u32> {
        match self {
            SqlType::Varchar(max) => Some(*max),
            _ => None,
        }
    }

    /// Whether values of this type are textual.
    #[must_use]
    pub const fn is_textual(&self) -> bool {
        matches!(self, SqlType::Varchar(_) | SqlType::Text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_name_rendering() {
        assert_eq!(SqlType::Integer.sql_name(), "INTEGER");
        assert_eq!(SqlType::BigInt.sql_name(), "BIGINT");
        assert_eq!(SqlType::Boolean.sql_name(), "BOOLEAN");
        assert_eq!(SqlType::DateTime.sql_name(), "TIMESTAMP");
        assert_eq!(SqlType::Varchar(700).sql_name(), "VARCHAR(700)");
        assert_eq!(SqlType::Text.sql_name(), "TEXT");
    }

    #[test]
    fn test_max_length_only_for_varchar() {
        assert_eq!(SqlType::Varchar(40).max_length(), Some(40));
        assert_eq!(SqlType::Text.max_length(), None);
        assert_eq!(SqlType::Integer.max_length(), None);
    }

    #[test]
    fn test_is_textual() {
        assert!(SqlType::Varchar(50).is_textual());
        assert!(SqlType::Text.is_textual());
        assert!(!SqlType::DateTime.is_textual());
    }
}
