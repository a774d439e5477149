//! Field and column definitions.

use crate::table::SchemaVariant;
use crate::types::SqlType;

/// Metadata about a single column of the schema.
///
/// Every field carries both of its serialized names: the operational
/// `dbo` schema uses PascalCase columns, the warehouse schema uses the
/// same names lowercased by the dump generator. Both are stored verbatim
/// rather than derived, because the generator was not perfectly uniform
/// (`Comments.Text` kept its capital T in the warehouse).
#[derive(Debug, Clone)]
pub struct FieldInfo {
    /// Logical field name (Rust snake_case).
    pub name: &'static str,
    /// Column name in the source (`dbo`) schema.
    pub source_column: &'static str,
    /// Column name in the warehouse schema.
    pub warehouse_column: &'static str,
    /// SQL type for this field.
    pub sql_type: SqlType,
    /// Whether this field is nullable.
    pub nullable: bool,
    /// Whether this is the primary key.
    pub primary_key: bool,
    /// Foreign key reference (`table.field`), derived from the dataset's
    /// naming convention; not enforced by the origin store.
    pub foreign_key: Option<&'static str>,
}

impl FieldInfo {
    /// Create a new field with the minimal required data.
    pub const fn new(
        name: &'static str,
        source_column: &'static str,
        warehouse_column: &'static str,
        sql_type: SqlType,
    ) -> Self {
        Self {
            name,
            source_column,
            warehouse_column,
            sql_type,
            nullable: false,
            primary_key: false,
            foreign_key: None,
        }
    }

    /// Set the nullable flag.
    pub const fn nullable(mut self, value: bool) -> Self {
        self.nullable = value;
        self
    }

    /// Set the primary key flag.
    pub const fn primary_key(mut self, value: bool) -> Self {
        self.primary_key = value;
        self
    }

    /// Set a foreign key reference (`table.field`).
    pub const fn foreign_key(mut self, reference: &'static str) -> Self {
        self.foreign_key = Some(reference);
        self
    }

    /// The column name under the given naming variant.
    #[must_use]
    pub const fn column_name(&self, variant: SchemaVariant) -> &'static str {
        match variant {
            SchemaVariant::Source => self.source_column,
            SchemaVariant::Warehouse => self.warehouse_column,
        }
    }

    /// Maximum character length, for bounded string fields.
    #[must_use]
    pub const fn max_length(&self) -> Option<u32> {
        self.sql_type.max_length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_info_new_defaults() {
        let field = FieldInfo::new("score", "Score", "score", SqlType::Integer);
        assert_eq!(field.name, "score");
        assert!(!field.nullable);
        assert!(!field.primary_key);
        assert!(field.foreign_key.is_none());
    }

    #[test]
    fn test_column_name_per_variant() {
        let field = FieldInfo::new("post_type_id", "PostTypeId", "posttypeid", SqlType::Integer)
            .foreign_key("posttypes.id");
        assert_eq!(field.column_name(SchemaVariant::Source), "PostTypeId");
        assert_eq!(field.column_name(SchemaVariant::Warehouse), "posttypeid");
        assert_eq!(field.foreign_key, Some("posttypes.id"));
    }

    #[test]
    fn test_max_length_from_type() {
        let bounded = FieldInfo::new("text", "Text", "Text", SqlType::Varchar(700));
        assert_eq!(bounded.max_length(), Some(700));
        let unbounded = FieldInfo::new("body", "Body", "body", SqlType::Text);
        assert_eq!(unbounded.max_length(), None);
    }
}
