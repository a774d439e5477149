//! Table definitions and the two naming variants of the schema.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::field::FieldInfo;
use crate::row::Row;
use crate::value::Value;

/// The two serializations of the one logical schema.
///
/// Both variants describe identical tables; they differ only in schema
/// name, column casing, and identity behavior on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVariant {
    /// The operational `dbo` schema: PascalCase columns, identifiers
    /// generated by the store on insert.
    Source,
    /// The analytics warehouse: lowercase columns, identifiers supplied
    /// explicitly during bulk load.
    Warehouse,
}

impl SchemaVariant {
    /// The schema (namespace) name tables live under.
    #[must_use]
    pub const fn schema_name(&self) -> &'static str {
        match self {
            SchemaVariant::Source => "dbo",
            SchemaVariant::Warehouse => "dw__stackoverflow2010__dbo",
        }
    }

    /// Whether the store generates primary keys on insert.
    ///
    /// The warehouse is loaded append-only with explicit identifiers; only
    /// the source schema auto-increments.
    #[must_use]
    pub const fn generates_identity(&self) -> bool {
        matches!(self, SchemaVariant::Source)
    }
}

/// Structural description of one table, shared by both naming variants.
#[derive(Debug, Clone)]
pub struct TableDef {
    /// Table name in the source (`dbo`) schema.
    pub source_name: &'static str,
    /// Table name in the warehouse schema.
    pub warehouse_name: &'static str,
    /// Columns in declaration order.
    pub fields: &'static [FieldInfo],
    /// Logical name of the single-column surrogate primary key.
    pub primary_key: &'static str,
}

impl TableDef {
    /// The table name under the given naming variant.
    #[must_use]
    pub const fn table_name(&self, variant: SchemaVariant) -> &'static str {
        match variant {
            SchemaVariant::Source => self.source_name,
            SchemaVariant::Warehouse => self.warehouse_name,
        }
    }

    /// The schema-qualified table name, unquoted.
    #[must_use]
    pub fn qualified_name(&self, variant: SchemaVariant) -> String {
        format!("{}.{}", variant.schema_name(), self.table_name(variant))
    }

    /// Look up a field by its logical name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The primary key field's metadata.
    #[must_use]
    pub fn primary_key_field(&self) -> Option<&FieldInfo> {
        self.field(self.primary_key)
    }

    /// Parse a JSON object serialized under `variant` naming back into a
    /// logically-named row.
    ///
    /// Columns absent from the object are read as NULL; a value whose JSON
    /// shape does not fit the declared column type is a validation error.
    pub fn row_from_json(
        &self,
        json: &serde_json::Value,
        variant: SchemaVariant,
    ) -> Result<Row, ValidationError> {
        let mut row = Row::with_capacity(self.fields.len());
        for field in self.fields {
            let column = field.column_name(variant);
            let value = match json.get(column) {
                None => Value::Null,
                Some(raw) => Value::from_json(raw, field.sql_type).ok_or_else(|| {
                    ValidationError::type_mismatch(self.warehouse_name, field.name, field.sql_type)
                })?,
            };
            row.insert(field.name.to_string(), value);
        }
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SqlType;

    static FIELDS: &[FieldInfo] = &[
        FieldInfo::new("id", "Id", "id", SqlType::Integer).primary_key(true),
        FieldInfo::new("type_name", "Type", "type", SqlType::Varchar(50)),
    ];

    static TABLE: TableDef = TableDef {
        source_name: "PostTypes",
        warehouse_name: "posttypes",
        fields: FIELDS,
        primary_key: "id",
    };

    #[test]
    fn test_schema_names() {
        assert_eq!(SchemaVariant::Source.schema_name(), "dbo");
        assert_eq!(
            SchemaVariant::Warehouse.schema_name(),
            "dw__stackoverflow2010__dbo"
        );
    }

    #[test]
    fn test_identity_behavior() {
        assert!(SchemaVariant::Source.generates_identity());
        assert!(!SchemaVariant::Warehouse.generates_identity());
    }

    #[test]
    fn test_table_names_and_qualification() {
        assert_eq!(TABLE.table_name(SchemaVariant::Source), "PostTypes");
        assert_eq!(TABLE.table_name(SchemaVariant::Warehouse), "posttypes");
        assert_eq!(TABLE.qualified_name(SchemaVariant::Source), "dbo.PostTypes");
        assert_eq!(
            TABLE.qualified_name(SchemaVariant::Warehouse),
            "dw__stackoverflow2010__dbo.posttypes"
        );
    }

    #[test]
    fn test_field_lookup() {
        assert!(TABLE.field("type_name").is_some());
        assert!(TABLE.field("Type").is_none());
        assert_eq!(TABLE.primary_key_field().map(|f| f.name), Some("id"));
    }

    #[test]
    fn test_row_from_json_source_naming() {
        let json = serde_json::json!({"Id": 1, "Type": "Question"});
        let row = TABLE.row_from_json(&json, SchemaVariant::Source).unwrap();
        assert_eq!(row.get("id"), Some(&Value::Int(1)));
        assert_eq!(
            row.get("type_name").and_then(Value::as_str),
            Some("Question")
        );
    }

    #[test]
    fn test_row_from_json_missing_column_reads_null() {
        let json = serde_json::json!({"id": 3});
        let row = TABLE.row_from_json(&json, SchemaVariant::Warehouse).unwrap();
        assert_eq!(row.get("type_name"), Some(&Value::Null));
    }

    #[test]
    fn test_row_from_json_type_mismatch() {
        let json = serde_json::json!({"id": "not a number"});
        let err = TABLE
            .row_from_json(&json, SchemaVariant::Warehouse)
            .unwrap_err();
        assert_eq!(err.field, "id");
    }
}
