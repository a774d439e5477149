//! The `Model` trait: static metadata plus row conversion for each table.

use chrono::NaiveDateTime;

use crate::error::ValidationError;
use crate::row::Row;
use crate::table::{SchemaVariant, TableDef};
use crate::value::Value;

/// A typed row of one warehouse table.
///
/// Implementations supply static metadata (`table`) and conversions between
/// the typed struct and a logically-named [`Row`]. Validation and the two
/// naming projections are provided on top of that metadata and are never
/// re-implemented per entity.
pub trait Model: Sized {
    /// Structural description of this model's table.
    fn table() -> &'static TableDef;

    /// Convert to a row keyed by logical field names.
    fn to_row(&self) -> Row;

    /// Rebuild from a row keyed by logical field names.
    fn from_row(row: &Row) -> Result<Self, ValidationError>;

    /// Current primary key value; `Null` for a row awaiting an identity.
    fn primary_key_value(&self) -> Value;

    /// Row-local domain rules beyond nullability and length. Default: none.
    fn check(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Whether this row has no identity yet.
    fn is_new(&self) -> bool {
        self.primary_key_value().is_null()
    }

    /// Validate nullability and length bounds, then domain rules.
    fn validate(&self) -> Result<(), ValidationError> {
        validate_row(Self::table(), &self.to_row())?;
        self.check()
    }

    /// Validate for insertion under a naming variant.
    ///
    /// The warehouse is bulk-loaded with explicit identifiers, so a row
    /// without an id is rejected there; the source schema generates ids.
    fn validate_for(&self, variant: SchemaVariant) -> Result<(), ValidationError> {
        self.validate()?;
        if !variant.generates_identity() && self.is_new() {
            let table = Self::table();
            return Err(ValidationError::missing_required(
                table.warehouse_name,
                table.primary_key,
            ));
        }
        Ok(())
    }

    /// Serialize to a row keyed by the variant's column names.
    fn to_projected(&self, variant: SchemaVariant) -> Row {
        let table = Self::table();
        let row = self.to_row();
        let mut projected = Row::with_capacity(table.fields.len());
        for field in table.fields {
            let value = row.get(field.name).cloned().unwrap_or(Value::Null);
            projected.insert(field.column_name(variant).to_string(), value);
        }
        projected
    }

    /// Rebuild from a row keyed by the variant's column names.
    fn from_projected(row: &Row, variant: SchemaVariant) -> Result<Self, ValidationError> {
        let table = Self::table();
        let mut logical = Row::with_capacity(table.fields.len());
        for field in table.fields {
            let value = row
                .get(field.column_name(variant))
                .cloned()
                .unwrap_or(Value::Null);
            logical.insert(field.name.to_string(), value);
        }
        Self::from_row(&logical)
    }

    /// Rebuild from a JSON object serialized under `variant` naming.
    fn from_json(
        json: &serde_json::Value,
        variant: SchemaVariant,
    ) -> Result<Self, ValidationError> {
        let row = Self::table().row_from_json(json, variant)?;
        Self::from_row(&row)
    }
}

/// Check a logically-named row against its table's declared constraints.
///
/// The primary key is exempt from the null check: a `Null` id marks a new
/// row whose identity the source schema generates on insert (explicit-id
/// enforcement for the warehouse lives in [`Model::validate_for`]).
pub fn validate_row(table: &TableDef, row: &Row) -> Result<(), ValidationError> {
    for field in table.fields {
        let value = row.get(field.name);
        let is_null = value.is_none_or(Value::is_null);

        if is_null && !field.nullable && !field.primary_key {
            return Err(ValidationError::missing_required(
                table.warehouse_name,
                field.name,
            ));
        }

        if let (Some(max), Some(actual)) = (field.max_length(), value.and_then(Value::text_len)) {
            if actual > max as usize {
                return Err(ValidationError::length_exceeded(
                    table.warehouse_name,
                    field.name,
                    max,
                    actual,
                ));
            }
        }
    }
    Ok(())
}

/// Typed, error-contextualized reads from a logically-named row.
///
/// Used by `from_row` implementations; a missing or NULL column surfaces
/// as `MissingRequired` for the `require_*` readers and as `None` for the
/// `opt_*` readers, and a wrongly-typed value as `TypeMismatch`.
#[derive(Debug, Clone, Copy)]
pub struct RowReader<'a> {
    table: &'static str,
    row: &'a Row,
}

impl<'a> RowReader<'a> {
    /// Wrap a row with its table name for error context.
    #[must_use]
    pub fn new(table: &'static str, row: &'a Row) -> Self {
        Self { table, row }
    }

    fn value(&self, field: &'static str) -> Option<&Value> {
        self.row.get(field).filter(|v| !v.is_null())
    }

    fn required<T>(
        &self,
        field: &'static str,
        read: impl Fn(&Value) -> Option<T>,
        expected: crate::types::SqlType,
    ) -> Result<T, ValidationError> {
        match self.value(field) {
            None => Err(ValidationError::missing_required(self.table, field)),
            Some(v) => {
                read(v).ok_or_else(|| ValidationError::type_mismatch(self.table, field, expected))
            }
        }
    }

    fn optional<T>(
        &self,
        field: &'static str,
        read: impl Fn(&Value) -> Option<T>,
        expected: crate::types::SqlType,
    ) -> Result<Option<T>, ValidationError> {
        match self.value(field) {
            None => Ok(None),
            Some(v) => read(v)
                .map(Some)
                .ok_or_else(|| ValidationError::type_mismatch(self.table, field, expected)),
        }
    }

    /// Required `i32` column.
    pub fn require_int(&self, field: &'static str) -> Result<i32, ValidationError> {
        self.required(field, Value::as_int, crate::types::SqlType::Integer)
    }

    /// Optional `i32` column.
    pub fn opt_int(&self, field: &'static str) -> Result<Option<i32>, ValidationError> {
        self.optional(field, Value::as_int, crate::types::SqlType::Integer)
    }

    /// Required `bool` column.
    pub fn require_bool(&self, field: &'static str) -> Result<bool, ValidationError> {
        self.required(field, Value::as_bool, crate::types::SqlType::Boolean)
    }

    /// Required string column.
    pub fn require_text(&self, field: &'static str) -> Result<String, ValidationError> {
        self.required(
            field,
            |v| v.as_str().map(str::to_string),
            crate::types::SqlType::Text,
        )
    }

    /// Optional string column.
    pub fn opt_text(&self, field: &'static str) -> Result<Option<String>, ValidationError> {
        self.optional(
            field,
            |v| v.as_str().map(str::to_string),
            crate::types::SqlType::Text,
        )
    }

    /// Required timestamp column.
    pub fn require_datetime(&self, field: &'static str) -> Result<NaiveDateTime, ValidationError> {
        self.required(field, Value::as_datetime, crate::types::SqlType::DateTime)
    }

    /// Optional timestamp column.
    pub fn opt_datetime(
        &self,
        field: &'static str,
    ) -> Result<Option<NaiveDateTime>, ValidationError> {
        self.optional(field, Value::as_datetime, crate::types::SqlType::DateTime)
    }
}
