//! DDL generation for the StackDW schema definitions.
//!
//! Renders `CREATE SCHEMA` / `CREATE TABLE` statements for either naming
//! variant from the same [`TableDef`]s. Identity behavior follows the
//! variant: the source schema generates primary keys on insert, the
//! warehouse expects them supplied during bulk load.
//!
//! Foreign keys are declared from the dataset's naming convention; a
//! reference whose target table is not part of the schema slice passed in
//! is skipped rather than emitted dangling.

use stackdw_core::{FieldInfo, SchemaVariant, TableDef};

/// Quote an identifier with double quotes, doubling embedded quotes.
#[must_use]
pub fn quote_identifier(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// The quoted, schema-qualified name of a table under a variant.
#[must_use]
pub fn qualified_table(table: &TableDef, variant: SchemaVariant) -> String {
    format!(
        "{}.{}",
        quote_identifier(variant.schema_name()),
        quote_identifier(table.table_name(variant))
    )
}

/// `CREATE SCHEMA` for the variant's namespace.
#[must_use]
pub fn create_schema_sql(variant: SchemaVariant) -> String {
    format!(
        "CREATE SCHEMA IF NOT EXISTS {}",
        quote_identifier(variant.schema_name())
    )
}

fn column_sql(field: &FieldInfo, variant: SchemaVariant) -> String {
    let mut sql = format!(
        "{} {}",
        quote_identifier(field.column_name(variant)),
        field.sql_type.sql_name()
    );
    if field.primary_key && variant.generates_identity() {
        sql.push_str(" GENERATED BY DEFAULT AS IDENTITY");
    }
    if !field.nullable {
        sql.push_str(" NOT NULL");
    }
    sql
}

fn foreign_key_sql(
    table: &TableDef,
    field: &FieldInfo,
    schema: &[&TableDef],
    variant: SchemaVariant,
) -> Option<String> {
    let reference = field.foreign_key?;
    let Some((target_table, target_field)) = reference.split_once('.') else {
        tracing::warn!(reference, "malformed foreign key reference");
        return None;
    };
    let Some(target) = schema
        .iter()
        .find(|t| t.warehouse_name == target_table)
    else {
        tracing::warn!(
            table = table.warehouse_name,
            reference,
            "foreign key target not in schema; skipping clause"
        );
        return None;
    };
    let target_column = target.field(target_field)?;
    Some(format!(
        "FOREIGN KEY ({}) REFERENCES {} ({})",
        quote_identifier(field.column_name(variant)),
        qualified_table(target, variant),
        quote_identifier(target_column.column_name(variant))
    ))
}

/// Full `CREATE TABLE` for one table under a variant.
///
/// `schema` is the set of tables foreign keys may reference (normally the
/// whole registry, including `table` itself for self-references).
#[must_use]
pub fn create_table_sql(table: &TableDef, schema: &[&TableDef], variant: SchemaVariant) -> String {
    let mut clauses: Vec<String> = table
        .fields
        .iter()
        .map(|field| column_sql(field, variant))
        .collect();

    if let Some(pk) = table.primary_key_field() {
        clauses.push(format!(
            "CONSTRAINT {} PRIMARY KEY ({})",
            quote_identifier(&format!("{}_pkey", table.table_name(variant))),
            quote_identifier(pk.column_name(variant))
        ));
    }

    for field in table.fields {
        if let Some(fk) = foreign_key_sql(table, field, schema, variant) {
            clauses.push(fk);
        }
    }

    let sql = format!(
        "CREATE TABLE {} (\n    {}\n)",
        qualified_table(table, variant),
        clauses.join(",\n    ")
    );
    tracing::debug!(table = table.warehouse_name, ?variant, "generated CREATE TABLE");
    sql
}

/// `CREATE SCHEMA` followed by `CREATE TABLE` for every table, in the
/// order given (the registry orders lookup tables first).
#[must_use]
pub fn create_all_sql(schema: &[&TableDef], variant: SchemaVariant) -> Vec<String> {
    let mut statements = Vec::with_capacity(schema.len() + 1);
    statements.push(create_schema_sql(variant));
    for table in schema {
        statements.push(create_table_sql(table, schema, variant));
    }
    for stmt in &statements {
        tracing::trace!(sql = %stmt, "generated DDL statement");
    }
    statements
}
