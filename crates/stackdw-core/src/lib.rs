//! Core types and traits for the StackDW schema definitions.
//!
//! `stackdw-core` is the foundation layer: it defines the metadata and data
//! types every other crate builds on.
//!
//! # Role In The Architecture
//!
//! - **Metadata**: [`FieldInfo`] and [`TableDef`] describe columns and tables
//!   once; both naming variants ([`SchemaVariant`]) are projections of the
//!   same definitions.
//! - **Data model**: [`Row`] and [`Value`] carry row payloads between typed
//!   entities, validation, and whatever storage layer a consumer chooses.
//! - **Contract**: [`Model`] is implemented by each entity in the `stackdw`
//!   crate; validation and naming projections are provided methods driven by
//!   the static metadata.
//!
//! Schema definitions are immutable, process-wide constants; nothing in this
//! crate holds runtime state.

pub mod error;
pub mod field;
pub mod model;
pub mod row;
pub mod table;
pub mod types;
pub mod value;

pub use error::{ConstraintKind, Error, Result, ValidationError, ValidationErrorKind};
pub use field::FieldInfo;
pub use model::{Model, RowReader, validate_row};
pub use row::Row;
pub use table::{SchemaVariant, TableDef};
pub use types::SqlType;
pub use value::Value;
