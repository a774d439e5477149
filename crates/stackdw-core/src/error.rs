//! Error taxonomy for the schema layer.
//!
//! Two families exist: `ValidationError` for constraint violations caught
//! before a row reaches storage, and `Error::StorageConstraint` for the
//! same class of violation reported back by the backing store. Retry
//! policy belongs to the caller's transaction strategy, never here.

use std::fmt;

use crate::types::SqlType;

/// Result alias defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Which declared constraint a row violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// NULL (or absent) value in a non-nullable column.
    MissingRequired,
    /// Bounded string value longer than the declared maximum.
    LengthExceeded {
        /// Declared maximum character length.
        max: u32,
        /// Actual character length of the rejected value.
        actual: usize,
    },
    /// Value shape does not fit the declared column type.
    TypeMismatch {
        /// The declared column type.
        expected: SqlType,
    },
    /// Row-local domain rule violated (e.g. an answer without a parent).
    Domain(&'static str),
}

/// A constraint violation caught before storage, naming the table, the
/// field, and the constraint that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Warehouse name of the table whose row failed.
    pub table: &'static str,
    /// Logical name of the offending field.
    pub field: &'static str,
    /// The violated constraint.
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    /// NULL in a non-nullable column.
    #[must_use]
    pub const fn missing_required(table: &'static str, field: &'static str) -> Self {
        Self {
            table,
            field,
            kind: ValidationErrorKind::MissingRequired,
        }
    }

    /// Bounded string overflow.
    #[must_use]
    pub const fn length_exceeded(
        table: &'static str,
        field: &'static str,
        max: u32,
        actual: usize,
    ) -> Self {
        Self {
            table,
            field,
            kind: ValidationErrorKind::LengthExceeded { max, actual },
        }
    }

    /// Value shape does not fit the declared type.
    #[must_use]
    pub const fn type_mismatch(
        table: &'static str,
        field: &'static str,
        expected: SqlType,
    ) -> Self {
        Self {
            table,
            field,
            kind: ValidationErrorKind::TypeMismatch { expected },
        }
    }

    /// Row-local domain rule violation.
    #[must_use]
    pub const fn domain(table: &'static str, field: &'static str, rule: &'static str) -> Self {
        Self {
            table,
            field,
            kind: ValidationErrorKind::Domain(rule),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}: ", self.table, self.field)?;
        match &self.kind {
            ValidationErrorKind::MissingRequired => {
                write!(f, "null value in non-nullable column")
            }
            ValidationErrorKind::LengthExceeded { max, actual } => {
                write!(f, "value of length {actual} exceeds maximum {max}")
            }
            ValidationErrorKind::TypeMismatch { expected } => {
                write!(f, "value does not fit declared type {}", expected.sql_name())
            }
            ValidationErrorKind::Domain(rule) => write!(f, "{rule}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Which constraint class a storage backend reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// NOT NULL violation.
    NotNull,
    /// String length / value-too-long violation.
    Length,
    /// Primary key duplication.
    PrimaryKey,
    /// Foreign key violation.
    ForeignKey,
}

impl ConstraintKind {
    /// Human-readable constraint class name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConstraintKind::NotNull => "not-null",
            ConstraintKind::Length => "length",
            ConstraintKind::PrimaryKey => "primary-key",
            ConstraintKind::ForeignKey => "foreign-key",
        }
    }
}

/// Top-level error for schema consumers.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A constraint violation caught before reaching storage.
    Validation(ValidationError),
    /// A constraint violation raised by the backing store on insert/update.
    /// A storage adapter maps its driver's error into this shape.
    StorageConstraint {
        /// The violated constraint class.
        constraint: ConstraintKind,
        /// Backend-provided message, verbatim.
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(err) => write!(f, "validation failed: {err}"),
            Error::StorageConstraint {
                constraint,
                message,
            } => {
                write!(f, "storage {} constraint: {message}", constraint.as_str())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Validation(err) => Some(err),
            Error::StorageConstraint { .. } => None,
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}
