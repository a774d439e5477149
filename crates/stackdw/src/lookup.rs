//! Static lookup tables (`PostTypes`, `LinkTypes`, `VoteTypes`) and the
//! well-known row ids the public dataset ships with.
//!
//! The lookup tables are small and rarely mutated; the constants below let
//! consumers name a row id without joining.

use stackdw_core::{
    FieldInfo, Model, Row, RowReader, SqlType, TableDef, ValidationError, Value,
};

/// Well-known `PostTypes.Id` values.
pub mod post_type {
    pub const QUESTION: i32 = 1;
    pub const ANSWER: i32 = 2;
    pub const WIKI: i32 = 3;
    pub const TAG_WIKI_EXCERPT: i32 = 4;
    pub const TAG_WIKI: i32 = 5;
    pub const MODERATOR_NOMINATION: i32 = 6;
    pub const WIKI_PLACEHOLDER: i32 = 7;
    pub const PRIVILEGE_WIKI: i32 = 8;
}

/// Well-known `LinkTypes.Id` values.
pub mod link_type {
    pub const LINKED: i32 = 1;
    pub const DUPLICATE: i32 = 3;
}

/// Well-known `VoteTypes.Id` values.
pub mod vote_type {
    pub const ACCEPTED_BY_ORIGINATOR: i32 = 1;
    pub const UP_MOD: i32 = 2;
    pub const DOWN_MOD: i32 = 3;
    pub const OFFENSIVE: i32 = 4;
    pub const FAVORITE: i32 = 5;
    pub const CLOSE: i32 = 6;
    pub const REOPEN: i32 = 7;
    pub const BOUNTY_START: i32 = 8;
    pub const BOUNTY_CLOSE: i32 = 9;
    pub const DELETION: i32 = 10;
    pub const UNDELETION: i32 = 11;
    pub const SPAM: i32 = 12;
    pub const MODERATOR_REVIEW: i32 = 15;
    pub const APPROVE_EDIT_SUGGESTION: i32 = 16;

    /// Whether a vote type carries a bounty amount.
    #[must_use]
    pub const fn is_bounty(vote_type_id: i32) -> bool {
        matches!(vote_type_id, BOUNTY_START | BOUNTY_CLOSE)
    }
}

/// Badge tier stored in `Badges.Class`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeClass {
    Gold,
    Silver,
    Bronze,
}

impl BadgeClass {
    /// Decode the stored integer tier.
    #[must_use]
    pub const fn from_i32(value: i32) -> Option<Self> {
        match value {
            1 => Some(BadgeClass::Gold),
            2 => Some(BadgeClass::Silver),
            3 => Some(BadgeClass::Bronze),
            _ => None,
        }
    }

    /// The integer tier as stored in the column.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        match self {
            BadgeClass::Gold => 1,
            BadgeClass::Silver => 2,
            BadgeClass::Bronze => 3,
        }
    }
}

/// A row of the `PostTypes` lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostType {
    /// Surrogate key; `None` until the source schema assigns one.
    pub id: Option<i32>,
    /// Short label, e.g. `Question` or `Answer`.
    pub type_name: String,
}

static POST_TYPE_FIELDS: &[FieldInfo] = &[
    FieldInfo::new("id", "Id", "id", SqlType::Integer).primary_key(true),
    FieldInfo::new("type_name", "Type", "type", SqlType::Varchar(50)),
];

static POST_TYPES: TableDef = TableDef {
    source_name: "PostTypes",
    warehouse_name: "posttypes",
    fields: POST_TYPE_FIELDS,
    primary_key: "id",
};

impl PostType {
    /// Build a validated lookup row.
    pub fn new(id: i32, type_name: impl Into<String>) -> Result<Self, ValidationError> {
        let row = Self {
            id: Some(id),
            type_name: type_name.into(),
        };
        row.validate()?;
        Ok(row)
    }
}

impl Model for PostType {
    fn table() -> &'static TableDef {
        &POST_TYPES
    }

    fn to_row(&self) -> Row {
        let mut row = Row::with_capacity(2);
        row.insert("id", self.id);
        row.insert("type_name", self.type_name.as_str());
        row
    }

    fn from_row(row: &Row) -> Result<Self, ValidationError> {
        let r = RowReader::new(Self::table().warehouse_name, row);
        Ok(Self {
            id: r.opt_int("id")?,
            type_name: r.require_text("type_name")?,
        })
    }

    fn primary_key_value(&self) -> Value {
        Value::from(self.id)
    }
}

/// A row of the `LinkTypes` lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkType {
    /// Surrogate key; `None` until the source schema assigns one.
    pub id: Option<i32>,
    /// Short label, e.g. `Linked` or `Duplicate`.
    pub type_name: String,
}

static LINK_TYPE_FIELDS: &[FieldInfo] = &[
    FieldInfo::new("id", "Id", "id", SqlType::Integer).primary_key(true),
    FieldInfo::new("type_name", "Type", "type", SqlType::Varchar(50)),
];

static LINK_TYPES: TableDef = TableDef {
    source_name: "LinkTypes",
    warehouse_name: "linktypes",
    fields: LINK_TYPE_FIELDS,
    primary_key: "id",
};

impl LinkType {
    /// Build a validated lookup row.
    pub fn new(id: i32, type_name: impl Into<String>) -> Result<Self, ValidationError> {
        let row = Self {
            id: Some(id),
            type_name: type_name.into(),
        };
        row.validate()?;
        Ok(row)
    }
}

impl Model for LinkType {
    fn table() -> &'static TableDef {
        &LINK_TYPES
    }

    fn to_row(&self) -> Row {
        let mut row = Row::with_capacity(2);
        row.insert("id", self.id);
        row.insert("type_name", self.type_name.as_str());
        row
    }

    fn from_row(row: &Row) -> Result<Self, ValidationError> {
        let r = RowReader::new(Self::table().warehouse_name, row);
        Ok(Self {
            id: r.opt_int("id")?,
            type_name: r.require_text("type_name")?,
        })
    }

    fn primary_key_value(&self) -> Value {
        Value::from(self.id)
    }
}

/// A row of the `VoteTypes` lookup table.
///
/// Unlike the other two lookups this one labels its column `Name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteType {
    /// Surrogate key; `None` until the source schema assigns one.
    pub id: Option<i32>,
    /// Short label, e.g. `UpMod` or `BountyStart`.
    pub name: String,
}

static VOTE_TYPE_FIELDS: &[FieldInfo] = &[
    FieldInfo::new("id", "Id", "id", SqlType::Integer).primary_key(true),
    FieldInfo::new("name", "Name", "name", SqlType::Varchar(50)),
];

static VOTE_TYPES: TableDef = TableDef {
    source_name: "VoteTypes",
    warehouse_name: "votetypes",
    fields: VOTE_TYPE_FIELDS,
    primary_key: "id",
};

impl VoteType {
    /// Build a validated lookup row.
    pub fn new(id: i32, name: impl Into<String>) -> Result<Self, ValidationError> {
        let row = Self {
            id: Some(id),
            name: name.into(),
        };
        row.validate()?;
        Ok(row)
    }
}

impl Model for VoteType {
    fn table() -> &'static TableDef {
        &VOTE_TYPES
    }

    fn to_row(&self) -> Row {
        let mut row = Row::with_capacity(2);
        row.insert("id", self.id);
        row.insert("name", self.name.as_str());
        row
    }

    fn from_row(row: &Row) -> Result<Self, ValidationError> {
        let r = RowReader::new(Self::table().warehouse_name, row);
        Ok(Self {
            id: r.opt_int("id")?,
            name: r.require_text("name")?,
        })
    }

    fn primary_key_value(&self) -> Value {
        Value::from(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackdw_core::{SchemaVariant, ValidationErrorKind};

    #[test]
    fn test_lookup_rows_validate() {
        let question = PostType::new(post_type::QUESTION, "Question").unwrap();
        assert_eq!(question.id, Some(1));

        let linked = LinkType::new(link_type::LINKED, "Linked").unwrap();
        assert_eq!(linked.type_name, "Linked");

        let up = VoteType::new(vote_type::UP_MOD, "UpMod").unwrap();
        assert_eq!(up.name, "UpMod");
    }

    #[test]
    fn test_label_length_bound() {
        let err = PostType::new(9, "x".repeat(51)).unwrap_err();
        assert_eq!(
            err.kind,
            ValidationErrorKind::LengthExceeded { max: 50, actual: 51 }
        );
        assert!(PostType::new(9, "x".repeat(50)).is_ok());
    }

    #[test]
    fn test_vote_type_column_is_name_not_type() {
        let table = VoteType::table();
        let field = table.field("name").unwrap();
        assert_eq!(field.column_name(SchemaVariant::Source), "Name");
        assert_eq!(field.column_name(SchemaVariant::Warehouse), "name");
    }

    #[test]
    fn test_bounty_vote_types() {
        assert!(vote_type::is_bounty(vote_type::BOUNTY_START));
        assert!(vote_type::is_bounty(vote_type::BOUNTY_CLOSE));
        assert!(!vote_type::is_bounty(vote_type::UP_MOD));
    }

    #[test]
    fn test_badge_class_round_trip() {
        for class in [BadgeClass::Gold, BadgeClass::Silver, BadgeClass::Bronze] {
            assert_eq!(BadgeClass::from_i32(class.as_i32()), Some(class));
        }
        assert_eq!(BadgeClass::from_i32(0), None);
        assert_eq!(BadgeClass::from_i32(4), None);
    }
}
