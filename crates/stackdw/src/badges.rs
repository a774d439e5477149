//! Badge rows.

use chrono::NaiveDateTime;
use stackdw_core::{
    FieldInfo, Model, Row, RowReader, SqlType, TableDef, ValidationError, Value,
};

use crate::lookup::BadgeClass;

/// A badge awarded to a user.
///
/// Every column is non-nullable; badges only exist fully formed.
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    /// Surrogate key; `None` until the source schema assigns one.
    pub id: Option<i32>,
    pub user_id: i32,
    /// Badge name, e.g. `Nice Answer`; for tag badges, the tag itself.
    pub name: String,
    pub date: NaiveDateTime,
    /// Tier: 1 gold, 2 silver, 3 bronze. See [`BadgeClass`].
    pub class: i32,
    pub tag_based: bool,
}

static FIELDS: &[FieldInfo] = &[
    FieldInfo::new("id", "Id", "id", SqlType::Integer).primary_key(true),
    FieldInfo::new("user_id", "UserId", "userid", SqlType::Integer).foreign_key("users.id"),
    FieldInfo::new("name", "Name", "name", SqlType::Varchar(50)),
    FieldInfo::new("date", "Date", "date", SqlType::DateTime),
    FieldInfo::new("class", "Class", "class", SqlType::Integer),
    FieldInfo::new("tag_based", "TagBased", "tagbased", SqlType::Boolean),
];

static BADGES: TableDef = TableDef {
    source_name: "Badges",
    warehouse_name: "badges",
    fields: FIELDS,
    primary_key: "id",
};

impl Badge {
    /// Start building a badge; all fields but the id are required.
    #[must_use]
    pub fn builder(
        user_id: i32,
        name: impl Into<String>,
        date: NaiveDateTime,
        class: BadgeClass,
        tag_based: bool,
    ) -> BadgeBuilder {
        BadgeBuilder {
            badge: Badge {
                id: None,
                user_id,
                name: name.into(),
                date,
                class: class.as_i32(),
                tag_based,
            },
        }
    }

    /// The decoded tier, if the stored integer is a known one.
    #[must_use]
    pub fn badge_class(&self) -> Option<BadgeClass> {
        BadgeClass::from_i32(self.class)
    }
}

/// Builder for [`Badge`]; `build` validates the declared constraints.
#[derive(Debug, Clone)]
pub struct BadgeBuilder {
    badge: Badge,
}

impl BadgeBuilder {
    /// Explicit surrogate key (required for warehouse bulk load).
    pub fn id(mut self, id: i32) -> Self {
        self.badge.id = Some(id);
        self
    }

    /// Validate and return the badge row.
    pub fn build(self) -> Result<Badge, ValidationError> {
        self.badge.validate()?;
        Ok(self.badge)
    }
}

impl Model for Badge {
    fn table() -> &'static TableDef {
        &BADGES
    }

    fn to_row(&self) -> Row {
        let mut row = Row::with_capacity(FIELDS.len());
        row.insert("id", self.id);
        row.insert("user_id", self.user_id);
        row.insert("name", self.name.as_str());
        row.insert("date", self.date);
        row.insert("class", self.class);
        row.insert("tag_based", self.tag_based);
        row
    }

    fn from_row(row: &Row) -> Result<Self, ValidationError> {
        let r = RowReader::new(Self::table().warehouse_name, row);
        Ok(Self {
            id: r.opt_int("id")?,
            user_id: r.require_int("user_id")?,
            name: r.require_text("name")?,
            date: r.require_datetime("date")?,
            class: r.require_int("class")?,
            tag_based: r.require_bool("tag_based")?,
        })
    }

    fn primary_key_value(&self) -> Value {
        Value::from(self.id)
    }
}
