//! Post link rows: "linked" and "duplicate" edges between posts.

use chrono::NaiveDateTime;
use stackdw_core::{
    FieldInfo, Model, Row, RowReader, SqlType, TableDef, ValidationError, Value,
};

/// A directed link between two posts.
#[derive(Debug, Clone, PartialEq)]
pub struct PostLink {
    /// Surrogate key; `None` until the source schema assigns one.
    pub id: Option<i32>,
    pub post_id: i32,
    pub related_post_id: i32,
    pub link_type_id: i32,
    pub creation_date: NaiveDateTime,
}

static FIELDS: &[FieldInfo] = &[
    FieldInfo::new("id", "Id", "id", SqlType::Integer).primary_key(true),
    FieldInfo::new("post_id", "PostId", "postid", SqlType::Integer).foreign_key("posts.id"),
    FieldInfo::new("related_post_id", "RelatedPostId", "relatedpostid", SqlType::Integer)
        .foreign_key("posts.id"),
    FieldInfo::new("link_type_id", "LinkTypeId", "linktypeid", SqlType::Integer)
        .foreign_key("linktypes.id"),
    FieldInfo::new("creation_date", "CreationDate", "creationdate", SqlType::DateTime),
];

static POST_LINKS: TableDef = TableDef {
    source_name: "PostLinks",
    warehouse_name: "postlinks",
    fields: FIELDS,
    primary_key: "id",
};

impl PostLink {
    /// Build a validated link; every field but the id is required.
    pub fn new(
        post_id: i32,
        related_post_id: i32,
        link_type_id: i32,
        creation_date: NaiveDateTime,
    ) -> Result<Self, ValidationError> {
        let link = Self {
            id: None,
            post_id,
            related_post_id,
            link_type_id,
            creation_date,
        };
        link.validate()?;
        Ok(link)
    }

    /// Attach an explicit surrogate key (required for warehouse bulk load).
    #[must_use]
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }
}

impl Model for PostLink {
    fn table() -> &'static TableDef {
        &POST_LINKS
    }

    fn to_row(&self) -> Row {
        let mut row = Row::with_capacity(FIELDS.len());
        row.insert("id", self.id);
        row.insert("post_id", self.post_id);
        row.insert("related_post_id", self.related_post_id);
        row.insert("link_type_id", self.link_type_id);
        row.insert("creation_date", self.creation_date);
        row
    }

    fn from_row(row: &Row) -> Result<Self, ValidationError> {
        let r = RowReader::new(Self::table().warehouse_name, row);
        Ok(Self {
            id: r.opt_int("id")?,
            post_id: r.require_int("post_id")?,
            related_post_id: r.require_int("related_post_id")?,
            link_type_id: r.require_int("link_type_id")?,
            creation_date: r.require_datetime("creation_date")?,
        })
    }

    fn primary_key_value(&self) -> Value {
        Value::from(self.id)
    }

    fn check(&self) -> Result<(), ValidationError> {
        if self.post_id == self.related_post_id {
            return Err(ValidationError::domain(
                Self::table().warehouse_name,
                "related_post_id",
                "post cannot link to itself",
            ));
        }
        Ok(())
    }
}
