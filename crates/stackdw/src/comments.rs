//! Comment rows.
//!
//! The warehouse column for the comment text is `Text` with a capital T;
//! the dump generator lowercased every other column but left this one
//! alone, and the projection reproduces that verbatim.

use chrono::NaiveDateTime;
use stackdw_core::{
    FieldInfo, Model, Row, RowReader, SqlType, TableDef, ValidationError, Value,
};

/// A comment on a post.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    /// Surrogate key; `None` until the source schema assigns one.
    pub id: Option<i32>,
    pub creation_date: NaiveDateTime,
    pub post_id: i32,
    /// Comment body, bounded to 700 characters.
    pub text: String,
    pub score: Option<i32>,
    /// Absent for comments by since-removed accounts.
    pub user_id: Option<i32>,
}

static FIELDS: &[FieldInfo] = &[
    FieldInfo::new("id", "Id", "id", SqlType::Integer).primary_key(true),
    FieldInfo::new("creation_date", "CreationDate", "creationdate", SqlType::DateTime),
    FieldInfo::new("post_id", "PostId", "postid", SqlType::Integer).foreign_key("posts.id"),
    FieldInfo::new("text", "Text", "Text", SqlType::Varchar(700)),
    FieldInfo::new("score", "Score", "score", SqlType::Integer).nullable(true),
    FieldInfo::new("user_id", "UserId", "userid", SqlType::Integer)
        .nullable(true)
        .foreign_key("users.id"),
];

static COMMENTS: TableDef = TableDef {
    source_name: "Comments",
    warehouse_name: "comments",
    fields: FIELDS,
    primary_key: "id",
};

impl Comment {
    /// Start building a comment from the non-nullable fields.
    #[must_use]
    pub fn builder(
        post_id: i32,
        text: impl Into<String>,
        creation_date: NaiveDateTime,
    ) -> CommentBuilder {
        CommentBuilder {
            comment: Comment {
                id: None,
                creation_date,
                post_id,
                text: text.into(),
                score: None,
                user_id: None,
            },
        }
    }
}

/// Builder for [`Comment`]; `build` validates the declared constraints.
#[derive(Debug, Clone)]
pub struct CommentBuilder {
    comment: Comment,
}

impl CommentBuilder {
    /// Explicit surrogate key (required for warehouse bulk load).
    pub fn id(mut self, id: i32) -> Self {
        self.comment.id = Some(id);
        self
    }

    pub fn score(mut self, score: i32) -> Self {
        self.comment.score = Some(score);
        self
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.comment.user_id = Some(user_id);
        self
    }

    /// Validate and return the comment row.
    pub fn build(self) -> Result<Comment, ValidationError> {
        self.comment.validate()?;
        Ok(self.comment)
    }
}

impl Model for Comment {
    fn table() -> &'static TableDef {
        &COMMENTS
    }

    fn to_row(&self) -> Row {
        let mut row = Row::with_capacity(FIELDS.len());
        row.insert("id", self.id);
        row.insert("creation_date", self.creation_date);
        row.insert("post_id", self.post_id);
        row.insert("text", self.text.as_str());
        row.insert("score", self.score);
        row.insert("user_id", self.user_id);
        row
    }

    fn from_row(row: &Row) -> Result<Self, ValidationError> {
        let r = RowReader::new(Self::table().warehouse_name, row);
        Ok(Self {
            id: r.opt_int("id")?,
            creation_date: r.require_datetime("creation_date")?,
            post_id: r.require_int("post_id")?,
            text: r.require_text("text")?,
            score: r.opt_int("score")?,
            user_id: r.opt_int("user_id")?,
        })
    }

    fn primary_key_value(&self) -> Value {
        Value::from(self.id)
    }
}
