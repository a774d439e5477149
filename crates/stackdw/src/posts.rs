//! Post rows. Questions, answers, and wiki entries share this one table,
//! discriminated by `PostTypeId`.

use chrono::NaiveDateTime;
use stackdw_core::{
    FieldInfo, Model, Row, RowReader, SqlType, TableDef, ValidationError, Value,
};

use crate::lookup::post_type;

/// A post: question, answer, or wiki entry.
///
/// An answer references its question through `parent_id`. A question may
/// carry `accepted_answer_id`; that it points at one of the question's own
/// answers is a cross-row property the storage layer has to uphold, so it
/// is not checked here.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// Surrogate key; `None` until the source schema assigns one.
    pub id: Option<i32>,
    /// Rendered body; unbounded.
    pub body: String,
    pub creation_date: NaiveDateTime,
    pub last_activity_date: NaiveDateTime,
    pub post_type_id: i32,
    pub score: i32,
    pub view_count: i32,
    pub accepted_answer_id: Option<i32>,
    pub answer_count: Option<i32>,
    pub closed_date: Option<NaiveDateTime>,
    pub comment_count: Option<i32>,
    pub community_owned_date: Option<NaiveDateTime>,
    pub favorite_count: Option<i32>,
    pub last_edit_date: Option<NaiveDateTime>,
    /// Kept for editors whose account was since removed.
    pub last_editor_display_name: Option<String>,
    pub last_editor_user_id: Option<i32>,
    pub owner_user_id: Option<i32>,
    /// The question this answer belongs to.
    pub parent_id: Option<i32>,
    /// Angle-bracket-delimited tag list, questions only.
    pub tags: Option<String>,
    pub title: Option<String>,
}

static FIELDS: &[FieldInfo] = &[
    FieldInfo::new("id", "Id", "id", SqlType::Integer).primary_key(true),
    FieldInfo::new("body", "Body", "body", SqlType::Text),
    FieldInfo::new("creation_date", "CreationDate", "creationdate", SqlType::DateTime),
    FieldInfo::new("last_activity_date", "LastActivityDate", "lastactivitydate", SqlType::DateTime),
    FieldInfo::new("post_type_id", "PostTypeId", "posttypeid", SqlType::Integer)
        .foreign_key("posttypes.id"),
    FieldInfo::new("score", "Score", "score", SqlType::Integer),
    FieldInfo::new("view_count", "ViewCount", "viewcount", SqlType::Integer),
    FieldInfo::new("accepted_answer_id", "AcceptedAnswerId", "acceptedanswerid", SqlType::Integer)
        .nullable(true)
        .foreign_key("posts.id"),
    FieldInfo::new("answer_count", "AnswerCount", "answercount", SqlType::Integer).nullable(true),
    FieldInfo::new("closed_date", "ClosedDate", "closeddate", SqlType::DateTime).nullable(true),
    FieldInfo::new("comment_count", "CommentCount", "commentcount", SqlType::Integer)
        .nullable(true),
    FieldInfo::new(
        "community_owned_date",
        "CommunityOwnedDate",
        "communityowneddate",
        SqlType::DateTime,
    )
    .nullable(true),
    FieldInfo::new("favorite_count", "FavoriteCount", "favoritecount", SqlType::Integer)
        .nullable(true),
    FieldInfo::new("last_edit_date", "LastEditDate", "lasteditdate", SqlType::DateTime)
        .nullable(true),
    FieldInfo::new(
        "last_editor_display_name",
        "LastEditorDisplayName",
        "lasteditordisplayname",
        SqlType::Varchar(40),
    )
    .nullable(true),
    FieldInfo::new("last_editor_user_id", "LastEditorUserId", "lasteditoruserid", SqlType::Integer)
        .nullable(true)
        .foreign_key("users.id"),
    FieldInfo::new("owner_user_id", "OwnerUserId", "owneruserid", SqlType::Integer)
        .nullable(true)
        .foreign_key("users.id"),
    FieldInfo::new("parent_id", "ParentId", "parentid", SqlType::Integer)
        .nullable(true)
        .foreign_key("posts.id"),
    FieldInfo::new("tags", "Tags", "tags", SqlType::Varchar(150)).nullable(true),
    FieldInfo::new("title", "Title", "title", SqlType::Varchar(250)).nullable(true),
];

static POSTS: TableDef = TableDef {
    source_name: "Posts",
    warehouse_name: "posts",
    fields: FIELDS,
    primary_key: "id",
};

impl Post {
    /// Start building a post from the non-nullable fields.
    #[must_use]
    pub fn builder(
        post_type_id: i32,
        body: impl Into<String>,
        creation_date: NaiveDateTime,
        last_activity_date: NaiveDateTime,
        score: i32,
        view_count: i32,
    ) -> PostBuilder {
        PostBuilder {
            post: Post {
                id: None,
                body: body.into(),
                creation_date,
                last_activity_date,
                post_type_id,
                score,
                view_count,
                accepted_answer_id: None,
                answer_count: None,
                closed_date: None,
                comment_count: None,
                community_owned_date: None,
                favorite_count: None,
                last_edit_date: None,
                last_editor_display_name: None,
                last_editor_user_id: None,
                owner_user_id: None,
                parent_id: None,
                tags: None,
                title: None,
            },
        }
    }

    /// Whether this post is a question.
    #[must_use]
    pub fn is_question(&self) -> bool {
        self.post_type_id == post_type::QUESTION
    }

    /// Whether this post is an answer.
    #[must_use]
    pub fn is_answer(&self) -> bool {
        self.post_type_id == post_type::ANSWER
    }
}

/// Builder for [`Post`]; `build` validates the declared constraints and
/// the answer/parent rule.
#[derive(Debug, Clone)]
pub struct PostBuilder {
    post: Post,
}

impl PostBuilder {
    /// Explicit surrogate key (required for warehouse bulk load).
    pub fn id(mut self, id: i32) -> Self {
        self.post.id = Some(id);
        self
    }

    pub fn accepted_answer_id(mut self, id: i32) -> Self {
        self.post.accepted_answer_id = Some(id);
        self
    }

    pub fn answer_count(mut self, count: i32) -> Self {
        self.post.answer_count = Some(count);
        self
    }

    pub fn closed_date(mut self, date: NaiveDateTime) -> Self {
        self.post.closed_date = Some(date);
        self
    }

    pub fn comment_count(mut self, count: i32) -> Self {
        self.post.comment_count = Some(count);
        self
    }

    pub fn community_owned_date(mut self, date: NaiveDateTime) -> Self {
        self.post.community_owned_date = Some(date);
        self
    }

    pub fn favorite_count(mut self, count: i32) -> Self {
        self.post.favorite_count = Some(count);
        self
    }

    pub fn last_edit_date(mut self, date: NaiveDateTime) -> Self {
        self.post.last_edit_date = Some(date);
        self
    }

    pub fn last_editor_display_name(mut self, name: impl Into<String>) -> Self {
        self.post.last_editor_display_name = Some(name.into());
        self
    }

    pub fn last_editor_user_id(mut self, id: i32) -> Self {
        self.post.last_editor_user_id = Some(id);
        self
    }

    pub fn owner_user_id(mut self, id: i32) -> Self {
        self.post.owner_user_id = Some(id);
        self
    }

    pub fn parent_id(mut self, id: i32) -> Self {
        self.post.parent_id = Some(id);
        self
    }

    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.post.tags = Some(tags.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.post.title = Some(title.into());
        self
    }

    /// Validate and return the post row.
    pub fn build(self) -> Result<Post, ValidationError> {
        self.post.validate()?;
        Ok(self.post)
    }
}

impl Model for Post {
    fn table() -> &'static TableDef {
        &POSTS
    }

    fn to_row(&self) -> Row {
        let mut row = Row::with_capacity(FIELDS.len());
        row.insert("id", self.id);
        row.insert("body", self.body.as_str());
        row.insert("creation_date", self.creation_date);
        row.insert("last_activity_date", self.last_activity_date);
        row.insert("post_type_id", self.post_type_id);
        row.insert("score", self.score);
        row.insert("view_count", self.view_count);
        row.insert("accepted_answer_id", self.accepted_answer_id);
        row.insert("answer_count", self.answer_count);
        row.insert("closed_date", self.closed_date);
        row.insert("comment_count", self.comment_count);
        row.insert("community_owned_date", self.community_owned_date);
        row.insert("favorite_count", self.favorite_count);
        row.insert("last_edit_date", self.last_edit_date);
        row.insert("last_editor_display_name", self.last_editor_display_name.as_deref());
        row.insert("last_editor_user_id", self.last_editor_user_id);
        row.insert("owner_user_id", self.owner_user_id);
        row.insert("parent_id", self.parent_id);
        row.insert("tags", self.tags.as_deref());
        row.insert("title", self.title.as_deref());
        row
    }

    fn from_row(row: &Row) -> Result<Self, ValidationError> {
        let r = RowReader::new(Self::table().warehouse_name, row);
        Ok(Self {
            id: r.opt_int("id")?,
            body: r.require_text("body")?,
            creation_date: r.require_datetime("creation_date")?,
            last_activity_date: r.require_datetime("last_activity_date")?,
            post_type_id: r.require_int("post_type_id")?,
            score: r.require_int("score")?,
            view_count: r.require_int("view_count")?,
            accepted_answer_id: r.opt_int("accepted_answer_id")?,
            answer_count: r.opt_int("answer_count")?,
            closed_date: r.opt_datetime("closed_date")?,
            comment_count: r.opt_int("comment_count")?,
            community_owned_date: r.opt_datetime("community_owned_date")?,
            favorite_count: r.opt_int("favorite_count")?,
            last_edit_date: r.opt_datetime("last_edit_date")?,
            last_editor_display_name: r.opt_text("last_editor_display_name")?,
            last_editor_user_id: r.opt_int("last_editor_user_id")?,
            owner_user_id: r.opt_int("owner_user_id")?,
            parent_id: r.opt_int("parent_id")?,
            tags: r.opt_text("tags")?,
            title: r.opt_text("title")?,
        })
    }

    fn primary_key_value(&self) -> Value {
        Value::from(self.id)
    }

    fn check(&self) -> Result<(), ValidationError> {
        if self.is_answer() && self.parent_id.is_none() {
            return Err(ValidationError::domain(
                Self::table().warehouse_name,
                "parent_id",
                "an answer must reference its question",
            ));
        }
        Ok(())
    }
}
