//! User rows.

use chrono::NaiveDateTime;
use stackdw_core::{
    FieldInfo, Model, Row, RowReader, SqlType, TableDef, ValidationError, Value,
};

/// A registered user of the site.
///
/// Reputation and the vote/view counters are non-negative by domain
/// convention; the schema itself does not enforce that, and neither does
/// validation here.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Surrogate key; `None` until the source schema assigns one.
    pub id: Option<i32>,
    pub creation_date: NaiveDateTime,
    pub display_name: String,
    pub down_votes: i32,
    pub last_access_date: NaiveDateTime,
    pub reputation: i32,
    pub up_votes: i32,
    pub views: i32,
    /// Free-text profile; unbounded.
    pub about_me: Option<String>,
    pub age: Option<i32>,
    pub email_hash: Option<String>,
    pub location: Option<String>,
    pub website_url: Option<String>,
    /// Network-wide account id, when the user linked one.
    pub account_id: Option<i32>,
}

static FIELDS: &[FieldInfo] = &[
    FieldInfo::new("id", "Id", "id", SqlType::Integer).primary_key(true),
    FieldInfo::new("creation_date", "CreationDate", "creationdate", SqlType::DateTime),
    FieldInfo::new("display_name", "DisplayName", "displayname", SqlType::Varchar(40)),
    FieldInfo::new("down_votes", "DownVotes", "downvotes", SqlType::Integer),
    FieldInfo::new("last_access_date", "LastAccessDate", "lastaccessdate", SqlType::DateTime),
    FieldInfo::new("reputation", "Reputation", "reputation", SqlType::Integer),
    FieldInfo::new("up_votes", "UpVotes", "upvotes", SqlType::Integer),
    FieldInfo::new("views", "Views", "views", SqlType::Integer),
    FieldInfo::new("about_me", "AboutMe", "aboutme", SqlType::Text).nullable(true),
    FieldInfo::new("age", "Age", "age", SqlType::Integer).nullable(true),
    FieldInfo::new("email_hash", "EmailHash", "emailhash", SqlType::Varchar(40)).nullable(true),
    FieldInfo::new("location", "Location", "location", SqlType::Varchar(100)).nullable(true),
    FieldInfo::new("website_url", "WebsiteUrl", "websiteurl", SqlType::Varchar(200)).nullable(true),
    FieldInfo::new("account_id", "AccountId", "accountid", SqlType::Integer).nullable(true),
];

static USERS: TableDef = TableDef {
    source_name: "Users",
    warehouse_name: "users",
    fields: FIELDS,
    primary_key: "id",
};

impl User {
    /// Start building a user from the non-nullable fields.
    #[must_use]
    pub fn builder(
        display_name: impl Into<String>,
        creation_date: NaiveDateTime,
        last_access_date: NaiveDateTime,
        reputation: i32,
        up_votes: i32,
        down_votes: i32,
        views: i32,
    ) -> UserBuilder {
        UserBuilder {
            user: User {
                id: None,
                creation_date,
                display_name: display_name.into(),
                down_votes,
                last_access_date,
                reputation,
                up_votes,
                views,
                about_me: None,
                age: None,
                email_hash: None,
                location: None,
                website_url: None,
                account_id: None,
            },
        }
    }
}

/// Builder for [`User`]; `build` validates the declared constraints.
#[derive(Debug, Clone)]
pub struct UserBuilder {
    user: User,
}

impl UserBuilder {
    /// Explicit surrogate key (required for warehouse bulk load).
    pub fn id(mut self, id: i32) -> Self {
        self.user.id = Some(id);
        self
    }

    pub fn about_me(mut self, about_me: impl Into<String>) -> Self {
        self.user.about_me = Some(about_me.into());
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.user.age = Some(age);
        self
    }

    pub fn email_hash(mut self, email_hash: impl Into<String>) -> Self {
        self.user.email_hash = Some(email_hash.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.user.location = Some(location.into());
        self
    }

    pub fn website_url(mut self, website_url: impl Into<String>) -> Self {
        self.user.website_url = Some(website_url.into());
        self
    }

    pub fn account_id(mut self, account_id: i32) -> Self {
        self.user.account_id = Some(account_id);
        self
    }

    /// Validate and return the user row.
    pub fn build(self) -> Result<User, ValidationError> {
        self.user.validate()?;
        Ok(self.user)
    }
}

impl Model for User {
    fn table() -> &'static TableDef {
        &USERS
    }

    fn to_row(&self) -> Row {
        let mut row = Row::with_capacity(FIELDS.len());
        row.insert("id", self.id);
        row.insert("creation_date", self.creation_date);
        row.insert("display_name", self.display_name.as_str());
        row.insert("down_votes", self.down_votes);
        row.insert("last_access_date", self.last_access_date);
        row.insert("reputation", self.reputation);
        row.insert("up_votes", self.up_votes);
        row.insert("views", self.views);
        row.insert("about_me", self.about_me.as_deref());
        row.insert("age", self.age);
        row.insert("email_hash", self.email_hash.as_deref());
        row.insert("location", self.location.as_deref());
        row.insert("website_url", self.website_url.as_deref());
        row.insert("account_id", self.account_id);
        row
    }

    fn from_row(row: &Row) -> Result<Self, ValidationError> {
        let r = RowReader::new(Self::table().warehouse_name, row);
        Ok(Self {
            id: r.opt_int("id")?,
            creation_date: r.require_datetime("creation_date")?,
            display_name: r.require_text("display_name")?,
            down_votes: r.require_int("down_votes")?,
            last_access_date: r.require_datetime("last_access_date")?,
            reputation: r.require_int("reputation")?,
            up_votes: r.require_int("up_votes")?,
            views: r.require_int("views")?,
            about_me: r.opt_text("about_me")?,
            age: r.opt_int("age")?,
            email_hash: r.opt_text("email_hash")?,
            location: r.opt_text("location")?,
            website_url: r.opt_text("website_url")?,
            account_id: r.opt_int("account_id")?,
        })
    }

    fn primary_key_value(&self) -> Value {
        Value::from(self.id)
    }
}
