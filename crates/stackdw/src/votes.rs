//! Vote rows.

use chrono::NaiveDateTime;
use stackdw_core::{
    FieldInfo, Model, Row, RowReader, SqlType, TableDef, ValidationError, Value,
};

use crate::lookup::vote_type;

/// A vote cast on a post.
///
/// `user_id` is recorded only for vote types where the site retains the
/// voter (favorites, bounties); regular up/down votes are anonymous in the
/// dump. `bounty_amount` belongs to the bounty vote types, but nothing in
/// the schema forbids it elsewhere, so validation accepts it and flags it.
#[derive(Debug, Clone, PartialEq)]
pub struct Vote {
    /// Surrogate key; `None` until the source schema assigns one.
    pub id: Option<i32>,
    pub post_id: i32,
    pub vote_type_id: i32,
    pub creation_date: NaiveDateTime,
    pub user_id: Option<i32>,
    pub bounty_amount: Option<i32>,
}

static FIELDS: &[FieldInfo] = &[
    FieldInfo::new("id", "Id", "id", SqlType::Integer).primary_key(true),
    FieldInfo::new("post_id", "PostId", "postid", SqlType::Integer).foreign_key("posts.id"),
    FieldInfo::new("vote_type_id", "VoteTypeId", "votetypeid", SqlType::Integer)
        .foreign_key("votetypes.id"),
    FieldInfo::new("creation_date", "CreationDate", "creationdate", SqlType::DateTime),
    FieldInfo::new("user_id", "UserId", "userid", SqlType::Integer)
        .nullable(true)
        .foreign_key("users.id"),
    FieldInfo::new("bounty_amount", "BountyAmount", "bountyamount", SqlType::Integer)
        .nullable(true),
];

static VOTES: TableDef = TableDef {
    source_name: "Votes",
    warehouse_name: "votes",
    fields: FIELDS,
    primary_key: "id",
};

impl Vote {
    /// Start building a vote from the non-nullable fields.
    #[must_use]
    pub fn builder(post_id: i32, vote_type_id: i32, creation_date: NaiveDateTime) -> VoteBuilder {
        VoteBuilder {
            vote: Vote {
                id: None,
                post_id,
                vote_type_id,
                creation_date,
                user_id: None,
                bounty_amount: None,
            },
        }
    }
}

/// Builder for [`Vote`]; `build` validates the declared constraints.
#[derive(Debug, Clone)]
pub struct VoteBuilder {
    vote: Vote,
}

impl VoteBuilder {
    /// Explicit surrogate key (required for warehouse bulk load).
    pub fn id(mut self, id: i32) -> Self {
        self.vote.id = Some(id);
        self
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.vote.user_id = Some(user_id);
        self
    }

    pub fn bounty_amount(mut self, amount: i32) -> Self {
        self.vote.bounty_amount = Some(amount);
        self
    }

    /// Validate and return the vote row.
    pub fn build(self) -> Result<Vote, ValidationError> {
        self.vote.validate()?;
        Ok(self.vote)
    }
}

impl Model for Vote {
    fn table() -> &'static TableDef {
        &VOTES
    }

    fn to_row(&self) -> Row {
        let mut row = Row::with_capacity(FIELDS.len());
        row.insert("id", self.id);
        row.insert("post_id", self.post_id);
        row.insert("vote_type_id", self.vote_type_id);
        row.insert("creation_date", self.creation_date);
        row.insert("user_id", self.user_id);
        row.insert("bounty_amount", self.bounty_amount);
        row
    }

    fn from_row(row: &Row) -> Result<Self, ValidationError> {
        let r = RowReader::new(Self::table().warehouse_name, row);
        Ok(Self {
            id: r.opt_int("id")?,
            post_id: r.require_int("post_id")?,
            vote_type_id: r.require_int("vote_type_id")?,
            creation_date: r.require_datetime("creation_date")?,
            user_id: r.opt_int("user_id")?,
            bounty_amount: r.opt_int("bounty_amount")?,
        })
    }

    fn primary_key_value(&self) -> Value {
        Value::from(self.id)
    }

    fn check(&self) -> Result<(), ValidationError> {
        // Accepted by the schema; flagged for data-quality tooling.
        if self.bounty_amount.is_some() && !vote_type::is_bounty(self.vote_type_id) {
            tracing::warn!(
                post_id = self.post_id,
                vote_type_id = self.vote_type_id,
                "bounty amount on a non-bounty vote type"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stackdw_core::ValidationErrorKind;
    use stackdw_core::validate_row;

    fn dt() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2010, 5, 20)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_anonymous_upvote() {
        let vote = Vote::builder(10, vote_type::UP_MOD, dt()).build().unwrap();
        assert!(vote.user_id.is_none());
        assert!(vote.bounty_amount.is_none());
    }

    #[test]
    fn test_bounty_vote() {
        let vote = Vote::builder(10, vote_type::BOUNTY_START, dt())
            .user_id(7)
            .bounty_amount(100)
            .build()
            .unwrap();
        assert_eq!(vote.bounty_amount, Some(100));
    }

    #[test]
    fn test_bounty_amount_on_non_bounty_type_is_accepted() {
        // No schema constraint ties BountyAmount to the bounty vote types;
        // such a row is unusual but representable.
        let vote = Vote::builder(10, vote_type::UP_MOD, dt())
            .bounty_amount(50)
            .build()
            .unwrap();
        assert_eq!(vote.bounty_amount, Some(50));
    }

    #[test]
    fn test_null_post_id_rejected_at_row_level() {
        let mut row = Vote::builder(10, vote_type::UP_MOD, dt())
            .build()
            .unwrap()
            .to_row();
        row.insert("post_id", Value::Null);
        let err = validate_row(Vote::table(), &row).unwrap_err();
        assert_eq!(err.field, "post_id");
        assert_eq!(err.kind, ValidationErrorKind::MissingRequired);
    }
}
