//! Entity declarations for the StackOverflow 2010 warehouse snapshot.
//!
//! One logical schema, two serializations: the operational `dbo` schema
//! (PascalCase columns, store-generated ids) and the analytics warehouse
//! `dw__stackoverflow2010__dbo` (lowercase columns, explicit ids at bulk
//! load). Every entity here declares its columns once and projects into
//! either naming via [`Model::to_projected`].
//!
//! # Example
//!
//! ```
//! use stackdw::prelude::*;
//! use chrono::NaiveDate;
//!
//! let when = NaiveDate::from_ymd_opt(2010, 7, 4).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let comment = Comment::builder(41, "Nice answer!", when)
//!     .id(1001)
//!     .user_id(7)
//!     .build()
//!     .unwrap();
//!
//! let row = comment.to_projected(SchemaVariant::Warehouse);
//! assert!(row.contains("creationdate"));
//! ```
//!
//! The crate holds no connection, query, or transaction logic; a storage
//! layer consumes [`registry::tables`] and the row payloads and maps its
//! driver errors into [`stackdw_core::Error`].

pub mod badges;
pub mod comments;
pub mod lookup;
pub mod post_links;
pub mod posts;
pub mod registry;
pub mod users;
pub mod votes;

pub use badges::{Badge, BadgeBuilder};
pub use comments::{Comment, CommentBuilder};
pub use lookup::{BadgeClass, LinkType, PostType, VoteType, link_type, post_type, vote_type};
pub use post_links::PostLink;
pub use posts::{Post, PostBuilder};
pub use registry::{table_by_name, tables};
pub use users::{User, UserBuilder};
pub use votes::{Vote, VoteBuilder};

// Re-export the foundation layer so consumers need a single dependency.
pub use stackdw_core::{
    ConstraintKind, Error, FieldInfo, Model, Result, Row, SchemaVariant, SqlType, TableDef,
    ValidationError, ValidationErrorKind, Value, validate_row,
};

/// Everything a schema consumer typically needs.
pub mod prelude {
    pub use crate::badges::Badge;
    pub use crate::comments::Comment;
    pub use crate::lookup::{BadgeClass, LinkType, PostType, VoteType};
    pub use crate::post_links::PostLink;
    pub use crate::posts::Post;
    pub use crate::registry::{table_by_name, tables};
    pub use crate::users::User;
    pub use crate::votes::Vote;
    pub use stackdw_core::{
        Error, Model, Result, Row, SchemaVariant, TableDef, ValidationError, ValidationErrorKind,
        Value,
    };
}
