//! Registry of every table in the schema, in load-friendly order.

use stackdw_core::{Model, SchemaVariant, TableDef};

use crate::badges::Badge;
use crate::comments::Comment;
use crate::lookup::{LinkType, PostType, VoteType};
use crate::post_links::PostLink;
use crate::posts::Post;
use crate::users::User;
use crate::votes::Vote;

/// All nine table definitions, lookup tables first so a loader that
/// creates and fills tables in this order never references a missing one.
#[must_use]
pub fn tables() -> [&'static TableDef; 9] {
    [
        PostType::table(),
        LinkType::table(),
        VoteType::table(),
        User::table(),
        Post::table(),
        Comment::table(),
        Vote::table(),
        Badge::table(),
        PostLink::table(),
    ]
}

/// Look up a table by its name under the given naming variant.
#[must_use]
pub fn table_by_name(name: &str, variant: SchemaVariant) -> Option<&'static TableDef> {
    tables().into_iter().find(|t| t.table_name(variant) == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_tables() {
        assert_eq!(tables().len(), 9);
    }

    #[test]
    fn test_lookup_tables_come_first() {
        let names: Vec<&str> = tables()
            .iter()
            .map(|t| t.table_name(SchemaVariant::Warehouse))
            .collect();
        assert_eq!(
            names,
            vec![
                "posttypes",
                "linktypes",
                "votetypes",
                "users",
                "posts",
                "comments",
                "votes",
                "badges",
                "postlinks",
            ]
        );
    }

    #[test]
    fn test_table_by_name_both_variants() {
        let posts = table_by_name("posts", SchemaVariant::Warehouse).unwrap();
        assert_eq!(posts.source_name, "Posts");

        let posts = table_by_name("Posts", SchemaVariant::Source).unwrap();
        assert_eq!(posts.warehouse_name, "posts");

        assert!(table_by_name("Posts", SchemaVariant::Warehouse).is_none());
        assert!(table_by_name("missing", SchemaVariant::Warehouse).is_none());
    }

    #[test]
    fn test_every_foreign_key_resolves() {
        for table in tables() {
            for field in table.fields {
                let Some(reference) = field.foreign_key else {
                    continue;
                };
                let (target_table, target_field) =
                    reference.split_once('.').expect("reference is table.field");
                let target = table_by_name(target_table, SchemaVariant::Warehouse)
                    .unwrap_or_else(|| panic!("unknown table in {reference}"));
                assert!(
                    target.field(target_field).is_some(),
                    "unknown field in {reference}"
                );
            }
        }
    }

    #[test]
    fn test_every_table_has_integer_surrogate_key() {
        for table in tables() {
            let pk = table.primary_key_field().expect("primary key declared");
            assert!(pk.primary_key);
            assert_eq!(pk.sql_type, stackdw_core::SqlType::Integer);
            assert_eq!(pk.warehouse_column, "id");
            assert_eq!(pk.source_column, "Id");
        }
    }
}
