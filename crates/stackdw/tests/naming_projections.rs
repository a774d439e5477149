//! The two naming serializations, checked against the exact identifiers
//! the public dump ships with.

use chrono::{NaiveDate, NaiveDateTime};
use stackdw::prelude::*;
use stackdw::{table_by_name, tables};

fn dt(y: i32, mo: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap()
}

#[test]
fn schema_names_are_fixed() {
    assert_eq!(SchemaVariant::Source.schema_name(), "dbo");
    assert_eq!(
        SchemaVariant::Warehouse.schema_name(),
        "dw__stackoverflow2010__dbo"
    );
}

#[test]
fn warehouse_table_names_are_lowercased_source_names() {
    for table in tables() {
        assert_eq!(
            table.table_name(SchemaVariant::Warehouse),
            table.table_name(SchemaVariant::Source).to_lowercase()
        );
    }
}

#[test]
fn warehouse_columns_are_lowercased_except_comment_text() {
    for table in tables() {
        for field in table.fields {
            let expected = if table.warehouse_name == "comments" && field.name == "text" {
                // The dump generator left this one column alone.
                "Text".to_string()
            } else {
                field.source_column.to_lowercase()
            };
            assert_eq!(
                field.warehouse_column, expected,
                "{}.{}",
                table.warehouse_name, field.name
            );
        }
    }
}

#[test]
fn users_warehouse_columns_match_dump() {
    let users = table_by_name("users", SchemaVariant::Warehouse).unwrap();
    let columns: Vec<&str> = users
        .fields
        .iter()
        .map(|f| f.column_name(SchemaVariant::Warehouse))
        .collect();
    assert_eq!(
        columns,
        vec![
            "id",
            "creationdate",
            "displayname",
            "downvotes",
            "lastaccessdate",
            "reputation",
            "upvotes",
            "views",
            "aboutme",
            "age",
            "emailhash",
            "location",
            "websiteurl",
            "accountid",
        ]
    );
}

#[test]
fn posts_source_columns_match_dump() {
    let posts = table_by_name("Posts", SchemaVariant::Source).unwrap();
    let columns: Vec<&str> = posts
        .fields
        .iter()
        .map(|f| f.column_name(SchemaVariant::Source))
        .collect();
    assert_eq!(
        columns,
        vec![
            "Id",
            "Body",
            "CreationDate",
            "LastActivityDate",
            "PostTypeId",
            "Score",
            "ViewCount",
            "AcceptedAnswerId",
            "AnswerCount",
            "ClosedDate",
            "CommentCount",
            "CommunityOwnedDate",
            "FavoriteCount",
            "LastEditDate",
            "LastEditorDisplayName",
            "LastEditorUserId",
            "OwnerUserId",
            "ParentId",
            "Tags",
            "Title",
        ]
    );
}

#[test]
fn every_entity_round_trips_both_projections() {
    let user = User::builder("Marc Gravell", dt(2008, 9, 29), dt(2010, 12, 1), 50_000, 900, 10, 9_000)
        .id(23354)
        .location("Somewhere, UK")
        .build()
        .unwrap();
    let post = Post::builder(stackdw::post_type::QUESTION, "<p>Why?</p>", dt(2010, 6, 1), dt(2010, 6, 2), 5, 120)
        .id(100)
        .title("Why does this happen?")
        .owner_user_id(23354)
        .build()
        .unwrap();
    let comment = Comment::builder(100, "Good question.", dt(2010, 6, 1))
        .id(500)
        .user_id(23354)
        .score(2)
        .build()
        .unwrap();
    let vote = Vote::builder(100, stackdw::vote_type::UP_MOD, dt(2010, 6, 2))
        .id(900)
        .build()
        .unwrap();
    let badge = Badge::builder(23354, "Nice Question", dt(2010, 6, 3), BadgeClass::Bronze, false)
        .id(77)
        .build()
        .unwrap();
    let link = PostLink::new(100, 42, stackdw::link_type::LINKED, dt(2010, 6, 4))
        .unwrap()
        .with_id(3);

    for variant in [SchemaVariant::Source, SchemaVariant::Warehouse] {
        assert_eq!(User::from_projected(&user.to_projected(variant), variant).unwrap(), user);
        assert_eq!(Post::from_projected(&post.to_projected(variant), variant).unwrap(), post);
        assert_eq!(
            Comment::from_projected(&comment.to_projected(variant), variant).unwrap(),
            comment
        );
        assert_eq!(Vote::from_projected(&vote.to_projected(variant), variant).unwrap(), vote);
        assert_eq!(Badge::from_projected(&badge.to_projected(variant), variant).unwrap(), badge);
        assert_eq!(
            PostLink::from_projected(&link.to_projected(variant), variant).unwrap(),
            link
        );
    }
}

#[test]
fn projected_json_round_trips() {
    let comment = Comment::builder(100, "Serialize me.", dt(2010, 8, 8))
        .id(11)
        .score(1)
        .build()
        .unwrap();

    for variant in [SchemaVariant::Source, SchemaVariant::Warehouse] {
        let json = comment.to_projected(variant).to_json();
        let back = Comment::from_json(&json, variant).unwrap();
        assert_eq!(back, comment);
    }
}

#[test]
fn entities_parse_from_hand_written_json() {
    let json = serde_json::json!({
        "Id": 9,
        "CreationDate": "2010-07-04T15:04:05",
        "PostId": 41,
        "Text": "Parsed from dump-shaped JSON.",
        "Score": 3,
        "UserId": null,
    });
    let comment = Comment::from_json(&json, SchemaVariant::Source).unwrap();
    assert_eq!(comment.id, Some(9));
    assert_eq!(comment.post_id, 41);
    assert_eq!(comment.score, Some(3));
    assert!(comment.user_id.is_none());

    // The same payload under warehouse keys, space-separated timestamp.
    let json = serde_json::json!({
        "id": 9,
        "creationdate": "2010-07-04 15:04:05",
        "postid": 41,
        "Text": "Parsed from dump-shaped JSON.",
        "score": 3,
    });
    let warehouse = Comment::from_json(&json, SchemaVariant::Warehouse).unwrap();
    assert_eq!(warehouse, comment);
}

#[test]
fn projected_json_uses_variant_keys() {
    let vote = Vote::builder(10, stackdw::vote_type::FAVORITE, dt(2010, 4, 1))
        .id(1)
        .user_id(7)
        .build()
        .unwrap();

    let source = vote.to_projected(SchemaVariant::Source).to_json();
    assert!(source.get("VoteTypeId").is_some());
    assert!(source.get("votetypeid").is_none());

    let warehouse = vote.to_projected(SchemaVariant::Warehouse).to_json();
    assert!(warehouse.get("votetypeid").is_some());
    assert!(warehouse.get("VoteTypeId").is_none());
}

#[test]
fn null_columns_survive_projection() {
    let comment = Comment::builder(100, "anonymous", dt(2010, 2, 2)).id(4).build().unwrap();
    let row = comment.to_projected(SchemaVariant::Warehouse);
    assert!(row.contains("userid"));
    assert!(row.get("userid").unwrap().is_null());

    let back = Comment::from_projected(&row, SchemaVariant::Warehouse).unwrap();
    assert!(back.user_id.is_none());
}
