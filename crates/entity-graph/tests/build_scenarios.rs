mod util;
use util::*;

use entity_graph::schema::args::*;
use pretty_assertions::assert_eq;

#[test]
fn single_table_without_relations() {
    let mut args = MetadataArgs::new();
    let user = args.table("User", None);
    args.column(id(user)).column(string(user, "name", 100));

    let graph = build(&args);

    assert_eq!(graph.len(), 1);
    let user = entity(&graph, user);
    assert_eq!(column_names(user), ["id", "name"]);
    assert!(user.foreign_keys.is_empty());
    assert_eq!(graph.junction_entities().count(), 0);
}

#[test]
fn many_to_one_gets_join_column_and_foreign_key() {
    let mut args = MetadataArgs::new();
    let user = args.table("User", None);
    let profile = args.table("Profile", None);
    args.column(id(user))
        .column(id(profile))
        .relation(RelationArgs::many_to_one(profile, "user", user));

    let graph = build(&args);

    assert_eq!(graph.len(), 2);
    let user = entity(&graph, user);
    let profile = entity(&graph, profile);

    assert_eq!(column_names(profile), ["id", "user"]);
    let join_column = profile.column_by_name("user").unwrap();
    assert_eq!(join_column.ty, ColumnType::Int);
    assert!(join_column.nullable);
    assert!(!join_column.primary);
    assert!(!join_column.generated);

    let [fk] = &profile.foreign_keys[..] else {
        panic!(
            "expected one foreign key; actual={:?}",
            profile.foreign_keys
        );
    };
    assert_eq!(fk.table, profile.id);
    assert_eq!(fk.columns, [join_column.id]);
    assert_eq!(fk.referenced_table, user.id);
    assert_eq!(fk.referenced_columns, [user.primary_column().unwrap().id]);
    assert_eq!(fk.name(&graph), "fk_Profile_user_User_id");
    assert!(user.foreign_keys.is_empty());
}

#[test]
fn owning_many_to_many_gets_junction_table() {
    let mut args = MetadataArgs::new();
    let user = args.table("User", None);
    let tag = args.table("Tag", None);
    args.column(id(user))
        .column(id(tag))
        .relation(RelationArgs::many_to_many(user, "tags", tag).owning());

    let graph = build(&args);

    assert_eq!(table_names(&graph), ["User", "Tag", "User_tags_Tag_id"]);

    let user = entity(&graph, user);
    let tag = entity(&graph, tag);
    let junctions: Vec<_> = graph.junction_entities().collect();
    let [junction] = junctions[..] else {
        panic!(
            "expected one junction entity; tables={:?}",
            table_names(&graph)
        );
    };

    assert_eq!(junction.table.target, None);
    assert!(!junction.table.is_abstract);
    assert_eq!(column_names(junction), ["User_tags", "Tag_id"]);
    assert!(junction.relations.is_empty());
    assert!(junction.indices.is_empty());
    assert!(junction
        .columns
        .iter()
        .all(|column| column.target.is_none()));

    let columns: Vec<_> = junction
        .foreign_keys
        .iter()
        .flat_map(|fk| fk.columns.clone())
        .collect();
    let junction_columns: Vec<_> = junction.columns.iter().map(|column| column.id).collect();
    assert_eq!(columns, junction_columns);

    let user_pk = user.primary_column().unwrap().id;
    let tag_pk = tag.primary_column().unwrap().id;
    let referenced: Vec<_> = junction
        .foreign_keys
        .iter()
        .map(|fk| (fk.referenced_table, fk.referenced_columns.clone()))
        .collect();
    let expected = [(user.id, vec![user_pk]), (tag.id, vec![tag_pk])];
    assert_eq!(referenced, expected);

    let relation = user.relation_by_property_name("tags").unwrap();
    assert_eq!(relation.junction_entity, Some(junction.id));
    assert_eq!(relation.related_entity, Some(tag.id));
    // Many-to-many relations are not backed by a column on either side.
    assert_eq!(column_names(user), ["id"]);
    assert!(user.foreign_keys.is_empty());
}

#[test]
fn abstract_base_columns_are_inherited_once() {
    let mut args = MetadataArgs::new();
    let base = args.abstract_table("Base", None);
    let post = args.table("Post", Some(base));
    args.column(created_at(base))
        .column(id(post))
        .column(ColumnArgs::new(post, "title", ColumnType::String));

    let graph = build(&args);

    assert_eq!(graph.len(), 1);
    let post = entity(&graph, post);
    assert_eq!(column_names(post), ["id", "title", "createdAt"]);
    assert_eq!(post.create_date_column().unwrap().target, Some(base));
}
