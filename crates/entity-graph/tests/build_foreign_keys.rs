mod util;
use util::*;

use entity_graph::schema::args::*;
use pretty_assertions::assert_eq;

fn user_and_profile() -> (MetadataArgs, ClassId, ClassId) {
    let mut args = MetadataArgs::new();
    let user = args.table("User", None);
    let profile = args.table("Profile", None);
    args.column(id(user)).column(id(profile));
    (args, user, profile)
}

#[test]
fn declared_column_is_reused_as_join_column() {
    let (mut args, user, profile) = user_and_profile();
    let owner = ColumnArgs::new(profile, "user", ColumnType::Int).comment("owner");

    args.column(owner)
        .relation(RelationArgs::many_to_one(profile, "user", user));

    let graph = build(&args);
    let profile = entity(&graph, profile);

    assert_eq!(column_names(profile), ["id", "user"]);
    let declared = profile.column_by_name("user").unwrap();
    assert_eq!(declared.comment.as_deref(), Some("owner"));
    assert!(!declared.nullable);

    let [fk] = &profile.foreign_keys[..] else {
        panic!(
            "expected one foreign key; actual={:?}",
            profile.foreign_keys
        );
    };
    assert_eq!(fk.columns, [declared.id]);
}

#[test]
fn self_reference() {
    let mut args = MetadataArgs::new();
    let category = args.table("Category", None);
    let parent = RelationArgs::many_to_one(category, "parent", category);
    let children = RelationArgs::one_to_many(category, "children", category);

    args.column(id(category))
        .relation(parent.inverse_side("children"))
        .relation(children.inverse_side("parent"));

    let graph = build(&args);
    let category = entity(&graph, category);

    assert_eq!(column_names(category), ["id", "parent"]);

    let [fk] = &category.foreign_keys[..] else {
        panic!(
            "expected one foreign key; actual={:?}",
            category.foreign_keys
        );
    };
    assert_eq!(fk.table, category.id);
    assert_eq!(fk.referenced_table, category.id);
    assert_eq!(fk.name(&graph), "fk_Category_parent_Category_id");

    let children = category.relation_by_property_name("children").unwrap();
    assert_eq!(children.related_entity, Some(category.id));
    assert!(category.join_column(children).is_none());
}

#[test]
fn join_column_mirrors_referenced_primary_key() {
    let mut args = MetadataArgs::new();
    let account = args.table("Account", None);
    let invoice = args.table("Invoice", None);
    let ledger = args.table("Ledger", None);
    let number = ColumnArgs::new(invoice, "number", ColumnType::Decimal);

    args.column(string(account, "uuid", 36).primary())
        .column(number.precision(12, 0).primary())
        .column(id(ledger))
        .relation(RelationArgs::many_to_one(ledger, "account", account))
        .relation(RelationArgs::many_to_one(ledger, "invoice", invoice));

    let graph = build(&args);
    let ledger = entity(&graph, ledger);

    let account = ledger.column_by_name("account").unwrap();
    assert_eq!(account.ty, ColumnType::String);
    assert_eq!(account.length, Some(36));
    assert!(!account.primary);

    let invoice = ledger.column_by_name("invoice").unwrap();
    assert_eq!(invoice.ty, ColumnType::Decimal);
    assert_eq!((invoice.precision, invoice.scale), (Some(12), Some(0)));

    let names: Vec<_> = ledger
        .foreign_keys
        .iter()
        .map(|fk| fk.name(&graph))
        .collect();
    assert_eq!(
        names,
        [
            "fk_Ledger_account_Account_uuid",
            "fk_Ledger_invoice_Invoice_number",
        ]
    );
}

#[test]
fn relation_options_carry_over() {
    let (mut args, user, profile) = user_and_profile();
    args.relation(
        RelationArgs::many_to_one(profile, "user", user)
            .not_null()
            .old_column_name("owner_id")
            .on_delete(OnDelete::Cascade),
    );

    let graph = build(&args);
    let profile = entity(&graph, profile);
    let relation = profile.relation_by_property_name("user").unwrap();
    let column = profile.join_column(relation).unwrap();

    assert!(!column.nullable);
    assert_eq!(column.old_column_name.as_deref(), Some("owner_id"));
    assert_eq!(profile.foreign_keys[0].on_delete, Some(OnDelete::Cascade));
}

#[test]
fn on_delete_defaults_to_unset() {
    let (mut args, user, profile) = user_and_profile();
    args.relation(RelationArgs::many_to_one(profile, "user", user));

    let graph = build(&args);
    let profile = entity(&graph, profile);

    assert_eq!(profile.foreign_keys[0].on_delete, None);
    assert!(profile.column_by_name("user").unwrap().nullable);
}

#[test]
fn only_the_owning_one_to_one_side_gets_a_foreign_key() {
    let (mut args, user, profile) = user_and_profile();
    let owner = RelationArgs::one_to_one(profile, "user", user);
    let inverse = RelationArgs::one_to_one(user, "profile", profile);

    args.relation(owner.owning().inverse_side("profile"))
        .relation(inverse.inverse_side("user"));

    let graph = build(&args);
    let user = entity(&graph, user);
    let profile = entity(&graph, profile);

    assert_eq!(column_names(user), ["id"]);
    assert!(user.foreign_keys.is_empty());
    assert_eq!(column_names(profile), ["id", "user"]);
    assert_eq!(profile.foreign_keys.len(), 1);
    assert_eq!(profile.owner_one_to_one_relations().count(), 1);
    assert_eq!(user.owner_one_to_one_relations().count(), 0);
}

#[test]
fn one_to_many_never_owns_a_join_column() {
    let (mut args, user, profile) = user_and_profile();
    // Marking a one-to-many side as owning has no effect.
    let profiles = RelationArgs::one_to_many(user, "profiles", profile);
    args.relation(profiles.owning());

    let graph = build(&args);
    let user = entity(&graph, user);

    let relation = user.relation_by_property_name("profiles").unwrap();
    assert!(!relation.is_owning);
    assert_eq!(column_names(user), ["id"]);
    assert!(user.foreign_keys.is_empty());
}

#[test]
fn every_foreign_key_lines_up() {
    let (mut args, user, profile) = user_and_profile();
    args.relation(RelationArgs::many_to_one(profile, "author", user))
        .relation(RelationArgs::many_to_one(profile, "editor", user));

    let graph = build(&args);

    for entity in graph.entities() {
        for fk in &entity.foreign_keys {
            assert_eq!(fk.entity(&graph).id, entity.id);
            let columns: Vec<_> = fk.columns(&graph).map(|column| column.ty).collect();
            let referenced: Vec<_> = fk
                .referenced_columns(&graph)
                .map(|column| column.ty)
                .collect();
            assert_eq!(columns, referenced);
            assert!(fk.referenced_columns(&graph).all(|column| column.primary));
        }
    }
}
