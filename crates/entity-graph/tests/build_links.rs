mod util;
use util::*;

use entity_graph::schema::args::*;
use entity_graph::Builder;
use pretty_assertions::assert_eq;
use std_util::prelude::*;

struct Shop {
    args: MetadataArgs,
    customer: ClassId,
    order: ClassId,
    product: ClassId,
}

fn shop() -> Shop {
    let mut args = MetadataArgs::new();
    let customer = args.table("Customer", None);
    let order = args.table("Order", None);
    let product = args.table("Product", None);
    let orders = RelationArgs::one_to_many(customer, "orders", order);
    let product_orders = RelationArgs::many_to_many(product, "orders", order);

    args.column(id(customer))
        .column(id(order))
        .column(id(product))
        .relation(orders.inverse_side("customer"))
        .relation(
            RelationArgs::many_to_one(order, "customer", customer)
                .inverse_side("orders")
                .not_null()
                .cascade_all(),
        )
        .relation(
            RelationArgs::many_to_many(order, "products", product)
                .owning()
                .inverse_side("orders"),
        )
        .relation(product_orders.inverse_side("products"));

    Shop {
        args,
        customer,
        order,
        product,
    }
}

#[test]
fn relations_link_both_ways() {
    let shop = shop();
    let graph = build(&shop.args);

    let customer = entity(&graph, shop.customer);
    let order = entity(&graph, shop.order);
    let product = entity(&graph, shop.product);

    let orders = customer.relation_by_property_name("orders").unwrap();
    let back = assert_ok!(graph.inverse_relation(orders).ok_or("no inverse"));
    assert_eq!(back.entity, order.id);
    assert_eq!(back.property_name, "customer");
    assert_eq!(back.cascade, Cascade::all());

    let forth = graph.inverse_relation(back).unwrap();
    assert_eq!(forth.entity, customer.id);
    assert_eq!(forth.property_name, "orders");

    let products = order.relation_by_property_name("products").unwrap();
    assert_eq!(graph.related_entity(products).unwrap().id, product.id);
    assert_eq!(
        graph.inverse_relation(products).unwrap().property_name,
        "orders"
    );

    assert_eq!(graph.unresolved_relations().count(), 0);
}

#[test]
fn inverse_relation_requires_a_declared_inverse_side() {
    let mut args = MetadataArgs::new();
    let user = args.table("User", None);
    let post = args.table("Post", None);
    args.column(id(user))
        .column(id(post))
        .relation(RelationArgs::many_to_one(post, "author", user));

    let graph = build(&args);
    let author = &entity(&graph, post).relations[0];

    assert_eq!(author.related_entity, Some(entity(&graph, user).id));
    assert!(graph.inverse_relation(author).is_none());
}

#[test]
fn relation_classification() {
    let shop = shop();
    let graph = build(&shop.args);

    let customer = entity(&graph, shop.customer);
    let order = entity(&graph, shop.order);
    let product = entity(&graph, shop.product);

    assert_eq!(customer.one_to_many_relations().count(), 1);
    assert_eq!(order.many_to_one_relations().count(), 1);
    assert_eq!(order.relations_with_join_columns().count(), 1);
    assert_eq!(order.owner_many_to_many_relations().count(), 1);
    assert_eq!(product.many_to_many_relations().count(), 1);
    assert_eq!(product.owner_many_to_many_relations().count(), 0);
    assert!(order.has_relation_with_property_name("customer"));
    assert!(!order.has_relation_with_property_name("orders"));
}

#[test]
fn junctions_have_no_relations() {
    let shop = shop();
    let graph = build(&shop.args);

    let junction = graph.junction_entities().next().unwrap();
    assert!(junction.relations.is_empty());
    assert!(graph.entity_for(shop.order).unwrap().relations[1]
        .junction_entity
        .is_some());
    assert!(graph
        .unresolved_relations()
        .all(|relation| !graph.entity(relation.entity).is_junction()));
}

#[test]
fn building_twice_yields_the_same_graph() {
    let shop = shop();
    let builder = Builder::new();

    let first = build_with(&builder, &shop.args);
    let second = build_with(&builder, &shop.args);

    assert_eq!(format!("{first:#?}"), format!("{second:#?}"));
    assert_eq!(table_names(&first), table_names(&second));
    assert_unique!(table_names(&first));
    for (a, b) in first.entities().zip(second.entities()) {
        assert_eq!(column_names(a), column_names(b));
        assert_eq!(a.foreign_keys, b.foreign_keys);
    }

    // The snapshot is never modified by a build.
    assert_eq!(shop.args.columns.len(), 3);
    assert_eq!(shop.args.relations.len(), 4);
}

#[test]
fn building_a_subset() {
    let shop = shop();
    let graph = assert_ok!(Builder::new().build(&shop.args, &[shop.customer]));

    assert_eq!(table_names(&graph), ["Customer"]);
    let unresolved: Vec<_> = graph
        .unresolved_relations()
        .map(|relation| relation.property_name.as_str())
        .collect();
    assert_eq!(unresolved, ["orders"]);
    assert!(graph.entity_for(shop.order).is_none());
}
