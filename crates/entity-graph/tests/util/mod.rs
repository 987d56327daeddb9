#![allow(dead_code)]

use entity_graph::schema::args::{ClassId, ColumnArgs, ColumnMode, ColumnType, MetadataArgs};
use entity_graph::schema::metadata::EntityMetadata;
use entity_graph::{Builder, EntityGraph, Result};
use std_util::assert_ok;
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn try_build(args: &MetadataArgs) -> Result<EntityGraph> {
    init_tracing();
    Builder::new().build_all(args)
}

pub fn build(args: &MetadataArgs) -> EntityGraph {
    assert_ok!(try_build(args))
}

pub fn build_with(builder: &Builder, args: &MetadataArgs) -> EntityGraph {
    init_tracing();
    assert_ok!(builder.build_all(args))
}

/// A generated integer primary column named `id`.
pub fn id(target: ClassId) -> ColumnArgs {
    ColumnArgs::new(target, "id", ColumnType::Int)
        .primary()
        .generated()
}

/// A string column limited to `length` characters.
pub fn string(target: ClassId, property_name: &str, length: u32) -> ColumnArgs {
    ColumnArgs::new(target, property_name, ColumnType::String).length(length)
}

/// A `createdAt` column filled on insert.
pub fn created_at(target: ClassId) -> ColumnArgs {
    ColumnArgs::new(target, "createdAt", ColumnType::DateTime).mode(ColumnMode::CreateDate)
}

pub fn column_names(entity: &EntityMetadata) -> Vec<String> {
    entity.columns.iter().map(|column| column.name()).collect()
}

pub fn table_names(graph: &EntityGraph) -> Vec<String> {
    graph.entities().map(|entity| entity.table.name()).collect()
}

#[track_caller]
pub fn entity(graph: &EntityGraph, class: ClassId) -> &EntityMetadata {
    match graph.entity_for(class) {
        Some(entity) => entity,
        None => panic!("no entity for {class:?}; tables={:?}", table_names(graph)),
    }
}
