mod foreign_key;
mod inherit;
mod junction;
mod link;

use super::{
    args::{ClassId, MetadataArgs},
    metadata::{ColumnMetadata, EntityGraph, EntityId, EntityMetadata, RelationMetadata},
    naming::{DefaultNamingStrategy, NamingStrategy, TablePrefix},
    Result,
};
use crate::Error;

use indexmap::IndexMap;
use std::sync::Arc;
use tracing::debug;

/// Builds an [`EntityGraph`] from a [`MetadataArgs`] snapshot.
///
/// Each call produces a fresh graph. The snapshot is only read, so building
/// twice from the same snapshot yields two identical graphs.
#[derive(Debug, Clone)]
pub struct Builder {
    /// Renders table, column, relation, index and foreign key names
    naming: Arc<dyn NamingStrategy>,

    /// If set, prefix all table names with this string
    table_name_prefix: Option<String>,
}

/// Used to track state during the build process
struct BuildGraph<'a> {
    args: &'a MetadataArgs,

    /// Strategy attached to every node produced by this build
    naming: Arc<dyn NamingStrategy>,

    /// Entities as they are built
    entities: Vec<EntityMetadata>,

    /// Maps mapped classes to the entity built for them
    lookup: IndexMap<ClassId, EntityId>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            naming: Arc::new(DefaultNamingStrategy),
            table_name_prefix: None,
        }
    }

    pub fn naming_strategy(&mut self, naming: impl NamingStrategy + 'static) -> &mut Self {
        self.naming = Arc::new(naming);
        self
    }

    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    /// Builds every table registered in `args`.
    pub fn build_all(&self, args: &MetadataArgs) -> Result<EntityGraph> {
        self.build(args, &args.table_targets())
    }

    /// Builds the tables declared for `targets`.
    ///
    /// Only abstract tables whose class is in `targets` are inherited from.
    /// Relations pointing outside `targets` fail the build when they need a
    /// foreign key or junction table, and are otherwise left unlinked.
    pub fn build(&self, args: &MetadataArgs, targets: &[ClassId]) -> Result<EntityGraph> {
        let naming: Arc<dyn NamingStrategy> = match &self.table_name_prefix {
            Some(prefix) => Arc::new(TablePrefix::new(prefix, self.naming.clone())),
            None => self.naming.clone(),
        };

        let mut builder = BuildGraph {
            args,
            naming,
            entities: vec![],
            lookup: IndexMap::new(),
        };

        let abstract_targets: Vec<_> = args
            .abstract_tables_for(targets)
            .map(|table| table.target)
            .collect();

        for table in args.tables_for(targets) {
            builder.build_entity(table, &abstract_targets);
        }

        debug!(
            entities = builder.entities.len(),
            abstract_tables = abstract_targets.len(),
            "assembled declared entities"
        );

        builder.build_foreign_keys()?;
        builder.build_junction_tables()?;
        builder.link_relations();

        let graph = EntityGraph {
            entities: builder.entities,
            lookup: builder.lookup,
        };

        // Verify the graph structure
        graph.verify()?;

        Ok(graph)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildGraph<'_> {
    /// Finds the entity an owning relation points at.
    fn resolve_inverse(&self, relation: &RelationMetadata) -> Result<EntityId> {
        match self.lookup.get(&relation.ty) {
            Some(id) => Ok(*id),
            None => Err(Error::unresolved_relation(
                self.class_name(relation.entity),
                &relation.property_name,
                self.args.class_name(relation.ty),
            )),
        }
    }

    /// The single primary column of `entity`, which `relation` references.
    fn primary_column(
        &self,
        entity: EntityId,
        relation: &RelationMetadata,
    ) -> Result<&ColumnMetadata> {
        let entity = &self.entities[entity.0];
        let mut primary_columns = entity.primary_columns();

        match (primary_columns.next(), primary_columns.count()) {
            (Some(column), 0) => Ok(column),
            (None, _) => Err(Error::missing_primary_key(
                self.class_name(entity.id),
                self.relation_path(relation),
            )),
            (Some(_), rest) => Err(Error::ambiguous_primary_key(
                self.class_name(entity.id),
                self.relation_path(relation),
                rest + 1,
            )),
        }
    }

    fn class_name(&self, entity: EntityId) -> String {
        let table = &self.entities[entity.0].table;
        match table.target {
            Some(target) => self.args.class_name(target),
            None => table.name(),
        }
    }

    /// `Class::property`, naming the entity the relation was resolved onto.
    fn relation_path(&self, relation: &RelationMetadata) -> String {
        format!(
            "{}::{}",
            self.class_name(relation.entity),
            relation.property_name
        )
    }
}
