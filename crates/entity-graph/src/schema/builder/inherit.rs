use super::BuildGraph;
use crate::schema::{
    args::{
        property, ClassId, ColumnArgs, CompoundIndexArgs, IndexArgs, MetadataArgs, Property,
        RelationArgs, TableArgs,
    },
    metadata::{
        ColumnMetadata, CompoundIndexMetadata, EntityId, EntityMetadata, IndexMetadata,
        RelationMetadata, TableMetadata,
    },
};

use tracing::trace;

/// The declarations an entity ends up with once inherited members are
/// folded in. Every list is an owned copy; the snapshot is never touched.
#[derive(Debug, Default)]
pub(super) struct Members {
    pub(super) columns: Vec<ColumnArgs>,
    pub(super) relations: Vec<RelationArgs>,
    pub(super) indices: Vec<IndexArgs>,
    pub(super) compound_indices: Vec<CompoundIndexArgs>,
}

impl Members {
    /// Own declarations of `target`, followed by members inherited from each
    /// ancestor listed in `abstract_targets`, nearest ancestor first.
    pub(super) fn resolve(
        args: &MetadataArgs,
        target: ClassId,
        abstract_targets: &[ClassId],
    ) -> Self {
        let mut members = Self {
            columns: args.columns_for(target).cloned().collect(),
            relations: args.relations_for(target).cloned().collect(),
            indices: args.indices_for(target).cloned().collect(),
            compound_indices: args.compound_indices_for(target).cloned().collect(),
        };

        for ancestor in args.ancestors(target) {
            if !abstract_targets.contains(&ancestor) {
                continue;
            }

            members.inherit(args, ancestor);
        }

        members
    }

    fn inherit(&mut self, args: &MetadataArgs, ancestor: ClassId) {
        merge(&mut self.columns, args.columns_for(ancestor));
        merge(&mut self.relations, args.relations_for(ancestor));
        merge(&mut self.indices, args.indices_for(ancestor));

        // Compound indices span several properties and are never shadowed.
        self.compound_indices
            .extend(args.compound_indices_for(ancestor).cloned());

        trace!(
            ancestor = %args.class_name(ancestor),
            columns = self.columns.len(),
            relations = self.relations.len(),
            "merged abstract table"
        );
    }
}

/// Appends the inherited items whose property is not already declared.
fn merge<'a, T>(own: &mut Vec<T>, inherited: impl Iterator<Item = &'a T>)
where
    T: Property + Clone + 'a,
{
    let inherited: Vec<_> = inherited
        .filter(|item| {
            !property::has_property(own.as_slice(), item.property_name())
        })
        .cloned()
        .collect();
    own.extend(inherited);
}

impl BuildGraph<'_> {
    pub(super) fn build_entity(&mut self, table: &TableArgs, abstract_targets: &[ClassId]) {
        let id = EntityId(self.entities.len());
        let members = Members::resolve(self.args, table.target, abstract_targets);

        let mut entity = EntityMetadata::new(
            id,
            TableMetadata::declared(
                table.target,
                self.args.class_name(table.target),
                table.name.clone(),
                self.naming.clone(),
            ),
        );

        for column in &members.columns {
            entity.push_column(ColumnMetadata::from_args(column, self.naming.clone()));
        }

        entity.relations = members
            .relations
            .iter()
            .map(|relation| {
                RelationMetadata::from_args(id, relation, self.naming.clone())
            })
            .collect();

        entity.indices = members
            .indices
            .iter()
            .map(|index| IndexMetadata::from_args(index, self.naming.clone()))
            .collect();

        entity.compound_indices = members
            .compound_indices
            .iter()
            .map(|index| {
                CompoundIndexMetadata::from_args(index, self.naming.clone())
            })
            .collect();

        // A class declared as a table twice keeps its first entity.
        self.lookup.entry(table.target).or_insert(id);
        self.entities.push(entity);
    }
}
