use super::{args::ClassId, ColumnId, ColumnMetadata, EntityId, EntityMetadata, RelationMetadata};

use indexmap::IndexMap;

/// The resolved schema: one entity per declared table followed by one
/// entity per synthesized junction table.
#[derive(Debug, Default, Clone)]
pub struct EntityGraph {
    pub entities: Vec<EntityMetadata>,

    /// Maps mapped classes to their entity
    pub(crate) lookup: IndexMap<ClassId, EntityId>,
}

impl EntityGraph {
    pub fn entities(&self) -> impl ExactSizeIterator<Item = &EntityMetadata> + '_ {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Get an entity by ID
    pub fn entity(&self, id: impl Into<EntityId>) -> &EntityMetadata {
        self.entities.get(id.into().0).expect("invalid entity ID")
    }

    /// The entity mapping `class`, if the class was part of the build set.
    pub fn entity_for(&self, class: ClassId) -> Option<&EntityMetadata> {
        self.lookup.get(&class).map(|id| self.entity(*id))
    }

    /// Finds an entity by its rendered table name.
    pub fn entity_by_table_name(&self, name: &str) -> Option<&EntityMetadata> {
        self.entities
            .iter()
            .find(|entity| entity.table.name() == name)
    }

    pub fn column(&self, id: impl Into<ColumnId>) -> &ColumnMetadata {
        let id = id.into();
        self.entity(id.entity)
            .columns
            .get(id.index)
            .expect("invalid column ID")
    }

    /// Entities declared by mapped classes, in declaration order.
    pub fn declared_entities(&self) -> impl Iterator<Item = &EntityMetadata> + '_ {
        self.entities.iter().filter(|entity| !entity.is_junction())
    }

    /// Synthesized junction entities, in synthesis order.
    pub fn junction_entities(&self) -> impl Iterator<Item = &EntityMetadata> + '_ {
        self.entities.iter().filter(|entity| entity.is_junction())
    }

    pub fn related_entity(&self, relation: &RelationMetadata) -> Option<&EntityMetadata> {
        relation.related_entity.map(|id| self.entity(id))
    }

    pub fn junction_entity(&self, relation: &RelationMetadata) -> Option<&EntityMetadata> {
        relation.junction_entity.map(|id| self.entity(id))
    }

    /// The relation on the related entity named by `inverse_side_property`.
    pub fn inverse_relation(&self, relation: &RelationMetadata) -> Option<&RelationMetadata> {
        let property_name = relation.inverse_side_property.as_deref()?;
        self.related_entity(relation)?
            .relation_by_property_name(property_name)
    }

    /// Relations whose target class has no entity in this graph.
    pub fn unresolved_relations(&self) -> impl Iterator<Item = &RelationMetadata> + '_ {
        self.entities
            .iter()
            .flat_map(|entity| &entity.relations)
            .filter(|relation| relation.related_entity.is_none())
    }
}
