use super::{
    ColumnId, ColumnMetadata, CompoundIndexMetadata, ForeignKeyMetadata, IndexMetadata,
    RelationMetadata, TableMetadata,
};

use std::fmt;

/// A fully resolved entity: a table with its columns, relations, indices
/// and foreign keys.
#[derive(Debug, Clone)]
pub struct EntityMetadata {
    /// Position of the entity in the graph
    pub id: EntityId,

    pub table: TableMetadata,

    /// Own columns, then inherited columns, then synthesized join columns
    pub columns: Vec<ColumnMetadata>,

    pub relations: Vec<RelationMetadata>,

    pub indices: Vec<IndexMetadata>,

    pub compound_indices: Vec<CompoundIndexMetadata>,

    pub foreign_keys: Vec<ForeignKeyMetadata>,
}

/// Uniquely identifies an entity within an [`EntityGraph`](super::EntityGraph).
#[derive(PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct EntityId(pub usize);

impl EntityMetadata {
    pub(crate) fn new(id: EntityId, table: TableMetadata) -> Self {
        Self {
            id,
            table,
            columns: vec![],
            relations: vec![],
            indices: vec![],
            compound_indices: vec![],
            foreign_keys: vec![],
        }
    }

    /// Appends a column, assigning its identifier.
    pub(crate) fn push_column(&mut self, mut column: ColumnMetadata) -> ColumnId {
        let id = ColumnId {
            entity: self.id,
            index: self.columns.len(),
        };
        column.id = id;
        self.columns.push(column);
        id
    }

    pub fn column(&self, id: impl Into<ColumnId>) -> &ColumnMetadata {
        let id = id.into();
        assert_eq!(self.id, id.entity);
        &self.columns[id.index]
    }

    /// True for synthesized junction tables.
    pub fn is_junction(&self) -> bool {
        self.table.is_junction()
    }

    /// The first column flagged primary.
    pub fn primary_column(&self) -> Option<&ColumnMetadata> {
        self.primary_columns().next()
    }

    pub fn primary_columns(&self) -> impl Iterator<Item = &ColumnMetadata> + '_ {
        self.columns.iter().filter(|column| column.primary)
    }

    pub fn has_primary_column(&self) -> bool {
        self.primary_column().is_some()
    }

    pub fn create_date_column(&self) -> Option<&ColumnMetadata> {
        self.columns.iter().find(|column| column.is_create_date())
    }

    pub fn update_date_column(&self) -> Option<&ColumnMetadata> {
        self.columns.iter().find(|column| column.is_update_date())
    }

    pub fn version_column(&self) -> Option<&ColumnMetadata> {
        self.columns.iter().find(|column| column.is_version())
    }

    pub fn column_by_property_name(&self, property_name: &str) -> Option<&ColumnMetadata> {
        self.columns
            .iter()
            .find(|column| column.property_name == property_name)
    }

    /// Finds a column by its rendered name.
    pub fn column_by_name(&self, name: &str) -> Option<&ColumnMetadata> {
        self.columns.iter().find(|column| column.name() == name)
    }

    pub fn relation_by_property_name(&self, property_name: &str) -> Option<&RelationMetadata> {
        self.relations
            .iter()
            .find(|relation| relation.property_name == property_name)
    }

    pub fn has_relation_with_property_name(&self, property_name: &str) -> bool {
        self.relation_by_property_name(property_name).is_some()
    }

    /// The join column backing a one-to-one or many-to-one relation.
    pub fn join_column(&self, relation: &RelationMetadata) -> Option<&ColumnMetadata> {
        if !relation.has_join_column() {
            return None;
        }
        self.column_by_name(&relation.name())
    }

    pub fn one_to_one_relations(&self) -> impl Iterator<Item = &RelationMetadata> + '_ {
        self.relations
            .iter()
            .filter(|relation| relation.is_one_to_one())
    }

    pub fn owner_one_to_one_relations(&self) -> impl Iterator<Item = &RelationMetadata> + '_ {
        self.relations
            .iter()
            .filter(|relation| relation.is_owner_one_to_one())
    }

    pub fn many_to_one_relations(&self) -> impl Iterator<Item = &RelationMetadata> + '_ {
        self.relations
            .iter()
            .filter(|relation| relation.is_many_to_one())
    }

    pub fn one_to_many_relations(&self) -> impl Iterator<Item = &RelationMetadata> + '_ {
        self.relations
            .iter()
            .filter(|relation| relation.is_one_to_many())
    }

    pub fn many_to_many_relations(&self) -> impl Iterator<Item = &RelationMetadata> + '_ {
        self.relations
            .iter()
            .filter(|relation| relation.is_many_to_many())
    }

    pub fn owner_many_to_many_relations(&self) -> impl Iterator<Item = &RelationMetadata> + '_ {
        self.relations
            .iter()
            .filter(|relation| relation.is_owner_many_to_many())
    }

    /// Owning one-to-one and many-to-one relations.
    pub fn relations_with_join_columns(&self) -> impl Iterator<Item = &RelationMetadata> + '_ {
        self.relations
            .iter()
            .filter(|relation| relation.has_join_column())
    }

    /// Column name an index on `property_name` covers: the property's column,
    /// or the join column of a relation with that property name.
    pub(crate) fn column_name_for_property(&self, property_name: &str) -> String {
        if let Some(column) = self.column_by_property_name(property_name) {
            return column.name();
        }

        match self.relation_by_property_name(property_name) {
            Some(relation) if relation.has_join_column() => relation.name(),
            _ => property_name.to_string(),
        }
    }

    /// True if `property_name` maps to a column, directly or through a join
    /// column.
    pub(crate) fn has_column_for_property(&self, property_name: &str) -> bool {
        self.column_by_property_name(property_name).is_some()
            || self
                .relation_by_property_name(property_name)
                .and_then(|relation| self.join_column(relation))
                .is_some()
    }
}

impl EntityId {
    pub(crate) const fn placeholder() -> Self {
        Self(usize::MAX)
    }
}

impl From<&EntityMetadata> for EntityId {
    fn from(value: &EntityMetadata) -> Self {
        value.id
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "EntityId({})", self.0)
    }
}
