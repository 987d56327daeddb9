//! Raw, per-class declarations.
//!
//! A registration layer (derive macros, a builder DSL, ...) records every
//! declaration it sees into one flat [`MetadataArgs`] snapshot. Nothing here
//! is resolved: inherited members, foreign keys and junction tables are only
//! produced by [`Builder`](super::Builder).

mod class;
pub use class::{ClassArgs, ClassId};

mod column;
pub use column::{ColumnArgs, ColumnMode, ColumnType};

mod index;
pub use index::{CompoundIndexArgs, IndexArgs};

pub(crate) mod property;
pub use property::Property;

mod relation;
pub use relation::{Cascade, OnDelete, RelationArgs, RelationType};

mod table;
pub use table::TableArgs;

use indexmap::{IndexMap, IndexSet};

/// An immutable snapshot of everything registered for a set of classes.
#[derive(Debug, Default, Clone)]
pub struct MetadataArgs {
    /// Class registry, including each class's structural parent.
    pub classes: IndexMap<ClassId, ClassArgs>,

    /// Concrete table declarations, in registration order.
    pub tables: Vec<TableArgs>,

    /// Abstract table declarations. These never become entities; their
    /// members are inherited by concrete tables extending them.
    pub abstract_tables: Vec<TableArgs>,

    pub columns: Vec<ColumnArgs>,

    pub relations: Vec<RelationArgs>,

    pub indices: Vec<IndexArgs>,

    pub compound_indices: Vec<CompoundIndexArgs>,
}

impl MetadataArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a class and returns its identifier.
    pub fn register_class(&mut self, name: &str, extends: Option<ClassId>) -> ClassId {
        let id = ClassId(self.classes.len());
        self.classes.insert(
            id,
            ClassArgs {
                id,
                name: name.to_string(),
                extends,
            },
        );
        id
    }

    /// Registers a class and declares a concrete table for it.
    pub fn table(&mut self, name: &str, extends: Option<ClassId>) -> ClassId {
        let id = self.register_class(name, extends);
        self.tables.push(TableArgs::new(id));
        id
    }

    /// Registers a class and declares an abstract table for it.
    pub fn abstract_table(&mut self, name: &str, extends: Option<ClassId>) -> ClassId {
        let id = self.register_class(name, extends);
        self.abstract_tables.push(TableArgs::new(id));
        id
    }

    pub fn column(&mut self, column: ColumnArgs) -> &mut Self {
        self.columns.push(column);
        self
    }

    pub fn relation(&mut self, relation: RelationArgs) -> &mut Self {
        self.relations.push(relation);
        self
    }

    pub fn index(&mut self, index: IndexArgs) -> &mut Self {
        self.indices.push(index);
        self
    }

    pub fn compound_index(&mut self, index: CompoundIndexArgs) -> &mut Self {
        self.compound_indices.push(index);
        self
    }

    pub fn class(&self, id: ClassId) -> Option<&ClassArgs> {
        self.classes.get(&id)
    }

    /// Name used for `id` in error messages and logs.
    pub fn class_name(&self, id: ClassId) -> String {
        match self.class(id) {
            Some(class) => class.name.clone(),
            None => format!("{id:?}"),
        }
    }

    /// Iterates the ancestors of `id`, nearest first.
    ///
    /// The ancestry table must be acyclic. The walk is bounded by the number
    /// of registered classes, so a cycle ends the iteration instead of
    /// looping forever.
    pub fn ancestors(&self, id: ClassId) -> impl Iterator<Item = ClassId> + '_ {
        let mut curr = self.class(id).and_then(|class| class.extends);
        core::iter::from_fn(move || {
            let ancestor = curr?;
            curr = self.class(ancestor).and_then(|class| class.extends);
            Some(ancestor)
        })
        .take(self.classes.len())
    }

    /// Returns `true` if `ancestor` is a structural ancestor of `class`.
    pub fn is_ancestor(&self, ancestor: ClassId, class: ClassId) -> bool {
        self.ancestors(class).any(|id| id == ancestor)
    }

    /// Concrete tables declared for any of `targets`.
    pub fn tables_for<'a>(
        &'a self,
        targets: &'a [ClassId],
    ) -> impl Iterator<Item = &'a TableArgs> + 'a {
        self.tables
            .iter()
            .filter(move |table| targets.contains(&table.target))
    }

    /// Abstract tables declared for any of `targets`.
    pub fn abstract_tables_for<'a>(
        &'a self,
        targets: &'a [ClassId],
    ) -> impl Iterator<Item = &'a TableArgs> + 'a {
        self.abstract_tables
            .iter()
            .filter(move |table| targets.contains(&table.target))
    }

    pub fn columns_for(&self, target: ClassId) -> impl Iterator<Item = &ColumnArgs> + '_ {
        property::filter_by_target(&self.columns, target)
    }

    pub fn relations_for(&self, target: ClassId) -> impl Iterator<Item = &RelationArgs> + '_ {
        property::filter_by_target(&self.relations, target)
    }

    pub fn indices_for(&self, target: ClassId) -> impl Iterator<Item = &IndexArgs> + '_ {
        property::filter_by_target(&self.indices, target)
    }

    pub fn compound_indices_for(
        &self,
        target: ClassId,
    ) -> impl Iterator<Item = &CompoundIndexArgs> + '_ {
        self.compound_indices
            .iter()
            .filter(move |index| index.target == target)
    }

    /// Every class with a concrete or abstract table declaration.
    pub fn table_targets(&self) -> Vec<ClassId> {
        self.tables
            .iter()
            .chain(&self.abstract_tables)
            .map(|table| table.target)
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }
}
