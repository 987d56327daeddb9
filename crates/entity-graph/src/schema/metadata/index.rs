use super::{
    args::{ClassId, CompoundIndexArgs, IndexArgs, Property},
    EntityMetadata, NamingStrategy,
};

use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct IndexMetadata {
    pub target: ClassId,

    /// The indexed property
    pub property_name: String,

    /// Explicit index name
    pub custom_name: Option<String>,

    pub unique: bool,

    naming: Arc<dyn NamingStrategy>,
}

#[derive(Debug, Clone)]
pub struct CompoundIndexMetadata {
    pub target: ClassId,

    /// Indexed property names, in index order
    pub columns: Vec<String>,

    pub custom_name: Option<String>,

    pub unique: bool,

    naming: Arc<dyn NamingStrategy>,
}

impl IndexMetadata {
    pub(crate) fn from_args(args: &IndexArgs, naming: Arc<dyn NamingStrategy>) -> Self {
        Self {
            target: args.target,
            property_name: args.property_name.clone(),
            custom_name: args.name.clone(),
            unique: args.unique,
            naming,
        }
    }

    /// The index name, given the entity the index was resolved onto.
    pub fn name(&self, entity: &EntityMetadata) -> String {
        let columns = [entity.column_name_for_property(&self.property_name)];
        self.naming
            .index_name(self.custom_name.as_deref(), &entity.table.name(), &columns)
    }
}

impl CompoundIndexMetadata {
    pub(crate) fn from_args(args: &CompoundIndexArgs, naming: Arc<dyn NamingStrategy>) -> Self {
        Self {
            target: args.target,
            columns: args.columns.clone(),
            custom_name: args.name.clone(),
            unique: args.unique,
            naming,
        }
    }

    pub fn name(&self, entity: &EntityMetadata) -> String {
        let columns: Vec<_> = self
            .columns
            .iter()
            .map(|property| entity.column_name_for_property(property))
            .collect();
        self.naming
            .index_name(self.custom_name.as_deref(), &entity.table.name(), &columns)
    }
}

impl Property for IndexMetadata {
    fn target(&self) -> Option<ClassId> {
        Some(self.target)
    }

    fn property_name(&self) -> &str {
        &self.property_name
    }
}
