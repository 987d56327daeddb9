use super::{
    args::{ClassId, ColumnArgs, ColumnMode, ColumnType, Property},
    EntityId, NamingStrategy,
};

use std::{fmt, sync::Arc};

#[derive(Debug, Clone)]
pub struct ColumnMetadata {
    /// Uniquely identifies the column in the graph.
    pub id: ColumnId,

    /// The declaring class. `None` on junction table columns.
    pub target: Option<ClassId>,

    pub property_name: String,

    /// Explicit column name
    pub custom_name: Option<String>,

    pub ty: ColumnType,

    pub length: Option<u32>,

    pub mode: ColumnMode,

    pub primary: bool,

    pub generated: bool,

    pub unique: bool,

    pub nullable: bool,

    pub precision: Option<u32>,

    pub scale: Option<u32>,

    pub comment: Option<String>,

    pub default: Option<String>,

    pub old_column_name: Option<String>,

    naming: Arc<dyn NamingStrategy>,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct ColumnId {
    pub entity: EntityId,
    pub index: usize,
}

impl ColumnMetadata {
    pub(crate) fn from_args(args: &ColumnArgs, naming: Arc<dyn NamingStrategy>) -> Self {
        Self {
            id: ColumnId::placeholder(),
            target: Some(args.target),
            property_name: args.property_name.clone(),
            custom_name: args.name.clone(),
            ty: args.ty,
            length: args.length,
            mode: args.mode,
            primary: args.primary,
            generated: args.generated,
            unique: args.unique,
            nullable: args.nullable,
            precision: args.precision,
            scale: args.scale,
            comment: args.comment.clone(),
            default: args.default.clone(),
            old_column_name: args.old_column_name.clone(),
            naming,
        }
    }

    /// A column holding values of `referenced`, such as a join column or a
    /// junction table key. Type, length, precision and scale mirror the
    /// referenced column; every flag starts cleared.
    pub(crate) fn referencing(
        target: Option<ClassId>,
        property_name: String,
        referenced: &ColumnMetadata,
        naming: Arc<dyn NamingStrategy>,
    ) -> Self {
        Self {
            id: ColumnId::placeholder(),
            target,
            property_name,
            custom_name: None,
            ty: referenced.ty,
            length: referenced.length,
            mode: ColumnMode::Regular,
            primary: false,
            generated: false,
            unique: false,
            nullable: false,
            precision: referenced.precision,
            scale: referenced.scale,
            comment: None,
            default: None,
            old_column_name: None,
            naming,
        }
    }

    /// The column name in the database.
    pub fn name(&self) -> String {
        self.naming
            .column_name(&self.property_name, self.custom_name.as_deref())
    }

    pub fn is_virtual(&self) -> bool {
        matches!(self.mode, ColumnMode::Virtual)
    }

    pub fn is_create_date(&self) -> bool {
        matches!(self.mode, ColumnMode::CreateDate)
    }

    pub fn is_update_date(&self) -> bool {
        matches!(self.mode, ColumnMode::UpdateDate)
    }

    pub fn is_version(&self) -> bool {
        matches!(self.mode, ColumnMode::Version)
    }
}

impl Property for ColumnMetadata {
    fn target(&self) -> Option<ClassId> {
        self.target
    }

    fn property_name(&self) -> &str {
        &self.property_name
    }
}

impl ColumnId {
    pub(crate) fn placeholder() -> Self {
        Self {
            entity: EntityId::placeholder(),
            index: usize::MAX,
        }
    }
}

impl From<&ColumnMetadata> for ColumnId {
    fn from(value: &ColumnMetadata) -> Self {
        value.id
    }
}

impl fmt::Debug for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ColumnId({}/{})", self.entity.0, self.index)
    }
}
