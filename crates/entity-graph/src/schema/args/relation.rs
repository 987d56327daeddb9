use super::{ClassId, Property};

/// Declares an association between two classes.
#[derive(Debug, Clone)]
pub struct RelationArgs {
    /// The declaring class
    pub target: ClassId,

    pub property_name: String,

    pub relation_type: RelationType,

    /// The related class
    pub ty: ClassId,

    /// Property on the related class that points back, if bidirectional
    pub inverse_side_property: Option<String>,

    /// Set on the side that holds the join column (one-to-one) or the join
    /// table (many-to-many). Many-to-one relations always own, one-to-many
    /// relations never do.
    pub is_owning: bool,

    pub nullable: bool,

    /// Legacy column name hint, carried onto a synthesized join column
    pub old_column_name: Option<String>,

    pub on_delete: Option<OnDelete>,

    pub cascade: Cascade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationType {
    OneToOne,
    ManyToOne,
    OneToMany,
    ManyToMany,
}

/// Referential action taken when the referenced row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnDelete {
    Restrict,
    Cascade,
    SetNull,
}

/// Which persistence operations propagate across the relation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cascade {
    pub insert: bool,
    pub update: bool,
    pub remove: bool,
}

impl RelationArgs {
    pub fn new(
        target: ClassId,
        property_name: &str,
        relation_type: RelationType,
        ty: ClassId,
    ) -> Self {
        Self {
            target,
            property_name: property_name.to_string(),
            relation_type,
            ty,
            inverse_side_property: None,
            is_owning: matches!(relation_type, RelationType::ManyToOne),
            nullable: true,
            old_column_name: None,
            on_delete: None,
            cascade: Cascade::default(),
        }
    }

    pub fn one_to_one(target: ClassId, property_name: &str, ty: ClassId) -> Self {
        Self::new(target, property_name, RelationType::OneToOne, ty)
    }

    pub fn many_to_one(target: ClassId, property_name: &str, ty: ClassId) -> Self {
        Self::new(target, property_name, RelationType::ManyToOne, ty)
    }

    pub fn one_to_many(target: ClassId, property_name: &str, ty: ClassId) -> Self {
        Self::new(target, property_name, RelationType::OneToMany, ty)
    }

    pub fn many_to_many(target: ClassId, property_name: &str, ty: ClassId) -> Self {
        Self::new(target, property_name, RelationType::ManyToMany, ty)
    }

    /// Marks this side as the owner of the join column or join table.
    pub fn owning(mut self) -> Self {
        self.is_owning = true;
        self
    }

    pub fn inverse_side(mut self, property_name: &str) -> Self {
        self.inverse_side_property = Some(property_name.to_string());
        self
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn old_column_name(mut self, name: &str) -> Self {
        self.old_column_name = Some(name.to_string());
        self
    }

    pub fn on_delete(mut self, on_delete: OnDelete) -> Self {
        self.on_delete = Some(on_delete);
        self
    }

    pub fn cascade_all(mut self) -> Self {
        self.cascade = Cascade::all();
        self
    }
}

impl Property for RelationArgs {
    fn target(&self) -> Option<ClassId> {
        Some(self.target)
    }

    fn property_name(&self) -> &str {
        &self.property_name
    }
}

impl RelationType {
    pub fn is_one_to_one(self) -> bool {
        matches!(self, Self::OneToOne)
    }

    pub fn is_many_to_one(self) -> bool {
        matches!(self, Self::ManyToOne)
    }

    pub fn is_one_to_many(self) -> bool {
        matches!(self, Self::OneToMany)
    }

    pub fn is_many_to_many(self) -> bool {
        matches!(self, Self::ManyToMany)
    }
}

impl Cascade {
    pub fn all() -> Self {
        Self {
            insert: true,
            update: true,
            remove: true,
        }
    }
}
