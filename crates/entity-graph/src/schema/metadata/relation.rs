use super::{
    args::{Cascade, ClassId, OnDelete, Property, RelationArgs, RelationType},
    EntityId, NamingStrategy,
};

use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct RelationMetadata {
    /// Entity the relation was resolved onto. Differs from the entity of
    /// `target` when the relation is inherited from an abstract class.
    pub entity: EntityId,

    /// The declaring class
    pub target: ClassId,

    pub property_name: String,

    pub relation_type: RelationType,

    /// The related class
    pub ty: ClassId,

    pub inverse_side_property: Option<String>,

    /// True on the side holding the join column or join table. Always set
    /// for many-to-one, never for one-to-many.
    pub is_owning: bool,

    pub nullable: bool,

    pub old_column_name: Option<String>,

    pub on_delete: Option<OnDelete>,

    pub cascade: Cascade,

    /// The entity whose table maps `ty`. Set by the inverse-link pass;
    /// `None` when `ty` is not part of the build set.
    pub related_entity: Option<EntityId>,

    /// The junction entity synthesized for an owning many-to-many relation.
    pub junction_entity: Option<EntityId>,

    naming: Arc<dyn NamingStrategy>,
}

impl RelationMetadata {
    pub(crate) fn from_args(
        entity: EntityId,
        args: &RelationArgs,
        naming: Arc<dyn NamingStrategy>,
    ) -> Self {
        let is_owning = match args.relation_type {
            RelationType::ManyToOne => true,
            RelationType::OneToMany => false,
            RelationType::OneToOne | RelationType::ManyToMany => args.is_owning,
        };

        Self {
            entity,
            target: args.target,
            property_name: args.property_name.clone(),
            relation_type: args.relation_type,
            ty: args.ty,
            inverse_side_property: args.inverse_side_property.clone(),
            is_owning,
            nullable: args.nullable,
            old_column_name: args.old_column_name.clone(),
            on_delete: args.on_delete,
            cascade: args.cascade,
            related_entity: None,
            junction_entity: None,
            naming,
        }
    }

    /// The relation name as rendered by the naming strategy.
    pub fn name(&self) -> String {
        self.naming.relation_name(&self.property_name)
    }

    pub fn is_one_to_one(&self) -> bool {
        self.relation_type.is_one_to_one()
    }

    pub fn is_owner_one_to_one(&self) -> bool {
        self.is_one_to_one() && self.is_owning
    }

    pub fn is_many_to_one(&self) -> bool {
        self.relation_type.is_many_to_one()
    }

    pub fn is_one_to_many(&self) -> bool {
        self.relation_type.is_one_to_many()
    }

    pub fn is_many_to_many(&self) -> bool {
        self.relation_type.is_many_to_many()
    }

    pub fn is_owner_many_to_many(&self) -> bool {
        self.is_many_to_many() && self.is_owning
    }

    /// True if the relation is backed by a column on its own table.
    pub fn has_join_column(&self) -> bool {
        self.is_owner_one_to_one() || self.is_many_to_one()
    }
}

impl Property for RelationMetadata {
    fn target(&self) -> Option<ClassId> {
        Some(self.target)
    }

    fn property_name(&self) -> &str {
        &self.property_name
    }
}
