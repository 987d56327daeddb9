use super::BuildGraph;

use tracing::{debug, warn};

impl BuildGraph<'_> {
    /// Points every relation at the entity mapping its related class.
    ///
    /// Runs after junction entities exist. A relation whose class is outside
    /// the build set keeps `related_entity = None`; that is not an error here
    /// because owning relations were already checked during synthesis.
    pub(super) fn link_relations(&mut self) {
        let mut unresolved = 0;

        for entity in &mut self.entities {
            for relation in &mut entity.relations {
                relation.related_entity = self.lookup.get(&relation.ty).copied();

                if relation.related_entity.is_none() {
                    unresolved += 1;
                    warn!(
                        table = %entity.table.name(),
                        relation = %relation.property_name,
                        target = %self.args.class_name(relation.ty),
                        "relation target is not part of the build set"
                    );
                }
            }
        }

        debug!(
            entities = self.entities.len(),
            unresolved,
            "linked relations"
        );
    }
}
