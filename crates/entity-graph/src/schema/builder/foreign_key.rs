use super::BuildGraph;
use crate::schema::{
    metadata::{ColumnMetadata, ForeignKeyMetadata},
    Result,
};

use tracing::debug;

impl BuildGraph<'_> {
    /// Gives every owning one-to-one and many-to-one relation a join column
    /// and a foreign key to the related entity's primary column.
    pub(super) fn build_foreign_keys(&mut self) -> Result<()> {
        // The owning entity is mutated while the inverse entity (possibly the
        // same one) is read, so iterate by index instead of holding
        // references into `self.entities`.
        for curr in 0..self.entities.len() {
            for index in 0..self.entities[curr].relations.len() {
                let relation = &self.entities[curr].relations[index];

                if !relation.has_join_column() {
                    continue;
                }

                let inverse = self.resolve_inverse(relation)?;
                let referenced = self.primary_column(inverse, relation)?;
                let relation_name = relation.name();

                // Join columns mirror the referenced primary key.
                let mut join_column = ColumnMetadata::referencing(
                    self.entities[curr].table.target,
                    relation_name.clone(),
                    referenced,
                    self.naming.clone(),
                );
                join_column.nullable = relation.nullable;
                join_column.old_column_name = relation.old_column_name.clone();

                let referenced = referenced.id;
                let on_delete = relation.on_delete;

                let entity = &mut self.entities[curr];
                let column = match entity.column_by_name(&relation_name) {
                    Some(existing) => existing.id,
                    None => {
                        debug!(
                            table = %entity.table.name(),
                            column = %relation_name,
                            "synthesized join column"
                        );
                        entity.push_column(join_column)
                    }
                };

                // Foreign keys are not de-duplicated; each build starts from
                // a fresh arena.
                entity.foreign_keys.push(ForeignKeyMetadata {
                    table: entity.id,
                    columns: vec![column],
                    referenced_table: inverse,
                    referenced_columns: vec![referenced],
                    on_delete,
                });
            }
        }

        Ok(())
    }
}
