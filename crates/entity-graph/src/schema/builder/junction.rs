use super::BuildGraph;
use crate::schema::{
    args::OnDelete,
    metadata::{ColumnMetadata, EntityId, EntityMetadata, ForeignKeyMetadata, TableMetadata},
    Result,
};

use tracing::debug;

impl BuildGraph<'_> {
    /// Synthesizes a junction entity for every owning many-to-many relation.
    ///
    /// Junction entities are appended after all declared entities and take no
    /// part in inheritance merging or foreign key synthesis.
    pub(super) fn build_junction_tables(&mut self) -> Result<()> {
        let mut junctions = vec![];
        let mut links = vec![];

        for curr in 0..self.entities.len() {
            for index in 0..self.entities[curr].relations.len() {
                let owner = &self.entities[curr];
                let relation = &owner.relations[index];

                if !relation.is_owner_many_to_many() {
                    continue;
                }

                let inverse = self.resolve_inverse(relation)?;
                let owner_primary = self.primary_column(owner.id, relation)?;
                let inverse_primary = self.primary_column(inverse, relation)?;

                let owner_table = owner.table.name();
                let inverse_table = self.entities[inverse.0].table.name();
                let relation_name = relation.name();
                let inverse_primary_name = inverse_primary.name();

                let id = EntityId(self.entities.len() + junctions.len());
                let table_name = format!(
                    "{owner_table}_{relation_name}_{inverse_table}_{inverse_primary_name}"
                );

                let mut junction = EntityMetadata::new(
                    id,
                    TableMetadata::junction(table_name, self.naming.clone()),
                );

                let owner_column = junction.push_column(self.junction_column(
                    format!("{owner_table}_{relation_name}"),
                    owner_primary,
                ));
                let inverse_column = junction.push_column(self.junction_column(
                    format!("{inverse_table}_{inverse_primary_name}"),
                    inverse_primary,
                ));

                junction.foreign_keys.push(ForeignKeyMetadata {
                    table: id,
                    columns: vec![owner_column],
                    referenced_table: owner.id,
                    referenced_columns: vec![owner_primary.id],
                    on_delete: Some(OnDelete::Cascade),
                });
                junction.foreign_keys.push(ForeignKeyMetadata {
                    table: id,
                    columns: vec![inverse_column],
                    referenced_table: inverse,
                    referenced_columns: vec![inverse_primary.id],
                    on_delete: Some(OnDelete::Cascade),
                });

                debug!(
                    table = %junction.table.name(),
                    relation = %self.relation_path(relation),
                    "synthesized junction table"
                );

                links.push((curr, index, id));
                junctions.push(junction);
            }
        }

        for (curr, index, id) in links {
            self.entities[curr].relations[index].junction_entity = Some(id);
        }

        self.entities.extend(junctions);

        Ok(())
    }

    /// Junction columns are named from already rendered table and column
    /// names, so the name is passed as an explicit column name.
    fn junction_column(&self, name: String, referenced: &ColumnMetadata) -> ColumnMetadata {
        let mut column =
            ColumnMetadata::referencing(None, name.clone(), referenced, self.naming.clone());
        column.custom_name = Some(name);
        column
    }
}
