mod names_are_unique;

use super::{
    metadata::{ColumnId, EntityGraph, EntityId},
    Result,
};
use crate::Error;

struct Verify<'a> {
    graph: &'a EntityGraph,
}

impl EntityGraph {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { graph: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        debug_assert!(self.verify_ids_populated());

        self.verify_table_names_are_unique()?;
        self.verify_column_names_are_unique()?;
        self.verify_indices_have_columns()?;
        self.verify_foreign_keys_line_up()?;
        Ok(())
    }

    fn verify_ids_populated(&self) -> bool {
        for (i, entity) in self.graph.entities.iter().enumerate() {
            assert_eq!(entity.id, EntityId(i));

            for (index, column) in entity.columns.iter().enumerate() {
                let expected = ColumnId {
                    entity: entity.id,
                    index,
                };
                assert_eq!(column.id, expected);
            }

            for relation in &entity.relations {
                assert_eq!(relation.entity, entity.id);

                if let Some(related) = relation.related_entity {
                    assert!(related.0 < self.graph.entities.len());
                }

                if let Some(junction) = relation.junction_entity {
                    assert!(self.graph.entity(junction).is_junction());
                }
            }
        }

        true
    }

    fn verify_indices_have_columns(&self) -> Result<()> {
        for entity in &self.graph.entities {
            let compound = entity
                .compound_indices
                .iter()
                .flat_map(|index| &index.columns);
            let properties = entity
                .indices
                .iter()
                .map(|index| &index.property_name)
                .chain(compound);

            for property_name in properties {
                if !entity.has_column_for_property(property_name) {
                    return Err(Error::invalid_schema(format!(
                        "index on table `{}` references `{}`, which has no column",
                        entity.table.name(),
                        property_name,
                    )));
                }
            }
        }

        Ok(())
    }

    fn verify_foreign_keys_line_up(&self) -> Result<()> {
        for entity in &self.graph.entities {
            for fk in &entity.foreign_keys {
                let lines_up = fk.table == entity.id
                    && !fk.columns.is_empty()
                    && fk.columns.len() == fk.referenced_columns.len()
                    && fk.columns.iter().all(|column| column.entity == fk.table)
                    && fk
                        .referenced_columns
                        .iter()
                        .all(|column| column.entity == fk.referenced_table);

                if !lines_up {
                    return Err(Error::invalid_schema(format!(
                        "malformed foreign key on table `{}`: {fk:?}",
                        entity.table.name(),
                    )));
                }
            }
        }

        Ok(())
    }
}
