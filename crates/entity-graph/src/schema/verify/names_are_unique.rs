use super::*;

use std_util::slice::SliceUtil;

impl Verify<'_> {
    pub(super) fn verify_table_names_are_unique(&self) -> Result<()> {
        let names: Vec<_> = self
            .graph
            .entities
            .iter()
            .map(|entity| entity.table.name())
            .collect();

        if let Some(name) = names.first_duplicate() {
            return Err(Error::invalid_schema(format!(
                "more than one entity maps to table `{name}`"
            )));
        }

        Ok(())
    }

    pub(super) fn verify_column_names_are_unique(&self) -> Result<()> {
        for entity in &self.graph.entities {
            let names: Vec<_> = entity.columns.iter().map(|column| column.name()).collect();

            if let Some(name) = names.first_duplicate() {
                return Err(Error::invalid_schema(format!(
                    "table `{}` has more than one column named `{name}`",
                    entity.table.name(),
                )));
            }
        }

        Ok(())
    }
}
