use super::{args::OnDelete, ColumnId, ColumnMetadata, EntityGraph, EntityId, EntityMetadata};

/// A foreign key constraint from columns of one table to the primary
/// columns of another.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKeyMetadata {
    /// The table holding the constraint
    pub table: EntityId,

    pub columns: Vec<ColumnId>,

    pub referenced_table: EntityId,

    pub referenced_columns: Vec<ColumnId>,

    pub on_delete: Option<OnDelete>,
}

impl ForeignKeyMetadata {
    pub fn entity<'a>(&self, graph: &'a EntityGraph) -> &'a EntityMetadata {
        graph.entity(self.table)
    }

    pub fn referenced_entity<'a>(&self, graph: &'a EntityGraph) -> &'a EntityMetadata {
        graph.entity(self.referenced_table)
    }

    pub fn columns<'a>(
        &'a self,
        graph: &'a EntityGraph,
    ) -> impl ExactSizeIterator<Item = &'a ColumnMetadata> + 'a {
        self.columns.iter().map(|id| graph.column(*id))
    }

    pub fn referenced_columns<'a>(
        &'a self,
        graph: &'a EntityGraph,
    ) -> impl ExactSizeIterator<Item = &'a ColumnMetadata> + 'a {
        self.referenced_columns.iter().map(|id| graph.column(*id))
    }

    /// The constraint name, rendered by the owning table's naming strategy.
    pub fn name(&self, graph: &EntityGraph) -> String {
        let table = &self.entity(graph).table;
        let columns: Vec<_> = self.columns(graph).map(ColumnMetadata::name).collect();
        let referenced_columns: Vec<_> = self
            .referenced_columns(graph)
            .map(ColumnMetadata::name)
            .collect();

        table.naming_strategy().foreign_key_name(
            &table.name(),
            &columns,
            &self.referenced_entity(graph).table.name(),
            &referenced_columns,
        )
    }
}
