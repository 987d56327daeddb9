//! Resolved entity metadata.

mod column;
pub use column::{ColumnId, ColumnMetadata};

mod entity;
pub use entity::{EntityId, EntityMetadata};

mod fk;
pub use fk::ForeignKeyMetadata;

mod graph;
pub use graph::EntityGraph;

mod index;
pub use index::{CompoundIndexMetadata, IndexMetadata};

mod relation;
pub use relation::RelationMetadata;

mod table;
pub use table::TableMetadata;

use super::{args, NamingStrategy};
