use super::{args::ClassId, NamingStrategy};

use std::sync::Arc;

/// The table a mapped class, or a junction relation, is stored in.
#[derive(Debug, Clone)]
pub struct TableMetadata {
    /// The mapped class. `None` for synthesized junction tables.
    pub target: Option<ClassId>,

    /// Class name; for junction tables, the already rendered table name.
    pub class_name: String,

    /// Explicit table name
    pub custom_name: Option<String>,

    pub is_abstract: bool,

    naming: Arc<dyn NamingStrategy>,
}

impl TableMetadata {
    pub(crate) fn declared(
        target: ClassId,
        class_name: String,
        custom_name: Option<String>,
        naming: Arc<dyn NamingStrategy>,
    ) -> Self {
        Self {
            target: Some(target),
            class_name,
            custom_name,
            is_abstract: false,
            naming,
        }
    }

    /// A junction table is named from already rendered table and column
    /// names, so its name is used verbatim.
    pub(crate) fn junction(name: String, naming: Arc<dyn NamingStrategy>) -> Self {
        Self {
            target: None,
            class_name: name,
            custom_name: None,
            is_abstract: false,
            naming,
        }
    }

    /// The table name in the database.
    pub fn name(&self) -> String {
        match self.target {
            Some(_) => self
                .naming
                .table_name(&self.class_name, self.custom_name.as_deref()),
            None => self.class_name.clone(),
        }
    }

    pub fn is_junction(&self) -> bool {
        self.target.is_none()
    }

    pub fn naming_strategy(&self) -> &Arc<dyn NamingStrategy> {
        &self.naming
    }
}
