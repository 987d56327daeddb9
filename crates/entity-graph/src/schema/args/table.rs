use super::ClassId;

/// Declares that a class maps to a table.
#[derive(Debug, Clone)]
pub struct TableArgs {
    /// The declaring class
    pub target: ClassId,

    /// Explicit table name. When `None` the naming strategy derives one from
    /// the class name.
    pub name: Option<String>,
}

impl TableArgs {
    pub fn new(target: ClassId) -> Self {
        Self { target, name: None }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}
