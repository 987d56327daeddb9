use super::{ClassId, Property};

/// An index over a single property.
#[derive(Debug, Clone)]
pub struct IndexArgs {
    pub target: ClassId,

    pub property_name: String,

    /// Explicit index name
    pub name: Option<String>,

    /// When `true`, indexed entries are unique
    pub unique: bool,
}

/// An index spanning several properties of one class.
#[derive(Debug, Clone)]
pub struct CompoundIndexArgs {
    pub target: ClassId,

    /// Indexed property names, in index order
    pub columns: Vec<String>,

    pub name: Option<String>,

    pub unique: bool,
}

impl IndexArgs {
    pub fn new(target: ClassId, property_name: &str) -> Self {
        Self {
            target,
            property_name: property_name.to_string(),
            name: None,
            unique: false,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

impl CompoundIndexArgs {
    pub fn new<'a>(target: ClassId, columns: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            target,
            columns: columns.into_iter().map(String::from).collect(),
            name: None,
            unique: false,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

impl Property for IndexArgs {
    fn target(&self) -> Option<ClassId> {
        Some(self.target)
    }

    fn property_name(&self) -> &str {
        &self.property_name
    }
}
