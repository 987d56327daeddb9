use super::{ClassId, Property};

/// Declares a scalar mapped field.
#[derive(Debug, Clone)]
pub struct ColumnArgs {
    /// The declaring class
    pub target: ClassId,

    /// Name of the field on the class
    pub property_name: String,

    /// Explicit column name. When `None` the naming strategy derives one from
    /// the property name.
    pub name: Option<String>,

    pub ty: ColumnType,

    /// Maximum length for string-like types
    pub length: Option<u32>,

    pub mode: ColumnMode,

    /// True if the column is the table's primary column
    pub primary: bool,

    /// True if the database generates the value on insert
    pub generated: bool,

    pub unique: bool,

    pub nullable: bool,

    pub precision: Option<u32>,

    pub scale: Option<u32>,

    pub comment: Option<String>,

    /// Default value, as a database expression
    pub default: Option<String>,

    /// Name the column had before a rename, for schema sync layers
    pub old_column_name: Option<String>,
}

/// Logical column types. Storage types are chosen by the schema emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    String,
    Text,
    Number,
    Integer,
    Int,
    SmallInt,
    BigInt,
    Float,
    Double,
    Decimal,
    Date,
    Time,
    DateTime,
    Boolean,
    Json,
    SimpleArray,
}

/// How the column's value is maintained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ColumnMode {
    #[default]
    Regular,

    /// Set once when the row is inserted
    CreateDate,

    /// Refreshed on every update
    UpdateDate,

    /// Incremented on every update
    Version,

    /// Mapped on the class but not stored
    Virtual,
}

impl ColumnArgs {
    pub fn new(target: ClassId, property_name: &str, ty: ColumnType) -> Self {
        Self {
            target,
            property_name: property_name.to_string(),
            name: None,
            ty,
            length: None,
            mode: ColumnMode::Regular,
            primary: false,
            generated: false,
            unique: false,
            nullable: false,
            precision: None,
            scale: None,
            comment: None,
            default: None,
            old_column_name: None,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn mode(mut self, mode: ColumnMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    pub fn generated(mut self) -> Self {
        self.generated = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn precision(mut self, precision: u32, scale: u32) -> Self {
        self.precision = Some(precision);
        self.scale = Some(scale);
        self
    }

    pub fn comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }

    pub fn default_value(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self
    }

    pub fn old_column_name(mut self, name: &str) -> Self {
        self.old_column_name = Some(name.to_string());
        self
    }
}

impl Property for ColumnArgs {
    fn target(&self) -> Option<ClassId> {
        Some(self.target)
    }

    fn property_name(&self) -> &str {
        &self.property_name
    }
}
