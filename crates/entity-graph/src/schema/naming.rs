//! Naming strategies.
//!
//! Metadata nodes keep logical names (class and property names, explicit
//! overrides) together with a shared [`NamingStrategy`]. Final schema
//! identifiers are rendered through the strategy on demand.

use super::Name;

use std::{fmt, sync::Arc};

/// Renders logical names into schema identifiers.
pub trait NamingStrategy: fmt::Debug + Send + Sync {
    /// Table name for a class. `custom_name` is an explicit table name.
    fn table_name(&self, class_name: &str, custom_name: Option<&str>) -> String;

    /// Column name for a property. `custom_name` is an explicit column name.
    fn column_name(&self, property_name: &str, custom_name: Option<&str>) -> String;

    /// Name of a relation. Join columns synthesized for the relation take
    /// this name.
    fn relation_name(&self, property_name: &str) -> String;

    fn index_name(
        &self,
        custom_name: Option<&str>,
        table_name: &str,
        columns: &[String],
    ) -> String {
        match custom_name {
            Some(name) => name.to_string(),
            None => format!("idx_{table_name}_{}", columns.join("_")),
        }
    }

    fn foreign_key_name(
        &self,
        table_name: &str,
        columns: &[String],
        referenced_table_name: &str,
        referenced_columns: &[String],
    ) -> String {
        format!(
            "fk_{table_name}_{}_{referenced_table_name}_{}",
            columns.join("_"),
            referenced_columns.join("_"),
        )
    }
}

/// Uses class and property names as-is. Explicit names always win.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultNamingStrategy;

impl NamingStrategy for DefaultNamingStrategy {
    fn table_name(&self, class_name: &str, custom_name: Option<&str>) -> String {
        custom_name.unwrap_or(class_name).to_string()
    }

    fn column_name(&self, property_name: &str, custom_name: Option<&str>) -> String {
        custom_name.unwrap_or(property_name).to_string()
    }

    fn relation_name(&self, property_name: &str) -> String {
        property_name.to_string()
    }
}

/// Pluralized snake_case table names and snake_case column names.
/// Explicit names always win.
#[derive(Debug, Default, Clone, Copy)]
pub struct SnakeCaseNamingStrategy;

impl NamingStrategy for SnakeCaseNamingStrategy {
    fn table_name(&self, class_name: &str, custom_name: Option<&str>) -> String {
        match custom_name {
            Some(name) => name.to_string(),
            None => Name::new(class_name).plural_snake_case(),
        }
    }

    fn column_name(&self, property_name: &str, custom_name: Option<&str>) -> String {
        match custom_name {
            Some(name) => name.to_string(),
            None => Name::new(property_name).snake_case(),
        }
    }

    fn relation_name(&self, property_name: &str) -> String {
        Name::new(property_name).snake_case()
    }
}

/// Prefixes every table name produced by the wrapped strategy.
#[derive(Debug)]
pub(crate) struct TablePrefix {
    prefix: String,
    inner: Arc<dyn NamingStrategy>,
}

impl TablePrefix {
    pub(crate) fn new(prefix: &str, inner: Arc<dyn NamingStrategy>) -> Self {
        Self {
            prefix: prefix.to_string(),
            inner,
        }
    }
}

impl NamingStrategy for TablePrefix {
    fn table_name(&self, class_name: &str, custom_name: Option<&str>) -> String {
        let name = self.inner.table_name(class_name, custom_name);
        format!("{}{name}", self.prefix)
    }

    fn column_name(&self, property_name: &str, custom_name: Option<&str>) -> String {
        self.inner.column_name(property_name, custom_name)
    }

    fn relation_name(&self, property_name: &str) -> String {
        self.inner.relation_name(property_name)
    }

    fn index_name(
        &self,
        custom_name: Option<&str>,
        table_name: &str,
        columns: &[String],
    ) -> String {
        self.inner.index_name(custom_name, table_name, columns)
    }

    fn foreign_key_name(
        &self,
        table_name: &str,
        columns: &[String],
        referenced_table_name: &str,
        referenced_columns: &[String],
    ) -> String {
        self.inner.foreign_key_name(
            table_name,
            columns,
            referenced_table_name,
            referenced_columns,
        )
    }
}
