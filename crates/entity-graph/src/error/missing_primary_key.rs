use super::{Error, ErrorKind};

/// Error when an entity cannot supply the single primary column a relation
/// needs to reference.
#[derive(Debug)]
pub(super) struct MissingPrimaryKey {
    entity: Box<str>,
    relation: Box<str>,
    /// Number of primary columns found; zero when missing.
    found: usize,
}

impl std::error::Error for MissingPrimaryKey {}

impl core::fmt::Display for MissingPrimaryKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.found == 0 {
            write!(
                f,
                "entity `{}` has no primary column, required by relation `{}`",
                self.entity, self.relation
            )
        } else {
            write!(
                f,
                "entity `{}` has {} primary columns, relation `{}` requires exactly one",
                self.entity, self.found, self.relation
            )
        }
    }
}

impl Error {
    /// Creates an error for an entity without a primary column.
    pub fn missing_primary_key(entity: impl Into<String>, relation: impl Into<String>) -> Error {
        Self::primary_key_error(entity.into(), relation.into(), 0)
    }

    /// Creates an error for an entity whose primary column is ambiguous
    /// because several columns are flagged primary.
    pub fn ambiguous_primary_key(
        entity: impl Into<String>,
        relation: impl Into<String>,
        found: usize,
    ) -> Error {
        Self::primary_key_error(entity.into(), relation.into(), found)
    }

    fn primary_key_error(entity: String, relation: String, found: usize) -> Error {
        Error::from(ErrorKind::MissingPrimaryKey(MissingPrimaryKey {
            entity: entity.into(),
            relation: relation.into(),
            found,
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a missing or
    /// ambiguous primary key error.
    pub fn is_missing_primary_key(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::MissingPrimaryKey(_)))
    }
}
