use super::{Error, ErrorKind};

/// Error when an owning relation targets a class with no entity in the
/// current build set.
///
/// Foreign-key and junction-table synthesis need the target's primary key
/// shape, so they cannot proceed without it.
#[derive(Debug)]
pub(super) struct UnresolvedRelation {
    class: Box<str>,
    property: Box<str>,
    target: Box<str>,
}

impl std::error::Error for UnresolvedRelation {}

impl core::fmt::Display for UnresolvedRelation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "relation `{}::{}` targets `{}`, which is not part of the build set",
            self.class, self.property, self.target
        )
    }
}

impl Error {
    /// Creates an unresolved relation error for `class::property`.
    pub fn unresolved_relation(
        class: impl Into<String>,
        property: impl Into<String>,
        target: impl Into<String>,
    ) -> Error {
        Error::from(ErrorKind::UnresolvedRelation(UnresolvedRelation {
            class: class.into().into(),
            property: property.into().into(),
            target: target.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an unresolved
    /// relation error.
    pub fn is_unresolved_relation(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::UnresolvedRelation(_)))
    }
}
