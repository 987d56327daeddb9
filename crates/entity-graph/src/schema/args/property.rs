use super::ClassId;

/// A member-level declaration owned by a class.
///
/// Columns, relations and single-property indices (raw and resolved) all
/// implement this so they can be filtered by owner and matched by property
/// name.
pub trait Property {
    /// The owning class. `None` for members synthesized on junction tables.
    fn target(&self) -> Option<ClassId>;

    fn property_name(&self) -> &str;
}

pub(crate) fn filter_by_target<T: Property>(
    items: &[T],
    target: ClassId,
) -> impl Iterator<Item = &T> + '_ {
    items
        .iter()
        .filter(move |item| item.target() == Some(target))
}

pub(crate) fn has_property<T: Property>(items: &[T], property_name: &str) -> bool {
    items
        .iter()
        .any(|item| item.property_name() == property_name)
}
