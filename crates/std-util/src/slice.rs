use std::collections::HashSet;
use std::hash::Hash;

pub trait SliceUtil<T> {
    /// Returns the first element that appears more than once.
    fn first_duplicate(&self) -> Option<&T>;

    fn is_unique(&self) -> bool {
        self.first_duplicate().is_none()
    }
}

impl<T: Eq + Hash> SliceUtil<T> for [T] {
    fn first_duplicate(&self) -> Option<&T> {
        let mut seen = HashSet::with_capacity(self.len());
        self.iter().find(|item| !seen.insert(*item))
    }
}

/// Asserts that the collection contains no repeated elements.
#[macro_export]
macro_rules! assert_unique {
    ($e:expr) => {{
        let items: Vec<_> = $e.into_iter().collect();
        if let Some(dup) = $crate::slice::SliceUtil::first_duplicate(&items[..]) {
            panic!("expected unique elements; `{:?}` repeated in {:?}", dup, items);
        }
    }};
}
