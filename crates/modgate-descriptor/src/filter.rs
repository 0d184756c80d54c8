//! Allow/deny filter lists.

use std::hash::Hash;

use indexmap::IndexSet;

/// One side of an allow/deny pair.
///
/// `Unset` and `Empty` are kept apart: for platform allow lists an empty
/// list excludes every platform, while an unset one excludes none. Other
/// filters treat the two alike; that choice belongs to the evaluator, not
/// to this type.
///
/// `Entries` holding an empty set is the same list as `Empty`: it compares
/// equal to it and has no entries.
#[derive(Debug, Clone)]
pub enum FilterList<T: Hash + Eq> {
    /// The field was never given.
    Unset,
    /// The field was given but holds no usable entries.
    Empty,
    /// Distinct entries in declaration order.
    Entries(IndexSet<T>),
}

impl<T: Hash + Eq> Default for FilterList<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T: Hash + Eq> PartialEq for FilterList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_set() == other.is_set() && self.entries() == other.entries()
    }
}

impl<T: Hash + Eq> Eq for FilterList<T> {}

impl<T: Hash + Eq> FilterList<T> {
    /// Build a present list, collapsing to `Empty` when `entries` yields nothing.
    pub fn from_entries(entries: impl IntoIterator<Item = T>) -> Self {
        let set: IndexSet<T> = entries.into_iter().collect();
        if set.is_empty() {
            Self::Empty
        } else {
            Self::Entries(set)
        }
    }

    /// Whether the field was given at all.
    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Whether the list holds at least one entry.
    pub fn has_entries(&self) -> bool {
        self.entries().is_some()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.entries().is_some_and(|set| set.contains(value))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries().into_iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.entries().map_or(0, IndexSet::len)
    }

    fn entries(&self) -> Option<&IndexSet<T>> {
        match self {
            Self::Entries(set) if !set.is_empty() => Some(set),
            Self::Entries(_) | Self::Unset | Self::Empty => None,
        }
    }

    /// Present lists are strict: anything not listed is rejected, even when
    /// nothing is listed.
    pub(crate) fn rejects_strict(&self, value: &T) -> bool {
        self.is_set() && !self.contains(value)
    }

    /// Only lists with entries reject; an empty list behaves as unset.
    pub(crate) fn rejects_lenient(&self, value: &T) -> bool {
        self.has_entries() && !self.contains(value)
    }
}

impl<T: Hash + Eq> FromIterator<T> for FilterList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_entries_collapses_to_empty() {
        let list: FilterList<u8> = FilterList::from_entries(Vec::new());
        assert_eq!(list, FilterList::Empty);
        assert!(list.is_set());
        assert!(!list.has_entries());
    }

    #[test]
    fn duplicates_collapse_keeping_first_position() {
        let list: FilterList<&str> = ["b", "a", "b"].into_iter().collect();
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn strict_rejection_counts_empty_lists() {
        assert!(!FilterList::<u8>::Unset.rejects_strict(&1));
        assert!(FilterList::<u8>::Empty.rejects_strict(&1));
        assert!(FilterList::from_entries([2u8]).rejects_strict(&1));
        assert!(!FilterList::from_entries([1u8]).rejects_strict(&1));
    }

    #[test]
    fn lenient_rejection_ignores_empty_lists() {
        assert!(!FilterList::<u8>::Unset.rejects_lenient(&1));
        assert!(!FilterList::<u8>::Empty.rejects_lenient(&1));
        assert!(FilterList::from_entries([2u8]).rejects_lenient(&1));
        assert!(!FilterList::from_entries([1u8]).rejects_lenient(&1));
    }

    #[test]
    fn entries_with_empty_set_behaves_as_empty() {
        let list: FilterList<u8> = FilterList::Entries(IndexSet::new());
        assert_eq!(list, FilterList::Empty);
        assert_ne!(list, FilterList::Unset);
        assert!(list.is_set());
        assert!(!list.has_entries());
        assert_eq!(list.len(), 0);
        assert!(!list.rejects_lenient(&1));
        assert!(list.rejects_strict(&1));
    }
}
