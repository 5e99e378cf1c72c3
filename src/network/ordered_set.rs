use std::{borrow::Borrow, hash::Hash};

use indexmap::IndexSet;

/// A deduplicated set that iterates in first-insertion order.
///
/// Equality is order-sensitive: two sets holding the same members in a
/// different order are not equal, since traversal order matters to callers.
#[derive(Debug, Clone)]
pub struct OrderedSet<T: Hash + Eq>(IndexSet<T>);

impl<T: Hash + Eq> OrderedSet<T> {
    pub fn new() -> Self {
        OrderedSet(IndexSet::new())
    }

    /// Returns `false` if the value was already present. Order is unchanged in that case.
    pub fn insert(&mut self, value: T) -> bool {
        self.0.insert(value)
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.0.contains(value)
    }

    pub fn iter(&self) -> indexmap::set::Iter<'_, T> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: Hash + Eq> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().eq(other.0.iter())
    }
}

impl<T: Hash + Eq> Eq for OrderedSet<T> {}

impl<T: Hash + Eq> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        OrderedSet(iter.into_iter().collect())
    }
}

impl<'a, T: Hash + Eq> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
