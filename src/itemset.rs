use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Anything that can be mined: totally ordered so itemsets have a canonical
/// form, hashable for header-table lookups.
///
/// Types without a natural order are wrapped in a newtype with an explicit
/// `Ord` impl.
pub trait Item: Ord + Hash + Clone + fmt::Debug {}

impl<T: Ord + Hash + Clone + fmt::Debug> Item for T {}

/// A set of unique items stored in ascending order.
///
/// Equality, ordering and hashing all derive from the canonical vector, so
/// two itemsets built from the same items in any order compare equal and
/// itemsets of equal length sort lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Itemset<T> {
    items: Vec<T>,
}

impl<T: Ord> Itemset<T> {
    pub fn new(mut items: Vec<T>) -> Self {
        items.sort_unstable();
        items.dedup();
        Self { items }
    }

    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    pub fn singleton(item: T) -> Self {
        Self { items: vec![item] }
    }

    /// Wraps a vector that is already strictly ascending.
    pub(crate) fn from_sorted(items: Vec<T>) -> Self {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// All items but the last.
    pub fn prefix(&self) -> &[T] {
        match self.items.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }

    /// True when both itemsets agree on everything except their last item.
    pub fn shares_prefix_with(&self, other: &Self) -> bool {
        self.len() == other.len() && self.prefix() == other.prefix()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.binary_search(item).is_ok()
    }

    /// Merge walk over both ascending sequences.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }

        let mut theirs = other.items.iter();
        'outer: for mine in &self.items {
            for candidate in theirs.by_ref() {
                match candidate.cmp(mine) {
                    Ordering::Less => continue,
                    Ordering::Equal => continue 'outer,
                    Ordering::Greater => return false,
                }
            }
            return false;
        }
        true
    }
}

impl<T: Ord + Clone> Itemset<T> {
    /// Extends the itemset with an item greater than every current member.
    pub(crate) fn extended_with(&self, item: T) -> Self {
        debug_assert!(self.items.last().map_or(true, |last| *last < item));
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend_from_slice(&self.items);
        items.push(item);
        Self { items }
    }

    /// Keeps only the items accepted by `keep`, preserving order.
    pub fn retain_items<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        Self {
            items: self.items.iter().filter(|item| keep(*item)).cloned().collect(),
        }
    }
}

impl<T: Ord> Default for Itemset<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Ord> FromIterator<T> for Itemset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Itemset<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Itemset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "}}")
    }
}
