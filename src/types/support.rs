use std::collections::btree_map;
use std::collections::BTreeMap;

use super::itemset::Itemset;

/// Mapping from itemset to support count.
///
/// Backed by a `BTreeMap` so iteration order is a function of the keys
/// alone: smaller itemsets first, then lexicographic. Entries are only ever
/// added; a mining run accumulates one level at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SupportTable {
    inner: BTreeMap<Itemset, usize>,
}

impl SupportTable {
    pub fn new() -> Self {
        SupportTable {
            inner: BTreeMap::new(),
        }
    }

    /// Record a support count. Returns the previous count if the itemset
    /// was already present.
    pub fn insert(&mut self, itemset: Itemset, support: usize) -> Option<usize> {
        self.inner.insert(itemset, support)
    }

    pub fn support(&self, itemset: &Itemset) -> Option<usize> {
        self.inner.get(itemset).copied()
    }

    pub fn contains(&self, itemset: &Itemset) -> bool {
        self.inner.contains_key(itemset)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, usize)> {
        self.inner.iter().map(|(set, &count)| (set, count))
    }

    pub fn itemsets(&self) -> impl Iterator<Item = &Itemset> {
        self.inner.keys()
    }

    /// Merge another level into this table.
    pub fn extend(&mut self, other: SupportTable) {
        self.inner.extend(other.inner);
    }

    pub fn of_size(&self, k: usize) -> impl Iterator<Item = (&Itemset, usize)> {
        self.iter().filter(move |(set, _)| set.len() == k)
    }

    /// Entries eligible for rule generation (cardinality of two or more).
    pub fn multi_item(&self) -> impl Iterator<Item = (&Itemset, usize)> {
        self.iter().filter(|(set, _)| set.len() > 1)
    }
}

impl FromIterator<(Itemset, usize)> for SupportTable {
    fn from_iter<T: IntoIterator<Item = (Itemset, usize)>>(iter: T) -> Self {
        SupportTable {
            inner: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SupportTable {
    type Item = (Itemset, usize);
    type IntoIter = btree_map::IntoIter<Itemset, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}
