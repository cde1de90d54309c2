use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque item identifier. Equality is by value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(String);

impl Item {
    pub fn new(id: impl Into<String>) -> Self {
        Item(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Item {
    fn from(s: &str) -> Self {
        Item(s.to_string())
    }
}

impl From<String> for Item {
    fn from(s: String) -> Self {
        Item(s)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An unordered, duplicate-free group of items.
///
/// Stored in canonical form: items sorted ascending with duplicates removed.
/// Every constructor establishes this, so derived equality and hashing are
/// order-independent. Ordering is by cardinality first, then lexicographic
/// by items; an ordered map keyed by `Itemset` therefore iterates level by
/// level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Item>", into = "Vec<Item>")]
pub struct Itemset {
    items: Vec<Item>,
}

/// One real-world basket. Same shape as any other itemset.
pub type Transaction = Itemset;

impl Itemset {
    pub fn new(mut items: Vec<Item>) -> Self {
        items.sort_unstable();
        items.dedup();
        Self { items }
    }

    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    pub fn singleton(item: Item) -> Self {
        Self { items: vec![item] }
    }

    /// Build from anything string-like. Handy for tests and collaborators
    /// holding plain `&str` tokens.
    pub fn of<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        items.into_iter().map(Item::new).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Item> {
        self.items.iter()
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.items.binary_search(item).is_ok()
    }

    /// Subset test as a single merge walk over both sorted sequences.
    pub fn is_subset_of(&self, other: &Itemset) -> bool {
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

    pub fn union(&self, other: &Itemset) -> Itemset {
        let mut items = Vec::with_capacity(self.len() + other.len());
        let (mut a, mut b) = (self.items.iter().peekable(), other.items.iter().peekable());
        loop {
            match (a.peek(), b.peek()) {
                (Some(&x), Some(&y)) => {
                    match x.cmp(y) {
                        Ordering::Less => {
                            items.push(x.clone());
                            a.next();
                        }
                        Ordering::Greater => {
                            items.push(y.clone());
                            b.next();
                        }
                        Ordering::Equal => {
                            items.push(x.clone());
                            a.next();
                            b.next();
                        }
                    }
                }
                (Some(_), None) => {
                    items.extend(a.by_ref().cloned());
                    break;
                }
                (None, Some(_)) => {
                    items.extend(b.by_ref().cloned());
                    break;
                }
                (None, None) => break,
            }
        }
        Itemset { items }
    }

    pub fn difference(&self, other: &Itemset) -> Itemset {
        let items = self
            .items
            .iter()
            .filter(|item| !other.contains(item))
            .cloned()
            .collect();
        Itemset { items }
    }

    pub fn is_disjoint(&self, other: &Itemset) -> bool {
        self.items.iter().all(|item| !other.contains(item))
    }

    /// All subsets of exactly `k` items, in lexicographic order.
    pub fn subsets_of_size(&self, k: usize) -> Vec<Itemset> {
        let mut out = Vec::new();
        if k > self.len() {
            return out;
        }
        let mut current = Vec::with_capacity(k);
        collect_combinations(&self.items, k, 0, &mut current, &mut out);
        out
    }
}

fn collect_combinations(
    items: &[Item],
    k: usize,
    start: usize,
    current: &mut Vec<Item>,
    out: &mut Vec<Itemset>,
) {
    if current.len() == k {
        // `items` is sorted and we only walk forward, so `current` is canonical.
        out.push(Itemset {
            items: current.clone(),
        });
        return;
    }

    for (i, item) in items.iter().enumerate().skip(start) {
        current.push(item.clone());
        collect_combinations(items, k, i + 1, current, out);
        current.pop();
    }
}

impl Ord for Itemset {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.items.cmp(&other.items))
    }
}

impl PartialOrd for Itemset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromIterator<Item> for Itemset {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Itemset::new(iter.into_iter().collect())
    }
}

impl From<Vec<Item>> for Itemset {
    fn from(items: Vec<Item>) -> Self {
        Itemset::new(items)
    }
}

impl From<Itemset> for Vec<Item> {
    fn from(set: Itemset) -> Self {
        set.items
    }
}

impl<'a> IntoIterator for &'a Itemset {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(item.as_str())?;
        }
        f.write_str("}")
    }
}
