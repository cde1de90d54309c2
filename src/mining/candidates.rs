use std::collections::BTreeSet;

use crate::types::{Itemset, Transaction};

/// Level-1 candidates: one singleton per distinct item seen in any
/// transaction.
pub fn initial_candidates(transactions: &[Transaction]) -> BTreeSet<Itemset> {
    transactions
        .iter()
        .flat_map(|tx| tx.iter())
        .map(|item| Itemset::singleton(item.clone()))
        .collect()
}

/// Level-k candidates from the frequent itemsets of level k-1.
///
/// Self-join: every pairwise union of size exactly `k`. No subset pruning
/// happens here; the support filter is the only gate. Deduplication is by
/// canonical itemset key.
pub fn join_candidates<'a, I>(previous: I, k: usize) -> BTreeSet<Itemset>
where
    I: IntoIterator<Item = &'a Itemset>,
{
    let previous: Vec<&Itemset> = previous.into_iter().collect();
    let mut candidates = BTreeSet::new();

    // The join is symmetric and A ∪ A never grows, so each unordered pair once.
    for (i, left) in previous.iter().enumerate() {
        for right in &previous[i + 1..] {
            let union = left.union(right);
            if union.len() == k {
                candidates.insert(union);
            }
        }
    }

    candidates
}
