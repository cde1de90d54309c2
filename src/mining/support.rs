use std::collections::BTreeSet;

use crate::types::{Itemset, SupportTable, Transaction};

/// Raw tally: for every candidate, the number of transactions that contain
/// it as a subset. Candidates nobody contains are present with count 0.
pub fn count_support(transactions: &[Transaction], candidates: &BTreeSet<Itemset>) -> SupportTable {
    let mut counts = vec![0usize; candidates.len()];

    for tx in transactions {
        for (slot, candidate) in counts.iter_mut().zip(candidates) {
            if candidate.is_subset_of(tx) {
                *slot += 1;
            }
        }
    }

    candidates.iter().cloned().zip(counts).collect()
}

/// Keep entries with `count >= min_support_count`.
pub fn filter_frequent(tally: SupportTable, min_support_count: usize) -> SupportTable {
    tally
        .into_iter()
        .filter(|(_, count)| *count >= min_support_count)
        .collect()
}
