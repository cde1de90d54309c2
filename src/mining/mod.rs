pub mod candidates;
pub mod support;

use std::collections::BTreeSet;

use crate::types::error::validate_min_support;
use crate::types::{Itemset, MiningError, SupportTable, Transaction};
pub use candidates::{initial_candidates, join_candidates};
pub use support::{count_support, filter_frequent};

/// The frequent itemsets of one cardinality.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentLevel {
    pub size: usize,
    pub itemsets: SupportTable,
}

/// Terminal output of a mining run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrequentItemsets {
    /// Every frequent itemset from every productive level.
    pub all: SupportTable,
    /// Only the itemsets of the last productive level.
    pub last_level: SupportTable,
    /// Number of productive levels.
    pub levels: usize,
}

/// Level-wise miner. Each call to `next` runs one full level: generate
/// candidates, count them, filter by the threshold.
///
/// The iterator ends at the first level with no surviving itemset. A caller
/// that needs cancellation simply stops pulling levels.
///
/// This type does not validate its threshold. With `min_support_count == 0`
/// every candidate survives; the run still terminates once the candidate
/// size exceeds the number of distinct items.
pub struct Levels<'a> {
    transactions: &'a [Transaction],
    min_support_count: usize,
    k: usize,
    basis: Vec<Itemset>,
    done: bool,
}

impl<'a> Levels<'a> {
    pub fn new(transactions: &'a [Transaction], min_support_count: usize) -> Self {
        Self {
            transactions,
            min_support_count,
            k: 1,
            basis: Vec::new(),
            done: false,
        }
    }

    /// Cardinality of the level the next call to `next` will compute.
    pub fn next_size(&self) -> usize {
        self.k
    }

    fn candidates(&self) -> BTreeSet<Itemset> {
        if self.k == 1 {
            initial_candidates(self.transactions)
        } else {
            join_candidates(&self.basis, self.k)
        }
    }
}

impl Iterator for Levels<'_> {
    type Item = FrequentLevel;

    fn next(&mut self) -> Option<FrequentLevel> {
        if self.done {
            return None;
        }

        let candidates = self.candidates();
        if candidates.is_empty() {
            tracing::debug!(level = self.k, "no candidates, mining complete");
            self.done = true;
            return None;
        }

        let tally = count_support(self.transactions, &candidates);
        let frequent = filter_frequent(tally, self.min_support_count);

        tracing::debug!(
            level = self.k,
            candidates = candidates.len(),
            frequent = frequent.len(),
            min_support_count = self.min_support_count,
            "level counted"
        );

        if frequent.is_empty() {
            self.done = true;
            return None;
        }

        let level = FrequentLevel {
            size: self.k,
            itemsets: frequent,
        };
        self.basis = level.itemsets.itemsets().cloned().collect();
        self.k += 1;

        Some(level)
    }
}

/// Run the level-wise loop to completion.
///
/// An empty transaction collection is not an error; it yields empty tables.
pub fn mine_frequent_itemsets(
    transactions: &[Transaction],
    min_support_count: usize,
) -> Result<FrequentItemsets, MiningError> {
    validate_min_support(min_support_count)?;

    let mut result = FrequentItemsets::default();
    for level in Levels::new(transactions, min_support_count) {
        result.all.extend(level.itemsets.clone());
        result.last_level = level.itemsets;
        result.levels += 1;
    }

    Ok(result)
}
