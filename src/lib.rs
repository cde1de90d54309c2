//! Deterministic frequent itemset mining and association rule generation.
//!
//! `apriori-core` takes already-aggregated transactions (each an unordered
//! group of item identifiers), finds every itemset whose support count
//! meets a threshold with a level-wise candidate/count/filter loop, and
//! derives "if A then B" rules whose confidence meets a second threshold.
//! All operations are deterministic: identical inputs produce identical
//! tables, rules and report digests.

pub mod config;
pub mod dataset;
pub mod mining;
pub mod pipeline;
pub mod report;
pub mod rules;
pub mod types;

pub use mining::{mine_frequent_itemsets, FrequentItemsets};
pub use rules::generate_rules;
