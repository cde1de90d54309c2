use sha2::{Digest, Sha256};

use crate::config::MiningConfig;
use super::{FrequentItemsetEntry, RuleEntry};

/// Content hash of a run: config JSON, then one line per frequent itemset
/// and one per rule, in output order. Item lists are written as JSON arrays
/// so separators inside item names cannot collide.
///
/// `created_at` is not part of the input, so identical runs hash equal.
pub fn run_digest(
    config: &MiningConfig,
    frequent_itemsets: &[FrequentItemsetEntry],
    rules: &[RuleEntry],
) -> Result<String, serde_json::Error> {
    let mut hasher = Sha256::new();

    let config_json = serde_json::to_vec(config)?;
    hasher.update(&config_json);

    for entry in frequent_itemsets {
        let items = serde_json::to_string(&entry.items)?;
        let line = format!("set:{}:{}\n", items, entry.support_count);
        hasher.update(line.as_bytes());
    }

    for rule in rules {
        let antecedent = serde_json::to_string(&rule.antecedent)?;
        let consequent = serde_json::to_string(&rule.consequent)?;
        // Fixed precision keeps the digest independent of float formatting.
        let line = format!(
            "rule:{}=>{}:{}:{:.12}\n",
            antecedent,
            consequent,
            rule.support_count,
            rule.confidence
        );
        hasher.update(line.as_bytes());
    }

    let hash = hasher.finalize();
    Ok(format!("sha256:{}", hex::encode(hash)))
}
