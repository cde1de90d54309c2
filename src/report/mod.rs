pub mod digest;

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{MiningConfig, RuleSource};
use crate::mining::FrequentItemsets;
use crate::types::{AssociationRule, Itemset};
pub use digest::run_digest;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A frequent itemset as exposed to presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequentItemsetEntry {
    pub items: Vec<String>,
    pub support_count: usize,
}

/// An association rule as exposed to presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleEntry {
    pub antecedent: Vec<String>,
    pub consequent: Vec<String>,
    pub support_count: usize,
    pub confidence: f64,
}

/// Parameters and counts describing one mining run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiningSummary {
    pub min_support_count: usize,
    pub min_confidence: f64,
    pub rule_source: RuleSource,

    pub transactions: usize,
    pub levels: usize,

    pub frequent_itemset_count: usize,
    pub last_level_count: usize,
    pub rule_count: usize,

    pub run_digest: String,
    pub created_at: DateTime<Utc>, // informational only
}

/// The full result bundle of a mining run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiningReport {
    pub frequent_itemsets: Vec<FrequentItemsetEntry>,
    pub rules: Vec<RuleEntry>,
    pub summary: MiningSummary,
}

fn item_strings(itemset: &Itemset) -> Vec<String> {
    itemset.iter().map(|item| item.as_str().to_string()).collect()
}

impl From<&AssociationRule> for RuleEntry {
    fn from(rule: &AssociationRule) -> Self {
        RuleEntry {
            antecedent: item_strings(&rule.antecedent),
            consequent: item_strings(&rule.consequent),
            support_count: rule.support_count,
            confidence: rule.confidence,
        }
    }
}

impl MiningReport {
    pub fn build(
        config: &MiningConfig,
        transactions: usize,
        frequent: &FrequentItemsets,
        rules: &[AssociationRule],
    ) -> Result<Self, ReportError> {
        let frequent_itemsets: Vec<FrequentItemsetEntry> = frequent
            .all
            .iter()
            .map(|(itemset, support_count)| FrequentItemsetEntry {
                items: item_strings(itemset),
                support_count,
            })
            .collect();

        let rules: Vec<RuleEntry> = rules.iter().map(RuleEntry::from).collect();

        let run_digest = run_digest(config, &frequent_itemsets, &rules)?;

        let summary = MiningSummary {
            min_support_count: config.min_support_count,
            min_confidence: config.min_confidence,
            rule_source: config.rule_source,
            transactions,
            levels: frequent.levels,
            frequent_itemset_count: frequent_itemsets.len(),
            last_level_count: frequent.last_level.len(),
            rule_count: rules.len(),
            run_digest,
            created_at: Utc::now(),
        };

        Ok(MiningReport {
            frequent_itemsets,
            rules,
            summary,
        })
    }

    pub fn write_json(&self, path: &Path) -> Result<(), ReportError> {
        let f = fs::File::create(path)?;
        serde_json::to_writer_pretty(&f, self)?;
        f.sync_all()?;
        Ok(())
    }

    pub fn read_json(path: &Path) -> Result<Self, ReportError> {
        let f = fs::File::open(path)?;
        let report = serde_json::from_reader(std::io::BufReader::new(f))?;
        Ok(report)
    }
}
