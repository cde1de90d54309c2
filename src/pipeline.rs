use thiserror::Error;

use crate::config::{MiningConfig, RuleSource};
use crate::mining::mine_frequent_itemsets;
use crate::report::{MiningReport, ReportError};
use crate::rules::{generate_rules, generate_rules_from};
use crate::types::{MiningError, Transaction};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Mining(#[from] MiningError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Mine, derive rules, and bundle the result for one config.
///
/// Holds nothing but the config; every `run` starts from scratch.
#[derive(Debug, Clone)]
pub struct Apriori {
    config: MiningConfig,
}

impl Apriori {
    pub fn new(config: MiningConfig) -> Result<Self, MiningError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MiningConfig {
        &self.config
    }

    pub fn run(&self, transactions: &[Transaction]) -> Result<MiningReport, PipelineError> {
        let frequent = mine_frequent_itemsets(transactions, self.config.min_support_count)?;

        let rules = match self.config.rule_source {
            RuleSource::AllFrequent => generate_rules(&frequent.all, self.config.min_confidence)?,
            RuleSource::LastLevel => generate_rules_from(
                &frequent.last_level,
                &frequent.all,
                self.config.min_confidence,
            )?,
        };

        let report = MiningReport::build(&self.config, transactions.len(), &frequent, &rules)?;

        tracing::info!(
            transactions = transactions.len(),
            levels = frequent.levels,
            frequent_itemsets = report.summary.frequent_itemset_count,
            rules = report.summary.rule_count,
            digest = %report.summary.run_digest,
            "mining run complete"
        );

        Ok(report)
    }
}
