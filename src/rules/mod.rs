pub mod confidence;

use crate::types::error::validate_min_confidence;
use crate::types::{AssociationRule, Itemset, MiningError, SupportTable};
pub use confidence::confidence;

/// Rules from every frequent itemset of cardinality two or more.
///
/// `frequent` must be the full accumulated table: antecedent supports are
/// looked up in it, and an antecedent it does not hold makes the rule
/// underivable (skipped, not an error).
pub fn generate_rules(
    frequent: &SupportTable,
    min_confidence: f64,
) -> Result<Vec<AssociationRule>, MiningError> {
    generate_rules_from(frequent, frequent, min_confidence)
}

/// Rules for the multi-item itemsets of `targets`, with antecedent supports
/// taken from `lookup`.
///
/// Used for the last-level-only mode: `targets` is the final level, `lookup`
/// the accumulated table.
pub fn generate_rules_from(
    targets: &SupportTable,
    lookup: &SupportTable,
    min_confidence: f64,
) -> Result<Vec<AssociationRule>, MiningError> {
    validate_min_confidence(min_confidence)?;

    let mut rules = Vec::new();
    for (itemset, support) in targets.multi_item() {
        rules_for_itemset(itemset, support, lookup, min_confidence, &mut rules);
    }

    tracing::debug!(
        targets = targets.len(),
        rules = rules.len(),
        min_confidence,
        "rule generation complete"
    );

    Ok(rules)
}

/// Antecedents from size n-1 down to 1; each size in lexicographic order.
fn rules_for_itemset(
    itemset: &Itemset,
    support: usize,
    lookup: &SupportTable,
    min_confidence: f64,
    out: &mut Vec<AssociationRule>,
) {
    for size in (1..itemset.len()).rev() {
        for antecedent in itemset.subsets_of_size(size) {
            let Some(antecedent_support) = lookup.support(&antecedent) else {
                tracing::trace!(%itemset, %antecedent, "antecedent support unknown, rule skipped");
                continue;
            };
            let Some(conf) = confidence(support, antecedent_support) else {
                tracing::trace!(
                    %itemset,
                    %antecedent,
                    support,
                    antecedent_support,
                    "antecedent support inconsistent, rule skipped"
                );
                continue;
            };

            if conf >= min_confidence {
                let consequent = itemset.difference(&antecedent);
                out.push(AssociationRule {
                    antecedent,
                    consequent,
                    support_count: support,
                    confidence: conf,
                });
            }
        }
    }
}
