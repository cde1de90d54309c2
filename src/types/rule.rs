use std::fmt;

use super::itemset::Itemset;

/// "If `antecedent` then `consequent`".
///
/// The two sides are disjoint and their union is an itemset of the support
/// table the rule was derived from. `support_count` is the support of that
/// union.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationRule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    pub support_count: usize,
    pub confidence: f64,
}

impl AssociationRule {
    pub fn union(&self) -> Itemset {
        self.antecedent.union(&self.consequent)
    }
}

impl fmt::Display for AssociationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} => {} (confidence {:.3})",
            self.antecedent, self.consequent, self.confidence
        )
    }
}
