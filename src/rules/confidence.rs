/// support(A ∪ B) / support(A).
///
/// `None` when the antecedent support is zero, or smaller than the support
/// of the full itemset. Neither can come out of a mining run (the threshold
/// is at least 1 and support is anti-monotone) but a hand-built table may
/// hold them.
pub fn confidence(itemset_support: usize, antecedent_support: usize) -> Option<f64> {
    if antecedent_support == 0 || itemset_support > antecedent_support {
        return None;
    }
    let value = itemset_support as f64 / antecedent_support as f64;
    debug_assert!((0.0..=1.0).contains(&value), "confidence {value} out of range [0.0, 1.0]");
    Some(value)
}
