use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MiningError {
    #[error("Invalid minimum support count: {0} (must be at least 1)")]
    InvalidMinSupport(usize),

    #[error("Invalid minimum confidence: {0} (must be within [0.0, 1.0])")]
    InvalidMinConfidence(f64),
}

/// Minimum support is an absolute transaction count and must be positive.
pub fn validate_min_support(min_support_count: usize) -> Result<(), MiningError> {
    if min_support_count == 0 {
        return Err(MiningError::InvalidMinSupport(min_support_count));
    }
    Ok(())
}

/// Confidence thresholds are rejected, never clamped. NaN fails the range
/// check.
pub fn validate_min_confidence(min_confidence: f64) -> Result<(), MiningError> {
    if !(0.0..=1.0).contains(&min_confidence) {
        return Err(MiningError::InvalidMinConfidence(min_confidence));
    }
    Ok(())
}
