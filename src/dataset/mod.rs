pub mod rows;

use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;

use crate::types::{Item, Itemset, Transaction};
pub use rows::TransactionRow;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid sample percentage: {0} (must be within [0, 100])")]
    InvalidPercentage(f64),
}

/// Read a JSON array of row records.
pub fn load_rows_json(path: &Path) -> Result<Vec<TransactionRow>, DatasetError> {
    let f = std::fs::File::open(path)?;
    let rows: Vec<TransactionRow> = serde_json::from_reader(std::io::BufReader::new(f))?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "rows loaded");
    Ok(rows)
}

/// The leading `floor(len * percentage / 100)` rows.
pub fn sample_rows(rows: &[TransactionRow], percentage: f64) -> Result<&[TransactionRow], DatasetError> {
    if !(0.0..=100.0).contains(&percentage) {
        return Err(DatasetError::InvalidPercentage(percentage));
    }
    let keep = (rows.len() as f64 * (percentage / 100.0)).floor() as usize;
    Ok(&rows[..keep.min(rows.len())])
}

/// Group rows into one transaction per transaction number.
///
/// Output is ordered by transaction number (string order); repeated items
/// within a transaction collapse.
pub fn aggregate_rows(rows: &[TransactionRow]) -> Vec<Transaction> {
    let mut grouped: BTreeMap<&str, Vec<Item>> = BTreeMap::new();
    for row in rows {
        grouped
            .entry(row.transaction_no.as_str())
            .or_default()
            .push(Item::new(row.item.as_str()));
    }

    grouped.into_values().map(Itemset::new).collect()
}
