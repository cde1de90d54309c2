use serde::{Deserialize, Serialize};

/// One raw input record: a single item belonging to a transaction.
///
/// Only the transaction number and the item are read. Any other column in
/// the source record (timestamps, day part, ...) is ignored during
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRow {
    #[serde(rename = "TransactionNo", deserialize_with = "string_or_number")]
    pub transaction_no: String,
    #[serde(rename = "Items")]
    pub item: String,
}

impl TransactionRow {
    pub fn new(transaction_no: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            transaction_no: transaction_no.into(),
            item: item.into(),
        }
    }
}

// Transaction numbers show up as JSON numbers or strings depending on the
// exporter.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        String(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::String(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
