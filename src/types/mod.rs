pub mod error;
pub mod itemset;
pub mod rule;
pub mod support;

pub use error::MiningError;
pub use itemset::{Item, Itemset, Transaction};
pub use rule::AssociationRule;
pub use support::SupportTable;
