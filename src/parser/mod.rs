mod extract;
mod normalize;
mod transaction;

pub use extract::parse_description;
pub use normalize::normalize;
pub use transaction::{ParsedTransaction, TransactionType};
