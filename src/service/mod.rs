pub mod summary;
pub mod transaction;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_utils;

pub use summary::{parse_spender_id, summarize, SummaryService};
pub use transaction::TransactionService;
