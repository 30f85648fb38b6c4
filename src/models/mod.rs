pub mod summary;
pub mod transaction;

pub use summary::{DailyBucket, Summary};
pub use transaction::{
    NewIncome, NewTransaction, ParseTransactionTypeError, Transaction, TransactionType,
    TransactionUpdate,
};
