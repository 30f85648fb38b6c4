pub mod memory;
pub mod pool;
pub mod queries;
pub mod schema;
pub mod store;

pub use memory::MemoryTransactionStore;
pub use pool::create_pool;
pub use queries::PgTransactionStore;
pub use store::{DynTransactionStore, RowsAffected, StoreError, TransactionStore};
