pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod service;

pub use config::AppConfig;
pub use db::{create_pool, DynTransactionStore, MemoryTransactionStore, PgTransactionStore};
pub use error::ServiceError;
pub use service::{SummaryService, TransactionService};
