pub mod handlers;

use crate::db::DynTransactionStore;
use crate::service::{SummaryService, TransactionService};
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub use handlers::*;

/// 路由前缀
pub const API_PREFIX: &str = "/api/v1";

/// 构建路由 (交易、汇总、健康检查共用同一个 store)
pub fn router(store: DynTransactionStore) -> Router {
    let transaction_service = Arc::new(TransactionService::new(store.clone()));
    let summary_service = Arc::new(SummaryService::new(store.clone()));

    let transaction_routes = Router::new()
        .route("/transactions", post(create_transaction).get(list_transactions))
        .route("/incomes", post(create_income))
        .route(
            "/spenders/:spender_id/transactions",
            get(list_spender_transactions),
        )
        .route(
            "/spenders/:spender_id/transactions/:trans_id",
            put(update_transaction).delete(delete_transaction),
        )
        .with_state(transaction_service);

    let summary_routes = Router::new()
        .route("/spenders/:spender_id/expenses/summary", get(expense_summary))
        .route("/spenders/:spender_id/incomes/summary", get(income_summary))
        .with_state(summary_service);

    let health_routes = Router::new()
        .route("/health", get(health_check))
        .with_state(store);

    let v1 = Router::new()
        .merge(health_routes)
        .merge(transaction_routes)
        .merge(summary_routes);

    Router::new()
        .nest(API_PREFIX, v1)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
