use crate::db::DynTransactionStore;
use crate::error::{
    ServiceError, MESSAGE_INVALID_BODY, MESSAGE_INVALID_TRANSACTION_ID,
    MESSAGE_INVALID_TRANSACTION_TYPE,
};
use crate::models::{NewIncome, NewTransaction, Summary, Transaction, TransactionType, TransactionUpdate};
use crate::service::{parse_spender_id, SummaryService, TransactionService};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Json, Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

/// 列表接口的查询参数
#[derive(Debug, Deserialize)]
pub struct TransactionTypeQuery {
    #[serde(default)]
    pub transaction_type: String,
}

fn decode_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ServiceError> {
    body.map(|Json(value)| value).map_err(|e| {
        tracing::error!("Invalid request body: {}", e);
        ServiceError::invalid_request(MESSAGE_INVALID_BODY)
    })
}

fn decode_type_query(
    query: Result<Query<TransactionTypeQuery>, QueryRejection>,
) -> Result<String, ServiceError> {
    query.map(|Query(q)| q.transaction_type).map_err(|e| {
        tracing::error!("Invalid query string: {}", e);
        ServiceError::invalid_request(MESSAGE_INVALID_TRANSACTION_TYPE)
    })
}

fn parse_transaction_id(raw: &str) -> Result<i64, ServiceError> {
    raw.trim().parse().map_err(|_| {
        tracing::error!("Invalid transaction id {:?}", raw);
        ServiceError::invalid_request(MESSAGE_INVALID_TRANSACTION_ID)
    })
}

/// 健康检查 (ping 存储)
pub async fn health_check(State(store): State<DynTransactionStore>) -> Response {
    match store.ping().await {
        Ok(()) => (StatusCode::OK, "OK").into_response(),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// 创建交易: POST /transactions, 成功返回 201 无响应体
pub async fn create_transaction(
    State(service): State<Arc<TransactionService>>,
    body: Result<Json<NewTransaction>, JsonRejection>,
) -> Result<StatusCode, ServiceError> {
    let candidate = decode_body(body)?;
    service.create(candidate).await?;
    Ok(StatusCode::CREATED)
}

/// 创建收入: POST /incomes, 成功返回 201 和入库记录
pub async fn create_income(
    State(service): State<Arc<TransactionService>>,
    body: Result<Json<NewIncome>, JsonRejection>,
) -> Result<(StatusCode, Json<Transaction>), ServiceError> {
    let income = decode_body(body)?;
    let created = service.create_income(income).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// 按类型查询: GET /transactions?transaction_type=EXPENSE|INCOME
pub async fn list_transactions(
    State(service): State<Arc<TransactionService>>,
    query: Result<Query<TransactionTypeQuery>, QueryRejection>,
) -> Result<Json<Vec<Transaction>>, ServiceError> {
    let transaction_type = decode_type_query(query)?;
    let transactions = service.list_by_type(&transaction_type).await?;
    Ok(Json(transactions))
}

/// 按类型和用户查询: GET /spenders/:spender_id/transactions?transaction_type=EXPENSE|INCOME
pub async fn list_spender_transactions(
    State(service): State<Arc<TransactionService>>,
    Path(spender_id): Path<String>,
    query: Result<Query<TransactionTypeQuery>, QueryRejection>,
) -> Result<Json<Vec<Transaction>>, ServiceError> {
    let spender_id = parse_spender_id(&spender_id)?;
    let transaction_type = decode_type_query(query)?;
    let transactions = service
        .list_by_type_and_spender(&transaction_type, spender_id)
        .await?;
    Ok(Json(transactions))
}

/// 更新交易: PUT /spenders/:spender_id/transactions/:trans_id
pub async fn update_transaction(
    State(service): State<Arc<TransactionService>>,
    Path((spender_id, trans_id)): Path<(String, String)>,
    body: Result<Json<TransactionUpdate>, JsonRejection>,
) -> Result<Json<&'static str>, ServiceError> {
    let spender_id = parse_spender_id(&spender_id)?;
    let trans_id = parse_transaction_id(&trans_id)?;
    let fields = decode_body(body)?;

    service.update(trans_id, spender_id, fields).await?;
    Ok(Json("Update success"))
}

/// 删除交易: DELETE /spenders/:spender_id/transactions/:trans_id
pub async fn delete_transaction(
    State(service): State<Arc<TransactionService>>,
    Path((spender_id, trans_id)): Path<(String, String)>,
) -> Result<Json<&'static str>, ServiceError> {
    let spender_id = parse_spender_id(&spender_id)?;
    let trans_id = parse_transaction_id(&trans_id)?;

    service.delete(trans_id, spender_id).await?;
    Ok(Json("Delete success"))
}

/// 支出汇总: GET /spenders/:spender_id/expenses/summary
pub async fn expense_summary(
    State(service): State<Arc<SummaryService>>,
    Path(spender_id): Path<String>,
) -> Result<Json<Summary>, ServiceError> {
    let summary = service.summary(TransactionType::Expense, &spender_id).await?;
    Ok(Json(summary))
}

/// 收入汇总: GET /spenders/:spender_id/incomes/summary
pub async fn income_summary(
    State(service): State<Arc<SummaryService>>,
    Path(spender_id): Path<String>,
) -> Result<Json<Summary>, ServiceError> {
    let summary = service.summary(TransactionType::Income, &spender_id).await?;
    Ok(Json(summary))
}
