use crate::db::{DynTransactionStore, StoreError};
use crate::error::{ServiceError, MESSAGE_INVALID_TRANSACTION_TYPE};
use crate::models::{NewIncome, NewTransaction, Transaction, TransactionType, TransactionUpdate};
use crate::service::validation::{validate_income, validate_transaction, ValidationError};

/// 交易服务: 创建、查询、更新、删除
pub struct TransactionService {
    store: DynTransactionStore,
}

fn parse_kind(raw: &str) -> Result<TransactionType, ServiceError> {
    raw.parse()
        .map_err(|_| ServiceError::invalid_request(MESSAGE_INVALID_TRANSACTION_TYPE))
}

impl TransactionService {
    pub fn new(store: DynTransactionStore) -> Self {
        Self { store }
    }

    /// 创建交易 (类型由请求体指定)
    pub async fn create(&self, candidate: NewTransaction) -> Result<Transaction, ServiceError> {
        validate_transaction(&candidate)?;
        if candidate.spender_id == 0 {
            return Err(ValidationError::SpenderRequired.into());
        }
        self.insert(candidate).await
    }

    /// 创建收入，类型强制为 `INCOME`，忽略调用方传入的 `transaction_type`
    pub async fn create_income(&self, income: NewIncome) -> Result<Transaction, ServiceError> {
        validate_income(&income)?;

        if let Some(requested) = income
            .transaction_type
            .as_deref()
            .filter(|t| *t != TransactionType::Income.as_str())
        {
            tracing::debug!("Overriding transaction_type {} with INCOME", requested);
        }
        let record = NewTransaction {
            date: income.date,
            amount: income.amount,
            category: income.category,
            transaction_type: TransactionType::Income,
            note: income.note,
            image_url: income.image_url,
            spender_id: income.spender_id,
        };

        self.insert(record).await
    }

    async fn insert(&self, record: NewTransaction) -> Result<Transaction, ServiceError> {
        let id = self.store.insert(&record).await.map_err(|e| {
            tracing::error!(
                "Insert {} transaction for spender {} failed: {}",
                record.transaction_type,
                record.spender_id,
                e
            );
            e
        })?;

        tracing::info!(
            "Created {} transaction {} for spender {}",
            record.transaction_type,
            id,
            record.spender_id
        );
        Ok(Transaction::from_new(id, record))
    }

    /// 按类型查询全部交易，`raw_type` 必须是 `EXPENSE` 或 `INCOME`
    pub async fn list_by_type(&self, raw_type: &str) -> Result<Vec<Transaction>, ServiceError> {
        let kind = parse_kind(raw_type)?;
        let transactions = self.store.select_by_type(kind).await.map_err(|e| {
            tracing::error!("Query {} transactions failed: {}", kind, e);
            e
        })?;
        Ok(transactions)
    }

    pub async fn list_by_type_and_spender(
        &self,
        raw_type: &str,
        spender_id: i64,
    ) -> Result<Vec<Transaction>, ServiceError> {
        let kind = parse_kind(raw_type)?;
        let transactions = self
            .store
            .select_by_type_and_spender(kind, spender_id)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Query {} transactions for spender {} failed: {}",
                    kind,
                    spender_id,
                    e
                );
                e
            })?;
        Ok(transactions)
    }

    pub async fn update(
        &self,
        id: i64,
        spender_id: i64,
        fields: TransactionUpdate,
    ) -> Result<(), ServiceError> {
        validate_transaction(&fields)?;

        let affected = self
            .store
            .update(id, spender_id, &fields)
            .await
            .map_err(|e| log_mutation_failure("update", id, spender_id, e))?;
        if affected == 0 {
            tracing::error!(
                "Can't update transaction by id = {} and spender_id = {}",
                id,
                spender_id
            );
            return Err(ServiceError::NotFound { id, spender_id });
        }

        tracing::info!("Updated transaction {} for spender {}", id, spender_id);
        Ok(())
    }

    pub async fn delete(&self, id: i64, spender_id: i64) -> Result<(), ServiceError> {
        let affected = self
            .store
            .delete(id, spender_id)
            .await
            .map_err(|e| log_mutation_failure("delete", id, spender_id, e))?;
        if affected == 0 {
            tracing::error!(
                "Can't delete transaction by id = {} and spender_id = {}",
                id,
                spender_id
            );
            return Err(ServiceError::NotFound { id, spender_id });
        }

        tracing::info!("Deleted transaction {} for spender {}", id, spender_id);
        Ok(())
    }
}

fn log_mutation_failure(operation: &str, id: i64, spender_id: i64, error: StoreError) -> StoreError {
    tracing::error!(
        "{} transaction {} for spender {} failed: {}",
        operation,
        id,
        spender_id,
        error
    );
    error
}
