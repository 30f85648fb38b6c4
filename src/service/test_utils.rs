//! 服务层测试用的 store

use crate::db::{RowsAffected, StoreError, TransactionStore};
use crate::models::{DailyBucket, NewTransaction, Transaction, TransactionType, TransactionUpdate};
use async_trait::async_trait;

/// 所有调用都失败 (连接池取不到连接)
pub(crate) struct FailingStore;

fn unavailable() -> StoreError {
    StoreError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl TransactionStore for FailingStore {
    async fn insert(&self, _: &NewTransaction) -> Result<i64, StoreError> {
        Err(unavailable())
    }

    async fn select_by_type(&self, _: TransactionType) -> Result<Vec<Transaction>, StoreError> {
        Err(unavailable())
    }

    async fn select_by_type_and_spender(
        &self,
        _: TransactionType,
        _: i64,
    ) -> Result<Vec<Transaction>, StoreError> {
        Err(unavailable())
    }

    async fn update(&self, _: i64, _: i64, _: &TransactionUpdate) -> Result<RowsAffected, StoreError> {
        Err(unavailable())
    }

    async fn delete(&self, _: i64, _: i64) -> Result<RowsAffected, StoreError> {
        Err(unavailable())
    }

    async fn aggregate_daily(
        &self,
        _: TransactionType,
        _: i64,
    ) -> Result<Vec<DailyBucket>, StoreError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(unavailable())
    }
}

/// 任何调用都 panic，用于校验请求在访问存储前就被拒绝
pub(crate) struct UnreachableStore;

#[async_trait]
impl TransactionStore for UnreachableStore {
    async fn insert(&self, _: &NewTransaction) -> Result<i64, StoreError> {
        unreachable!("insert must not be called")
    }

    async fn select_by_type(&self, _: TransactionType) -> Result<Vec<Transaction>, StoreError> {
        unreachable!("select_by_type must not be called")
    }

    async fn select_by_type_and_spender(
        &self,
        _: TransactionType,
        _: i64,
    ) -> Result<Vec<Transaction>, StoreError> {
        unreachable!("select_by_type_and_spender must not be called")
    }

    async fn update(&self, _: i64, _: i64, _: &TransactionUpdate) -> Result<RowsAffected, StoreError> {
        unreachable!("update must not be called")
    }

    async fn delete(&self, _: i64, _: i64) -> Result<RowsAffected, StoreError> {
        unreachable!("delete must not be called")
    }

    async fn aggregate_daily(
        &self,
        _: TransactionType,
        _: i64,
    ) -> Result<Vec<DailyBucket>, StoreError> {
        unreachable!("aggregate_daily must not be called")
    }

    async fn ping(&self) -> Result<(), StoreError> {
        unreachable!("ping must not be called")
    }
}
