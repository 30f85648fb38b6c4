use crate::models::{DailyBucket, NewTransaction, Transaction, TransactionType, TransactionUpdate};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionStore = Arc<dyn TransactionStore>;

/// 更新/删除影响的行数，0 表示没有匹配
pub type RowsAffected = u64;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// 连接、执行、约束或解码失败
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("could not acquire the store lock")]
    Lock,
}

/// 交易存储，每次调用一次往返
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// 插入一行，返回生成的 id
    async fn insert(&self, record: &NewTransaction) -> Result<i64, StoreError>;

    /// 所有用户中 `kind` 类型的记录
    async fn select_by_type(&self, kind: TransactionType) -> Result<Vec<Transaction>, StoreError>;

    async fn select_by_type_and_spender(
        &self,
        kind: TransactionType,
        spender_id: i64,
    ) -> Result<Vec<Transaction>, StoreError>;

    /// 按 `id` 和 `spender_id` 同时匹配更新
    async fn update(
        &self,
        id: i64,
        spender_id: i64,
        fields: &TransactionUpdate,
    ) -> Result<RowsAffected, StoreError>;

    async fn delete(&self, id: i64, spender_id: i64) -> Result<RowsAffected, StoreError>;

    /// 按天统计金额和笔数，日期升序
    async fn aggregate_daily(
        &self,
        kind: TransactionType,
        spender_id: i64,
    ) -> Result<Vec<DailyBucket>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
