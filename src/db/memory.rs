use crate::db::store::{RowsAffected, StoreError, TransactionStore};
use crate::models::{DailyBucket, NewTransaction, Transaction, TransactionType, TransactionUpdate};
use async_trait::async_trait;
use chrono::{FixedOffset, NaiveDate, Offset, Utc};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// 内存交易存储 (测试、无数据库本地运行)
///
/// `offset` 相当于 PostgreSQL 会话时区: 按它截断到天，入库日期也转换到该时区
pub struct MemoryTransactionStore {
    offset: FixedOffset,
    state: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    last_id: i64,
    rows: Vec<Transaction>,
}

impl Default for MemoryTransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTransactionStore {
    pub fn new() -> Self {
        Self::with_offset(Utc.fix())
    }

    pub fn with_offset(offset: FixedOffset) -> Self {
        Self {
            offset,
            state: Mutex::new(MemoryState::default()),
        }
    }

    /// 全部记录快照 (按 id 排序)
    pub fn rows(&self) -> Result<Vec<Transaction>, StoreError> {
        Ok(self.lock()?.rows.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>, StoreError> {
        self.state.lock().map_err(|_| StoreError::Lock)
    }

    fn select<F>(&self, predicate: F) -> Result<Vec<Transaction>, StoreError>
    where
        F: Fn(&Transaction) -> bool,
    {
        let state = self.lock()?;
        Ok(state.rows.iter().filter(|t| predicate(t)).cloned().collect())
    }
}

#[async_trait]
impl TransactionStore for MemoryTransactionStore {
    async fn insert(&self, record: &NewTransaction) -> Result<i64, StoreError> {
        let mut state = self.lock()?;
        state.last_id += 1;
        let id = state.last_id;
        let mut row = Transaction::from_new(id, record.clone());
        row.date = row.date.with_timezone(&self.offset);
        state.rows.push(row);
        Ok(id)
    }

    async fn select_by_type(&self, kind: TransactionType) -> Result<Vec<Transaction>, StoreError> {
        self.select(|t| t.transaction_type == kind)
    }

    async fn select_by_type_and_spender(
        &self,
        kind: TransactionType,
        spender_id: i64,
    ) -> Result<Vec<Transaction>, StoreError> {
        self.select(|t| t.transaction_type == kind && t.spender_id == spender_id)
    }

    async fn update(
        &self,
        id: i64,
        spender_id: i64,
        fields: &TransactionUpdate,
    ) -> Result<RowsAffected, StoreError> {
        let mut state = self.lock()?;
        let mut affected = 0;
        for row in state
            .rows
            .iter_mut()
            .filter(|t| t.id == id && t.spender_id == spender_id)
        {
            row.date = fields.date.with_timezone(&self.offset);
            row.amount = fields.amount;
            row.category = fields.category.clone();
            row.note = fields.note.clone();
            row.image_url = fields.image_url.clone();
            affected += 1;
        }
        Ok(affected)
    }

    async fn delete(&self, id: i64, spender_id: i64) -> Result<RowsAffected, StoreError> {
        let mut state = self.lock()?;
        let before = state.rows.len();
        state
            .rows
            .retain(|t| !(t.id == id && t.spender_id == spender_id));
        Ok((before - state.rows.len()) as RowsAffected)
    }

    async fn aggregate_daily(
        &self,
        kind: TransactionType,
        spender_id: i64,
    ) -> Result<Vec<DailyBucket>, StoreError> {
        let state = self.lock()?;
        let mut days: BTreeMap<NaiveDate, (f64, i64)> = BTreeMap::new();
        for row in state
            .rows
            .iter()
            .filter(|t| t.transaction_type == kind && t.spender_id == spender_id)
        {
            let day = row.date.with_timezone(&self.offset).date_naive();
            let entry = days.entry(day).or_insert((0.0, 0));
            entry.0 += row.amount;
            entry.1 += 1;
        }

        Ok(days
            .into_iter()
            .map(|(date, (sum_amount, count_records))| DailyBucket {
                date,
                sum_amount,
                count_records,
            })
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.lock().map(|_| ())
    }
}
