use crate::db::store::{RowsAffected, StoreError, TransactionStore};
use crate::models::{DailyBucket, NewTransaction, Transaction, TransactionType, TransactionUpdate};
use async_trait::async_trait;
use futures::{future, TryStreamExt};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

/// 交易表查询，列顺序与 [`decode_transaction`] 一致
macro_rules! select_transactions {
    ($filter:literal) => {
        concat!(
            r#"SELECT id, date, amount, category, note, image_url, spender_id, transaction_type
            FROM "transaction"
            WHERE "#,
            $filter,
            "\n            ORDER BY id"
        )
    };
}

const INSERT_TRANSACTION: &str = r#"
    INSERT INTO "transaction" (date, amount, category, transaction_type, note, image_url, spender_id)
    VALUES ($1, $2, $3, $4, $5, $6, $7)
    RETURNING id
"#;

const SELECT_BY_TYPE: &str = select_transactions!("transaction_type = $1");

const SELECT_BY_TYPE_AND_SPENDER: &str =
    select_transactions!("transaction_type = $1 AND spender_id = $2");

const UPDATE_TRANSACTION: &str = r#"
    UPDATE "transaction"
    SET date = $1, amount = $2, category = $3, note = $4, image_url = $5
    WHERE id = $6 AND spender_id = $7
"#;

const DELETE_TRANSACTION: &str = r#"
    DELETE FROM "transaction"
    WHERE id = $1 AND spender_id = $2
"#;

/// 按会话时区截断到天
const AGGREGATE_DAILY: &str = r#"
    SELECT date_trunc('day', date)::date AS date,
           SUM(amount) AS sum_amount,
           COUNT(*) AS count_records
    FROM "transaction"
    WHERE transaction_type = $1 AND spender_id = $2
    GROUP BY date_trunc('day', date)::date
    ORDER BY 1
"#;

/// PostgreSQL 交易存储
#[derive(Clone)]
pub struct PgTransactionStore {
    pool: PgPool,
}

impl PgTransactionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_transactions(
        &self,
        query: sqlx::query::Query<'_, sqlx::Postgres, sqlx::postgres::PgArguments>,
    ) -> Result<Vec<Transaction>, StoreError> {
        query
            .fetch(&self.pool)
            .map_err(StoreError::from)
            .and_then(|row| future::ready(decode_transaction(&row).map_err(StoreError::from)))
            .try_collect()
            .await
    }
}

/// 按列位置解析 `select_transactions!` 的结果行
fn decode_transaction(row: &PgRow) -> Result<Transaction, sqlx::Error> {
    let raw_type: String = row.try_get(7)?;
    let transaction_type = raw_type
        .parse::<TransactionType>()
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: "7".to_string(),
            source: Box::new(e),
        })?;

    Ok(Transaction {
        id: row.try_get(0)?,
        date: row.try_get(1)?,
        amount: row.try_get(2)?,
        category: row.try_get(3)?,
        note: row.try_get(4)?,
        image_url: row.try_get(5)?,
        spender_id: row.try_get(6)?,
        transaction_type,
    })
}

#[async_trait]
impl TransactionStore for PgTransactionStore {
    async fn insert(&self, record: &NewTransaction) -> Result<i64, StoreError> {
        let id: i64 = sqlx::query_scalar(INSERT_TRANSACTION)
            .bind(record.date)
            .bind(record.amount)
            .bind(&record.category)
            .bind(record.transaction_type.as_str())
            .bind(record.note.as_deref())
            .bind(record.image_url.as_deref())
            .bind(record.spender_id)
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!(
            "Inserted {} transaction {} for spender {}",
            record.transaction_type,
            id,
            record.spender_id
        );
        Ok(id)
    }

    async fn select_by_type(&self, kind: TransactionType) -> Result<Vec<Transaction>, StoreError> {
        self.fetch_transactions(sqlx::query(SELECT_BY_TYPE).bind(kind.as_str()))
            .await
    }

    async fn select_by_type_and_spender(
        &self,
        kind: TransactionType,
        spender_id: i64,
    ) -> Result<Vec<Transaction>, StoreError> {
        self.fetch_transactions(
            sqlx::query(SELECT_BY_TYPE_AND_SPENDER)
                .bind(kind.as_str())
                .bind(spender_id),
        )
        .await
    }

    async fn update(
        &self,
        id: i64,
        spender_id: i64,
        fields: &TransactionUpdate,
    ) -> Result<RowsAffected, StoreError> {
        let result = sqlx::query(UPDATE_TRANSACTION)
            .bind(fields.date)
            .bind(fields.amount)
            .bind(&fields.category)
            .bind(fields.note.as_deref())
            .bind(fields.image_url.as_deref())
            .bind(id)
            .bind(spender_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64, spender_id: i64) -> Result<RowsAffected, StoreError> {
        let result = sqlx::query(DELETE_TRANSACTION)
            .bind(id)
            .bind(spender_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn aggregate_daily(
        &self,
        kind: TransactionType,
        spender_id: i64,
    ) -> Result<Vec<DailyBucket>, StoreError> {
        let buckets = sqlx::query_as::<_, DailyBucket>(AGGREGATE_DAILY)
            .bind(kind.as_str())
            .bind(spender_id)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("Spender {} has {} {} day buckets", spender_id, buckets.len(), kind);
        Ok(buckets)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
