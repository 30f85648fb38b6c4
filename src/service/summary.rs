use crate::db::DynTransactionStore;
use crate::error::ServiceError;
use crate::models::{DailyBucket, Summary, TransactionType};

/// 汇总服务: 按用户统计支出/收入
pub struct SummaryService {
    store: DynTransactionStore,
}

impl SummaryService {
    pub fn new(store: DynTransactionStore) -> Self {
        Self { store }
    }

    /// 某用户某类型的汇总
    ///
    /// `raw_spender_id` 直接来自请求路径，必须是非零整数
    pub async fn summary(
        &self,
        kind: TransactionType,
        raw_spender_id: &str,
    ) -> Result<Summary, ServiceError> {
        let spender_id = parse_spender_id(raw_spender_id)?;

        let buckets = self
            .store
            .aggregate_daily(kind, spender_id)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Aggregate daily {} buckets for spender {} failed: {}",
                    kind,
                    spender_id,
                    e
                );
                e
            })?;

        Ok(summarize(&buckets))
    }
}

/// 解析路径中的 spender id (0 不合法)
pub fn parse_spender_id(raw: &str) -> Result<i64, ServiceError> {
    match raw.trim().parse::<i64>() {
        Ok(0) | Err(_) => {
            tracing::error!("Invalid spender id {:?}", raw);
            Err(ServiceError::InvalidSpender)
        }
        Ok(id) => Ok(id),
    }
}

/// 按天汇总 -> 总计
///
/// 平均值 = 总额 / 有记录的天数 (不是笔数，也不是自然天数)
/// 先按日期排序再累加，输入顺序不同时浮点结果也一致
pub fn summarize(buckets: &[DailyBucket]) -> Summary {
    if buckets.is_empty() {
        return Summary::default();
    }

    let mut ordered: Vec<&DailyBucket> = buckets.iter().collect();
    ordered.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.sum_amount.total_cmp(&b.sum_amount))
            .then_with(|| a.count_records.cmp(&b.count_records))
    });

    let total: f64 = ordered.iter().map(|b| b.sum_amount).sum();
    let count: i64 = ordered.iter().map(|b| b.count_records).sum();

    Summary {
        total,
        average: total / buckets.len() as f64,
        count,
    }
}
