use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// 某用户某类型一天的汇总
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub sum_amount: f64,
    pub count_records: i64,
}

/// 汇总结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total: f64,
    /// 按有记录的天数平均，不是按笔数
    pub average: f64,
    pub count: i64,
}
