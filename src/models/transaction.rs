use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 交易类型，原样存入 `transaction_type` 列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "EXPENSE")]
    Expense,
    #[serde(rename = "INCOME")]
    Income,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Expense => "EXPENSE",
            TransactionType::Income => "INCOME",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid transaction type")]
pub struct ParseTransactionTypeError;

/// 严格匹配大小写: `expense`、`Income` 都不接受
impl FromStr for TransactionType {
    type Err = ParseTransactionTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EXPENSE" => Ok(TransactionType::Expense),
            "INCOME" => Ok(TransactionType::Income),
            _ => Err(ParseTransactionTypeError),
        }
    }
}

/// 交易记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: DateTime<FixedOffset>,
    pub amount: f64,
    pub category: String,
    pub transaction_type: TransactionType,
    pub note: Option<String>,
    pub image_url: Option<String>,
    pub spender_id: i64,
}

impl Transaction {
    pub fn from_new(id: i64, record: NewTransaction) -> Self {
        Self {
            id,
            date: record.date,
            amount: record.amount,
            category: record.category,
            transaction_type: record.transaction_type,
            note: record.note,
            image_url: record.image_url,
            spender_id: record.spender_id,
        }
    }
}

/// `POST /transactions` 请求体，也是插入存储时的结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub date: DateTime<FixedOffset>,
    pub amount: f64,
    #[serde(default)]
    pub category: String,
    #[serde(alias = "transactionType")]
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default, alias = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(default, alias = "spenderId")]
    pub spender_id: i64,
}

/// `POST /incomes` 请求体
///
/// 可以带 `transaction_type` (避免解码失败)，但入库时一律为 `INCOME`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewIncome {
    pub date: DateTime<FixedOffset>,
    pub amount: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default, alias = "transactionType")]
    pub transaction_type: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default, alias = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(default, alias = "spenderId")]
    pub spender_id: i64,
}

/// 可更新字段 (id、spender、类型不可改)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionUpdate {
    pub date: DateTime<FixedOffset>,
    pub amount: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default, alias = "imageUrl")]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn transaction_type_parses_exact_names_only() {
        assert_eq!("EXPENSE".parse::<TransactionType>(), Ok(TransactionType::Expense));
        assert_eq!("INCOME".parse::<TransactionType>(), Ok(TransactionType::Income));
        assert_eq!("income".parse::<TransactionType>(), Err(ParseTransactionTypeError));
        assert_eq!("TEST".parse::<TransactionType>(), Err(ParseTransactionTypeError));
        assert_eq!("".parse::<TransactionType>(), Err(ParseTransactionTypeError));
    }

    #[test]
    fn new_transaction_accepts_camel_case_aliases() {
        let body = json!({
            "date": "2024-05-18T12:00:00+07:00",
            "amount": 66.6,
            "category": "Food",
            "transactionType": "EXPENSE",
            "imageUrl": "/img/1.jpg",
            "spenderId": 5
        });

        let parsed: NewTransaction = serde_json::from_value(body).unwrap();

        assert_eq!(parsed.transaction_type, TransactionType::Expense);
        assert_eq!(parsed.image_url.as_deref(), Some("/img/1.jpg"));
        assert_eq!(parsed.spender_id, 5);
        assert_eq!(parsed.note, None);
    }

    #[test]
    fn new_transaction_requires_a_known_type() {
        let body = json!({
            "date": "2024-05-18T12:00:00+07:00",
            "amount": 1.0,
            "category": "Food",
            "transaction_type": "TRANSFER",
            "spender_id": 1
        });

        assert!(serde_json::from_value::<NewTransaction>(body).is_err());
    }

    #[test]
    fn transaction_serializes_date_with_original_offset() {
        let record = NewTransaction {
            date: DateTime::parse_from_rfc3339("2024-05-18T12:00:00+07:00").unwrap(),
            amount: 66.6,
            category: "Food".to_string(),
            transaction_type: TransactionType::Income,
            note: Some("Note1234".to_string()),
            image_url: None,
            spender_id: 5,
        };

        let value = serde_json::to_value(Transaction::from_new(1, record)).unwrap();

        assert_eq!(value["date"], json!("2024-05-18T12:00:00+07:00"));
        assert_eq!(value["transaction_type"], json!("INCOME"));
        assert_eq!(value["image_url"], json!(null));
    }
}
