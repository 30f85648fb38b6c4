//! 入库前校验，只返回第一个不满足的规则

use crate::models::{NewIncome, NewTransaction, TransactionUpdate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("amount is lower than 0.0")]
    AmountNegative,
    #[error("category is required")]
    CategoryRequired,
    #[error("spender id is required")]
    SpenderRequired,
}

/// 待校验记录的公共字段
pub trait Candidate {
    fn amount(&self) -> f64;
    fn category(&self) -> &str;
}

impl Candidate for NewTransaction {
    fn amount(&self) -> f64 {
        self.amount
    }

    fn category(&self) -> &str {
        &self.category
    }
}

impl Candidate for NewIncome {
    fn amount(&self) -> f64 {
        self.amount
    }

    fn category(&self) -> &str {
        &self.category
    }
}

impl Candidate for TransactionUpdate {
    fn amount(&self) -> f64 {
        self.amount
    }

    fn category(&self) -> &str {
        &self.category
    }
}

/// 先校验金额，再校验分类
pub fn validate_transaction<C: Candidate>(candidate: &C) -> Result<(), ValidationError> {
    if candidate.amount() < 0.0 {
        return Err(ValidationError::AmountNegative);
    }
    if candidate.category().is_empty() {
        return Err(ValidationError::CategoryRequired);
    }
    Ok(())
}

/// 先校验 spender，再走 [`validate_transaction`]
pub fn validate_income(income: &NewIncome) -> Result<(), ValidationError> {
    if income.spender_id == 0 {
        return Err(ValidationError::SpenderRequired);
    }
    validate_transaction(income)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn income(amount: f64, category: &str, spender_id: i64) -> NewIncome {
        NewIncome {
            date: DateTime::parse_from_rfc3339("2024-05-18T12:00:00+07:00").unwrap(),
            amount,
            category: category.to_string(),
            transaction_type: None,
            note: None,
            image_url: None,
            spender_id,
        }
    }

    fn update(amount: f64, category: &str) -> TransactionUpdate {
        TransactionUpdate {
            date: DateTime::parse_from_rfc3339("2024-05-18T12:00:00+07:00").unwrap(),
            amount,
            category: category.to_string(),
            note: None,
            image_url: None,
        }
    }

    #[test]
    fn accepts_non_negative_amount_with_category() {
        for amount in [0.0, 0.01, 66.6, 1_000_000.0] {
            assert_eq!(validate_transaction(&update(amount, "Food")), Ok(()));
        }
    }

    #[test]
    fn negative_amount_wins_over_missing_category() {
        assert_eq!(
            validate_transaction(&update(-1.0, "")),
            Err(ValidationError::AmountNegative)
        );
        assert_eq!(
            validate_transaction(&update(-0.5, "Food")),
            Err(ValidationError::AmountNegative)
        );
    }

    #[test]
    fn empty_category_is_rejected() {
        assert_eq!(
            validate_transaction(&update(1.0, "")),
            Err(ValidationError::CategoryRequired)
        );
    }

    #[test]
    fn income_checks_spender_before_anything_else() {
        assert_eq!(
            validate_income(&income(66.6, "Food", 0)),
            Err(ValidationError::SpenderRequired)
        );
        assert_eq!(
            validate_income(&income(-1.0, "", 0)),
            Err(ValidationError::SpenderRequired)
        );
        assert_eq!(
            validate_income(&income(-1.0, "", 5)),
            Err(ValidationError::AmountNegative)
        );
        assert_eq!(
            validate_income(&income(1.0, "", 5)),
            Err(ValidationError::CategoryRequired)
        );
        assert_eq!(validate_income(&income(66.6, "Food", 5)), Ok(()));
    }

    #[test]
    fn messages_are_single_sentences() {
        assert_eq!(ValidationError::AmountNegative.to_string(), "amount is lower than 0.0");
        assert_eq!(ValidationError::CategoryRequired.to_string(), "category is required");
        assert_eq!(ValidationError::SpenderRequired.to_string(), "spender id is required");
    }
}
