//! Field-level parsing shared by form validation and file loading
//!
//! Each helper names the field it is parsing so the resulting
//! [`ValidationError`] can tell the user which input was wrong.

use chrono::NaiveDate;

use crate::error::ValidationError;

use super::money::Money;
use super::transaction::{ExpenseCategory, TransactionKind};

/// Date format used everywhere: input, files and display
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest amount a single field may hold (one trillion)
pub const MAX_AMOUNT: Money = Money::from_dollars_cents(1_000_000_000_000, 0);

/// Trimmed value, or `MissingField` if blank
pub fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

/// Parse a non-negative amount no larger than [`MAX_AMOUNT`]
pub fn parse_amount(field: &'static str, value: &str) -> Result<Money, ValidationError> {
    let amount = Money::parse(value).map_err(|_| ValidationError::InvalidAmount {
        field,
        value: value.trim().to_string(),
    })?;

    if amount.is_negative() {
        return Err(ValidationError::NegativeAmount { field });
    }
    if amount > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge {
            field,
            max: MAX_AMOUNT.to_decimal_string(),
        });
    }

    Ok(amount)
}

/// Parse an ISO calendar date (YYYY-MM-DD)
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidDate {
            field,
            value: value.trim().to_string(),
        }
    })
}

pub fn parse_kind(value: &str) -> Result<TransactionKind, ValidationError> {
    value
        .parse()
        .map_err(|_| ValidationError::UnknownKind(value.trim().to_string()))
}

pub fn parse_expense_category(value: &str) -> Result<ExpenseCategory, ValidationError> {
    value
        .parse()
        .map_err(|_| ValidationError::UnknownCategory(value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert_eq!(require("Name", "  Car "), Ok("Car"));
        assert_eq!(require("Name", "   "), Err(ValidationError::MissingField("Name")));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("Amount", "12.30").unwrap().cents(), 1230);
        assert_eq!(
            parse_amount("Amount", "-5"),
            Err(ValidationError::NegativeAmount { field: "Amount" })
        );
        assert_eq!(
            parse_amount("Amount", "ten"),
            Err(ValidationError::InvalidAmount {
                field: "Amount",
                value: "ten".into()
            })
        );
    }

    #[test]
    fn test_parse_amount_limits() {
        assert_eq!(parse_amount("Amount", "1000000000000"), Ok(MAX_AMOUNT));
        assert_eq!(
            parse_amount("Amount", "1000000000000.01"),
            Err(ValidationError::AmountTooLarge {
                field: "Amount",
                max: "1000000000000.00".into()
            })
        );
        assert!(matches!(
            parse_amount("Amount", "50000000000000000"),
            Err(ValidationError::AmountTooLarge { .. })
        ));
        assert!(matches!(
            parse_amount("Amount", "0.005"),
            Err(ValidationError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("Date", "2024-01-05"),
            Ok(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())
        );
        assert!(parse_date("Date", "2024/13/40").is_err());
        assert!(parse_date("Date", "2024-02-30").is_err());
        assert!(parse_date("Date", "05-01-2024").is_err());
    }

    #[test]
    fn test_parse_kind_and_category() {
        assert_eq!(parse_kind("EXPENSE"), Ok(TransactionKind::Expense));
        assert_eq!(
            parse_kind("gift"),
            Err(ValidationError::UnknownKind("gift".into()))
        );
        assert_eq!(parse_expense_category("wants"), Ok(ExpenseCategory::Wants));
        assert_eq!(
            parse_expense_category("Salary"),
            Err(ValidationError::UnknownCategory("Salary".into()))
        );
    }
}
