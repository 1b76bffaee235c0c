//! Transaction display formatting
//!
//! Register-style listing of ledger entries.

use crate::models::Transaction;

use super::report::{left_align, right_align, truncate};

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    let amount = txn.signed_amount().format_with_symbol(symbol);
    let amount = if txn.is_income() {
        format!("+{}", amount)
    } else {
        amount
    };

    format!(
        "{} {} {} {} {}",
        txn.date.format("%Y-%m-%d"),
        left_align(&txn.kind.to_string(), 8),
        left_align(&truncate(&txn.category, 12), 12),
        left_align(&truncate(&txn.description, 24), 24),
        right_align(&amount, 14)
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:8} {:12} {:24} {:>14}\n",
        "Date", "Type", "Category", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_row() {
        let txn = Transaction::expense(
            Money::from_cents(20_000),
            ExpenseCategory::Needs,
            "Rent",
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        );
        let row = format_transaction_row(&txn, "$");

        assert!(row.starts_with("2024-01-05 Expense  Needs"));
        assert!(row.ends_with("-$200.00"));
    }

    #[test]
    fn test_income_row_is_signed_positive() {
        let txn = Transaction::income(
            Money::from_cents(100_000),
            "Salary",
            "Pay",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        assert!(format_transaction_row(&txn, "$").ends_with("+$1000.00"));
    }

    #[test]
    fn test_empty_register() {
        assert_eq!(format_transaction_register(&[], "$"), "No transactions found.\n");
    }
}
