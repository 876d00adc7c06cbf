use super::errors::AccountError;
use super::{Account, Customer, Transaction, TransactionKind, WithdrawalLimits};

use std::str::FromStr;

use anyhow::Result;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Monetary;

fn money(value: &str) -> Result<Monetary> {
    Ok(Monetary::from_str(value)?)
}

fn checking_account(limit: &str, max_withdrawals: u32) -> Result<Account> {
    Ok(Account::new(1, "0001", "12345678900", WithdrawalLimits::new(money(limit)?, max_withdrawals)))
}

fn unrestricted_account(number: u32) -> Result<Account> {
    Ok(Account::new(number, "0001", "111", WithdrawalLimits::new(money("1000000")?, u32::MAX)))
}

#[test]
fn test_successful_deposit_updates_balance_and_history() -> Result<()> {
    let mut account = unrestricted_account(1)?;

    let message = Transaction::deposit(money("10.0")?).apply(&mut account)?;

    assert_eq!(message, "Deposit completed. Balance: 10.00");
    assert_eq!(account.balance(), money("10")?);
    assert_eq!(account.history().len(), 1);
    assert_eq!(account.history().iter().next().map(|transaction| transaction.kind()), Some(TransactionKind::Deposit));

    Ok(())
}

#[test]
fn test_non_positive_deposit_is_refused() -> Result<()> {
    let mut account = unrestricted_account(1)?;

    let zero = Transaction::deposit(money("0")?).apply(&mut account);
    let negative = Transaction::deposit(money("-5")?).apply(&mut account);

    assert!(matches!(zero, Err(AccountError::NonPositiveAmount { .. })));
    assert!(matches!(negative, Err(AccountError::NonPositiveAmount { .. })));
    assert_eq!(account.balance(), Monetary::new());
    assert_eq!(account.history().len(), 0);

    Ok(())
}

#[test]
fn test_withdrawal_with_exact_funds_succeeds() -> Result<()> {
    let mut account = unrestricted_account(1)?;
    Transaction::deposit(money("10.0")?).apply(&mut account)?;

    let message = Transaction::withdrawal(money("10.0")?).apply(&mut account)?;

    assert_eq!(message, "Withdrawal completed. Balance: 0.00");
    assert_eq!(account.balance(), Monetary::new());
    assert_eq!(account.withdrawal_count(), 1);

    Ok(())
}

#[test]
fn test_withdrawal_with_insufficient_funds_fails() -> Result<()> {
    let mut account = unrestricted_account(1)?;
    Transaction::deposit(money("10.0")?).apply(&mut account)?;

    let result = Transaction::withdrawal(money("10.01")?).apply(&mut account);

    assert!(matches!(result, Err(AccountError::InsufficientFunds { .. })));
    assert_eq!(account.balance(), money("10.0")?);
    assert_eq!(account.withdrawal_count(), 0);
    assert_eq!(account.history().len(), 1);

    Ok(())
}

#[test]
fn test_zero_withdrawal_is_refused_without_history_entry() -> Result<()> {
    let mut account = checking_account("500", 3)?;

    let message = Customer::apply_transaction(&mut account, Transaction::withdrawal(money("0")?));

    assert!(message.contains("amount must be greater than zero"));
    assert_eq!(account.history().len(), 0);
    assert_eq!(account.withdrawal_count(), 0);

    Ok(())
}

#[test]
fn test_checking_limit_is_checked_before_balance() -> Result<()> {
    let mut account = checking_account("500", 3)?;

    let result = Transaction::withdrawal(money("600")?).apply(&mut account);

    assert!(matches!(result, Err(AccountError::ExceedsTransactionLimit { .. })));

    Ok(())
}

#[test]
fn test_exhausted_count_is_reported_before_insufficient_funds() -> Result<()> {
    let mut account = checking_account("500", 2)?;
    Transaction::deposit(money("400")?).apply(&mut account)?;
    Transaction::withdrawal(money("200")?).apply(&mut account)?;
    Transaction::withdrawal(money("200")?).apply(&mut account)?;

    let result = Transaction::withdrawal(money("100")?).apply(&mut account);

    assert!(matches!(result, Err(AccountError::WithdrawalCountExceeded { max_withdrawals: 2, .. })));
    assert_eq!(account.balance(), Monetary::new());
    assert_eq!(account.withdrawal_count(), 2);

    Ok(())
}

#[test]
fn test_limit_is_reported_before_exhausted_count() -> Result<()> {
    let mut account = checking_account("500", 1)?;
    Transaction::deposit(money("1000")?).apply(&mut account)?;
    Transaction::withdrawal(money("100")?).apply(&mut account)?;

    let result = Transaction::withdrawal(money("600")?).apply(&mut account);

    assert!(matches!(result, Err(AccountError::ExceedsTransactionLimit { .. })));
    assert_eq!(account.balance(), money("900")?);
    assert_eq!(account.history().len(), 2);

    Ok(())
}

#[test]
fn test_checking_withdrawal_count_is_enforced() -> Result<()> {
    let mut account = checking_account("500", 2)?;
    Transaction::deposit(money("1000")?).apply(&mut account)?;
    Transaction::withdrawal(money("100")?).apply(&mut account)?;
    Transaction::withdrawal(money("100")?).apply(&mut account)?;

    let message = Customer::apply_transaction(&mut account, Transaction::withdrawal(money("100")?));

    assert!(message.contains("exceeded allowed withdrawal count"));
    assert_eq!(account.balance(), money("800")?);
    assert_eq!(account.history().len(), 3);

    Ok(())
}

#[test]
fn test_failed_withdrawals_do_not_consume_the_count() -> Result<()> {
    let mut account = checking_account("500", 1)?;
    Transaction::deposit(money("50")?).apply(&mut account)?;

    assert!(Transaction::withdrawal(money("60")?).apply(&mut account).is_err());
    assert!(Transaction::withdrawal(money("0")?).apply(&mut account).is_err());
    Transaction::withdrawal(money("50")?).apply(&mut account)?;

    assert_eq!(account.withdrawal_count(), 1);

    Ok(())
}

#[test]
fn test_front_desk_scenario_from_deposit_to_exhausted_balance() -> Result<()> {
    let mut account = checking_account("500", 3)?;

    let deposit = Customer::apply_transaction(&mut account, Transaction::deposit(money("1000")?));
    assert_eq!(deposit, "Deposit completed. Balance: 1000.00");

    let over_limit = Customer::apply_transaction(&mut account, Transaction::withdrawal(money("600")?));
    assert!(over_limit.contains("exceeds transaction limit"));
    assert_eq!(account.balance().to_string(), "1000.00");

    let first = Customer::apply_transaction(&mut account, Transaction::withdrawal(money("500")?));
    let second = Customer::apply_transaction(&mut account, Transaction::withdrawal(money("500")?));
    let third = Customer::apply_transaction(&mut account, Transaction::withdrawal(money("500")?));

    assert_eq!(first, "Withdrawal completed. Balance: 500.00");
    assert_eq!(second, "Withdrawal completed. Balance: 0.00");
    assert!(third.contains("insufficient funds"));
    assert_eq!(account.balance().to_string(), "0.00");

    let kinds: Vec<TransactionKind> = account.history().iter().map(|transaction| transaction.kind()).collect();
    assert_eq!(kinds, vec![TransactionKind::Deposit, TransactionKind::Withdrawal, TransactionKind::Withdrawal]);

    Ok(())
}

#[test]
fn test_empty_statement_shows_header_and_zero_balance() -> Result<()> {
    let account = checking_account("500", 3)?;

    let statement = account.statement();
    let lines: Vec<&str> = statement.lines().collect();

    assert_eq!(lines[0], "ACCOUNT STATEMENT");
    assert_eq!(lines.len(), 5);
    assert_eq!(lines.last(), Some(&"Balance: 0.00"));

    Ok(())
}

#[test]
fn test_statement_lists_entries_in_order() -> Result<()> {
    let mut account = checking_account("500", 3)?;
    Transaction::deposit(money("200")?).apply(&mut account)?;
    Transaction::withdrawal(money("50.5")?).apply(&mut account)?;

    let statement = account.statement();
    let entries: Vec<&str> = statement.lines()
        .filter(|line| line.starts_with("+ ") || line.starts_with("- "))
        .collect();

    assert_eq!(entries.len(), 2);
    assert!(entries[0].starts_with("+ 200.00"));
    assert!(entries[1].starts_with("- 50.50"));
    assert!(statement.ends_with("Balance: 149.50"));

    Ok(())
}

#[test]
fn test_balance_equals_deposits_minus_successful_withdrawals() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(7);
    let mut account = checking_account("300", 25)?;
    let mut expected = Monetary::new();
    let mut successes = 0;

    for _ in 0..200 {
        let cents: i64 = rng.gen_range(-1_000..60_000);
        let amount = Monetary::from(rust_decimal::Decimal::new(cents, 2));
        let transaction = if rng.gen_bool(0.5) {
            Transaction::deposit(amount)
        } else {
            Transaction::withdrawal(amount)
        };
        let kind = transaction.kind();

        if transaction.apply(&mut account).is_ok() {
            successes += 1;
            expected = match kind {
                TransactionKind::Deposit => expected.checked_add(amount),
                TransactionKind::Withdrawal => expected.checked_sub(amount)
            }.ok_or_else(|| anyhow::anyhow!("overflow in expected balance"))?;
        }

        assert!(account.balance() >= Monetary::new());
    }

    assert_eq!(account.balance(), expected);
    assert_eq!(account.history().len(), successes);
    assert!(account.withdrawal_count() <= 25);

    Ok(())
}

#[test]
fn test_active_account_must_belong_to_customer() -> Result<()> {
    let birth_date = NaiveDate::from_ymd_opt(1990, 5, 17).ok_or_else(|| anyhow::anyhow!("invalid date"))?;
    let mut customer = Customer::new("111", "Ana", birth_date, "Rua A, 1 - Centro - Recife/PE");
    customer.add_account(unrestricted_account(1)?);
    customer.add_account(unrestricted_account(2)?);

    assert!(customer.active_account().is_none());
    assert!(customer.select_account(2));
    assert!(!customer.select_account(9));
    assert_eq!(customer.active_account().map(|account| account.number()), Some(2));
    assert_eq!(customer.accounts().len(), 2);

    Ok(())
}
