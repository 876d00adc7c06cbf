use crate::types::{AccountNumber, Monetary};
use thiserror::Error;

/// Refusals produced by the account policies. None of them mutates the account.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Operation refused for account [{account_number}]: insufficient funds (balance {balance}, requested {amount})")]
    InsufficientFunds {
        account_number: AccountNumber,
        balance: Monetary,
        amount: Monetary
    },
    #[error("Operation refused for account [{account_number}]: amount must be greater than zero")]
    NonPositiveAmount {
        account_number: AccountNumber,
        amount: Monetary
    },
    #[error("Withdrawal refused for account [{account_number}]: {amount} exceeds transaction limit of {limit}")]
    ExceedsTransactionLimit {
        account_number: AccountNumber,
        amount: Monetary,
        limit: Monetary
    },
    #[error("Withdrawal refused for account [{account_number}]: exceeded allowed withdrawal count of {max_withdrawals}")]
    WithdrawalCountExceeded {
        account_number: AccountNumber,
        max_withdrawals: u32
    },
    #[error("Numeric overflow occurred for account [{account_number}]")]
    Overflow {
        account_number: AccountNumber
    }
}
