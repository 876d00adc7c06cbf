mod account;
mod customer;
mod errors;
mod history;
#[cfg(test)]
mod tests;
mod transaction;

use crate::types::Monetary;

pub use account::Account;
pub use customer::{Address, Customer};
pub use history::History;
pub use transaction::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal
}

impl TransactionKind {
    /// Sign shown next to the amount on a statement.
    pub fn marker(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "+",
            TransactionKind::Withdrawal => "-"
        }
    }
}

/// Limits every account enforces on top of the shared withdrawal policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalLimits {
    /// Largest amount a single withdrawal may take.
    pub per_withdrawal: Monetary,
    /// Successful withdrawals allowed per cycle. Cycles are never reset.
    pub max_withdrawals: u32
}

impl WithdrawalLimits {
    pub fn new(per_withdrawal: Monetary, max_withdrawals: u32) -> Self {
        Self { per_withdrawal, max_withdrawals }
    }
}
