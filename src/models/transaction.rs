use chrono::{DateTime, Local};

use crate::models::errors::AccountError;
use crate::models::{Account, TransactionKind};
use crate::types::Monetary;

/// A single deposit or withdrawal requested at the desk.
///
/// The record is immutable once built. It only ends up in an account's
/// history when [`Transaction::apply`] succeeds; a refused transaction is
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Monetary,
    timestamp: DateTime<Local>
}

impl Transaction {
    pub fn deposit(amount: Monetary) -> Self {
        Self::new(TransactionKind::Deposit, amount)
    }

    pub fn withdrawal(amount: Monetary) -> Self {
        Self::new(TransactionKind::Withdrawal, amount)
    }

    pub fn new(kind: TransactionKind, amount: Monetary) -> Self {
        Self {
            kind,
            amount,
            timestamp: Local::now()
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Monetary {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Runs the matching account policy and records the transaction on success.
    ///
    /// Returns the confirmation message produced by the policy.
    pub fn apply(self, account: &mut Account) -> Result<String, AccountError> {
        let message = match self.kind {
            TransactionKind::Deposit => account.deposit(self.amount)?,
            TransactionKind::Withdrawal => account.withdraw(self.amount)?
        };

        account.record(self);

        Ok(message)
    }
}
