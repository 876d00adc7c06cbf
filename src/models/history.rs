use std::slice::Iter;

use crate::models::Transaction;

/// Append-only log of the transactions applied to one account, oldest first.
#[derive(Debug, Clone, Default)]
pub struct History {
    transactions: Vec<Transaction>
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn iter(&self) -> Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }
}
