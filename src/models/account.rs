use crate::models::errors::AccountError;
use crate::models::{History, Transaction, WithdrawalLimits};
use crate::types::{AccountNumber, Monetary, TaxId};

const STATEMENT_RULE: &str = "----------------------------------------";

/// Represents a single checking account held by one customer.
///
/// The balance only moves through [`Account::deposit`] and [`Account::withdraw`],
/// both of which leave the account untouched when they refuse an amount.
#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber,
    branch: String,
    /// Tax id of the owning customer, fixed at creation.
    owner: TaxId,
    balance: Monetary,
    limits: WithdrawalLimits,
    history: History,
    /// Successful withdrawals so far. Never reset.
    withdrawal_count: u32
}

impl Account {
    /// Creates an empty account. Numbers come from the registry's counter.
    pub fn new(number: AccountNumber, branch: impl Into<String>, owner: impl Into<TaxId>, limits: WithdrawalLimits) -> Self {
        Self {
            number,
            branch: branch.into(),
            owner: owner.into(),
            balance: Monetary::new(),
            limits,
            history: History::new(),
            withdrawal_count: 0
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Monetary {
        self.balance
    }

    pub fn limits(&self) -> &WithdrawalLimits {
        &self.limits
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn withdrawal_count(&self) -> u32 {
        self.withdrawal_count
    }

    /// Withdraws `amount`. The checking limits are evaluated before the shared balance policy.
    ///
    /// # Errors
    /// - `ExceedsTransactionLimit` when the per-withdrawal ceiling is passed.
    /// - `WithdrawalCountExceeded` when all allowed withdrawals were already used.
    /// - `InsufficientFunds` when `amount` is above the balance.
    /// - `NonPositiveAmount` when `amount` is zero or negative.
    pub fn withdraw(&mut self, amount: Monetary) -> Result<String, AccountError> {
        self.check_limits(amount)?;

        self.base_withdraw(amount)
    }

    pub fn deposit(&mut self, amount: Monetary) -> Result<String, AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::NonPositiveAmount { account_number: self.number, amount });
        }

        self.balance = self.balance.checked_add(amount)
            .ok_or(AccountError::Overflow { account_number: self.number })?;

        Ok(format!("Deposit completed. Balance: {}", self.balance))
    }

    /// Renders the statement: header, one line per history entry, then the balance.
    pub fn statement(&self) -> String {
        let mut output = String::from("ACCOUNT STATEMENT\n");
        output.push_str(&format!("Account: {}  Branch: {}  Customer: {}\n", self.number, self.branch, self.owner));
        output.push_str(STATEMENT_RULE);
        output.push('\n');

        for transaction in self.history.iter() {
            output.push_str(&format!(
                "{} {}  ({})\n",
                transaction.kind().marker(),
                transaction.amount(),
                transaction.timestamp().format("%d/%m/%Y %H:%M:%S")
            ));
        }

        output.push_str(STATEMENT_RULE);
        output.push('\n');
        output.push_str(&format!("Balance: {}", self.balance));

        output
    }

    pub(crate) fn record(&mut self, transaction: Transaction) {
        self.history.add(transaction);
    }

    fn check_limits(&self, amount: Monetary) -> Result<(), AccountError> {
        let limits = &self.limits;

        if amount > limits.per_withdrawal {
            return Err(AccountError::ExceedsTransactionLimit {
                account_number: self.number,
                amount,
                limit: limits.per_withdrawal
            });
        }

        if self.withdrawal_count >= limits.max_withdrawals {
            return Err(AccountError::WithdrawalCountExceeded {
                account_number: self.number,
                max_withdrawals: limits.max_withdrawals
            });
        }

        Ok(())
    }

    fn base_withdraw(&mut self, amount: Monetary) -> Result<String, AccountError> {
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                account_number: self.number,
                balance: self.balance,
                amount
            });
        }

        if !amount.is_positive() {
            return Err(AccountError::NonPositiveAmount { account_number: self.number, amount });
        }

        self.balance = self.balance.checked_sub(amount)
            .ok_or(AccountError::Overflow { account_number: self.number })?;
        self.withdrawal_count += 1;

        Ok(format!("Withdrawal completed. Balance: {}", self.balance))
    }
}
