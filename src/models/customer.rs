use std::fmt::{self, Display, Formatter};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::models::{Account, Transaction};
use crate::types::{AccountNumber, TaxId};

/// Postal address as collected by the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub district: String,
    pub city: String,
    pub state: String
}

impl Display for Address {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}, {} - {} - {}/{}",
            self.street, self.number, self.district, self.city, self.state.to_uppercase()
        )
    }
}

/// An individual customer of the bank.
///
/// The customer owns its accounts. `active` only points at one of them by number
/// so the desk knows which account the next operation targets.
#[derive(Debug, Clone)]
pub struct Customer {
    tax_id: TaxId,
    name: String,
    birth_date: NaiveDate,
    address: String,
    accounts: Vec<Account>,
    active: Option<AccountNumber>
}

impl Customer {
    pub fn new(tax_id: impl Into<TaxId>, name: impl Into<String>, birth_date: NaiveDate, address: impl Into<String>) -> Self {
        Self {
            tax_id: tax_id.into(),
            name: name.into(),
            birth_date,
            address: address.into(),
            accounts: Vec::new(),
            active: None
        }
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn add_account(&mut self, account: Account) {
        self.accounts.push(account);
    }

    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|account| account.number() == number)
    }

    pub fn account_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.number() == number)
    }

    /// Points the active selection at one of the customer's own accounts.
    ///
    /// Returns `false` and keeps the previous selection when the customer does not own `number`.
    pub fn select_account(&mut self, number: AccountNumber) -> bool {
        if self.account(number).is_none() {
            return false;
        }

        self.active = Some(number);
        true
    }

    pub fn active_account(&self) -> Option<&Account> {
        self.active.and_then(|number| self.account(number))
    }

    pub fn active_account_mut(&mut self) -> Option<&mut Account> {
        let number = self.active?;
        self.account_mut(number)
    }

    /// Applies `transaction` to `account` and returns the message to show the operator,
    /// whether the transaction went through or was refused.
    pub fn apply_transaction(account: &mut Account, transaction: Transaction) -> String {
        let kind = transaction.kind();

        match transaction.apply(account) {
            Ok(message) => {
                debug!("{kind:?} on account [{}] processed", account.number());
                message
            },
            Err(error) => {
                warn!("{error}");
                error.to_string()
            }
        }
    }
}
