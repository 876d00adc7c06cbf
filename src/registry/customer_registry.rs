use std::collections::btree_map::Values;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::models::{Account, Customer, WithdrawalLimits};
use crate::registry::errors::RegistryError;
use crate::registry::AccountNumbers;
use crate::types::{normalize_tax_id, AccountNumber, TaxId};

/// Every customer known to the desk during this run, keyed by tax id.
#[derive(Debug)]
pub struct Registry {
    customers: BTreeMap<TaxId, Customer>,
    numbers: AccountNumbers
}

impl Registry {
    pub fn new() -> Self {
        Self {
            customers: BTreeMap::new(),
            numbers: AccountNumbers::new()
        }
    }

    /// Registers a new individual customer.
    ///
    /// The tax id is normalized first, so "123.456.789-00" and "12345678900" are the same customer.
    ///
    /// # Errors
    /// - `InvalidCustomer` if the tax id or the name is blank.
    /// - `DuplicateCustomer` if the tax id is already registered.
    pub fn register_customer(&mut self, tax_id: &str, name: &str, birth_date: NaiveDate, address: &str) -> Result<&mut Customer, RegistryError> {
        let tax_id = normalize_tax_id(tax_id);
        let name = name.trim();

        if tax_id.is_empty() {
            return Err(RegistryError::InvalidCustomer("tax id is required".to_string()));
        }

        if name.is_empty() {
            return Err(RegistryError::InvalidCustomer("name is required".to_string()));
        }

        if self.customers.contains_key(&tax_id) {
            return Err(RegistryError::DuplicateCustomer { tax_id });
        }

        info!("Registering customer [{tax_id}]");

        let customer = Customer::new(tax_id.clone(), name, birth_date, address.trim());
        Ok(self.customers.entry(tax_id).or_insert(customer))
    }

    /// Opens a checking account for the customer and makes it the active one.
    pub fn open_account(&mut self, tax_id: &str, branch: &str, limits: WithdrawalLimits) -> Result<AccountNumber, RegistryError> {
        let tax_id = normalize_tax_id(tax_id);
        let customer = self.customers.get_mut(&tax_id)
            .ok_or_else(|| RegistryError::CustomerNotFound { tax_id: tax_id.clone() })?;

        let number = self.numbers.next();
        customer.add_account(Account::new(number, branch.trim(), tax_id.clone(), limits));
        customer.select_account(number);

        debug!("Opened account [{number}] at branch [{}] for customer [{tax_id}]", branch.trim());

        Ok(number)
    }

    pub fn select_account(&mut self, tax_id: &str, account_number: AccountNumber) -> Result<(), RegistryError> {
        let tax_id = normalize_tax_id(tax_id);
        let customer = self.customers.get_mut(&tax_id)
            .ok_or_else(|| RegistryError::CustomerNotFound { tax_id: tax_id.clone() })?;

        if !customer.select_account(account_number) {
            return Err(RegistryError::AccountNotFound { tax_id, account_number });
        }

        Ok(())
    }

    pub fn customer(&self, tax_id: &str) -> Option<&Customer> {
        self.customers.get(&normalize_tax_id(tax_id))
    }

    pub fn customer_mut(&mut self, tax_id: &str) -> Option<&mut Customer> {
        self.customers.get_mut(&normalize_tax_id(tax_id))
    }

    /// Customers ordered by tax id.
    pub fn customers(&self) -> Values<'_, TaxId, Customer> {
        self.customers.values()
    }
}
