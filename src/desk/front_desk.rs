use tracing::debug;

use crate::config::Settings;
use crate::desk::command::{Command, Registration};
use crate::models::{Account, Customer, Transaction};
use crate::registry::{list_accounts, list_customers, Registry};
use crate::types::{normalize_tax_id, TaxId};

const NO_CUSTOMER: &str = "No customer identified. Please register a customer first.";
const NO_ACCOUNT: &str = "The current customer has no active account.";

/// The teller's view of the bank: the registry plus the customer being served.
///
/// Every command runs to completion and answers with the message shown to the operator.
pub struct FrontDesk {
    registry: Registry,
    settings: Settings,
    current: Option<TaxId>
}

impl FrontDesk {
    pub fn new(settings: Settings) -> Self {
        Self {
            registry: Registry::new(),
            settings,
            current: None
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn current_customer(&self) -> Option<&Customer> {
        self.current.as_deref().and_then(|tax_id| self.registry.customer(tax_id))
    }

    pub fn current_account(&self) -> Option<&Account> {
        self.current_customer().and_then(Customer::active_account)
    }

    pub fn execute(&mut self, command: Command) -> String {
        debug!("Executing {command:?}");

        match command {
            Command::Deposit(amount) => self.transact(Transaction::deposit(amount)),
            Command::Withdraw(amount) => self.transact(Transaction::withdrawal(amount)),
            Command::Statement => self.current_account()
                .map(Account::statement)
                .unwrap_or_else(|| NO_ACCOUNT.to_string()),
            Command::RegisterCustomer(registration) => self.register(registration),
            Command::OpenAccount { branch } => self.open_account(&branch),
            Command::SelectAccount(number) => {
                let Some(tax_id) = self.current.clone() else {
                    return NO_CUSTOMER.to_string();
                };

                match self.registry.select_account(&tax_id, number) {
                    Ok(()) => format!("Account [{number}] selected."),
                    Err(error) => error.to_string()
                }
            },
            Command::SelectCustomer(tax_id) => {
                let tax_id = normalize_tax_id(&tax_id);

                match self.registry.customer(&tax_id) {
                    Some(customer) => {
                        let message = format!("Now serving {} [{}].", customer.name(), customer.tax_id());
                        self.current = Some(tax_id);
                        message
                    },
                    None => format!("Customer [{tax_id}] was not found")
                }
            },
            Command::ListCustomers => list_customers(&self.registry),
            Command::ListAccounts => list_accounts(&self.registry),
            Command::Quit => "Goodbye.".to_string()
        }
    }

    /// Menu header naming the bank, the customer and the active account.
    pub fn header(&self) -> String {
        let mut header = format!("You are at bank {}", self.settings.bank_name);

        let Some(customer) = self.current_customer() else {
            return header;
        };

        header.push_str(&format!("\nCustomer: {}", customer.tax_id()));

        if let Some(account) = customer.active_account() {
            header.push_str(&format!("  Account: {}  Branch: {}", account.number(), account.branch()));
        }

        header.push_str(&format!(
            "\n{}, born {}, {}",
            customer.name(),
            customer.birth_date().format("%d/%m/%Y"),
            customer.address()
        ));

        if let Some(account) = customer.active_account() {
            header.push_str(&format!(
                "\nBalance: {}  Withdrawals: {}/{}  Entries: {}",
                account.balance(),
                account.withdrawal_count(),
                account.limits().max_withdrawals,
                account.history().len()
            ));
        }

        header
    }

    fn transact(&mut self, transaction: Transaction) -> String {
        let Some(tax_id) = self.current.as_deref() else {
            return NO_CUSTOMER.to_string();
        };

        let Some(account) = self.registry.customer_mut(tax_id).and_then(Customer::active_account_mut) else {
            return NO_ACCOUNT.to_string();
        };

        Customer::apply_transaction(account, transaction)
    }

    fn register(&mut self, registration: Registration) -> String {
        let tax_id = match self.registry.register_customer(
            &registration.tax_id,
            &registration.name,
            registration.birth_date,
            &registration.address
        ) {
            Ok(customer) => customer.tax_id().to_string(),
            Err(error) => return error.to_string()
        };

        self.current = Some(tax_id.clone());

        match self.registry.open_account(&tax_id, &registration.branch, self.settings.limits) {
            Ok(number) => format!("Customer [{tax_id}] registered with account [{number}]."),
            Err(error) => error.to_string()
        }
    }

    fn open_account(&mut self, branch: &str) -> String {
        let Some(tax_id) = self.current.clone() else {
            return NO_CUSTOMER.to_string();
        };

        match self.registry.open_account(&tax_id, branch, self.settings.limits) {
            Ok(number) => format!("Account [{number}] opened at branch [{}].", branch.trim()),
            Err(error) => error.to_string()
        }
    }
}
