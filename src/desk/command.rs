use chrono::NaiveDate;

use crate::types::{AccountNumber, Monetary, TaxId};

const BIRTH_DATE_FORMATS: [&str; 3] = ["%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y"];

/// A fully collected request for the desk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Deposit(Monetary),
    Withdraw(Monetary),
    Statement,
    RegisterCustomer(Registration),
    OpenAccount { branch: String },
    SelectAccount(AccountNumber),
    SelectCustomer(TaxId),
    ListCustomers,
    ListAccounts,
    Quit
}

/// Everything needed to register a customer together with the first account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub tax_id: TaxId,
    pub name: String,
    pub birth_date: NaiveDate,
    pub address: String,
    pub branch: String
}

/// Keys of the desk menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Deposit,
    Withdraw,
    Statement,
    NewCustomer,
    NewAccount,
    SelectAccount,
    SwitchCustomer,
    ListCustomers,
    ListAccounts,
    Quit
}

impl MenuOption {
    pub fn from_key(key: &str) -> Option<Self> {
        let option = match key.trim().to_lowercase().as_str() {
            "d" => MenuOption::Deposit,
            "s" => MenuOption::Withdraw,
            "e" => MenuOption::Statement,
            "u" => MenuOption::NewCustomer,
            "c" => MenuOption::NewAccount,
            "a" => MenuOption::SelectAccount,
            "i" => MenuOption::SwitchCustomer,
            "lu" => MenuOption::ListCustomers,
            "lc" => MenuOption::ListAccounts,
            "q" => MenuOption::Quit,
            _ => return None
        };

        Some(option)
    }
}

pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    BIRTH_DATE_FORMATS.iter()
        .find_map(|format| NaiveDate::parse_from_str(value.trim(), format).ok())
}
