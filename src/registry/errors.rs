use crate::types::{AccountNumber, TaxId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Customer [{tax_id}] is already registered")]
    DuplicateCustomer {
        tax_id: TaxId
    },
    #[error("Customer [{tax_id}] was not found")]
    CustomerNotFound {
        tax_id: TaxId
    },
    #[error("Invalid customer data: {0}")]
    InvalidCustomer(String),
    #[error("Account [{account_number}] does not belong to customer [{tax_id}]")]
    AccountNotFound {
        tax_id: TaxId,
        account_number: AccountNumber
    }
}
