mod account_numbers;
mod customer_registry;
mod directory;
mod errors;

pub use account_numbers::AccountNumbers;
pub use customer_registry::Registry;
pub use directory::{list_accounts, list_customers};
