use crate::registry::Registry;

/// One "tax_id: name" line per customer.
pub fn list_customers(registry: &Registry) -> String {
    let mut output = String::from("BANK CUSTOMERS\n");

    for customer in registry.customers() {
        output.push_str(&format!("{}: {}\n", customer.tax_id(), customer.name()));
    }

    output
}

/// One "number: tax_id (name)" line per account, grouped by customer.
pub fn list_accounts(registry: &Registry) -> String {
    let mut output = String::from("BANK ACCOUNTS\n");

    for customer in registry.customers() {
        for account in customer.accounts() {
            output.push_str(&format!("{}: {} ({})\n", account.number(), account.owner(), customer.name()));
        }
    }

    output
}
