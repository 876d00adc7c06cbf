mod errors;
mod monetary;

pub use monetary::Monetary;

pub type AccountNumber = u32;
pub type TaxId = String;

/// Strips the punctuation operators usually type into a tax id ("123.456.789-00").
pub fn normalize_tax_id(raw: &str) -> TaxId {
    raw.trim().chars().filter(|c| *c != '.' && *c != '-').collect()
}
