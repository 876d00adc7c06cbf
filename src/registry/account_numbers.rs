use crate::types::AccountNumber;

/// Hands out account numbers for the lifetime of the process.
///
/// Numbers start at 1 and only grow. The counter lives inside the [`Registry`](super::Registry),
/// so a fresh registry (a fresh run) starts over.
#[derive(Debug)]
pub struct AccountNumbers {
    last: AccountNumber
}

impl AccountNumbers {
    pub fn new() -> Self {
        Self { last: 0 }
    }

    pub fn next(&mut self) -> AccountNumber {
        self.last += 1;
        self.last
    }
}
