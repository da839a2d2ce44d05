//! Application command and query handlers, one per operation.

pub mod agenda;
pub mod billing;
pub mod categorize;
pub mod ledger;

#[cfg(test)]
pub(crate) mod test_support;
