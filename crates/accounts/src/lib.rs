//! Accounts module (customer accounts and their statement ledgers).
//!
//! Pure domain logic plus the in-memory account directory: no HTTP concerns.

pub mod account;
pub mod directory;
pub mod entry;
pub mod ledger;

pub use account::Account;
pub use directory::{AccountDirectory, InMemoryAccountDirectory};
pub use entry::{EntryKind, LedgerEntry};
pub use ledger::{balance, entries_on};
