//! Ledger operations over an ordered statement.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use finledger_core::{DomainError, DomainResult};

use crate::entry::{EntryKind, LedgerEntry};

/// Net balance of a statement: credits minus debits, folded left to right from zero.
///
/// Fails instead of panicking if a running total leaves the `Decimal` range.
pub fn balance(statements: &[LedgerEntry]) -> DomainResult<Decimal> {
    statements.iter().try_fold(Decimal::ZERO, |acc, entry| {
        let amount = entry.amount().value();
        match entry.kind() {
            EntryKind::Credit => acc.checked_add(amount),
            EntryKind::Debit => acc.checked_sub(amount),
        }
        .ok_or_else(|| DomainError::validation("balance exceeds the representable range"))
    })
}

/// Entries created on `date` (UTC calendar day), in statement order.
pub fn entries_on(statements: &[LedgerEntry], date: NaiveDate) -> Vec<LedgerEntry> {
    statements
        .iter()
        .filter(|entry| entry.created_at().date_naive() == date)
        .cloned()
        .collect()
}
