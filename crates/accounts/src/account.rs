use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finledger_core::{AccountId, Amount, DomainError, DomainResult, Entity, TaxId};

use crate::entry::LedgerEntry;
use crate::ledger;

/// Customer account: identity plus an append-only statement.
///
/// Statement order is insertion order, which is also chronological order since
/// callers stamp entries with the current time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    name: String,
    tax_id: TaxId,
    statements: Vec<LedgerEntry>,
}

impl Account {
    /// Open an account with an empty statement.
    pub fn open(tax_id: TaxId, name: impl Into<String>) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            tax_id,
            statements: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tax_id(&self) -> &TaxId {
        &self.tax_id
    }

    pub fn statements(&self) -> &[LedgerEntry] {
        &self.statements
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn balance(&self) -> DomainResult<Decimal> {
        ledger::balance(&self.statements)
    }

    /// Append a credit entry.
    ///
    /// Rejected only when the resulting balance would not fit in a `Decimal`;
    /// every running total of the statement therefore stays representable.
    pub fn deposit(
        &mut self,
        description: Option<String>,
        amount: Amount,
        at: DateTime<Utc>,
    ) -> DomainResult<LedgerEntry> {
        self.balance()?
            .checked_add(amount.value())
            .ok_or_else(|| DomainError::validation("deposit would overflow the account balance"))?;

        let entry = LedgerEntry::credit(description, amount, at);
        self.statements.push(entry.clone());
        Ok(entry)
    }

    /// Append a debit entry if the balance covers `amount`.
    ///
    /// On `InsufficientFunds` the statement is left untouched.
    pub fn withdraw(&mut self, amount: Amount, at: DateTime<Utc>) -> DomainResult<LedgerEntry> {
        let balance = self.balance()?;
        if balance < amount.value() {
            return Err(DomainError::insufficient_funds(balance, amount.value()));
        }

        let entry = LedgerEntry::debit(amount, at);
        self.statements.push(entry.clone());
        Ok(entry)
    }

    pub fn statement_on(&self, date: NaiveDate) -> Vec<LedgerEntry> {
        ledger::entries_on(&self.statements, date)
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
