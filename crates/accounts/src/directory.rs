//! Account directory: the set of registered accounts, keyed by tax id.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use finledger_core::{Amount, DomainError, DomainResult, TaxId};

use crate::account::Account;
use crate::entry::LedgerEntry;

/// Owner of all accounts.
///
/// Each method is one atomic step: lookups and the mutation that depends on
/// them happen under the same lock, so a failed call leaves no trace.
/// Readers get snapshots; nothing outside the directory holds a live account.
pub trait AccountDirectory: Send + Sync {
    /// Register a new account with an empty statement.
    fn create(&self, tax_id: TaxId, name: String) -> DomainResult<Account>;

    /// Resolve an account by tax id.
    fn find(&self, tax_id: &TaxId) -> DomainResult<Account>;

    /// Whether an account is registered under `tax_id`, without copying it.
    fn contains(&self, tax_id: &TaxId) -> DomainResult<bool>;

    fn rename(&self, tax_id: &TaxId, name: String) -> DomainResult<()>;

    /// Remove the account and return its last known state.
    fn delete(&self, tax_id: &TaxId) -> DomainResult<Account>;

    fn deposit(
        &self,
        tax_id: &TaxId,
        description: Option<String>,
        amount: Amount,
        at: DateTime<Utc>,
    ) -> DomainResult<LedgerEntry>;

    fn withdraw(&self, tax_id: &TaxId, amount: Amount, at: DateTime<Utc>) -> DomainResult<LedgerEntry>;

    fn statement(&self, tax_id: &TaxId) -> DomainResult<Vec<LedgerEntry>> {
        Ok(self.find(tax_id)?.statements().to_vec())
    }

    fn statement_on(&self, tax_id: &TaxId, date: NaiveDate) -> DomainResult<Vec<LedgerEntry>> {
        Ok(self.find(tax_id)?.statement_on(date))
    }

    fn balance(&self, tax_id: &TaxId) -> DomainResult<Decimal> {
        self.find(tax_id)?.balance()
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> AccountDirectory for Arc<S>
where
    S: AccountDirectory + ?Sized,
{
    fn create(&self, tax_id: TaxId, name: String) -> DomainResult<Account> {
        (**self).create(tax_id, name)
    }

    fn find(&self, tax_id: &TaxId) -> DomainResult<Account> {
        (**self).find(tax_id)
    }

    fn contains(&self, tax_id: &TaxId) -> DomainResult<bool> {
        (**self).contains(tax_id)
    }

    fn rename(&self, tax_id: &TaxId, name: String) -> DomainResult<()> {
        (**self).rename(tax_id, name)
    }

    fn delete(&self, tax_id: &TaxId) -> DomainResult<Account> {
        (**self).delete(tax_id)
    }

    fn deposit(
        &self,
        tax_id: &TaxId,
        description: Option<String>,
        amount: Amount,
        at: DateTime<Utc>,
    ) -> DomainResult<LedgerEntry> {
        (**self).deposit(tax_id, description, amount, at)
    }

    fn withdraw(&self, tax_id: &TaxId, amount: Amount, at: DateTime<Utc>) -> DomainResult<LedgerEntry> {
        (**self).withdraw(tax_id, amount, at)
    }

    fn statement(&self, tax_id: &TaxId) -> DomainResult<Vec<LedgerEntry>> {
        (**self).statement(tax_id)
    }

    fn statement_on(&self, tax_id: &TaxId, date: NaiveDate) -> DomainResult<Vec<LedgerEntry>> {
        (**self).statement_on(tax_id, date)
    }

    fn balance(&self, tax_id: &TaxId) -> DomainResult<Decimal> {
        (**self).balance(tax_id)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// In-memory directory guarded by a single `RwLock`.
#[derive(Debug, Default)]
pub struct InMemoryAccountDirectory {
    inner: RwLock<HashMap<TaxId, Account>>,
}

impl InMemoryAccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, HashMap<TaxId, Account>>> {
        self.inner
            .read()
            .map_err(|_| DomainError::internal("account directory lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, HashMap<TaxId, Account>>> {
        self.inner
            .write()
            .map_err(|_| DomainError::internal("account directory lock poisoned"))
    }

    fn with_account<T>(
        &self,
        tax_id: &TaxId,
        f: impl FnOnce(&mut Account) -> DomainResult<T>,
    ) -> DomainResult<T> {
        let mut map = self.write()?;
        let account = map.get_mut(tax_id).ok_or(DomainError::NotFound)?;
        f(account)
    }
}

impl AccountDirectory for InMemoryAccountDirectory {
    fn create(&self, tax_id: TaxId, name: String) -> DomainResult<Account> {
        let mut map = self.write()?;
        if map.contains_key(&tax_id) {
            return Err(DomainError::duplicate_tax_id(tax_id.as_str()));
        }

        let account = Account::open(tax_id.clone(), name);
        map.insert(tax_id, account.clone());
        tracing::debug!(tax_id = %account.tax_id(), "account opened");
        Ok(account)
    }

    fn find(&self, tax_id: &TaxId) -> DomainResult<Account> {
        self.read()?.get(tax_id).cloned().ok_or(DomainError::NotFound)
    }

    fn contains(&self, tax_id: &TaxId) -> DomainResult<bool> {
        Ok(self.read()?.contains_key(tax_id))
    }

    fn rename(&self, tax_id: &TaxId, name: String) -> DomainResult<()> {
        self.with_account(tax_id, |account| {
            account.rename(name);
            Ok(())
        })
    }

    fn delete(&self, tax_id: &TaxId) -> DomainResult<Account> {
        let removed = self.write()?.remove(tax_id).ok_or(DomainError::NotFound)?;
        tracing::debug!(tax_id = %tax_id, "account closed");
        Ok(removed)
    }

    fn deposit(
        &self,
        tax_id: &TaxId,
        description: Option<String>,
        amount: Amount,
        at: DateTime<Utc>,
    ) -> DomainResult<LedgerEntry> {
        self.with_account(tax_id, |account| account.deposit(description, amount, at))
    }

    fn withdraw(&self, tax_id: &TaxId, amount: Amount, at: DateTime<Utc>) -> DomainResult<LedgerEntry> {
        self.with_account(tax_id, |account| account.withdraw(amount, at))
    }

    fn statement(&self, tax_id: &TaxId) -> DomainResult<Vec<LedgerEntry>> {
        let map = self.read()?;
        let account = map.get(tax_id).ok_or(DomainError::NotFound)?;
        Ok(account.statements().to_vec())
    }

    fn statement_on(&self, tax_id: &TaxId, date: NaiveDate) -> DomainResult<Vec<LedgerEntry>> {
        let map = self.read()?;
        let account = map.get(tax_id).ok_or(DomainError::NotFound)?;
        Ok(account.statement_on(date))
    }

    fn balance(&self, tax_id: &TaxId) -> DomainResult<Decimal> {
        let map = self.read()?;
        let account = map.get(tax_id).ok_or(DomainError::NotFound)?;
        account.balance()
    }

    fn len(&self) -> usize {
        self.read().map(|map| map.len()).unwrap_or(0)
    }
}
