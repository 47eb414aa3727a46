use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use finledger_core::{Amount, DomainError, DomainResult, TaxId};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub tax_id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    pub description: Option<String>,
    pub amount: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    pub amount: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct StatementDateQuery {
    pub date: Option<String>, // YYYY-MM-DD
}

// -------------------------
// Parsing helpers
// -------------------------

pub fn parse_tax_id(raw: &str) -> DomainResult<TaxId> {
    TaxId::parse(raw)
}

pub fn parse_amount(raw: Decimal) -> DomainResult<Amount> {
    Amount::new(raw)
}

pub fn parse_date(raw: Option<&str>) -> DomainResult<NaiveDate> {
    let raw = raw.ok_or_else(|| DomainError::validation("query parameter `date` is required"))?;
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| DomainError::validation(format!("date must be YYYY-MM-DD: {e}")))
}
