use finledger_core::TaxId;

/// Account context for a request.
///
/// Inserted by `middleware::require_account` once the `tax_id` header has been
/// resolved to a registered account. Handlers behind that middleware can rely
/// on it being present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountContext {
    tax_id: TaxId,
}

impl AccountContext {
    pub fn new(tax_id: TaxId) -> Self {
        Self { tax_id }
    }

    pub fn tax_id(&self) -> &TaxId {
        &self.tax_id
    }
}
