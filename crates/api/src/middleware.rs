use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use finledger_core::{DomainError, TaxId};

use crate::app::{SharedDirectory, errors};
use crate::context::AccountContext;

/// Request header carrying the caller's tax id.
pub const TAX_ID_HEADER: &str = "tax_id";

/// Resolve the `tax_id` header to a registered account or stop with 404.
///
/// A missing or blank header is treated like an unknown tax id.
pub async fn require_account(
    State(directory): State<SharedDirectory>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let Some(tax_id) = extract_tax_id(req.headers()) else {
        return errors::domain_error_to_response(DomainError::NotFound);
    };

    match directory.contains(&tax_id) {
        Ok(true) => {}
        Ok(false) => {
            tracing::debug!(tax_id = %tax_id, "unknown tax id");
            return errors::domain_error_to_response(DomainError::NotFound);
        }
        Err(e) => return errors::domain_error_to_response(e),
    }

    req.extensions_mut().insert(AccountContext::new(tax_id));

    next.run(req).await
}

fn extract_tax_id(headers: &HeaderMap) -> Option<TaxId> {
    let header = headers.get(TAX_ID_HEADER)?;
    let header = header.to_str().ok()?;
    TaxId::parse(header).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn tax_id_header_is_read_verbatim() {
        let mut headers = HeaderMap::new();
        headers.insert(TAX_ID_HEADER, HeaderValue::from_static("111"));
        assert_eq!(extract_tax_id(&headers), Some(TaxId::parse("111").unwrap()));
    }

    #[test]
    fn missing_or_blank_header_yields_none() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_tax_id(&headers), None);

        headers.insert(TAX_ID_HEADER, HeaderValue::from_static("   "));
        assert_eq!(extract_tax_id(&headers), None);
    }
}
