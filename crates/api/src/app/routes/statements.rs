use axum::{
    extract::{Extension, Query, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::{dto, errors, SharedDirectory};
use crate::context::AccountContext;

pub async fn get_statement(
    Extension(directory): Extension<SharedDirectory>,
    Extension(ctx): Extension<AccountContext>,
) -> axum::response::Response {
    match directory.statement(ctx.tax_id()) {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_statement_by_date(
    Extension(directory): Extension<SharedDirectory>,
    Extension(ctx): Extension<AccountContext>,
    query: Result<Query<dto::StatementDateQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(v) => v,
        Err(e) => return errors::query_rejection_to_response(e),
    };
    let date = match dto::parse_date(query.date.as_deref()) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match directory.statement_on(ctx.tax_id(), date) {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// Balance is returned as a bare JSON number.
pub async fn get_balance(
    Extension(directory): Extension<SharedDirectory>,
    Extension(ctx): Extension<AccountContext>,
) -> axum::response::Response {
    match directory.balance(ctx.tax_id()) {
        Ok(balance) => (StatusCode::OK, Json(balance)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
