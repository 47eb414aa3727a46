use axum::{
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::app::{dto, errors, SharedDirectory};
use crate::context::AccountContext;

pub async fn deposit(
    Extension(directory): Extension<SharedDirectory>,
    Extension(ctx): Extension<AccountContext>,
    body: Result<Json<dto::DepositRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(v) => v,
        Err(e) => return errors::json_rejection_to_response(e),
    };
    let amount = match dto::parse_amount(body.amount) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match directory.deposit(ctx.tax_id(), body.description, amount, Utc::now()) {
        Ok(entry) => {
            tracing::info!(tax_id = %ctx.tax_id(), %amount, "deposit recorded");
            (StatusCode::CREATED, Json(entry)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn withdraw(
    Extension(directory): Extension<SharedDirectory>,
    Extension(ctx): Extension<AccountContext>,
    body: Result<Json<dto::WithdrawRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(v) => v,
        Err(e) => return errors::json_rejection_to_response(e),
    };
    let amount = match dto::parse_amount(body.amount) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match directory.withdraw(ctx.tax_id(), amount, Utc::now()) {
        Ok(entry) => {
            tracing::info!(tax_id = %ctx.tax_id(), %amount, "withdrawal recorded");
            (StatusCode::CREATED, Json(entry)).into_response()
        }
        Err(e) => {
            tracing::warn!(tax_id = %ctx.tax_id(), error = %e, "withdrawal rejected");
            errors::domain_error_to_response(e)
        }
    }
}
