use axum::{
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::{dto, errors, SharedDirectory};
use crate::context::AccountContext;

pub async fn create_account(
    Extension(directory): Extension<SharedDirectory>,
    body: Result<Json<dto::CreateAccountRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(v) => v,
        Err(e) => return errors::json_rejection_to_response(e),
    };
    let tax_id = match dto::parse_tax_id(&body.tax_id) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match directory.create(tax_id, body.name) {
        Ok(account) => {
            tracing::info!(tax_id = %account.tax_id(), "account created");
            (StatusCode::CREATED, Json(account)).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "account creation rejected");
            errors::domain_error_to_response(e)
        }
    }
}

pub async fn update_account(
    Extension(directory): Extension<SharedDirectory>,
    Extension(ctx): Extension<AccountContext>,
    body: Result<Json<dto::UpdateAccountRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(v) => v,
        Err(e) => return errors::json_rejection_to_response(e),
    };
    match directory.rename(ctx.tax_id(), body.name) {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_account(
    Extension(directory): Extension<SharedDirectory>,
    Extension(ctx): Extension<AccountContext>,
) -> axum::response::Response {
    match directory.find(ctx.tax_id()) {
        Ok(account) => (StatusCode::OK, Json(account)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_account(
    Extension(directory): Extension<SharedDirectory>,
    Extension(ctx): Extension<AccountContext>,
) -> axum::response::Response {
    match directory.delete(ctx.tax_id()) {
        Ok(account) => {
            tracing::info!(tax_id = %ctx.tax_id(), "account deleted");
            (StatusCode::OK, Json(account)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
