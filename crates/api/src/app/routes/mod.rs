use axum::{
    Router,
    routing::{get, post},
};

use crate::app::SharedDirectory;
use crate::middleware;

pub mod accounts;
pub mod statements;
pub mod system;
pub mod transactions;

/// Router for every account endpoint.
///
/// Opening an account is public; everything else resolves the `tax_id` header
/// through `middleware::require_account` first.
pub fn router(directory: SharedDirectory) -> Router {
    let protected = Router::new()
        .route(
            "/account",
            get(accounts::get_account)
                .put(accounts::update_account)
                .delete(accounts::delete_account),
        )
        .route("/statement", get(statements::get_statement))
        .route("/statement/date", get(statements::get_statement_by_date))
        .route("/balance", get(statements::get_balance))
        .route("/deposit", post(transactions::deposit))
        .route("/withdraw", post(transactions::withdraw))
        .route_layer(axum::middleware::from_fn_with_state(
            directory,
            middleware::require_account,
        ));

    Router::new()
        .route("/account", post(accounts::create_account))
        .merge(protected)
}
