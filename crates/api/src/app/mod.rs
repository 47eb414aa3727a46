//! HTTP API application wiring (Axum router + shared state).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and parsing helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use finledger_accounts::AccountDirectory;

pub mod dto;
pub mod errors;
pub mod routes;

/// Directory handle shared by the middleware and every handler.
pub type SharedDirectory = Arc<dyn AccountDirectory>;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(directory: SharedDirectory) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router(directory.clone()))
        .layer(Extension(directory))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
