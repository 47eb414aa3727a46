use axum::{extract::Extension, response::IntoResponse, Json};

use crate::app::SharedDirectory;

pub async fn health(Extension(directory): Extension<SharedDirectory>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "accounts": directory.len(),
    }))
}
