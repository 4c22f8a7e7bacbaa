use axum::{response::IntoResponse, Json};

pub const SERVICE_NAME: &str = "ainventory-api";

pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "AInventory API is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": SERVICE_NAME,
    }))
}
