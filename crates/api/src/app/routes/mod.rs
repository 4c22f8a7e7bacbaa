use axum::Router;

pub mod dashboard;
pub mod data;
pub mod system;
pub mod uploads;

/// Router for everything under `/api`.
pub fn router(max_upload_bytes: usize) -> Router {
    Router::new()
        .nest("/data", data::router())
        .nest("/dashboard", dashboard::router())
        .merge(uploads::router(max_upload_bytes))
}
