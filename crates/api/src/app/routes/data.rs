use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Extension, Query},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::Value as JsonValue;

use ainventory_infra::query::DataQuery;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/", get(get_data).post(post_data))
}

pub async fn get_data(
    Extension(services): Extension<Arc<AppServices>>,
    params: Result<Query<dto::QueryParams>, QueryRejection>,
) -> axum::response::Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(e) => return errors::query_rejection_to_response(e),
    };

    let query = DataQuery::from_params(
        params.first("type"),
        params.first("warehouse"),
        params.first("category"),
    );
    let result = query.execute(&services.dataset());
    tracing::debug!(
        record_type = ?query.record_type,
        rows = result.len(),
        "served data query"
    );
    Json(dto::DataEnvelope::new(result)).into_response()
}

/// Body is parsed as JSON whatever its declared content type.
pub async fn post_data(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> axum::response::Response {
    let body: JsonValue = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => return errors::invalid_body_to_response(e),
    };
    let request = dto::DataCommandRequest::from_json(&body);

    let action = request.action.unwrap_or_default();
    match services.dispatcher().dispatch(&action, request.data) {
        Ok(ack) => Json(ack).into_response(),
        Err(e) => errors::dispatch_error_to_response(e),
    }
}
