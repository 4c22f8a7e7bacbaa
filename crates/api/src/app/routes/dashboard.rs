use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Extension, Query},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use ainventory_infra::projections::DashboardSummary;
use ainventory_infra::query::DataFilter;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/", get(get_dashboard))
}

pub async fn get_dashboard(
    Extension(services): Extension<Arc<AppServices>>,
    params: Result<Query<dto::QueryParams>, QueryRejection>,
) -> axum::response::Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(e) => return errors::query_rejection_to_response(e),
    };

    let non_empty = |key: &str| params.first(key).filter(|v| !v.is_empty()).map(str::to_string);
    let filter = DataFilter {
        warehouse: non_empty("warehouse"),
        category: non_empty("category"),
    };
    let summary = DashboardSummary::build(&filter.apply(&services.dataset()));
    Json(summary).into_response()
}
