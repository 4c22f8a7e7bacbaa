use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Extension, Multipart, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};

use ainventory_infra::uploads::{upload_templates, UploadKind};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

const FILE_FIELD: &str = "file";
const MSG_UPLOADED: &str = "Файл успешно загружен";
const MSG_UPLOAD_REMOVED: &str = "Загрузка успешно удалена";

/// Multipart framing allowance on top of the file itself, so an oversized file
/// is rejected by the explicit size check rather than the transport limit.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn router(max_upload_bytes: usize) -> Router {
    Router::new()
        .route(
            "/upload",
            post(upload_file).layer(DefaultBodyLimit::max(
                max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES),
            )),
        )
        .route("/uploads", get(list_uploads))
        .route("/uploads/:file_name", delete(delete_upload))
        .route("/templates", get(get_templates))
}

/// Accept one spreadsheet from the multipart field `file` and store it as-is.
///
/// The declared content type is checked before the body of the field is read.
pub async fn upload_file(
    Extension(services): Extension<Arc<AppServices>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> axum::response::Response {
    let mut multipart = match multipart {
        Ok(m) => m,
        Err(e) => {
            tracing::debug!(error = %e, "upload without multipart body");
            return errors::json_error(StatusCode::BAD_REQUEST, "missing_file", errors::MSG_FILE_MISSING);
        }
    };

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => return errors::multipart_error_to_response(e),
        };
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();

        let Some(kind) = UploadKind::from_mime(&content_type) else {
            tracing::info!(%content_type, file_name = %original_name, "rejected upload type");
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "unsupported_type",
                errors::MSG_UNSUPPORTED_TYPE,
            );
        };

        let bytes = match field.bytes().await {
            Ok(b) => b,
            Err(e) => return errors::multipart_error_to_response(e),
        };
        if bytes.len() > services.max_upload_bytes() {
            tracing::info!(size = bytes.len(), limit = services.max_upload_bytes(), "rejected oversized upload");
            return errors::json_error(StatusCode::BAD_REQUEST, "file_too_large", errors::MSG_FILE_TOO_LARGE);
        }

        return match services.uploads().save(&original_name, &content_type, &bytes).await {
            Ok(upload) => {
                tracing::info!(
                    file_name = %upload.file_name,
                    size = upload.file_size,
                    kind = kind.extension(),
                    "stored upload"
                );
                Json(dto::UploadResponse {
                    message: MSG_UPLOADED,
                    upload,
                })
                .into_response()
            }
            Err(e) => errors::upload_error_to_response(e),
        };
    }

    errors::json_error(StatusCode::BAD_REQUEST, "missing_file", errors::MSG_FILE_MISSING)
}

pub async fn list_uploads(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.uploads().list().await {
        Ok(entries) => Json(dto::DataEnvelope::new(entries)).into_response(),
        Err(e) => errors::upload_error_to_response(e),
    }
}

pub async fn delete_upload(
    Extension(services): Extension<Arc<AppServices>>,
    Path(file_name): Path<String>,
) -> axum::response::Response {
    match services.uploads().remove(&file_name).await {
        Ok(()) => {
            tracing::info!(%file_name, "removed upload");
            Json(dto::MessageResponse {
                message: MSG_UPLOAD_REMOVED,
            })
            .into_response()
        }
        Err(e) => errors::upload_error_to_response(e),
    }
}

pub async fn get_templates() -> impl IntoResponse {
    Json(upload_templates())
}
