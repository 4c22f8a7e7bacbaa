use axum::extract::multipart::MultipartError;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use ainventory_infra::command_dispatcher::DispatchError;
use ainventory_infra::uploads::UploadError;

pub const MSG_FILE_MISSING: &str = "Файл не найден";
pub const MSG_FILE_NAME_MISSING: &str = "Имя файла не указано";
pub const MSG_UNSUPPORTED_TYPE: &str =
    "Неподдерживаемый тип файла. Используйте Excel (.xlsx, .xls) или CSV";
pub const MSG_FILE_TOO_LARGE: &str = "Файл слишком большой";
pub const MSG_UPLOAD_FAILED: &str = "Ошибка загрузки файла";
pub const MSG_UNKNOWN_ACTION: &str = "Неизвестное действие";
pub const MSG_BAD_REQUEST_BODY: &str = "Ошибка обработки данных";
pub const MSG_UPLOAD_NOT_FOUND: &str = "Загрузка не найдена";

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
            "code": code,
        })),
    )
        .into_response()
}

pub fn dispatch_error_to_response(err: DispatchError) -> axum::response::Response {
    match err {
        DispatchError::UnknownAction(action) => {
            tracing::info!(%action, "rejected unknown data action");
            json_error(StatusCode::BAD_REQUEST, "unknown_action", MSG_UNKNOWN_ACTION)
        }
    }
}

pub fn upload_error_to_response(err: UploadError) -> axum::response::Response {
    match err {
        UploadError::EmptyFileName => {
            json_error(StatusCode::BAD_REQUEST, "missing_file_name", MSG_FILE_NAME_MISSING)
        }
        UploadError::InvalidFileName(name) => json_error(
            StatusCode::BAD_REQUEST,
            "invalid_file_name",
            format!("invalid file name: {name}"),
        ),
        UploadError::NotFound(_) => {
            json_error(StatusCode::NOT_FOUND, "not_found", MSG_UPLOAD_NOT_FOUND)
        }
        UploadError::Io(e) => {
            tracing::error!(error = %e, "upload storage failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "storage_error", MSG_UPLOAD_FAILED)
        }
    }
}

pub fn multipart_error_to_response(err: MultipartError) -> axum::response::Response {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return json_error(StatusCode::BAD_REQUEST, "file_too_large", MSG_FILE_TOO_LARGE);
    }
    tracing::debug!(error = %err, "malformed multipart body");
    json_error(StatusCode::BAD_REQUEST, "invalid_multipart", err.body_text())
}

pub fn invalid_body_to_response(err: serde_json::Error) -> axum::response::Response {
    tracing::debug!(error = %err, "rejected request body");
    json_error(
        StatusCode::BAD_REQUEST,
        "invalid_body",
        format!("{MSG_BAD_REQUEST_BODY}: {err}"),
    )
}

pub fn query_rejection_to_response(err: QueryRejection) -> axum::response::Response {
    tracing::debug!(error = %err, "rejected query string");
    json_error(StatusCode::BAD_REQUEST, "invalid_query", err.body_text())
}
