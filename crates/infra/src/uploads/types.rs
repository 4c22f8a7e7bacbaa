//! Upload types, MIME allow-list and file-name rules.

use std::ffi::OsStr;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("file name is empty")]
    EmptyFileName,

    #[error("invalid file name: {0}")]
    InvalidFileName(String),

    #[error("upload not found: {0}")]
    NotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Accepted spreadsheet formats, keyed by declared MIME type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UploadKind {
    Xlsx,
    Xls,
    Csv,
}

impl UploadKind {
    /// Match a declared content type. Parameters such as `; charset=utf-8` are
    /// ignored and the comparison is case-insensitive. The file extension plays
    /// no part.
    pub fn from_mime(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => Some(Self::Xlsx),
            "application/vnd.ms-excel" => Some(Self::Xls),
            "text/csv" | "application/csv" => Some(Self::Csv),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            UploadKind::Xlsx => "xlsx",
            UploadKind::Xls => "xls",
            UploadKind::Csv => "csv",
        }
    }
}

/// Result of a successful write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUpload {
    pub file_name: String,
    pub file_size: u64,
    pub file_type: String,
}

/// A file currently present in the upload directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadEntry {
    pub file_name: String,
    pub file_size: u64,
}

/// Reduce a client-supplied name to a safe single path component.
///
/// Directory parts (either separator) are dropped and spaces become `_`.
pub fn sanitize_file_name(original: &str) -> Result<String, UploadError> {
    let last = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();
    if last.is_empty() {
        return Err(UploadError::EmptyFileName);
    }
    if last == "." || last == ".." || last.contains('\0') {
        return Err(UploadError::InvalidFileName(original.to_string()));
    }
    Ok(last.replace(' ', "_"))
}

/// True when `name` can be joined onto the upload directory without escaping it.
pub(crate) fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
        && Path::new(name).file_name() == Some(OsStr::new(name))
}
