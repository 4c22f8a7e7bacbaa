//! Spreadsheet upload intake.
//!
//! ## Components
//!
//! - `UploadKind`: MIME allow-list (Excel and CSV)
//! - `UploadStore`: where accepted bytes end up (`FsUploadStore` writes to a directory)
//! - `templates`: expected column layouts, served to clients before they upload
//!
//! File contents are stored as-is and never parsed.

pub mod store;
pub mod templates;
pub mod types;

pub use store::{FsUploadStore, UploadStore};
pub use templates::{UploadTemplate, upload_templates};
pub use types::{StoredUpload, UploadEntry, UploadError, UploadKind, sanitize_file_name};
