use std::sync::Arc;

use ainventory_infra::{
    Dataset,
    command_dispatcher::DataCommandDispatcher,
    uploads::{FsUploadStore, UploadStore},
};

use crate::config::ApiConfig;

/// Shared, immutable service wiring handed to every handler.
///
/// Holds no per-request data: the dataset is rebuilt for each request.
#[derive(Clone)]
pub struct AppServices {
    uploads: Arc<dyn UploadStore>,
    dispatcher: DataCommandDispatcher,
    max_upload_bytes: usize,
}

impl AppServices {
    pub fn new(uploads: Arc<dyn UploadStore>, max_upload_bytes: usize) -> Self {
        Self {
            uploads,
            dispatcher: DataCommandDispatcher::new(),
            max_upload_bytes,
        }
    }

    pub fn uploads(&self) -> &dyn UploadStore {
        self.uploads.as_ref()
    }

    pub fn dispatcher(&self) -> &DataCommandDispatcher {
        &self.dispatcher
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    /// A fresh copy of the data for one request.
    pub fn dataset(&self) -> Dataset {
        Dataset::sample()
    }
}

pub fn build_services(config: &ApiConfig) -> AppServices {
    let store = Arc::new(FsUploadStore::new(config.upload_dir.clone()));
    AppServices::new(store, config.max_upload_bytes)
}
