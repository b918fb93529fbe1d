use std::sync::Arc;

use common::storage::ObjectStore;

use crate::config::AppConfig;
use crate::gallery::Gallery;
use crate::store::RecordStore;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    /// Merged read path for public pages.
    pub gallery: Gallery,
    /// Remote record store, for admin mutations.
    pub records: Arc<dyn RecordStore>,
    pub objects: Arc<dyn ObjectStore>,
}
