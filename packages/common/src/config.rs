use std::path::PathBuf;

use serde::Deserialize;

/// Which object storage backend holds uploaded images.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Filesystem,
    S3,
}

/// S3-compatible bucket settings.
#[derive(Debug, Deserialize, Clone)]
pub struct S3Config {
    pub bucket: String,
    pub region: String,
    /// Endpoint URL for non-AWS services (MinIO, R2, ...).
    pub endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    #[serde(default = "default_path_style")]
    pub path_style: bool,
}

/// App-level object storage configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct StorageAppConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    /// Directory for the filesystem backend. Default: "./media".
    #[serde(default = "default_storage_root")]
    pub root: PathBuf,
    /// URL prefix under which objects are publicly reachable. Default: "/media".
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    /// Largest accepted upload in bytes. Default: 50 MiB.
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size: u64,
    #[serde(default)]
    pub s3: Option<S3Config>,
}

fn default_path_style() -> bool {
    true
}
fn default_storage_root() -> PathBuf {
    PathBuf::from("./media")
}
fn default_public_base_url() -> String {
    "/media".into()
}
fn default_max_upload_size() -> u64 {
    50 * 1024 * 1024
}

impl Default for StorageAppConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            root: default_storage_root(),
            public_base_url: default_public_base_url(),
            max_upload_size: default_max_upload_size(),
            s3: None,
        }
    }
}
