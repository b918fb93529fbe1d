use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::error::StorageError;
use super::key::ObjectKey;
use super::traits::ObjectStore;

const OBJECTS_DIR: &str = "objects";
const TEMP_DIR: &str = "tmp";

/// Filesystem-backed object store.
///
/// Objects live at `{root}/objects/{key}` and in-flight writes at
/// `{root}/tmp`. Only the objects directory may be served under
/// `public_base`.
pub struct FilesystemObjectStore {
    objects_dir: PathBuf,
    temp_dir: PathBuf,
    public_base: String,
    max_size: u64,
}

impl FilesystemObjectStore {
    /// Create a new filesystem object store.
    pub async fn new(
        root: PathBuf,
        public_base: impl Into<String>,
        max_size: u64,
    ) -> Result<Self, StorageError> {
        let objects_dir = Self::objects_dir(&root);
        let temp_dir = root.join(TEMP_DIR);
        fs::create_dir_all(&objects_dir).await?;
        fs::create_dir_all(&temp_dir).await?;
        Ok(Self {
            objects_dir,
            temp_dir,
            public_base: public_base.into(),
            max_size,
        })
    }

    /// Directory under `root` that holds the stored objects.
    pub fn objects_dir(root: &Path) -> PathBuf {
        root.join(OBJECTS_DIR)
    }

    fn object_path(&self, key: &ObjectKey) -> PathBuf {
        key.segments()
            .fold(self.objects_dir.clone(), |path, segment| path.join(segment))
    }

    /// Path for a temporary file during writes. Same filesystem as the
    /// objects, so it can be hard-linked into place.
    fn temp_path(&self) -> PathBuf {
        self.temp_dir.join(uuid::Uuid::new_v4().to_string())
    }
}

#[async_trait]
impl ObjectStore for FilesystemObjectStore {
    async fn put(
        &self,
        key: &ObjectKey,
        data: &[u8],
        _content_type: Option<&str>,
    ) -> Result<(), StorageError> {
        if data.len() as u64 > self.max_size {
            return Err(StorageError::SizeLimitExceeded {
                actual: data.len() as u64,
                limit: self.max_size,
            });
        }

        let object_path = self.object_path(key);
        if let Some(parent) = object_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let temp_path = self.temp_path();
        if let Err(e) = fs::write(&temp_path, data).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        // hard_link refuses to replace an existing file, unlike rename.
        let linked = fs::hard_link(&temp_path, &object_path).await;
        let _ = fs::remove_file(&temp_path).await;
        match linked {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                Err(StorageError::AlreadyExists(key.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, key: &ObjectKey) -> Result<bool, StorageError> {
        Ok(fs::try_exists(self.object_path(key)).await?)
    }

    async fn delete(&self, key: &ObjectKey) -> Result<bool, StorageError> {
        match fs::remove_file(self.object_path(key)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn public_base(&self) -> &str {
        &self.public_base
    }
}
