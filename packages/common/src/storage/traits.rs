use async_trait::async_trait;

use super::error::StorageError;
use super::key::ObjectKey;

/// Path-addressed object storage with public URLs.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store bytes under `key`. Fails with `AlreadyExists` instead of overwriting.
    async fn put(
        &self,
        key: &ObjectKey,
        data: &[u8],
        content_type: Option<&str>,
    ) -> Result<(), StorageError>;

    /// Check whether an object exists.
    async fn exists(&self, key: &ObjectKey) -> Result<bool, StorageError>;

    /// Delete an object.
    ///
    /// Returns `true` if the object was deleted, `false` if it did not exist.
    async fn delete(&self, key: &ObjectKey) -> Result<bool, StorageError>;

    /// Base URL under which stored objects are publicly served.
    fn public_base(&self) -> &str;

    fn public_url(&self, key: &ObjectKey) -> String {
        format!("{}/{}", self.public_base().trim_end_matches('/'), key)
    }

    /// Recover the key from a URL produced by [`ObjectStore::public_url`].
    ///
    /// Returns `None` for URLs that point elsewhere, such as embedded catalog
    /// assets.
    fn key_from_public_url(&self, url: &str) -> Option<ObjectKey> {
        let base = self.public_base().trim_end_matches('/');
        let rest = url.strip_prefix(base)?.strip_prefix('/')?;
        ObjectKey::parse(rest).ok()
    }
}
