use async_trait::async_trait;
use s3::creds::Credentials;
use s3::{Bucket, Region};

use super::error::StorageError;
use super::key::ObjectKey;
use super::traits::ObjectStore;
use crate::config::S3Config;

/// Object store backed by an S3-compatible bucket.
pub struct S3ObjectStore {
    bucket: Box<Bucket>,
    public_base: String,
    max_size: u64,
}

fn backend_err(err: impl std::fmt::Display) -> StorageError {
    StorageError::Backend(err.to_string())
}

impl S3ObjectStore {
    pub fn new(
        config: &S3Config,
        public_base: impl Into<String>,
        max_size: u64,
    ) -> Result<Self, StorageError> {
        let region = Region::Custom {
            region: config.region.clone(),
            endpoint: config.endpoint.clone(),
        };
        let credentials = Credentials::new(
            Some(&config.access_key),
            Some(&config.secret_key),
            None,
            None,
            None,
        )
        .map_err(backend_err)?;

        let mut bucket = Bucket::new(&config.bucket, region, credentials).map_err(backend_err)?;
        if config.path_style {
            bucket = bucket.with_path_style();
        }

        Ok(Self {
            bucket,
            public_base: public_base.into(),
            max_size,
        })
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(
        &self,
        key: &ObjectKey,
        data: &[u8],
        content_type: Option<&str>,
    ) -> Result<(), StorageError> {
        if data.len() as u64 > self.max_size {
            return Err(StorageError::SizeLimitExceeded {
                actual: data.len() as u64,
                limit: self.max_size,
            });
        }
        // Not atomic: a concurrent writer can slip in between the check and the put.
        if self.exists(key).await? {
            return Err(StorageError::AlreadyExists(key.to_string()));
        }

        let response = self
            .bucket
            .put_object_with_content_type(
                key.as_str(),
                data,
                content_type.unwrap_or("application/octet-stream"),
            )
            .await
            .map_err(backend_err)?;

        match response.status_code() {
            200..=299 => Ok(()),
            code => Err(StorageError::Backend(format!(
                "put {key} returned status {code}"
            ))),
        }
    }

    async fn exists(&self, key: &ObjectKey) -> Result<bool, StorageError> {
        let (_, code) = self
            .bucket
            .head_object(key.as_str())
            .await
            .map_err(backend_err)?;

        match code {
            200..=299 => Ok(true),
            404 => Ok(false),
            code => Err(StorageError::Backend(format!(
                "head {key} returned status {code}"
            ))),
        }
    }

    async fn delete(&self, key: &ObjectKey) -> Result<bool, StorageError> {
        // S3 answers 204 for missing keys too, so probe first to report `false`.
        if !self.exists(key).await? {
            return Ok(false);
        }

        let response = self
            .bucket
            .delete_object(key.as_str())
            .await
            .map_err(backend_err)?;

        match response.status_code() {
            200..=299 => Ok(true),
            404 => Ok(false),
            code => Err(StorageError::Backend(format!(
                "delete {key} returned status {code}"
            ))),
        }
    }

    fn public_base(&self) -> &str {
        &self.public_base
    }
}
