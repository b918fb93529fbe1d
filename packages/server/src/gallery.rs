//! Merge-and-fallback accessor over the remote record store and the embedded
//! catalog.
//!
//! Every list query returns remote records first, then embedded ones. A failing
//! remote source never fails the query: the error is logged and the embedded
//! result is returned on its own.

use std::future::Future;
use std::sync::Arc;

use common::catalog::{Category, ImageRecord, REMOTE_ID_PREFIX, SkyStats, TravelPhotoRecord};
use futures::future::join_all;
use tracing::{instrument, warn};

use crate::store::{RecordSource, StoreError};

#[derive(Clone)]
pub struct Gallery {
    remote: Arc<dyn RecordSource>,
    embedded: Arc<dyn RecordSource>,
}

impl Gallery {
    pub fn new(remote: Arc<dyn RecordSource>, embedded: Arc<dyn RecordSource>) -> Self {
        Self { remote, embedded }
    }

    /// Run both sources concurrently and concatenate, remote first.
    async fn merge<T, R, E>(&self, operation: &'static str, remote: R, embedded: E) -> Vec<T>
    where
        R: Future<Output = Result<Vec<T>, StoreError>>,
        E: Future<Output = Result<Vec<T>, StoreError>>,
    {
        let (remote, embedded) = tokio::join!(remote, embedded);
        let mut embedded = embedded.unwrap_or_else(|err| {
            warn!(operation, error = %err, "Embedded catalog query failed");
            Vec::new()
        });
        match remote {
            Ok(mut records) => {
                records.append(&mut embedded);
                records
            }
            Err(err) => {
                warn!(operation, error = %err, "Remote store unavailable, serving embedded records");
                embedded
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn list_by_category(&self, category: Category) -> Vec<ImageRecord> {
        self.merge(
            "list_by_category",
            self.remote.images_by_category(category),
            self.embedded.images_by_category(category),
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn list_featured(&self) -> Vec<ImageRecord> {
        self.merge(
            "list_featured",
            self.remote.featured_images(),
            self.embedded.featured_images(),
        )
        .await
    }

    /// Routed by id prefix: only the source owning the id is queried.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Option<ImageRecord> {
        let (source, label) = if id.starts_with(REMOTE_ID_PREFIX) {
            (&self.remote, "remote")
        } else {
            (&self.embedded, "embedded")
        };
        match source.image(id).await {
            Ok(record) => record,
            Err(err) => {
                warn!(source = label, error = %err, "Image lookup failed");
                None
            }
        }
    }

    /// Sum of both sources' counts.
    #[instrument(skip(self))]
    pub async fn count_by_category(&self, category: Category) -> u64 {
        let (remote, embedded) = tokio::join!(
            self.remote.count_by_category(category),
            self.embedded.count_by_category(category),
        );
        let embedded = embedded.unwrap_or_else(|err| {
            warn!(error = %err, "Embedded catalog count failed");
            0
        });
        match remote {
            Ok(count) => count + embedded,
            Err(err) => {
                warn!(error = %err, "Remote store unavailable, counting embedded records");
                embedded
            }
        }
    }

    /// Counts for every category, fetched concurrently, in navigation order.
    pub async fn category_counts(&self) -> Vec<(Category, u64)> {
        let counts = join_all(Category::ALL.map(|c| self.count_by_category(c))).await;
        Category::ALL.into_iter().zip(counts).collect()
    }

    pub async fn sky_stats(&self) -> SkyStats {
        SkyStats::from_counts(&self.category_counts().await)
    }

    #[instrument(skip(self))]
    pub async fn list_all_travel_photos(&self) -> Vec<TravelPhotoRecord> {
        self.merge(
            "list_all_travel_photos",
            self.remote.travel_photos(),
            self.embedded.travel_photos(),
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn list_travel_photos_by_album(&self, album: &str) -> Vec<TravelPhotoRecord> {
        self.merge(
            "list_travel_photos_by_album",
            self.remote.travel_photos_by_album(album),
            self.embedded.travel_photos_by_album(album),
        )
        .await
    }

    /// Union of both sources' albums. Embedded albums keep their order and
    /// come first; new remote albums follow.
    #[instrument(skip(self))]
    pub async fn list_albums(&self) -> Vec<String> {
        let (remote, embedded) = tokio::join!(self.remote.albums(), self.embedded.albums());
        let mut albums = embedded.unwrap_or_else(|err| {
            warn!(error = %err, "Embedded catalog albums failed");
            Vec::new()
        });
        match remote {
            Ok(remote) => {
                for album in remote {
                    if !albums.contains(&album) {
                        albums.push(album);
                    }
                }
            }
            Err(err) => warn!(error = %err, "Remote store unavailable, listing embedded albums"),
        }
        albums
    }
}
