//! Record sources behind the gallery: the remote Postgres store and the
//! catalog embedded in the binary.

mod database;
mod embedded;
pub mod mapping;

use async_trait::async_trait;
use common::catalog::{Category, ImageRecord, TravelPhotoRecord};
use sea_orm::DbErr;
use uuid::Uuid;

use crate::entity::{image, travel_photo};

pub use database::DatabaseRecordStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] DbErr),
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

/// One read method per gallery query shape.
///
/// List methods return records newest first for the remote store and in
/// declaration order for the embedded catalog.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn images_by_category(&self, category: Category)
    -> Result<Vec<ImageRecord>, StoreError>;

    async fn featured_images(&self) -> Result<Vec<ImageRecord>, StoreError>;

    /// Look up by public id. Ids this source does not own resolve to `None`.
    async fn image(&self, id: &str) -> Result<Option<ImageRecord>, StoreError>;

    async fn count_by_category(&self, category: Category) -> Result<u64, StoreError>;

    async fn travel_photos(&self) -> Result<Vec<TravelPhotoRecord>, StoreError>;

    async fn travel_photos_by_album(
        &self,
        album: &str,
    ) -> Result<Vec<TravelPhotoRecord>, StoreError>;

    /// Distinct non-empty album labels.
    async fn albums(&self) -> Result<Vec<String>, StoreError>;
}

/// Fields for a new image row.
#[derive(Debug, Clone)]
pub struct NewImage {
    pub designation: String,
    pub name: Option<String>,
    pub category: Category,
    pub observatory: String,
    pub filters: Option<String>,
    pub description: Option<String>,
    pub image_path: String,
    pub thumbnail_path: Option<String>,
    pub date_captured: Option<String>,
    pub exposure: Option<String>,
    pub technical_notes: Option<String>,
    pub featured: bool,
}

/// Fields for a new travel photo row.
#[derive(Debug, Clone)]
pub struct NewTravelPhoto {
    pub title: String,
    pub location: String,
    pub date: Option<String>,
    pub image_path: String,
    pub thumbnail_path: Option<String>,
    pub description: Option<String>,
    pub album: Option<String>,
}

/// The remote record store: readable like any source, plus the admin
/// mutations. Each mutation is a single statement with last-write-wins
/// semantics.
#[async_trait]
pub trait RecordStore: RecordSource {
    /// Raw image rows for the management list, newest first.
    async fn list_image_rows(
        &self,
        category: Option<Category>,
    ) -> Result<Vec<image::Model>, StoreError>;

    /// Number of image rows in every category, known or not.
    async fn count_images(&self) -> Result<u64, StoreError>;

    async fn find_image_row(&self, id: Uuid) -> Result<Option<image::Model>, StoreError>;

    async fn insert_image(&self, image: NewImage) -> Result<image::Model, StoreError>;

    /// Returns the updated row, or `None` if it does not exist.
    async fn set_featured(
        &self,
        id: Uuid,
        featured: bool,
    ) -> Result<Option<image::Model>, StoreError>;

    /// Returns `true` if a row was deleted.
    async fn delete_image(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn list_travel_rows(&self) -> Result<Vec<travel_photo::Model>, StoreError>;

    async fn count_travel_photos(&self) -> Result<u64, StoreError>;

    async fn find_travel_row(&self, id: Uuid)
    -> Result<Option<travel_photo::Model>, StoreError>;

    async fn insert_travel_photo(
        &self,
        photo: NewTravelPhoto,
    ) -> Result<travel_photo::Model, StoreError>;

    async fn delete_travel_photo(&self, id: Uuid) -> Result<bool, StoreError>;
}
