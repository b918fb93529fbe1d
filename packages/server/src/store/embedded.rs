use async_trait::async_trait;
use common::catalog::{Category, ImageRecord, StaticCatalog, TravelPhotoRecord};

use super::{RecordSource, StoreError};

/// The embedded catalog never fails; every method is infallible in practice.
#[async_trait]
impl RecordSource for StaticCatalog {
    async fn images_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<ImageRecord>, StoreError> {
        Ok(self.images_in(category))
    }

    async fn featured_images(&self) -> Result<Vec<ImageRecord>, StoreError> {
        Ok(self.featured())
    }

    async fn image(&self, id: &str) -> Result<Option<ImageRecord>, StoreError> {
        Ok(StaticCatalog::image(self, id))
    }

    async fn count_by_category(&self, category: Category) -> Result<u64, StoreError> {
        Ok(self.count_in(category))
    }

    async fn travel_photos(&self) -> Result<Vec<TravelPhotoRecord>, StoreError> {
        Ok(StaticCatalog::travel_photos(self).to_vec())
    }

    async fn travel_photos_by_album(
        &self,
        album: &str,
    ) -> Result<Vec<TravelPhotoRecord>, StoreError> {
        Ok(self.travel_in_album(album))
    }

    async fn albums(&self) -> Result<Vec<String>, StoreError> {
        Ok(StaticCatalog::albums(self))
    }
}
