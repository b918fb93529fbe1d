use std::collections::HashSet;

use super::records::{Category, ImageRecord, REMOTE_ID_PREFIX, TravelPhotoRecord};

const IMAGES_JSON: &str = include_str!("../../data/images.json");
const TRAVEL_JSON: &str = include_str!("../../data/travel.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("malformed embedded catalog: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("duplicate catalog id: {0}")]
    DuplicateId(String),
    #[error("catalog id uses the reserved remote prefix: {0}")]
    ReservedPrefix(String),
}

/// Image and travel-photo records compiled into the binary.
///
/// Records keep their declaration order; every filter below preserves it.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    images: Vec<ImageRecord>,
    travel: Vec<TravelPhotoRecord>,
}

impl StaticCatalog {
    /// Parse the catalog bundled with the crate.
    pub fn embedded() -> Result<Self, CatalogError> {
        let images: Vec<ImageRecord> = serde_json::from_str(IMAGES_JSON)?;
        let travel: Vec<TravelPhotoRecord> = serde_json::from_str(TRAVEL_JSON)?;
        Self::new(images, travel)
    }

    /// Build a catalog from explicit records, checking id uniqueness.
    pub fn new(
        images: Vec<ImageRecord>,
        travel: Vec<TravelPhotoRecord>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let ids = images
            .iter()
            .map(|i| i.id.as_str())
            .chain(travel.iter().map(|t| t.id.as_str()));
        for id in ids {
            if id.starts_with(REMOTE_ID_PREFIX) {
                return Err(CatalogError::ReservedPrefix(id.to_string()));
            }
            if !seen.insert(id) {
                return Err(CatalogError::DuplicateId(id.to_string()));
            }
        }
        Ok(Self { images, travel })
    }

    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    pub fn images_in(&self, category: Category) -> Vec<ImageRecord> {
        self.images
            .iter()
            .filter(|i| i.category == category)
            .cloned()
            .collect()
    }

    pub fn featured(&self) -> Vec<ImageRecord> {
        self.images.iter().filter(|i| i.featured).cloned().collect()
    }

    pub fn image(&self, id: &str) -> Option<ImageRecord> {
        self.images.iter().find(|i| i.id == id).cloned()
    }

    pub fn count_in(&self, category: Category) -> u64 {
        self.images.iter().filter(|i| i.category == category).count() as u64
    }

    pub fn travel_photos(&self) -> &[TravelPhotoRecord] {
        &self.travel
    }

    pub fn travel_in_album(&self, album: &str) -> Vec<TravelPhotoRecord> {
        self.travel
            .iter()
            .filter(|p| p.album.as_deref() == Some(album))
            .cloned()
            .collect()
    }

    /// Distinct album names in order of first appearance.
    pub fn albums(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.travel
            .iter()
            .filter_map(|p| p.album.as_deref())
            .filter(|a| seen.insert(*a))
            .map(str::to_string)
            .collect()
    }
}
