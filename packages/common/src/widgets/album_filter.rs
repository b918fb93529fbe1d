use crate::catalog::TravelPhotoRecord;

/// Current choice in the travel album filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AlbumSelection {
    #[default]
    All,
    Album(String),
}

impl AlbumSelection {
    /// `"all"` selects everything; anything else names an album.
    pub fn parse(value: &str) -> Self {
        match value {
            "all" => AlbumSelection::All,
            album => AlbumSelection::Album(album.to_string()),
        }
    }

    pub fn matches(&self, photo: &TravelPhotoRecord) -> bool {
        match self {
            AlbumSelection::All => true,
            AlbumSelection::Album(album) => photo.album.as_deref() == Some(album.as_str()),
        }
    }
}

/// Photo count for one album button.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, utoipa::ToSchema)]
pub struct AlbumCount {
    pub album: String,
    pub count: usize,
}

/// Client-side album filter over an already fetched photo list.
///
/// Changing the selection only re-filters; it never triggers a fetch.
#[derive(Debug, Clone, Default)]
pub struct AlbumFilter {
    selected: AlbumSelection,
}

impl AlbumFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &AlbumSelection {
        &self.selected
    }

    pub fn select(&mut self, selection: AlbumSelection) {
        self.selected = selection;
    }

    pub fn visible<'a>(&self, photos: &'a [TravelPhotoRecord]) -> Vec<&'a TravelPhotoRecord> {
        photos.iter().filter(|p| self.selected.matches(p)).collect()
    }

    /// Per-album counts for `albums`, in the given order.
    pub fn album_counts(albums: &[String], photos: &[TravelPhotoRecord]) -> Vec<AlbumCount> {
        albums
            .iter()
            .map(|album| AlbumCount {
                album: album.clone(),
                count: photos
                    .iter()
                    .filter(|p| p.album.as_deref() == Some(album.as_str()))
                    .count(),
            })
            .collect()
    }
}
