use common::catalog::{
    Category, CategoryInfo, ImageRecord, Observatory, ObservatoryCode, SkyStats,
    TravelPhotoRecord, observatory_label,
};
use common::site::NavItem;
use common::widgets::AlbumCount;
use serde::{Deserialize, Serialize};

/// A gallery category with its merged record count.
#[derive(Serialize, utoipa::ToSchema)]
pub struct CategorySummary {
    #[schema(example = "galaxies")]
    pub slug: Category,
    #[schema(example = "Galaxies")]
    pub title: String,
    pub plural_title: String,
    pub description: String,
    /// Banner image for the category page, if any.
    pub hero_image: Option<String>,
    /// Remote plus embedded record count.
    #[schema(example = 6)]
    pub count: u64,
}

impl CategorySummary {
    pub fn new(info: &CategoryInfo, count: u64) -> Self {
        Self {
            slug: info.slug,
            title: info.title.to_string(),
            plural_title: info.plural_title.to_string(),
            description: info.description.to_string(),
            hero_image: info.hero_image.map(str::to_string),
            count,
        }
    }
}

/// A category page: metadata and its merged images, remote first.
#[derive(Serialize, utoipa::ToSchema)]
pub struct CategoryPageResponse {
    pub category: CategorySummary,
    pub images: Vec<ImageRecord>,
}

/// Query parameters for the lightbox permalink.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct ViewerQuery {
    /// Zero-based index into the category listing.
    #[param(example = 0)]
    pub index: usize,
}

/// One open lightbox frame.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ViewerResponse {
    pub image: ImageRecord,
    #[schema(example = 0)]
    pub index: usize,
    #[schema(example = 6)]
    pub total: usize,
    /// One-based position, e.g. `"1 / 6"`.
    #[schema(example = "1 / 6")]
    pub position: String,
    /// Id of the previous image, wrapping to the last.
    pub previous_id: String,
    /// Id of the next image, wrapping to the first.
    pub next_id: String,
    /// Observatory label with full name, e.g. `"from SRO (Starfront Remote Observatory)"`.
    pub observatory_label: String,
}

/// Reference data for one imaging site.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ObservatoryResponse {
    #[schema(example = "SRO")]
    pub code: String,
    pub name: String,
    pub full_name: String,
    pub location: String,
    pub description: String,
    pub active: bool,
    pub url: Option<String>,
    pub badge_class: String,
}

impl From<&Observatory> for ObservatoryResponse {
    fn from(obs: &Observatory) -> Self {
        Self {
            code: obs.code.to_string(),
            name: obs.name.to_string(),
            full_name: obs.full_name.to_string(),
            location: obs.location.to_string(),
            description: obs.description.to_string(),
            active: obs.active,
            url: obs.url.map(str::to_string),
            badge_class: ObservatoryCode::from(obs.code).badge_class().to_string(),
        }
    }
}

/// Badge rendering for any observatory code, known or not.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ObservatoryBadgeResponse {
    #[schema(example = "BBO")]
    pub code: String,
    /// Whether the code names a site in the reference list.
    pub known: bool,
    #[schema(example = "from BBO")]
    pub label: String,
    #[schema(example = "from BBO (Blackbird Observatory)")]
    pub full_label: String,
    #[schema(example = "badge-bbo")]
    pub badge_class: String,
}

impl From<&ObservatoryCode> for ObservatoryBadgeResponse {
    fn from(code: &ObservatoryCode) -> Self {
        Self {
            code: code.as_str().to_string(),
            known: code.is_known(),
            label: observatory_label(code, false),
            full_label: observatory_label(code, true),
            badge_class: code.badge_class().to_string(),
        }
    }
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct TravelQuery {
    /// Album name, or `all` for every photo.
    #[param(example = "Israel")]
    pub album: Option<String>,
}

/// Travel gallery: photos for the current selection plus per-album counts.
#[derive(Serialize, utoipa::ToSchema)]
pub struct TravelResponse {
    /// `all` or the selected album name.
    #[schema(example = "all")]
    pub selected: String,
    #[schema(example = 12)]
    pub total: usize,
    pub albums: Vec<AlbumCount>,
    pub photos: Vec<TravelPhotoRecord>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct NavigationResponse {
    /// Home and one entry per category.
    pub main: Vec<NavItem>,
    /// Content pages.
    pub secondary: Vec<NavItem>,
}

/// Site metadata for page chrome and SEO tags.
#[derive(Serialize, utoipa::ToSchema)]
pub struct SiteResponse {
    #[schema(value_type = Object)]
    pub site: serde_json::Value,
    #[schema(value_type = Object)]
    pub seo: serde_json::Value,
    pub navigation: NavigationResponse,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct HomeResponse {
    pub featured: Vec<ImageRecord>,
    pub categories: Vec<CategorySummary>,
    pub stats: SkyStats,
}
