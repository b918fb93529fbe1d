use chrono::{DateTime, Utc};
use common::catalog::{Category, ObservatoryCode};
use serde::{Deserialize, Serialize};

use crate::entity::{image, travel_photo};
use crate::error::AppError;
use crate::models::shared::{checkbox, optional_text, required_text};
use crate::store::mapping::remote_id;

/// Management list filter.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct AdminImageQuery {
    /// Category slug, or `all`.
    #[param(example = "galaxies")]
    pub category: Option<String>,
}

impl AdminImageQuery {
    pub fn category(&self) -> Result<Option<Category>, AppError> {
        match self.category.as_deref().map(str::trim) {
            None | Some("") | Some("all") => Ok(None),
            Some(slug) => slug
                .parse::<Category>()
                .map(Some)
                .map_err(|e| AppError::Validation(e.to_string())),
        }
    }
}

/// An uploaded image row as shown in the management list.
#[derive(Serialize, utoipa::ToSchema)]
pub struct AdminImageResponse {
    /// Public id (`db-` prefixed).
    #[schema(example = "db-0190b4c8-6f7a-7c3e-9b7d-3f0c6a1e2d45")]
    pub id: String,
    pub designation: String,
    pub name: Option<String>,
    /// Stored category slug. May be outside the known set for legacy rows.
    #[schema(example = "galaxies")]
    pub category: String,
    #[schema(example = "SRO")]
    pub observatory: String,
    pub filters: Option<String>,
    pub description: Option<String>,
    pub image_path: String,
    pub thumbnail_path: Option<String>,
    pub date_captured: Option<String>,
    pub exposure: Option<String>,
    pub technical_notes: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

impl From<image::Model> for AdminImageResponse {
    fn from(row: image::Model) -> Self {
        Self {
            id: remote_id(row.id),
            designation: row.designation,
            name: row.name,
            category: row.category,
            observatory: row.observatory,
            filters: row.filters,
            description: row.description,
            image_path: row.image_path,
            thumbnail_path: row.thumbnail_path,
            date_captured: row.date_captured,
            exposure: row.exposure,
            technical_notes: row.technical_notes,
            featured: row.featured,
            created_at: row.created_at,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct AdminTravelResponse {
    #[schema(example = "db-0190b4c8-6f7a-7c3e-9b7d-3f0c6a1e2d45")]
    pub id: String,
    pub title: String,
    pub location: String,
    pub date: Option<String>,
    pub image_path: String,
    pub thumbnail_path: Option<String>,
    pub description: Option<String>,
    pub album: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<travel_photo::Model> for AdminTravelResponse {
    fn from(row: travel_photo::Model) -> Self {
        Self {
            id: remote_id(row.id),
            title: row.title,
            location: row.location,
            date: row.date,
            image_path: row.image_path,
            thumbnail_path: row.thumbnail_path,
            description: row.description,
            album: row.album,
            created_at: row.created_at,
        }
    }
}

/// Raw text fields collected from the image upload form.
#[derive(Debug, Default)]
pub struct ImageUploadFields {
    pub designation: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub observatory: Option<String>,
    pub filters: Option<String>,
    pub description: Option<String>,
    pub date_captured: Option<String>,
    pub exposure: Option<String>,
    pub technical_notes: Option<String>,
    pub featured: Option<String>,
}

impl ImageUploadFields {
    /// Record a form field. Returns `false` for names the form does not define.
    pub fn set(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "designation" => &mut self.designation,
            "name" => &mut self.name,
            "category" => &mut self.category,
            "observatory" => &mut self.observatory,
            "filters" => &mut self.filters,
            "description" => &mut self.description,
            "date_captured" => &mut self.date_captured,
            "exposure" => &mut self.exposure,
            "technical_notes" => &mut self.technical_notes,
            "featured" => &mut self.featured,
            _ => return false,
        };
        *slot = Some(value);
        true
    }
}

/// A validated image upload, minus the file.
#[derive(Debug)]
pub struct ImageUpload {
    pub designation: String,
    pub name: Option<String>,
    pub category: Category,
    pub observatory: ObservatoryCode,
    pub filters: Option<String>,
    pub description: Option<String>,
    pub date_captured: Option<String>,
    pub exposure: Option<String>,
    pub technical_notes: Option<String>,
    pub featured: bool,
}

pub fn validate_image_upload(fields: ImageUploadFields) -> Result<ImageUpload, AppError> {
    let designation = required_text("Designation", fields.designation, 128)?;
    let category = required_text("Category", fields.category, 32)?
        .parse::<Category>()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    // The form defaults to SRO.
    let observatory = match fields.observatory.as_deref().map(str::trim) {
        None | Some("") => ObservatoryCode::Sro,
        Some(code) if ObservatoryCode::KNOWN.contains(&code) => ObservatoryCode::from(code),
        Some(code) => {
            return Err(AppError::Validation(format!(
                "Unknown observatory '{code}' (expected one of {})",
                ObservatoryCode::KNOWN.join(", ")
            )));
        }
    };

    Ok(ImageUpload {
        designation,
        name: optional_text("Name", fields.name, 256)?,
        category,
        observatory,
        filters: optional_text("Filters", fields.filters, 128)?,
        description: optional_text("Description", fields.description, 4000)?,
        date_captured: optional_text("Date captured", fields.date_captured, 64)?,
        exposure: optional_text("Exposure", fields.exposure, 256)?,
        technical_notes: optional_text("Technical notes", fields.technical_notes, 4000)?,
        featured: checkbox(fields.featured.as_deref()),
    })
}

/// Raw text fields collected from the travel photo upload form.
#[derive(Debug, Default)]
pub struct TravelUploadFields {
    pub title: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub album: Option<String>,
}

impl TravelUploadFields {
    pub fn set(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "title" => &mut self.title,
            "location" => &mut self.location,
            "date" => &mut self.date,
            "description" => &mut self.description,
            "album" => &mut self.album,
            _ => return false,
        };
        *slot = Some(value);
        true
    }
}

#[derive(Debug)]
pub struct TravelUpload {
    pub title: String,
    pub location: String,
    pub date: Option<String>,
    pub description: Option<String>,
    pub album: Option<String>,
}

pub fn validate_travel_upload(fields: TravelUploadFields) -> Result<TravelUpload, AppError> {
    let album = optional_text("Album", fields.album, 64)?;
    if album.as_deref() == Some("all") {
        return Err(AppError::Validation(
            "Album name 'all' is reserved".into(),
        ));
    }
    Ok(TravelUpload {
        title: required_text("Title", fields.title, 256)?,
        location: required_text("Location", fields.location, 256)?,
        date: optional_text("Date", fields.date, 64)?,
        description: optional_text("Description", fields.description, 4000)?,
        album,
    })
}

/// Result of a featured toggle.
#[derive(Serialize, utoipa::ToSchema)]
pub struct FeaturedResponse {
    pub id: String,
    pub featured: bool,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct DeleteResponse {
    pub id: String,
    /// Whether a storage object was removed along with the row.
    pub object_deleted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    Upload,
    Images,
    Settings,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::Upload,
        DashboardTab::Images,
        DashboardTab::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Upload => "Upload Image",
            DashboardTab::Images => "Manage Images",
            DashboardTab::Settings => "Settings",
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct DashboardTabResponse {
    pub id: DashboardTab,
    pub label: String,
}

/// Options for the upload form selects.
#[derive(Serialize, utoipa::ToSchema)]
pub struct UploadOptions {
    pub categories: Vec<Category>,
    #[schema(example = json!(["H85", "BBO", "SRO", "G53", "TAS", "None"]))]
    pub observatories: Vec<String>,
    /// Maximum accepted file size in bytes.
    pub max_upload_size: u64,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct DashboardResponse {
    #[schema(example = "admin@example.com")]
    pub email: String,
    pub tabs: Vec<DashboardTabResponse>,
    pub upload: UploadOptions,
    /// Uploaded image rows; `None` when the remote store is unreachable.
    pub image_count: Option<u64>,
    pub travel_count: Option<u64>,
}
