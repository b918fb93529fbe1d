use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Id prefix for records that come from the remote record store.
///
/// Embedded catalog ids never start with this prefix, so the two id spaces
/// cannot collide.
pub const REMOTE_ID_PREFIX: &str = "db-";

/// Gallery category. The set is closed; every image belongs to exactly one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Galaxies,
    GalaxyClusters,
    StarClusters,
    Nebulae,
    Supernovae,
    Asteroids,
    Exoplanets,
}

impl Category {
    /// All categories in navigation order.
    pub const ALL: [Category; 7] = [
        Category::Galaxies,
        Category::GalaxyClusters,
        Category::StarClusters,
        Category::Nebulae,
        Category::Supernovae,
        Category::Asteroids,
        Category::Exoplanets,
    ];

    /// URL slug, also the value stored in the `images.category` column.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Galaxies => "galaxies",
            Category::GalaxyClusters => "galaxy-clusters",
            Category::StarClusters => "star-clusters",
            Category::Nebulae => "nebulae",
            Category::Supernovae => "supernovae",
            Category::Asteroids => "asteroids",
            Category::Exoplanets => "exoplanets",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Returned when a string is not one of the seven category slugs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Imaging site tag.
///
/// Codes outside the known set are preserved verbatim in `Unknown` so that
/// labels still render; they only lose their badge colour.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ObservatoryCode {
    H85,
    Bbo,
    Sro,
    G53,
    Tas,
    /// The literal `None` code used for images not tied to a site.
    Unassigned,
    Unknown(String),
}

impl ObservatoryCode {
    /// Codes accepted by the admin upload form.
    pub const KNOWN: [&'static str; 6] = ["H85", "BBO", "SRO", "G53", "TAS", "None"];

    pub fn as_str(&self) -> &str {
        match self {
            ObservatoryCode::H85 => "H85",
            ObservatoryCode::Bbo => "BBO",
            ObservatoryCode::Sro => "SRO",
            ObservatoryCode::G53 => "G53",
            ObservatoryCode::Tas => "TAS",
            ObservatoryCode::Unassigned => "None",
            ObservatoryCode::Unknown(code) => code,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ObservatoryCode::Unknown(_))
    }

    /// CSS class used for the badge; unknown codes fall back to the neutral style.
    pub fn badge_class(&self) -> &'static str {
        match self {
            ObservatoryCode::H85 => "badge-h85",
            ObservatoryCode::Bbo => "badge-bbo",
            ObservatoryCode::Sro => "badge-sro",
            ObservatoryCode::G53 => "badge-g53",
            ObservatoryCode::Tas => "badge-tas",
            ObservatoryCode::Unassigned | ObservatoryCode::Unknown(_) => "bg-space-600",
        }
    }
}

impl From<&str> for ObservatoryCode {
    fn from(code: &str) -> Self {
        match code {
            "H85" => ObservatoryCode::H85,
            "BBO" => ObservatoryCode::Bbo,
            "SRO" => ObservatoryCode::Sro,
            "G53" => ObservatoryCode::G53,
            "TAS" => ObservatoryCode::Tas,
            "None" => ObservatoryCode::Unassigned,
            other => ObservatoryCode::Unknown(other.to_string()),
        }
    }
}

impl From<String> for ObservatoryCode {
    fn from(code: String) -> Self {
        ObservatoryCode::from(code.as_str())
    }
}

impl From<ObservatoryCode> for String {
    fn from(code: ObservatoryCode) -> Self {
        match code {
            ObservatoryCode::Unknown(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ObservatoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single astronomical photograph with its capture metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ImageRecord {
    /// Unique id. Remote records carry the `db-` prefix.
    #[schema(example = "gal-m51")]
    pub id: String,
    /// Object designation, e.g. a catalog name.
    #[schema(example = "M51")]
    pub designation: String,
    #[schema(example = "Whirlpool Galaxy")]
    pub name: Option<String>,
    pub category: Category,
    #[schema(value_type = String, example = "H85")]
    pub observatory: ObservatoryCode,
    #[schema(example = "LRGB")]
    pub filters: Option<String>,
    pub description: Option<String>,
    pub image_path: String,
    pub thumbnail_path: String,
    pub date_captured: Option<String>,
    pub exposure: Option<String>,
    pub technical_notes: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl ImageRecord {
    pub fn is_remote(&self) -> bool {
        self.id.starts_with(REMOTE_ID_PREFIX)
    }
}

/// A travel or family photograph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TravelPhotoRecord {
    #[schema(example = "travel-camel")]
    pub id: String,
    pub title: String,
    pub location: String,
    pub date: Option<String>,
    pub image_path: String,
    pub thumbnail_path: String,
    pub description: Option<String>,
    /// Free-text grouping label.
    #[schema(example = "Israel")]
    pub album: Option<String>,
}

impl TravelPhotoRecord {
    pub fn is_remote(&self) -> bool {
        self.id.starts_with(REMOTE_ID_PREFIX)
    }
}
