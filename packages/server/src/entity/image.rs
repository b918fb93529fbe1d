use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "images")]
pub struct Model {
    /// UUIDv7 primary key. Exposed to readers as `db-{id}`.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub designation: String,
    pub name: Option<String>,

    /// Category slug. Not an enum column so that stray values degrade instead
    /// of failing whole queries.
    pub category: String,
    pub observatory: String,
    pub filters: Option<String>,
    pub description: Option<String>,

    /// Public URL of the full image.
    pub image_path: String,
    /// Public URL of the thumbnail; readers fall back to `image_path`.
    pub thumbnail_path: Option<String>,

    pub date_captured: Option<String>,
    pub exposure: Option<String>,
    pub technical_notes: Option<String>,

    pub featured: bool,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
