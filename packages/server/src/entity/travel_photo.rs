use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "travel_photos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub title: String,
    pub location: String,
    pub date: Option<String>,

    pub image_path: String,
    pub thumbnail_path: Option<String>,
    pub description: Option<String>,

    /// Free-text album label.
    pub album: Option<String>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
