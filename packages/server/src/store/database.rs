use async_trait::async_trait;
use chrono::Utc;
use common::catalog::{Category, ImageRecord, TravelPhotoRecord};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::mapping::{image_record, image_records, parse_remote_id, travel_records};
use super::{NewImage, NewTravelPhoto, RecordSource, RecordStore, StoreError};
use crate::entity::{image, travel_photo};

/// Postgres-backed record store.
#[derive(Clone)]
pub struct DatabaseRecordStore {
    db: DatabaseConnection,
}

impl DatabaseRecordStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecordSource for DatabaseRecordStore {
    async fn images_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<ImageRecord>, StoreError> {
        let rows = image::Entity::find()
            .filter(image::Column::Category.eq(category.slug()))
            .order_by_desc(image::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(image_records(rows))
    }

    async fn featured_images(&self) -> Result<Vec<ImageRecord>, StoreError> {
        let rows = image::Entity::find()
            .filter(image::Column::Featured.eq(true))
            .order_by_desc(image::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(image_records(rows))
    }

    async fn image(&self, id: &str) -> Result<Option<ImageRecord>, StoreError> {
        let Some(uuid) = parse_remote_id(id) else {
            return Ok(None);
        };
        let row = image::Entity::find_by_id(uuid).one(&self.db).await?;
        Ok(row.and_then(image_record))
    }

    async fn count_by_category(&self, category: Category) -> Result<u64, StoreError> {
        let count = image::Entity::find()
            .filter(image::Column::Category.eq(category.slug()))
            .count(&self.db)
            .await?;
        Ok(count)
    }

    async fn travel_photos(&self) -> Result<Vec<TravelPhotoRecord>, StoreError> {
        let rows = travel_photo::Entity::find()
            .order_by_desc(travel_photo::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(travel_records(rows))
    }

    async fn travel_photos_by_album(
        &self,
        album: &str,
    ) -> Result<Vec<TravelPhotoRecord>, StoreError> {
        let rows = travel_photo::Entity::find()
            .filter(travel_photo::Column::Album.eq(album))
            .order_by_desc(travel_photo::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(travel_records(rows))
    }

    async fn albums(&self) -> Result<Vec<String>, StoreError> {
        // DISTINCT cannot be ordered by an unselected column in Postgres;
        // dedupe here to keep newest-first order.
        let labels: Vec<Option<String>> = travel_photo::Entity::find()
            .select_only()
            .column(travel_photo::Column::Album)
            .filter(travel_photo::Column::Album.is_not_null())
            .order_by_desc(travel_photo::Column::CreatedAt)
            .into_tuple()
            .all(&self.db)
            .await?;

        let mut albums: Vec<String> = Vec::new();
        for label in labels.into_iter().flatten() {
            if !label.trim().is_empty() && !albums.contains(&label) {
                albums.push(label);
            }
        }
        Ok(albums)
    }
}

#[async_trait]
impl RecordStore for DatabaseRecordStore {
    async fn list_image_rows(
        &self,
        category: Option<Category>,
    ) -> Result<Vec<image::Model>, StoreError> {
        let mut select = image::Entity::find();
        if let Some(category) = category {
            select = select.filter(image::Column::Category.eq(category.slug()));
        }
        let rows = select
            .order_by_desc(image::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn count_images(&self) -> Result<u64, StoreError> {
        Ok(image::Entity::find().count(&self.db).await?)
    }

    async fn find_image_row(&self, id: Uuid) -> Result<Option<image::Model>, StoreError> {
        Ok(image::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn insert_image(&self, new: NewImage) -> Result<image::Model, StoreError> {
        let model = image::ActiveModel {
            id: Set(Uuid::now_v7()),
            designation: Set(new.designation),
            name: Set(new.name),
            category: Set(new.category.slug().to_string()),
            observatory: Set(new.observatory),
            filters: Set(new.filters),
            description: Set(new.description),
            image_path: Set(new.image_path),
            thumbnail_path: Set(new.thumbnail_path),
            date_captured: Set(new.date_captured),
            exposure: Set(new.exposure),
            technical_notes: Set(new.technical_notes),
            featured: Set(new.featured),
            created_at: Set(Utc::now()),
        };
        Ok(model.insert(&self.db).await?)
    }

    async fn set_featured(
        &self,
        id: Uuid,
        featured: bool,
    ) -> Result<Option<image::Model>, StoreError> {
        let Some(row) = image::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let mut active: image::ActiveModel = row.into();
        active.featured = Set(featured);
        Ok(Some(active.update(&self.db).await?))
    }

    async fn delete_image(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = image::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    async fn list_travel_rows(&self) -> Result<Vec<travel_photo::Model>, StoreError> {
        let rows = travel_photo::Entity::find()
            .order_by_desc(travel_photo::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn count_travel_photos(&self) -> Result<u64, StoreError> {
        Ok(travel_photo::Entity::find().count(&self.db).await?)
    }

    async fn find_travel_row(
        &self,
        id: Uuid,
    ) -> Result<Option<travel_photo::Model>, StoreError> {
        Ok(travel_photo::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn insert_travel_photo(
        &self,
        new: NewTravelPhoto,
    ) -> Result<travel_photo::Model, StoreError> {
        let model = travel_photo::ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(new.title),
            location: Set(new.location),
            date: Set(new.date),
            image_path: Set(new.image_path),
            thumbnail_path: Set(new.thumbnail_path),
            description: Set(new.description),
            album: Set(new.album),
            created_at: Set(Utc::now()),
        };
        Ok(model.insert(&self.db).await?)
    }

    async fn delete_travel_photo(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = travel_photo::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
