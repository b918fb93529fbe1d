//! Conversion from remote rows to the shared record shape.

use common::catalog::{Category, ImageRecord, ObservatoryCode, REMOTE_ID_PREFIX, TravelPhotoRecord};
use uuid::Uuid;

use crate::entity::{image, travel_photo};

/// Public id for a remote row.
pub fn remote_id(id: Uuid) -> String {
    format!("{REMOTE_ID_PREFIX}{id}")
}

/// Row id behind a public `db-` id. `None` for embedded ids and malformed uuids.
pub fn parse_remote_id(id: &str) -> Option<Uuid> {
    id.strip_prefix(REMOTE_ID_PREFIX)
        .and_then(|raw| Uuid::parse_str(raw).ok())
}

/// Empty strings from the form are stored as-is by some clients; treat them as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Map an image row. Rows whose category is outside the known set are skipped.
pub fn image_record(row: image::Model) -> Option<ImageRecord> {
    let category = match row.category.parse::<Category>() {
        Ok(category) => category,
        Err(err) => {
            tracing::warn!(id = %row.id, %err, "Skipping image row");
            return None;
        }
    };
    let thumbnail_path = non_empty(row.thumbnail_path).unwrap_or_else(|| row.image_path.clone());

    Some(ImageRecord {
        id: remote_id(row.id),
        designation: row.designation,
        name: non_empty(row.name),
        category,
        observatory: ObservatoryCode::from(row.observatory),
        filters: non_empty(row.filters),
        description: non_empty(row.description),
        image_path: row.image_path,
        thumbnail_path,
        date_captured: non_empty(row.date_captured),
        exposure: non_empty(row.exposure),
        technical_notes: non_empty(row.technical_notes),
        featured: row.featured,
    })
}

pub fn image_records(rows: Vec<image::Model>) -> Vec<ImageRecord> {
    rows.into_iter().filter_map(image_record).collect()
}

pub fn travel_record(row: travel_photo::Model) -> TravelPhotoRecord {
    let thumbnail_path = non_empty(row.thumbnail_path).unwrap_or_else(|| row.image_path.clone());

    TravelPhotoRecord {
        id: remote_id(row.id),
        title: row.title,
        location: row.location,
        date: non_empty(row.date),
        image_path: row.image_path,
        thumbnail_path,
        description: non_empty(row.description),
        album: non_empty(row.album),
    }
}

pub fn travel_records(rows: Vec<travel_photo::Model>) -> Vec<TravelPhotoRecord> {
    rows.into_iter().map(travel_record).collect()
}
