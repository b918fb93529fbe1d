use axum::Json;
use axum::extract::multipart::Field;
use axum::extract::{DefaultBodyLimit, Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use chrono::Utc;
use common::catalog::{Category, ObservatoryCode};
use common::storage::ObjectKey;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AdminUser;
use crate::models::admin::{
    AdminImageQuery, AdminImageResponse, AdminTravelResponse, DashboardResponse, DashboardTab,
    DashboardTabResponse, DeleteResponse, FeaturedResponse, ImageUploadFields, TravelUploadFields,
    UploadOptions, validate_image_upload, validate_travel_upload,
};
use crate::models::shared::row_id;
use crate::state::AppState;
use crate::store::mapping::remote_id;
use crate::store::{NewImage, NewTravelPhoto};
use crate::utils::filename::{image_extension, upload_key};

/// Slack on top of the file limit for the text fields of the form.
const FORM_OVERHEAD: u64 = 1024 * 1024;

pub fn upload_body_limit(max_upload_size: u64) -> DefaultBodyLimit {
    DefaultBodyLimit::max((max_upload_size + FORM_OVERHEAD) as usize)
}

/// A file read from the `file` multipart field.
struct UploadedFile {
    filename: String,
    data: Vec<u8>,
}

async fn read_file_field(mut field: Field<'_>, limit: u64) -> Result<UploadedFile, AppError> {
    let filename = field
        .file_name()
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation("File field must have a filename".into()))?;

    let mut data = Vec::new();
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| AppError::Validation(format!("Multipart error: {e}")))?
    {
        let actual = (data.len() + chunk.len()) as u64;
        if actual > limit {
            return Err(AppError::PayloadTooLarge { actual, limit });
        }
        data.extend_from_slice(&chunk);
    }

    if data.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".into()));
    }
    Ok(UploadedFile { filename, data })
}

async fn read_text_field(field: Field<'_>, name: &str) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read {name}: {e}")))
}

/// Store the file under `{prefix}/{millis}-{label}.{ext}` and return its key
/// and public URL.
async fn put_object(
    state: &AppState,
    prefix: &str,
    label: &str,
    file: &UploadedFile,
) -> Result<(ObjectKey, String), AppError> {
    let ext = image_extension(&file.filename)
        .map_err(|e| AppError::Validation(e.message().into()))?;
    let key = ObjectKey::parse(&upload_key(
        prefix,
        label,
        &ext,
        Utc::now().timestamp_millis(),
    ))?;
    let content_type = mime_guess::from_path(&file.filename)
        .first()
        .map(|m| m.to_string());

    state
        .objects
        .put(&key, &file.data, content_type.as_deref())
        .await?;
    let url = state.objects.public_url(&key);
    Ok((key, url))
}

/// Remove an object after its row insert failed. The insert error is what
/// the caller reports.
async fn discard_object(state: &AppState, key: &ObjectKey) {
    if let Err(e) = state.objects.delete(key).await {
        tracing::warn!(key = %key, error = %e, "Failed to remove orphaned upload");
    }
}

/// Delete the object behind a stored public URL. URLs that do not belong to
/// the object store, and objects already gone, count as nothing deleted.
async fn delete_object_at(state: &AppState, url: &str) -> Result<bool, AppError> {
    let Some(key) = state.objects.key_from_public_url(url) else {
        tracing::warn!(url, "Stored path is not an object store URL; skipping object delete");
        return Ok(false);
    };
    Ok(state.objects.delete(&key).await?)
}

async fn dashboard_response(state: &AppState, email: String) -> DashboardResponse {
    let (images, travel) = tokio::join!(
        state.records.count_images(),
        state.records.count_travel_photos(),
    );
    let image_count = images
        .inspect_err(|e| tracing::warn!(error = %e, "Dashboard image count unavailable"))
        .ok();
    let travel_count = travel
        .inspect_err(|e| tracing::warn!(error = %e, "Dashboard travel count unavailable"))
        .ok();

    DashboardResponse {
        email,
        tabs: DashboardTab::ALL
            .into_iter()
            .map(|tab| DashboardTabResponse {
                id: tab,
                label: tab.label().to_string(),
            })
            .collect(),
        upload: UploadOptions {
            categories: Category::ALL.to_vec(),
            observatories: ObservatoryCode::KNOWN.iter().map(|c| c.to_string()).collect(),
            max_upload_size: state.config.storage.max_upload_size,
        },
        image_count,
        travel_count,
    }
}

#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "Admin",
    operation_id = "getDashboard",
    summary = "Admin dashboard",
    description = "Tabs, upload form options, and row counts. Counts are null when the \
        remote store is unreachable.",
    responses(
        (status = 200, description = "Dashboard", body = DashboardResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(admin, state))]
pub async fn dashboard(admin: AdminUser, State(state): State<AppState>) -> Json<DashboardResponse> {
    Json(dashboard_response(&state, admin.email).await)
}

/// `GET /admin`: the dashboard for a signed-in admin, otherwise a redirect to
/// the login page.
#[instrument(skip(admin, state))]
pub async fn admin_page(admin: Option<AdminUser>, State(state): State<AppState>) -> Response {
    match admin {
        Some(admin) => Json(dashboard_response(&state, admin.email).await).into_response(),
        None => Redirect::to("/login").into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/images",
    tag = "Admin",
    operation_id = "listUploadedImages",
    summary = "List uploaded images",
    description = "Rows from the remote store, newest first. Embedded catalog images are not listed.",
    params(AdminImageQuery),
    responses(
        (status = 200, description = "Uploaded images", body = Vec<AdminImageResponse>),
        (status = 400, description = "Unknown category (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 500, description = "Remote store failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_admin, state, query), fields(category = ?query.category))]
pub async fn list_images(
    _admin: AdminUser,
    State(state): State<AppState>,
    Query(query): Query<AdminImageQuery>,
) -> Result<Json<Vec<AdminImageResponse>>, AppError> {
    let rows = state.records.list_image_rows(query.category()?).await?;
    Ok(Json(rows.into_iter().map(AdminImageResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/images",
    tag = "Admin",
    operation_id = "uploadImage",
    summary = "Upload an image",
    description = "Stores the `file` field in object storage, then inserts one row. Text \
        fields: `designation` and `category` (required), `name`, `observatory` (default SRO), \
        `filters`, `description`, `date_captured`, `exposure`, `technical_notes`, `featured`. \
        If the insert fails the stored object is removed again.",
    request_body(content_type = "multipart/form-data", description = "Image file and metadata"),
    responses(
        (status = 201, description = "Image uploaded", body = AdminImageResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 409, description = "Object key already taken (CONFLICT)", body = ErrorBody),
        (status = 413, description = "File too large (PAYLOAD_TOO_LARGE)", body = ErrorBody),
        (status = 500, description = "Storage or remote store failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_admin, state, multipart))]
pub async fn upload_image(
    _admin: AdminUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut fields = ImageUploadFields::default();
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Multipart error: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        if name == "file" {
            file = Some(read_file_field(field, state.config.storage.max_upload_size).await?);
        } else {
            let value = read_text_field(field, &name).await?;
            if !fields.set(&name, value) {
                tracing::debug!(field = %name, "Ignoring unknown upload field");
            }
        }
    }

    let file = file.ok_or_else(|| AppError::Validation("Missing 'file' field".into()))?;
    let upload = validate_image_upload(fields)?;

    let (key, url) = put_object(&state, upload.category.slug(), &upload.designation, &file).await?;

    let new_image = NewImage {
        designation: upload.designation,
        name: upload.name,
        category: upload.category,
        observatory: upload.observatory.into(),
        filters: upload.filters,
        description: upload.description,
        image_path: url.clone(),
        thumbnail_path: Some(url),
        date_captured: upload.date_captured,
        exposure: upload.exposure,
        technical_notes: upload.technical_notes,
        featured: upload.featured,
    };
    let row = match state.records.insert_image(new_image).await {
        Ok(row) => row,
        Err(e) => {
            discard_object(&state, &key).await;
            return Err(e.into());
        }
    };

    tracing::info!(id = %row.id, key = %key, "Image uploaded");
    Ok((StatusCode::CREATED, Json(AdminImageResponse::from(row))))
}

#[utoipa::path(
    patch,
    path = "/images/{id}/featured",
    tag = "Admin",
    operation_id = "toggleFeatured",
    summary = "Toggle the featured flag",
    description = "Reads the current flag and writes its negation. Concurrent toggles are \
        last-write-wins.",
    params(("id" = String, Path, description = "Image id (`db-` prefixed or bare uuid)")),
    responses(
        (status = 200, description = "New flag", body = FeaturedResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "No uploaded image with this id (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_admin, state))]
pub async fn toggle_featured(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FeaturedResponse>, AppError> {
    let row_id = row_id(&id)?;
    let not_found = || AppError::NotFound(format!("No uploaded image with id '{id}'"));

    let current = state
        .records
        .find_image_row(row_id)
        .await?
        .ok_or_else(not_found)?;
    let updated = state
        .records
        .set_featured(row_id, !current.featured)
        .await?
        .ok_or_else(not_found)?;

    tracing::info!(id = %row_id, featured = updated.featured, "Featured flag toggled");
    Ok(Json(FeaturedResponse {
        id: remote_id(updated.id),
        featured: updated.featured,
    }))
}

#[utoipa::path(
    delete,
    path = "/images/{id}",
    tag = "Admin",
    operation_id = "deleteImage",
    summary = "Delete an uploaded image",
    description = "Removes the stored object, then the row. A missing object does not block \
        the row delete.",
    params(("id" = String, Path, description = "Image id (`db-` prefixed or bare uuid)")),
    responses(
        (status = 200, description = "Image deleted", body = DeleteResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "No uploaded image with this id (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Storage or remote store failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_admin, state))]
pub async fn delete_image(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let row_id = row_id(&id)?;
    let not_found = || AppError::NotFound(format!("No uploaded image with id '{id}'"));

    let row = state
        .records
        .find_image_row(row_id)
        .await?
        .ok_or_else(not_found)?;

    let object_deleted = delete_object_at(&state, &row.image_path).await?;
    if !state.records.delete_image(row_id).await? {
        return Err(not_found());
    }

    tracing::info!(id = %row_id, object_deleted, "Image deleted");
    Ok(Json(DeleteResponse {
        id: remote_id(row_id),
        object_deleted,
    }))
}

#[utoipa::path(
    get,
    path = "/travel",
    tag = "Admin",
    operation_id = "listUploadedTravelPhotos",
    summary = "List uploaded travel photos",
    responses(
        (status = 200, description = "Uploaded travel photos, newest first", body = Vec<AdminTravelResponse>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 500, description = "Remote store failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_admin, state))]
pub async fn list_travel(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<AdminTravelResponse>>, AppError> {
    let rows = state.records.list_travel_rows().await?;
    Ok(Json(rows.into_iter().map(AdminTravelResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/travel",
    tag = "Admin",
    operation_id = "uploadTravelPhoto",
    summary = "Upload a travel photo",
    description = "Stores the `file` field under `travel/`, then inserts one row. Text \
        fields: `title` and `location` (required), `date`, `description`, `album`.",
    request_body(content_type = "multipart/form-data", description = "Photo file and metadata"),
    responses(
        (status = 201, description = "Photo uploaded", body = AdminTravelResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 409, description = "Object key already taken (CONFLICT)", body = ErrorBody),
        (status = 413, description = "File too large (PAYLOAD_TOO_LARGE)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_admin, state, multipart))]
pub async fn upload_travel_photo(
    _admin: AdminUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut fields = TravelUploadFields::default();
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Multipart error: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        if name == "file" {
            file = Some(read_file_field(field, state.config.storage.max_upload_size).await?);
        } else {
            let value = read_text_field(field, &name).await?;
            if !fields.set(&name, value) {
                tracing::debug!(field = %name, "Ignoring unknown upload field");
            }
        }
    }

    let file = file.ok_or_else(|| AppError::Validation("Missing 'file' field".into()))?;
    let upload = validate_travel_upload(fields)?;

    let (key, url) = put_object(&state, "travel", &upload.title, &file).await?;

    let photo = NewTravelPhoto {
        title: upload.title,
        location: upload.location,
        date: upload.date,
        image_path: url.clone(),
        thumbnail_path: Some(url),
        description: upload.description,
        album: upload.album,
    };
    let row = match state.records.insert_travel_photo(photo).await {
        Ok(row) => row,
        Err(e) => {
            discard_object(&state, &key).await;
            return Err(e.into());
        }
    };

    tracing::info!(id = %row.id, key = %key, "Travel photo uploaded");
    Ok((StatusCode::CREATED, Json(AdminTravelResponse::from(row))))
}

#[utoipa::path(
    delete,
    path = "/travel/{id}",
    tag = "Admin",
    operation_id = "deleteTravelPhoto",
    summary = "Delete an uploaded travel photo",
    params(("id" = String, Path, description = "Photo id (`db-` prefixed or bare uuid)")),
    responses(
        (status = 200, description = "Photo deleted", body = DeleteResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "No uploaded photo with this id (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(_admin, state))]
pub async fn delete_travel_photo(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let row_id = row_id(&id)?;
    let not_found = || AppError::NotFound(format!("No uploaded travel photo with id '{id}'"));

    let row = state
        .records
        .find_travel_row(row_id)
        .await?
        .ok_or_else(not_found)?;

    let object_deleted = delete_object_at(&state, &row.image_path).await?;
    if !state.records.delete_travel_photo(row_id).await? {
        return Err(not_found());
    }

    tracing::info!(id = %row_id, object_deleted, "Travel photo deleted");
    Ok(Json(DeleteResponse {
        id: remote_id(row_id),
        object_deleted,
    }))
}
