use axum::Json;
use axum::extract::{Path, Query, State};
use common::catalog::{
    Category, ImageRecord, OBSERVATORIES, ObservatoryCode, category_info, observatory_label,
};
use common::widgets::{ImageViewer, ViewerEvent};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::models::gallery::{
    CategoryPageResponse, CategorySummary, ObservatoryBadgeResponse, ObservatoryResponse,
    ViewerQuery, ViewerResponse,
};
use crate::state::AppState;

fn parse_category(slug: &str) -> Result<Category, AppError> {
    slug.parse::<Category>()
        .map_err(|_| AppError::NotFound(format!("Category '{slug}' not found")))
}

#[utoipa::path(
    get,
    path = "/categories",
    tag = "Gallery",
    operation_id = "listCategories",
    summary = "List gallery categories",
    description = "All seven categories in navigation order with merged record counts. \
        Counts are fetched concurrently and fall back to embedded counts when the remote store is down.",
    responses(
        (status = 200, description = "Categories", body = Vec<CategorySummary>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<CategorySummary>> {
    let summaries = state
        .gallery
        .category_counts()
        .await
        .into_iter()
        .map(|(category, count)| CategorySummary::new(category_info(category), count))
        .collect();
    Json(summaries)
}

#[utoipa::path(
    get,
    path = "/categories/{slug}",
    tag = "Gallery",
    operation_id = "getCategory",
    summary = "Get a category page",
    description = "Category metadata and its images: uploaded images first (newest first), \
        then the embedded catalog in declaration order.",
    params(("slug" = String, Path, description = "Category slug", example = "galaxies")),
    responses(
        (status = 200, description = "Category page", body = CategoryPageResponse),
        (status = 404, description = "Unknown category (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CategoryPageResponse>, AppError> {
    let category = parse_category(&slug)?;
    let images = state.gallery.list_by_category(category).await;

    Ok(Json(CategoryPageResponse {
        category: CategorySummary::new(category_info(category), images.len() as u64),
        images,
    }))
}

#[utoipa::path(
    get,
    path = "/categories/{slug}/viewer",
    tag = "Gallery",
    operation_id = "getViewerFrame",
    summary = "Open the lightbox at an index",
    description = "Lightbox frame for the image at `index` in the category listing, with the \
        neighbouring ids for circular previous/next navigation.",
    params(
        ("slug" = String, Path, description = "Category slug", example = "nebulae"),
        ViewerQuery,
    ),
    responses(
        (status = 200, description = "Lightbox frame", body = ViewerResponse),
        (status = 404, description = "Unknown category or index out of range (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query), fields(index = query.index))]
pub async fn get_viewer(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<ViewerQuery>,
) -> Result<Json<ViewerResponse>, AppError> {
    let category = parse_category(&slug)?;
    let mut images = state.gallery.list_by_category(category).await;

    let mut viewer = ImageViewer::new(images.len());
    viewer.handle(ViewerEvent::Select(query.index));
    let (Some(index), Some(position)) = (viewer.current(), viewer.position_label()) else {
        return Err(AppError::NotFound(format!(
            "No image at index {} in '{slug}'",
            query.index
        )));
    };

    let previous_id = images[viewer.previous_index(index)].id.clone();
    let next_id = images[viewer.next_index(index)].id.clone();
    let image = images.swap_remove(index);

    Ok(Json(ViewerResponse {
        observatory_label: observatory_label(&image.observatory, true),
        image,
        index,
        total: viewer.len(),
        position,
        previous_id,
        next_id,
    }))
}

#[utoipa::path(
    get,
    path = "/images/featured",
    tag = "Gallery",
    operation_id = "listFeaturedImages",
    summary = "List featured images",
    responses(
        (status = 200, description = "Featured images, uploaded first", body = Vec<ImageRecord>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_featured(State(state): State<AppState>) -> Json<Vec<ImageRecord>> {
    Json(state.gallery.list_featured().await)
}

#[utoipa::path(
    get,
    path = "/images/{id}",
    tag = "Gallery",
    operation_id = "getImage",
    summary = "Get an image by id",
    description = "`db-` ids are looked up in the remote store only; all other ids in the \
        embedded catalog only.",
    params(("id" = String, Path, description = "Image id", example = "gal-m51")),
    responses(
        (status = 200, description = "Image", body = ImageRecord),
        (status = 404, description = "Image not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ImageRecord>, AppError> {
    state
        .gallery
        .get_by_id(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Image '{id}' not found")))
}

#[utoipa::path(
    get,
    path = "/observatories",
    tag = "Gallery",
    operation_id = "listObservatories",
    summary = "List imaging sites",
    responses(
        (status = 200, description = "Observatories", body = Vec<ObservatoryResponse>),
    ),
)]
pub async fn list_observatories() -> Json<Vec<ObservatoryResponse>> {
    Json(OBSERVATORIES.iter().map(ObservatoryResponse::from).collect())
}

#[utoipa::path(
    get,
    path = "/observatories/{code}",
    tag = "Gallery",
    operation_id = "getObservatoryBadge",
    summary = "Render an observatory badge",
    description = "Label and badge class for any code. Unknown codes render as `from CODE` \
        with the neutral badge style.",
    params(("code" = String, Path, description = "Observatory code", example = "H85")),
    responses(
        (status = 200, description = "Badge", body = ObservatoryBadgeResponse),
    ),
)]
pub async fn get_observatory(Path(code): Path<String>) -> Json<ObservatoryBadgeResponse> {
    Json(ObservatoryBadgeResponse::from(&ObservatoryCode::from(code)))
}
