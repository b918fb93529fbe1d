use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use common::catalog::category_info;
use common::site::{SEO_DEFAULTS, SITE_INFO, main_navigation, secondary_navigation};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::models::gallery::{CategorySummary, HomeResponse, NavigationResponse, SiteResponse};
use crate::state::AppState;
use crate::utils::sitemap;

fn navigation() -> NavigationResponse {
    NavigationResponse {
        main: main_navigation(),
        secondary: secondary_navigation(),
    }
}

#[utoipa::path(
    get,
    path = "/site",
    tag = "Site",
    operation_id = "getSite",
    summary = "Site information",
    description = "Owner, taglines, achievements, SEO defaults, and navigation.",
    responses(
        (status = 200, description = "Site information", body = SiteResponse),
        (status = 500, description = "Internal error (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
pub async fn get_site() -> Result<Json<SiteResponse>, AppError> {
    let site = serde_json::to_value(&SITE_INFO)
        .map_err(|e| AppError::Internal(format!("Site info serialization failed: {e}")))?;
    let seo = serde_json::to_value(&SEO_DEFAULTS)
        .map_err(|e| AppError::Internal(format!("SEO defaults serialization failed: {e}")))?;

    Ok(Json(SiteResponse {
        site,
        seo,
        navigation: navigation(),
    }))
}

#[utoipa::path(
    get,
    path = "/navigation",
    tag = "Site",
    operation_id = "getNavigation",
    summary = "Navigation menus",
    responses(
        (status = 200, description = "Main and secondary navigation", body = NavigationResponse),
    ),
)]
pub async fn get_navigation() -> Json<NavigationResponse> {
    Json(navigation())
}

#[utoipa::path(
    get,
    path = "/home",
    tag = "Site",
    operation_id = "getHome",
    summary = "Home page data",
    description = "Featured images, categories with merged counts, and sky statistics.",
    responses(
        (status = 200, description = "Home page", body = HomeResponse),
    ),
)]
#[instrument(skip(state))]
pub async fn get_home(State(state): State<AppState>) -> Json<HomeResponse> {
    let (featured, counts) = tokio::join!(
        state.gallery.list_featured(),
        state.gallery.category_counts(),
    );

    let stats = common::catalog::SkyStats::from_counts(&counts);
    let categories = counts
        .into_iter()
        .map(|(category, count)| CategorySummary::new(category_info(category), count))
        .collect();

    Json(HomeResponse {
        featured,
        categories,
        stats,
    })
}

/// `GET /sitemap.xml`
pub async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
    let today = chrono::Utc::now().date_naive();
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap::render(&state.config.site.base_url, today),
    )
}

/// `GET /robots.txt`
pub async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        sitemap::robots(&state.config.site.base_url),
    )
}
