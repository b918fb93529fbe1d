pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod gallery;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;

use axum::routing::get;
use common::config::StorageBackend;
use common::storage::filesystem::FilesystemObjectStore;
use tower_http::services::ServeDir;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Silver Spring Astro Gallery API",
        version = "1.0.0",
        description = "Astrophotography gallery: embedded catalog merged with uploaded images"
    ),
    tags(
        (name = "Site", description = "Site information, home page, and navigation"),
        (name = "Gallery", description = "Categories, images, lightbox frames, and observatories"),
        (name = "Travel", description = "Travel and family photos"),
        (name = "Auth", description = "Administrator session"),
        (name = "Admin", description = "Uploading and managing images"),
    ),
    modifiers(&SecurityAddon),
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();
        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", routes::api_routes(&state.config))
        .split_for_parts();

    let mut router = router
        .route("/admin", get(handlers::admin::admin_page))
        .route("/sitemap.xml", get(handlers::site::sitemap_xml))
        .route("/robots.txt", get(handlers::site::robots_txt));

    // Uploaded files are served by the app itself only for local storage, and
    // only from the objects directory so in-flight writes stay private.
    let storage = &state.config.storage;
    let media_path = storage.public_base_url.trim_end_matches('/');
    if storage.backend == StorageBackend::Filesystem
        && media_path.starts_with('/')
        && media_path.len() > 1
    {
        let objects = FilesystemObjectStore::objects_dir(&storage.root);
        router = router.nest_service(media_path, ServeDir::new(objects));
    }

    router
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
        .merge(Scalar::with_url("/scalar", api))
}
