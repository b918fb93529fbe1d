use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

pub fn routes(config: &AppConfig) -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .merge(site_routes())
        .merge(gallery_routes())
        .merge(travel_routes())
        .nest("/auth", auth_routes())
        .nest("/admin", admin_routes(config))
}

fn site_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::site::get_site))
        .routes(routes!(handlers::site::get_home))
        .routes(routes!(handlers::site::get_navigation))
}

fn gallery_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::gallery::list_categories))
        .routes(routes!(handlers::gallery::get_category))
        .routes(routes!(handlers::gallery::get_viewer))
        .routes(routes!(handlers::gallery::list_featured))
        .routes(routes!(handlers::gallery::get_image))
        .routes(routes!(handlers::gallery::list_observatories))
        .routes(routes!(handlers::gallery::get_observatory))
}

fn travel_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::travel::list_travel))
        .routes(routes!(handlers::travel::list_albums))
}

fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::auth::login))
        .routes(routes!(handlers::auth::logout))
        .routes(routes!(handlers::auth::me))
}

fn admin_routes(config: &AppConfig) -> OpenApiRouter<AppState> {
    let manage = OpenApiRouter::new()
        .routes(routes!(handlers::admin::dashboard))
        .routes(routes!(handlers::admin::toggle_featured))
        .routes(routes!(handlers::admin::delete_image))
        .routes(routes!(handlers::admin::delete_travel_photo));

    let upload = OpenApiRouter::new()
        .routes(routes!(
            handlers::admin::list_images,
            handlers::admin::upload_image
        ))
        .routes(routes!(
            handlers::admin::list_travel,
            handlers::admin::upload_travel_photo
        ))
        .layer(handlers::admin::upload_body_limit(
            config.storage.max_upload_size,
        ));

    manage.merge(upload)
}
