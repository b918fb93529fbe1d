use axum::Json;
use axum::extract::{Query, State};
use common::widgets::{AlbumFilter, AlbumSelection};
use tracing::instrument;

use crate::models::gallery::{TravelQuery, TravelResponse};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/travel",
    tag = "Travel",
    operation_id = "listTravelPhotos",
    summary = "List travel photos",
    description = "Travel and family photos, uploaded first. `album` narrows the list to one \
        album; `all` or no value returns everything. Album counts always cover every photo.",
    params(TravelQuery),
    responses(
        (status = 200, description = "Travel gallery", body = TravelResponse),
    ),
)]
#[instrument(skip(state, query), fields(album = ?query.album))]
pub async fn list_travel(
    State(state): State<AppState>,
    Query(query): Query<TravelQuery>,
) -> Json<TravelResponse> {
    let mut filter = AlbumFilter::new();
    filter.select(AlbumSelection::parse(query.album.as_deref().unwrap_or("all")));

    let (all, albums) = tokio::join!(
        state.gallery.list_all_travel_photos(),
        state.gallery.list_albums(),
    );

    // Narrowing is a predicate over the merged list; no second query.
    let photos = filter.visible(&all).into_iter().cloned().collect();
    let selected = match filter.selected() {
        AlbumSelection::All => "all".to_string(),
        AlbumSelection::Album(album) => album.clone(),
    };

    Json(TravelResponse {
        selected,
        total: all.len(),
        albums: AlbumFilter::album_counts(&albums, &all),
        photos,
    })
}

#[utoipa::path(
    get,
    path = "/travel/albums",
    tag = "Travel",
    operation_id = "listAlbums",
    summary = "List album names",
    description = "Distinct album names from both sources: embedded albums first in \
        declaration order, then any new uploaded albums.",
    responses(
        (status = 200, description = "Album names", body = Vec<String>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_albums(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.gallery.list_albums().await)
}
