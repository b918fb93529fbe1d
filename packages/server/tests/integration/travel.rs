use crate::common::{TestApp, routes};

const EMBEDDED_ALBUMS: [&str; 6] = ["Israel", "Caribbean", "Winter", "Family", "Education", "Press"];

#[tokio::test]
async fn all_photos_with_album_counts() {
    let app = TestApp::spawn().await;
    let older = app.insert_travel_row("Tel Aviv", Some("Israel"), 10).await;
    let newer = app.insert_travel_row("Reykjavik", Some("Iceland"), 1).await;

    let res = app.get(routes::TRAVEL).await;

    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["selected"], "all");
    assert_eq!(res.body["total"], 14);
    let ids = res.ids(Some("photos"));
    assert_eq!(ids.len(), 14);
    assert_eq!(ids[0], format!("db-{newer}"));
    assert_eq!(ids[1], format!("db-{older}"));

    let counts: Vec<(String, u64)> = res.body["albums"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| {
            (
                a["album"].as_str().unwrap().to_string(),
                a["count"].as_u64().unwrap(),
            )
        })
        .collect();
    assert_eq!(counts[0], ("Israel".to_string(), 5));
    assert_eq!(counts.last().unwrap(), &("Iceland".to_string(), 1));
}

#[tokio::test]
async fn album_filter_narrows_the_list() {
    let app = TestApp::spawn().await;
    let uploaded = app.insert_travel_row("Tel Aviv", Some("Israel"), 1).await;
    app.insert_travel_row("Reykjavik", Some("Iceland"), 2).await;

    let res = app.get(&routes::travel_album("Israel")).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["selected"], "Israel");
    assert_eq!(res.body["total"], 14);
    let ids = res.ids(Some("photos"));
    assert_eq!(ids.len(), 5);
    assert_eq!(ids[0], format!("db-{uploaded}"));
}

#[tokio::test]
async fn album_view_is_the_full_list_filtered_by_album() {
    let app = TestApp::spawn().await;
    app.insert_travel_row("Tel Aviv", Some("Israel"), 1).await;
    app.insert_travel_row("Haifa", Some("Israel"), 3).await;
    app.insert_travel_row("Reykjavik", Some("Iceland"), 2).await;

    let all = app.get(routes::TRAVEL).await;
    for album in ["Israel", "Iceland", "Family"] {
        let narrowed = app.get(&routes::travel_album(album)).await;
        assert_eq!(narrowed.status, 200);

        let expected: Vec<&serde_json::Value> = all.body["photos"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|p| p["album"] == album)
            .collect();
        let photos: Vec<&serde_json::Value> =
            narrowed.body["photos"].as_array().unwrap().iter().collect();
        assert_eq!(photos, expected, "album {album}");

        let counted = narrowed.body["albums"]
            .as_array()
            .unwrap()
            .iter()
            .find(|a| a["album"] == album)
            .unwrap()["count"]
            .as_u64()
            .unwrap();
        assert_eq!(counted, photos.len() as u64, "album {album}");
    }
}

#[tokio::test]
async fn unknown_album_is_empty_not_an_error() {
    let app = TestApp::spawn().await;

    let res = app.get(&routes::travel_album("Mars")).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["photos"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn albums_list_embedded_first_then_new_uploads() {
    let app = TestApp::spawn().await;
    app.insert_travel_row("Reykjavik", Some("Iceland"), 1).await;
    app.insert_travel_row("Jerusalem", Some("Israel"), 2).await;
    app.insert_travel_row("Untitled", None, 3).await;

    let res = app.get(routes::ALBUMS).await;

    assert_eq!(res.status, 200);
    let mut expected: Vec<&str> = EMBEDDED_ALBUMS.to_vec();
    expected.push("Iceland");
    assert_eq!(res.body, serde_json::json!(expected));
}

#[tokio::test]
async fn outage_serves_embedded_photos() {
    let app = TestApp::spawn().await;
    app.insert_travel_row("Reykjavik", Some("Iceland"), 1).await;
    app.take_remote_offline().await;

    let res = app.get(routes::TRAVEL).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["total"], 12);

    let albums = app.get(routes::ALBUMS).await;
    assert_eq!(albums.body, serde_json::json!(EMBEDDED_ALBUMS));
}
