use crate::common::{TestApp, routes};

const EMBEDDED_GALAXIES: [&str; 6] = [
    "gal-m51",
    "gal-ngc4565",
    "gal-ngc7331",
    "gal-m81",
    "gal-m82",
    "gal-m101",
];

mod category_pages {
    use super::*;

    #[tokio::test]
    async fn embedded_images_are_listed_when_nothing_was_uploaded() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::category("galaxies")).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["category"]["slug"], "galaxies");
        assert_eq!(res.body["category"]["count"], 6);
        assert_eq!(res.ids(Some("images")), EMBEDDED_GALAXIES);
    }

    #[tokio::test]
    async fn uploaded_images_come_first_newest_first() {
        let app = TestApp::spawn().await;
        let older = app.insert_image_row("NGC 891", "galaxies", false, 10).await;
        let newer = app.insert_image_row("M 33", "galaxies", false, 1).await;
        app.insert_image_row("M 42", "nebulae", false, 5).await;

        let res = app.get(&routes::category("galaxies")).await;

        assert_eq!(res.status, 200);
        let ids = res.ids(Some("images"));
        assert_eq!(ids.len(), 8);
        assert_eq!(ids[0], format!("db-{newer}"));
        assert_eq!(ids[1], format!("db-{older}"));
        assert_eq!(ids[2..], EMBEDDED_GALAXIES);
        // Thumbnail falls back to the full image.
        assert_eq!(
            res.body["images"][0]["thumbnail_path"],
            res.body["images"][0]["image_path"]
        );
    }

    #[tokio::test]
    async fn rows_with_unknown_categories_are_skipped() {
        let app = TestApp::spawn().await;
        app.insert_image_row("C/2023 A3", "comets", false, 1).await;

        let res = app.get(routes::CATEGORIES).await;

        assert_eq!(res.status, 200);
        let total: u64 = res
            .body
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["count"].as_u64().unwrap())
            .sum();
        assert_eq!(total, 24);
    }

    #[tokio::test]
    async fn unknown_category_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::category("comets")).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn categories_carry_merged_counts_in_navigation_order() {
        let app = TestApp::spawn().await;
        app.insert_image_row("M 33", "galaxies", false, 1).await;

        let res = app.get(routes::CATEGORIES).await;

        assert_eq!(res.status, 200);
        let categories = res.body.as_array().unwrap();
        assert_eq!(categories.len(), 7);
        assert_eq!(categories[0]["slug"], "galaxies");
        assert_eq!(categories[0]["count"], 7);
        assert_eq!(categories[6]["slug"], "exoplanets");
        assert_eq!(categories[6]["count"], 3);
    }
}

mod viewer {
    use super::*;

    #[tokio::test]
    async fn first_image_wraps_back_to_the_last() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::viewer("galaxies", 0)).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["image"]["id"], "gal-m51");
        assert_eq!(res.body["position"], "1 / 6");
        assert_eq!(res.body["previous_id"], "gal-m101");
        assert_eq!(res.body["next_id"], "gal-ngc4565");
        assert_eq!(res.body["observatory_label"], "from H85 (Silver Spring Observatory)");
    }

    #[tokio::test]
    async fn last_image_wraps_forward_to_the_first() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::viewer("galaxies", 5)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["position"], "6 / 6");
        assert_eq!(res.body["next_id"], "gal-m51");
    }

    #[tokio::test]
    async fn index_past_the_end_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::viewer("galaxies", 6)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }
}

mod images {
    use super::*;

    #[tokio::test]
    async fn featured_lists_uploaded_then_embedded() {
        let app = TestApp::spawn().await;
        let featured = app.insert_image_row("M 33", "galaxies", true, 1).await;
        app.insert_image_row("M 31", "galaxies", false, 2).await;

        let res = app.get(routes::FEATURED).await;

        assert_eq!(res.status, 200);
        assert_eq!(
            res.ids(None),
            [
                format!("db-{featured}"),
                "gal-m51".into(),
                "gal-ngc7331".into(),
                "neb-m27".into(),
                "neb-ngc7000".into(),
            ]
        );
    }

    #[tokio::test]
    async fn lookup_by_embedded_and_uploaded_id() {
        let app = TestApp::spawn().await;
        let id = app.insert_image_row("M 33", "galaxies", false, 1).await;

        let embedded = app.get(&routes::image("gal-m51")).await;
        assert_eq!(embedded.status, 200);
        assert_eq!(embedded.body["designation"], "M51");

        let uploaded = app.get(&routes::image(&format!("db-{id}"))).await;
        assert_eq!(uploaded.status, 200);
        assert_eq!(uploaded.body["designation"], "M 33");
        assert_eq!(uploaded.body["observatory"], "SRO");
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let app = TestApp::spawn().await;

        for id in ["gal-nope", "db-not-a-uuid", "db-0190b4c8-6f7a-7c3e-9b7d-3f0c6a1e2d45"] {
            let res = app.get(&routes::image(id)).await;
            assert_eq!(res.status, 404, "id {id}");
        }
    }
}

mod observatories {
    use super::*;

    #[tokio::test]
    async fn lists_all_imaging_sites() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::OBSERVATORIES).await;

        assert_eq!(res.status, 200);
        let codes: Vec<&str> = res
            .body
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["code"].as_str().unwrap())
            .collect();
        assert_eq!(codes, ["H85", "BBO", "SRO", "G53", "TAS"]);
    }

    #[tokio::test]
    async fn known_and_unknown_badges() {
        let app = TestApp::spawn().await;

        let known = app.get(&routes::observatory("BBO")).await;
        assert_eq!(known.status, 200);
        assert_eq!(known.body["known"], true);
        assert_eq!(known.body["label"], "from BBO");
        assert_eq!(known.body["full_label"], "from BBO (Blackbird Observatory)");
        assert_eq!(known.body["badge_class"], "badge-bbo");

        let unknown = app.get(&routes::observatory("XYZ")).await;
        assert_eq!(unknown.status, 200);
        assert_eq!(unknown.body["known"], false);
        assert_eq!(unknown.body["full_label"], "from XYZ");
        assert_eq!(unknown.body["badge_class"], "bg-space-600");
    }
}

mod remote_outage {
    use super::*;

    #[tokio::test]
    async fn reads_fall_back_to_the_embedded_catalog() {
        let app = TestApp::spawn().await;
        let id = app.insert_image_row("M 33", "galaxies", true, 1).await;
        app.take_remote_offline().await;

        let category = app.get(&routes::category("galaxies")).await;
        assert_eq!(category.status, 200);
        assert_eq!(category.ids(Some("images")), EMBEDDED_GALAXIES);

        let featured = app.get(routes::FEATURED).await;
        assert_eq!(featured.status, 200);
        assert_eq!(featured.ids(None).len(), 4);

        let categories = app.get(routes::CATEGORIES).await;
        assert_eq!(categories.status, 200);
        assert_eq!(categories.body[0]["count"], 6);

        let uploaded = app.get(&routes::image(&format!("db-{id}"))).await;
        assert_eq!(uploaded.status, 404);

        let embedded = app.get(&routes::image("gal-m51")).await;
        assert_eq!(embedded.status, 200);
    }
}
