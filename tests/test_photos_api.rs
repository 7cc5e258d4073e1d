mod common;

use chrono::{TimeZone, Utc};
use common::{is_generated_id, spawn_app, TestApp, TestResult};
use portfolio_cms::Photo;
use serde_json::{json, Value};

fn photo(title: &str, category: &str, day: u32, order: i64, visible: bool) -> Photo {
    Photo {
        title: title.to_string(),
        image: "data:image/png;base64,aGVsbG8=".to_string(),
        category: category.to_string(),
        date: Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap(),
        description: None,
        is_visible: visible,
        order,
    }
}

/// Five visible nature photos, one hidden nature photo, two wedding photos.
async fn stock_photos(app: &TestApp) {
    let photos = [
        photo("n1", "nature", 1, 0, true),
        photo("n2", "nature", 2, 0, true),
        photo("n3", "nature", 3, 0, true),
        photo("n4", "nature", 4, 1, true),
        photo("n5", "nature", 5, 1, true),
        photo("hidden", "nature", 6, 0, false),
        photo("m1", "mariage", 1, 0, true),
        photo("m2", "mariage", 2, 0, true),
    ];
    for p in photos {
        app.service.photos.create(p).await.unwrap();
    }
}

fn titles(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_photos_are_paginated() -> TestResult {
    let app = spawn_app(false).await?;
    stock_photos(&app).await;

    let (status, body) = app
        .get_json("/api/photos?category=nature&per_page=2&page=1")
        .await?;
    assert_eq!(status, 200);
    // order asc, then newest first
    assert_eq!(titles(&body), vec!["n3", "n2"]);
    assert_eq!(
        body["pagination"],
        json!({"total": 5, "page": 1, "per_page": 2, "total_pages": 3})
    );

    let (_, last) = app
        .get_json("/api/photos?category=nature&per_page=2&page=3")
        .await?;
    assert_eq!(titles(&last), vec!["n4"]);

    let (status, beyond) = app
        .get_json("/api/photos?category=nature&per_page=2&page=9")
        .await?;
    assert_eq!(status, 200);
    assert!(beyond["data"].as_array().unwrap().is_empty());
    assert_eq!(beyond["pagination"]["total"], 5);

    let (status, far) = app
        .get_json("/api/photos?category=nature&per_page=100&page=9223372036854775807")
        .await?;
    assert_eq!(status, 200);
    assert!(far["data"].as_array().unwrap().is_empty());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_photos_defaults_and_visibility() -> TestResult {
    let app = spawn_app(false).await?;
    stock_photos(&app).await;

    let (_, body) = app.get_json("/api/photos").await?;
    assert_eq!(body["data"].as_array().unwrap().len(), 7);
    assert_eq!(body["pagination"]["per_page"], 50);
    assert_eq!(body["pagination"]["total_pages"], 1);

    let (_, all) = app.get_json("/api/photos?visible_only=false").await?;
    assert_eq!(all["pagination"]["total"], 8);

    // An empty category parameter does not filter.
    let (_, unfiltered) = app.get_json("/api/photos?category=").await?;
    assert_eq!(unfiltered["pagination"]["total"], 7);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_empty_photo_collection_has_zero_pages() -> TestResult {
    let app = spawn_app(false).await?;

    let (status, body) = app.get_json("/api/photos").await?;
    assert_eq!(status, 200);
    assert_eq!(
        body["pagination"],
        json!({"total": 0, "page": 1, "per_page": 50, "total_pages": 0})
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_invalid_photo_paging_is_422() -> TestResult {
    let app = spawn_app(false).await?;

    for query in ["per_page=101", "per_page=0", "page=0", "page=abc"] {
        let (status, body) = app.get_json(&format!("/api/photos?{query}")).await?;
        assert_eq!(status, 422, "query {query}");
        assert!(body["detail"].is_string());
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_photos_by_category() -> TestResult {
    let app = spawn_app(false).await?;
    stock_photos(&app).await;

    let (status, body) = app.get_json("/api/photos/category/mariage").await?;
    assert_eq!(status, 200);
    assert_eq!(titles(&body), vec!["m2", "m1"]);
    assert!(body.get("pagination").is_none());

    let (_, nature) = app
        .get_json("/api/photos/category/nature?visible_only=false")
        .await?;
    assert_eq!(nature["data"].as_array().unwrap().len(), 6);

    let (status, none) = app.get_json("/api/photos/category/unknown").await?;
    assert_eq!(status, 200);
    assert!(none["data"].as_array().unwrap().is_empty());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_create_photo() -> TestResult {
    let app = spawn_app(false).await?;

    let (status, body) = app
        .post_json(
            "/api/photos",
            &json!({
                "title": "Sunset",
                "image": "aGVsbG8=",
                "category": "no-such-category",
                "date": "2024-05-01T10:00:00"
            }),
        )
        .await?;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Photo created successfully");
    assert!(is_generated_id(body["data"]["id"].as_str().unwrap(), "photo"));
    assert_eq!(body["data"]["category"], "no-such-category");
    assert_eq!(body["data"]["is_visible"], true);
    assert_eq!(body["data"]["order"], 0);

    // The image payload is opaque and stored as sent.
    let (status, blank) = app
        .post_json(
            "/api/photos",
            &json!({"title": "Blank", "image": "", "category": "nature", "date": "2024-05-01"}),
        )
        .await?;
    assert_eq!(status, 200);
    assert_eq!(blank["data"]["image"], "");
    assert_eq!(blank["data"]["date"], "2024-05-01T00:00:00.000000Z");

    let (status, _) = app
        .post_json(
            "/api/photos",
            &json!({"title": "No image", "category": "nature", "date": "2024-05-01"}),
        )
        .await?;
    assert_eq!(status, 422);
    Ok(())
}
