//! HTTP contract tests for the JSON API.
//!
//! Drives the router directly with oneshot requests; no listener, no
//! external services.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_and_ready() {
    let app = blendbox::create_app().unwrap();

    let response = app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ready");
}

#[tokio::test]
async fn test_catalog_listing_and_lookup() {
    let app = blendbox::create_app().unwrap();

    let response = app.clone().oneshot(get("/api/catalog")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let items = body_json(response).await;
    let items = items.as_array().expect("catalog is a JSON array");
    assert!(items.len() >= 7);

    let first_id = items[0]["id"].as_str().unwrap().to_string();
    let response = app
        .clone()
        .oneshot(get(&format!("/api/catalog/{first_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/api/catalog/not-a-real-id")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_weekly_recommendations_shape() {
    let app = blendbox::create_app().unwrap();

    let response = app
        .oneshot(post_json(
            "/api/recommendations",
            json!({
                "profile": {"activity_level": "athlete"},
                "favorite_ids": ["green-machine"],
                "checkin": {"sleep": 3, "energy": 4, "mood": 6}
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let recs = body["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 21, "7 per slot across 3 slots");

    // Buckets arrive morning -> afternoon -> evening.
    assert_eq!(recs[0]["time_of_day"], "morning");
    assert_eq!(recs[7]["time_of_day"], "afternoon");
    assert_eq!(recs[14]["time_of_day"], "evening");

    for rec in recs {
        let score = rec["time_relevance_score"].as_u64().unwrap();
        assert!(score <= 100, "scores stay in 0-100");
    }
}

#[tokio::test]
async fn test_recommendations_respect_allergens() {
    let app = blendbox::create_app().unwrap();

    let response = app
        .oneshot(post_json(
            "/api/recommendations",
            json!({"profile": {"allergens": ["peanuts"]}}),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;

    for rec in body["recommendations"].as_array().unwrap() {
        let ingredients = rec["ingredients"].as_array().unwrap();
        assert!(
            !ingredients
                .iter()
                .any(|i| i["name"].as_str().unwrap().eq_ignore_ascii_case("peanut butter")),
            "peanut recipes must be filtered out"
        );
    }
}

#[tokio::test]
async fn test_unknown_user_recommendations_404() {
    let app = blendbox::create_app().unwrap();

    let response = app
        .oneshot(get("/api/users/ghost/recommendations"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_packaging_summary_counts_and_errors() {
    let app = blendbox::create_app().unwrap();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/packaging/summary",
            json!({"item_ids": ["green-machine", "green-machine", "sunrise-oat-banana"]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let summary = body_json(response).await;
    assert_eq!(summary["total_packages"], 3, "one package per smoothie");
    assert_eq!(summary["packages"].as_array().unwrap().len(), 3);

    let response = app
        .oneshot(post_json(
            "/api/packaging/summary",
            json!({"item_ids": ["no-such-item"]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_quote_endpoint_matches_pricing_rules() {
    let app = blendbox::create_app().unwrap();

    let response = app
        .clone()
        .oneshot(get("/api/pricing/quote?quantity=1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["quote"]["subtotal"], 12.0);
    assert_eq!(body["quote"]["delivery_fee"], 8.0);
    assert_eq!(body["quote"]["total"], 20.0);

    let response = app
        .clone()
        .oneshot(get("/api/pricing/quote?quantity=10"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["quote"]["price_per_unit"], 9.5);
    assert_eq!(body["quote"]["free_delivery_applied"], true);

    let response = app
        .oneshot(get("/api/pricing/quote?quantity=1&first_order=true"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["quote"]["bag_deposit"], 15.0);
    assert_eq!(body["quote"]["total"], 35.0);
}

#[tokio::test]
async fn test_pricing_tiers_listing() {
    let app = blendbox::create_app().unwrap();

    let response = app.oneshot(get("/api/pricing/tiers")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let tiers = body_json(response).await;
    assert_eq!(tiers.as_array().unwrap().len(), 4);
    assert_eq!(tiers[0]["min_qty"], 1);
}

#[tokio::test]
async fn test_order_preview_composes_packaging_and_pricing() {
    let app = blendbox::create_app().unwrap();

    let response = app
        .oneshot(post_json(
            "/api/orders/preview",
            json!({
                "lines": [
                    {"item_id": "sunrise-oat-banana", "time_of_day": "morning"},
                    {"item_id": "cherry-almond-wind-down", "time_of_day": "evening"}
                ],
                "first_order": true
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["order"]["status"], "pending");
    assert_eq!(body["order"]["items"].as_array().unwrap().len(), 2);
    assert!(
        !body["order"]["packaging_breakdown"]["fresh_ingredient_names"]
            .as_array()
            .unwrap()
            .is_empty()
    );
    // 2 smoothies at the starter price plus delivery and deposit.
    assert_eq!(body["quote"]["total"], 2.0 * 12.0 + 8.0 + 15.0);
}
