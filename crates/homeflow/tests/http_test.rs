use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use homeflow::api::{create_router, AppState};
use homeflow::home::{FixedClock, RoomFilter};
use homeflow::{Config, Home};

/// "Σαλόνι", percent-encoded
const LIVING_ROOM: &str = "%CE%A3%CE%B1%CE%BB%CF%8C%CE%BD%CE%B9";

fn app() -> (Router, Arc<Home>) {
    let config = Config::default();
    let home = Arc::new(Home::new(&config, Arc::new(FixedClock::new(20))));
    let router = create_router(Arc::new(AppState::new(home.clone())), &config.http.assets_dir);
    (router, home)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(Method::POST)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn body_text(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

fn location(response: &Response) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}

#[tokio::test]
async fn test_pages_render() {
    let (router, _home) = app();

    let room_uri = format!("/devices?room={}", LIVING_ROOM);
    for uri in ["/", "/dashboard", "/devices", room_uri.as_str(), "/settings"] {
        let response = router.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        let html = body_text(response).await;
        assert!(html.starts_with("<!DOCTYPE html>"), "GET {uri}");
    }
}

#[tokio::test]
async fn test_unknown_path_is_404_page() {
    let (router, _home) = app();

    let response = router.oneshot(get("/nowhere")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("/nowhere"));
}

#[tokio::test]
async fn test_toggle_form_redirects_back() {
    let (router, home) = app();

    let response = router
        .clone()
        .oneshot(form("/devices/2/toggle", "from=dashboard"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");
    assert!(home.devices(&RoomFilter::All).await[1].is_on);

    let response = router
        .oneshot(form(
            "/devices/2/toggle",
            &format!("from=devices&room={}", LIVING_ROOM),
        ))
        .await
        .unwrap();
    assert_eq!(location(&response), format!("/devices?room={}", LIVING_ROOM));
    assert!(!home.devices(&RoomFilter::All).await[1].is_on);
}

#[tokio::test]
async fn test_unknown_device_form_is_noop() {
    let (router, home) = app();
    let before = home.devices(&RoomFilter::All).await;

    let response = router
        .oneshot(form("/devices/99/toggle", "from=devices"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/devices");
    assert_eq!(home.devices(&RoomFilter::All).await, before);
}

#[tokio::test]
async fn test_value_form_clamps() {
    let (router, home) = app();

    let response = router
        .oneshot(form(
            "/devices/1/value",
            &format!("value=99&room={}", LIVING_ROOM),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/devices?room={}", LIVING_ROOM));
    assert_eq!(home.devices(&RoomFilter::All).await[0].value, 35);
}

#[tokio::test]
async fn test_settings_forms() {
    let (router, home) = app();

    let response = router
        .clone()
        .oneshot(form("/settings/rules/4/toggle", ""))
        .await
        .unwrap();
    assert_eq!(location(&response), "/settings");
    assert!(home.rules().await[3].active);

    router
        .clone()
        .oneshot(form("/settings/rules/1/delete", ""))
        .await
        .unwrap();
    assert_eq!(home.rules().await.len(), 3);

    let response = router
        .clone()
        .oneshot(form("/settings/preferences/voice_control/toggle", ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(!home.preferences().await.voice_control);

    let response = router
        .oneshot(form("/settings/preferences/dark_mode/toggle", ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_signup() {
    let (router, _home) = app();

    let response = router
        .clone()
        .oneshot(form("/signup", "email="))
        .await
        .unwrap();
    assert_eq!(location(&response), "/");

    let response = router
        .clone()
        .oneshot(form("/signup", "email=me%40example.com"))
        .await
        .unwrap();
    assert_eq!(location(&response), "/?signed_up=1#signup");

    let response = router.oneshot(get("/?signed_up=1")).await.unwrap();
    assert!(body_text(response).await.contains("Ευχαριστούμε!"));
}

#[tokio::test]
async fn test_stylesheet_served_from_default_assets_dir() {
    let (router, _home) = app();

    let response = router
        .clone()
        .oneshot(get("/assets/homeflow.css"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(".nav-link.active"));

    let response = router.oneshot(get("/assets/missing.css")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_info_and_locations() {
    let (router, _home) = app();

    let response = router.clone().oneshot(get("/v1/info")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let info = body_json(response).await;
    assert_eq!(info["version"], json!(env!("CARGO_PKG_VERSION")));
    assert!(info["hostname"].is_string());

    let response = router.oneshot(get("/v1/locations")).await.unwrap();
    let locations = body_json(response).await;
    let locations = locations.as_array().unwrap();
    assert_eq!(locations.len(), 2);
    assert_eq!(
        locations.iter().filter(|l| l["is_home"] == json!(true)).count(),
        1
    );
}

#[tokio::test]
async fn test_api_ping_and_presence() {
    let (router, _home) = app();

    let response = router.clone().oneshot(get("/v1/ping")).await.unwrap();
    assert_eq!(body_json(response).await, json!({"status": "ok"}));

    let response = router.oneshot(get("/v1/presence")).await.unwrap();
    let presence = body_json(response).await;
    assert_eq!(presence["state"], json!("home"));
    assert_eq!(presence["arrival"], json!(null));
}

#[tokio::test]
async fn test_api_devices() {
    let (router, _home) = app();

    let response = router.clone().oneshot(get("/v1/devices")).await.unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 6);

    let response = router
        .clone()
        .oneshot(get(&format!("/v1/devices?room={}", LIVING_ROOM)))
        .await
        .unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);

    let response = router
        .clone()
        .oneshot(json_request(Method::POST, "/v1/devices/2/toggle", json!({})))
        .await
        .unwrap();
    let device = body_json(response).await;
    assert_eq!(device["is_on"], json!(true));
    assert_eq!(device["status"], json!("active"));

    let response = router
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/v1/devices/1/value",
            json!({"value": -5}),
        ))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["value"], json!(0));

    let response = router
        .clone()
        .oneshot(json_request(Method::POST, "/v1/devices/99/toggle", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({"error": "no device with id '99'"})
    );

    let response = router
        .oneshot(json_request(
            Method::PUT,
            "/v1/devices/99/value",
            json!({"value": 10}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({"error": "no device with id '99'"})
    );
}

#[tokio::test]
async fn test_api_automations() {
    let (router, _home) = app();

    let response = router
        .clone()
        .oneshot(json_request(Method::POST, "/v1/automations/4/toggle", json!({})))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["active"], json!(true));

    let delete = || json_request(Method::DELETE, "/v1/automations/2", json!({}));
    let response = router.clone().oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let response = router.clone().oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = router.oneshot(get("/v1/automations")).await.unwrap();
    let rules = body_json(response).await;
    let ids: Vec<&str> = rules
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["1", "3", "4"]);
    assert_eq!(rules[1]["trigger"]["kind"], json!("time"));
    assert_eq!(rules[1]["trigger"]["schedule"], json!("23:00"));
}

#[tokio::test]
async fn test_api_demo_start() {
    let (router, home) = app();

    let response = router.clone().oneshot(get("/v1/demo")).await.unwrap();
    let demo = body_json(response).await;
    assert_eq!(demo["playing"], json!(false));
    assert_eq!(demo["steps"].as_array().unwrap().len(), 4);

    let response = router
        .clone()
        .oneshot(json_request(Method::POST, "/v1/demo/start", json!({})))
        .await
        .unwrap();
    let demo = body_json(response).await;
    assert_eq!(demo["playing"], json!(true));
    assert_eq!(demo["cursor"], json!(0));
    assert_eq!(demo["steps"][0]["phase"], json!("active"));
    assert_eq!(demo["steps"][1]["phase"], json!("dimmed"));

    let response = router.oneshot(form("/demo/start", "")).await.unwrap();
    assert_eq!(location(&response), "/#demo");

    home.shutdown().await;
}
