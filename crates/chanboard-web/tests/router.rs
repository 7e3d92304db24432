//! Integration tests for the dashboard endpoints

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chanboard_core::{ChannelSource, CoreError, RawChannel};
use chanboard_web::{create_router, AppState};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

struct FailingSource;

impl ChannelSource for FailingSource {
    fn fetch_channels(&self) -> Result<Vec<RawChannel>, CoreError> {
        Err(CoreError::malformed(4, "tag", "is NULL"))
    }

    fn ping(&self) -> Result<(), CoreError> {
        Err(CoreError::InputUnavailable {
            message: "connection refused".to_string(),
            source: None,
        })
    }
}

fn raw(id: i64, status: &str, minute: u64, day: u64, tier: &str) -> RawChannel {
    RawChannel {
        id,
        status_code: status.to_string(),
        minute_usage: minute,
        day_usage: day,
        tier: tier.to_string(),
    }
}

fn pool_router() -> Router {
    let pool = vec![
        raw(1, "1", 2, 10, "gcp"),
        raw(2, "1", 5, 22, ""),
        raw(3, "2", 0, 1, ""),
        raw(13, "1", 1, 1, "gcp"),
    ];
    create_router(AppState::new(Arc::new(pool), 60))
}

fn failing_router() -> Router {
    create_router(AppState::new(Arc::new(FailingSource), 60))
}

async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(router, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

fn ids(json: &serde_json::Value) -> Vec<i64> {
    json["channels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_dashboard_json_is_ranked() {
    let (status, json) = get_json(pool_router(), "/api/dashboard").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec![3, 2, 13, 1]);
    assert_eq!(json["summary"]["totalNormal"], 2);
    assert_eq!(json["summary"]["disabledNormal"], 1);
    assert_eq!(json["summary"]["disabledPct"], 50.0);
    assert_eq!(json["summary"]["totalMinuteLimit"], 50);
}

#[tokio::test]
async fn test_filter_narrows_channels_but_not_summary() {
    let (status, json) = get_json(pool_router(), "/api/dashboard?filter=paid").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec![13, 1]);
    assert_eq!(json["summary"]["totalMinuteLimit"], 50);

    let (_, json) = get_json(pool_router(), "/api/dashboard?filter=all&q=1").await;
    assert_eq!(ids(&json), vec![13, 1]);
}

#[tokio::test]
async fn test_unknown_filter_is_bad_request() {
    let (status, json) = get_json(pool_router(), "/api/dashboard?filter=vip").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("vip"));
}

#[tokio::test]
async fn test_failed_pass_returns_error_without_data() {
    let (status, json) = get_json(failing_router(), "/api/dashboard").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json.get("channels").is_none());
    assert!(json["error"].as_str().unwrap().contains("row 4"));

    let (status, body) = get(failing_router(), "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("Channel data unavailable"));
    assert!(!body.contains("cards-grid"));
}

#[tokio::test]
async fn test_index_renders_cards() {
    let (status, body) = get(pool_router(), "/?filter=normal").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ID: 2"));
    assert!(body.contains("ID: 3"));
    assert!(!body.contains("ID: 13"));
    assert!(body.contains("content=\"60\""));
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = get_json(pool_router(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");

    let (status, json) = get_json(failing_router(), "/api/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["status"], "unavailable");
}
