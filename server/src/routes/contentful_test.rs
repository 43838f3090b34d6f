use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::*;
use crate::services::contentful::StoryRecord;
use crate::state::test_helpers::{FakeCatalog, state_with_catalog};

async fn respond(result: Result<Json<Value>, UpstreamError>) -> (StatusCode, Value) {
    let response = result.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn story(id: &str, name: &str) -> StoryRecord {
    StoryRecord {
        id: id.to_owned(),
        name: Some(name.to_owned()),
        position_job: Some("Inversionista".to_owned()),
        background_image: Some(format!("https://images.ctfassets.net/{id}.jpg")),
        video: None,
        video_link: None,
    }
}

#[tokio::test]
async fn stories_are_nested_under_data() {
    let state = state_with_catalog(FakeCatalog {
        stories: vec![story("s1", "Ana"), story("s2", "Luis")],
        fail_with: None,
    });
    let (status, body) = respond(list_stories(State(state)).await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let stories = body["data"]["stories"].as_array().unwrap();
    assert_eq!(stories.len(), 2);
    assert_eq!(stories[0]["name"], "Ana");
    assert_eq!(stories[0]["positionJob"], "Inversionista");
    assert_eq!(stories[1]["backgroundImage"], "https://images.ctfassets.net/s2.jpg");
}

#[tokio::test]
async fn empty_catalog_is_still_success() {
    let state = state_with_catalog(FakeCatalog::default());
    let (status, body) = respond(list_stories(State(state)).await).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["stories"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn stories_without_contentful_are_unavailable() {
    let (status, body) = respond(list_stories(State(AppState::default())).await).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Contentful is not configured");
}

#[tokio::test]
async fn upstream_auth_failure_is_bad_gateway() {
    let state = state_with_catalog(FakeCatalog { stories: Vec::new(), fail_with: Some(401) });
    let (status, _) = respond(list_stories(State(state)).await).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}
