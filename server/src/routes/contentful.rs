//! Testimonial stories route.

use axum::extract::State;
use axum::response::Json;
use serde_json::{Value, json};

use crate::error::UpstreamError;
use crate::state::AppState;

/// `GET /api/contentful/stories`
pub async fn list_stories(State(state): State<AppState>) -> Result<Json<Value>, UpstreamError> {
    let stories = state.stories()?.stories().await?;
    Ok(Json(json!({ "success": true, "data": { "stories": stories } })))
}

#[cfg(test)]
#[path = "contentful_test.rs"]
mod tests;
