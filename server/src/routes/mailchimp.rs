//! Campaign archive routes.
//!
//! Every response uses the `{ success, data }` envelope the site expects;
//! failures go through [`UpstreamError`]'s `IntoResponse`.

use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde_json::{Value, json};

use crate::error::UpstreamError;
use crate::services::mailchimp::{CampaignListQuery, validate_campaign_id};
use crate::state::AppState;

/// `GET /api/mailchimp/campaigns`: one page of campaigns, newest first.
pub async fn list_campaigns(
    State(state): State<AppState>,
    Query(query): Query<CampaignListQuery>,
) -> Result<Json<Value>, UpstreamError> {
    let query = query.with_defaults();
    let page = state.campaigns()?.list(&query).await?;
    Ok(Json(json!({ "success": true, "data": page })))
}

/// `GET /api/mailchimp/campaigns/{id}`: campaign plus its HTML body.
/// Ids that are not alphanumeric answer 404 without reaching Mailchimp.
pub async fn get_campaign(
    State(state): State<AppState>,
    Path(campaign_id): Path<String>,
) -> Result<Json<Value>, UpstreamError> {
    validate_campaign_id(&campaign_id)?;
    let detail = state.campaigns()?.detail(&campaign_id).await?;
    Ok(Json(json!({ "success": true, "data": detail })))
}

/// `GET /api/mailchimp/campaigns/{id}/reports`: engagement counters.
pub async fn get_campaign_report(
    State(state): State<AppState>,
    Path(campaign_id): Path<String>,
) -> Result<Json<Value>, UpstreamError> {
    validate_campaign_id(&campaign_id)?;
    let report = state.campaigns()?.report(&campaign_id).await?;
    Ok(Json(json!({ "success": true, "data": report })))
}

#[cfg(test)]
#[path = "mailchimp_test.rs"]
mod tests;
