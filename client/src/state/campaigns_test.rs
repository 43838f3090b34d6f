use super::*;
use crate::net::types::{DEFAULT_AUTHOR, NO_SUBJECT};

fn campaign(id: &str) -> Campaign {
    Campaign {
        id: id.to_owned(),
        title: format!("title {id}"),
        subject: format!("subject {id}"),
        preview: String::new(),
        send_time: None,
        from_name: DEFAULT_AUTHOR.to_owned(),
        archive_url: None,
        images: Vec::new(),
        descriptions: Vec::new(),
    }
}

fn page(ids: &[&str]) -> CampaignPage {
    CampaignPage { campaigns: ids.iter().map(|id| campaign(id)).collect(), total_items: ids.len() as u64 }
}

fn loaded(ids: &[&str]) -> CampaignsState {
    let mut state = CampaignsState::default();
    let ticket = state.begin(ResourceKind::Campaigns);
    state.apply_campaigns(ticket, Ok(page(ids)));
    state
}

// =============================================================
// List fetch
// =============================================================

#[test]
fn begin_marks_only_campaigns_loading() {
    let mut state = CampaignsState::default();
    state.begin(ResourceKind::Campaigns);
    assert!(state.flags(ResourceKind::Campaigns).loading);
    assert!(!state.flags(ResourceKind::Content).loading);
    assert!(!state.flags(ResourceKind::Stats).loading);
}

#[test]
fn successful_fetch_replaces_list_and_clears_error() {
    let mut state = loaded(&["a"]);
    let ticket = state.begin(ResourceKind::Campaigns);
    state.apply_campaigns(ticket, Ok(page(&["b", "c"])));
    let ids: Vec<&str> = state.campaigns.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c"]);
    assert!(state.campaigns_flags.error.is_none());
    assert!(!state.campaigns_flags.loading);
    assert!(state.campaigns_flags.has_loaded);
}

#[test]
fn failed_fetch_keeps_previous_list_and_sets_error() {
    let mut state = loaded(&["a", "b"]);
    let ticket = state.begin(ResourceKind::Campaigns);
    state.apply_campaigns(ticket, Err("Error 500: Internal Server Error".to_owned()));
    assert_eq!(state.campaigns.len(), 2);
    let error = state.campaigns_flags.error.clone().unwrap();
    assert!(!error.is_empty());
    assert!(!state.campaigns_flags.loading);
}

#[test]
fn error_and_loading_are_never_both_set() {
    let mut state = CampaignsState::default();
    let ticket = state.begin(ResourceKind::Campaigns);
    state.apply_campaigns(ticket, Err("Error 503".to_owned()));
    let flags = state.flags(ResourceKind::Campaigns);
    assert!(!(flags.loading && flags.error.is_some()));

    state.begin(ResourceKind::Campaigns);
    let flags = state.flags(ResourceKind::Campaigns);
    assert!(flags.loading);
    assert!(flags.error.is_none());
}

#[test]
fn retry_clears_error_before_reissuing() {
    let mut state = CampaignsState::default();
    let ticket = state.begin(ResourceKind::Campaigns);
    state.apply_campaigns(ticket, Err("Error 500".to_owned()));

    state.reset_errors();
    assert!(state.campaigns_flags.error.is_none());
    assert!(!state.campaigns_flags.loading);

    let ticket = state.begin(ResourceKind::Campaigns);
    assert!(state.campaigns_flags.loading);
    state.apply_campaigns(ticket, Ok(page(&["a"])));
    assert_eq!(state.campaigns.len(), 1);
}

#[test]
fn superseded_list_response_is_dropped() {
    let mut state = CampaignsState::default();
    let old = state.begin(ResourceKind::Campaigns);
    let new = state.begin(ResourceKind::Campaigns);
    state.apply_campaigns(new, Ok(page(&["fresh"])));
    state.apply_campaigns(old, Ok(page(&["stale"])));
    assert_eq!(state.campaigns[0].id, "fresh");
}

#[test]
fn total_items_never_below_list_length() {
    let mut state = CampaignsState::default();
    let ticket = state.begin(ResourceKind::Campaigns);
    let mut p = page(&["a", "b", "c"]);
    p.total_items = 0;
    state.apply_campaigns(ticket, Ok(p));
    assert_eq!(state.total_items, 3);
}

// =============================================================
// Current campaign
// =============================================================

#[test]
fn select_cached_uses_list_entry() {
    let mut state = loaded(&["a", "b"]);
    assert!(state.select_cached("b"));
    assert_eq!(state.current.as_ref().map(|c| c.id.as_str()), Some("b"));
}

#[test]
fn select_cached_miss_clears_current() {
    let mut state = loaded(&["a"]);
    state.select_cached("a");
    assert!(!state.select_cached("zzz"));
    assert!(state.current.is_none());
}

#[test]
fn changing_campaign_drops_previous_detail() {
    let mut state = loaded(&["a", "b"]);
    state.select_cached("a");
    let content = state.begin(ResourceKind::Content);
    let stats = state.begin(ResourceKind::Stats);
    state.apply_detail(content, "a", Ok((campaign("a"), CampaignContent { html: Some("<p/>".into()), plain_text: None })));
    state.apply_stats(stats, CampaignStats { opens: 3, ..CampaignStats::default() });
    assert!(state.content.is_some());
    assert!(state.stats.is_some());

    state.select_cached("b");
    assert!(state.content.is_none());
    assert!(state.stats.is_none());
    assert!(!state.content_flags.has_loaded);
    assert!(!state.stats_flags.has_loaded);
}

#[test]
fn direct_fetch_sets_current_when_not_cached() {
    let mut state = loaded(&["a"]);
    state.select_cached("remote");
    let ticket = state.begin(ResourceKind::Content);
    state.apply_detail(ticket, "remote", Ok((campaign("remote"), CampaignContent::default())));
    assert_eq!(state.current.as_ref().map(|c| c.id.as_str()), Some("remote"));
    assert!(state.content_flags.has_loaded);
}

#[test]
fn detail_for_cached_campaign_keeps_list_record() {
    let mut state = loaded(&["a"]);
    state.select_cached("a");
    let ticket = state.begin(ResourceKind::Content);
    let mut remote = campaign("a");
    remote.subject = NO_SUBJECT.to_owned();
    state.apply_detail(ticket, "a", Ok((remote, CampaignContent::default())));
    assert_eq!(state.current.as_ref().map(|c| c.subject.as_str()), Some("subject a"));
}

#[test]
fn detail_failure_records_content_error_only() {
    let mut state = loaded(&["a"]);
    state.select_cached("missing");
    let ticket = state.begin(ResourceKind::Content);
    state.apply_detail(ticket, "missing", Err("Error 404: Not Found".to_owned()));
    assert!(state.current.is_none());
    assert_eq!(state.content_flags.error.as_deref(), Some("Error 404: Not Found"));
    assert!(state.campaigns_flags.error.is_none());
}

#[test]
fn cancelled_detail_is_not_applied() {
    let mut state = loaded(&["a"]);
    state.select_cached("a");
    let content = state.begin(ResourceKind::Content);
    let stats = state.begin(ResourceKind::Stats);
    state.cancel(ResourceKind::Content);
    state.cancel(ResourceKind::Stats);
    state.apply_detail(content, "a", Ok((campaign("a"), CampaignContent::default())));
    state.apply_stats(stats, CampaignStats::default());
    assert!(state.content.is_none());
    assert!(state.stats.is_none());
}

#[test]
fn detail_response_for_previous_selection_is_dropped() {
    let mut state = loaded(&["a", "b"]);
    state.select_cached("a");
    let stale = state.begin(ResourceKind::Content);
    state.select_cached("b");
    state.begin(ResourceKind::Content);
    state.apply_detail(stale, "a", Ok((campaign("a"), CampaignContent::default())));
    assert_eq!(state.current.as_ref().map(|c| c.id.as_str()), Some("b"));
    assert!(state.content.is_none());
}
