use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

// =============================================================================
// Query
// =============================================================================

fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
    params.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
}

#[test]
fn default_query_asks_for_six_sent_newest_first() {
    let params = CampaignListQuery::default().upstream_params();
    assert_eq!(param(&params, "status"), Some("sent"));
    assert_eq!(param(&params, "count"), Some("6"));
    assert_eq!(param(&params, "offset"), Some("0"));
    assert_eq!(param(&params, "sort_field"), Some("send_time"));
    assert_eq!(param(&params, "sort_dir"), Some("DESC"));
}

#[test]
fn omitted_fields_take_defaults() {
    let query = CampaignListQuery { status: None, count: Some(1000), offset: None }.with_defaults();
    assert_eq!(query, CampaignListQuery { status: Some("sent".into()), count: Some(1000), offset: Some(0) });
}

#[test]
fn count_is_clamped_to_upstream_limit() {
    let query = CampaignListQuery { status: None, count: Some(5000), offset: Some(12) };
    let params = query.upstream_params();
    assert_eq!(param(&params, "count"), Some("1000"));
    assert_eq!(param(&params, "offset"), Some("12"));
    assert_eq!(param(&params, "status"), None);
}

#[test]
fn zero_count_asks_for_one() {
    let query = CampaignListQuery { status: Some(String::new()), count: Some(0), offset: None };
    let params = query.upstream_params();
    assert_eq!(param(&params, "count"), Some("1"));
    assert_eq!(param(&params, "status"), None);
}

// =============================================================================
// Campaign pages
// =============================================================================

const PAGE: &str = r#"{
    "campaigns": [
        {
            "id": "abc123",
            "type": "regular",
            "send_time": "2024-05-01T12:00:00+00:00",
            "archive_url": "https://eepurl.com/abc",
            "long_archive_url": "https://us21.campaign-archive.com/?u=1&id=abc123",
            "settings": {
                "subject_line": "Mercado de Miami",
                "preview_text": "Lo que viene",
                "title": "Mayo",
                "from_name": "Equipo"
            }
        },
        { "id": "draft1", "send_time": "" }
    ],
    "total_items": 42
}"#;

#[test]
fn campaign_page_parses() {
    let page = parse_campaign_page(PAGE).unwrap();
    assert_eq!(page.total_items, 42);
    assert_eq!(page.campaigns.len(), 2);
    assert_eq!(page.campaigns[0].settings.subject_line.as_deref(), Some("Mercado de Miami"));
}

#[test]
fn summary_carries_extraction() {
    let page = parse_campaign_page(PAGE).unwrap();
    let extracted = Extracted {
        images: vec![ExtractedImage { url: "https://img/a.png".into(), alt: "a".into() }],
        descriptions: vec!["Un párrafo suficientemente largo.".into()],
    };
    let summary = page.campaigns.into_iter().next().unwrap().into_summary(extracted.clone());
    assert_eq!(summary.id, "abc123");
    assert_eq!(summary.send_time.as_deref(), Some("2024-05-01T12:00:00+00:00"));
    assert_eq!(summary.images, extracted.images);
    assert_eq!(summary.descriptions, extracted.descriptions);
}

#[test]
fn empty_send_time_becomes_none() {
    let page = parse_campaign_page(PAGE).unwrap();
    let draft = page.campaigns.into_iter().nth(1).unwrap().into_summary(Extracted::default());
    assert_eq!(draft.send_time, None);
    assert_eq!(draft.settings, CampaignSettings::default());
}

#[test]
fn malformed_page_is_parse_error() {
    assert!(matches!(parse_campaign_page("{not json"), Err(UpstreamError::Parse(_))));
}

#[test]
fn detail_serializes_flat() {
    let campaign = parse_campaign(r#"{"id":"x","settings":{"title":"T"}}"#).unwrap();
    let detail = CampaignDetail {
        summary: campaign.into_summary(Extracted::default()),
        html: Some("<p>hola</p>".into()),
        plain_text: None,
    };
    let json = serde_json::to_value(&detail).unwrap();
    assert_eq!(json["id"], "x");
    assert_eq!(json["settings"]["title"], "T");
    assert_eq!(json["html"], "<p>hola</p>");
    assert!(json["plain_text"].is_null());
}

// =============================================================================
// Content and reports
// =============================================================================

#[test]
fn blank_content_fields_become_none() {
    let content = parse_content(r#"{"html":"  ","plain_text":"Hola"}"#).unwrap();
    assert_eq!(content.html, None);
    assert_eq!(content.plain_text.as_deref(), Some("Hola"));
}

#[test]
fn report_flattens_nested_totals() {
    let json = r#"{
        "id": "abc123",
        "emails_sent": 1200,
        "opens": { "opens_total": 800, "unique_opens": 500, "open_rate": 0.41 },
        "clicks": { "clicks_total": 90, "unique_clicks": 60, "click_rate": 0.05 }
    }"#;
    let report = parse_report(json).unwrap();
    assert_eq!(
        report,
        CampaignReport { opens: 800, clicks: 90, open_rate: 0.41, click_rate: 0.05, emails_sent: 1200 }
    );
}

#[test]
fn report_missing_sections_default_to_zero() {
    assert_eq!(parse_report(r#"{"id":"x"}"#).unwrap(), CampaignReport::default());
}

// =============================================================================
// Campaign ids
// =============================================================================

#[test]
fn alphanumeric_ids_build_campaign_paths() {
    assert_eq!(campaign_path("/campaigns", "a1b2c3d4e5", "/content").unwrap(), "/campaigns/a1b2c3d4e5/content");
    assert_eq!(campaign_path("/reports", "abc123", "").unwrap(), "/reports/abc123");
}

#[test]
fn ids_that_could_change_the_path_are_rejected() {
    for id in ["../lists/LIST1/members?x=", "abc/def", "abc?x=1", "abc#frag", "a%2Fb", "", " abc", "ñandú"] {
        assert!(
            matches!(campaign_path("/campaigns", id, "/content"), Err(UpstreamError::InvalidId)),
            "{id:?}"
        );
    }
    assert!(validate_campaign_id(&"a".repeat(65)).is_err());
}

// =============================================================================
// Enrichment fan-out
// =============================================================================

fn wires(n: usize) -> Vec<CampaignWire> {
    let campaigns: Vec<serde_json::Value> = (0..n).map(|i| serde_json::json!({ "id": format!("c{i}") })).collect();
    let json = serde_json::json!({ "campaigns": campaigns, "total_items": n }).to_string();
    parse_campaign_page(&json).unwrap().campaigns
}

#[tokio::test]
async fn large_list_fetches_content_for_one_page_only() {
    let fetches = AtomicUsize::new(0);
    let fetches = &fetches;
    let summaries = enrich_page(wires(1000), |campaign_id, may_fetch| async move {
        if may_fetch {
            fetches.fetch_add(1, Ordering::SeqCst);
            Extracted { descriptions: vec![format!("texto de {campaign_id}")], ..Extracted::default() }
        } else {
            Extracted::default()
        }
    })
    .await;

    assert_eq!(fetches.load(Ordering::SeqCst), ENRICHED_PER_LIST);
    assert_eq!(summaries.len(), 1000);
    assert_eq!(summaries[0].descriptions, vec!["texto de c0".to_owned()]);
    assert_eq!(summaries[20].descriptions, vec!["texto de c20".to_owned()]);
    assert!(summaries[21].descriptions.is_empty());
    assert_eq!(summaries[999].id, "c999");
}

#[tokio::test]
async fn short_list_enriches_everything_in_order() {
    let summaries = enrich_page(wires(3), |campaign_id, may_fetch| async move {
        assert!(may_fetch);
        Extracted { descriptions: vec![campaign_id], ..Extracted::default() }
    })
    .await;
    let ids: Vec<&str> = summaries.iter().map(|s| s.descriptions[0].as_str()).collect();
    assert_eq!(ids, vec!["c0", "c1", "c2"]);
}
