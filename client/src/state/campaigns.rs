//! Campaign archive store: list cache, current campaign, lazy detail/stats.
//!
//! DESIGN
//! ======
//! `CampaignsState` is a plain struct whose transitions are pure methods, so
//! the fetch/retry/select rules are unit-testable without a browser.
//! `CampaignStore` wraps it in an `RwSignal`, is constructed once in `App`,
//! and is handed to components through context. Components subscribe by
//! reading the signal; only the store's own completion handlers write the
//! fetched collections.

#[cfg(test)]
#[path = "campaigns_test.rs"]
mod campaigns_test;

use leptos::prelude::*;

use super::resource::{ResourceFlags, Ticket};
use crate::net::api::CampaignPage;
use crate::net::types::{Campaign, CampaignContent, CampaignStats};

/// Resources tracked independently by the campaign store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Campaigns,
    Content,
    Stats,
}

/// Everything the blog and campaign page read.
#[derive(Clone, Debug, Default)]
pub struct CampaignsState {
    pub campaigns: Vec<Campaign>,
    pub total_items: u64,
    pub current: Option<Campaign>,
    pub content: Option<CampaignContent>,
    pub stats: Option<CampaignStats>,
    pub campaigns_flags: ResourceFlags,
    pub content_flags: ResourceFlags,
    pub stats_flags: ResourceFlags,
}

impl CampaignsState {
    #[must_use]
    pub fn flags(&self, kind: ResourceKind) -> &ResourceFlags {
        match kind {
            ResourceKind::Campaigns => &self.campaigns_flags,
            ResourceKind::Content => &self.content_flags,
            ResourceKind::Stats => &self.stats_flags,
        }
    }

    fn flags_mut(&mut self, kind: ResourceKind) -> &mut ResourceFlags {
        match kind {
            ResourceKind::Campaigns => &mut self.campaigns_flags,
            ResourceKind::Content => &mut self.content_flags,
            ResourceKind::Stats => &mut self.stats_flags,
        }
    }

    #[must_use]
    pub fn find(&self, campaign_id: &str) -> Option<&Campaign> {
        self.campaigns.iter().find(|c| c.id == campaign_id)
    }

    pub fn begin(&mut self, kind: ResourceKind) -> Ticket {
        self.flags_mut(kind).begin()
    }

    pub fn cancel(&mut self, kind: ResourceKind) {
        self.flags_mut(kind).cancel();
    }

    /// Apply a list response. On failure the previous list is kept as-is.
    pub fn apply_campaigns(&mut self, ticket: Ticket, result: Result<CampaignPage, String>) {
        match result {
            Ok(page) => {
                if self.campaigns_flags.finish(ticket, None) {
                    self.total_items = page.total_items.max(page.campaigns.len() as u64);
                    self.campaigns = page.campaigns;
                }
            }
            Err(e) => {
                self.campaigns_flags.finish(ticket, Some(e));
            }
        }
    }

    /// Make `campaign` current and drop the detail/stats of the previous one.
    pub fn select(&mut self, campaign: Campaign) {
        self.current = Some(campaign);
        self.clear_detail();
    }

    /// Forget the current campaign entirely (used before a direct fetch-by-id).
    pub fn deselect(&mut self) {
        self.current = None;
        self.clear_detail();
    }

    fn clear_detail(&mut self) {
        self.content = None;
        self.stats = None;
        self.content_flags.reset();
        self.stats_flags.reset();
    }

    /// Apply a detail response for `campaign_id`.
    ///
    /// When nothing is current yet (the id was not in the cached list), the
    /// fetched record becomes current.
    pub fn apply_detail(
        &mut self,
        ticket: Ticket,
        campaign_id: &str,
        result: Result<(Campaign, CampaignContent), String>,
    ) {
        if !self.content_flags.is_current(ticket) {
            return;
        }
        match result {
            Ok((campaign, content)) => {
                let matches_current = self.current.as_ref().is_some_and(|c| c.id == campaign_id);
                if !matches_current {
                    self.current = Some(campaign);
                }
                self.content = Some(content);
                self.content_flags.finish(ticket, None);
            }
            Err(e) => {
                self.content_flags.finish(ticket, Some(e));
            }
        }
    }

    pub fn apply_stats(&mut self, ticket: Ticket, stats: CampaignStats) {
        if self.stats_flags.finish(ticket, None) {
            self.stats = Some(stats);
        }
    }

    /// Clear every resource's error, as the retry actions do.
    pub fn reset_errors(&mut self) {
        self.campaigns_flags.clear_error();
        self.content_flags.clear_error();
        self.stats_flags.clear_error();
    }

    /// Resolve `campaign_id` against the cache. Returns `true` when it was found
    /// and made current; otherwise the current campaign is cleared so the
    /// caller can fetch it directly.
    pub fn select_cached(&mut self, campaign_id: &str) -> bool {
        match self.find(campaign_id).cloned() {
            Some(campaign) => {
                self.select(campaign);
                true
            }
            None => {
                self.deselect();
                false
            }
        }
    }
}

/// Injected handle to the campaign state plus its async actions.
#[derive(Clone, Copy)]
pub struct CampaignStore {
    state: RwSignal<CampaignsState>,
}

impl Default for CampaignStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CampaignStore {
    #[must_use]
    pub fn new() -> Self {
        Self { state: RwSignal::new(CampaignsState::default()) }
    }

    #[must_use]
    pub fn state(self) -> RwSignal<CampaignsState> {
        self.state
    }

    /// Load the list once; later calls are no-ops until a retry.
    pub fn ensure_loaded(self) {
        let flags = self.state.with_untracked(|s| s.campaigns_flags.clone());
        if !flags.has_loaded && !flags.loading {
            self.fetch_all();
        }
    }

    /// Fetch the sent archive and replace the cached list.
    pub fn fetch_all(self) {
        let Some(ticket) = self.state.try_update(|s| s.begin(ResourceKind::Campaigns)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_campaigns(&crate::net::api::CampaignQuery::archive()).await;
                state.try_update(|s| s.apply_campaigns(ticket, result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ticket;
        }
    }

    /// Clear errors, then fetch the list again.
    pub fn retry(self) {
        self.state.update(CampaignsState::reset_errors);
        self.fetch_all();
    }

    /// Make `campaign_id` current and load its body and report.
    pub fn set_current(self, campaign_id: String) {
        let Some(tickets) = self.state.try_update(|s| {
            s.select_cached(&campaign_id);
            (s.begin(ResourceKind::Content), s.begin(ResourceKind::Stats))
        }) else {
            return;
        };
        self.load_detail(campaign_id, tickets);
    }

    /// Clear errors, then refetch the current campaign's body and report.
    pub fn retry_current(self, campaign_id: String) {
        let Some(tickets) = self.state.try_update(|s| {
            s.reset_errors();
            (s.begin(ResourceKind::Content), s.begin(ResourceKind::Stats))
        }) else {
            return;
        };
        self.load_detail(campaign_id, tickets);
    }

    /// Drop in-flight detail requests (page unmount).
    pub fn cancel_detail(self) {
        self.state.try_update(|s| {
            s.cancel(ResourceKind::Content);
            s.cancel(ResourceKind::Stats);
        });
    }

    fn load_detail(self, campaign_id: String, tickets: (Ticket, Ticket)) {
        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            let (content_ticket, stats_ticket) = tickets;
            leptos::task::spawn_local(async move {
                let (detail, stats) = futures::join!(
                    crate::net::api::fetch_campaign(&campaign_id),
                    crate::net::api::fetch_campaign_stats(&campaign_id)
                );
                state.try_update(|s| {
                    s.apply_detail(content_ticket, &campaign_id, detail);
                    s.apply_stats(stats_ticket, stats);
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (campaign_id, tickets);
        }
    }
}
