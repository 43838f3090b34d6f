//! Stories store feeding the testimonials carousel.
//!
//! Same shape as the campaign store: pure `StoriesState` transitions wrapped
//! by a copyable `StoriesStore` handle provided from `App`.

#[cfg(test)]
#[path = "stories_test.rs"]
mod stories_test;

use leptos::prelude::*;

use super::resource::{ResourceFlags, Ticket};
use crate::net::fallback::fallback_stories;
use crate::net::types::Story;

#[derive(Clone, Debug, Default)]
pub struct StoriesState {
    pub stories: Vec<Story>,
    pub current: Option<Story>,
    pub flags: ResourceFlags,
}

impl StoriesState {
    pub fn begin(&mut self) -> Ticket {
        self.flags.begin()
    }

    /// Apply a fetch result. A failure keeps the previous list, or seeds the
    /// fallback set when there was nothing to keep.
    pub fn apply(&mut self, ticket: Ticket, result: Result<Vec<Story>, String>) {
        match result {
            Ok(stories) => {
                if self.flags.finish(ticket, None) {
                    self.stories = stories;
                }
            }
            Err(e) => {
                if self.flags.finish(ticket, Some(e)) && self.stories.is_empty() {
                    self.stories = fallback_stories();
                }
            }
        }
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Story> {
        self.stories.iter().find(|s| s.id == id)
    }

    /// Make a cached story current. Returns `false` when it is not cached.
    pub fn select_cached(&mut self, id: &str) -> bool {
        let found = self.find(id).cloned();
        let hit = found.is_some();
        if hit {
            self.current = found;
        }
        hit
    }

    pub fn reset_error(&mut self) {
        self.flags.clear_error();
    }
}

#[derive(Clone, Copy)]
pub struct StoriesStore {
    state: RwSignal<StoriesState>,
}

impl Default for StoriesStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StoriesStore {
    #[must_use]
    pub fn new() -> Self {
        Self { state: RwSignal::new(StoriesState::default()) }
    }

    #[must_use]
    pub fn state(self) -> RwSignal<StoriesState> {
        self.state
    }

    pub fn ensure_loaded(self) {
        let flags = self.state.with_untracked(|s| s.flags.clone());
        if !flags.has_loaded && !flags.loading {
            self.fetch_all();
        }
    }

    pub fn fetch_all(self) {
        let Some(ticket) = self.state.try_update(StoriesState::begin) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            leptos::task::spawn_local(async move {
                let stories = crate::net::api::get_stories().await;
                state.try_update(|s| s.apply(ticket, Ok(stories)));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ticket;
        }
    }

    pub fn retry(self) {
        self.state.update(StoriesState::reset_error);
        self.fetch_all();
    }

    /// Make story `id` current, falling back to a direct lookup when it is
    /// not in the cache.
    pub fn set_current(self, id: String) {
        let cached = self.state.try_update(|s| s.select_cached(&id)).unwrap_or(false);
        if cached {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            leptos::task::spawn_local(async move {
                match crate::net::api::get_story_by_id(&id).await {
                    Ok(story) => {
                        state.try_update(|s| s.current = Some(story));
                    }
                    Err(e) => log::warn!("{e}"),
                }
            });
        }
    }
}
