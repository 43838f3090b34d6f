//! Blog section: the campaign archive with local "load more" pagination.
//!
//! The whole sent archive is fetched once; pages are revealed from the
//! cached list without further requests.

use leptos::prelude::*;

use crate::components::blog_card::BlogCard;
use crate::components::error_banner::ErrorBanner;
use crate::state::campaigns::{CampaignStore, CampaignsState};
use crate::util::pagination::{BLOG_PAGE_SIZE, PageWindow};

/// Full blog on the agency site.
pub const FULL_BLOG_URL: &str = "https://www.compracondoespana.com/project/blog";

#[component]
pub fn Blog() -> impl IntoView {
    let store = expect_context::<CampaignStore>();
    let state = store.state();
    store.ensure_loaded();

    let pages = RwSignal::new(1_usize);
    let page = Memo::new(move |_| {
        let total = state.with(|s| s.campaigns.len());
        PageWindow::new(total, pages.get(), BLOG_PAGE_SIZE)
    });
    let loading = move || state.with(|s| s.campaigns_flags.loading);
    let is_empty = move || state.with(|s| s.campaigns.is_empty());

    let on_load_more = move |_| {
        if !loading() && page.get_untracked().has_more() {
            pages.update(|p| *p += 1);
        }
    };

    let error = Signal::derive(move || state.with(|s| s.campaigns_flags.error.clone().unwrap_or_default()));

    view! {
        <section id="blog" class="blog" aria-labelledby="blog-title">
            <header class="blog__header">
                <h2 id="blog-title" class="blog__title">"Últimas historias"</h2>
                <p class="blog__subtitle">"Todo el valor que no queremos que te pierdas"</p>
            </header>

            <Show when=move || state.with(|s| s.campaigns_flags.error.is_some())>
                <ErrorBanner
                    message=error
                    on_retry=Callback::new(move |()| store.retry())
                    on_dismiss=Callback::new(move |()| state.update(CampaignsState::reset_errors))
                />
            </Show>

            <Show when=move || loading() && is_empty()>
                <div class="blog__loading" role="status">
                    <span class="spinner" aria-hidden="true"></span>
                    <p>"Cargando campañas..."</p>
                </div>
            </Show>

            <Show when=move || !is_empty()>
                <p class="blog__summary">{move || page.get().summary()}</p>
            </Show>

            <div class="blog__grid">
                <For
                    each=move || {
                        let shown = page.get().shown;
                        state.with(|s| s.campaigns.iter().take(shown).cloned().collect::<Vec<_>>())
                    }
                    key=|campaign| campaign.id.clone()
                    children=move |campaign| view! { <BlogCard campaign/> }
                />
            </div>

            <Show when=move || page.get().has_more()>
                <div class="blog__more">
                    <button class="blog__more-button" type="button" disabled=loading on:click=on_load_more>
                        {move || if loading() { "Cargando..." } else { "Cargar más →" }}
                    </button>
                </div>
            </Show>

            <Show when=move || {
                !loading() && is_empty() && state.with(|s| s.campaigns_flags.error.is_none())
            }>
                <p class="blog__empty">"No hay campañas disponibles en este momento."</p>
            </Show>

            <a class="blog__all" href=FULL_BLOG_URL aria-label="Ver todas las campañas del blog">
                "Ver todas"
            </a>
        </section>
    }
}
