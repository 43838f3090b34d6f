//! Campaign page: one newsletter rendered as a blog post.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route `/campaign/:campaignId`. On every id change the page asks the
//! `CampaignStore` to make that campaign current, which loads its body and
//! report. Leaving the page cancels whatever is still in flight so a late
//! response cannot overwrite the next page's state.
//!
//! ISOLATION
//! =========
//! The newsletter HTML is third-party markup. It is rendered through
//! `<iframe srcdoc>` with a sandbox that grants neither scripts nor same
//! origin, so its styles and scripts never reach the host document.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

use crate::components::error_banner::ErrorBanner;
use crate::components::share_modal::ShareModal;
use crate::net::types::Campaign;
use crate::state::campaigns::{CampaignStore, CampaignsState};
use crate::util::campaign_view::{
    CONTENT_UNAVAILABLE, CampaignBody, campaign_body, format_send_date, gallery_images, hero_image,
};

const IFRAME_SANDBOX: &str = "allow-popups allow-popups-to-escape-sandbox";

#[component]
pub fn CampaignPage() -> impl IntoView {
    let store = expect_context::<CampaignStore>();
    let state = store.state();
    let params = use_params_map();
    let navigate = use_navigate();

    let campaign_id = Memo::new(move |_| params.with(|p| p.get("campaignId")).unwrap_or_default());

    Effect::new(move || {
        let id = campaign_id.get();
        if id.is_empty() {
            return;
        }
        store.set_current(id);
        #[cfg(feature = "hydrate")]
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });
    on_cleanup(move || store.cancel_detail());

    let share_open = RwSignal::new(false);
    let share_url = RwSignal::new(String::new());
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let _ = campaign_id.get();
        if let Some(href) = web_sys::window().and_then(|w| w.location().href().ok()) {
            share_url.set(href);
        }
    });

    let current = Memo::new(move |_| {
        let id = campaign_id.get();
        state.with(|s| s.current.clone().filter(|c| c.id == id))
    });
    let share_title = Signal::derive(move || current.with(|c| c.as_ref().map(|c| c.headline().to_owned())).unwrap_or_default());
    let content_error = Signal::derive(move || state.with(|s| s.content_flags.error.clone().unwrap_or_default()));

    let go_home = move |_| navigate("/", NavigateOptions::default());

    view! {
        <div class="campaign-page">
            <header class="campaign-page__bar">
                <button class="campaign-page__back" type="button" on:click=go_home>
                    "← Volver"
                </button>
                <button
                    class="campaign-page__share"
                    type="button"
                    disabled=move || current.with(Option::is_none)
                    on:click=move |_| share_open.set(true)
                >
                    "Compartir"
                </button>
            </header>

            <Show when=move || state.with(|s| s.content_flags.error.is_some())>
                <ErrorBanner
                    message=content_error
                    on_retry=Callback::new(move |()| store.retry_current(campaign_id.get_untracked()))
                    on_dismiss=Callback::new(move |()| state.update(CampaignsState::reset_errors))
                />
            </Show>

            <Show
                when=move || current.with(Option::is_some)
                fallback=move || {
                    view! {
                        <Show when=move || state.with(|s| s.content_flags.error.is_none())>
                            <div class="campaign-page__loading" role="status">
                                <span class="spinner" aria-hidden="true"></span>
                                <p>"Cargando campaña..."</p>
                            </div>
                        </Show>
                    }
                }
            >
                {move || current.get().map(|campaign| view! { <CampaignArticle campaign/> })}
            </Show>

            <ShareModal open=share_open title=share_title url=share_url/>
        </div>
    }
}

#[component]
fn CampaignArticle(campaign: Campaign) -> impl IntoView {
    let state = expect_context::<CampaignStore>().state();

    let headline = campaign.headline().to_owned();
    let sent = campaign.send_time.as_deref().and_then(format_send_date);
    let hero = hero_image(&campaign).cloned();
    let gallery = gallery_images(&campaign).to_vec();
    let preview = (!campaign.preview.is_empty()).then(|| campaign.preview.clone());
    let author = campaign.from_name.clone();

    let body = move || {
        let loading = state.with(|s| s.content_flags.loading);
        let content = state.with(|s| s.content.clone());
        if loading && content.is_none() {
            return view! { <p class="campaign-page__body-loading">"Cargando contenido..."</p> }.into_any();
        }
        match campaign_body(Some(&campaign), content.as_ref()) {
            CampaignBody::Html(html) => view! {
                <iframe
                    {..::leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                    class="campaign-page__frame"
                    title="Contenido de la campaña"
                    sandbox=IFRAME_SANDBOX
                    srcdoc={html}
                ></iframe>
            }
            .into_any(),
            CampaignBody::Paragraphs(paragraphs) => view! {
                <div class="campaign-page__text">
                    {paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
                </div>
            }
            .into_any(),
            CampaignBody::Unavailable => view! { <p class="campaign-page__unavailable">{CONTENT_UNAVAILABLE}</p> }.into_any(),
        }
    };

    let stats_line = move || {
        state.with(|s| s.stats).filter(|stats| stats.emails_sent > 0).map(|stats| {
            view! {
                <p class="campaign-page__stats">
                    {format!(
                        "Enviado a {} suscriptores · {:.1}% de apertura · {:.1}% de clics",
                        stats.emails_sent,
                        stats.open_rate * 100.0,
                        stats.click_rate * 100.0,
                    )}
                </p>
            }
        })
    };

    view! {
        <article class="campaign-page__article">
            <header class="campaign-page__header">
                <h1 class="campaign-page__title">{headline.clone()}</h1>
                <div class="campaign-page__meta">
                    <img class="campaign-page__avatar" src="/assets/images/ruben-photo.png" alt=author.clone()/>
                    <span class="campaign-page__author">{author.clone()}</span>
                    {sent.map(|date| view! { <time class="campaign-page__date">{date}</time> })}
                </div>
                {stats_line}
            </header>

            {hero.map(|img| {
                let alt = if img.alt.is_empty() { headline.clone() } else { img.alt };
                view! { <img class="campaign-page__hero" src=img.url alt=alt/> }
            })}

            {preview.map(|text| view! { <p class="campaign-page__preview">{text}</p> })}

            <div class="campaign-page__body">{body}</div>

            {(!gallery.is_empty()).then(|| {
                view! {
                    <div class="campaign-page__gallery">
                        {gallery
                            .into_iter()
                            .map(|img| view! { <img src=img.url alt=img.alt loading="lazy"/> })
                            .collect_view()}
                    </div>
                }
            })}
        </article>
    }
}
