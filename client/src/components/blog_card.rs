//! Campaign summary card linking to the campaign page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Campaign;
use crate::util::campaign_view::{CARD_PLACEHOLDER_IMAGE, card_alt, card_image};

/// Client route for one campaign.
#[must_use]
pub fn campaign_href(campaign_id: &str) -> String {
    format!("/campaign/{}", urlencoding::encode(campaign_id))
}

#[component]
pub fn BlogCard(campaign: Campaign) -> impl IntoView {
    let image = card_image(&campaign).to_owned();
    let alt = card_alt(&campaign).to_owned();
    let headline = campaign.headline().to_owned();
    let image_failed = RwSignal::new(false);

    view! {
        <article class="blog-card">
            <A href=campaign_href(&campaign.id) attr:class="blog-card__link">
                <div class="blog-card__image">
                    <img
                        src=move || if image_failed.get() { CARD_PLACEHOLDER_IMAGE.to_owned() } else { image.clone() }
                        alt=alt
                        loading="lazy"
                        on:error=move |_| image_failed.set(true)
                    />
                </div>
                <div class="blog-card__body">
                    <h4 class="blog-card__title">{headline}</h4>
                </div>
            </A>
        </article>
    }
}
