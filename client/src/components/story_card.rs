//! One testimonial card inside the stories carousel.

use leptos::prelude::*;

use crate::net::types::{Story, StoryMedia};
use crate::util::youtube;

/// Features for the video tab; the opened page gets no handle back.
#[cfg(feature = "hydrate")]
const VIDEO_WINDOW_FEATURES: &str = "noopener,noreferrer";

#[component]
pub fn StoryCard(
    story: Story,
    /// True right after a drag, so the release does not count as a click.
    #[prop(into)]
    suppress_click: Signal<bool>,
) -> impl IntoView {
    let Story { name, position_job, media, video_link, .. } = story;

    let poster = video_link.as_deref().and_then(youtube::thumbnail_url);
    let media_view = match media {
        StoryMedia::Video(src) => view! {
            <video class="story-card__media" src=src muted=true autoplay=true loop=true playsinline=true></video>
        }
        .into_any(),
        StoryMedia::Image(src) => view! {
            <img class="story-card__media" src=src alt=name.clone() loading="lazy" draggable="false"/>
        }
        .into_any(),
        StoryMedia::Placeholder => match poster {
            Some(src) => view! {
                <img class="story-card__media" src=src alt=name.clone() loading="lazy" draggable="false"/>
            }
            .into_any(),
            None => view! { <div class="story-card__media story-card__media--placeholder" aria-hidden="true"></div> }
                .into_any(),
        },
    };

    let play = video_link.map(|link| {
        let label = format!("Ver la historia de {name}");
        let on_play = move |_| {
            if suppress_click.get_untracked() {
                return;
            }
            open_video(&link);
        };
        view! {
            <button class="story-card__play" type="button" aria-label=label on:click=on_play>
                <span aria-hidden="true">"▶"</span>
            </button>
        }
    });

    view! {
        <article class="story-card">
            {media_view}
            <div class="story-card__overlay">
                {play}
                <div class="story-card__plate">
                    <h3 class="story-card__name">{name.clone()}</h3>
                    {position_job.map(|job| view! { <p class="story-card__job">{job}</p> })}
                </div>
            </div>
        </article>
    }
}

fn open_video(link: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.open_with_url_and_target_and_features(link, "_blank", VIDEO_WINDOW_FEATURES) {
            log::warn!("video window failed to open: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = link;
}
