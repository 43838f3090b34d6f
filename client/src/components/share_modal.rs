//! Share dialog for a campaign.
//!
//! Link building lives in `util::share`; this component performs the browser
//! side effects (clipboard write, `window.open`) and raises the copy toast.

use leptos::prelude::*;

use crate::components::toast::show_toast;
use crate::state::toast::ToastState;
use crate::util::share::{SHARE_TARGETS, ShareAction, ShareTarget};

#[component]
pub fn ShareModal(
    open: RwSignal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] url: Signal<String>,
) -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();
    let close = move || open.set(false);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && open.get_untracked() {
                open.set(false);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_select = move |target: ShareTarget| {
        let title = title.get_untracked();
        let url = url.get_untracked();
        match target.action(&title, &url) {
            ShareAction::Copy { text, toast: message, kind, toast_ms } => {
                copy_to_clipboard(&text);
                show_toast(toast, message, kind, toast_ms);
            }
            ShareAction::Open { link, features } => open_link(&link, features),
        }
        close();
    };

    view! {
        <Show when=move || open.get()>
            <div class="share-modal__backdrop" on:click=move |_| close()>
                <div
                    class="share-modal"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="share-modal-title"
                    on:click=|ev| ev.stop_propagation()
                >
                    <header class="share-modal__header">
                        <h2 id="share-modal-title">"Compartir"</h2>
                        <button class="share-modal__close" type="button" aria-label="Cerrar" on:click=move |_| close()>
                            "×"
                        </button>
                    </header>
                    <p class="share-modal__title">{move || title.get()}</p>
                    <ul class="share-modal__options">
                        {SHARE_TARGETS
                            .iter()
                            .map(|&target| {
                                view! {
                                    <li>
                                        <button
                                            class=format!("share-option {}", target.css_modifier())
                                            type="button"
                                            on:click=move |_| on_select(target)
                                        >
                                            {target.label()}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </Show>
    }
}

fn copy_to_clipboard(text: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let promise = window.navigator().clipboard().write_text(text);
        leptos::task::spawn_local(async move {
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                log::warn!("clipboard write failed: {e:?}");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = text;
}

fn open_link(link: &str, features: Option<&str>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let opened = match features {
            Some(features) => window.open_with_url_and_target_and_features(link, "_blank", features),
            None => window.open_with_url_and_target(link, "_blank"),
        };
        if let Err(e) = opened {
            log::warn!("share window failed to open: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (link, features);
}
