//! Transient notification rendered once at the app root.
//!
//! Any component raises a toast through [`show_toast`]; the hide timer is
//! tied to the toast's sequence number so a newer toast is never cut short.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Show `message` and arm its auto-hide timer.
pub fn show_toast(toast: RwSignal<ToastState>, message: &str, kind: ToastKind, duration_ms: u32) {
    let Some(seq) = toast.try_update(|t| t.show(message, kind, duration_ms)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(duration_ms).await;
        toast.try_update(|t| t.expire(seq));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = seq;
}

#[component]
pub fn Toast() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    view! {
        <Show when=move || toast.with(|t| t.visible)>
            <div
                class=move || format!("toast {}", toast.with(|t| t.kind.css_modifier()))
                role="status"
                aria-live="polite"
            >
                <span class="toast__message">{move || toast.with(|t| t.message.clone())}</span>
                <button
                    class="toast__close"
                    type="button"
                    aria-label="Cerrar notificación"
                    on:click=move |_| toast.update(ToastState::hide)
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
