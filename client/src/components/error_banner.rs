//! Dismissible error banner with a retry action.

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<String>,
    on_retry: Callback<()>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            <p class="error-banner__message">{move || message.get()}</p>
            <div class="error-banner__actions">
                <button class="error-banner__retry" type="button" on:click=move |_| on_retry.run(())>
                    "Reintentar"
                </button>
                <button
                    class="error-banner__dismiss"
                    type="button"
                    aria-label="Cerrar aviso"
                    on:click=move |_| on_dismiss.run(())
                >
                    "×"
                </button>
            </div>
        </div>
    }
}
