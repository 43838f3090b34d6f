//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::Toast;
use crate::pages::{campaign::CampaignPage, landing::LandingPage};
use crate::state::campaigns::CampaignStore;
use crate::state::stories::StoriesStore;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the stores once and provides them to every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(CampaignStore::new());
    provide_context(StoriesStore::new());
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/realty-site.css"/>
        <Title text="Ruben Alfonso | Bienes raíces en Miami"/>
        <Meta
            name="description"
            content="Asesoría inmobiliaria en Miami: propiedades, destinos y guía para compradores internacionales."
        />

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=(StaticSegment("campaign"), ParamSegment("campaignId")) view=CampaignPage/>
            </Routes>
        </Router>
        <Toast/>
    }
}
