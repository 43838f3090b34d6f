//! Top navigation bar with the logo, social links and a mobile menu.

use leptos::prelude::*;

use crate::components::social_links::SocialLinks;

#[component]
pub fn Navbar() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <header role="banner" class="navbar">
            <nav class="navbar__inner" aria-label="Navegación principal">
                <a href="/" class="navbar__logo" aria-label="Ir a página principal - Rubén Alfonso Real Estate Miami">
                    <img
                        src="/assets/images/logo.png"
                        alt="Rubén Alfonso - Agente inmobiliario especializado en propiedades de Miami y España"
                    />
                </a>

                <button
                    class="navbar__toggle"
                    class:navbar__toggle--open=move || menu_open.get()
                    type="button"
                    aria-controls="mobile-menu"
                    aria-expanded=move || menu_open.get().to_string()
                    aria-label=move || {
                        if menu_open.get() { "Cerrar menú de navegación" } else { "Abrir menú de navegación" }
                    }
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <SocialLinks class="navbar__social"/>
            </nav>

            <Show when=move || menu_open.get()>
                <div id="mobile-menu" class="navbar__mobile" on:click=move |_| menu_open.set(false)>
                    <a href="#destinos">"Destinos"</a>
                    <a href="#historias">"Historias"</a>
                    <a href="#blog">"Blog"</a>
                    <a href="#contacto">"Contacto"</a>
                    <SocialLinks class="navbar__social--mobile"/>
                </div>
            </Show>
        </header>
    }
}
