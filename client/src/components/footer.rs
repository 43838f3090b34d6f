//! Site footer.

use leptos::prelude::*;

use crate::components::social_links::SocialLinks;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer" aria-label="Información de contacto y enlaces del sitio">
            <div class="footer__brand">
                <img src="/assets/images/logo.png" alt="Rubén Alfonso Real Estate Group - Logo principal" loading="lazy"/>
            </div>
            <nav class="footer__nav" aria-label="Enlaces de navegación del footer">
                <a href="#sobre-mi">"Sobre mí"</a>
                <a href="#propiedades">"Propiedades"</a>
                <a href="#destinos">"Destinos"</a>
                <a href="#blog">"Blog"</a>
            </nav>
            <div class="footer__contact">
                <a href="tel:+17862282670">"+1 (786) 228-2670"</a>
                <a href="mailto:raftonsa@compracondomiami.com">"raftonsa@compracondomiami.com"</a>
            </div>
            <SocialLinks class="footer__social"/>
            <p class="footer__legal">"© Rubén Alfonso Real Estate Group. Todos los derechos reservados."</p>
        </footer>
    }
}
