//! Buying process steps and direct contact links.

use leptos::prelude::*;

const STEPS: [(&str, &str); 3] = [
    ("Conversemos", "Una llamada para entender tus objetivos, plazos y forma de financiación."),
    ("Opciones a tu medida", "Filtradas por tu perfil, tu presupuesto y el retorno que esperas."),
    ("Cierre acompañado", "Te guiamos en la parte legal, fiscal y migratoria hasta la entrega de llaves."),
];

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contacto" class="contact" aria-labelledby="contact-title">
            <header class="contact__header">
                <h2 id="contact-title">"El Camino Hacia Tu Nueva Propiedad "<span>"Empieza Aquí"</span></h2>
                <p>"Nuestro proceso es simple, transparente y enfocado en resultados."</p>
            </header>
            <ol class="contact__steps">
                {STEPS
                    .iter()
                    .enumerate()
                    .map(|(i, (title, text))| {
                        view! {
                            <li class="contact__step">
                                <span class="contact__step-number">{i + 1}</span>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
            <div class="contact__links">
                <a class="button button--primary" href="https://wa.me/17862282670" target="_blank" rel="noopener noreferrer">
                    "Escríbeme por WhatsApp"
                </a>
                <a class="button button--outline" href="tel:+17862282670">"+1 (786) 228-2670"</a>
                <a class="button button--outline" href="mailto:raftonsa@compracondomiami.com">
                    "raftonsa@compracondomiami.com"
                </a>
            </div>
        </section>
    }
}
