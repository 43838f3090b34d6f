//! Miami and Spain destination panels.

use leptos::prelude::*;

struct Destination {
    id: &'static str,
    name: &'static str,
    tagline: &'static str,
    body: &'static str,
    image: &'static str,
}

const PROJECTS_URL: &str = "https://www.compracondoespana.com/project/blog";

const DESTINATIONS: [Destination; 2] = [
    Destination {
        id: "miami",
        name: "Miami",
        tagline: "Acceso directo al mercado inmobiliario más dinámico de EE.UU.",
        body: "Ya sea que busques una residencia personal, una segunda vivienda o un activo para generar ingresos pasivos, Miami ofrece propiedades con alto potencial de revalorización y una demanda constante tanto en el sector de lujo como en el mercado de inversión.",
        image: "/assets/images/miami.jpg",
    },
    Destination {
        id: "espana",
        name: "España",
        tagline: "Estilo de vida, inversión segura y oportunidades únicas en el corazón de Europa.",
        body: "El mercado inmobiliario español sigue ofreciendo oportunidades con alta proyección de revalorización, especialmente en zonas como Madrid, la Costa Blanca o la Costa del Sol, donde la demanda tanto nacional como extranjera se mantiene sólida.",
        image: "/assets/images/espana.jpg",
    },
];

#[component]
pub fn Destinations() -> impl IntoView {
    view! {
        <section id="destinos" class="destinations" aria-labelledby="destinations-title">
            <header class="destinations__header">
                <h2 id="destinations-title">"¿Dónde quieres comprar?"</h2>
                <p>
                    "Ya sea en el vibrante sur de Florida o bajo el sol del Mediterráneo, estoy listo para ayudarte a tomar la mejor decisión inmobiliaria."
                </p>
            </header>
            <div class="destinations__grid">
                {DESTINATIONS
                    .iter()
                    .map(|d| {
                        view! {
                            <article id=d.id class="destination-card">
                                <img src=d.image alt=d.name loading="lazy"/>
                                <div class="destination-card__body">
                                    <h3>{d.name}</h3>
                                    <p class="destination-card__tagline">{d.tagline}</p>
                                    <p>{d.body}</p>
                                    <a class="button button--primary" href=PROJECTS_URL target="_blank" rel="noopener noreferrer">
                                        "Ver Proyectos"
                                    </a>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
