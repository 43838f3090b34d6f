//! Featured properties grid.

use leptos::prelude::*;

struct Property {
    image: &'static str,
    location: &'static str,
    title: &'static str,
}

const FEATURED: [Property; 4] = [
    Property { image: "/assets/images/property-1.jpg", location: "Brickell, Miami", title: "Condominio frente a la bahía" },
    Property { image: "/assets/images/property-2.jpg", location: "Doral, Miami", title: "Casa familiar con piscina" },
    Property { image: "/assets/images/property-3.jpg", location: "Marbella, Málaga", title: "Villa en la Costa del Sol" },
    Property { image: "/assets/images/property-4.jpg", location: "Madrid", title: "Piso reformado en Salamanca" },
];

#[component]
pub fn Properties() -> impl IntoView {
    view! {
        <section id="propiedades" class="properties" aria-labelledby="properties-title">
            <header class="properties__header">
                <h2 id="properties-title">"Propiedades destacadas"</h2>
                <p>"Cada inmueble tiene su historia. Estas son algunas de las favoritas de nuestros clientes."</p>
            </header>
            <div class="properties__grid">
                {FEATURED
                    .iter()
                    .map(|p| {
                        view! {
                            <article class="property-card">
                                <img src=p.image alt=p.title loading="lazy"/>
                                <div class="property-card__body">
                                    <span class="property-card__location">{p.location}</span>
                                    <h3 class="property-card__title">{p.title}</h3>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
