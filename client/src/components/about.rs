//! "Sobre mí" section.

use leptos::prelude::*;

const CREDENTIALS: [&str; 4] = [
    "Licenciado en Derecho – USM (Venezuela)",
    "Agente certificado en Florida desde 2004",
    "Especialista en fondos EB5, preconstrucción y subastas",
    "Alianza estratégica con el equipo hispano más grande de Florida",
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="sobre-mi" class="about" aria-labelledby="about-title">
            <div class="about__media">
                <img src="/assets/images/ruben-alfonso.jpg" alt="Rubén Alfonso, asesor inmobiliario" loading="lazy"/>
            </div>
            <div class="about__copy">
                <h2 id="about-title" class="about__title">"Sobre mí"</h2>
                <p>
                    "Soy Rubén Alfonso, abogado de formación y asesor inmobiliario con más de 20 años de experiencia. He ayudado a cientos de familias e inversores a encontrar propiedades seguras, con alto potencial y sin dolores de cabeza legales."
                </p>
                <p>"Mi equipo y yo te guiamos paso a paso en el proceso de compra, ya sea en Miami o en España."</p>
                <p>"Trabajamos con compradores exigentes que buscan profesionalismo, estrategia y resultados."</p>
                <ul class="about__credentials">
                    {CREDENTIALS.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                </ul>
            </div>
        </section>
    }
}
