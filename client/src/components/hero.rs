//! Hero section with the pitch, call-to-action links and count-up stats.

use leptos::prelude::*;

use crate::util::counter::{CounterSpec, HERO_COUNTERS};

#[cfg(feature = "hydrate")]
const FRAME_MS: u32 = 16;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero" aria-labelledby="hero-title">
            <div class="hero__copy">
                <h1 id="hero-title" class="hero__title">
                    "Tu próxima "<span class="hero__accent">"Propiedad"</span>" empieza aquí"
                </h1>
                <p class="hero__lead">
                    "Asesoro personalmente a compradores e inversores de Latinoamérica y España que quieren proteger su patrimonio comprando en el sur de la Florida o en España."
                </p>
                <div class="hero__actions">
                    <a class="button button--primary" href="#destinos">"Quiero comprar en Miami"</a>
                    <a class="button button--outline" href="#destinos">"Quiero comprar en España"</a>
                </div>
                <ul class="hero__stats">
                    {HERO_COUNTERS.iter().map(|spec| view! { <AnimatedCounter spec=*spec/> }).collect_view()}
                </ul>
            </div>
            <div class="hero__media">
                <video class="hero__video" src="/assets/videos/hero.mp4" controls=true autoplay=true muted=true playsinline=true>
                    "Tu navegador no soporta el elemento de video."
                </video>
            </div>
        </section>
    }
}

/// One statistic counting up from zero once mounted.
#[component]
fn AnimatedCounter(spec: CounterSpec) -> impl IntoView {
    let value = RwSignal::new(0_u32);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let started = js_sys::Date::now();
            loop {
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let elapsed = js_sys::Date::now() - started;
                value.set(spec.value_at(elapsed));
                if spec.is_done(elapsed) {
                    break;
                }
                gloo_timers::future::TimeoutFuture::new(FRAME_MS).await;
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <li class="hero__stat">
            <span class="hero__stat-value">{move || format!("{}{}", value.get(), spec.suffix)}</span>
            <span class="hero__stat-label">{spec.label}</span>
        </li>
    }
}
