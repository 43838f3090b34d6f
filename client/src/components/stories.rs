//! Testimonials section: the stories carousel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `StoriesStore` from context and drives a `util::carousel::Carousel`
//! from pointer events, the prev/next buttons and window resizes.
//!
//! DESIGN
//! ======
//! The viewport captures the pointer once a press travels past the click
//! slop, so move/up events keep arriving while the pointer is outside it and
//! no window-level drag listeners are needed. A press that stays within the
//! slop is never captured, so its `click` still reaches the card's buttons. The window `resize` listener lives as long as the component.
//! Rendering reads the model only: the strip is translated by
//! `-carousel.offset(card_width)` and gets the snapping class (which carries
//! the CSS transition) while settling.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::story_card::StoryCard;
use crate::state::stories::{StoriesState, StoriesStore};
use crate::util::carousel::{Carousel, CarouselConfig, SnapBehavior};

const INITIAL_VISIBLE_ITEMS: usize = 3;

#[component]
pub fn Stories() -> impl IntoView {
    let store = expect_context::<StoriesStore>();
    let state = store.state();
    store.ensure_loaded();

    let carousel = RwSignal::new(Carousel::new(CarouselConfig {
        len: 0,
        visible_items: INITIAL_VISIBLE_ITEMS,
        snap: SnapBehavior::default(),
    }));
    let card_width = RwSignal::new(0.0_f64);
    let suppress_click = RwSignal::new(false);
    let viewport_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let len = state.with(|s| s.stories.len());
        carousel.update(|c| c.set_len(len));
    });

    #[cfg(feature = "hydrate")]
    {
        let measure = move || {
            let width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64());
            if let Some(width) = width {
                carousel.update(|c| c.set_visible_items(crate::util::carousel::visible_items_for_width(width)));
            }
            if let Some(el) = viewport_ref.get_untracked() {
                let visible = carousel.with_untracked(Carousel::visible_items);
                #[allow(clippy::cast_precision_loss)]
                card_width.set(f64::from(el.client_width()) / visible as f64);
            }
        };
        Effect::new(move || {
            if viewport_ref.get().is_some() {
                measure();
            }
        });
        let handle = window_event_listener(leptos::ev::resize, move |_| measure());
        on_cleanup(move || handle.remove());
    }

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        suppress_click.set(false);
        let width = card_width.get_untracked();
        carousel.update(|c| c.pointer_down(f64::from(ev.client_x()), ev.time_stamp(), width));
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if !carousel.with_untracked(Carousel::is_dragging) {
            return;
        }
        let past_slop = carousel
            .try_update(|c| {
                c.pointer_move(f64::from(ev.client_x()), ev.time_stamp());
                c.is_past_click_slop()
            })
            .unwrap_or(false);
        if past_slop && !suppress_click.get_untracked() {
            suppress_click.set(true);
            #[cfg(feature = "hydrate")]
            if let Some(el) = viewport_ref.get_untracked() {
                let _ = el.set_pointer_capture(ev.pointer_id());
            }
        }
    };

    let on_pointer_up = move |ev: leptos::ev::PointerEvent| {
        let width = card_width.get_untracked();
        carousel.update(|c| {
            let before = c.offset(width);
            if c.pointer_up(ev.time_stamp(), width).is_some() {
                settle_if_still(c, before, width);
            }
        });
    };

    // An uncaptured press that wanders off the viewport would never see its `pointerup`.
    let on_pointer_leave = move |ev: leptos::ev::PointerEvent| {
        if !suppress_click.get_untracked() {
            on_pointer_up(ev);
        }
    };

    let step = move |forward: bool| {
        let width = card_width.get_untracked();
        carousel.update(|c| {
            let before = c.offset(width);
            if forward {
                c.next();
            } else {
                c.prev();
            }
            settle_if_still(c, before, width);
        });
    };

    let strip_style = move || {
        let offset = carousel.with(|c| c.offset(card_width.get()));
        format!("transform: translate3d({}px, 0, 0);", -offset)
    };
    let card_style = move || {
        let visible = carousel.with(Carousel::visible_items);
        format!("flex: 0 0 calc(100% / {visible});")
    };

    let error = Signal::derive(move || state.with(|s| s.flags.error.clone().unwrap_or_default()));

    view! {
        <section id="historias" class="stories" aria-labelledby="stories-title">
            <header class="stories__header">
                <h2 id="stories-title" class="stories__title">"Historias de nuestros clientes"</h2>
                <p class="stories__subtitle">"Familias que ya encontraron su hogar en Miami y España."</p>
            </header>

            <Show when=move || state.with(|s| s.flags.error.is_some())>
                <ErrorBanner
                    message=error
                    on_retry=Callback::new(move |()| store.retry())
                    on_dismiss=Callback::new(move |()| state.update(StoriesState::reset_error))
                />
            </Show>

            <div class="stories__carousel">
                <Show when=move || carousel.with(Carousel::controls_visible)>
                    <button
                        class="stories__control stories__control--prev"
                        type="button"
                        aria-label="Historia anterior"
                        disabled=move || !carousel.with(Carousel::can_go_prev)
                        on:click=move |_| step(false)
                    >
                        "‹"
                    </button>
                </Show>

                <div
                    class="stories__viewport"
                    class:stories__viewport--dragging=move || carousel.with(Carousel::is_dragging)
                    node_ref=viewport_ref
                    on:pointerdown=on_pointer_down
                    on:pointermove=on_pointer_move
                    on:pointerup=on_pointer_up
                    on:pointercancel=on_pointer_up
                    on:pointerleave=on_pointer_leave
                >
                    <div
                        class="stories__strip"
                        class:stories__strip--snapping=move || carousel.with(Carousel::is_snapping)
                        style=strip_style
                        on:transitionend=move |_| carousel.update(Carousel::finish_snap)
                    >
                        <Show
                            when=move || !state.with(|s| s.stories.is_empty())
                            fallback=move || {
                                view! {
                                    <p class="stories__loading">
                                        {move || if state.with(|s| s.flags.loading) { "Cargando historias..." } else { "" }}
                                    </p>
                                }
                            }
                        >
                            <For
                                each=move || state.get().stories
                                key=|story| story.id.clone()
                                children=move |story| {
                                    view! {
                                        <div class="stories__slot" style=card_style>
                                            <StoryCard story suppress_click/>
                                        </div>
                                    }
                                }
                            />
                        </Show>
                    </div>
                </div>

                <Show when=move || carousel.with(Carousel::controls_visible)>
                    <button
                        class="stories__control stories__control--next"
                        type="button"
                        aria-label="Historia siguiente"
                        disabled=move || !carousel.with(Carousel::can_go_next)
                        on:click=move |_| step(true)
                    >
                        "›"
                    </button>
                </Show>
            </div>
        </section>
    }
}

/// A snap that does not move the strip fires no `transitionend`; go idle now.
fn settle_if_still(carousel: &mut Carousel, before: f64, card_width: f64) {
    if (carousel.offset(card_width) - before).abs() < 0.5 {
        carousel.finish_snap();
    }
}
