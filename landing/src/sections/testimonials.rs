//! Testimonial carousel.
//!
//! The index, auto-play flag and timer live in [`CarouselController`]; this
//! component mirrors its state into a signal and forwards clicks, dots and
//! swipes to it. The controller is dropped with the component, which cancels
//! the auto-advance timer.

use std::rc::Rc;

use kamora::config::CarouselConfig;
use kamora::content::Testimonial;
use kamora::{CarouselController, Section, Swipe, Timers};
use leptos::prelude::*;

use crate::components::Icon;
use crate::components::icons::{ICON_CARET_LEFT, ICON_CARET_RIGHT, ICON_QUOTE, ICON_STAR};
use crate::timers::LeptosTimers;

fn stars(rating: u8, class: &'static str) -> impl IntoView {
    (0..rating)
        .map(|_| view! { <Icon path=ICON_STAR class=class /> })
        .collect_view()
}

/// Start of an in-progress drag: pointer x and timestamp (ms).
#[derive(Debug, Clone, Copy)]
struct Drag {
    start_x: f64,
    start_ms: f64,
}

#[component]
pub fn Testimonials(testimonials: Vec<Testimonial>, config: CarouselConfig) -> impl IntoView {
    let timers: Rc<dyn Timers> = Rc::new(LeptosTimers);
    let controller = match CarouselController::new(testimonials.len(), config.interval(), timers) {
        Ok(controller) => controller,
        Err(err) => {
            crate::warn(&format!("testimonials disabled: {err}"));
            return ().into_any();
        }
    };

    let state = RwSignal::new(controller.state());
    controller.on_change(move |next| state.set(*next));
    let controller = StoredValue::new_local(controller);
    on_cleanup(move || {
        let _ = controller.try_with_value(|carousel| carousel.stop());
    });

    let highlights: Vec<Testimonial> = testimonials.iter().take(3).cloned().collect();
    let count = testimonials.len();
    let slides = StoredValue::new(testimonials);

    let drag = RwSignal::new(None::<Drag>);
    let drag_offset = RwSignal::new(0.0_f64);
    let threshold = config.swipe_confidence;

    let on_press = move |ev: web_sys::PointerEvent| {
        drag.set(Some(Drag {
            start_x: f64::from(ev.client_x()),
            start_ms: js_sys::Date::now(),
        }));
    };
    let on_move = move |ev: web_sys::PointerEvent| {
        if let Some(start) = drag.get_untracked() {
            drag_offset.set(f64::from(ev.client_x()) - start.start_x);
        }
    };
    let on_release = move |ev: web_sys::PointerEvent| {
        let Some(start) = drag.get_untracked() else {
            return;
        };
        drag.set(None);
        drag_offset.set(0.0);

        let offset = f64::from(ev.client_x()) - start.start_x;
        let elapsed_ms = (js_sys::Date::now() - start.start_ms).max(1.0);
        let velocity = offset / elapsed_ms * 1000.0;
        if let Some(swipe) = Swipe::classify(offset, velocity, threshold) {
            controller.with_value(|carousel| carousel.swipe(swipe));
        }
    };
    let on_cancel = move |_: web_sys::PointerEvent| {
        drag.set(None);
        drag_offset.set(0.0);
    };

    let slide = move || {
        let current = state.get();
        let testimonial = slides.with_value(|all| all[current.current_index()].clone());
        view! {
            <div
                class="bg-white rounded-2xl shadow-xl p-8 md:p-12 select-none touch-pan-y transition-transform duration-300"
                data-direction=current.direction().sign().to_string()
                style:transform=move || format!("translateX({}px)", drag_offset.get())
            >
                <div class="flex flex-col md:flex-row items-center md:items-start gap-8">
                    <div class="flex-shrink-0">
                        <div class="w-20 h-20 bg-gradient-to-br from-primary to-secondary rounded-full flex items-center justify-center text-white text-2xl font-bold">
                            {testimonial.avatar.clone()}
                        </div>
                    </div>
                    <div class="flex-grow text-center md:text-left">
                        <Icon path=ICON_QUOTE size="32" class="text-primary mb-4 mx-auto md:mx-0" />
                        <p class="text-lg text-gray-700 mb-6 leading-relaxed">{testimonial.content.clone()}</p>
                        <div class="flex justify-center md:justify-start mb-4">
                            {stars(testimonial.rating, "text-yellow-400")}
                        </div>
                        <div>
                            <h4 class="text-xl font-semibold text-gray-900">{testimonial.name.clone()}</h4>
                            <p class="text-gray-600">
                                {format!("{} at {}", testimonial.position, testimonial.company)}
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        }
    };

    view! {
        <section id=Section::Testimonials.anchor() class="py-20 bg-gray-50">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">"What Our Clients Say"</h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "Don't just take our word for it. Hear from the amazing clients we've had the privilege to work with."
                    </p>
                </div>

                <div class="max-w-4xl mx-auto">
                    <div
                        class="relative"
                        on:pointerdown=on_press
                        on:pointermove=on_move
                        on:pointerup=on_release
                        on:pointercancel=on_cancel
                        on:pointerleave=on_cancel
                    >
                        {slide}

                        <button
                            class="absolute left-4 top-1/2 transform -translate-y-1/2 bg-white rounded-full p-3 shadow-lg hover:shadow-xl transition-shadow duration-200 z-10"
                            aria-label="Previous testimonial"
                            on:pointerdown=|ev| ev.stop_propagation()
                            on:click=move |_| controller.with_value(|carousel| carousel.previous())
                        >
                            <Icon path=ICON_CARET_LEFT class="text-gray-700" />
                        </button>
                        <button
                            class="absolute right-4 top-1/2 transform -translate-y-1/2 bg-white rounded-full p-3 shadow-lg hover:shadow-xl transition-shadow duration-200 z-10"
                            aria-label="Next testimonial"
                            on:pointerdown=|ev| ev.stop_propagation()
                            on:click=move |_| controller.with_value(|carousel| carousel.next())
                        >
                            <Icon path=ICON_CARET_RIGHT class="text-gray-700" />
                        </button>
                    </div>

                    <div class="flex justify-center mt-8 space-x-2">
                        {(0..count)
                            .map(|index| view! {
                                <button
                                    class=move || {
                                        if state.get().current_index() == index {
                                            "h-3 rounded-full transition-all duration-200 bg-primary w-8"
                                        } else {
                                            "h-3 w-3 rounded-full transition-all duration-200 bg-gray-300 hover:bg-gray-400"
                                        }
                                    }
                                    aria-label=format!("Go to testimonial {}", index + 1)
                                    on:click=move |_| {
                                        if let Err(err) = controller.with_value(|carousel| carousel.go_to(index)) {
                                            crate::warn(&err.to_string());
                                        }
                                    }
                                ></button>
                            })
                            .collect_view()}
                    </div>

                    <div class="flex justify-center mt-6">
                        <button
                            class="text-gray-600 hover:text-primary transition-colors duration-200"
                            on:click=move |_| controller.with_value(|carousel| carousel.toggle_auto_play())
                        >
                            {move || if state.get().is_auto_playing() { "Pause Auto-slide" } else { "Play Auto-slide" }}
                        </button>
                    </div>
                </div>

                <div class="mt-20 grid grid-cols-1 md:grid-cols-3 gap-6">
                    {highlights
                        .into_iter()
                        .map(|testimonial| view! {
                            <div class="bg-white rounded-lg p-6 shadow-lg hover:-translate-y-1 transition-transform duration-300">
                                <div class="flex items-center mb-4">
                                    <div class="w-12 h-12 bg-gradient-to-br from-primary to-secondary rounded-full flex items-center justify-center text-white font-bold mr-3">
                                        {testimonial.avatar}
                                    </div>
                                    <div>
                                        <h4 class="font-semibold text-gray-900">{testimonial.name}</h4>
                                        <p class="text-sm text-gray-600">{testimonial.company}</p>
                                    </div>
                                </div>
                                <div class="flex mb-3">{stars(testimonial.rating, "text-yellow-400 text-sm")}</div>
                                <p class="text-gray-700 text-sm line-clamp-3">{testimonial.content}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
    .into_any()
}
