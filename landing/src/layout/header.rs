use kamora::Section;
use leptos::ev;
use leptos::prelude::*;

use crate::components::Icon;
use crate::components::icons::{ICON_LIST, ICON_X};
use crate::scroll::scroll_to;

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

#[component]
pub fn Header(#[prop(into)] brand: String, scroll_threshold: f64) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(scroll_y() > scroll_threshold);

    let listener = window_event_listener(ev::scroll, move |_| {
        set_scrolled.set(scroll_y() > scroll_threshold);
    });
    on_cleanup(move || listener.remove());

    let link_tone = move || if scrolled.get() { "text-gray-800" } else { "text-white" };

    let nav_link = move |section: Section, extra: &'static str| {
        view! {
            <a
                href=section.href()
                class=move || format!("{extra} hover:text-primary transition-colors duration-200 {}", link_tone())
                on:click=move |ev| {
                    ev.prevent_default();
                    scroll_to(section);
                    set_menu_open.set(false);
                }
            >
                {section.label()}
            </a>
        }
    };

    view! {
        <header class=move || {
            if scrolled.get() {
                "fixed top-0 w-full z-50 transition-all duration-300 bg-white shadow-lg"
            } else {
                "fixed top-0 w-full z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <nav class="container mx-auto px-6 py-4">
                <div class="flex justify-between items-center">
                    <a
                        href=Section::Home.href()
                        class="text-2xl font-bold text-primary"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to(Section::Home);
                        }
                    >
                        {brand}
                    </a>

                    <ul class="hidden md:flex space-x-8">
                        {Section::ALL
                            .into_iter()
                            .map(|section| view! { <li>{nav_link(section, "")}</li> })
                            .collect_view()}
                    </ul>

                    <button
                        class=move || format!("md:hidden {}", link_tone())
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() {
                            view! { <Icon path=ICON_X size="24" /> }
                        } else {
                            view! { <Icon path=ICON_LIST size="24" /> }
                        }}
                    </button>
                </div>

                <Show when=move || menu_open.get()>
                    <div class="md:hidden mt-4 pb-4">
                        <ul class="space-y-4">
                            {Section::ALL
                                .into_iter()
                                .map(|section| view! { <li>{nav_link(section, "block")}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                </Show>
            </nav>
        </header>
    }
}
