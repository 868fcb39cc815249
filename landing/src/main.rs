// Kamora landing page, Leptos 0.8 CSR.

mod components;
mod layout;
mod scroll;
mod sections;
mod timers;

use kamora::{SiteConfig, SiteContent};
use leptos::prelude::*;

use layout::{Footer, Header};
use sections::*;

/// Report a recoverable problem on the browser console.
pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let content = match SiteContent::builtin() {
        Ok(content) => content,
        Err(err) => {
            warn(&format!("site content: {err}"));
            return view! { <p class="p-8 text-gray-600">"This page is temporarily unavailable."</p> }
                .into_any();
        }
    };
    let config = SiteConfig::default();
    let SiteContent {
        brand,
        hero,
        features,
        about,
        testimonials,
        pricing,
        contact,
    } = content;

    view! {
        <Header brand=brand.name.clone() scroll_threshold=config.header.scroll_threshold_px />
        <main>
            <Hero content=hero />
            <Features features=features />
            <About content=about brand=brand.clone() />
            <Testimonials testimonials=testimonials config=config.carousel />
            <Pricing content=pricing />
            <Contact info=contact config=config.contact />
        </main>
        <Footer brand=brand />
    }
    .into_any()
}
