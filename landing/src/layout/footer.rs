use kamora::Section;
use kamora::content::Brand;
use leptos::prelude::*;

use crate::scroll::scroll_to;

#[component]
pub fn Footer(brand: Brand) -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="bg-gray-900 text-gray-400 py-12">
            <div class="container mx-auto px-6">
                <div class="flex flex-col md:flex-row justify-between items-center gap-6">
                    <div class="text-center md:text-left">
                        <div class="text-2xl font-bold text-white">{brand.name.clone()}</div>
                        <p class="text-sm mt-1">{brand.tagline}</p>
                    </div>
                    <ul class="flex flex-wrap justify-center gap-6">
                        {Section::ALL
                            .into_iter()
                            .map(|section| view! {
                                <li>
                                    <a
                                        href=section.href()
                                        class="hover:text-white transition-colors duration-200"
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            scroll_to(section);
                                        }
                                    >
                                        {section.label()}
                                    </a>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="border-t border-gray-800 mt-8 pt-8 text-center text-sm">
                    {format!("© {}-{year} {}. All rights reserved.", brand.founded, brand.name)}
                </div>
            </div>
        </footer>
    }
}
