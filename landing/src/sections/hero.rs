use kamora::Section;
use kamora::content::Hero as HeroContent;
use leptos::prelude::*;

use crate::components::icons::{ICON_ARROW_RIGHT, ICON_ROCKET};
use crate::components::{Button, ButtonSize, ButtonVariant, Icon};
use crate::scroll::scroll_to;

#[component]
pub fn Hero(content: HeroContent) -> impl IntoView {
    let HeroContent {
        badge,
        headline,
        headline_accent,
        subheadline,
        stats,
    } = content;

    view! {
        <section id=Section::Home.anchor() class="relative min-h-screen flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-primary via-primary-dark to-secondary"></div>
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute top-20 left-20 w-72 h-72 bg-white opacity-10 rounded-full blur-3xl"></div>
                <div class="absolute bottom-20 right-20 w-96 h-96 bg-white opacity-5 rounded-full blur-3xl"></div>
            </div>

            <div class="relative z-10 container mx-auto px-6 text-center">
                <div class="max-w-4xl mx-auto">
                    <div class="inline-flex items-center bg-white bg-opacity-20 backdrop-blur-lg rounded-full px-4 py-2 mb-8 text-white">
                        <Icon path=ICON_ROCKET size="16" class="mr-2" />
                        <span class="text-sm font-semibold">{badge}</span>
                    </div>

                    <h1 class="text-5xl md:text-7xl font-bold text-white mb-6 leading-tight">
                        {headline}
                        <span class="block text-transparent bg-clip-text bg-gradient-to-r from-yellow-300 to-pink-300">
                            {headline_accent}
                        </span>
                    </h1>

                    <p class="text-xl md:text-2xl text-white text-opacity-90 mb-12 max-w-2xl mx-auto leading-relaxed">
                        {subheadline}
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                        <Button
                            size=ButtonSize::Large
                            class="bg-white text-primary hover:bg-gray-100 shadow-lg"
                            on_click=Callback::new(move |_| scroll_to(Section::Features))
                        >
                            "Explore Features"
                            <Icon path=ICON_ARROW_RIGHT size="20" class="ml-2" />
                        </Button>
                        <Button
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Large
                            class="border-white text-white hover:bg-white hover:text-primary"
                            on_click=Callback::new(move |_| scroll_to(Section::Contact))
                        >
                            "Get Started"
                        </Button>
                    </div>

                    <div class="mt-16 grid grid-cols-1 md:grid-cols-3 gap-8 max-w-3xl mx-auto">
                        {stats
                            .into_iter()
                            .map(|stat| view! {
                                <div class="text-center">
                                    <div class="text-3xl md:text-4xl font-bold text-white mb-2">{stat.value}</div>
                                    <div class="text-white text-opacity-80">{stat.label}</div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 transform -translate-x-1/2">
                <div class="w-6 h-10 border-2 border-white border-opacity-50 rounded-full flex justify-center">
                    <div class="w-1 h-3 bg-white rounded-full mt-2 animate-bounce"></div>
                </div>
            </div>
        </section>
    }
}
