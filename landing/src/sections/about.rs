use kamora::Section;
use kamora::content::{About as AboutContent, Brand};
use leptos::prelude::*;

use crate::components::icons::icon_for;
use crate::components::{Button, ButtonSize, Card, Icon, Scale};
use crate::scroll::scroll_to;

#[component]
pub fn About(content: AboutContent, brand: Brand) -> impl IntoView {
    let AboutContent {
        intro,
        story_title,
        story,
        stats,
        values,
    } = content;

    view! {
        <section id=Section::About.anchor() class="py-20 bg-white">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">
                        {format!("About {}", brand.name)}
                    </h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">{intro}</p>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center mb-20">
                    <div class="relative">
                        <div class="relative rounded-2xl overflow-hidden shadow-2xl">
                            <div class="bg-gradient-to-br from-primary to-secondary h-96 lg:h-full min-h-[400px] flex items-center justify-center">
                                <div class="text-white text-center p-8">
                                    <div class="text-6xl font-bold mb-4">{brand.initial()}</div>
                                    <div class="text-xl">{format!("{} Team", brand.name)}</div>
                                    <div class="text-sm opacity-80 mt-2">{brand.tagline.clone()}</div>
                                </div>
                            </div>
                        </div>
                        <div class="absolute -top-4 -right-4 bg-white rounded-lg shadow-lg p-4">
                            <div class="text-2xl font-bold text-primary">{brand.years_badge.clone()}</div>
                            <div class="text-sm text-gray-600">"of Excellence"</div>
                        </div>
                    </div>

                    <div>
                        <h3 class="text-3xl font-bold text-gray-900 mb-6">{story_title}</h3>
                        {story
                            .into_iter()
                            .map(|paragraph| view! { <p class="text-lg text-gray-600 mb-6">{paragraph}</p> })
                            .collect_view()}
                        <Button
                            size=ButtonSize::Large
                            on_click=Callback::new(move |_| scroll_to(Section::Contact))
                        >
                            "Learn More About Us"
                        </Button>
                    </div>
                </div>

                <div class="grid grid-cols-2 lg:grid-cols-4 gap-8 mb-20">
                    {stats
                        .into_iter()
                        .map(|stat| {
                            let icon = icon_for(stat.icon.as_deref().unwrap_or_default());
                            view! {
                                <div class="text-center bg-gray-50 rounded-lg p-6">
                                    <div class="flex justify-center mb-4">
                                        <div class="w-12 h-12 bg-primary bg-opacity-10 rounded-full flex items-center justify-center">
                                            <Icon path=icon class="text-primary" />
                                        </div>
                                    </div>
                                    <div class="text-3xl font-bold text-gray-900 mb-2">{stat.value}</div>
                                    <div class="text-gray-600">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div>
                    <h3 class="text-3xl font-bold text-gray-900 text-center mb-12">"Our Core Values"</h3>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                        {values
                            .into_iter()
                            .map(|value| view! {
                                <Card padding=Scale::Large shadow=Scale::None class="bg-gray-50 text-center">
                                    <h4 class="text-xl font-semibold text-gray-900 mb-4">{value.title}</h4>
                                    <p class="text-gray-600">{value.description}</p>
                                </Card>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
