use kamora::Section;
use kamora::content::Feature;
use leptos::prelude::*;

use crate::components::icons::icon_for;
use crate::components::{Button, ButtonSize, Card, CardVariant, FeatureCard, Scale};
use crate::scroll::scroll_to;

#[component]
pub fn Features(features: Vec<Feature>) -> impl IntoView {
    view! {
        <section id=Section::Features.anchor() class="py-20 bg-white">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">
                        "Powerful Features"
                    </h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "Everything you need to create exceptional digital experiences that drive growth and engagement."
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {features
                        .into_iter()
                        .map(|feature| view! {
                            <FeatureCard
                                icon=icon_for(&feature.icon)
                                title=feature.title
                                description=feature.description
                            />
                        })
                        .collect_view()}
                </div>

                <div class="mt-16 text-center">
                    <Card variant=CardVariant::Gradient padding=Scale::Xl hover=false class="rounded-2xl">
                        <h3 class="text-3xl md:text-4xl font-bold mb-4">"Ready to Get Started?"</h3>
                        <p class="text-lg mb-8 text-white text-opacity-90 max-w-2xl mx-auto">
                            "Join thousands of satisfied customers who have transformed their business with our platform."
                        </p>
                        <Button
                            size=ButtonSize::Large
                            class="bg-white text-primary hover:bg-gray-100"
                            on_click=Callback::new(move |_| scroll_to(Section::Contact))
                        >
                            "Start Your Free Trial"
                        </Button>
                    </Card>
                </div>
            </div>
        </section>
    }
}
