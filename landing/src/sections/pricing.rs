use kamora::Section;
use kamora::content::{BillingCycle, Plan, PlanAction, Pricing as PricingContent};
use leptos::prelude::*;

use crate::components::icons::{ICON_CARET_DOWN, ICON_CHECK};
use crate::components::{Icon, PricingCard};
use crate::scroll::scroll_to;

fn selection_message(plan: &str) -> String {
    format!("Selected {plan} plan")
}

fn cycle_button_class(active: bool) -> &'static str {
    if active {
        "px-6 py-2 rounded-md font-semibold transition-all duration-200 bg-white text-primary shadow-sm"
    } else {
        "px-6 py-2 rounded-md font-semibold transition-all duration-200 text-gray-600 hover:text-gray-900"
    }
}

#[component]
fn PlanCard(plan: Plan, cycle: ReadSignal<BillingCycle>) -> impl IntoView {
    let pricing = plan.clone();
    let price = Signal::derive(move || pricing.price_label(cycle.get()));
    let chosen = StoredValue::new(plan.clone());
    let on_select = Callback::new(move |_| match chosen.with_value(Plan::select) {
        PlanAction::ContactSales => scroll_to(Section::Contact),
        PlanAction::Checkout => {
            let name = chosen.with_value(|plan| plan.name.clone());
            web_sys::console::log_1(&selection_message(&name).into());
        }
    });
    let Plan {
        name,
        description,
        features,
        excluded_features,
        highlighted,
        button_text,
        ..
    } = plan;
    let period = Signal::derive(move || cycle.get().period());

    view! {
        <div class="hover:-translate-y-2 transition-transform duration-300">
            <PricingCard
                title=name
                description=description
                price=price
                period=period
                features=features
                excluded=excluded_features
                highlighted=highlighted
                button_text=button_text
                on_select=on_select
            />
        </div>
    }
}

#[component]
pub fn Pricing(content: PricingContent) -> impl IntoView {
    let (cycle, set_cycle) = signal(BillingCycle::Monthly);
    let (open_faq, set_open_faq) = signal(None::<usize>);

    let PricingContent {
        yearly_savings,
        plans,
        included,
        faq,
    } = content;

    view! {
        <section id=Section::Pricing.anchor() class="py-20 bg-white">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">
                        "Simple, Transparent Pricing"
                    </h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto mb-8">
                        "Choose the perfect plan for your needs. All plans include our core features and excellent support."
                    </p>

                    <div class="inline-flex items-center bg-gray-100 rounded-lg p-1">
                        <button
                            class=move || cycle_button_class(cycle.get() == BillingCycle::Monthly)
                            on:click=move |_| set_cycle.set(BillingCycle::Monthly)
                        >
                            "Monthly"
                        </button>
                        <button
                            class=move || cycle_button_class(cycle.get() == BillingCycle::Yearly)
                            on:click=move |_| set_cycle.set(BillingCycle::Yearly)
                        >
                            "Yearly"
                            <span class="ml-2 text-xs bg-green-100 text-green-800 px-2 py-1 rounded-full">
                                {yearly_savings}
                            </span>
                        </button>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-6xl mx-auto">
                    {plans
                        .into_iter()
                        .map(|plan| view! { <PlanCard plan=plan cycle=cycle /> })
                        .collect_view()}
                </div>

                <div class="mt-20 text-center">
                    <h3 class="text-2xl font-bold text-gray-900 mb-8">"All Plans Include"</h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 max-w-4xl mx-auto">
                        {included
                            .into_iter()
                            .map(|item| view! {
                                <div class="bg-gray-50 rounded-lg p-4 flex items-center justify-center space-x-2">
                                    <Icon path=ICON_CHECK class="text-green-500" />
                                    <span class="text-gray-700 font-medium">{item}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="mt-20 max-w-3xl mx-auto">
                    <h3 class="text-2xl font-bold text-gray-900 text-center mb-8">
                        "Frequently Asked Questions"
                    </h3>
                    <div class="space-y-4">
                        {faq
                            .into_iter()
                            .enumerate()
                            .map(|(index, entry)| {
                                let is_open = move || open_faq.get() == Some(index);
                                view! {
                                    <div class="bg-gray-50 rounded-lg p-6">
                                        <button
                                            class="w-full flex justify-between items-center text-left"
                                            aria-expanded=move || is_open().to_string()
                                            on:click=move |_| {
                                                set_open_faq.update(|open| {
                                                    *open = if *open == Some(index) { None } else { Some(index) };
                                                })
                                            }
                                        >
                                            <h4 class="font-semibold text-gray-900">{entry.question}</h4>
                                            <span class=move || if is_open() { "rotate-180 transition-transform" } else { "transition-transform" }>
                                                <Icon path=ICON_CARET_DOWN size="16" />
                                            </span>
                                        </button>
                                        <Show when=is_open>
                                            <p class="text-gray-600 mt-2">{entry.answer.clone()}</p>
                                        </Show>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
