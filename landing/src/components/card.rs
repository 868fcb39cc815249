use leptos::prelude::*;

use super::icons::{ICON_CHECK, ICON_X, Icon};

const BASE: &str = "rounded-lg transition-all duration-300";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Dark,
    Primary,
    Gradient,
    Glass,
}

impl CardVariant {
    fn classes(self) -> &'static str {
        match self {
            CardVariant::Default => "bg-white border border-gray-200",
            CardVariant::Dark => "bg-gray-800 text-white border border-gray-700",
            CardVariant::Primary => "bg-primary text-white",
            CardVariant::Gradient => "bg-gradient-to-br from-primary to-secondary text-white",
            CardVariant::Glass => {
                "bg-white bg-opacity-10 backdrop-blur-lg border border-white border-opacity-20"
            }
        }
    }
}

/// Shared size scale for padding and shadow. Padding has no `Xl` step and
/// falls back to `Large`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scale {
    None,
    Small,
    #[default]
    Medium,
    Large,
    Xl,
}

impl Scale {
    fn padding(self) -> &'static str {
        match self {
            Scale::None => "",
            Scale::Small => "p-4",
            Scale::Medium => "p-6",
            Scale::Large | Scale::Xl => "p-8",
        }
    }

    fn shadow(self) -> &'static str {
        match self {
            Scale::None => "",
            Scale::Small => "shadow-sm",
            Scale::Medium => "shadow-md",
            Scale::Large => "shadow-lg",
            Scale::Xl => "shadow-xl",
        }
    }
}

pub fn card_class(
    variant: CardVariant,
    padding: Scale,
    shadow: Scale,
    hover: bool,
    clickable: bool,
    extra: &str,
) -> String {
    [
        BASE,
        variant.classes(),
        padding.padding(),
        shadow.shadow(),
        if hover { "hover:shadow-xl hover:-translate-y-1" } else { "" },
        if clickable { "cursor-pointer" } else { "" },
        extra.trim(),
    ]
    .iter()
    .filter(|part| !part.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" ")
}

#[component]
pub fn Card(
    children: Children,
    #[prop(optional)] variant: CardVariant,
    #[prop(optional)] padding: Scale,
    #[prop(optional)] shadow: Scale,
    #[prop(default = true)] hover: bool,
    #[prop(into, optional)] class: String,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let class = card_class(variant, padding, shadow, hover, on_click.is_some(), &class);
    view! {
        <div
            class=class
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
pub fn FeatureCard(
    icon: &'static str,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
) -> impl IntoView {
    view! {
        <Card>
            <div class="w-12 h-12 bg-primary bg-opacity-10 rounded-lg flex items-center justify-center mb-4">
                <Icon path=icon class="w-6 h-6 text-primary" />
            </div>
            <h3 class="text-xl font-semibold mb-2">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </Card>
    }
}

#[component]
pub fn PricingCard(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(into)] price: Signal<String>,
    #[prop(into)] period: Signal<&'static str>,
    features: Vec<String>,
    #[prop(optional)] excluded: Vec<String>,
    #[prop(optional)] highlighted: bool,
    #[prop(into)] button_text: String,
    on_select: Callback<()>,
) -> impl IntoView {
    let variant = if highlighted {
        CardVariant::Primary
    } else {
        CardVariant::Default
    };
    let muted = if highlighted { "text-white/70" } else { "text-gray-500" };
    let frame = if highlighted {
        "relative h-full scale-105"
    } else {
        "relative h-full"
    };
    let cta = if highlighted {
        "w-full py-3 rounded-lg font-semibold transition-colors bg-white text-primary hover:bg-gray-100"
    } else {
        "w-full py-3 rounded-lg font-semibold transition-colors bg-primary text-white hover:bg-primary-dark"
    };

    view! {
        <Card variant=variant class=frame>
            {highlighted.then(|| view! {
                <div class="absolute -top-3 left-1/2 transform -translate-x-1/2">
                    <span class="bg-secondary text-white px-3 py-1 rounded-full text-sm font-semibold">
                        "Most Popular"
                    </span>
                </div>
            })}
            <div class="text-center">
                <h3 class="text-2xl font-bold mb-2">{title}</h3>
                <p class=format!("mb-4 {muted}")>{description}</p>
                <div class="mb-6">
                    <span class="text-4xl font-bold">{move || price.get()}</span>
                    <span class=format!("ml-2 {muted}")>{move || period.get()}</span>
                </div>
                <ul class="space-y-3 mb-6 text-left">
                    {features
                        .into_iter()
                        .map(|feature| view! {
                            <li class="flex items-center">
                                <Icon path=ICON_CHECK class="w-5 h-5 text-green-500 mr-2" />
                                {feature}
                            </li>
                        })
                        .collect_view()}
                    {excluded
                        .into_iter()
                        .map(|feature| view! {
                            <li class=format!("flex items-center line-through {muted}")>
                                <Icon path=ICON_X class="w-5 h-5 text-gray-400 mr-2" />
                                {feature}
                            </li>
                        })
                        .collect_view()}
                </ul>
                <button class=cta on:click=move |_| on_select.run(())>
                    {button_text}
                </button>
            </div>
        </Card>
    }
}
