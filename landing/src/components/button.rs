use leptos::prelude::*;

const BASE: &str = "inline-flex items-center justify-center font-semibold rounded-lg transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Danger,
}

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-primary text-white hover:bg-primary-dark focus:ring-primary",
            ButtonVariant::Secondary => {
                "bg-secondary text-white hover:bg-secondary-dark focus:ring-secondary"
            }
            ButtonVariant::Outline => {
                "border-2 border-primary text-primary hover:bg-primary hover:text-white focus:ring-primary"
            }
            ButtonVariant::Ghost => "text-primary hover:bg-primary hover:text-white focus:ring-primary",
            ButtonVariant::Danger => "bg-red-500 text-white hover:bg-red-600 focus:ring-red-500",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    fn classes(self) -> &'static str {
        match self {
            ButtonSize::Small => "px-3 py-1.5 text-sm",
            ButtonSize::Medium => "px-6 py-3 text-base",
            ButtonSize::Large => "px-8 py-4 text-lg",
        }
    }
}

/// Class list for a button. `inactive` covers both disabled and loading.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, inactive: bool, extra: &str) -> String {
    let cursor = if inactive {
        "opacity-50 cursor-not-allowed"
    } else {
        "cursor-pointer"
    };
    [BASE, variant.classes(), size.classes(), cursor, extra.trim()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Button, or a link styled as one when `href` is set and it is not disabled.
#[component]
pub fn Button(
    children: ChildrenFn,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(into, default = Signal::from(false))] loading: Signal<bool>,
    #[prop(into, optional)] href: Option<String>,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(into, optional)] class: String,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let class = move || {
        button_class(
            variant,
            size,
            disabled.get() || loading.get(),
            &class,
        )
    };
    let content = move || {
        if loading.get() {
            view! {
                <span class="inline-block w-4 h-4 border-2 border-current border-t-transparent rounded-full animate-spin"></span>
            }
            .into_any()
        } else {
            children().into_any()
        }
    };
    let click = move |_| {
        if let Some(on_click) = on_click {
            on_click.run(());
        }
    };

    match href {
        Some(href) if !disabled.get_untracked() => view! {
            <a href=href class=class on:click=click>
                {content}
            </a>
        }
        .into_any(),
        _ => view! {
            <button
                type=button_type
                class=class
                disabled=move || disabled.get() || loading.get()
                on:click=click
            >
                {content}
            </button>
        }
        .into_any(),
    }
}
