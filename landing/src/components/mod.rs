// Reusable building blocks: buttons, cards, icons

mod button;
mod card;
pub mod icons;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardVariant, FeatureCard, PricingCard, Scale};
pub use icons::Icon;
