// Page sections, top to bottom

mod about;
mod contact;
mod features;
mod hero;
mod pricing;
mod testimonials;

pub use about::About;
pub use contact::Contact;
pub use features::Features;
pub use hero::Hero;
pub use pricing::Pricing;
pub use testimonials::Testimonials;
