//! Static site content.
//!
//! The page renders fixed, ordered lists (features, testimonials, plans, FAQ,
//! contact channels). They are read-only input, kept in TOML so copy changes
//! never touch code. The shipped content is embedded at build time and
//! available as [`SiteContent::builtin`].

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

const BUILTIN: &str = include_str!("../content/site.toml");

/// Scroll targets on the page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    Features,
    About,
    Testimonials,
    Pricing,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Features,
        Section::About,
        Section::Testimonials,
        Section::Pricing,
        Section::Contact,
    ];

    /// Element id of the section.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Features => "features",
            Section::About => "about",
            Section::Testimonials => "testimonials",
            Section::Pricing => "pricing",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    /// Nav link text.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Features => "Features",
            Section::About => "About",
            Section::Testimonials => "Testimonials",
            Section::Pricing => "Pricing",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
    pub founded: u16,
    pub years_badge: String,
}

impl Brand {
    /// Single-letter mark used where there is no logo image.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub badge: String,
    pub headline: String,
    pub headline_accent: String,
    pub subheadline: String,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreValue {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub intro: String,
    pub story_title: String,
    pub story: Vec<String>,
    pub stats: Vec<Stat>,
    pub values: Vec<CoreValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub company: String,
    /// Initials shown in place of a photo.
    pub avatar: String,
    pub content: String,
    /// Star count, 1 to 5.
    pub rating: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn period(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "/month",
            BillingCycle::Yearly => "/year",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plan {
    pub name: String,
    pub description: String,
    pub monthly_price: u32,
    pub yearly_price: u32,
    pub features: Vec<String>,
    pub excluded_features: Vec<String>,
    /// Rendered as "Most Popular".
    pub highlighted: bool,
    pub button_text: String,
    /// The CTA leads to the contact form instead of a checkout.
    pub contact_sales: bool,
}

impl Plan {
    pub fn price(&self, cycle: BillingCycle) -> u32 {
        match cycle {
            BillingCycle::Monthly => self.monthly_price,
            BillingCycle::Yearly => self.yearly_price,
        }
    }

    /// Price label such as `$29`.
    pub fn price_label(&self, cycle: BillingCycle) -> String {
        format!("${}", self.price(cycle))
    }

    /// What the plan's call to action does.
    pub fn select(&self) -> PlanAction {
        if self.contact_sales {
            PlanAction::ContactSales
        } else {
            PlanAction::Checkout
        }
    }
}

/// Where a plan's call to action leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    Checkout,
    ContactSales,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pricing {
    pub yearly_savings: String,
    pub plans: Vec<Plan>,
    pub included: Vec<String>,
    pub faq: Vec<Faq>,
}

impl Pricing {
    pub fn highlighted(&self) -> Option<&Plan> {
        self.plans.iter().find(|plan| plan.highlighted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Email,
    Phone,
    Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub kind: ChannelKind,
    pub label: String,
    pub value: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    /// Display labels; the submitted value is [`service_slug`].
    pub services: Vec<String>,
    pub channels: Vec<Channel>,
    pub hours: Vec<String>,
}

/// Form value for a service label: lowercase, whitespace runs become `-`.
pub fn service_slug(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub brand: Brand,
    pub hero: Hero,
    pub features: Vec<Feature>,
    pub about: About,
    pub testimonials: Vec<Testimonial>,
    pub pricing: Pricing,
    pub contact: ContactInfo,
}

impl SiteContent {
    /// The content shipped with the site.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_toml_str(BUILTIN)
    }

    /// Parse and check content from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ContentError> {
        let content: SiteContent = toml::from_str(text)?;
        content.validate()?;
        Ok(content)
    }

    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let text = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Structural checks the page relies on.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.testimonials.is_empty() {
            return Err(ContentError::Invalid(
                "at least one testimonial is required".into(),
            ));
        }
        let mut ids = HashSet::new();
        for testimonial in &self.testimonials {
            if !ids.insert(testimonial.id) {
                return Err(ContentError::Invalid(format!(
                    "duplicate testimonial id {}",
                    testimonial.id
                )));
            }
            if !(1..=5).contains(&testimonial.rating) {
                return Err(ContentError::Invalid(format!(
                    "testimonial {} has rating {}, expected 1-5",
                    testimonial.id, testimonial.rating
                )));
            }
        }
        if self.contact.services.is_empty() {
            return Err(ContentError::Invalid(
                "at least one contact service is required".into(),
            ));
        }
        if self.pricing.plans.iter().any(|plan| plan.name.trim().is_empty()) {
            return Err(ContentError::Invalid("pricing plan without a name".into()));
        }
        let highlighted = self.pricing.plans.iter().filter(|p| p.highlighted).count();
        if highlighted > 1 {
            return Err(ContentError::Invalid(format!(
                "{highlighted} plans are highlighted, at most one allowed"
            )));
        }
        Ok(())
    }
}
