//! # kamora
//!
//! **Stateful core of the Kamora landing page.** Everything on the page is
//! static markup except two controllers, and both live here so they can be
//! driven and tested without a browser:
//!
//! - **Testimonial carousel** - cyclic index, auto-advance timer, manual
//!   navigation that pauses auto-play, swipe classification
//! - **Contact form** - field state, submit-time validation, injected
//!   asynchronous submitter with a timeout, success/reset flow
//!
//! The rest of the crate is the read-only site content (TOML), the site
//! configuration and the `kamora` CLI used to check both.
//!
//! ## Quick Start
//!
//! ```rust
//! use kamora::carousel::CarouselState;
//!
//! let mut carousel = CarouselState::new(5).unwrap();
//! carousel.previous();
//! assert_eq!(carousel.current_index(), 4);
//! assert!(!carousel.is_auto_playing());
//! ```
//!
//! ## Validating a contact message
//!
//! ```rust
//! use kamora::contact::{ContactFields, Field, validate};
//!
//! let mut fields = ContactFields::default();
//! fields.set(Field::Name, "A");
//! let errors = validate(&fields);
//! assert!(errors.contains_key(&Field::Name));
//! ```
//!
//! ## Timers
//!
//! Controllers never touch a clock directly. They receive a [`Timers`]
//! capability: [`TokioTimers`] on native targets, a `set_interval` based
//! implementation in the browser bundle.

#![doc(html_root_url = "https://docs.rs/kamora/0.3.2")]

// ============================================================================
// Controllers
// ============================================================================

/// Testimonial carousel: pure index state plus the timer-bound controller.
pub mod carousel;

/// Contact form: fields, validation rules, state machine and submission.
pub mod contact;

// ============================================================================
// Content & configuration
// ============================================================================

/// Site configuration (`kamora.toml`): timer periods, thresholds, timeouts.
pub mod config;

/// Static site content: testimonials, plans, features, FAQ and friends.
pub mod content;

/// Error types shared across the crate.
pub mod error;

/// Timer capability and its drop guard.
pub mod timers;

// ============================================================================
// Re-exports
// ============================================================================

pub use carousel::{CarouselController, CarouselState, Direction, Swipe};
pub use config::SiteConfig;
pub use contact::{
    ContactController, ContactFields, ContactForm, Field, FieldErrors, Phase, SimulatedSubmitter,
    SubmitOutcome, Submitter,
};
pub use content::{Section, SiteContent};
pub use error::{CarouselError, ConfigError, ContentError, SubmitError, ValidationError};
pub use timers::{TimerGuard, Timers};

#[cfg(not(target_arch = "wasm32"))]
pub use timers::TokioTimers;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
