//! Timeago Locale - Locale data registry and negotiation
//!
//! This crate owns the locale datasets at runtime:
//! - a thread-safe registry of [`LocaleData`](timeago_core::LocaleData) keyed by tag
//! - best-match negotiation from a preference list
//! - the bundled `en`, `de` and `ru` datasets and loading extra ones from disk

pub mod bundled;
mod error;
pub mod negotiate;
mod registry;

pub use error::LocaleError;
pub use negotiate::{choose_locale, normalize_tag};
pub use registry::{LocaleRegistry, DEFAULT_LOCALE};
