//! Timeago Core - Locale message model and message resolution
//!
//! This crate defines the data every relative-time formatter works on:
//! time units, the per-locale message tree with its plural forms, and the
//! functions that turn a unit plus a signed quantity into a template string.

mod error;
mod locale_data;
mod messages;
pub mod number;
pub mod plural;
pub mod resolve;
pub mod unit;

pub use error::CoreError;
pub use locale_data::{LocaleData, LONG, NOW_SET};
pub use messages::{FlavourMessages, Message, PluralCategory, PluralForms, UnitMessages};
pub use number::format_number;
pub use plural::PluralRule;
pub use resolve::{has_now_message, resolve, resolve_now, substitute};
pub use unit::Unit;
