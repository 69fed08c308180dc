//! Timeago Engine - Relative time formatting
//!
//! This crate turns an instant into text such as "3 hours ago":
//! - [`Scale`] selects the unit and rounded amount for an elapsed time
//! - [`Style`] bundles a scale with label flavours and overrides
//! - [`TimeAgo`] resolves the result against a locale from the registry
//!
//! ```no_run
//! use timeago_engine::{FormatOptions, TimeAgo};
//! use timeago_locale::LocaleRegistry;
//!
//! let timeago = TimeAgo::new(LocaleRegistry::global(), &["en-US"]);
//! let text = timeago.format(0_i64, "round", &FormatOptions::at(3_600_000)).unwrap();
//! assert_eq!(text, "1 hour ago");
//! ```

mod cache;
mod error;
mod format;
pub mod input;
pub mod round;
pub mod scale;
pub mod style;

pub use cache::Memo;
pub use error::FormatError;
pub use format::{FormatOptions, Formatted, StyleRef, TimeAgo};
pub use input::TimeInput;
pub use round::{round, Rounding};
pub use scale::{Scale, Selection, Step, StepFormatter};
pub use style::{OverrideContext, Style, StyleOverride, Styles, DEFAULT_STYLE};
