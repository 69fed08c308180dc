//! Command implementations

mod format;
mod locales;
mod styles;

pub use format::cmd_format;
pub use locales::cmd_locales;
pub use styles::cmd_styles;
