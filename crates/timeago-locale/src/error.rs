//! Error types for timeago-locale

use timeago_core::CoreError;

/// Errors raised when registering locale data
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("Invalid locale tag: {0:?}")]
    InvalidTag(String),

    #[error(transparent)]
    Data(#[from] CoreError),
}
