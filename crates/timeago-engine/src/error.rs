//! Error types for timeago-engine

/// Errors of a formatting call
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("Unsupported input {0}: expected epoch milliseconds or an RFC 3339 date")]
    UnsupportedInput(String),

    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    #[error("No units available for locale {locale} (flavours: {flavours})")]
    NoUnitsAvailable { locale: String, flavours: String },

    #[error("No scale step matches an elapsed time of {elapsed}s")]
    NoStepSelected { elapsed: f64 },
}

impl FormatError {
    /// Whether the error comes from incomplete data rather than from the
    /// call site. Formatting degrades to an empty string for these.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            FormatError::NoUnitsAvailable { .. } | FormatError::NoStepSelected { .. }
        )
    }
}
