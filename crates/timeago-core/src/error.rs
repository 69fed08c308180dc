//! Error types for timeago-core

/// Errors raised while loading locale message data
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid locale data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Plural forms are missing the mandatory \"other\" template")]
    MissingOther,

    #[error("Unit messages have neither a {branch} branch nor a shared fallback")]
    MissingBranch { branch: &'static str },
}
