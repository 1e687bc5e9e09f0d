/// Convenience result alias used across the crate boundary.
pub type CaptionResult<T> = Result<T, CaptionError>;

#[derive(thiserror::Error, Debug)]
/// Errors surfaced at the request boundary.
///
/// Direction itself never fails; these cover parsing and validating caller input.
pub enum CaptionError {
    /// Malformed or out-of-range input (negative/NaN timestamps, bad JSON, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// Serialization of directed output failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CaptionError {
    /// Build a [`CaptionError::Validation`] from a message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CaptionError::Serde`] from a message.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
