/// Convenience result type used across ember.
pub type EmberResult<T> = Result<T, EmberError>;

/// Top-level error taxonomy used by behavior construction APIs.
///
/// Everything here surfaces at construction time. Per-tick evaluation never fails:
/// out-of-range ages clamp and missing per-particle state is skipped.
#[derive(thiserror::Error, Debug)]
pub enum EmberError {
    /// Invalid user-provided behavior configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while building keyframe timelines or easing functions.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EmberError {
    /// Build an [`EmberError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`EmberError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build an [`EmberError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for EmberError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
