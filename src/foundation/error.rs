/// Convenience result type used across spritegen.
pub type SpriteResult<T> = Result<T, SpriteError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Usage errors (generation already running, no generator selected) are not represented here:
/// they are reported through [`crate::BatchOutcome::Skipped`] and a log line instead.
#[derive(thiserror::Error, Debug)]
pub enum SpriteError {
    /// Invalid user-provided request, configuration value or parameter patch.
    #[error("validation error: {0}")]
    Validation(String),

    /// A generator failed while filling a frame.
    #[error("generation error: {0}")]
    Generation(String),

    /// Errors while loading a configuration document.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing parameter sets.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while writing committed frames.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpriteError {
    /// Build a [`SpriteError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpriteError::Generation`] value.
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    /// Build a [`SpriteError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`SpriteError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`SpriteError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
