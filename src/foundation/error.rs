/// Convenience result type used across posterkit.
pub type PosterResult<T> = Result<T, PosterError>;

/// Top-level error taxonomy for the fallible edges of the crate.
///
/// Extraction and keyframe synthesis are total and never produce one of these; errors only
/// come from loading configuration, parsing requests and talking to a completion endpoint.
#[derive(thiserror::Error, Debug)]
pub enum PosterError {
    /// Invalid user-provided request or keyword-table data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Unreadable or inconsistent configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Failures while calling or decoding a completion endpoint.
    #[error("completion error: {0}")]
    Completion(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PosterError {
    /// Build a [`PosterError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PosterError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`PosterError::Completion`] value.
    pub fn completion(msg: impl Into<String>) -> Self {
        Self::Completion(msg.into())
    }

    /// Build a [`PosterError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
