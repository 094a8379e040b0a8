/// Convenience result type used across the layout engine.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Only caller mistakes surface here. Per-item problems (missing or
/// non-finite heights, empty sections) degrade to a valid layout instead.
#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    /// Content descriptor rejected by `prepare` (bad viewport or insets).
    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),

    /// Strategy tunables out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Errors when serializing or deserializing layout documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LayoutError {
    /// Build a [`LayoutError::InvalidDescriptor`] value.
    pub fn invalid_descriptor(msg: impl Into<String>) -> Self {
        Self::InvalidDescriptor(msg.into())
    }

    /// Build a [`LayoutError::InvalidConfig`] value.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build a [`LayoutError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for LayoutError {
    fn from(value: serde_json::Error) -> Self {
        Self::serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
