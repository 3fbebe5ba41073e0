/// Convenience result type used across the crate.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Error taxonomy for the fallible edges of the crate (descriptors, settings, JSON).
///
/// The geometry itself never fails: degenerate transforms collapse to zero-area results.
#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    /// Invalid user-provided transform or settings data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LayoutError {
    /// Build a [`LayoutError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LayoutError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for LayoutError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
