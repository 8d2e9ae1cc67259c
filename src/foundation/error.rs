/// Convenience result type used across the crate.
pub type BouquetResult<T> = Result<T, BouquetError>;

/// Top-level error taxonomy.
///
/// Animation itself never fails; errors come from configuration, surface allocation and output.
#[derive(thiserror::Error, Debug)]
pub enum BouquetError {
    /// Invalid configuration or host-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while allocating or reading back a drawing surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while writing frames to an output sink.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BouquetError {
    /// Build a [`BouquetError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BouquetError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BouquetError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`BouquetError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
