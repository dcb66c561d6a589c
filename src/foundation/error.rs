/// Convenience result type used across RetroSnap.
pub type RetroSnapResult<T> = Result<T, RetroSnapError>;

/// Top-level error taxonomy used by the classifier, renderer and session APIs.
#[derive(thiserror::Error, Debug)]
pub enum RetroSnapError {
    /// The source image bytes could not be decoded into a raster.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid user-provided parameters or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing the composite.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding the output image.
    #[error("encode error: {0}")]
    Encode(String),

    /// A configured font could not be loaded or registered.
    #[error("font error: {0}")]
    Font(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RetroSnapError {
    /// Build a [`RetroSnapError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`RetroSnapError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RetroSnapError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`RetroSnapError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`RetroSnapError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Whether this error means the source image could not be read.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
