use std::path::PathBuf;

/// Convenience result type used across storeart.
pub type StoreartResult<T> = Result<T, StoreartError>;

/// Top-level error taxonomy used by the renderer APIs.
#[derive(thiserror::Error, Debug)]
pub enum StoreartError {
    /// Invalid configuration or output target.
    #[error("validation error: {0}")]
    Validation(String),

    /// A font file could not be read or parsed.
    ///
    /// Font resolution recovers from these by falling back; they never escape the pipeline.
    #[error("font error: {0}")]
    Font(String),

    /// Rasterization or layer bookkeeping failures.
    #[error("render error: {0}")]
    Render(String),

    /// PNG encoding or writing failed for `path`.
    #[error("encode error for '{}': {msg}", path.display())]
    Encode {
        /// Output path that could not be written.
        path: PathBuf,
        /// Underlying failure description.
        msg: String,
    },

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreartError {
    /// Build a [`StoreartError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StoreartError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`StoreartError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`StoreartError::Encode`] value.
    pub fn encode(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Encode {
            path: path.into(),
            msg: msg.into(),
        }
    }

    /// Build a [`StoreartError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
