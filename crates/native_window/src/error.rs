//! Error types shared by every handle-owning type in the crate

use std::path::PathBuf;
use thiserror::Error;

/// Window, surface and cursor errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// An argument was rejected before reaching the native layer
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Image file could not be decoded into a surface
    #[error("Failed to load image {path:?}: {reason}")]
    Load {
        /// Path that was requested
        path: PathBuf,
        /// Native error string
        reason: String,
    },

    /// A native call returned a failure sentinel
    #[error("Native error: {0}")]
    Native(String),

    /// The object has already been torn down
    #[error("{0} has already been disposed")]
    AlreadyDisposed(&'static str),
}

impl WindowError {
    /// Build a native error from a context message and the backend's error string
    pub fn native(context: &str, native_message: &str) -> Self {
        if native_message.is_empty() {
            Self::Native(context.to_string())
        } else {
            Self::Native(format!("{context}; native error: {native_message}"))
        }
    }
}

/// Result alias used throughout the crate
pub type WindowResult<T> = Result<T, WindowError>;
