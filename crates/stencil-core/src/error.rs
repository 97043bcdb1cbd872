//! Error types for stencil-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or resolving styles
///
/// Variants that concern one style name its key (see [`Error::key`]). None
/// of them are transient: the document being generated should be abandoned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A style with this key is already registered
    #[error("Duplicate style key: {0}")]
    DuplicateKey(String),

    /// Styles must have a non-empty key
    #[error("Style key must not be empty")]
    EmptyKey,

    /// `based_on` names a style that has not been registered
    #[error("Style {key} is based on unknown style {base}")]
    UnknownBaseKey { key: String, base: String },

    /// A generic style cannot be based on a cell style
    #[error("Generic style {key} cannot be based on cell style {base}")]
    IncompatibleBaseKind { key: String, base: String },

    /// No style with this key exists
    #[error("Style not found: {0}")]
    StyleNotFound(String),

    /// Custom number format IDs ran past `u32::MAX`
    #[error("No number format ID left for custom format {0:?}")]
    NumberFormatIdOverflow(String),

    /// The style manager has not been initialised
    #[error("Style manager used before initialise")]
    NotReady,
}

impl Error {
    /// The style key the error is about, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            Error::DuplicateKey(key) | Error::StyleNotFound(key) => Some(key),
            Error::UnknownBaseKey { key, .. } | Error::IncompatibleBaseKind { key, .. } => {
                Some(key)
            }
            Error::EmptyKey | Error::NumberFormatIdOverflow(_) | Error::NotReady => None,
        }
    }
}
