//! Error types shared by every component.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised while configuring or rendering components.
///
/// Setters that validate eagerly return these from the builder call; checks that depend on the
/// final shape of a referenced component are deferred and surface from `render()`.
pub enum UiError {
    /// A component or argument has the wrong kind for the operation.
    #[error("type error: {0}")]
    Type(String),
    /// An argument has the right kind but a disallowed value.
    #[error("value error: {0}")]
    Value(String),
    /// Two chained settings are incompatible with each other.
    #[error("invalid configuration: {0}")]
    Invariant(String),
}

impl UiError {
    pub(crate) fn type_error(message: impl Into<String>) -> Self {
        Self::Type(message.into())
    }

    pub(crate) fn value_error(message: impl Into<String>) -> Self {
        Self::Value(message.into())
    }

    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        Self::Invariant(message.into())
    }
}

/// Convenience result type for component construction and rendering.
pub type UiResult<T> = Result<T, UiError>;
