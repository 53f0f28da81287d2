//! Error types returned by registries and channels.
//!
//! Every misuse is reported synchronously through [`Error`]; nothing is retried
//! or logged on the caller's behalf.

use thiserror::Error;

use crate::callback::BoxError;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// # Errors produced by registries and channels.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// The construction input of a [`Registry`](crate::Registry) was malformed.
    #[error("invalid event specification: {reason}")]
    InvalidSpecification {
        /// What was wrong with the input.
        reason: String,
    },

    /// A callback handed to a channel can no longer be called.
    #[error("callback `{label}` is not callable")]
    InvalidCallback {
        /// Label of the offending callback.
        label: String,
        /// Position of the callback when it was part of a sequence.
        position: Option<usize>,
    },

    /// Lookup of an event name that was never registered.
    #[error("'{name}' is not defined as an event")]
    UndefinedEvent {
        /// The name that was looked up.
        name: String,
    },

    /// Removal of a callback that is not registered on the channel.
    #[error("callback `{label}` is not registered on this event")]
    CallbackNotFound {
        /// Label of the missing callback.
        label: String,
    },

    /// A callback failed while an event was being emitted through a registry.
    #[error(transparent)]
    Callback(BoxError),
}

impl Error {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventuality::Error;
    ///
    /// let err = Error::UndefinedEvent { name: "on_close".into() };
    /// assert_eq!(err.as_label(), "undefined_event");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            Error::InvalidSpecification { .. } => "invalid_specification",
            Error::InvalidCallback { .. } => "invalid_callback",
            Error::UndefinedEvent { .. } => "undefined_event",
            Error::CallbackNotFound { .. } => "callback_not_found",
            Error::Callback(_) => "callback_failed",
        }
    }

    pub(crate) fn invalid_spec(reason: impl Into<String>) -> Self {
        Error::InvalidSpecification {
            reason: reason.into(),
        }
    }
}
