//! The programming-error signal raised by the unwrap family.
//!
//! Calling `unwrap`/`expect` on [`Maybe::Absent`](super::Maybe::Absent) or
//! [`Outcome::Failure`](super::Outcome::Failure), or `unwrap_err`/`expect_err`
//! on [`Outcome::Success`](super::Outcome::Success), is a bug in the calling
//! code rather than a data-channel failure. The panicking methods panic with
//! the [`Display`](std::fmt::Display) text of an [`UnwrapError`]; the `try_*`
//! methods hand the same error back as a value.

use thiserror::Error;

/// Describes an unwrap-family call made on the wrong variant.
///
/// # Examples
///
/// ```rust
/// use maybe_outcome::data::{Maybe, UnwrapError};
///
/// let error = Maybe::<i32>::Absent.try_expect("config is loaded").unwrap_err();
/// assert_eq!(error, UnwrapError::Absent { message: "config is loaded".to_string() });
/// assert_eq!(error.to_string(), "config is loaded");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum UnwrapError {
    /// A value was demanded from an absent `Maybe`.
    #[error("{message}")]
    Absent {
        /// Caller-supplied or fixed diagnostic message.
        message: String,
    },
    /// A success value was demanded from a failed `Outcome`.
    #[error("{message}: {payload}")]
    UnexpectedFailure {
        /// Caller-supplied or fixed diagnostic message.
        message: String,
        /// `Debug` rendering of the error payload that was found instead.
        payload: String,
    },
    /// An error value was demanded from a successful `Outcome`.
    #[error("{message}: {payload}")]
    UnexpectedSuccess {
        /// Caller-supplied or fixed diagnostic message.
        message: String,
        /// `Debug` rendering of the success payload that was found instead.
        payload: String,
    },
}

impl UnwrapError {
    pub(crate) const ABSENT_UNWRAP: &'static str = "called unwrap on absent value";
    pub(crate) const FAILURE_UNWRAP: &'static str = "called unwrap on failure value";
    pub(crate) const SUCCESS_UNWRAP_ERR: &'static str = "called unwrap_err on success value";

    pub(crate) fn absent(message: &str) -> Self {
        Self::Absent {
            message: message.to_string(),
        }
    }

    pub(crate) fn unexpected_failure<E: std::fmt::Debug>(message: &str, error: &E) -> Self {
        Self::UnexpectedFailure {
            message: message.to_string(),
            payload: format!("{error:?}"),
        }
    }

    pub(crate) fn unexpected_success<T: std::fmt::Debug>(message: &str, value: &T) -> Self {
        Self::UnexpectedSuccess {
            message: message.to_string(),
            payload: format!("{value:?}"),
        }
    }

    /// Returns the diagnostic message carried by this error.
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Self::Absent { message }
            | Self::UnexpectedFailure { message, .. }
            | Self::UnexpectedSuccess { message, .. } => message,
        }
    }

    /// Returns the stringified opposing payload, if the failed call had one.
    #[inline]
    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::Absent { .. } => None,
            Self::UnexpectedFailure { payload, .. } | Self::UnexpectedSuccess { payload, .. } => {
                Some(payload)
            }
        }
    }

    /// Panics with this error's display text at the caller's location.
    #[cold]
    #[inline(never)]
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        panic!("{self}")
    }
}
