//! Outcome type - success or failure of a computation.
//!
//! `Outcome<T, E>` is structurally the same algebra as [`Maybe`], with a
//! payload on both sides: `Success(T)` or `Failure(E)`. Errors never combine;
//! the first `Failure` in a chain short-circuits everything after it.
//!
//! # Examples
//!
//! ```rust
//! use maybe_outcome::data::{failure, success, Outcome, OutcomeArms};
//!
//! let recovered: Outcome<i32, &str> = failure("boom").or(success(2));
//! assert_eq!(recovered.unwrap(), 2);
//!
//! let described = success::<_, &str>(2).map(|x| format!("x is {x}"));
//! assert_eq!(described.unwrap(), "x is 2");
//!
//! let value = failure::<i32, _>(42).match_with(OutcomeArms {
//!     success: |v| v * 2,
//!     failure: |e| e + 1,
//! });
//! assert_eq!(value, 43);
//! ```

use std::fmt;

use super::error::UnwrapError;
use super::maybe::Maybe;

/// The result of a computation: either `Success(T)` or `Failure(E)`.
///
/// # Type Parameters
///
/// * `T` - The type of the success payload
/// * `E` - The type of the failure payload
///
/// # Examples
///
/// ```rust
/// use maybe_outcome::data::Outcome;
///
/// let parsed: Outcome<i32, String> = "42".parse::<i32>().map_err(|e| e.to_string()).into();
/// assert_eq!(parsed, Outcome::Success(42));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with an error.
    Failure(E),
}

/// The two handlers consumed by [`Outcome::match_with`].
pub struct OutcomeArms<S, F> {
    /// Invoked with the success payload.
    pub success: S,
    /// Invoked with the failure payload.
    pub failure: F,
}

/// Wraps `value` as `Outcome::Success(value)`.
#[inline]
pub const fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Wraps `error` as `Outcome::Failure(error)`.
#[inline]
pub const fn failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` if this is a `Success` whose payload satisfies `predicate`.
    #[inline]
    pub fn is_success_and<P>(self, predicate: P) -> bool
    where
        P: FnOnce(T) -> bool,
    {
        match self {
            Self::Success(value) => predicate(value),
            Self::Failure(_) => false,
        }
    }

    /// Returns `true` if this is a `Failure` whose payload satisfies `predicate`.
    #[inline]
    pub fn is_failure_and<P>(self, predicate: P) -> bool
    where
        P: FnOnce(E) -> bool,
    {
        match self {
            Self::Success(_) => false,
            Self::Failure(error) => predicate(error),
        }
    }

    /// Borrows both payloads, producing an `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with `"{message}: {error:?}"` if this is a `Failure`.
    ///
    /// ```rust,should_panic
    /// use maybe_outcome::data::{failure, Outcome};
    ///
    /// let failed: Outcome<i32, i32> = failure(42);
    /// failed.expect("boom");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => UnwrapError::unexpected_failure(message, &error).raise(),
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with `"called unwrap on failure value: {error:?}"` if this is a
    /// `Failure`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        self.expect(UnwrapError::FAILURE_UNWRAP)
    }

    /// Returns the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with `"{message}: {value:?}"` if this is a `Success`.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Success(value) => UnwrapError::unexpected_success(message, &value).raise(),
            Self::Failure(error) => error,
        }
    }

    /// Returns the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with `"called unwrap_err on success value: {value:?}"` if this
    /// is a `Success`.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        self.expect_err(UnwrapError::SUCCESS_UNWRAP_ERR)
    }

    /// Non-panicking form of [`expect`](Self::expect).
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapError::UnexpectedFailure`] if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::data::{failure, Outcome};
    ///
    /// let failed: Outcome<i32, &str> = failure("disk full");
    /// let error = failed.try_expect("saving").unwrap_err();
    /// assert_eq!(error.to_string(), "saving: \"disk full\"");
    /// ```
    #[inline]
    pub fn try_expect(self, message: &str) -> Result<T, UnwrapError>
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(UnwrapError::unexpected_failure(message, &error)),
        }
    }

    /// Non-panicking form of [`unwrap`](Self::unwrap).
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapError::UnexpectedFailure`] if this is a `Failure`.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapError>
    where
        E: fmt::Debug,
    {
        self.try_expect(UnwrapError::FAILURE_UNWRAP)
    }

    /// Non-panicking form of [`expect_err`](Self::expect_err).
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapError::UnexpectedSuccess`] if this is a `Success`.
    #[inline]
    pub fn try_expect_err(self, message: &str) -> Result<E, UnwrapError>
    where
        T: fmt::Debug,
    {
        match self {
            Self::Success(value) => Err(UnwrapError::unexpected_success(message, &value)),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Non-panicking form of [`unwrap_err`](Self::unwrap_err).
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapError::UnexpectedSuccess`] if this is a `Success`.
    #[inline]
    pub fn try_unwrap_err(self) -> Result<E, UnwrapError>
    where
        T: fmt::Debug,
    {
        self.try_expect_err(UnwrapError::SUCCESS_UNWRAP_ERR)
    }

    /// Returns the success payload, or `default` on failure.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success payload, or `default(error)` on failure.
    ///
    /// `default` runs only on failure and receives the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => default(error),
        }
    }

    /// Returns the success payload, or `T::default()` on failure.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }

    // =========================================================================
    // Bridges to Maybe
    // =========================================================================

    /// `Present(value)` on success, `Absent` on failure. The error is discarded.
    #[inline]
    pub fn ok(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Present(value),
            Self::Failure(_) => Maybe::Absent,
        }
    }

    /// `Present(error)` on failure, `Absent` on success. The value is discarded.
    #[inline]
    pub fn err(self) -> Maybe<E> {
        match self {
            Self::Success(_) => Maybe::Absent,
            Self::Failure(error) => Maybe::Present(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the success payload; a failure passes through
    /// with the same error type.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies `function` to the failure payload; a success passes through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::data::{failure, success, Outcome};
    ///
    /// let failed: Outcome<i32, i32> = failure(42);
    /// assert_eq!(failed.map_err(|x| format!("x is {x}")).unwrap_err(), "x is 42");
    ///
    /// let succeeded: Outcome<i32, i32> = success(42);
    /// assert_eq!(succeeded.map_err(|x| format!("x is {x}")).unwrap(), 42);
    /// ```
    #[inline]
    pub fn map_err<F, O>(self, function: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Applies `function` to the success payload, or returns `default` on failure.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(_) => default,
        }
    }

    /// Applies `function` to the success payload, or `default` to the error.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => default(error),
        }
    }

    // =========================================================================
    // Boolean-like Combinators
    // =========================================================================

    /// Returns `other` on success; on failure returns this failure unchanged.
    ///
    /// `other` is eagerly evaluated by the caller regardless of the variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::data::{failure, success, Outcome};
    ///
    /// let first: Outcome<&str, &str> = failure("one");
    /// let second: Outcome<i32, &str> = failure("two");
    /// assert_eq!(first.and(second).unwrap_err(), "one");
    /// ```
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Success(_) => other,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Monadic bind over the success channel.
    ///
    /// `function` is not invoked on failure.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns this value on success, otherwise `other`.
    #[inline]
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(_) => other,
        }
    }

    /// Returns this value on success, otherwise `recover(error)`.
    ///
    /// `recover` runs only on failure, receives the error and may turn it
    /// into a success.
    #[inline]
    pub fn or_else<F, O>(self, recover: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => recover(error),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Dispatches to exactly one of the two arms, chosen by variant alone.
    #[inline]
    pub fn match_with<U, S, F>(self, arms: OutcomeArms<S, F>) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(E) -> U,
    {
        match self {
            Self::Success(value) => (arms.success)(value),
            Self::Failure(error) => (arms.failure)(error),
        }
    }

    /// Positional form of [`match_with`](Self::match_with).
    #[inline]
    pub fn fold<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(E) -> U,
    {
        self.match_with(OutcomeArms {
            success: on_success,
            failure: on_failure,
        })
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into the standard library's [`Result`], so `?` can be used
    /// at the edge of an `Outcome` pipeline.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Iterates over the success payload, yielding at most one item.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().ok().into_iter()
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting on the success channel.
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> Outcome<Maybe<T>, E> {
    /// Swaps the nesting: `Success(Present(v))` becomes `Present(Success(v))`,
    /// `Success(Absent)` becomes `Absent` and `Failure(e)` becomes
    /// `Present(Failure(e))`.
    #[inline]
    pub fn transpose(self) -> Maybe<Outcome<T, E>> {
        match self {
            Self::Success(Maybe::Present(value)) => Maybe::Present(Outcome::Success(value)),
            Self::Success(Maybe::Absent) => Maybe::Absent,
            Self::Failure(error) => Maybe::Present(Outcome::Failure(error)),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// `Ok(v)` becomes `Success(v)`, `Err(e)` becomes `Failure(e)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(Outcome<i32, String>: Send, Sync, Clone);
