//! Maybe type - presence or absence of a value.
//!
//! `Maybe<T>` is either `Present(T)`, holding exactly one value, or `Absent`,
//! holding nothing. Every combinator consumes the receiver and produces a new
//! value; nothing is ever mutated in place.
//!
//! # Examples
//!
//! ```rust
//! use maybe_outcome::data::{absent, present, Maybe, MaybeArms};
//!
//! assert_eq!(present(42).unwrap_or(12), 42);
//! assert_eq!(absent().unwrap_or(12), 12);
//!
//! let squared = present(2)
//!     .and_then(|x| present(x * x))
//!     .and_then(|x| present(x * x));
//! assert_eq!(squared.unwrap(), 16);
//!
//! let described = present(2).match_with(MaybeArms {
//!     present: |value| format!("got {value}"),
//!     absent: || "nothing".to_string(),
//! });
//! assert_eq!(described, "got 2");
//! ```

use super::error::UnwrapError;
use super::outcome::Outcome;

/// An optional value: either `Present(T)` or `Absent`.
///
/// `Absent` carries no payload, so it costs nothing to construct and the same
/// constant ([`Maybe::ABSENT`]) stands for "no value" at every `T`.
///
/// Variants are ordered `Absent < Present(_)`, mirroring [`Option`].
///
/// # Examples
///
/// ```rust
/// use maybe_outcome::data::Maybe;
///
/// let present: Maybe<i32> = Maybe::Present(42);
/// let absent: Maybe<i32> = Maybe::ABSENT;
///
/// assert!(present.is_present());
/// assert!(absent.is_absent());
/// assert!(absent < present);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value is present.
    Absent,
    /// Exactly one value is present.
    Present(T),
}

/// The two handlers consumed by [`Maybe::match_with`].
///
/// Both fields must be supplied when the record is built, so forgetting to
/// handle one variant is a compile error.
pub struct MaybeArms<P, A> {
    /// Invoked with the held value when the `Maybe` is `Present`.
    pub present: P,
    /// Invoked when the `Maybe` is `Absent`.
    pub absent: A,
}

// =============================================================================
// Factories
// =============================================================================

/// Wraps `value` as `Maybe::Present(value)`.
#[inline]
pub const fn present<T>(value: T) -> Maybe<T> {
    Maybe::Present(value)
}

/// Returns `Maybe::Absent`.
///
/// # Examples
///
/// ```rust
/// use maybe_outcome::data::{absent, Maybe};
///
/// let nothing: Maybe<String> = absent();
/// assert_eq!(nothing, Maybe::ABSENT);
/// ```
#[inline]
pub const fn absent<T>() -> Maybe<T> {
    Maybe::Absent
}

/// Converts a possibly missing value: `None` becomes `Absent`, `Some(v)`
/// becomes `Present(v)`.
///
/// # Examples
///
/// ```rust
/// use maybe_outcome::data::from_nullable;
///
/// assert!(from_nullable(None::<i32>).is_absent());
/// assert!(from_nullable(Some(12)).is_present());
/// ```
#[inline]
pub fn from_nullable<T>(value: Option<T>) -> Maybe<T> {
    match value {
        Some(value) => Maybe::Present(value),
        None => Maybe::Absent,
    }
}

impl<T> Maybe<T> {
    /// The absent value, usable as a constant at any `T`.
    pub const ABSENT: Self = Self::Absent;

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if a value is present and `predicate` holds for it.
    ///
    /// `predicate` is not invoked on `Absent`.
    #[inline]
    pub fn is_present_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Present(value) => predicate(value),
            Self::Absent => false,
        }
    }

    /// Borrows the held value, producing a `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if the value is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::data::present;
    ///
    /// assert_eq!(present(42).expect("boom"), 42);
    /// ```
    ///
    /// ```rust,should_panic
    /// use maybe_outcome::data::{absent, Maybe};
    ///
    /// let nothing: Maybe<i32> = absent();
    /// nothing.expect("boom");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => UnwrapError::absent(message).raise(),
        }
    }

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Panics with `"called unwrap on absent value"` if the value is `Absent`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => UnwrapError::absent(UnwrapError::ABSENT_UNWRAP).raise(),
        }
    }

    /// Non-panicking form of [`expect`](Self::expect).
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapError::Absent`] carrying `message` if the value is `Absent`.
    #[inline]
    pub fn try_expect(self, message: &str) -> Result<T, UnwrapError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(UnwrapError::absent(message)),
        }
    }

    /// Non-panicking form of [`unwrap`](Self::unwrap).
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapError::Absent`] if the value is `Absent`.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        self.try_expect(UnwrapError::ABSENT_UNWRAP)
    }

    /// Returns the held value, or `default` if `Absent`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the held value, or the result of `default` if `Absent`.
    ///
    /// `default` runs only when the value is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::data::{absent, present};
    ///
    /// assert_eq!(present(42).unwrap_or_else(|| 12), 42);
    /// assert_eq!(absent().unwrap_or_else(|| 12), 12);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => default(),
        }
    }

    /// Returns the held value, or `T::default()` if `Absent`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => T::default(),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the held value.
    ///
    /// `Absent` maps to `Absent` without invoking `function`. This is the
    /// lawful functor map; see [`map_nullable`](Self::map_nullable) for the
    /// variant that collapses a missing result to `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::data::{absent, present, Maybe};
    ///
    /// assert_eq!(present(42).map(|x| format!("x is {x}")).unwrap(), "x is 42");
    ///
    /// let nothing: Maybe<i32> = absent();
    /// assert!(nothing.map(|x| format!("x is {x}")).is_absent());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Applies `function` to the held value, collapsing a `None` result to
    /// `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::data::present;
    ///
    /// assert!(present(42).map_nullable(|_| None::<String>).is_absent());
    /// assert_eq!(present(42).map_nullable(|x| Some(x + 1)).unwrap(), 43);
    /// ```
    #[inline]
    pub fn map_nullable<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Present(value) => from_nullable(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Applies `function` to the held value, or returns `default` if `Absent`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => default,
        }
    }

    /// Lazy analogue of [`map_or`](Self::map_or): `default` runs only when
    /// the value is `Absent`.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => default(),
        }
    }

    /// Keeps the held value only if `predicate` holds for it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Present(value) = self {
            if predicate(&value) {
                return Self::Present(value);
            }
        }
        Self::Absent
    }

    // =========================================================================
    // Boolean-like Combinators
    // =========================================================================

    /// Returns `other` if this value is present, otherwise `Absent`.
    ///
    /// `other` is an ordinary argument: it has already been evaluated by the
    /// time `and` is called, even when the result is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::data::{absent, present, Maybe};
    ///
    /// assert_eq!(present(2).and(present("foo")).unwrap(), "foo");
    /// assert!(present(2).and(absent::<&str>()).is_absent());
    /// assert!(absent::<i32>().and(present("foo")).is_absent());
    /// ```
    #[inline]
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Self::Present(_) => other,
            Self::Absent => Maybe::Absent,
        }
    }

    /// Monadic bind: returns `function(value)` if present, otherwise `Absent`.
    ///
    /// `function` is not invoked on `Absent`.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Returns this value if present, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => other,
        }
    }

    /// Returns this value if present, otherwise the result of `alternative`.
    ///
    /// `alternative` runs only when the value is `Absent`.
    #[inline]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => alternative(),
        }
    }

    /// Returns whichever side is present if exactly one is, otherwise `Absent`.
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Present(value), Self::Absent) | (Self::Absent, Self::Present(value)) => {
                Self::Present(value)
            }
            _ => Self::Absent,
        }
    }

    /// Pairs two present values; `Absent` if either side is absent.
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Self::Present(left), Maybe::Present(right)) => Maybe::Present((left, right)),
            _ => Maybe::Absent,
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Dispatches to exactly one of the two arms, chosen by variant alone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::data::{absent, present, MaybeArms};
    ///
    /// let doubled = present(2).match_with(MaybeArms {
    ///     present: |v| v * 2,
    ///     absent: || 42,
    /// });
    /// assert_eq!(doubled, 4);
    ///
    /// let fallback = absent::<i32>().match_with(MaybeArms {
    ///     present: |v| v * 2,
    ///     absent: || 42,
    /// });
    /// assert_eq!(fallback, 42);
    /// ```
    #[inline]
    pub fn match_with<U, P, A>(self, arms: MaybeArms<P, A>) -> U
    where
        P: FnOnce(T) -> U,
        A: FnOnce() -> U,
    {
        match self {
            Self::Present(value) => (arms.present)(value),
            Self::Absent => (arms.absent)(),
        }
    }

    /// Positional form of [`match_with`](Self::match_with).
    #[inline]
    pub fn fold<U, P, A>(self, on_present: P, on_absent: A) -> U
    where
        P: FnOnce(T) -> U,
        A: FnOnce() -> U,
    {
        self.match_with(MaybeArms {
            present: on_present,
            absent: on_absent,
        })
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Bridges to [`Outcome`]: `Present(v)` becomes `Success(v)`, `Absent`
    /// becomes `Failure(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::data::{absent, failure, present, success, Maybe};
    ///
    /// assert_eq!(present(1).ok_or("missing"), success(1));
    /// assert_eq!(absent::<i32>().ok_or("missing"), failure("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::Failure(error),
        }
    }

    /// Lazy analogue of [`ok_or`](Self::ok_or).
    #[inline]
    pub fn ok_or_else<E, F>(self, error: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::Failure(error()),
        }
    }

    /// Converts into the standard library's [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Iterates over the held value, yielding at most one item.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Self::Present(inner) => inner,
            Self::Absent => Maybe::Absent,
        }
    }
}

impl<T, E> Maybe<Outcome<T, E>> {
    /// Swaps the nesting: `Present(Success(v))` becomes `Success(Present(v))`,
    /// `Present(Failure(e))` becomes `Failure(e)` and `Absent` becomes
    /// `Success(Absent)`.
    #[inline]
    pub fn transpose(self) -> Outcome<Maybe<T>, E> {
        match self {
            Self::Present(Outcome::Success(value)) => Outcome::Success(Maybe::Present(value)),
            Self::Present(Outcome::Failure(error)) => Outcome::Failure(error),
            Self::Absent => Outcome::Success(Maybe::Absent),
        }
    }
}

impl<T> Default for Maybe<T> {
    /// Returns `Absent`, for any `T`.
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_eq_size!(Maybe<&'static u8>, &'static u8);
static_assertions::assert_eq_size!(Maybe<Box<u8>>, Box<u8>);
