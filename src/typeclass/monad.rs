//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_outcome::data::Maybe;
//! use maybe_outcome::typeclass::Monad;
//!
//! fn half(n: i32) -> Maybe<i32> {
//!     if n % 2 == 0 { Maybe::Present(n / 2) } else { Maybe::Absent }
//! }
//!
//! assert_eq!(Maybe::Present(8).flat_map(half).flat_map(half), Maybe::Present(2));
//! assert_eq!(Maybe::Present(6).flat_map(half).flat_map(half), Maybe::Absent);
//! ```

use super::applicative::Applicative;
use crate::data::{Maybe, Outcome};

/// Applicatives whose next step may depend on the previous payload.
pub trait Monad: Applicative {
    /// Feeds the payload to `function` and returns its result; a negative
    /// variant short-circuits without invoking `function`.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences `next` after `self`, discarding the payload of `self`.
    ///
    /// ```rust
    /// use maybe_outcome::data::Maybe;
    /// use maybe_outcome::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::Present(5).then(Maybe::Present("hello")), Maybe::Present("hello"));
    /// assert_eq!(Maybe::<i32>::Absent.then(Maybe::Present("hello")), Maybe::Absent);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.and_then(function)
    }
}

impl<T, E: Clone> Monad for Outcome<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        self.and_then(function)
    }
}
