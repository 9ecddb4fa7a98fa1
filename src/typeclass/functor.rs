//! Functor type class - mapping over the payload while keeping the shape.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! Both laws hold for `Maybe` and `Outcome` without side conditions: `fmap`
//! is the pure map, never the null-collapsing [`Maybe::map_nullable`].
//!
//! # Examples
//!
//! ```rust
//! use maybe_outcome::data::{Maybe, Outcome};
//! use maybe_outcome::typeclass::Functor;
//!
//! let length: Maybe<usize> = Maybe::Present("four").fmap(str::len);
//! assert_eq!(length, Maybe::Present(4));
//!
//! let failed: Outcome<i32, &str> = Outcome::Failure("boom");
//! assert_eq!(failed.fmap(|n| n + 1), Outcome::Failure("boom"));
//! ```

use super::higher::TypeConstructor;
use crate::data::{Maybe, Outcome};

/// Types whose payload can be transformed by a function.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the payload, if any.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference to the payload, leaving `self` intact.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the payload with `value`.
    ///
    /// ```rust
    /// use maybe_outcome::data::Maybe;
    /// use maybe_outcome::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::Present(5).replace("replaced"), Maybe::Present("replaced"));
    /// assert_eq!(Maybe::<i32>::Absent.replace("replaced"), Maybe::Absent);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the payload, keeping only the variant.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

/// Borrowing a failed `Outcome` clones its error into the result.
impl<T, E: Clone> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(function(value)),
            Outcome::Failure(error) => Outcome::Failure(error.clone()),
        }
    }
}
