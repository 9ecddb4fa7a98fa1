//! Applicative type class - combining independent computations.
//!
//! `Applicative` adds [`pure`](Applicative::pure), which lifts a plain value,
//! and [`map2`](Applicative::map2), which combines two independent values.
//! For both instances the first negative variant wins: `Absent` for `Maybe`,
//! the leftmost `Failure` for `Outcome`. Errors are never accumulated.
//!
//! # Laws
//!
//! ```text
//! pure(id).apply(v) == v                                  (identity)
//! pure(f).apply(pure(x)) == pure(f(x))                    (homomorphism)
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)             (interchange)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_outcome::data::{Maybe, Outcome};
//! use maybe_outcome::typeclass::Applicative;
//!
//! let x: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(x, Maybe::Present(42));
//!
//! let first: Outcome<i32, &str> = Outcome::Failure("first");
//! let second: Outcome<i32, &str> = Outcome::Failure("second");
//! assert_eq!(first.map2(second, |a, b| a + b), Outcome::Failure("first"));
//! ```

use super::functor::Functor;
use crate::data::{Maybe, Outcome};

/// Functors that can lift values and combine independent computations.
pub trait Applicative: Functor {
    /// Lifts `value` into the positive variant.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two values with `function` when both are positive.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs two values when both are positive.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |left, right| (left, right))
    }

    /// Keeps the left payload after checking both sides are positive.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |left, _| left)
    }

    /// Keeps the right payload after checking both sides are positive.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, right| right)
    }

    /// Applies a wrapped function to a wrapped value.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip(other).map(|(left, right)| function(left, right))
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

impl<T, E: Clone> Applicative for Outcome<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B, E>, function: F) -> Outcome<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Outcome::Success(left), Outcome::Success(right)) => {
                Outcome::Success(function(left, right))
            }
            (Outcome::Failure(error), _) | (_, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Outcome<B, E>) -> Outcome<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}
