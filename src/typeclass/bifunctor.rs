//! Bifunctor type class - mapping over both channels of a two-sided type.
//!
//! `Outcome<T, E>` is implemented as `Bifunctor<E, T>`: `first` maps the
//! failure channel (like [`Outcome::map_err`]) and `second` maps the success
//! channel (like [`Outcome::map`]), so `second` agrees with `Functor::fmap`.
//!
//! # Laws
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf                                  (identity)
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y)))
//!     == bf.bimap(f1, g1).bimap(f2, g2)                         (composition)
//! bf.bimap(f, g) == bf.first(f).second(g)                        (consistency)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_outcome::data::Outcome;
//! use maybe_outcome::typeclass::Bifunctor;
//!
//! let failed: Outcome<i32, &str> = Outcome::Failure("boom");
//! assert_eq!(failed.bimap(str::len, |n| n * 2), Outcome::Failure(4));
//! ```

use crate::data::Outcome;

/// Two-parameter types that can map both parameters.
pub trait Bifunctor<A, B> {
    /// The same constructor with both parameters replaced.
    type Target<C, D>;

    /// Maps the first parameter with `first_function` and the second with
    /// `second_function`; only the one matching the active variant runs.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Maps only the first parameter.
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C;

    /// Maps only the second parameter.
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D;

    /// Borrowing form of [`bimap`](Self::bimap).
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;
}

impl<T, E> Bifunctor<E, T> for Outcome<T, E> {
    type Target<C, D> = Outcome<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Outcome<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Self::Success(value) => Outcome::Success(second_function(value)),
            Self::Failure(error) => Outcome::Failure(first_function(error)),
        }
    }

    #[inline]
    fn first<C, F>(self, function: F) -> Outcome<T, C>
    where
        F: FnOnce(E) -> C,
    {
        self.map_err(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> Outcome<D, E>
    where
        G: FnOnce(T) -> D,
    {
        self.map(function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Outcome<D, C>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&T) -> D,
    {
        self.as_ref().bimap(first_function, second_function)
    }
}
