//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` or `Outcome<_, E>` as type
//! constructors directly. [`TypeConstructor`] names the applied type
//! (`Inner`) and the same constructor re-applied to another type
//! (`WithType<B>`), which is enough to state `Functor` and `Monad`.
//!
//! # Example
//!
//! ```rust
//! use maybe_outcome::data::Maybe;
//! use maybe_outcome::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let cleared: Maybe<String> = reset(Maybe::Present(42));
//! assert_eq!(cleared, Maybe::Absent);
//! ```

use crate::data::{Maybe, Outcome};

/// A type constructor applied to `Inner`.
///
/// For any implementor `F`, `<F as TypeConstructor>::WithType<F::Inner>`
/// is `F` itself.
pub trait TypeConstructor {
    /// The type parameter the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

/// `Outcome` is a constructor over its success type; the error type is fixed.
impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maybe_inner_type_is_the_payload() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Maybe<i32>>();
    }

    #[test]
    fn outcome_inner_type_is_the_success_payload() {
        fn assert_inner<T: TypeConstructor<Inner = String>>() {}
        assert_inner::<Outcome<String, u8>>();
    }

    #[test]
    fn outcome_with_type_keeps_the_error_type() {
        fn retype<T: TypeConstructor>(_value: T) -> Option<T::WithType<bool>> {
            None
        }

        let retyped: Option<Outcome<bool, &str>> = retype(Outcome::<i32, &str>::Success(1));
        assert!(retyped.is_none());
    }
}
