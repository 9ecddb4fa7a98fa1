//! Type class instances for [`Maybe`](crate::data::Maybe) and
//! [`Outcome`](crate::data::Outcome).
//!
//! - [`Functor`]: mapping over the payload
//! - [`Applicative`]: lifting values and combining independent computations
//! - [`Monad`]: sequencing dependent computations
//! - [`Bifunctor`]: mapping both channels of an `Outcome`
//!
//! The inherent combinators (`map`, `and_then`, `map_err`) are the primary
//! API; these traits exist so generic code can be written once over both
//! types.
//!
//! ## Higher-Kinded Types Emulation
//!
//! [`TypeConstructor`] emulates higher-kinded types with Generic
//! Associated Types, which lets `Functor` and `Monad` talk about
//! `Maybe<_>` and `Outcome<_, E>` as constructors.
//!
//! # Examples
//!
//! ```rust
//! use maybe_outcome::data::{Maybe, Outcome};
//! use maybe_outcome::typeclass::{Monad, TypeConstructor};
//!
//! fn twice<M>(value: M) -> M
//! where
//!     M: Monad<Inner = i32> + TypeConstructor<WithType<i32> = M>,
//! {
//!     value.flat_map::<i32, _>(|n| M::pure(n * 2))
//! }
//!
//! assert_eq!(twice(Maybe::Present(4)), Maybe::Present(8));
//! assert_eq!(twice(Outcome::<i32, ()>::Success(4)), Outcome::Success(8));
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
