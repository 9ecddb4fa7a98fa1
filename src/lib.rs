//! # maybe-outcome
//!
//! Optionality and fallibility as plain Rust sum types, with a closed and
//! lawful set of combinators.
//!
//! ## Overview
//!
//! - **[`Maybe<T>`](data::Maybe)**: a value is `Present` or `Absent`
//! - **[`Outcome<T, E>`](data::Outcome)**: a computation ended in `Success`
//!   or `Failure`
//! - **Bridges**: [`Outcome::ok`](data::Outcome::ok),
//!   [`Outcome::err`](data::Outcome::err), [`Maybe::ok_or`](data::Maybe::ok_or)
//! - **Async bridge**: [`effect::settle`] turns a future resolving to
//!   `Result<T, E>` into one resolving to `Outcome<T, E>`
//! - **Type classes**: `Functor`, `Applicative`, `Monad` and `Bifunctor`
//!   instances for generic code
//!
//! [`Maybe::map`](data::Maybe::map) is the plain functor map. To turn a
//! callback's `None` into `Absent`, use
//! [`Maybe::map_nullable`](data::Maybe::map_nullable); wrap an incoming
//! `Option` with [`from_nullable`](data::from_nullable).
//!
//! Failure is data. The only panics come from the unwrap family used on the
//! wrong variant, and each of those has a `try_*` twin returning
//! [`UnwrapError`](data::UnwrapError) instead.
//!
//! ## Feature Flags
//!
//! - `typeclass`: type class traits and instances (default)
//! - `async`: the async bridge (default)
//! - `serde`: `Serialize`/`Deserialize` for both types
//! - `tracing`: `tracing` events from the async bridge
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use maybe_outcome::prelude::*;
//!
//! fn parse_port(raw: Option<&str>) -> Outcome<u16, String> {
//!     from_nullable(raw)
//!         .ok_or_else(|| "port is missing".to_string())
//!         .and_then(|text| text.parse::<u16>().map_err(|e| e.to_string()).into())
//! }
//!
//! assert_eq!(parse_port(Some("8080")), success(8080));
//! assert_eq!(parse_port(None).unwrap_err(), "port is missing");
//! assert!(parse_port(Some("http")).is_failure());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use maybe_outcome::prelude::*;
///
/// let value: Maybe<i32> = present(1);
/// assert!(value.is_present());
/// ```
pub mod prelude {
    pub use crate::data::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "async")]
    pub use crate::effect::*;
}

pub mod data;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "async")]
pub mod effect;
