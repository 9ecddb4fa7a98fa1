//! The two sum types and their combinators.
//!
//! - [`Maybe`]: a value that is `Present` or `Absent`
//! - [`Outcome`]: a computation that ended in `Success` or `Failure`
//! - [`UnwrapError`]: raised when an unwrap-family call meets the wrong variant
//!
//! `Maybe` is the leaf type. `Outcome` depends on it only for the bridges
//! [`Outcome::ok`] and [`Outcome::err`]; [`Maybe::ok_or`] goes the other way.
//!
//! # Examples
//!
//! ```rust
//! use maybe_outcome::data::{absent, failure, present, success};
//!
//! assert_eq!(success::<_, &str>(42).ok(), present(42));
//! assert_eq!(success::<i32, &str>(42).err(), absent());
//! assert_eq!(failure::<i32, _>("boom").ok(), absent());
//! assert_eq!(failure::<i32, _>("boom").err(), present("boom"));
//! ```

mod error;
mod maybe;
mod outcome;

pub use error::UnwrapError;
pub use maybe::{Maybe, MaybeArms, absent, from_nullable, present};
pub use outcome::{Outcome, OutcomeArms, failure, success};
