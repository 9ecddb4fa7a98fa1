//! Bridging asynchronous computations into [`Outcome`](crate::data::Outcome).
//!
//! This is the only place the crate suspends. A bridged future is observed
//! until its single completion and reshaped; there is no scheduler, retry,
//! timeout or cancellation here.
//!
//! - [`settle`]: `Future<Output = Result<T, E>>` to `Future<Output = Outcome<T, E>>`
//! - [`settle_unwind`]: a panicking future to `Future<Output = Outcome<T, Panicked>>`
//! - [`SettleExt`]: both as methods on any future
//!
//! With the `tracing` feature, failures and caught panics are reported as
//! `debug` and `warn` events respectively.

mod settle;

pub use settle::{Panicked, Settle, SettleExt, SettleUnwind, settle, settle_unwind};
