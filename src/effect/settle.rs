//! Settling a pending computation into an [`Outcome`].
//!
//! [`settle`] adapts a future that resolves to `Result<T, E>` into one that
//! always completes with an `Outcome<T, E>`. [`settle_unwind`] does the same
//! for a future whose abnormal termination is a panic, catching it as an
//! `Outcome::Failure(Panicked)`.
//!
//! Neither adapter retries, times out or cancels: each observes exactly one
//! completion of the wrapped future and reshapes it.
//!
//! # Examples
//!
//! ```rust
//! use maybe_outcome::data::{failure, success, Outcome};
//! use maybe_outcome::effect::settle;
//!
//! # futures::executor::block_on(async {
//! let settled: Outcome<i32, &str> = settle(async { Ok::<_, &str>(42) }).await;
//! assert_eq!(settled, success(42));
//!
//! let settled: Outcome<i32, &str> = settle(async { Err::<i32, _>("boom") }).await;
//! assert_eq!(settled, failure("boom"));
//! # });
//! ```

use std::any::Any;
use std::future::Future;
use std::panic::UnwindSafe;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{CatchUnwind, FutureExt, TryFuture};
use futures::ready;
use pin_project_lite::pin_project;
use thiserror::Error;

use crate::data::Outcome;

pin_project! {
    /// Future returned by [`settle`] and [`SettleExt::settle`].
    ///
    /// Resolves to `Outcome::Success(value)` when the wrapped future yields
    /// `Ok(value)` and to `Outcome::Failure(error)` when it yields `Err(error)`.
    #[derive(Debug)]
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct Settle<F> {
        #[pin]
        future: F,
    }
}

pin_project! {
    /// Future returned by [`settle_unwind`] and [`SettleExt::settle_unwind`].
    #[derive(Debug)]
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct SettleUnwind<F> {
        #[pin]
        inner: CatchUnwind<F>,
    }
}

/// A panic caught while polling a future wrapped by [`settle_unwind`].
///
/// # Examples
///
/// ```rust
/// use maybe_outcome::effect::settle_unwind;
/// use std::panic::AssertUnwindSafe;
///
/// fn explode() -> i32 {
///     panic!("boom")
/// }
///
/// # futures::executor::block_on(async {
/// let settled = settle_unwind(AssertUnwindSafe(async { explode() })).await;
/// let error = settled.unwrap_err();
/// assert_eq!(error.message(), "boom");
/// assert_eq!(error.to_string(), "pending computation panicked: boom");
/// # });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("pending computation panicked: {message}")]
pub struct Panicked {
    message: String,
}

impl Panicked {
    const OPAQUE_PAYLOAD: &'static str = "opaque panic payload";

    /// Returns the panic message, or `"opaque panic payload"` when the panic
    /// payload was neither a `&str` nor a `String`.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&'static str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| Self::OPAQUE_PAYLOAD.to_string());
        Self { message }
    }
}

/// Adapts a future resolving to `Result<T, E>` into one resolving to
/// `Outcome<T, E>`.
///
/// The returned future never fails on its own; a failure of the wrapped
/// computation becomes data.
#[inline]
pub fn settle<F>(future: F) -> Settle<F>
where
    F: TryFuture,
{
    Settle { future }
}

/// Adapts any future into one resolving to `Outcome<F::Output, Panicked>`,
/// catching a panic raised while the wrapped future is polled.
///
/// The wrapped future must be [`UnwindSafe`]; wrap it in
/// [`AssertUnwindSafe`](std::panic::AssertUnwindSafe) when it captures
/// references to shared state.
#[inline]
pub fn settle_unwind<F>(future: F) -> SettleUnwind<F>
where
    F: Future + UnwindSafe,
{
    SettleUnwind {
        inner: future.catch_unwind(),
    }
}

impl<F> Future for Settle<F>
where
    F: TryFuture,
{
    type Output = Outcome<F::Ok, F::Error>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let outcome = Outcome::from(ready!(this.future.try_poll(context)));
        if outcome.is_failure() {
            trace_failure::<F::Error>();
        }
        Poll::Ready(outcome)
    }
}

impl<F> Future for SettleUnwind<F>
where
    F: Future + UnwindSafe,
{
    type Output = Outcome<F::Output, Panicked>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        match ready!(this.inner.poll(context)) {
            Ok(value) => Poll::Ready(Outcome::Success(value)),
            Err(payload) => {
                let panicked = Panicked::from_payload(payload.as_ref());
                trace_panic(&panicked);
                Poll::Ready(Outcome::Failure(panicked))
            }
        }
    }
}

/// Method-call forms of [`settle`] and [`settle_unwind`] for every future.
///
/// # Examples
///
/// ```rust
/// use maybe_outcome::effect::SettleExt;
///
/// # futures::executor::block_on(async {
/// let settled = async { "7".parse::<i32>() }.settle().await;
/// assert_eq!(settled.unwrap(), 7);
/// # });
/// ```
pub trait SettleExt: Future {
    /// See [`settle`].
    #[inline]
    fn settle(self) -> Settle<Self>
    where
        Self: Sized + TryFuture,
    {
        settle(self)
    }

    /// See [`settle_unwind`].
    #[inline]
    fn settle_unwind(self) -> SettleUnwind<Self>
    where
        Self: Sized + UnwindSafe,
    {
        settle_unwind(self)
    }
}

impl<F: Future + ?Sized> SettleExt for F {}

#[cfg(feature = "tracing")]
fn trace_failure<E>() {
    tracing::debug!(
        error_type = std::any::type_name::<E>(),
        "pending computation settled as failure"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
const fn trace_failure<E>() {}

#[cfg(feature = "tracing")]
fn trace_panic(panicked: &Panicked) {
    tracing::warn!(panic_message = panicked.message(), "pending computation panicked");
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
const fn trace_panic(_panicked: &Panicked) {}
