#![cfg(feature = "async")]
//! Integration tests for the async bridge.
//!
//! `settle` turns a future resolving to `Result<T, E>` into one resolving to
//! `Outcome<T, E>`; `settle_unwind` turns a panic raised while polling into
//! `Outcome::Failure(Panicked)`.

use maybe_outcome::data::{Outcome, failure, success};
use maybe_outcome::effect::{Panicked, SettleExt, settle, settle_unwind};
use rstest::rstest;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

async fn fetch_answer(fail: bool) -> Result<u32, String> {
    tokio::time::sleep(Duration::from_millis(5)).await;
    if fail {
        Err(String::from("service unavailable"))
    } else {
        Ok(42)
    }
}

// =============================================================================
// settle
// =============================================================================

#[rstest]
#[tokio::test]
async fn settle_resolves_ok_to_success() {
    let settled = settle(async { Ok::<_, &str>(42) }).await;
    assert_eq!(settled, success(42));
}

#[rstest]
#[tokio::test]
async fn settle_resolves_err_to_failure() {
    let settled = settle(async { Err::<i32, _>("boom") }).await;
    assert_eq!(settled, failure("boom"));
}

#[rstest]
#[case::succeeds(false, success(42))]
#[case::fails(true, failure(String::from("service unavailable")))]
#[tokio::test]
async fn settle_waits_for_delayed_completion(
    #[case] fail: bool,
    #[case] expected: Outcome<u32, String>,
) {
    assert_eq!(settle(fetch_answer(fail)).await, expected);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn settle_does_not_add_a_timeout() {
    let settled = settle(async {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok::<_, ()>("late")
    })
    .await;

    assert_eq!(settled, success("late"));
}

#[rstest]
#[tokio::test]
async fn settle_polls_the_wrapped_future_to_completion_once() {
    let polls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&polls);

    let settled = settle(async move {
        counter.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        Ok::<_, String>(1)
    })
    .await;

    assert_eq!(settled, success(1));
    assert_eq!(polls.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test]
async fn settle_composes_with_combinators_after_await() {
    let doubled = settle(fetch_answer(false))
        .await
        .map(|n| n * 2)
        .unwrap_or_default();

    assert_eq!(doubled, 84);
}

#[rstest]
#[tokio::test]
async fn settle_ext_is_available_on_any_try_future() {
    let settled = fetch_answer(true).settle().await;
    assert_eq!(settled.unwrap_err(), "service unavailable");
}

#[rstest]
#[tokio::test]
async fn settle_runs_on_a_spawned_task() {
    let handle = tokio::spawn(settle(fetch_answer(false)));
    let settled = handle.await.unwrap();

    assert_eq!(settled, success(42));
}

// =============================================================================
// settle_unwind
// =============================================================================

#[rstest]
#[tokio::test]
async fn settle_unwind_passes_values_through() {
    let settled = settle_unwind(futures::future::ready("value")).await;
    assert_eq!(settled, success("value"));
}

#[rstest]
#[tokio::test]
async fn settle_unwind_catches_a_str_panic() {
    let settled: Outcome<(), Panicked> = settle_unwind(AssertUnwindSafe(async {
        tokio::task::yield_now().await;
        panic!("exploded while pending");
    }))
    .await;

    let panicked = settled.unwrap_err();
    assert_eq!(panicked.message(), "exploded while pending");
}

#[rstest]
#[tokio::test]
async fn settle_unwind_catches_a_formatted_panic() {
    let code = 7;
    let settled: Outcome<i32, Panicked> = AssertUnwindSafe(async move {
        if code > 0 {
            panic!("exit code {code}");
        }
        code
    })
    .settle_unwind()
    .await;

    assert_eq!(settled.unwrap_err().message(), "exit code 7");
}

#[rstest]
#[tokio::test]
async fn settle_unwind_displays_the_panic_message() {
    let settled: Outcome<(), Panicked> = settle_unwind(AssertUnwindSafe(async {
        panic!("boom");
    }))
    .await;

    assert_eq!(
        settled.unwrap_err().to_string(),
        "pending computation panicked: boom"
    );
}
