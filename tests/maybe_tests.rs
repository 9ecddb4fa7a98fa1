//! Unit tests for the Maybe<T> type.
//!
//! Maybe represents presence or absence of a value:
//! - `Present(T)`: exactly one value
//! - `Absent`: no value
//!
//! Tests cover construction, the unwrap family, mapping, the boolean-like
//! combinators and exhaustive matching.

use maybe_outcome::data::{Maybe, MaybeArms, UnwrapError, absent, from_nullable, present};
use rstest::rstest;
use std::cell::{Cell, RefCell};

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn from_nullable_returns_absent_for_none() {
    assert!(from_nullable(None::<i32>).is_absent());
}

#[rstest]
fn from_nullable_returns_present_for_a_value() {
    assert!(from_nullable(Some(12)).is_present());
}

#[rstest]
fn option_conversions_preserve_the_variant() {
    let present_value: Maybe<i32> = Some(4).into();
    let absent_value: Maybe<i32> = None.into();

    assert_eq!(present_value, present(4));
    assert_eq!(absent_value, absent());
    assert_eq!(Option::<i32>::from(present(4)), Some(4));
}

#[rstest]
fn absent_is_shared_across_payload_types() {
    assert_eq!(Maybe::<i32>::ABSENT, absent::<i32>());
    assert_eq!(Maybe::<String>::ABSENT, Maybe::default());
    assert_eq!(std::mem::size_of::<Maybe<&u64>>(), std::mem::size_of::<&u64>());
}

// =============================================================================
// Unwrap Family
// =============================================================================

#[rstest]
fn expect_unwraps_present_value() {
    assert_eq!(present(42).expect("boom"), 42);
}

#[rstest]
#[should_panic(expected = "boom")]
fn expect_panics_on_absent() {
    absent::<i32>().expect("boom");
}

#[rstest]
fn unwrap_unwraps_present_value() {
    assert_eq!(present(42).unwrap(), 42);
}

#[rstest]
#[should_panic(expected = "called unwrap on absent value")]
fn unwrap_panics_on_absent() {
    absent::<i32>().unwrap();
}

#[rstest]
fn try_unwrap_reports_the_fixed_message() {
    assert_eq!(
        absent::<i32>().try_unwrap(),
        Err(UnwrapError::Absent {
            message: "called unwrap on absent value".to_string()
        })
    );
    assert_eq!(present(1).try_unwrap(), Ok(1));
}

#[rstest]
fn try_expect_reports_the_caller_message() {
    let error = absent::<i32>().try_expect("user id").unwrap_err();
    assert_eq!(error.message(), "user id");
    assert_eq!(error.payload(), None);
}

#[rstest]
#[case(present(42), 42)]
#[case(absent(), 12)]
fn unwrap_or_returns_value_or_default(#[case] value: Maybe<i32>, #[case] expected: i32) {
    assert_eq!(value.unwrap_or(12), expected);
}

#[rstest]
fn unwrap_or_else_invokes_default_only_for_absent() {
    let calls = Cell::new(0);
    let default = || {
        calls.set(calls.get() + 1);
        12
    };

    assert_eq!(present(42).unwrap_or_else(default), 42);
    assert_eq!(calls.get(), 0);
    assert_eq!(absent().unwrap_or_else(default), 12);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn unwrap_or_default_falls_back_to_default() {
    assert_eq!(absent::<String>().unwrap_or_default(), "");
    assert_eq!(present(String::from("x")).unwrap_or_default(), "x");
}

// =============================================================================
// Mapping
// =============================================================================

#[rstest]
fn map_returns_the_mapped_value_for_present() {
    let actual = present(42).map(|x| format!("x is {x}"));
    assert_eq!(actual.unwrap(), "x is 42");
}

#[rstest]
fn map_returns_absent_for_absent() {
    let actual = absent::<i32>().map(|x| format!("x is {x}"));
    assert!(actual.is_absent());
}

#[rstest]
fn map_keeps_a_missing_result_as_payload() {
    let actual = present(42).map(|_| None::<i32>);
    assert_eq!(actual, present(None));
}

#[rstest]
fn map_nullable_collapses_a_missing_result_to_absent() {
    assert!(present(42).map_nullable(|_| None::<i32>).is_absent());
}

#[rstest]
fn map_nullable_keeps_falsy_results() {
    assert_eq!(present(42).map_nullable(|_| Some(0)), present(0));
    assert_eq!(present(42).map_nullable(|_| Some("")), present(""));
    assert_eq!(present(42).map_nullable(|_| Some(false)), present(false));
}

#[rstest]
fn map_or_returns_mapped_value_or_default() {
    assert_eq!(present("foo").map_or(42, str::len), 3);
    assert_eq!(absent::<&str>().map_or(42, str::len), 42);
}

#[rstest]
fn map_or_else_returns_mapped_value_or_lazy_default() {
    assert_eq!(present("foo").map_or_else(|| 42, str::len), 3);
    assert_eq!(absent::<&str>().map_or_else(|| 42, str::len), 42);
}

// =============================================================================
// and / and_then
// =============================================================================

#[rstest]
fn and_returns_absent_for_present_and_absent() {
    assert!(present(2).and(absent::<&str>()).is_absent());
}

#[rstest]
fn and_returns_absent_for_absent_and_present() {
    assert!(absent::<i32>().and(present("foo")).is_absent());
}

#[rstest]
fn and_returns_other_for_present_and_present() {
    assert_eq!(present(2).and(present("foo")).unwrap(), "foo");
}

#[rstest]
fn and_returns_absent_for_absent_and_absent() {
    assert!(absent::<i32>().and(absent::<&str>()).is_absent());
}

#[rstest]
fn and_evaluates_its_argument_even_when_short_circuited() {
    let evaluations = Cell::new(0);
    let other = || {
        evaluations.set(evaluations.get() + 1);
        present("side effect")
    };

    assert!(absent::<i32>().and(other()).is_absent());
    assert_eq!(evaluations.get(), 1);
}

#[rstest]
fn and_then_flat_maps_present_and_absent() {
    let square = |x: i32| present(x * x);
    let nope = |_: i32| absent::<i32>();

    assert_eq!(present(2).and_then(square).and_then(square).unwrap(), 16);
    assert!(present(2).and_then(square).and_then(nope).is_absent());
    assert!(present(2).and_then(nope).and_then(square).is_absent());
    assert!(absent().and_then(square).and_then(square).is_absent());
}

#[rstest]
fn and_then_does_not_invoke_the_function_on_absent() {
    let invoked = Cell::new(false);
    let _ = absent::<i32>().and_then(|x| {
        invoked.set(true);
        present(x)
    });

    assert!(!invoked.get());
}

// =============================================================================
// or / or_else
// =============================================================================

#[rstest]
fn or_returns_the_present_over_absent() {
    assert_eq!(present(2).or(absent()).unwrap(), 2);
}

#[rstest]
fn or_returns_the_alternative_to_absent() {
    assert_eq!(absent().or(present(2)).unwrap(), 2);
}

#[rstest]
fn or_returns_the_first_of_two_presents() {
    assert_eq!(present(2).or(present(100)).unwrap(), 2);
}

#[rstest]
fn or_returns_absent_for_two_absents() {
    assert!(absent::<i32>().or(absent()).is_absent());
}

#[rstest]
fn or_evaluates_its_argument_even_when_self_is_present() {
    let evaluations = Cell::new(0);
    let other = || {
        evaluations.set(evaluations.get() + 1);
        present(100)
    };

    assert_eq!(present(2).or(other()), present(2));
    assert_eq!(evaluations.get(), 1);
}

#[rstest]
fn or_else_returns_self_when_present() {
    assert_eq!(present(2).or_else(|| present(42)).unwrap(), 2);
}

#[rstest]
fn or_else_returns_the_default_present_value() {
    assert_eq!(absent().or_else(|| present(42)).unwrap(), 42);
}

#[rstest]
fn or_else_returns_the_default_absent_value() {
    assert!(absent::<i32>().or_else(absent).is_absent());
}

// =============================================================================
// Matching
// =============================================================================

#[rstest]
fn match_with_dispatches_present() {
    let value = present(2).match_with(MaybeArms {
        present: |v| v * 2,
        absent: || 42,
    });
    assert_eq!(value, 4);
}

#[rstest]
fn match_with_dispatches_absent() {
    let value = absent::<i32>().match_with(MaybeArms {
        present: |v| v * 2,
        absent: || 42,
    });
    assert_eq!(value, 42);
}

#[rstest]
fn match_with_allows_unit_handlers() {
    let seen = RefCell::new(Vec::new());
    present(2).match_with(MaybeArms {
        present: |value| seen.borrow_mut().push(value),
        absent: || panic!("should not match absent"),
    });

    assert_eq!(*seen.borrow(), vec![2]);
}

#[rstest]
#[case::zero(present(0))]
#[case::negative(present(-1))]
fn match_with_selects_by_variant_not_by_payload(#[case] value: Maybe<i32>) {
    let arm = value.match_with(MaybeArms {
        present: |_| "present",
        absent: || "absent",
    });
    assert_eq!(arm, "present");
}

#[rstest]
fn match_with_ignores_falsy_payloads() {
    assert!(present(false).fold(|_| true, || false));
    assert!(present("").fold(|_| true, || false));
}

// =============================================================================
// Bridges and utilities
// =============================================================================

#[rstest]
fn ok_or_bridges_to_outcome() {
    use maybe_outcome::data::{failure, success};

    assert_eq!(present(1).ok_or("missing"), success(1));
    assert_eq!(absent::<i32>().ok_or("missing"), failure("missing"));
    assert_eq!(absent::<i32>().ok_or_else(|| "lazy"), failure("lazy"));
}

#[rstest]
fn zip_pairs_two_present_values() {
    assert_eq!(present(1).zip(present("a")), present((1, "a")));
    assert_eq!(present(1).zip(absent::<&str>()), absent());
}

#[rstest]
fn flatten_removes_one_level() {
    assert_eq!(present(present(3)).flatten(), present(3));
    assert_eq!(present(absent::<i32>()).flatten(), absent());
    assert_eq!(absent::<Maybe<i32>>().flatten(), absent());
}

#[rstest]
fn is_present_and_checks_the_payload() {
    assert!(present(3).is_present_and(|x| x > 2));
    assert!(!present(1).is_present_and(|x| x > 2));
    assert!(!absent::<i32>().is_present_and(|x| x > 2));
}
