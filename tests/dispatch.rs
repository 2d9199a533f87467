//! Behavior tests for the match builder.
//!
//! Every chain here compiles, so these tests only pin down the runtime
//! half of the contract: which handler runs, what it receives, and that it
//! runs exactly once. The chains that must *not* compile live as
//! `compile_fail` doctests on the public API.

mod common;

use common::color_kinds::{Blue, Green, Red};
use common::month_kinds::{August, July, June};
use common::shape_kinds::{Circle, CirclePayload, Empty, Segment, Square};
use common::solo_kinds::Only;
use common::{Color, Month, Shape, Solo};
use std::cell::Cell;
use switchback::match_on;

// ============================================================================
// EXHAUSTIVE CHAINS
// ============================================================================

#[test]
fn exhaustive_chain_dispatches_to_active_handler() {
    let result = match_on(Color::Green("green".to_string()))
        .claim(Red, |name: String| name)
        .claim(Green, |name: String| name)
        .claim(Blue, || "blue".to_string())
        .run();

    assert_eq!(result, "green");
}

#[test]
fn claim_order_has_no_effect_on_dispatch() {
    let build = |color: Color| {
        match_on(color)
            .claim(Blue, || "blue")
            .claim(Red, || "red")
            .claim(Green, || "green")
            .run()
    };

    assert_eq!(build(Color::Red(String::new())), "red");
    assert_eq!(build(Color::Green(String::new())), "green");
    assert_eq!(build(Color::Blue), "blue");
}

#[test]
fn identical_chains_give_equal_results() {
    let color = Color::Red("crimson".to_string());

    let run = |c: Color| {
        match_on(c)
            .claim(Red, |name: String| name.len())
            .claim(Green, |name: String| name.len())
            .claim(Blue, || 0)
            .run()
    };

    assert_eq!(run(color.clone()), run(color));
}

#[test]
fn single_alternative_sum_type_dispatches() {
    let doubled = match_on(Solo::Only(21))
        .claim(Only, |v: u8| v * 2)
        .run();

    assert_eq!(doubled, 42);
}

// ============================================================================
// FALLBACK
// ============================================================================

#[test]
fn fallback_covers_unclaimed_alternatives() {
    let result = match_on(Color::Blue)
        .claim(Red, || 0)
        .with_fallback(|| -1)
        .run();

    assert_eq!(result, -1);
}

#[test]
fn fallback_is_not_invoked_for_claimed_alternatives() {
    let result = match_on(Color::Red("red".to_string()))
        .claim(Red, || 0)
        .with_fallback(|| -1)
        .run();

    assert_eq!(result, 0);
}

#[test]
fn fallback_receives_the_whole_sum_value() {
    let result = match_on(Color::Green("lime".to_string()))
        .claim(Red, || "red".to_string())
        .with_fallback(|value: Color| format!("unhandled: {:?}", value))
        .run();

    assert_eq!(result, "unhandled: Green(\"lime\")");
}

#[test]
fn month_good_weather_uses_fallback_for_the_off_season() {
    let good_weather = |month: Month| {
        match_on(month)
            .claim((June, July, August), || true)
            .with_fallback(|| false)
            .run()
    };

    assert!(!good_weather(Month::February));
    assert!(good_weather(Month::July));
}

// ============================================================================
// MULTI-KIND CLAIMS
// ============================================================================

#[test]
fn multi_kind_claim_is_sugar_for_individual_claims() {
    let chained = |color: Color| {
        match_on(color)
            .claim(Red, |name: String| name)
            .claim(Green, |name: String| name)
            .claim(Blue, || "blue".to_string())
            .run()
    };
    let tupled = |color: Color| {
        match_on(color)
            .claim((Red, Green), |name: String| name)
            .claim(Blue, || "blue".to_string())
            .run()
    };

    for color in [
        Color::Red("red".to_string()),
        Color::Green("green".to_string()),
        Color::Blue,
    ] {
        assert_eq!(chained(color.clone()), tupled(color));
    }
}

#[test]
fn multi_kind_claim_with_no_arg_handler_spans_payload_shapes() {
    // Red carries a String and Blue nothing; only a no-argument handler
    // fits both.
    let classify = |color: Color| {
        match_on(color)
            .claim((Red, Blue), || "not green")
            .claim(Green, || "green")
            .run()
    };

    assert_eq!(classify(Color::Blue), "not green");
    assert_eq!(classify(Color::Green(String::new())), "green");
}

#[test]
fn four_kind_tuple_claims_the_whole_sum_type() {
    let result = match_on(Shape::Square(2.0))
        .claim((Circle, Segment, Square, Empty), || "shape")
        .run();

    assert_eq!(result, "shape");
}

// ============================================================================
// HANDLER SIGNATURES AND PAYLOADS
// ============================================================================

#[test]
fn no_arg_handler_equivalent_to_ignoring_the_payload() {
    let ignoring = match_on(Color::Green("unused".to_string()))
        .claim(Red, |_: String| 7)
        .claim(Green, |_: String| 7)
        .claim(Blue, || 7)
        .run();
    let no_arg = match_on(Color::Green("unused".to_string()))
        .claim(Red, || 7)
        .claim(Green, || 7)
        .claim(Blue, || 7)
        .run();

    assert_eq!(ignoring, no_arg);
}

#[test]
fn named_field_variant_yields_a_payload_struct() {
    let area = match_on(Shape::Circle { radius: 2.0 })
        .claim(Circle, |c: CirclePayload| c.radius * c.radius)
        .claim(Segment, || 0.0)
        .claim(Square, || 0.0)
        .claim(Empty, || 0.0)
        .run();

    assert_eq!(area, 4.0);
}

#[test]
fn multi_field_tuple_variant_yields_a_tuple_payload() {
    let length = match_on(Shape::Segment(3.0, 4.0))
        .claim(Segment, |(a, b): (f64, f64)| (a * a + b * b).sqrt())
        .with_fallback(|| 0.0)
        .run();

    assert_eq!(length, 5.0);
}

#[test]
fn handlers_can_borrow_from_the_environment() {
    let prefix = String::from("color: ");

    let result = match_on(Color::Red("red".to_string()))
        .claim(Red, |name: String| format!("{prefix}{name}"))
        .claim(Green, |name: String| format!("{prefix}{name}"))
        .claim(Blue, || format!("{prefix}blue"))
        .run();

    assert_eq!(result, "color: red");
}

// ============================================================================
// EXACTLY-ONCE INVOCATION
// ============================================================================

#[test]
fn exactly_one_handler_runs_exactly_once() {
    let calls = Cell::new(0u32);

    let result = match_on(Color::Green("green".to_string()))
        .claim(Red, || {
            calls.set(calls.get() + 1);
            "red"
        })
        .claim(Green, || {
            calls.set(calls.get() + 1);
            "green"
        })
        .claim(Blue, || {
            calls.set(calls.get() + 1);
            "blue"
        })
        .run();

    assert_eq!(result, "green");
    assert_eq!(calls.get(), 1);
}

#[test]
fn fallback_dispatch_also_runs_exactly_once() {
    let explicit = Cell::new(0u32);
    let fallen_back = Cell::new(0u32);

    let result = match_on(Color::Blue)
        .claim(Red, || {
            explicit.set(explicit.get() + 1);
            "red"
        })
        .with_fallback(|| {
            fallen_back.set(fallen_back.get() + 1);
            "other"
        })
        .run();

    assert_eq!(result, "other");
    assert_eq!(explicit.get(), 0);
    assert_eq!(fallen_back.get(), 1);
}
