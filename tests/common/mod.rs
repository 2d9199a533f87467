//! Shared sum-type fixtures for integration tests.
//!
//! `Color` mirrors the classic three-way example, `Month` gives a wide
//! kind list for fallback coverage, `Shape` exercises every payload shape
//! the derive supports, and `Solo` is the degenerate single-alternative
//! case.

#![allow(dead_code)]

use switchback::SumType;

#[derive(SumType, Debug, Clone, PartialEq)]
pub enum Color {
    Red(String),
    Green(String),
    Blue,
}

#[derive(SumType, Debug, Clone, Copy, PartialEq)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

#[derive(SumType, Debug, Clone, PartialEq)]
pub enum Shape {
    Circle { radius: f64 },
    Segment(f64, f64),
    Square(f64),
    Empty,
}

#[derive(SumType, Debug, Clone, PartialEq)]
pub enum Solo {
    Only(u8),
}

/// The month occupying `slot`, for strategy-driven tests.
///
/// # Panics
/// Panics when `slot >= 12`.
pub fn month_from_slot(slot: usize) -> Month {
    const MONTHS: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];
    MONTHS[slot]
}
