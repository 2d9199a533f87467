//! Compile-time exhaustiveness-checked match builder for Rust enums.
//!
//! `switchback` dispatches on which alternative of a closed sum type is
//! currently held, without a runtime-checked default branch. Whether every
//! alternative has a handler — or exactly one fallback covers the rest — is
//! decided by the type checker, before any program runs. A chain that could
//! miss an alternative, claim one twice, or carry a fallback that can never
//! fire simply does not compile.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌───────────────┐
//! │   kind.rs    │────▶│  kindset.rs   │────▶│  matcher.rs   │
//! │ (SumType,    │     │ (claim args:  │     │ (match_on,    │
//! │  Kind)       │     │  kind tuples) │     │  claim, run)  │
//! └──────────────┘     └───────────────┘     └───────────────┘
//!        │                     │                     │
//!        ▼                     ▼                     ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                        slot.rs                           │
//! │   (type-level claim flags: TakeSlot, FullyClaimed,       │
//! │    HasVacancy — the whole static rulebook)               │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! `handler.rs` supplies the two handler call shapes (payload or
//! no-argument) and the erased slot-indexed dispatch table; the
//! `#[derive(SumType)]` macro (the `switchback-macros` member crate)
//! generates the per-enum kind markers the chain is written in terms of.
//!
//! # Usage
//!
//! ```
//! use switchback::{match_on, SumType};
//!
//! #[derive(SumType)]
//! enum Shape {
//!     Circle { radius: f64 },
//!     Square(f64),
//!     Empty,
//! }
//! use shape_kinds::{Circle, CirclePayload, Empty, Square};
//!
//! fn main() {
//!     let area = match_on(Shape::Square(3.0))
//!         .claim(Circle, |c: CirclePayload| c.radius * c.radius * std::f64::consts::PI)
//!         .claim(Square, |side: f64| side * side)
//!         .claim(Empty, || 0.0)
//!         .run();
//!     assert_eq!(area, 9.0);
//! }
//! ```
//!
//! With a fallback covering the unclaimed alternatives:
//!
//! ```
//! use switchback::{match_on, SumType};
//!
//! #[derive(SumType)]
//! enum Shape {
//!     Circle { radius: f64 },
//!     Square(f64),
//!     Empty,
//! }
//! use shape_kinds::Square;
//!
//! fn main() {
//!     let label = match_on(Shape::Empty)
//!         .claim(Square, || "square")
//!         .with_fallback(|| "something else")
//!         .run();
//!     assert_eq!(label, "something else");
//! }
//! ```
//!
//! # Construction errors
//!
//! Every misuse is rejected before dispatch, at the call site that caused
//! it:
//!
//! | Mistake | Rejected at | Enforced by |
//! |---------|-------------|-------------|
//! | Claiming a kind of another sum type | `claim` | [`Kind`] bound |
//! | Claiming the same kind twice | `claim` | [`slot::TakeSlot`] bound |
//! | Handler with the wrong signature or result type | `claim` / `with_fallback` | [`Handler`] bound |
//! | Unclaimed alternatives and no fallback | `run` | [`slot::FullyClaimed`] bound |
//! | Fallback with nothing left to cover | `run` | [`slot::HasVacancy`] bound |
//! | Claim or second fallback after a fallback | call site | method absent on that state |
//! | Reusing a consumed chain | call site | move semantics |
//!
//! Once `run` type-checks, dispatch cannot fail: the active alternative has
//! exactly one reachable handler by construction.
//!
//! # Design notes
//!
//! - Each operation consumes the matcher and returns a new one; claim state
//!   lives in the type, so the checks cost nothing at runtime and stale
//!   intermediate builders are unusable.
//! - Dispatch is a direct slot lookup into a handler table, not a scan of
//!   registration order.
//! - Chains are independent value graphs; nothing is shared between them,
//!   and the matched value is never mutated or re-copied along the chain.

// Module declarations
mod contracts;
mod handler;
mod kind;
mod kindset;
mod matcher;
pub mod slot;

pub(crate) use handler::BoxedHandler;

// Re-exports for public API
pub use handler::{Handler, HandlerTable, NoPayload, WithPayload};
pub use kind::{Kind, SumType};
pub use kindset::{KindSet, Many, One};
pub use matcher::{match_on, Fallback, Matcher, NoFallback};

/// Derives [`SumType`](trait@SumType) for an enum.
///
/// Generates, next to the enum:
///
/// - a module named after the enum in snake case with a `_kinds` suffix
///   (override with `#[sum_type(module = "...")]`), containing one unit
///   marker type per variant plus a `{Variant}Payload` struct for each
///   named-field variant;
/// - [`Kind`] impls mapping each marker to its slot and payload;
/// - the [`SumType`](trait@SumType) impl itself.
///
/// Variant payloads follow the variant shape: `()` for unit variants, the
/// field itself for one-field tuple variants, a tuple for wider tuple
/// variants, and the generated payload struct for named-field variants.
///
/// Only non-generic enums with at least one variant are accepted; anything
/// else is reported as an error at the derive site.
pub use switchback_macros::SumType;
