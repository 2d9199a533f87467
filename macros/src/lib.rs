//! The `#[derive(SumType)]` macro behind switchback's match chains.
//!
//! The promise: declare your enum once, get a matchable sum type for free.
//! The derive emits a unit marker type per variant (the *kind*), wires each
//! marker to its slot and payload, and teaches the matcher how to ask which
//! alternative is active. Everything the match builder checks at compile
//! time hangs off the impls generated here.
//!
//! # Generated items
//!
//! For
//!
//! ```ignore
//! #[derive(SumType)]
//! enum Color {
//!     Red(String),
//!     Green(String),
//!     Blue,
//! }
//! ```
//!
//! the macro emits, next to the enum:
//!
//! ```ignore
//! pub mod color_kinds {
//!     pub struct Red;    // Kind<Color, Payload = String, SLOT = 0>
//!     pub struct Green;  // Kind<Color, Payload = String, SLOT = 1>
//!     pub struct Blue;   // Kind<Color, Payload = (),     SLOT = 2>
//! }
//!
//! impl switchback::SumType for Color { /* KIND_COUNT, Vacancies, active_slot */ }
//! ```
//!
//! Named-field variants additionally get a `{Variant}Payload` struct in the
//! kinds module, carrying the variant's fields under their own names.
//!
//! # Attributes
//!
//! - `#[sum_type(module = "...")]` - Override the kinds module name
//!   (default: the enum name in snake case with a `_kinds` suffix)

use proc_macro::TokenStream;

mod codegen;
mod sum_type;

/// Derive macro implementing `switchback::SumType` for an enum.
///
/// # Constraints
///
/// - The input must be an enum with at least one variant.
/// - Generic enums (type, lifetime, or const parameters) are rejected: kind
///   markers are concrete types and a matcher table needs a concrete sum
///   type to dispatch on.
///
/// Violations are reported as errors at the derive site.
#[proc_macro_derive(SumType, attributes(sum_type))]
pub fn derive_sum_type(input: TokenStream) -> TokenStream {
    sum_type::derive(input)
}
