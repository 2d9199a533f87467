//! The contract between a sum type and the matcher.
//!
//! Both traits here are implemented by `#[derive(SumType)]`; hand-written
//! implementations are possible but rarely worth the trouble. The matcher
//! only ever consumes them.

/// A closed sum type: a value that is exactly one of a fixed set of
/// alternative kinds.
///
/// Implemented by `#[derive(SumType)]` on an enum. The derive assigns each
/// variant a slot in declaration order and emits a unit marker type per
/// variant (the *kind*) in a module named after the enum.
pub trait SumType: Sized {
    /// Number of alternative kinds. Always at least 1.
    const KIND_COUNT: usize;

    /// The all-[`Vacant`](crate::slot::Vacant) claim state a fresh matcher
    /// starts from: one flag per alternative, in slot order.
    type Vacancies;

    /// Slot of the currently-active alternative. Always `< KIND_COUNT`.
    fn active_slot(&self) -> usize;
}

/// One alternative kind of the sum type `E`.
///
/// Kind markers are zero-sized; they are passed to
/// [`Matcher::claim`](crate::Matcher::claim) by value purely to name which
/// alternatives a handler covers.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an alternative kind of `{E}`",
    label = "unknown alternative kind for this sum type",
    note = "kinds are the marker types generated by `#[derive(SumType)]` on `{E}`"
)]
pub trait Kind<E: SumType> {
    /// What a handler for this alternative receives: `()` for unit variants,
    /// the single field for one-field tuple variants, a tuple for wider
    /// tuple variants, and a generated payload struct for named-field
    /// variants.
    type Payload;

    /// Type-level slot index, used for claim bookkeeping.
    type Index;

    /// Runtime slot index, used for handler-table dispatch. Mirrors `Index`.
    const SLOT: usize;

    /// Extracts this alternative's payload from `value`.
    ///
    /// Only called by the matcher, and only when this alternative is the
    /// active one.
    fn payload(value: E) -> Self::Payload;
}
