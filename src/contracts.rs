//! Debug-mode contracts re-stating the statically proven invariants.
//!
//! Everything the matcher guarantees is enforced by the type system before
//! dispatch; these checks exist so that a bug in a hand-written `SumType`
//! impl (the derive cannot produce one) fails loudly during development.
//!
//! All checks use `debug_assert!` and are zero-cost in release builds.

/// The active slot reported by `SumType::active_slot` must index into the
/// handler table.
#[inline]
pub(crate) fn check_active_slot(slot: usize, kind_count: usize) {
    debug_assert!(
        slot < kind_count,
        "Contract violation: active_slot {} >= KIND_COUNT {}",
        slot,
        kind_count
    );
}

/// A slot index handed to the handler table must be in range.
#[inline]
pub(crate) fn check_slot_in_range(slot: usize, table_len: usize) {
    debug_assert!(
        slot < table_len,
        "Contract violation: slot {} outside handler table of {} slots",
        slot,
        table_len
    );
}

/// A slot being registered must not already hold a handler; the claim
/// state makes a double registration unrepresentable.
#[inline]
pub(crate) fn check_slot_vacant(already_taken: bool, slot: usize) {
    debug_assert!(
        !already_taken,
        "Contract violation: slot {} registered twice",
        slot
    );
}
