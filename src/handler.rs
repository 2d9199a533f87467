//! Handler signatures and the erased dispatch table.
//!
//! A handler for an alternative may take that alternative's payload, or
//! nothing at all when the payload is of no interest. [`Handler`] captures
//! exactly that capability; the marker parameter is how the two call shapes
//! coexist as blanket impls, and it is resolved once per registration, not
//! at dispatch time.
//!
//! Once registered, handlers live in a [`HandlerTable`] as boxed
//! `FnOnce(E) -> R` closures indexed by slot. The boxing happens once per
//! registration; dispatch is a single slot lookup plus one call.

use crate::contracts;

/// Marker: the handler takes the alternative's payload as its argument.
pub struct WithPayload(());

/// Marker: the handler takes no arguments and ignores the payload.
pub struct NoPayload(());

/// A callable usable as a handler for a payload of type `P`, producing `R`.
///
/// Implemented for every `FnOnce(P) -> R` and every `FnOnce() -> R`. The
/// no-argument form behaves exactly like a handler that receives and drops
/// the payload.
#[diagnostic::on_unimplemented(
    message = "invalid handler: `{Self}` is not invocable with this alternative's payload (or with no arguments), or its result type differs from the chain's",
    label = "not a valid handler here",
    note = "every handler in one match chain must return the same result type as the first one registered"
)]
pub trait Handler<P, R, M>: Sized {
    /// Invokes the handler. The payload is dropped for no-argument handlers.
    fn invoke(self, payload: P) -> R;
}

impl<F, P, R> Handler<P, R, WithPayload> for F
where
    F: FnOnce(P) -> R,
{
    fn invoke(self, payload: P) -> R {
        self(payload)
    }
}

impl<F, P, R> Handler<P, R, NoPayload> for F
where
    F: FnOnce() -> R,
{
    fn invoke(self, payload: P) -> R {
        drop(payload);
        self()
    }
}

/// A registered handler, erased to "consume the whole sum value".
///
/// The erasing closure is built at registration time, where the claimed
/// kind is still known, so it can extract the right payload.
pub(crate) type BoxedHandler<'h, E, R> = Box<dyn FnOnce(E) -> R + 'h>;

/// Slot-indexed handler storage for one match chain.
///
/// Public only because it appears in the signature of
/// [`KindSet::register`](crate::KindSet::register); there is nothing callers
/// can do with it.
pub struct HandlerTable<'h, E, R> {
    slots: Vec<Option<BoxedHandler<'h, E, R>>>,
}

impl<'h, E, R> HandlerTable<'h, E, R> {
    pub(crate) fn with_kind_count(kind_count: usize) -> Self {
        let mut slots = Vec::with_capacity(kind_count);
        slots.resize_with(kind_count, || None);
        Self { slots }
    }

    /// Registers `handler` for `slot`. The claim state proves the slot is
    /// vacant; the contract check re-states that in debug builds.
    pub(crate) fn set(&mut self, slot: usize, handler: BoxedHandler<'h, E, R>) {
        contracts::check_slot_in_range(slot, self.slots.len());
        contracts::check_slot_vacant(self.slots[slot].is_some(), slot);
        self.slots[slot] = Some(handler);
    }

    /// Removes and returns the handler for `slot`, if one was registered.
    pub(crate) fn take(&mut self, slot: usize) -> Option<BoxedHandler<'h, E, R>> {
        contracts::check_slot_in_range(slot, self.slots.len());
        self.slots[slot].take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_handler_receives_the_payload() {
        let h = |n: u32| n + 1;
        assert_eq!(Handler::<u32, u32, WithPayload>::invoke(h, 41), 42);
    }

    #[test]
    fn no_arg_handler_drops_the_payload() {
        let h = || "ignored";
        assert_eq!(Handler::<u32, &str, NoPayload>::invoke(h, 7), "ignored");
    }

    #[test]
    fn table_set_then_take_round_trips() {
        let mut table: HandlerTable<'_, u8, u8> = HandlerTable::with_kind_count(3);
        table.set(1, Box::new(|v| v * 2));

        assert!(table.take(0).is_none());
        let handler = table.take(1).unwrap();
        assert_eq!(handler(21), 42);
        // FnOnce: the slot is empty after dispatch.
        assert!(table.take(1).is_none());
    }
}
