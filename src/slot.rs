//! Type-level slot bookkeeping for claim tracking.
//!
//! Every alternative of a sum type occupies one *slot*, numbered in
//! declaration order. Which slots already have a handler is tracked in the
//! type of the matcher as a list of per-slot flags:
//!
//! ```text
//! enum Color { Red(String), Green(String), Blue }
//!
//! fresh matcher:        Cons<Vacant, Cons<Vacant, Cons<Vacant, Nil>>>
//! after claiming Green: Cons<Vacant, Cons<Taken,  Cons<Vacant, Nil>>>
//! after claiming Red:   Cons<Taken,  Cons<Taken,  Cons<Vacant, Nil>>>
//! ```
//!
//! The three traits in this module are the whole static rulebook:
//!
//! | Trait          | Holds when                      | Rejects                    |
//! |----------------|---------------------------------|----------------------------|
//! | [`TakeSlot`]   | the indexed slot is vacant      | duplicate claims           |
//! | [`FullyClaimed`] | every slot is taken           | incomplete coverage        |
//! | [`HasVacancy`] | at least one slot is vacant     | superfluous fallbacks      |
//!
//! None of these types is ever constructed; they exist purely so the claim
//! state can be threaded through the builder chain and checked before any
//! dispatch code runs.

use core::marker::PhantomData;

/// Type-level zero. Slot 0 is the first declared alternative.
pub struct Z;

/// Type-level successor: `S<S<Z>>` is slot 2.
pub struct S<N>(PhantomData<N>);

/// Flag for a slot with no handler yet.
pub struct Vacant;

/// Flag for a slot whose handler is registered.
pub struct Taken;

/// Type-level list node holding one slot flag and the rest of the list.
pub struct Cons<H, T>(PhantomData<(H, T)>);

/// End of the slot-flag list.
pub struct Nil;

/// Flips the flag at index `I` from [`Vacant`] to [`Taken`].
///
/// Not implemented when the indexed flag is already [`Taken`], which is what
/// makes a second claim on the same alternative fail to compile.
#[diagnostic::on_unimplemented(
    message = "duplicate claim: an alternative in this `claim` already has a handler earlier in the chain",
    label = "this alternative is already claimed",
    note = "each alternative of a sum type may be claimed at most once per match chain"
)]
pub trait TakeSlot<I> {
    /// The flag list after the claim.
    type Output;
}

impl<T> TakeSlot<Z> for Cons<Vacant, T> {
    type Output = Cons<Taken, T>;
}

impl<I, H, T: TakeSlot<I>> TakeSlot<S<I>> for Cons<H, T> {
    type Output = Cons<H, T::Output>;
}

/// Holds when every slot flag is [`Taken`].
///
/// `run` on a matcher without a fallback requires this: if any alternative
/// is left unclaimed, the bound fails and the chain does not compile.
#[diagnostic::on_unimplemented(
    message = "non-exhaustive match: some alternatives have no handler and no fallback is registered",
    label = "unclaimed alternatives remain",
    note = "claim every remaining alternative, or register a fallback with `with_fallback`"
)]
pub trait FullyClaimed {}

impl FullyClaimed for Nil {}

impl<T: FullyClaimed> FullyClaimed for Cons<Taken, T> {}

/// Holds when at least one slot flag is still [`Vacant`].
///
/// `run` on a matcher *with* a fallback requires this: a fallback that can
/// never fire is a defect, not a convenience, so it is rejected rather than
/// silently ignored.
#[diagnostic::on_unimplemented(
    message = "superfluous fallback: every alternative already has an explicit handler",
    label = "the fallback can never be invoked",
    note = "remove the `with_fallback` call, or drop one of the explicit claims"
)]
pub trait HasVacancy {}

impl<T> HasVacancy for Cons<Vacant, T> {}

impl<T: HasVacancy> HasVacancy for Cons<Taken, T> {}
