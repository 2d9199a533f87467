//! The first argument of `claim`: one kind marker, or a tuple of them.
//!
//! A multi-kind claim is pure sugar for claiming each kind separately with
//! the same handler body: `claim((a, b), h)` registers `h` once per slot and
//! marks both slots taken, so a later claim on either kind is still a
//! duplicate. Tuples require `Clone` on the handler (one copy per slot);
//! single-kind claims do not.
//!
//! Tuple impls stop at arity 4. A handler shared by more kinds than that is
//! better split across `claim` calls anyway.

use crate::handler::{Handler, HandlerTable};
use crate::kind::{Kind, SumType};
use crate::slot::TakeSlot;
use core::marker::PhantomData;

/// Marker wrapper for single-kind claims.
pub struct One<M>(PhantomData<M>);

/// Marker wrapper for tuple claims.
pub struct Many<Ms>(PhantomData<Ms>);

/// Claim-state transition for the flag list `S` after taking the slot of
/// kind `K` of sum type `E`. Purely a readability alias for the nested
/// projections in the tuple impls below.
type Took<S, E, K> = <S as TakeSlot<<K as Kind<E>>::Index>>::Output;

/// A compile-time-known, non-empty set of alternative kinds.
///
/// Implemented for every kind marker of `E` and for tuples of 2 to 4 of
/// them. Implementations are provided by this crate only; the trait is
/// public so it can appear in `claim`'s signature.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be claimed on this matcher",
    label = "expected a kind marker of the matched sum type, or a tuple of 2 to 4 of them",
    note = "a failing inner bound on a valid kind usually means a duplicate claim or a handler signature mismatch"
)]
pub trait KindSet<'h, E: SumType + 'h, R: 'h, S, F: 'h, M> {
    /// The claim state after taking every slot in the set.
    type Remaining;

    /// Boxes `handler` into `table` once per member kind.
    fn register(table: &mut HandlerTable<'h, E, R>, handler: F);
}

impl<'h, E, R, S, F, M, K> KindSet<'h, E, R, S, F, One<M>> for K
where
    E: SumType + 'h,
    R: 'h,
    K: Kind<E>,
    S: TakeSlot<K::Index>,
    F: Handler<K::Payload, R, M> + 'h,
{
    type Remaining = S::Output;

    fn register(table: &mut HandlerTable<'h, E, R>, handler: F) {
        table.set(
            K::SLOT,
            Box::new(move |value| {
                <F as Handler<K::Payload, R, M>>::invoke(handler, K::payload(value))
            }),
        );
    }
}

impl<'h, E, R, S, F, MA, MB, A, B> KindSet<'h, E, R, S, F, Many<(MA, MB)>> for (A, B)
where
    E: SumType + 'h,
    R: 'h,
    A: Kind<E>,
    B: Kind<E>,
    S: TakeSlot<A::Index>,
    Took<S, E, A>: TakeSlot<B::Index>,
    F: Handler<A::Payload, R, MA> + Handler<B::Payload, R, MB> + Clone + 'h,
{
    type Remaining = Took<Took<S, E, A>, E, B>;

    fn register(table: &mut HandlerTable<'h, E, R>, handler: F) {
        let h = handler.clone();
        table.set(
            A::SLOT,
            Box::new(move |value| {
                <F as Handler<A::Payload, R, MA>>::invoke(h, A::payload(value))
            }),
        );
        table.set(
            B::SLOT,
            Box::new(move |value| {
                <F as Handler<B::Payload, R, MB>>::invoke(handler, B::payload(value))
            }),
        );
    }
}

impl<'h, E, R, S, F, MA, MB, MC, A, B, C> KindSet<'h, E, R, S, F, Many<(MA, MB, MC)>>
    for (A, B, C)
where
    E: SumType + 'h,
    R: 'h,
    A: Kind<E>,
    B: Kind<E>,
    C: Kind<E>,
    S: TakeSlot<A::Index>,
    Took<S, E, A>: TakeSlot<B::Index>,
    Took<Took<S, E, A>, E, B>: TakeSlot<C::Index>,
    F: Handler<A::Payload, R, MA>
        + Handler<B::Payload, R, MB>
        + Handler<C::Payload, R, MC>
        + Clone
        + 'h,
{
    type Remaining = Took<Took<Took<S, E, A>, E, B>, E, C>;

    fn register(table: &mut HandlerTable<'h, E, R>, handler: F) {
        let ha = handler.clone();
        let hb = handler.clone();
        table.set(
            A::SLOT,
            Box::new(move |value| {
                <F as Handler<A::Payload, R, MA>>::invoke(ha, A::payload(value))
            }),
        );
        table.set(
            B::SLOT,
            Box::new(move |value| {
                <F as Handler<B::Payload, R, MB>>::invoke(hb, B::payload(value))
            }),
        );
        table.set(
            C::SLOT,
            Box::new(move |value| {
                <F as Handler<C::Payload, R, MC>>::invoke(handler, C::payload(value))
            }),
        );
    }
}

impl<'h, E, R, S, F, MA, MB, MC, MD, A, B, C, D>
    KindSet<'h, E, R, S, F, Many<(MA, MB, MC, MD)>> for (A, B, C, D)
where
    E: SumType + 'h,
    R: 'h,
    A: Kind<E>,
    B: Kind<E>,
    C: Kind<E>,
    D: Kind<E>,
    S: TakeSlot<A::Index>,
    Took<S, E, A>: TakeSlot<B::Index>,
    Took<Took<S, E, A>, E, B>: TakeSlot<C::Index>,
    Took<Took<Took<S, E, A>, E, B>, E, C>: TakeSlot<D::Index>,
    F: Handler<A::Payload, R, MA>
        + Handler<B::Payload, R, MB>
        + Handler<C::Payload, R, MC>
        + Handler<D::Payload, R, MD>
        + Clone
        + 'h,
{
    type Remaining = Took<Took<Took<Took<S, E, A>, E, B>, E, C>, E, D>;

    fn register(table: &mut HandlerTable<'h, E, R>, handler: F) {
        let ha = handler.clone();
        let hb = handler.clone();
        let hc = handler.clone();
        table.set(
            A::SLOT,
            Box::new(move |value| {
                <F as Handler<A::Payload, R, MA>>::invoke(ha, A::payload(value))
            }),
        );
        table.set(
            B::SLOT,
            Box::new(move |value| {
                <F as Handler<B::Payload, R, MB>>::invoke(hb, B::payload(value))
            }),
        );
        table.set(
            C::SLOT,
            Box::new(move |value| {
                <F as Handler<C::Payload, R, MC>>::invoke(hc, C::payload(value))
            }),
        );
        table.set(
            D::SLOT,
            Box::new(move |value| {
                <F as Handler<D::Payload, R, MD>>::invoke(handler, D::payload(value))
            }),
        );
    }
}
