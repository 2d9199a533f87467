//! The match builder: `match_on` → `claim`* → (`with_fallback`)? → `run`.
//!
//! The builder is a typestate machine. Every operation consumes the matcher
//! and returns a new one, so a stale intermediate state cannot be reused,
//! and every rule is enforced by which methods exist on which state:
//!
//! ```text
//!            claim                 claim | with_fallback
//!   Empty ─────────► Partially ─────────────────────────► Fully | WithFallback
//!                                                               │
//!                                                          run  │  (only when
//!                                                               ▼   coverage is exact)
//!                                                             Result
//! ```
//!
//! `claim` and `with_fallback` only exist while no fallback is set; `run`
//! only exists when either every slot is claimed and there is no fallback,
//! or some slot is vacant and a fallback covers the remainder.

use crate::handler::{Handler, HandlerTable};
use crate::kind::SumType;
use crate::kindset::KindSet;
use crate::slot::{FullyClaimed, HasVacancy};
use crate::{contracts, BoxedHandler};
use core::marker::PhantomData;

/// Fallback state of a matcher that has none. The only state in which
/// further claims are accepted.
pub struct NoFallback;

/// Fallback state carrying the erased fallback handler. Terminal within
/// construction: no further claims, no second fallback.
pub struct Fallback<'h, E, R>(BoxedHandler<'h, E, R>);

/// An in-progress match over the sum type `E`, producing `R`.
///
/// Built by [`match_on`]; advanced by [`claim`](Matcher::claim) and
/// [`with_fallback`](Matcher::with_fallback); consumed exactly once by
/// [`run`](Matcher::run). `S` is the type-level claim state and `F` the
/// fallback state; neither is ever named in caller code.
#[must_use = "a match chain does nothing until `run` is called"]
pub struct Matcher<'h, E: SumType, R, S, F> {
    value: E,
    table: HandlerTable<'h, E, R>,
    fallback: F,
    claimed: PhantomData<S>,
}

/// Wraps `value` in a fresh matcher with no handlers and no fallback.
///
/// The value is moved into the chain once and carried through to dispatch;
/// no operation copies it or mutates it.
///
/// ```
/// use switchback::{match_on, SumType};
///
/// #[derive(SumType)]
/// enum Color {
///     Red(String),
///     Green(String),
///     Blue,
/// }
/// use color_kinds::{Blue, Green, Red};
///
/// fn main() {
///     let color = Color::Green("green".to_string());
///     let result = match_on(color)
///         .claim(Red, |name: String| name)
///         .claim(Green, |name: String| name)
///         .claim(Blue, || "blue".to_string())
///         .run();
///     assert_eq!(result, "green");
/// }
/// ```
pub fn match_on<'h, E, R>(value: E) -> Matcher<'h, E, R, E::Vacancies, NoFallback>
where
    E: SumType + 'h,
    R: 'h,
{
    Matcher {
        table: HandlerTable::with_kind_count(E::KIND_COUNT),
        value,
        fallback: NoFallback,
        claimed: PhantomData,
    }
}

impl<'h, E, R, S> Matcher<'h, E, R, S, NoFallback>
where
    E: SumType + 'h,
    R: 'h,
{
    /// Registers `handler` for one kind, or for a tuple of 2 to 4 kinds.
    ///
    /// A tuple claim registers the same handler body once per kind and
    /// counts as claiming every listed slot, exactly as if each kind had
    /// been claimed separately. The handler either takes the payload of the
    /// claimed kind, or no arguments at all; with several kinds of
    /// differing payload types only the no-argument form can fit them all.
    ///
    /// The first registered handler fixes the chain's result type; every
    /// later handler must return exactly that type.
    ///
    /// A handler whose parameter is not the claimed kind's payload does not
    /// compile:
    ///
    /// ```compile_fail
    /// use switchback::{match_on, SumType};
    ///
    /// #[derive(SumType)]
    /// enum Color { Red(String), Green(String), Blue }
    /// use color_kinds::{Blue, Green, Red};
    ///
    /// fn main() {
    ///     let _ = match_on(Color::Blue)
    ///         .claim(Red, |n: u32| n) // Red's payload is a String
    ///         .claim(Green, |name: String| name.len() as u32)
    ///         .claim(Blue, || 0)
    ///         .run();
    /// }
    /// ```
    ///
    /// Neither does a handler returning a different type than an earlier
    /// one:
    ///
    /// ```compile_fail
    /// use switchback::{match_on, SumType};
    ///
    /// #[derive(SumType)]
    /// enum Color { Red(String), Green(String), Blue }
    /// use color_kinds::{Blue, Green, Red};
    ///
    /// fn main() {
    ///     let _ = match_on(Color::Blue)
    ///         .claim(Red, || 0)
    ///         .claim(Green, || "green") // the chain already produces an integer
    ///         .claim(Blue, || 2)
    ///         .run();
    /// }
    /// ```
    ///
    /// Claiming a kind twice does not compile:
    ///
    /// ```compile_fail
    /// use switchback::{match_on, SumType};
    ///
    /// #[derive(SumType)]
    /// enum Color { Red(String), Green(String), Blue }
    /// use color_kinds::{Blue, Green, Red};
    ///
    /// fn main() {
    ///     let _ = match_on(Color::Blue)
    ///         .claim(Red, |name: String| name)
    ///         .claim(Red, |name: String| name) // duplicate claim
    ///         .claim(Green, |name: String| name)
    ///         .claim(Blue, || String::new())
    ///         .run();
    /// }
    /// ```
    ///
    /// A tuple claim counts too, so re-claiming one of its kinds does not
    /// compile either:
    ///
    /// ```compile_fail
    /// use switchback::{match_on, SumType};
    ///
    /// #[derive(SumType)]
    /// enum Color { Red(String), Green(String), Blue }
    /// use color_kinds::{Blue, Green, Red};
    ///
    /// fn main() {
    ///     let _ = match_on(Color::Blue)
    ///         .claim((Red, Green), || 0)
    ///         .claim(Red, || 1) // Red is already claimed by the tuple
    ///         .claim(Blue, || 2)
    ///         .run();
    /// }
    /// ```
    ///
    /// Neither does claiming a kind of a different sum type:
    ///
    /// ```compile_fail
    /// use switchback::{match_on, SumType};
    ///
    /// #[derive(SumType)]
    /// enum Coin { Heads, Tails }
    ///
    /// #[derive(SumType)]
    /// enum Die { Odd, Even }
    ///
    /// fn main() {
    ///     let _ = match_on(Coin::Heads)
    ///         .claim(die_kinds::Odd, || 1) // kind of the wrong sum type
    ///         .claim(coin_kinds::Tails, || 2)
    ///         .run();
    /// }
    /// ```
    pub fn claim<K, F, M>(
        self,
        kinds: K,
        handler: F,
    ) -> Matcher<'h, E, R, K::Remaining, NoFallback>
    where
        K: KindSet<'h, E, R, S, F, M>,
        F: 'h,
    {
        // Kind markers are zero-sized; the value argument only selects the
        // `KindSet` instance.
        let _ = kinds;
        let mut table = self.table;
        K::register(&mut table, handler);
        Matcher {
            value: self.value,
            table,
            fallback: NoFallback,
            claimed: PhantomData,
        }
    }

    /// Registers the handler for every alternative left unclaimed.
    ///
    /// The fallback receives the whole sum value (or nothing, for a
    /// no-argument handler) since the active alternative is by definition
    /// one without a dedicated handler. At most one fallback per chain, and
    /// nothing can be claimed after it: this method and `claim` are simply
    /// absent on a matcher that already has a fallback.
    ///
    /// ```compile_fail
    /// use switchback::{match_on, SumType};
    ///
    /// #[derive(SumType)]
    /// enum Color { Red(String), Green(String), Blue }
    /// use color_kinds::{Green, Red};
    ///
    /// fn main() {
    ///     let _ = match_on(Color::Blue)
    ///         .claim(Red, || 0)
    ///         .with_fallback(|| -1)
    ///         .claim(Green, || 1) // claim after fallback
    ///         .run();
    /// }
    /// ```
    ///
    /// ```compile_fail
    /// use switchback::{match_on, SumType};
    ///
    /// #[derive(SumType)]
    /// enum Color { Red(String), Green(String), Blue }
    /// use color_kinds::Red;
    ///
    /// fn main() {
    ///     let _ = match_on(Color::Blue)
    ///         .claim(Red, || 0)
    ///         .with_fallback(|| -1)
    ///         .with_fallback(|| -2) // double fallback
    ///         .run();
    /// }
    /// ```
    pub fn with_fallback<F, M>(self, handler: F) -> Matcher<'h, E, R, S, Fallback<'h, E, R>>
    where
        F: Handler<E, R, M> + 'h,
    {
        Matcher {
            value: self.value,
            table: self.table,
            fallback: Fallback(Box::new(move |value| {
                <F as Handler<E, R, M>>::invoke(handler, value)
            })),
            claimed: PhantomData,
        }
    }
}

impl<'h, E, R, S> Matcher<'h, E, R, S, NoFallback>
where
    E: SumType + 'h,
    R: 'h,
    S: FullyClaimed,
{
    /// Dispatches: invokes the handler of the active alternative and
    /// returns its result.
    ///
    /// Only compiles when every alternative is claimed (this impl) or a
    /// fallback covers the remainder (the impl below). Exactly one handler
    /// runs, exactly once; `run` has no other observable effect.
    ///
    /// An incomplete chain without a fallback is rejected here:
    ///
    /// ```compile_fail
    /// use switchback::{match_on, SumType};
    ///
    /// #[derive(SumType)]
    /// enum Color { Red(String), Green(String), Blue }
    /// use color_kinds::{Green, Red};
    ///
    /// fn main() {
    ///     let _ = match_on(Color::Blue)
    ///         .claim(Red, |name: String| name)
    ///         .claim(Green, |name: String| name)
    ///         .run(); // Blue is unclaimed and there is no fallback
    /// }
    /// ```
    pub fn run(mut self) -> R {
        let slot = self.value.active_slot();
        contracts::check_active_slot(slot, E::KIND_COUNT);
        match self.table.take(slot) {
            Some(handler) => handler(self.value),
            // `S: FullyClaimed` put a handler in every slot, and
            // `active_slot` is bounded by `KIND_COUNT`.
            None => unreachable!("fully-claimed chain has a handler for every slot"),
        }
    }
}

impl<'h, E, R, S> Matcher<'h, E, R, S, Fallback<'h, E, R>>
where
    E: SumType + 'h,
    R: 'h,
    S: HasVacancy,
{
    /// Dispatches through the explicit handler for the active alternative,
    /// or through the fallback when no explicit claim covers it.
    ///
    /// A fallback on a chain that already claims every alternative is
    /// rejected here, not silently ignored:
    ///
    /// ```compile_fail
    /// use switchback::{match_on, SumType};
    ///
    /// #[derive(SumType)]
    /// enum Color { Red(String), Green(String), Blue }
    /// use color_kinds::{Blue, Green, Red};
    ///
    /// fn main() {
    ///     let _ = match_on(Color::Blue)
    ///         .claim(Red, || 0)
    ///         .claim(Green, || 1)
    ///         .claim(Blue, || 2)
    ///         .with_fallback(|| -1) // nothing left for the fallback
    ///         .run();
    /// }
    /// ```
    pub fn run(mut self) -> R {
        let slot = self.value.active_slot();
        contracts::check_active_slot(slot, E::KIND_COUNT);
        match self.table.take(slot) {
            Some(handler) => handler(self.value),
            None => {
                let Fallback(fallback) = self.fallback;
                fallback(self.value)
            }
        }
    }
}
