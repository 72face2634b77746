//! Slot lists: how N independently typed elements are fused into one value.
//!
//! A pack's slots are a cons list, `Cons<E0, Cons<E1, Nil>>`. Construction
//! walks the list and the argument list together ([`Construct`]); lookup
//! asks the type system which single element answers to a token
//! ([`Locate`]). Both are resolved during compilation and monomorphized per
//! list, so neither involves runtime branching.

use core::fmt;
use core::marker::PhantomData;

use crate::{Admit, Answers, Element, Index, IndexList, Payload, SlotDescriptor};

/// The empty list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Nil;

/// A list cell: `head` followed by the list `tail`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cons<H, T> {
    /// The first element.
    pub head: H,
    /// The remaining elements.
    pub tail: T,
}

impl<H, T> Cons<H, T> {
    /// Prepends `head` to `tail`.
    #[inline]
    pub const fn new(head: H, tail: T) -> Self {
        Cons { head, tail }
    }
}

#[doc(hidden)]
pub trait DebugEntries {
    fn entries(&self, list: &mut fmt::DebugList<'_, '_>);
}

impl DebugEntries for Nil {
    fn entries(&self, _list: &mut fmt::DebugList<'_, '_>) {}
}

impl<H: fmt::Debug, T: DebugEntries> DebugEntries for Cons<H, T> {
    fn entries(&self, list: &mut fmt::DebugList<'_, '_>) {
        list.entry(&self.head);
        self.tail.entries(list);
    }
}

impl<H: fmt::Debug, T: DebugEntries> fmt::Debug for Cons<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        self.entries(&mut list);
        list.finish()
    }
}

/// The type of a cons list: `List![A, B]` is `Cons<A, Cons<B, Nil>>`.
#[macro_export]
macro_rules! List {
    () => { $crate::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => { $crate::Cons<$head, $crate::List![$($tail),*]> };
}

/// A cons list value: `cons![a, b]` is `Cons { head: a, tail: Cons { head: b, tail: Nil } }`.
#[macro_export]
macro_rules! cons {
    () => { $crate::Nil };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::Cons { head: $head, tail: $crate::cons![$($tail),*] }
    };
}

/// The slot list for the given payloads, positioned from 0 in order and
/// keyed by payload identity.
///
/// ```
/// use pack_core::{Pack, Slots, Type, Object};
///
/// let pack: Pack<Slots![Type<u8>, Object<String>]> = Pack::new((&1u8, "x"));
/// assert_eq!(pack.size(), 2);
/// ```
#[macro_export]
macro_rules! Slots {
    (@at ($($pos:tt)*)) => { $crate::Nil };
    (@at ($($pos:tt)*) $head:ty $(, $tail:ty)* $(,)?) => {
        $crate::Cons<
            $crate::Element<$head, { $($pos)* }, <$head as $crate::Payload>::Key>,
            $crate::Slots![@at ($($pos)* + 1) $($tail),*]
        >
    };
    ($($payload:ty),* $(,)?) => { $crate::Slots![@at (0) $($payload),*] };
}

/// Conversion of an argument tuple (or an existing list) into a cons list.
pub trait IntoList {
    /// The resulting list type.
    type List;

    /// Converts `self` into a list, preserving order.
    fn into_list(self) -> Self::List;
}

impl IntoList for Nil {
    type List = Nil;

    #[inline]
    fn into_list(self) -> Nil {
        self
    }
}

impl<H, T> IntoList for Cons<H, T> {
    type List = Self;

    #[inline]
    fn into_list(self) -> Self {
        self
    }
}

/// Compile-time facts about a list of elements.
pub trait SlotList {
    /// Number of slots.
    const LEN: usize;

    /// Position of the first slot, `0` for the empty list.
    const FIRST_POSITION: usize;

    /// Whether each slot's position is one more than the previous one.
    const CONTIGUOUS: bool;

    /// The positions of the slots, as a type-level list of [`Index`] tokens.
    type Indices: IndexList;

    /// Calls `visit` with the descriptor of each slot, in list order.
    fn describe(visit: &mut impl FnMut(SlotDescriptor));
}

impl SlotList for Nil {
    const LEN: usize = 0;
    const FIRST_POSITION: usize = 0;
    const CONTIGUOUS: bool = true;
    type Indices = Nil;

    fn describe(_visit: &mut impl FnMut(SlotDescriptor)) {}
}

impl<P: Payload, const I: usize, K: ?Sized, T: SlotList> SlotList for Cons<Element<P, I, K>, T> {
    const LEN: usize = T::LEN + 1;
    const FIRST_POSITION: usize = I;
    const CONTIGUOUS: bool = T::CONTIGUOUS && (T::LEN == 0 || T::FIRST_POSITION == I + 1);
    type Indices = Cons<Index<I>, T::Indices>;

    fn describe(visit: &mut impl FnMut(SlotDescriptor)) {
        visit(Element::<P, I, K>::describe());
        T::describe(visit);
    }
}

/// A list of arguments that builds the slot list `Slots`, element `i` from
/// argument `i`.
///
/// The bound sits on the arguments: their types come from the call, and
/// the slots are only checked against them.
#[diagnostic::on_unimplemented(
    message = "arity mismatch: the arguments `{Self}` do not line up with the slots `{Slots}`",
    label = "wrong number of arguments for this pack",
    note = "a pack is built from exactly one argument per slot, in position order"
)]
pub trait Construct<Slots>: Sized {
    /// Builds the slot list.
    fn construct(self) -> Slots;
}

impl Construct<Nil> for Nil {
    #[inline]
    fn construct(self) -> Nil {
        Nil
    }
}

impl<A, Rest, P, const I: usize, K, T> Construct<Cons<Element<P, I, K>, T>> for Cons<A, Rest>
where
    P: Admit<A>,
    K: ?Sized,
    Rest: Construct<T>,
{
    #[inline]
    fn construct(self) -> Cons<Element<P, I, K>, T> {
        Cons {
            head: Element::new(self.head),
            tail: self.tail.construct(),
        }
    }
}

/// Path marker: the element is at the head of the list.
#[derive(Clone, Copy, Debug, Default)]
pub struct Here;

/// Path marker: the element is in the tail, at path `M`.
#[derive(Clone, Copy, Debug, Default)]
pub struct There<M>(PhantomData<M>);

/// Finds the one element of a list that answers to `Tok`.
///
/// `M` is a path marker the compiler infers. Exactly one element answering
/// gives exactly one path; none leaves this trait unimplemented, several
/// leave `M` ambiguous, and both are compile errors.
#[diagnostic::on_unimplemented(
    message = "no slot answers to `{Tok}` in `{Self}`",
    label = "no slot has this position or key",
    note = "position tokens must be below the pack size; key tokens must name a slot's key"
)]
pub trait Locate<Tok, M> {
    /// The element answering to `Tok`.
    type Found;

    /// Shared access to the element.
    fn locate(&self) -> &Self::Found;

    /// Exclusive access to the element.
    fn locate_mut(&mut self) -> &mut Self::Found;
}

impl<H: Answers<Tok>, T, Tok> Locate<Tok, Here> for Cons<H, T> {
    type Found = H;

    #[inline]
    fn locate(&self) -> &H {
        &self.head
    }

    #[inline]
    fn locate_mut(&mut self) -> &mut H {
        &mut self.head
    }
}

impl<H, T: Locate<Tok, M>, Tok, M> Locate<Tok, There<M>> for Cons<H, T> {
    type Found = T::Found;

    #[inline]
    fn locate(&self) -> &T::Found {
        <T as Locate<Tok, M>>::locate(&self.tail)
    }

    #[inline]
    fn locate_mut(&mut self) -> &mut T::Found {
        <T as Locate<Tok, M>>::locate_mut(&mut self.tail)
    }
}
