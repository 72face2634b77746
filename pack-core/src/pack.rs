use core::any::type_name;

use crate::factory::{self, PackKind};
use crate::tracing_macros::{debug, trace};
use crate::{
    ConstantValue, Construct, IndexSequence, Instance, IntoList, KeyIdentity, Locate, PackError,
    SlotDescriptor, SlotList,
};

/// A fixed-arity heterogeneous container of slots.
///
/// `L` is the slot list, a `Cons` list of [`Element`](crate::Element)s. The
/// arity and every slot's payload, position and key are part of the type;
/// only storage payloads (objects and references) hold runtime data.
///
/// Slots are looked up with [`get`](Pack::get), by [`Index`](crate::Index)
/// or by [`Key`](crate::Key):
///
/// ```
/// use pack_core::{key, Index, ObjectPack};
///
/// let pack = ObjectPack::<(u32, String)>::new((7u32, "seven"));
/// assert_eq!(*pack.get(Index::<0>).value(), 7);
/// assert_eq!(pack.get(key::<String>()).value(), "seven");
/// ```
///
/// A position the pack does not have is rejected at compile time:
///
/// ```compile_fail
/// use pack_core::{Index, TypePack};
///
/// let pack = TypePack::<(u8, u16)>::default();
/// let _ = pack.get(Index::<2>);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pack<L> {
    slots: L,
}

impl<L> Pack<L> {
    /// The slot list.
    #[inline]
    pub const fn slots(&self) -> &L {
        &self.slots
    }

    /// Unwraps the slot list.
    #[inline]
    pub fn into_slots(self) -> L {
        self.slots
    }
}

impl<L: SlotList> Pack<L> {
    /// Number of slots.
    pub const SIZE: usize = L::LEN;

    const WELL_FORMED: () = assert!(
        L::CONTIGUOUS && L::FIRST_POSITION == 0,
        "slot positions must run contiguously from 0"
    );

    /// Builds a pack from one argument per slot, in position order.
    ///
    /// `args` is a tuple (or a `Cons` list). Each argument must be admitted by
    /// its slot's payload; a wrong count or an incompatible argument is a
    /// compile error.
    pub fn new<Args>(args: Args) -> Self
    where
        Args: IntoList,
        Args::List: Construct<L>,
    {
        trace!(size = L::LEN, "building pack");
        Self::from_slots(args.into_list().construct())
    }

    /// Wraps an already-built slot list.
    #[inline]
    pub const fn from_slots(slots: L) -> Self {
        let () = Self::WELL_FORMED;
        Pack { slots }
    }

    /// Number of slots.
    #[inline]
    pub const fn size(&self) -> usize {
        L::LEN
    }

    /// The slot answering to `token`, an [`Index`](crate::Index) or a
    /// [`Key`](crate::Key).
    ///
    /// `M` is inferred. A key shared by several slots leaves it ambiguous,
    /// which is reported as "type annotations needed".
    #[inline]
    pub fn get<Tok, M>(&self, _token: Tok) -> &<L as Locate<Tok, M>>::Found
    where
        L: Locate<Tok, M>,
    {
        <L as Locate<Tok, M>>::locate(&self.slots)
    }

    /// The slot answering to `token`, mutably.
    #[inline]
    pub fn get_mut<Tok, M>(&mut self, _token: Tok) -> &mut <L as Locate<Tok, M>>::Found
    where
        L: Locate<Tok, M>,
    {
        <L as Locate<Tok, M>>::locate_mut(&mut self.slots)
    }

    /// The positions of this pack as a type-level list of tokens.
    #[inline]
    pub fn indices(&self) -> L::Indices {
        L::Indices::default()
    }

    /// The position sequence `0..N`, where `N` must be this pack's size.
    #[inline]
    pub const fn index_sequence<const N: usize>(&self) -> IndexSequence<N> {
        const { assert!(N == L::LEN, "index sequence length must equal the pack size") };
        IndexSequence::new()
    }

    /// Describes the slot at `position`.
    pub fn descriptor(&self, position: usize) -> Result<SlotDescriptor, PackError> {
        let mut found = None;
        L::describe(&mut |slot| {
            if slot.position == position {
                found = Some(slot);
            }
        });
        found.ok_or_else(|| {
            debug!(position, size = L::LEN, "no slot at position");
            PackError::IndexOutOfRange {
                index: position,
                size: L::LEN,
            }
        })
    }

    /// Describes every slot, in position order.
    #[cfg(feature = "alloc")]
    pub fn descriptors(&self) -> alloc::vec::Vec<SlotDescriptor> {
        let mut out = alloc::vec::Vec::with_capacity(L::LEN);
        L::describe(&mut |slot| out.push(slot));
        out
    }

    /// Position of the slot keyed by `K`.
    ///
    /// Unlike a key lookup through [`get`](Pack::get), a shared key is
    /// reported as a value here.
    pub fn position_of<K: ?Sized>(&self) -> Result<usize, PackError> {
        self.position_by(KeyIdentity::of::<K>(), type_name::<K>())
    }

    /// Position of the constant slot carrying the value of `C`, whatever
    /// carrier the slot was declared with.
    ///
    /// ```
    /// use pack_core::{ConstI32, ConstI64, ConstantPack};
    ///
    /// let pack = ConstantPack::<(ConstI32<1>, ConstI32<2>)>::default();
    /// assert_eq!(pack.position_of_constant::<ConstI64<2>>(), Ok(1));
    /// ```
    pub fn position_of_constant<C: ConstantValue>(&self) -> Result<usize, PackError> {
        self.position_by(KeyIdentity::Constant(C::ERASED), type_name::<C>())
    }

    /// Position of the template slot that `A` instantiates.
    pub fn position_of_instance<A: Instance + ?Sized>(&self) -> Result<usize, PackError> {
        self.position_by(KeyIdentity::of::<A::Template>(), type_name::<A>())
    }

    fn position_by(&self, identity: KeyIdentity, name: &'static str) -> Result<usize, PackError> {
        let mut first = None;
        let mut ambiguity = None;
        L::describe(&mut |slot| {
            if !slot.answers(identity) || ambiguity.is_some() {
                return;
            }
            match first {
                None => first = Some(slot.position),
                Some(earlier) => {
                    ambiguity = Some(PackError::KeyAmbiguity {
                        key: name,
                        first: earlier,
                        second: slot.position,
                    })
                }
            }
        });

        if let Some(err) = ambiguity {
            debug!(%err, "key lookup failed");
            return Err(err);
        }
        first.ok_or_else(|| PackError::KeyNotFound { key: name })
    }

    /// Checks that no two slots share a key.
    ///
    /// Key lookups on a pack with a shared key type already fail to
    /// compile; this is for callers that want the check up front. Constant
    /// slots are compared by value, so `ConstI32<1>` and `ConstU8<1>` share
    /// a key here.
    pub fn check_unique_keys(&self) -> Result<(), PackError> {
        let mut outcome = Ok(());
        L::describe(&mut |outer| {
            if outcome.is_err() {
                return;
            }
            L::describe(&mut |inner| {
                let shared =
                    inner.answers(outer.identity()) || outer.answers(inner.identity());
                if outcome.is_ok() && inner.position > outer.position && shared {
                    outcome = Err(PackError::KeyAmbiguity {
                        key: outer.key.name,
                        first: outer.position,
                        second: inner.position,
                    });
                }
            });
        });
        outcome
    }

    /// The variant kind of this pack, deduced from its slots.
    pub fn kind(&self) -> Result<PackKind, PackError> {
        let mut outcome = Ok(None);
        L::describe(&mut |slot| {
            if let Ok(seen) = outcome {
                outcome = factory::deduce(seen, slot.kind.category()).map(Some);
            }
        });
        outcome.map(|category| category.map_or(PackKind::Empty, |c| c.pack_kind()))
    }
}

impl<L: SlotList + Default> Default for Pack<L> {
    fn default() -> Self {
        Self::from_slots(L::default())
    }
}

#[cfg(feature = "alloc")]
mod dynamic {
    use alloc::boxed::Box;
    use alloc::vec::{IntoIter, Vec};
    use core::any::{Any, type_name};

    use super::Pack;
    use crate::tracing_macros::debug;
    use crate::{Cons, Element, Nil, Object, Owned, PackError, SlotList};

    /// Slot lists that can be filled from dynamically typed values.
    pub trait FromAnyList: Sized {
        /// Takes one value per slot from `values`, downcasting each to its
        /// slot's type.
        fn from_any(values: &mut IntoIter<Box<dyn Any>>) -> Result<Self, PackError>;
    }

    impl FromAnyList for Nil {
        fn from_any(_values: &mut IntoIter<Box<dyn Any>>) -> Result<Self, PackError> {
            Ok(Nil)
        }
    }

    fn take<T: 'static>(
        values: &mut IntoIter<Box<dyn Any>>,
        position: usize,
    ) -> Result<T, PackError> {
        let mismatch = || PackError::PayloadMismatch {
            position,
            expected: type_name::<T>(),
        };
        let value = values.next().ok_or_else(mismatch)?;
        value.downcast::<T>().map(|value| *value).map_err(|_| mismatch())
    }

    impl<T: 'static, const I: usize, K: ?Sized, Tl: FromAnyList> FromAnyList
        for Cons<Element<Object<T>, I, K>, Tl>
    {
        fn from_any(values: &mut IntoIter<Box<dyn Any>>) -> Result<Self, PackError> {
            Ok(Cons {
                head: Element::from_payload(Object::new(take::<T>(values, I)?)),
                tail: Tl::from_any(values)?,
            })
        }
    }

    impl<T: 'static, const I: usize, K: ?Sized, Tl: FromAnyList> FromAnyList
        for Cons<Element<Owned<T>, I, K>, Tl>
    {
        fn from_any(values: &mut IntoIter<Box<dyn Any>>) -> Result<Self, PackError> {
            Ok(Cons {
                head: Element::from_payload(Owned::new(take::<T>(values, I)?)),
                tail: Tl::from_any(values)?,
            })
        }
    }

    impl<L: SlotList + FromAnyList> Pack<L> {
        /// Builds a pack of owned slots from dynamically typed values, one per
        /// slot in position order.
        ///
        /// This is the only construction path checked at runtime.
        pub fn try_from_any(values: Vec<Box<dyn Any>>) -> Result<Self, PackError> {
            if values.len() != L::LEN {
                debug!(expected = L::LEN, found = values.len(), "wrong number of values");
                return Err(PackError::ArityMismatch {
                    expected: L::LEN,
                    found: values.len(),
                });
            }
            match L::from_any(&mut values.into_iter()) {
                Ok(slots) => Ok(Self::from_slots(slots)),
                Err(err) => {
                    debug!(%err, "value does not fit its slot");
                    Err(err)
                }
            }
        }
    }
}

#[cfg(feature = "alloc")]
pub use dynamic::FromAnyList;
