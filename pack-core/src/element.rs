use core::any::type_name;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::{
    Admit, ConstTypeId, Constant, ConstantValue, Index, Instance, InstanceKey, Key, Object, Owned,
    Payload, SlotDescriptor, Stored, StoredMut, Template, TypeInfo,
};

/// One slot of a pack: a payload at position `I`, keyed by `K`.
///
/// Position and key live in the type, so an element stores nothing but its
/// payload. Most slots are keyed by their payload's identity; see [`Slot`].
pub struct Element<P, const I: usize, K: ?Sized> {
    payload: P,
    key: PhantomData<fn() -> *const K>,
}

/// The element at position `I` keyed by its payload's own identity.
pub type Slot<P, const I: usize> = Element<P, I, <P as Payload>::Key>;

impl<P, const I: usize, K: ?Sized> Element<P, I, K> {
    /// Position of this element within its pack.
    pub const POSITION: usize = I;

    /// Wraps an already-built payload.
    #[inline]
    pub const fn from_payload(payload: P) -> Self {
        Element {
            payload,
            key: PhantomData,
        }
    }

    /// Position of this element within its pack.
    #[inline]
    pub const fn position(&self) -> usize {
        I
    }

    /// The position token answering to this element.
    #[inline]
    pub const fn index(&self) -> Index<I> {
        Index
    }

    /// The key token answering to this element.
    #[inline]
    pub const fn key(&self) -> Key<K> {
        Key::NEW
    }

    /// The payload.
    #[inline]
    pub const fn payload(&self) -> &P {
        &self.payload
    }

    /// The payload, mutably. Only storage payloads have anything to change.
    #[inline]
    pub fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }

    /// Unwraps the payload.
    #[inline]
    pub fn into_payload(self) -> P {
        self.payload
    }

    /// The same payload at the same position, keyed by `K2` instead.
    #[inline]
    pub fn rekey<K2: ?Sized>(self) -> Element<P, I, K2> {
        Element::from_payload(self.payload)
    }
}

impl<P: Payload, const I: usize, K: ?Sized> Element<P, I, K> {
    /// Builds the element from an argument compatible with its payload.
    #[inline]
    pub fn new<A>(arg: A) -> Self
    where
        P: Admit<A>,
    {
        Self::from_payload(P::admit(arg))
    }

    /// Like [`Element::new`], confirming the position. The token is typed as
    /// this element's own position, so any other position fails to compile.
    #[inline]
    pub fn with_position<A>(arg: A, _position: Index<I>) -> Self
    where
        P: Admit<A>,
    {
        Self::new(arg)
    }

    /// Like [`Element::with_position`], also confirming the key.
    #[inline]
    pub fn with_key<A>(arg: A, _position: Index<I>, _key: Key<K>) -> Self
    where
        P: Admit<A>,
    {
        Self::new(arg)
    }

    /// Describes the element without needing a value.
    pub fn describe() -> SlotDescriptor {
        SlotDescriptor::new(I, P::info(), TypeInfo::of::<K>())
    }

    /// Describes this element.
    pub fn descriptor(&self) -> SlotDescriptor {
        Self::describe()
    }

    /// Identity of the payload's declared type.
    pub fn type_id(&self) -> ConstTypeId {
        P::info().ty.id
    }

    /// Name of the payload's declared type.
    pub fn type_name(&self) -> &'static str {
        P::info().ty.name
    }

    /// The held value.
    #[inline]
    pub fn value(&self) -> &P::Value
    where
        P: Stored,
    {
        self.payload.value()
    }

    /// The held value, mutably.
    #[inline]
    pub fn value_mut(&mut self) -> &mut P::Value
    where
        P: StoredMut,
    {
        self.payload.value_mut()
    }
}

impl<C: ConstantValue, const I: usize, K: ?Sized> Element<Constant<C>, I, K> {
    /// The constant this element carries.
    pub const VALUE: C::Value = C::VALUE;

    /// The constant this element carries.
    #[inline]
    pub const fn constant(&self) -> C::Value {
        C::VALUE
    }
}

impl<T, const I: usize, K: ?Sized> Element<Object<T>, I, K> {
    /// Unwraps the owned value.
    #[inline]
    pub fn into_value(self) -> T {
        self.payload.into_inner()
    }
}

impl<T, const I: usize, K: ?Sized> Element<Owned<T>, I, K> {
    /// Unwraps the owned value.
    #[inline]
    pub fn into_value(self) -> T {
        self.payload.into_inner()
    }
}

/// Self-access: an element answers to its own position and key tokens by
/// returning itself.
pub trait Answers<Tok> {
    /// Returns `self`.
    #[inline]
    fn answer(&self, _token: Tok) -> &Self {
        self
    }

    /// Returns `self`, mutably.
    #[inline]
    fn answer_mut(&mut self, _token: Tok) -> &mut Self {
        self
    }
}

impl<P, const I: usize, K: ?Sized> Answers<Index<I>> for Element<P, I, K> {}

impl<P, const I: usize, K: ?Sized> Answers<Key<K>> for Element<P, I, K> {}

/// A slot keyed by a template answers to an instance key of any of the
/// template's instantiations.
impl<P, const I: usize, Tm, A> Answers<InstanceKey<A>> for Element<P, I, Tm>
where
    Tm: Template,
    A: Instance<Template = Tm> + ?Sized,
{
}

impl<P: Clone, const I: usize, K: ?Sized> Clone for Element<P, I, K> {
    fn clone(&self) -> Self {
        Self::from_payload(self.payload.clone())
    }
}

impl<P: Copy, const I: usize, K: ?Sized> Copy for Element<P, I, K> {}

impl<P: Default, const I: usize, K: ?Sized> Default for Element<P, I, K> {
    fn default() -> Self {
        Self::from_payload(P::default())
    }
}

impl<P: PartialEq, const I: usize, K: ?Sized> PartialEq for Element<P, I, K> {
    fn eq(&self, other: &Self) -> bool {
        self.payload == other.payload
    }
}

impl<P: Eq, const I: usize, K: ?Sized> Eq for Element<P, I, K> {}

impl<P: Hash, const I: usize, K: ?Sized> Hash for Element<P, I, K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        I.hash(state);
        self.payload.hash(state);
    }
}

impl<P: fmt::Debug, const I: usize, K: ?Sized> fmt::Debug for Element<P, I, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("position", &I)
            .field("key", &type_name::<K>())
            .field("payload", &self.payload)
            .finish()
    }
}
