use core::any::type_name;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::{ConstTypeId, ConstValue, Instance, TypeInfo};

/// A key token: names the slot whose key type is `K`.
///
/// Slots are keyed by their payload's identity unless a different key type
/// was given when the slot list was declared. Keys are types, so a key token
/// is zero-sized and lookups resolve at compile time.
///
/// A constant slot is keyed by its carrier type. Trait selection cannot
/// compare values, so `key::<ConstI64<2>>()` does not find a `ConstI32<2>`
/// slot at compile time; [`Pack::position_of_constant`](crate::Pack::position_of_constant)
/// compares by value at runtime.
pub struct Key<K: ?Sized>(PhantomData<fn() -> *const K>);

impl<K: ?Sized> Key<K> {
    /// The key token for `K`.
    pub const NEW: Self = Key(PhantomData);

    /// Returns the key token for `K`.
    #[inline]
    pub const fn new() -> Self {
        Self::NEW
    }

    /// Returns the key token naming the type of `value`.
    #[inline]
    pub fn of(_value: &K) -> Self {
        Self::NEW
    }

    /// Identity of the key type.
    #[inline]
    pub const fn type_id(self) -> ConstTypeId {
        ConstTypeId::of::<K>()
    }

    /// Name of the key type, as reported by [`core::any::type_name`].
    #[inline]
    pub fn type_name(self) -> &'static str {
        type_name::<K>()
    }
}

/// Returns the key token for `K`.
///
/// ```
/// use pack_core::{key, Key};
///
/// assert_eq!(key::<u8>(), Key::of(&7u8));
/// ```
#[inline]
pub const fn key<K: ?Sized>() -> Key<K> {
    Key::NEW
}

impl<K: ?Sized> Clone for Key<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: ?Sized> Copy for Key<K> {}

impl<K: ?Sized> Default for Key<K> {
    fn default() -> Self {
        Self::NEW
    }
}

impl<K: ?Sized> PartialEq for Key<K> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<K: ?Sized> Eq for Key<K> {}

impl<K: ?Sized> Hash for Key<K> {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

impl<K: ?Sized> fmt::Debug for Key<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key<{}>", type_name::<K>())
    }
}

/// A key token naming the template slot that `A` instantiates.
///
/// Any instantiation works as the key: `instance_key::<Vec<u8>>()` and
/// `instance_key::<Vec<String>>()` both name the `VecTemplate` slot.
pub struct InstanceKey<A: ?Sized>(PhantomData<fn() -> *const A>);

impl<A: ?Sized> InstanceKey<A> {
    /// The instance key token for `A`.
    pub const NEW: Self = InstanceKey(PhantomData);

    /// Returns the instance key token naming the template of `value`.
    #[inline]
    pub fn of(_value: &A) -> Self {
        Self::NEW
    }
}

/// Returns the instance key token for `A`.
#[inline]
pub const fn instance_key<A: Instance + ?Sized>() -> InstanceKey<A> {
    InstanceKey::NEW
}

impl<A: ?Sized> Clone for InstanceKey<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: ?Sized> Copy for InstanceKey<A> {}

impl<A: ?Sized> fmt::Debug for InstanceKey<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InstanceKey<{}>", type_name::<A>())
    }
}

/// What a slot is identified by when keys are compared at runtime.
///
/// Constant slots keyed by their own carrier are identified by value, so
/// `ConstI32<1>` and `ConstU8<1>` share an identity. Every other slot is
/// identified by its key type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyIdentity {
    /// A key type.
    Type(TypeInfo),
    /// A constant value.
    Constant(ConstValue),
}

impl KeyIdentity {
    /// The identity of the key type `K`.
    pub fn of<K: ?Sized>() -> Self {
        KeyIdentity::Type(TypeInfo::of::<K>())
    }

    /// Whether two identities name the same slot.
    pub fn matches(self, other: KeyIdentity) -> bool {
        match (self, other) {
            (KeyIdentity::Type(a), KeyIdentity::Type(b)) => a.id == b.id,
            (KeyIdentity::Constant(a), KeyIdentity::Constant(b)) => a.matches(b),
            _ => false,
        }
    }
}

impl fmt::Display for KeyIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyIdentity::Type(ty) => write!(f, "{ty}"),
            KeyIdentity::Constant(value) => write!(f, "constant {value}"),
        }
    }
}
