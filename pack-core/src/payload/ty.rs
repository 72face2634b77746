use core::any::type_name;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::{Admit, ConstTypeId, Payload, PayloadInfo, PayloadKind, TypeInfo};

/// Payload that is the type `T` itself. Zero-sized.
///
/// A type slot admits `&T`, or the payload `Type<T>` itself, and nothing
/// else: the referent is used for deduction and then dropped, no implicit
/// conversion takes place.
pub struct Type<T: ?Sized>(PhantomData<fn() -> *const T>);

impl<T: ?Sized> Type<T> {
    /// The payload for `T`.
    #[inline]
    pub const fn new() -> Self {
        Type(PhantomData)
    }

    /// Identity of `T`.
    #[inline]
    pub const fn type_id(self) -> ConstTypeId {
        ConstTypeId::of::<T>()
    }

    /// Name of `T`.
    #[inline]
    pub fn type_name(self) -> &'static str {
        type_name::<T>()
    }
}

impl<T: ?Sized> Payload for Type<T> {
    type Key = T;
    const KIND: PayloadKind = PayloadKind::Type;

    fn info() -> PayloadInfo {
        PayloadInfo::new(Self::KIND, TypeInfo::of::<T>())
    }
}

impl<'a, T: ?Sized> Admit<&'a T> for Type<T> {
    #[inline]
    fn admit(_arg: &'a T) -> Self {
        Type::new()
    }
}

impl<T: ?Sized> Admit<Type<T>> for Type<T> {
    #[inline]
    fn admit(arg: Type<T>) -> Self {
        arg
    }
}

impl<T: ?Sized> Clone for Type<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Type<T> {}

impl<T: ?Sized> Default for Type<T> {
    fn default() -> Self {
        Type::new()
    }
}

impl<T: ?Sized> PartialEq for Type<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T: ?Sized> Eq for Type<T> {}

impl<T: ?Sized> Hash for Type<T> {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

impl<T: ?Sized> fmt::Debug for Type<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type<{}>", type_name::<T>())
    }
}
