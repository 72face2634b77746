use crate::{Admit, Payload, PayloadInfo, PayloadKind, Stored, StoredMut, TypeInfo};

/// Payload that owns a `T`.
///
/// An object slot admits anything convertible into `T` and keeps its own
/// copy: the caller's original is not shared with the slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Object<T>(T);

impl<T> Object<T> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: T) -> Self {
        Object(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Payload for Object<T> {
    type Key = T;
    const KIND: PayloadKind = PayloadKind::Object;

    fn info() -> PayloadInfo {
        PayloadInfo::new(Self::KIND, TypeInfo::of::<T>())
    }
}

impl<T, A: Into<T>> Admit<A> for Object<T> {
    #[inline]
    fn admit(arg: A) -> Self {
        Object(arg.into())
    }
}

impl<T> Stored for Object<T> {
    type Value = T;

    #[inline]
    fn value(&self) -> &T {
        &self.0
    }
}

impl<T> StoredMut for Object<T> {
    #[inline]
    fn value_mut(&mut self) -> &mut T {
        &mut self.0
    }
}
