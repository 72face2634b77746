//! Reference payloads: the slot either borrows caller-owned storage or owns
//! a value moved in by the caller. The choice is made per argument, when
//! the pack is built.

use core::borrow::{Borrow, BorrowMut};
use core::fmt;

use crate::{Admit, Payload, PayloadInfo, PayloadKind, Stored, StoredMut, TypeInfo};

/// Payload that borrows a `T` for `'a`.
///
/// The referent must outlive the slot. Changes the owner makes through
/// interior mutability are visible through the slot.
pub struct Borrowed<'a, T: ?Sized>(&'a T);

impl<'a, T: ?Sized> Borrowed<'a, T> {
    /// Borrows `value`.
    #[inline]
    pub const fn new(value: &'a T) -> Self {
        Borrowed(value)
    }

    /// The borrowed reference, with its full lifetime.
    #[inline]
    pub const fn get(&self) -> &'a T {
        self.0
    }
}

impl<T: ?Sized> Payload for Borrowed<'_, T> {
    type Key = T;
    const KIND: PayloadKind = PayloadKind::Borrowed;

    fn info() -> PayloadInfo {
        PayloadInfo::new(Self::KIND, TypeInfo::of::<T>())
    }
}

impl<'a, T: ?Sized, U: Borrow<T> + ?Sized> Admit<&'a U> for Borrowed<'a, T> {
    #[inline]
    fn admit(arg: &'a U) -> Self {
        Borrowed(arg.borrow())
    }
}

impl<T: ?Sized> Stored for Borrowed<'_, T> {
    type Value = T;

    #[inline]
    fn value(&self) -> &T {
        self.0
    }
}

impl<T: ?Sized> Clone for Borrowed<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Borrowed<'_, T> {}

impl<T: ?Sized + PartialEq> PartialEq for Borrowed<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Borrowed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Borrowed").field(&self.0).finish()
    }
}

/// Payload that exclusively borrows a `T` for `'a`.
///
/// Writes through the slot land in the caller's storage.
pub struct BorrowedMut<'a, T: ?Sized>(&'a mut T);

impl<'a, T: ?Sized> BorrowedMut<'a, T> {
    /// Borrows `value` exclusively.
    #[inline]
    pub fn new(value: &'a mut T) -> Self {
        BorrowedMut(value)
    }

    /// Gives the exclusive borrow back.
    #[inline]
    pub fn into_inner(self) -> &'a mut T {
        self.0
    }
}

impl<T: ?Sized> Payload for BorrowedMut<'_, T> {
    type Key = T;
    const KIND: PayloadKind = PayloadKind::BorrowedMut;

    fn info() -> PayloadInfo {
        PayloadInfo::new(Self::KIND, TypeInfo::of::<T>())
    }
}

impl<'a, T: ?Sized, U: BorrowMut<T> + ?Sized> Admit<&'a mut U> for BorrowedMut<'a, T> {
    #[inline]
    fn admit(arg: &'a mut U) -> Self {
        BorrowedMut(arg.borrow_mut())
    }
}

impl<T: ?Sized> Stored for BorrowedMut<'_, T> {
    type Value = T;

    #[inline]
    fn value(&self) -> &T {
        &*self.0
    }
}

impl<T: ?Sized> StoredMut for BorrowedMut<'_, T> {
    #[inline]
    fn value_mut(&mut self) -> &mut T {
        &mut *self.0
    }
}

impl<T: ?Sized + PartialEq> PartialEq for BorrowedMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for BorrowedMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BorrowedMut").field(&self.0).finish()
    }
}

/// Payload that owns a `T` handed over in place of a borrow, typically a
/// temporary that would not outlive the pack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Owned<T>(T);

impl<T> Owned<T> {
    /// Takes ownership of `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Owned(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Payload for Owned<T> {
    type Key = T;
    const KIND: PayloadKind = PayloadKind::Owned;

    fn info() -> PayloadInfo {
        PayloadInfo::new(Self::KIND, TypeInfo::of::<T>())
    }
}

impl<T, A: Into<T>> Admit<A> for Owned<T> {
    #[inline]
    fn admit(arg: A) -> Self {
        Owned(arg.into())
    }
}

impl<T> Stored for Owned<T> {
    type Value = T;

    #[inline]
    fn value(&self) -> &T {
        &self.0
    }
}

impl<T> StoredMut for Owned<T> {
    #[inline]
    fn value_mut(&mut self) -> &mut T {
        &mut self.0
    }
}
