use core::fmt;
use core::marker::PhantomData;

use crate::{Admit, Payload, PayloadInfo, PayloadKind, TypeInfo};

/// A constant value with its type erased, for comparison across carriers.
///
/// Integers of every width compare by numeric value, so `ConstI32<1>` and
/// `ConstU64<1>` carry equal constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConstValue {
    /// A `bool`.
    Bool(bool),
    /// A `char`.
    Char(char),
    /// Any unsigned integer, widened.
    Unsigned(u128),
    /// Any signed integer, widened.
    Signed(i128),
    /// A string slice.
    Str(&'static str),
}

impl ConstValue {
    /// Whether two erased constants denote the same value.
    pub const fn matches(self, other: ConstValue) -> bool {
        match (self, other) {
            (ConstValue::Bool(a), ConstValue::Bool(b)) => a == b,
            (ConstValue::Char(a), ConstValue::Char(b)) => a == b,
            (ConstValue::Unsigned(a), ConstValue::Unsigned(b)) => a == b,
            (ConstValue::Signed(a), ConstValue::Signed(b)) => a == b,
            (ConstValue::Unsigned(u), ConstValue::Signed(s))
            | (ConstValue::Signed(s), ConstValue::Unsigned(u)) => s >= 0 && s as u128 == u,
            (ConstValue::Str(a), ConstValue::Str(b)) => str_eq(a, b),
            _ => false,
        }
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstValue::Bool(v) => write!(f, "{v}"),
            ConstValue::Char(v) => write!(f, "{v:?}"),
            ConstValue::Unsigned(v) => write!(f, "{v}"),
            ConstValue::Signed(v) => write!(f, "{v}"),
            ConstValue::Str(v) => write!(f, "{v:?}"),
        }
    }
}

/// A zero-sized type standing for one compile-time value.
///
/// Carriers exist for every primitive integer, `bool` and `char`
/// ([`ConstI32`], [`ConstBool`], ...). Other comparable values are declared
/// with [`constant!`](crate::constant).
pub trait ConstantValue: 'static {
    /// Type of the value.
    type Value: Copy + 'static;

    /// The value itself.
    const VALUE: Self::Value;

    /// The value, erased for cross-carrier comparison.
    const ERASED: ConstValue;
}

macro_rules! carriers {
    ($($(#[$meta:meta])* $name:ident($ty:ident) => $variant:ident;)*) => {$(
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name<const V: $ty>;

        impl<const V: $ty> ConstantValue for $name<V> {
            type Value = $ty;
            const VALUE: $ty = V;
            const ERASED: ConstValue = ConstValue::$variant(V as _);
        }
    )*};
}

carriers! {
    /// Carrier for a `u8` constant.
    ConstU8(u8) => Unsigned;
    /// Carrier for a `u16` constant.
    ConstU16(u16) => Unsigned;
    /// Carrier for a `u32` constant.
    ConstU32(u32) => Unsigned;
    /// Carrier for a `u64` constant.
    ConstU64(u64) => Unsigned;
    /// Carrier for a `u128` constant.
    ConstU128(u128) => Unsigned;
    /// Carrier for a `usize` constant. Also the integral-constant form of
    /// a position token.
    ConstUsize(usize) => Unsigned;
    /// Carrier for an `i8` constant.
    ConstI8(i8) => Signed;
    /// Carrier for an `i16` constant.
    ConstI16(i16) => Signed;
    /// Carrier for an `i32` constant.
    ConstI32(i32) => Signed;
    /// Carrier for an `i64` constant.
    ConstI64(i64) => Signed;
    /// Carrier for an `i128` constant.
    ConstI128(i128) => Signed;
    /// Carrier for an `isize` constant.
    ConstIsize(isize) => Signed;
    /// Carrier for a `bool` constant.
    ConstBool(bool) => Bool;
    /// Carrier for a `char` constant.
    ConstChar(char) => Char;
}

/// Declares a constant carrier type for a value of any supported type,
/// including `&'static str`.
///
/// ```
/// use pack_core::{constant, ConstantValue, ConstValue};
///
/// constant! {
///     /// The greeting.
///     pub Greeting: &'static str = "hi"
/// }
///
/// assert_eq!(Greeting::VALUE, "hi");
/// assert_eq!(Greeting::ERASED, ConstValue::Str("hi"));
/// ```
#[macro_export]
macro_rules! constant {
    (@erase bool, $value:expr) => { $crate::ConstValue::Bool($value) };
    (@erase char, $value:expr) => { $crate::ConstValue::Char($value) };
    (@erase u8, $value:expr) => { $crate::ConstValue::Unsigned($value as u128) };
    (@erase u16, $value:expr) => { $crate::ConstValue::Unsigned($value as u128) };
    (@erase u32, $value:expr) => { $crate::ConstValue::Unsigned($value as u128) };
    (@erase u64, $value:expr) => { $crate::ConstValue::Unsigned($value as u128) };
    (@erase u128, $value:expr) => { $crate::ConstValue::Unsigned($value) };
    (@erase usize, $value:expr) => { $crate::ConstValue::Unsigned($value as u128) };
    (@erase i8, $value:expr) => { $crate::ConstValue::Signed($value as i128) };
    (@erase i16, $value:expr) => { $crate::ConstValue::Signed($value as i128) };
    (@erase i32, $value:expr) => { $crate::ConstValue::Signed($value as i128) };
    (@erase i64, $value:expr) => { $crate::ConstValue::Signed($value as i128) };
    (@erase i128, $value:expr) => { $crate::ConstValue::Signed($value) };
    (@erase isize, $value:expr) => { $crate::ConstValue::Signed($value as i128) };

    ($(#[$meta:meta])* $vis:vis $name:ident : &'static str = $value:expr $(;)?) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::ConstantValue for $name {
            type Value = &'static str;
            const VALUE: &'static str = $value;
            const ERASED: $crate::ConstValue = $crate::ConstValue::Str(Self::VALUE);
        }
    };
    ($(#[$meta:meta])* $vis:vis $name:ident : $ty:ident = $value:expr $(;)?) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::ConstantValue for $name {
            type Value = $ty;
            const VALUE: $ty = $value;
            const ERASED: $crate::ConstValue = $crate::constant!(@erase $ty, Self::VALUE);
        }
    };
}

/// Maps a primitive type name and a value to its carrier type.
#[doc(hidden)]
#[macro_export]
macro_rules! carrier {
    (bool, $value:expr) => { $crate::ConstBool<{ $value }> };
    (char, $value:expr) => { $crate::ConstChar<{ $value }> };
    (u8, $value:expr) => { $crate::ConstU8<{ $value }> };
    (u16, $value:expr) => { $crate::ConstU16<{ $value }> };
    (u32, $value:expr) => { $crate::ConstU32<{ $value }> };
    (u64, $value:expr) => { $crate::ConstU64<{ $value }> };
    (u128, $value:expr) => { $crate::ConstU128<{ $value }> };
    (usize, $value:expr) => { $crate::ConstUsize<{ $value }> };
    (i8, $value:expr) => { $crate::ConstI8<{ $value }> };
    (i16, $value:expr) => { $crate::ConstI16<{ $value }> };
    (i32, $value:expr) => { $crate::ConstI32<{ $value }> };
    (i64, $value:expr) => { $crate::ConstI64<{ $value }> };
    (i128, $value:expr) => { $crate::ConstI128<{ $value }> };
    (isize, $value:expr) => { $crate::ConstIsize<{ $value }> };
}

/// Payload that is the constant carried by `C`. Zero-sized: the value lives
/// in the type, not in the slot.
///
/// A constant slot admits any carrier whose value equals its own, across
/// integer widths. A carrier with a different value fails to compile.
pub struct Constant<C>(PhantomData<C>);

impl<C> Constant<C> {
    /// The payload for `C`.
    #[inline]
    pub const fn new() -> Self {
        Constant(PhantomData)
    }
}

impl<C: ConstantValue> Constant<C> {
    /// The carried value.
    #[inline]
    pub const fn value(self) -> C::Value {
        C::VALUE
    }

    /// The carried value, erased.
    #[inline]
    pub const fn erased(self) -> ConstValue {
        C::ERASED
    }
}

impl<C: ConstantValue> Payload for Constant<C> {
    type Key = C;
    const KIND: PayloadKind = PayloadKind::Constant;

    fn info() -> PayloadInfo {
        PayloadInfo::new(Self::KIND, TypeInfo::of::<C>()).with_constant(C::ERASED)
    }
}

impl<C: ConstantValue, A: ConstantValue> Admit<A> for Constant<C> {
    #[inline]
    fn admit(_arg: A) -> Self {
        const {
            assert!(
                C::ERASED.matches(A::ERASED),
                "payload mismatch: constant values differ"
            )
        };
        Constant::new()
    }
}

impl<C> Clone for Constant<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Constant<C> {}

impl<C> Default for Constant<C> {
    fn default() -> Self {
        Constant::new()
    }
}

impl<C> PartialEq for Constant<C> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<C> Eq for Constant<C> {}

impl<C> core::hash::Hash for Constant<C> {
    fn hash<H: core::hash::Hasher>(&self, _state: &mut H) {}
}

impl<C: ConstantValue> fmt::Debug for Constant<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Constant({})", C::ERASED)
    }
}
