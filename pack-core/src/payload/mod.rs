//! Payload descriptors: what a slot declares it holds.
//!
//! Every payload kind is a type implementing [`Payload`]. Compatibility
//! between a payload and a construction argument is the trait [`Admit`]:
//! a missing impl is a compile error, so an incompatible argument never
//! reaches a running program.

use core::fmt;

use crate::PayloadInfo;
use crate::factory::ArgCategory;

mod ty;
pub use ty::*;

mod constant;
pub use constant::*;

mod template;
pub use template::*;

mod object;
pub use object::*;

mod reference;
pub use reference::*;

/// The declared content kind of a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PayloadKind {
    /// A type identity, no runtime value.
    Type,
    /// A compile-time constant value.
    Constant,
    /// A generic constructor over type parameters.
    TypeTemplate,
    /// A generic constructor over value parameters.
    ConstantTemplate,
    /// A generic constructor over type and value parameters.
    MixedTemplate,
    /// A value owned by the slot.
    Object,
    /// A shared borrow of a caller-owned value.
    Borrowed,
    /// An exclusive borrow of a caller-owned value.
    BorrowedMut,
    /// A value moved into the slot in place of a borrow.
    Owned,
}

impl PayloadKind {
    /// The argument category a factory sees for this payload kind.
    pub const fn category(self) -> ArgCategory {
        match self {
            PayloadKind::Type => ArgCategory::Type,
            PayloadKind::Constant => ArgCategory::Constant,
            PayloadKind::TypeTemplate => ArgCategory::TypeTemplate,
            PayloadKind::ConstantTemplate => ArgCategory::ConstantTemplate,
            PayloadKind::MixedTemplate => ArgCategory::MixedTemplate,
            PayloadKind::Object => ArgCategory::Object,
            PayloadKind::Borrowed | PayloadKind::BorrowedMut | PayloadKind::Owned => {
                ArgCategory::Value
            }
        }
    }

    /// Whether slots of this kind hold runtime data.
    pub const fn has_storage(self) -> bool {
        matches!(
            self,
            PayloadKind::Object
                | PayloadKind::Borrowed
                | PayloadKind::BorrowedMut
                | PayloadKind::Owned
        )
    }

    /// Human-readable name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            PayloadKind::Type => "type",
            PayloadKind::Constant => "constant",
            PayloadKind::TypeTemplate => "type template",
            PayloadKind::ConstantTemplate => "constant template",
            PayloadKind::MixedTemplate => "mixed template",
            PayloadKind::Object => "object",
            PayloadKind::Borrowed => "borrowed",
            PayloadKind::BorrowedMut => "borrowed mut",
            PayloadKind::Owned => "owned",
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A slot's declared content.
pub trait Payload {
    /// The identity a slot with this payload is keyed by, unless the slot
    /// list overrides it.
    type Key: ?Sized;

    /// Which kind of payload this is.
    const KIND: PayloadKind;

    /// Runtime description of the payload.
    fn info() -> PayloadInfo;
}

/// `P: Admit<A>` means an argument of type `A` is compatible with payload
/// `P`, and `P` can be built from it.
#[diagnostic::on_unimplemented(
    message = "payload mismatch: `{A}` is not compatible with the slot payload `{Self}`",
    label = "this argument does not fit its slot",
    note = "type slots take `&T` of exactly their type, template slots take `&` an instance of their template, storage slots take values convertible to their type"
)]
pub trait Admit<A>: Payload + Sized {
    /// Builds the payload from the argument.
    fn admit(arg: A) -> Self;
}

/// Payloads that hold (or borrow) a runtime value.
pub trait Stored: Payload {
    /// Type of the held value.
    type Value: ?Sized;

    /// Shared access to the held value.
    fn value(&self) -> &Self::Value;
}

/// Payloads whose held value can be changed in place.
pub trait StoredMut: Stored {
    /// Exclusive access to the held value.
    fn value_mut(&mut self) -> &mut Self::Value;
}
