use core::any::type_name;
use core::fmt;

use crate::{ConstTypeId, ConstValue, KeyIdentity, PayloadKind, TemplateInfo};

/// Identity and name of a type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// Identity of the type, lifetimes erased.
    pub id: ConstTypeId,
    /// Name of the type, as reported by [`core::any::type_name`].
    pub name: &'static str,
}

impl TypeInfo {
    /// Describes `T`.
    pub fn of<T: ?Sized>() -> Self {
        TypeInfo {
            id: ConstTypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Whether this describes `T`.
    pub fn is<T: ?Sized>(&self) -> bool {
        self.id == ConstTypeId::of::<T>()
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Runtime description of a payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PayloadInfo {
    /// Which kind of payload.
    pub kind: PayloadKind,
    /// The payload's declared type: the type itself for type slots, the
    /// carrier for constants, the marker for templates, the stored or
    /// borrowed type otherwise.
    pub ty: TypeInfo,
    /// The carried value, for constants.
    pub constant: Option<ConstValue>,
    /// The template, for template payloads.
    pub template: Option<TemplateInfo>,
}

impl PayloadInfo {
    /// A payload of `kind` declaring `ty`.
    pub const fn new(kind: PayloadKind, ty: TypeInfo) -> Self {
        PayloadInfo {
            kind,
            ty,
            constant: None,
            template: None,
        }
    }

    /// Attaches a constant value.
    pub const fn with_constant(mut self, value: ConstValue) -> Self {
        self.constant = Some(value);
        self
    }

    /// Attaches a template description.
    pub const fn with_template(mut self, template: TemplateInfo) -> Self {
        self.template = Some(template);
        self
    }
}

/// Runtime description of one slot of a pack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotDescriptor {
    /// Position of the slot.
    pub position: usize,
    /// Which kind of payload the slot holds.
    pub kind: PayloadKind,
    /// The payload's declared type.
    pub payload: TypeInfo,
    /// The type the slot is keyed by.
    pub key: TypeInfo,
    /// The carried value, for constant slots.
    pub constant: Option<ConstValue>,
    /// The template, for template slots.
    pub template: Option<TemplateInfo>,
}

impl SlotDescriptor {
    /// Combines a payload description with the slot's position and key.
    pub const fn new(position: usize, payload: PayloadInfo, key: TypeInfo) -> Self {
        SlotDescriptor {
            position,
            kind: payload.kind,
            payload: payload.ty,
            key,
            constant: payload.constant,
            template: payload.template,
        }
    }

    /// Whether the slot is keyed by something other than its payload.
    pub fn has_custom_key(&self) -> bool {
        self.key.id != self.payload.id
    }

    /// The identity this slot is compared by: its value for a constant
    /// keyed by its own carrier, its key type otherwise.
    pub fn identity(&self) -> KeyIdentity {
        match self.constant {
            Some(value) if !self.has_custom_key() => KeyIdentity::Constant(value),
            _ => KeyIdentity::Type(self.key),
        }
    }

    /// Whether this slot answers to `identity`.
    ///
    /// A constant slot answers to its value and also to its carrier type,
    /// the way it answers to `key::<Carrier>()` at compile time.
    pub fn answers(&self, identity: KeyIdentity) -> bool {
        self.identity().matches(identity) || KeyIdentity::Type(self.key).matches(identity)
    }
}

impl fmt::Display for SlotDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.position, self.kind)?;
        match (self.constant, self.template) {
            (Some(value), _) => write!(f, " {value}")?,
            (None, Some(template)) => write!(f, " {template}")?,
            (None, None) => write!(f, " {}", self.payload)?,
        }
        if self.has_custom_key() {
            write!(f, " keyed by {}", self.key)?;
        }
        Ok(())
    }
}
