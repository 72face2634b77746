//! Selecting the variant kind from what a caller supplies.
//!
//! Each kind has its own entry point here; the `pack!` macro of the `pack`
//! crate picks one from the shape of its arguments. When arguments of
//! different categories are supplied together, [`classify`] rejects them.

use core::fmt;

use crate::{
    Assemble, Construct, ConstantKind, ConstantPack, ConstantTemplateKind, ConstantTemplatePack,
    EmptyPack, IntoList, Layout, MixedTemplateKind, MixedTemplatePack, Nil, ObjectKind,
    ObjectPack, Pack, PackError, ReferencePack, Referents, TemplatesOf, TypeKind, TypePack,
    TypeTemplateKind, TypeTemplatePack,
};

/// What a factory argument is, as far as deduction is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArgCategory {
    /// A type parameter.
    Type,
    /// A constant-value parameter.
    Constant,
    /// A type-parameter template.
    TypeTemplate,
    /// A value-parameter template.
    ConstantTemplate,
    /// A mixed-parameter template.
    MixedTemplate,
    /// A value to be owned by an object slot.
    Object,
    /// A runtime value, borrowed or moved.
    Value,
}

impl ArgCategory {
    /// The variant kind a pack of arguments of this category deduces to.
    pub const fn pack_kind(self) -> PackKind {
        match self {
            ArgCategory::Type => PackKind::Type,
            ArgCategory::Constant => PackKind::Constant,
            ArgCategory::TypeTemplate => PackKind::TypeTemplate,
            ArgCategory::ConstantTemplate => PackKind::ConstantTemplate,
            ArgCategory::MixedTemplate => PackKind::MixedTemplate,
            ArgCategory::Object => PackKind::Object,
            ArgCategory::Value => PackKind::Reference,
        }
    }

    /// Human-readable name of the category.
    pub const fn name(self) -> &'static str {
        match self {
            ArgCategory::Type => "type",
            ArgCategory::Constant => "constant",
            ArgCategory::TypeTemplate => "type template",
            ArgCategory::ConstantTemplate => "constant template",
            ArgCategory::MixedTemplate => "mixed template",
            ArgCategory::Object => "object",
            ArgCategory::Value => "value",
        }
    }
}

impl fmt::Display for ArgCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The variant kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PackKind {
    /// No slots.
    Empty,
    /// Type slots.
    Type,
    /// Constant-value slots.
    Constant,
    /// Type-parameter template slots.
    TypeTemplate,
    /// Value-parameter template slots.
    ConstantTemplate,
    /// Mixed-parameter template slots.
    MixedTemplate,
    /// Owned object slots.
    Object,
    /// Borrowed or owned reference slots.
    Reference,
}

impl fmt::Display for PackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PackKind::Empty => "empty pack",
            PackKind::Type => "type pack",
            PackKind::Constant => "constant pack",
            PackKind::TypeTemplate => "type template pack",
            PackKind::ConstantTemplate => "constant template pack",
            PackKind::MixedTemplate => "mixed template pack",
            PackKind::Object => "object pack",
            PackKind::Reference => "reference pack",
        })
    }
}

/// Folds one more argument category into what has been seen so far.
pub const fn deduce(
    seen: Option<ArgCategory>,
    next: ArgCategory,
) -> Result<ArgCategory, PackError> {
    match seen {
        None => Ok(next),
        Some(first) if first as u8 == next as u8 => Ok(first),
        Some(first) => Err(PackError::DeductionFailure {
            first,
            conflicting: next,
        }),
    }
}

/// Deduces the variant kind for arguments of the given categories.
///
/// No arguments deduce to [`PackKind::Empty`]; arguments of one category
/// deduce to that category's kind; anything else is a
/// [`PackError::DeductionFailure`].
pub const fn classify(categories: &[ArgCategory]) -> Result<PackKind, PackError> {
    let mut seen = None;
    let mut i = 0;
    while i < categories.len() {
        seen = match deduce(seen, categories[i]) {
            Ok(category) => Some(category),
            Err(err) => return Err(err),
        };
        i += 1;
    }
    Ok(match seen {
        Some(category) => category.pack_kind(),
        None => PackKind::Empty,
    })
}

/// [`classify`], for constant evaluation: a mixture fails the build.
#[doc(hidden)]
pub const fn expect_single_kind(categories: &[ArgCategory]) -> PackKind {
    match classify(categories) {
        Ok(kind) => kind,
        Err(_) => panic!("deduction failure: pack arguments mix incompatible categories"),
    }
}

/// The pack with no slots.
#[inline]
pub const fn empty() -> EmptyPack {
    Pack::from_slots(Nil)
}

/// The type pack for the tuple of types `Ts`.
#[inline]
pub fn types<Ts>() -> TypePack<Ts>
where
    Ts: Layout<TypeKind>,
    <Ts as Layout<TypeKind>>::Slots: Default,
{
    Pack::default()
}

/// The type pack deduced from a tuple of references: `types_of((&1u8, &'x'))`
/// is a `TypePack<(u8, char)>`.
#[inline]
pub fn types_of<Args>(referents: Args) -> TypePack<Args::Targets>
where
    Args: Referents + IntoList,
    Args::Targets: Layout<TypeKind>,
    Args::List: Construct<<Args::Targets as Layout<TypeKind>>::Slots>,
{
    Pack::new(referents)
}

/// The constant pack for the tuple of carriers `Cs`.
#[inline]
pub fn constants<Cs>() -> ConstantPack<Cs>
where
    Cs: Layout<ConstantKind>,
    <Cs as Layout<ConstantKind>>::Slots: Default,
{
    Pack::default()
}

/// The constant pack deduced from a tuple of carrier values.
#[inline]
pub fn constants_of<Cs>(carriers: Cs) -> ConstantPack<Cs>
where
    Cs: Layout<ConstantKind> + IntoList,
    Cs::List: Construct<<Cs as Layout<ConstantKind>>::Slots>,
{
    Pack::new(carriers)
}

macro_rules! template_factories {
    ($($(#[$meta:meta])* $plain:ident, $of:ident => $kind:ident, $alias:ident;)*) => {$(
        $(#[$meta])*
        #[inline]
        pub fn $plain<Tms>() -> $alias<Tms>
        where
            Tms: Layout<$kind>,
            <Tms as Layout<$kind>>::Slots: Default,
        {
            Pack::default()
        }

        $(#[$meta])*
        ///
        /// The templates are deduced from a tuple of references to instances;
        /// instances of any binding are accepted.
        #[inline]
        pub fn $of<Args>(instances: Args) -> $alias<Args::Templates>
        where
            Args: TemplatesOf + IntoList,
            Args::Templates: Layout<$kind>,
            Args::List: Construct<<Args::Templates as Layout<$kind>>::Slots>,
        {
            Pack::new(instances)
        }
    )*};
}

template_factories! {
    /// The type-template pack for the templates `Tms`.
    type_templates, type_templates_of => TypeTemplateKind, TypeTemplatePack;
    /// The constant-template pack for the templates `Tms`.
    constant_templates, constant_templates_of => ConstantTemplateKind, ConstantTemplatePack;
    /// The mixed-template pack for the templates `Tms`.
    mixed_templates, mixed_templates_of => MixedTemplateKind, MixedTemplatePack;
}

/// The object pack owning `values`.
///
/// Object packs are only ever built on request; [`references`] is the
/// default for runtime values.
#[inline]
pub fn objects<Ts>(values: Ts) -> ObjectPack<Ts>
where
    Ts: Layout<ObjectKind> + IntoList,
    Ts::List: Construct<<Ts as Layout<ObjectKind>>::Slots>,
{
    Pack::new(values)
}

/// The reference pack holding the given reference payloads, each a
/// [`Borrowed`](crate::Borrowed), [`BorrowedMut`](crate::BorrowedMut) or
/// [`Owned`](crate::Owned).
#[inline]
pub fn references<Ps: Assemble>(payloads: Ps) -> ReferencePack<Ps> {
    Pack::from_slots(payloads.assemble())
}
