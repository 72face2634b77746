//! The variant kinds: one pack alias per payload kind, built from tuples.
//!
//! `TypePack<(u8, char)>` is the pack whose slot 0 is the type `u8` and whose
//! slot 1 is the type `char`. Tuple layouts are generated up to arity 4, or
//! 12 with the `tuples-12` feature; longer packs can always be spelled out
//! with [`Slots!`](crate::Slots).

use crate::{
    Constant, ConstantTemplate, ConstantValue, Element, Instance, IntoList, MixedParams,
    MixedTemplate, Nil, Object, Pack, Payload, SlotList, Template, TemplateOf, Type, TypeParams,
    TypeTemplate, ValueParams,
};

/// Kind marker for type packs.
#[derive(Clone, Copy, Debug, Default)]
pub struct TypeKind;

/// Kind marker for constant-value packs.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConstantKind;

/// Kind marker for type-template packs.
#[derive(Clone, Copy, Debug, Default)]
pub struct TypeTemplateKind;

/// Kind marker for constant-template packs.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConstantTemplateKind;

/// Kind marker for mixed-template packs.
#[derive(Clone, Copy, Debug, Default)]
pub struct MixedTemplateKind;

/// Kind marker for object packs.
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjectKind;

/// The slot list a tuple of parameters lays out to, for one variant kind.
pub trait Layout<Kind> {
    /// The slots, positioned from 0 in tuple order.
    type Slots: SlotList;
}

/// A tuple of ready-made payloads, laid out as slots keyed by payload
/// identity.
pub trait Assemble {
    /// The slots, positioned from 0 in tuple order.
    type Slots: SlotList;

    /// Wraps each payload in its element.
    fn assemble(self) -> Self::Slots;
}

/// A tuple of references, `(&A, &B)`, mapped to the tuple of its referent
/// types, `(A, B)`.
pub trait Referents {
    /// The referent types.
    type Targets;
}

/// A tuple of references to template instances, mapped to the tuple of
/// their templates.
pub trait TemplatesOf {
    /// The templates, in order.
    type Templates;
}

/// The pack with no slots.
pub type EmptyPack = Pack<Nil>;

/// Pack of types: `TypePack<(u8, char)>`.
pub type TypePack<Ts> = Pack<<Ts as Layout<TypeKind>>::Slots>;

/// Pack of constants, given as carriers: `ConstantPack<(ConstI32<1>, ConstBool<true>)>`.
pub type ConstantPack<Cs> = Pack<<Cs as Layout<ConstantKind>>::Slots>;

/// Pack of type-parameter templates.
pub type TypeTemplatePack<Tms> = Pack<<Tms as Layout<TypeTemplateKind>>::Slots>;

/// Pack of value-parameter templates.
pub type ConstantTemplatePack<Tms> = Pack<<Tms as Layout<ConstantTemplateKind>>::Slots>;

/// Pack of mixed-parameter templates.
pub type MixedTemplatePack<Tms> = Pack<<Tms as Layout<MixedTemplateKind>>::Slots>;

/// Pack of owned values: `ObjectPack<(u32, String)>`.
pub type ObjectPack<Ts> = Pack<<Ts as Layout<ObjectKind>>::Slots>;

/// Pack of borrowed or owned references, given as payloads:
/// `ReferencePack<(Borrowed<'a, u32>, Owned<String>)>`.
pub type ReferencePack<Ps> = Pack<<Ps as Assemble>::Slots>;

impl IntoList for () {
    type List = Nil;

    #[inline]
    fn into_list(self) -> Nil {
        Nil
    }
}

impl<Kind> Layout<Kind> for () {
    type Slots = Nil;
}

impl Assemble for () {
    type Slots = Nil;

    #[inline]
    fn assemble(self) -> Nil {
        Nil
    }
}

impl Referents for () {
    type Targets = ();
}

impl TemplatesOf for () {
    type Templates = ();
}

macro_rules! impl_layouts_for_tuple {
    // Used to implement the next bigger tuple type, by taking the next typename & associated index
    // out of `remaining`, if it exists.
    {
        continue from ($($elems:ident.$idx:tt,)+),
        remaining ()
    } => {};
    {
        continue from ($($elems:ident.$idx:tt,)+),
        remaining ($next:ident.$nextidx:tt, $($remaining:ident.$remainingidx:tt,)*)
    } => {
        impl_layouts_for_tuple! {
            impl ($($elems.$idx,)+ $next.$nextidx,),
            remaining ($($remaining.$remainingidx,)*)
        }
    };
    // Generate the layouts for this arity, and keep the remaining possible elements around
    {
        impl ($($elems:ident.$idx:tt,)+),
        remaining ($($remaining:ident.$remainingidx:tt,)*)
    } => {
        impl<$($elems),+> IntoList for ($($elems,)+) {
            type List = crate::List![$($elems),+];

            #[inline]
            fn into_list(self) -> Self::List {
                crate::cons![$(self.$idx),+]
            }
        }

        impl<$($elems),+> Layout<TypeKind> for ($($elems,)+) {
            type Slots = crate::List![$(Element<Type<$elems>, $idx, $elems>),+];
        }

        impl<$($elems: ConstantValue),+> Layout<ConstantKind> for ($($elems,)+) {
            type Slots = crate::List![$(Element<Constant<$elems>, $idx, $elems>),+];
        }

        impl<$($elems: Template<Shape = TypeParams>),+> Layout<TypeTemplateKind> for ($($elems,)+) {
            type Slots = crate::List![$(Element<TypeTemplate<$elems>, $idx, $elems>),+];
        }

        impl<$($elems: Template<Shape = ValueParams>),+> Layout<ConstantTemplateKind> for ($($elems,)+) {
            type Slots = crate::List![$(Element<ConstantTemplate<$elems>, $idx, $elems>),+];
        }

        impl<$($elems: Template<Shape = MixedParams>),+> Layout<MixedTemplateKind> for ($($elems,)+) {
            type Slots = crate::List![$(Element<MixedTemplate<$elems>, $idx, $elems>),+];
        }

        impl<$($elems),+> Layout<ObjectKind> for ($($elems,)+) {
            type Slots = crate::List![$(Element<Object<$elems>, $idx, $elems>),+];
        }

        impl<$($elems: Payload),+> Assemble for ($($elems,)+) {
            type Slots = crate::List![$(Element<$elems, $idx, <$elems as Payload>::Key>),+];

            #[inline]
            fn assemble(self) -> Self::Slots {
                crate::cons![$(Element::from_payload(self.$idx)),+]
            }
        }

        impl<'a, $($elems: 'a),+> Referents for ($(&'a $elems,)+) {
            type Targets = ($($elems,)+);
        }

        impl<'a, $($elems: Instance + 'a),+> TemplatesOf for ($(&'a $elems,)+) {
            type Templates = ($(TemplateOf<$elems>,)+);
        }

        impl_layouts_for_tuple! {
            continue from ($($elems.$idx,)+),
            remaining ($($remaining.$remainingidx,)*)
        }
    };
    // The entry point into this macro, all smaller tuple types get implemented as well.
    { ($first:ident.$firstidx:tt $(, $remaining:ident.$remainingidx:tt)* $(,)?) } => {
        impl_layouts_for_tuple! {
            impl ($first.$firstidx,),
            remaining ($($remaining.$remainingidx,)*)
        }
    };
}

#[cfg(feature = "tuples-12")]
impl_layouts_for_tuple! {
    (T0.0, T1.1, T2.2, T3.3, T4.4, T5.5, T6.6, T7.7, T8.8, T9.9, T10.10, T11.11)
}

#[cfg(not(feature = "tuples-12"))]
impl_layouts_for_tuple! {
    (T0.0, T1.1, T2.2, T3.3)
}
