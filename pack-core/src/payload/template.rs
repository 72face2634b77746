use core::any::type_name;
use core::fmt;
use core::marker::PhantomData;

use crate::{Admit, Payload, PayloadInfo, PayloadKind, Type, TypeInfo};

/// How a template's parameters are shaped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamShape {
    /// Type parameters only, like `Vec<T>`.
    Types,
    /// Value parameters only, like `Fixed<const N: usize>`.
    Values,
    /// Type parameters followed by value parameters, like `[T; N]`.
    Mixed,
}

impl fmt::Display for ParamShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParamShape::Types => "type",
            ParamShape::Values => "value",
            ParamShape::Mixed => "mixed",
        })
    }
}

/// Type-level marker for a [`ParamShape`].
pub trait TemplateShape: 'static {
    /// The shape this marker stands for.
    const SHAPE: ParamShape;
}

/// Marker: the template takes type parameters only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TypeParams;

/// Marker: the template takes value parameters only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ValueParams;

/// Marker: the template takes type parameters, then value parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MixedParams;

impl TemplateShape for TypeParams {
    const SHAPE: ParamShape = ParamShape::Types;
}

impl TemplateShape for ValueParams {
    const SHAPE: ParamShape = ParamShape::Values;
}

impl TemplateShape for MixedParams {
    const SHAPE: ParamShape = ParamShape::Mixed;
}

/// The identity of a generic type constructor, independent of the
/// parameters it is bound to.
///
/// Templates are zero-sized marker types, usually declared with
/// [`type_template!`](crate::type_template),
/// [`value_template!`](crate::value_template) or
/// [`mixed_template!`](crate::mixed_template).
pub trait Template: 'static {
    /// Shape of the parameter list.
    type Shape: TemplateShape;

    /// Name of the generic type.
    const NAME: &'static str;

    /// Number of parameters.
    const ARITY: usize;

    /// Runtime description of the template.
    fn info() -> TemplateInfo {
        TemplateInfo {
            name: Self::NAME,
            shape: <Self::Shape as TemplateShape>::SHAPE,
            arity: Self::ARITY,
        }
    }
}

/// A concrete instantiation of a template.
pub trait Instance {
    /// The template this type instantiates.
    type Template: Template;

    /// The bound parameters, as a tuple. Value parameters appear as their
    /// constant carriers.
    type Params;
}

/// Rebinding: the instantiation of `Self` with the parameters `Params`.
pub trait Rebind<Params>: Template {
    /// The rebound instantiation. Its template is `Self` again.
    type Output: Instance<Template = Self, Params = Params>;
}

/// The instantiation of template `Tm` with parameters `P`.
pub type Rebound<Tm, P> = <Tm as Rebind<P>>::Output;

/// The template an instantiation `A` was built from.
pub type TemplateOf<A> = <A as Instance>::Template;

/// Runtime description of a template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TemplateInfo {
    /// Name of the generic type.
    pub name: &'static str,
    /// Shape of the parameter list.
    pub shape: ParamShape,
    /// Number of parameters.
    pub arity: usize,
}

impl fmt::Display for TemplateInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}<{} {} param{}>",
            self.name,
            self.arity,
            self.shape,
            if self.arity == 1 { "" } else { "s" }
        )
    }
}

macro_rules! template_payload {
    ($(#[$meta:meta])* $name:ident, $shape:ident, $kind:ident) => {
        $(#[$meta])*
        pub struct $name<Tm>(PhantomData<Tm>);

        impl<Tm> $name<Tm> {
            /// The payload for `Tm`.
            #[inline]
            pub const fn new() -> Self {
                $name(PhantomData)
            }
        }

        impl<Tm: Template<Shape = $shape>> $name<Tm> {
            /// Describes the template.
            pub fn template(self) -> TemplateInfo {
                Tm::info()
            }

            /// The type payload for the instantiation of `Tm` with `P`.
            pub fn instantiate<P>(self) -> Type<Rebound<Tm, P>>
            where
                Tm: Rebind<P>,
            {
                Type::new()
            }
        }

        impl<Tm: Template<Shape = $shape>> Payload for $name<Tm> {
            type Key = Tm;
            const KIND: PayloadKind = PayloadKind::$kind;

            fn info() -> PayloadInfo {
                PayloadInfo::new(Self::KIND, TypeInfo::of::<Tm>()).with_template(Tm::info())
            }
        }

        impl<'a, Tm, A> Admit<&'a A> for $name<Tm>
        where
            Tm: Template<Shape = $shape>,
            A: Instance<Template = Tm> + ?Sized,
        {
            #[inline]
            fn admit(_arg: &'a A) -> Self {
                $name::new()
            }
        }

        impl<Tm> Clone for $name<Tm> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<Tm> Copy for $name<Tm> {}

        impl<Tm> Default for $name<Tm> {
            fn default() -> Self {
                $name::new()
            }
        }

        impl<Tm> PartialEq for $name<Tm> {
            fn eq(&self, _other: &Self) -> bool {
                true
            }
        }

        impl<Tm> Eq for $name<Tm> {}

        impl<Tm> core::hash::Hash for $name<Tm> {
            fn hash<H: core::hash::Hasher>(&self, _state: &mut H) {}
        }

        impl<Tm> fmt::Debug for $name<Tm> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}<{}>", stringify!($name), type_name::<Tm>())
            }
        }
    };
}

template_payload!(
    /// Payload that is a type-parameter template. Zero-sized.
    ///
    /// Admits `&A` for any instantiation `A` of `Tm`, whatever its bound
    /// parameters are.
    TypeTemplate,
    TypeParams,
    TypeTemplate
);

template_payload!(
    /// Payload that is a value-parameter template. Zero-sized.
    ConstantTemplate,
    ValueParams,
    ConstantTemplate
);

template_payload!(
    /// Payload that is a mixed-parameter template. Zero-sized.
    MixedTemplate,
    MixedParams,
    MixedTemplate
);

/// Counts identifiers.
#[doc(hidden)]
#[macro_export]
macro_rules! count {
    () => { 0usize };
    ($head:ident $($tail:ident)*) => { 1usize + $crate::count!($($tail)*) };
}

/// Declares a template marker for a generic type over type parameters.
///
/// The generic type must be local to the invoking crate, and the marker
/// can be no more visible than the generic type: the marker's rebinding
/// names it.
///
/// ```
/// use pack_core::{type_template, Instance, Rebound, Template};
///
/// pub struct Pair<A, B>(pub A, pub B);
///
/// type_template! {
///     /// `Pair<A, B>`.
///     pub PairTemplate = Pair<A, B>;
/// }
///
/// assert_eq!(PairTemplate::ARITY, 2);
/// let _: Rebound<PairTemplate, (u8, char)> = Pair(1u8, 'x');
/// ```
#[macro_export]
macro_rules! type_template {
    ($(#[$meta:meta])* $vis:vis $name:ident = $ty:ident < $($param:ident),+ $(,)? > $(;)?) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::Template for $name {
            type Shape = $crate::TypeParams;
            const NAME: &'static str = stringify!($ty);
            const ARITY: usize = $crate::count!($($param)+);
        }

        impl<$($param),+> $crate::Instance for $ty<$($param),+> {
            type Template = $name;
            type Params = ($($param,)+);
        }

        impl<$($param),+> $crate::Rebind<($($param,)+)> for $name {
            type Output = $ty<$($param),+>;
        }
    };
}

/// Declares a template marker for a generic type over value parameters.
///
/// Each parameter names its primitive type; the bound parameters of an
/// instantiation are the matching constant carriers. As with
/// [`type_template!`](crate::type_template), the marker can be no more
/// visible than the generic type.
///
/// ```
/// use pack_core::{value_template, ConstUsize, Instance, Template};
///
/// pub struct Fixed<const N: usize>;
///
/// value_template! {
///     pub FixedTemplate = Fixed<const N: usize>;
/// }
///
/// fn params<A: Instance<Params = (ConstUsize<3>,)>>(_: &A) {}
/// params(&Fixed::<3>);
/// assert_eq!(FixedTemplate::NAME, "Fixed");
/// ```
#[macro_export]
macro_rules! value_template {
    ($(#[$meta:meta])* $vis:vis $name:ident = $ty:ident < $(const $param:ident : $pty:ident),+ $(,)? > $(;)?) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::Template for $name {
            type Shape = $crate::ValueParams;
            const NAME: &'static str = stringify!($ty);
            const ARITY: usize = $crate::count!($($param)+);
        }

        impl<$(const $param: $pty),+> $crate::Instance for $ty<$($param),+> {
            type Template = $name;
            type Params = ($($crate::carrier!($pty, $param),)+);
        }

        impl<$(const $param: $pty),+> $crate::Rebind<($($crate::carrier!($pty, $param),)+)> for $name {
            type Output = $ty<$($param),+>;
        }
    };
}

/// Declares a template marker for a generic type over type parameters
/// followed by value parameters. A `;` separates the two groups. The marker
/// can be no more visible than the generic type.
///
/// ```
/// use pack_core::{mixed_template, ConstU8, ParamShape, Rebound, Template};
///
/// pub struct Grid<T, const W: u8, const H: u8>(pub T);
///
/// mixed_template! {
///     pub GridTemplate = Grid<T; const W: u8, const H: u8>;
/// }
///
/// assert_eq!(GridTemplate::ARITY, 3);
/// assert_eq!(GridTemplate::info().shape, ParamShape::Mixed);
/// let _: Rebound<GridTemplate, (bool, ConstU8<2>, ConstU8<2>)> = Grid::<bool, 2, 2>(true);
/// ```
#[macro_export]
macro_rules! mixed_template {
    ($(#[$meta:meta])* $vis:vis $name:ident = $ty:ident < $($tparam:ident),+ ; $(const $cparam:ident : $cty:ident),+ $(,)? > $(;)?) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::Template for $name {
            type Shape = $crate::MixedParams;
            const NAME: &'static str = stringify!($ty);
            const ARITY: usize = $crate::count!($($tparam)+ $($cparam)+);
        }

        impl<$($tparam,)+ $(const $cparam: $cty),+> $crate::Instance for $ty<$($tparam,)+ $($cparam),+> {
            type Template = $name;
            type Params = ($($tparam,)+ $($crate::carrier!($cty, $cparam),)+);
        }

        impl<$($tparam,)+ $(const $cparam: $cty),+> $crate::Rebind<($($tparam,)+ $($crate::carrier!($cty, $cparam),)+)> for $name {
            type Output = $ty<$($tparam,)+ $($cparam),+>;
        }
    };
}
