#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use pack_core::*;

pub use static_assertions;

/// Builds a pack, picking its variant kind from the arguments.
///
/// | Invocation | Result |
/// |---|---|
/// | `pack!()` | [`EmptyPack`] |
/// | `pack!(type u8, f64)` | [`TypePack<(u8, f64)>`](TypePack) |
/// | `pack!(const i32 = 1, bool = true)` | [`ConstantPack<(ConstI32<1>, ConstBool<true>)>`](ConstantPack) |
/// | `pack!(const Greeting, Answer)` | constant pack of declared carriers |
/// | `pack!(template VecTemplate, OptionTemplate)` | [`TypeTemplatePack`] |
/// | `pack!(value_template FixedTemplate)` | [`ConstantTemplatePack`] |
/// | `pack!(mixed_template ArrayTemplate)` | [`MixedTemplatePack`] |
/// | `pack!(object 42, "hi")` | [`ObjectPack<(i32, &str)>`](ObjectPack) |
/// | `pack!(&x, &mut y, 5)` | [`ReferencePack`] |
///
/// In a reference pack each argument picks its own slot: `&x` borrows `x`,
/// `&mut y` borrows `y` exclusively, and anything else is moved into an
/// [`Owned`] slot.
///
/// ```
/// use pack::{pack, Index};
///
/// let mut total = 0u32;
/// let name = String::from("sum");
/// let mut refs = pack!(&name, &mut total, 3u32);
///
/// let step = *refs.get(Index::<2>).value();
/// *refs.get_mut(Index::<1>).value_mut() += step;
/// assert_eq!(refs.get(Index::<0>).value(), "sum");
/// drop(refs);
/// assert_eq!(total, 3);
/// ```
///
/// Groups of the same kind may be separated by `;`. Groups of different
/// kinds cannot share a pack, and mixing them fails to compile:
///
/// ```compile_fail
/// use pack::pack;
///
/// let _ = pack!(type u8; const i32 = 1);
/// ```
#[macro_export]
macro_rules! pack {
    // Groups split at `;`, classified once all tokens are consumed.
    (@split [$($groups:tt)*] [$($cur:tt)*] ; $($rest:tt)*) => {
        $crate::pack!(@split [$($groups)* [$($cur)*]] [] $($rest)*)
    };
    (@split [$($groups:tt)*] [$($cur:tt)*] $next:tt $($rest:tt)*) => {
        $crate::pack!(@split [$($groups)*] [$($cur)* $next] $($rest)*)
    };
    (@split [] [$($cur:tt)*]) => {
        $crate::pack!(@refs [] $($cur)*)
    };
    (@split [$([$($group:tt)*])+] [$($cur:tt)*]) => {{
        const _: () = {
            let _ = $crate::factory::expect_single_kind(&[
                $($crate::pack!(@category $($group)*),)+
                $crate::pack!(@category $($cur)*),
            ]);
            panic!("pack groups of one kind are joined with `,`, not `;`")
        };
        unreachable!()
    }};

    (@category type $($tail:tt)*) => { $crate::factory::ArgCategory::Type };
    (@category const $($tail:tt)*) => { $crate::factory::ArgCategory::Constant };
    (@category template $($tail:tt)*) => { $crate::factory::ArgCategory::TypeTemplate };
    (@category value_template $($tail:tt)*) => { $crate::factory::ArgCategory::ConstantTemplate };
    (@category mixed_template $($tail:tt)*) => { $crate::factory::ArgCategory::MixedTemplate };
    (@category object $($tail:tt)*) => { $crate::factory::ArgCategory::Object };
    (@category $($tail:tt)*) => { $crate::factory::ArgCategory::Value };

    (@refs [$($acc:tt)*] & mut $e:expr $(, $($rest:tt)*)?) => {
        $crate::pack!(@refs [$($acc)* $crate::BorrowedMut::new(&mut $e),] $($($rest)*)?)
    };
    (@refs [$($acc:tt)*] & $e:expr $(, $($rest:tt)*)?) => {
        $crate::pack!(@refs [$($acc)* $crate::Borrowed::new(&$e),] $($($rest)*)?)
    };
    (@refs [$($acc:tt)*] $e:expr $(, $($rest:tt)*)?) => {
        $crate::pack!(@refs [$($acc)* $crate::Owned::new($e),] $($($rest)*)?)
    };
    (@refs [$($acc:tt)*]) => {
        $crate::factory::references(($($acc)*))
    };

    () => {
        $crate::factory::empty()
    };

    // Same-kind groups merge into one.
    (type $($a:ty),+ ; type $($rest:tt)*) => {
        $crate::pack!(type $($a),+, $($rest)*)
    };
    (const $($cty:ident = $value:expr),+ ; const $($rest:tt)*) => {
        $crate::pack!(const $($cty = $value),+, $($rest)*)
    };
    (template $($a:ty),+ ; template $($rest:tt)*) => {
        $crate::pack!(template $($a),+, $($rest)*)
    };
    (value_template $($a:ty),+ ; value_template $($rest:tt)*) => {
        $crate::pack!(value_template $($a),+, $($rest)*)
    };
    (mixed_template $($a:ty),+ ; mixed_template $($rest:tt)*) => {
        $crate::pack!(mixed_template $($a),+, $($rest)*)
    };
    (object $($a:expr),+ ; object $($rest:tt)*) => {
        $crate::pack!(object $($a),+, $($rest)*)
    };

    (type $($t:ty),+ $(,)?) => {
        $crate::factory::types::<($($t,)+)>()
    };
    (const $($cty:ident = $value:expr),+ $(,)?) => {
        $crate::factory::constants::<($($crate::carrier!($cty, $value),)+)>()
    };
    (const $($c:ty),+ $(,)?) => {
        $crate::factory::constants::<($($c,)+)>()
    };
    (template $($tm:ty),+ $(,)?) => {
        $crate::factory::type_templates::<($($tm,)+)>()
    };
    (value_template $($tm:ty),+ $(,)?) => {
        $crate::factory::constant_templates::<($($tm,)+)>()
    };
    (mixed_template $($tm:ty),+ $(,)?) => {
        $crate::factory::mixed_templates::<($($tm,)+)>()
    };
    (object $($value:expr),+ $(,)?) => {
        $crate::factory::objects(($($value,)+))
    };

    ($($args:tt)+) => {
        $crate::pack!(@split [] [] $($args)+)
    };
}
