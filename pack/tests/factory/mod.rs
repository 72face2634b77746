use insta::assert_snapshot;
use pack::factory::{self, ArgCategory, PackKind};
use pack::templates::{ArrayTemplate, OptionTemplate, VecTemplate};
use pack::{
    ConstBool, ConstI32, ConstantPack, Index, PayloadKind, TypePack, TypeTemplatePack, constant,
    key, pack, value_template,
};
use pack_testhelpers::test;

constant! {
    Greeting: &'static str = "hi"
}

struct Fixed<const N: usize>;

value_template! {
    FixedTemplate = Fixed<const N: usize>;
}

#[test]
fn no_arguments_make_the_empty_pack() {
    let empty = pack!();
    assert_eq!(empty.size(), 0);
    assert_eq!(empty.kind(), Ok(PackKind::Empty));
    assert_eq!(empty, factory::empty());
}

#[test]
fn type_arguments_make_a_type_pack() {
    let types = pack!(type u8, f64);
    let _: TypePack<(u8, f64)> = types;
    assert_eq!(types.kind(), Ok(PackKind::Type));
    assert_eq!(types.get(Index::<1>).type_name(), "f64");
}

#[test]
fn same_kind_groups_merge() {
    let types = pack!(type u8; type u16, u32);
    assert_eq!(types.size(), 3);
    assert_eq!(types.get(Index::<2>).type_name(), "u32");

    let constants = pack!(const i32 = 1; const i32 = 2);
    assert_eq!(constants.get(Index::<1>).constant(), 2);
}

#[test]
fn constant_arguments_make_a_constant_pack() {
    let constants = pack!(const i32 = -1, bool = true, char = 'x');
    let _: ConstantPack<(ConstI32<{ -1 }>, ConstBool<true>, pack::ConstChar<'x'>)> = constants;
    assert_eq!(constants.kind(), Ok(PackKind::Constant));
    assert_eq!(constants.get(Index::<0>).constant(), -1);
    assert!(constants.get(Index::<1>).constant());
    assert_eq!(constants.get(key::<pack::ConstChar<'x'>>()).constant(), 'x');
}

#[test]
fn declared_carriers_can_be_named_directly() {
    let constants = pack!(const Greeting, ConstI32<7>);
    assert_eq!(constants.get(Index::<0>).constant(), "hi");
    assert_eq!(constants.get(key::<ConstI32<7>>()).position(), 1);
}

#[test]
fn template_arguments_make_template_packs() {
    let types = pack!(template VecTemplate, OptionTemplate);
    assert_eq!(types.kind(), Ok(PackKind::TypeTemplate));
    assert_eq!(types.get(Index::<1>).payload().template().name, "Option");

    let values = pack!(value_template FixedTemplate);
    assert_eq!(values.kind(), Ok(PackKind::ConstantTemplate));

    let mixed = pack!(mixed_template ArrayTemplate);
    assert_eq!(mixed.kind(), Ok(PackKind::MixedTemplate));
    assert_eq!(mixed.get(key::<ArrayTemplate>()).payload().template().arity, 2);
}

#[test]
fn object_arguments_make_an_object_pack() {
    let objects = pack!(object 42, "hi");
    assert_eq!(objects.kind(), Ok(PackKind::Object));
    assert_eq!(*objects.get(Index::<0>).value(), 42);
    assert_eq!(*objects.get(Index::<1>).value(), "hi");
}

#[test]
fn each_value_argument_picks_its_own_slot_kind() {
    let shared = 1u8;
    let mut exclusive = 2u16;
    let refs = pack!(&shared, &mut exclusive, String::from("moved"));

    assert_eq!(refs.kind(), Ok(PackKind::Reference));
    let kinds: Vec<PayloadKind> = refs.descriptors().iter().map(|slot| slot.kind).collect();
    assert_eq!(
        kinds,
        [PayloadKind::Borrowed, PayloadKind::BorrowedMut, PayloadKind::Owned]
    );
}

#[test]
fn factory_functions_deduce_from_referents() {
    let types: TypePack<(u8, char)> = factory::types_of((&1u8, &'c'));
    assert_eq!(types.size(), 2);

    let templates: TypeTemplatePack<(VecTemplate, OptionTemplate)> =
        factory::type_templates_of((&vec![1u8], &Some('x')));
    assert_eq!(templates.size(), 2);

    let constants = factory::constants_of((ConstI32::<1>, ConstBool::<true>));
    assert!(constants.get(Index::<1>).constant());
}

#[test]
fn mixed_categories_do_not_classify() {
    let err = factory::classify(&[ArgCategory::Object, ArgCategory::Value]).unwrap_err();
    assert_snapshot!(err, @"deduction failure: object arguments cannot be combined with value arguments");

    assert_eq!(
        factory::classify(&[ArgCategory::Value; 3]),
        Ok(PackKind::Reference)
    );
    assert_snapshot!(PackKind::MixedTemplate, @"mixed template pack");
}
