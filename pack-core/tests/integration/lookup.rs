use core::any::type_name;

use pack_core::templates::{OptionTemplate, VecTemplate};
use pack_core::{
    ConstI32, ConstI64, ConstU8, ConstUsize, ConstantPack, Element, EmptyPack, Index, IndexList,
    IndexSequence, InstanceKey, List, Object, ObjectPack, Pack, PackError, Slots, Type,
    TypePack, TypeTemplatePack, cons, instance_key, key, make_index_sequence,
};
use pack_testhelpers::test;
use static_assertions::assert_type_eq_all;

struct Width;
struct Height;

type Dimensions = Pack<List![Element<Object<u32>, 0, Width>, Element<Object<u32>, 1, Height>]>;

assert_type_eq_all!(
    Slots![Type<u8>, Object<char>],
    List![Element<Type<u8>, 0, u8>, Element<Object<char>, 1, char>]
);

#[test]
fn custom_keys_tell_slots_of_one_type_apart() {
    let mut dims = Dimensions::new((640u32, 480u32));

    assert_eq!(*dims.get(key::<Width>()).value(), 640);
    assert_eq!(*dims.get(key::<Height>()).value(), 480);

    *dims.get_mut(key::<Height>()).value_mut() = 360;
    assert_eq!(*dims.get(Index::<1>).value(), 360);
    assert_eq!(dims.position_of::<Height>(), Ok(1));
    assert_eq!(dims.check_unique_keys(), Ok(()));
}

#[test]
fn packs_are_built_from_lists_as_well_as_tuples() {
    let from_list = ObjectPack::<(u8, bool)>::new(cons![1u8, true]);
    let from_tuple = ObjectPack::<(u8, bool)>::new((1u8, true));
    assert_eq!(from_list, from_tuple);
}

#[test]
fn long_packs_are_spelled_out_with_slots() {
    type Wide = Slots![Type<u8>, Type<u16>, Type<u32>, Type<u64>, Type<u128>, Type<i8>];
    let pack = Pack::<Wide>::default();

    assert_eq!(pack.size(), 6);
    assert_eq!(pack.get(Index::<5>).type_name(), "i8");
    assert_eq!(pack.get(key::<u128>()).position(), 4);
}

#[test]
fn sizes_match_arities() {
    assert_eq!(EmptyPack::SIZE, 0);
    assert_eq!(TypePack::<(u8,)>::SIZE, 1);
    assert_eq!(TypePack::<(u8, u16, u32, u64)>::SIZE, 4);
    assert_eq!(pack_core::factory::empty().size(), 0);
}

#[test]
fn index_tokens_convert_to_and_from_integers() {
    assert_eq!(usize::from(Index::<3>), 3);
    assert_eq!(Index::<3>::try_from(3), Ok(Index::<3>));
    assert!(Index::<3>::try_from(2).is_err());
    assert_eq!(Index::<3>::from(ConstUsize::<3>), Index::<3>);
    assert_eq!(ConstUsize::<3>::from(Index::<3>), Index::<3>.to_constant());
}

#[test]
fn index_sequences_run_from_zero() {
    let seq: IndexSequence<5> = make_index_sequence();
    assert_eq!(seq.size(), 5);
    assert_eq!(seq.iter().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
    assert!(make_index_sequence::<0>().values().is_empty());

    let pack = TypePack::<(u8, u16, u32)>::default();
    let indices: List![Index<0>, Index<1>, Index<2>] = pack.indices();
    assert_eq!(indices.to_vec(), [0, 1, 2]);
    assert_eq!(pack.index_sequence::<3>().values(), [0, 1, 2]);
}

#[test]
fn constant_slots_are_found_by_value_in_any_width() {
    let pack = ConstantPack::<(ConstI32<1>, ConstI32<2>)>::default();

    assert_eq!(pack.position_of_constant::<ConstI64<2>>(), Ok(1));
    assert_eq!(pack.position_of_constant::<ConstU8<1>>(), Ok(0));
    assert_eq!(pack.position_of::<ConstI32<2>>(), Ok(1));
    assert_eq!(
        pack.position_of_constant::<ConstI64<3>>(),
        Err(PackError::KeyNotFound {
            key: type_name::<ConstI64<3>>()
        })
    );
}

#[test]
fn equal_constants_of_different_widths_share_a_key() {
    let pack = ConstantPack::<(ConstI32<1>, ConstU8<1>)>::default();

    assert_eq!(
        pack.check_unique_keys(),
        Err(PackError::KeyAmbiguity {
            key: type_name::<ConstI32<1>>(),
            first: 0,
            second: 1,
        })
    );
    assert_eq!(
        pack.position_of_constant::<ConstI64<1>>(),
        Err(PackError::KeyAmbiguity {
            key: type_name::<ConstI64<1>>(),
            first: 0,
            second: 1,
        })
    );
    // each carrier type still names one slot
    assert_eq!(pack.position_of::<ConstU8<1>>(), Ok(1));
    assert_eq!(pack.get(key::<ConstU8<1>>()).position(), 1);
}

#[test]
fn template_slots_answer_to_any_instance() {
    let pack = TypeTemplatePack::<(OptionTemplate, VecTemplate)>::default();

    assert_eq!(pack.get(instance_key::<Vec<u8>>()).position(), 1);
    assert_eq!(pack.get(InstanceKey::of(&Some('x'))).position(), 0);
    assert_eq!(pack.position_of_instance::<Vec<u8>>(), Ok(1));
    assert_eq!(pack.position_of_instance::<Vec<String>>(), Ok(1));
    assert_eq!(pack.position_of::<VecTemplate>(), Ok(1));
    assert_eq!(
        pack.position_of_instance::<[u8; 2]>(),
        Err(PackError::KeyNotFound {
            key: type_name::<[u8; 2]>()
        })
    );
    assert_eq!(pack.check_unique_keys(), Ok(()));
}
