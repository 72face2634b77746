use std::cell::Cell;

use pack::static_assertions::{assert_eq_size, assert_impl_all, assert_type_eq_all};
use pack::templates::ArrayTemplate;
use pack::{
    ConstI32, ConstTypeId, ConstUsize, Constant, Element, Index, IndexList, MixedTemplatePack,
    ObjectPack, Owned, PackError, ReferencePack, Slot, Type, TypePack, key, mixed_template, pack,
};
use pack_testhelpers::test;

struct Grid<T, const W: u8, const H: u8>(#[allow(dead_code)] T);

mixed_template! {
    GridTemplate = Grid<T; const W: u8, const H: u8>;
}

assert_eq_size!(TypePack<(i32, f64, char)>, ());
assert_impl_all!(TypePack<(i32, f64, char)>: Copy, Send, Sync, Default);
assert_type_eq_all!(Slot<Type<i32>, 0>, Element<Type<i32>, 0, i32>);

#[test]
fn positions_cover_every_slot_once() {
    let pack = ObjectPack::<(u8, char, &str, f64)>::new((1u8, 'c', "s", 2.5));

    assert_eq!(pack.size(), 4);
    assert_eq!(pack.get(Index::<0>).position(), 0);
    assert_eq!(pack.get(Index::<1>).position(), 1);
    assert_eq!(pack.get(Index::<2>).position(), 2);
    assert_eq!(pack.get(Index::<3>).position(), 3);
    assert_eq!(pack.indices().to_vec(), [0, 1, 2, 3]);
    assert_eq!(pack.index_sequence::<4>().values(), [0, 1, 2, 3]);
}

#[test]
fn each_slot_is_built_from_its_own_argument() {
    let pack = ObjectPack::<(u8, char, &str, f64)>::new((1u8, 'c', "s", 2.5));

    assert_eq!(*pack.get(Index::<0>).value(), 1);
    assert_eq!(*pack.get(Index::<1>).value(), 'c');
    assert_eq!(*pack.get(Index::<2>).value(), "s");
    assert_eq!(*pack.get(Index::<3>).value(), 2.5);
}

#[test]
fn unique_keys_resolve_to_the_positional_slot() {
    let pack = ObjectPack::<(u8, char, &str)>::new((1u8, 'c', "s"));

    assert!(std::ptr::eq(pack.get(key::<u8>()), pack.get(Index::<0>)));
    assert!(std::ptr::eq(pack.get(key::<char>()), pack.get(Index::<1>)));
    assert!(std::ptr::eq(pack.get(key::<&str>()), pack.get(Index::<2>)));
    assert_eq!(pack.check_unique_keys(), Ok(()));
}

#[test]
fn shared_keys_are_reported_by_the_runtime_checks() {
    let pack = TypePack::<(u8, char, u8)>::default();

    let ambiguity = PackError::KeyAmbiguity {
        key: "u8",
        first: 0,
        second: 2,
    };
    assert_eq!(pack.position_of::<u8>(), Err(ambiguity));
    assert_eq!(pack.check_unique_keys(), Err(ambiguity));
    assert_eq!(pack.position_of::<char>(), Ok(1));
    // positional access is unaffected
    assert_eq!(pack.get(Index::<2>).type_name(), "u8");
}

#[test]
fn type_pack_declares_its_types_in_order() {
    let pack = pack!(type i32, f64, char);

    assert_eq!(pack.size(), 3);
    assert_eq!(pack.get(Index::<0>).type_id(), ConstTypeId::of::<i32>());
    assert_eq!(pack.get(Index::<1>).type_id(), ConstTypeId::of::<f64>());
    assert_eq!(pack.get(Index::<2>).type_id(), ConstTypeId::of::<char>());
}

#[test]
fn constant_pack_carries_its_values() {
    let pack = pack!(const i32 = 1, i32 = 2, i32 = 3);

    assert_eq!(pack.size(), 3);
    assert_eq!(pack.get(Index::<1>).constant(), 2);
    assert_eq!(
        Element::<Constant<ConstI32<2>>, 1, ConstI32<2>>::VALUE,
        pack.get(Index::<1>).constant()
    );
}

#[test]
fn object_pack_keeps_its_own_copy() {
    let mut source = String::from("hi");
    let pack = ObjectPack::<(i32, String)>::new((42, source.as_str()));
    source.push('!');

    assert_eq!(pack.size(), 2);
    assert_eq!(pack.get(Index::<1>).value(), "hi");
    assert_eq!(source, "hi!");
}

#[test]
fn borrowed_slot_observes_the_owner() {
    let x = Cell::new(5);
    let pack = pack!(&x);

    x.set(6);
    assert_eq!(pack.get(Index::<0>).value().get(), 6);
}

#[test]
fn exclusive_slot_writes_through() {
    let mut x = 5;
    {
        let mut pack = pack!(&mut x);
        *pack.get_mut(Index::<0>).value_mut() = 6;
    }
    assert_eq!(x, 6);
}

fn from_temporary() -> ReferencePack<(Owned<String>,)> {
    pack!(format!("temp{}", 1))
}

#[test]
fn temporaries_are_owned_by_the_pack() {
    let pack = from_temporary();
    assert_eq!(pack.get(Index::<0>).value(), "temp1");
    assert_eq!(pack.slots().head.clone().into_value(), "temp1");
}

#[test]
fn template_slots_accept_any_binding_of_their_template() {
    type Templates = MixedTemplatePack<(ArrayTemplate, GridTemplate)>;

    let first = Templates::new((&[1u8; 2], &Grid::<bool, 1, 1>(true)));
    let rebound = Templates::new((&[0u32; 7], &Grid::<char, 4, 2>('x')));
    assert_eq!(first, rebound);

    let array = first.get(key::<ArrayTemplate>()).payload();
    assert_eq!(
        array.instantiate::<(u16, ConstUsize<3>)>().type_name(),
        "[u16; 3]"
    );
    assert_eq!(first.get(Index::<1>).payload().template().name, "Grid");
}
