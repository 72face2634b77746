use pack_core::{
    Borrowed, BorrowedMut, ConstI32, ConstU64, Constant, Construct, Element, Index, Key, List,
    Object, Owned, PayloadKind, Slot, Type, TypePack, cons, key,
};
use pack_testhelpers::test;
use static_assertions::{assert_eq_size, assert_impl_all, assert_not_impl_any};

assert_eq_size!(Slot<Type<String>, 0>, ());
assert_eq_size!(Slot<Constant<ConstI32<9>>, 3>, ());
assert_eq_size!(Slot<Object<u64>, 0>, u64);
assert_impl_all!(Slot<Type<String>, 0>: Copy, Default, Send, Sync);
assert_not_impl_any!(Slot<Object<String>, 0>: Copy);

/// Stands in for a slot key that is not the payload type.
struct Width;

#[test]
fn element_carries_its_position() {
    let element = Slot::<Object<u32>, 4>::new(7u32);
    assert_eq!(element.position(), 4);
    assert_eq!(Slot::<Object<u32>, 4>::POSITION, 4);
    assert_eq!(element.index(), Index::<4>);
    assert_eq!(*element.value(), 7);
}

#[test]
fn confirming_constructors_build_the_same_element() {
    let plain = Element::<Object<u32>, 1, Width>::new(3u8);
    let positioned = Element::<Object<u32>, 1, Width>::with_position(3u8, Index::<1>);
    let keyed = Element::<Object<u32>, 1, Width>::with_key(3u8, Index, key::<Width>());

    assert_eq!(plain, positioned);
    assert_eq!(positioned, keyed);
    assert!(keyed.descriptor().has_custom_key());
}

#[test]
fn type_slots_admit_only_their_exact_type() {
    let element = Slot::<Type<str>, 0>::new("unsized");
    assert_eq!(element.type_name(), "str");
    assert_eq!(element.payload().type_name(), "str");
    assert_eq!(element.descriptor().kind, PayloadKind::Type);
}

#[test]
fn type_slots_admit_their_own_payload() {
    let from_referent = Slot::<Type<u8>, 0>::new(&1);
    let from_payload = Slot::<Type<u8>, 0>::new(Type::<u8>::new());
    assert_eq!(from_referent, from_payload);

    let pack = TypePack::<(u8, char)>::new((Type::<u8>::new(), &'c'));
    assert_eq!(pack.get(Index::<1>).type_name(), "char");
}

#[test]
fn argument_lists_construct_slot_lists() {
    let slots: List![Slot<Object<u8>, 0>, Slot<Type<bool>, 1>] = cons![1u8, &true].construct();
    assert_eq!(*slots.head.value(), 1);
    assert_eq!(slots.tail.head.type_name(), "bool");
}

#[test]
fn constant_slots_admit_equal_values_of_any_width() {
    let element = Slot::<Constant<ConstI32<5>>, 0>::new(ConstU64::<5>);
    assert_eq!(element.constant(), 5);
    assert_eq!(Slot::<Constant<ConstI32<5>>, 0>::VALUE, 5);
}

#[test]
fn object_slots_convert_and_own() {
    let mut element = Slot::<Object<String>, 0>::new("owned");
    element.value_mut().push_str(" value");
    assert_eq!(element.into_value(), "owned value");
}

#[test]
fn reference_slots_borrow_or_own() {
    let shared = String::from("shared");
    let borrowed = Slot::<Borrowed<'_, str>, 0>::new(&shared);
    assert_eq!(borrowed.value(), "shared");
    assert_eq!(borrowed.payload().get(), "shared");

    let mut counter = 1;
    let mut exclusive = Slot::<BorrowedMut<'_, i32>, 1>::new(&mut counter);
    *exclusive.value_mut() += 1;
    drop(exclusive);
    assert_eq!(counter, 2);

    let owned = Slot::<Owned<Vec<u8>>, 2>::new(vec![1u8, 2]);
    assert_eq!(owned.into_value(), [1, 2]);
}

#[test]
fn elements_answer_to_their_own_tokens() {
    use pack_core::Answers;

    let element = Slot::<Object<u8>, 2>::new(9u8);
    let by_index = element.answer(Index::<2>);
    let by_key = element.answer(Key::<u8>::new());
    assert!(std::ptr::eq(by_index, by_key));
}

#[test]
fn rekeying_keeps_payload_and_position() {
    let element = Slot::<Object<u8>, 2>::new(9u8).rekey::<Width>();
    assert_eq!(element.position(), 2);
    assert_eq!(*element.value(), 9);
    assert_eq!(element.descriptor().key.name, std::any::type_name::<Width>());
}
