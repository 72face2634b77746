use std::error::Error;

use insta::assert_snapshot;
use pack_core::factory::ArgCategory;
use pack_core::{Index, PackError, TypePack};
use pack_testhelpers::test;

#[test]
fn errors_render_their_context() {
    assert_snapshot!(
        PackError::ArityMismatch { expected: 3, found: 2 },
        @"arity mismatch: pack has 3 slots but 2 arguments were supplied"
    );
    assert_snapshot!(
        PackError::PayloadMismatch { position: 1, expected: "alloc::string::String" },
        @"payload mismatch: slot 1 expects a value of type alloc::string::String"
    );
    assert_snapshot!(
        PackError::KeyAmbiguity { key: "u8", first: 0, second: 2 },
        @"key ambiguity: slots 0 and 2 are both keyed by u8"
    );
    assert_snapshot!(PackError::KeyNotFound { key: "char" }, @"no slot is keyed by char");
    assert_snapshot!(
        PackError::IndexOutOfRange { index: 4, size: 4 },
        @"index out of range: position 4 in a pack of 4 slots"
    );
    assert_snapshot!(
        PackError::IndexMismatch { expected: 1, found: 0 },
        @"index mismatch: token stands for position 1, got 0"
    );
    assert_snapshot!(
        PackError::DeductionFailure {
            first: ArgCategory::TypeTemplate,
            conflicting: ArgCategory::Constant,
        },
        @"deduction failure: type template arguments cannot be combined with constant arguments"
    );
}

fn lookup_chain() -> Result<usize, Box<dyn Error>> {
    let pack = TypePack::<(u8, u16)>::default();
    let index = Index::<1>::try_from(pack.position_of::<u16>()?)?;
    let missing = pack.position_of::<char>()?;
    Ok(index.value() + missing)
}

#[test]
fn errors_compose_with_the_question_mark() {
    let err = lookup_chain().unwrap_err();
    let err = err.downcast_ref::<PackError>().unwrap();
    assert_eq!(err, &PackError::KeyNotFound { key: "char" });
    assert!(err.source().is_none());
}
