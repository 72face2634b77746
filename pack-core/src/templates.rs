//! Template markers for the generic types of `core` and `alloc`.

use core::marker::PhantomData;

use crate::{ConstUsize, Instance, MixedParams, Rebind, Template};

crate::type_template! {
    /// `Option<T>`.
    pub OptionTemplate = Option<T>;
}

crate::type_template! {
    /// `PhantomData<T>`.
    pub PhantomDataTemplate = PhantomData<T>;
}

/// `[T; N]`: one type parameter, then one value parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ArrayTemplate;

impl Template for ArrayTemplate {
    type Shape = MixedParams;
    const NAME: &'static str = "array";
    const ARITY: usize = 2;
}

impl<T, const N: usize> Instance for [T; N] {
    type Template = ArrayTemplate;
    type Params = (T, ConstUsize<N>);
}

impl<T, const N: usize> Rebind<(T, ConstUsize<N>)> for ArrayTemplate {
    type Output = [T; N];
}

#[cfg(feature = "alloc")]
mod collections {
    use alloc::boxed::Box;
    use alloc::collections::{BTreeMap, BTreeSet, LinkedList, VecDeque};
    use alloc::rc::Rc;
    use alloc::vec::Vec;

    crate::type_template! {
        /// `Vec<T>`.
        pub VecTemplate = Vec<T>;
    }

    crate::type_template! {
        /// `VecDeque<T>`.
        pub VecDequeTemplate = VecDeque<T>;
    }

    crate::type_template! {
        /// `LinkedList<T>`.
        pub LinkedListTemplate = LinkedList<T>;
    }

    crate::type_template! {
        /// `BTreeSet<T>`.
        pub BTreeSetTemplate = BTreeSet<T>;
    }

    crate::type_template! {
        /// `BTreeMap<K, V>`.
        pub BTreeMapTemplate = BTreeMap<K, V>;
    }

    crate::type_template! {
        /// `Box<T>`.
        pub BoxTemplate = Box<T>;
    }

    crate::type_template! {
        /// `Rc<T>`.
        pub RcTemplate = Rc<T>;
    }
}

#[cfg(feature = "alloc")]
pub use collections::*;
