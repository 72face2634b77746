use core::fmt;
use core::ops::Range;

use crate::{Cons, ConstUsize, Nil, PackError};

/// A position token: the integer `I`, carried at the type level.
///
/// `Index<I>` is zero-sized. Passing it to [`Pack::get`](crate::Pack::get)
/// selects the slot at position `I`; there is no runtime bounds check because
/// a position the pack does not have fails to resolve at compile time.
///
/// ```
/// use pack_core::Index;
///
/// let third = Index::<2>;
/// assert_eq!(third.value(), 2);
/// assert_eq!(usize::from(third), 2);
/// assert!(Index::<2>::try_from(3).is_err());
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index<const I: usize>;

impl<const I: usize> Index<I> {
    /// The position this token stands for.
    pub const VALUE: usize = I;

    /// Returns the token for position `I`.
    #[inline]
    pub const fn new() -> Self {
        Index
    }

    /// Returns the position as a plain integer.
    #[inline]
    pub const fn value(self) -> usize {
        I
    }

    /// Returns the integral-constant representation of this position.
    #[inline]
    pub const fn to_constant(self) -> ConstUsize<I> {
        ConstUsize
    }
}

impl<const I: usize> fmt::Debug for Index<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Index<{I}>")
    }
}

impl<const I: usize> fmt::Display for Index<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{I}")
    }
}

impl<const I: usize> From<Index<I>> for usize {
    #[inline]
    fn from(_: Index<I>) -> Self {
        I
    }
}

impl<const I: usize> TryFrom<usize> for Index<I> {
    type Error = PackError;

    /// Succeeds only when `value` is exactly `I`.
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value == I {
            Ok(Index)
        } else {
            Err(PackError::IndexMismatch {
                expected: I,
                found: value,
            })
        }
    }
}

impl<const I: usize> From<Index<I>> for ConstUsize<I> {
    #[inline]
    fn from(_: Index<I>) -> Self {
        ConstUsize
    }
}

impl<const I: usize> From<ConstUsize<I>> for Index<I> {
    #[inline]
    fn from(_: ConstUsize<I>) -> Self {
        Index
    }
}

/// The ordered positions `0..N`, obtainable for any `N`.
///
/// ```
/// use pack_core::make_index_sequence;
///
/// let seq = make_index_sequence::<3>();
/// assert_eq!(seq.values(), [0, 1, 2]);
/// assert_eq!(seq.into_iter().sum::<usize>(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IndexSequence<const N: usize>;

impl<const N: usize> IndexSequence<N> {
    /// Number of positions in the sequence.
    pub const SIZE: usize = N;

    /// Returns the sequence `0..N`.
    #[inline]
    pub const fn new() -> Self {
        IndexSequence
    }

    /// Number of positions in the sequence.
    #[inline]
    pub const fn size(self) -> usize {
        N
    }

    /// The positions as an array, in order.
    pub const fn values(self) -> [usize; N] {
        let mut out = [0usize; N];
        let mut i = 0;
        while i < N {
            out[i] = i;
            i += 1;
        }
        out
    }

    /// Iterates over the positions in order.
    #[inline]
    pub fn iter(self) -> Range<usize> {
        0..N
    }
}

impl<const N: usize> IntoIterator for IndexSequence<N> {
    type Item = usize;
    type IntoIter = Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Returns the position sequence `0..N`.
#[inline]
pub const fn make_index_sequence<const N: usize>() -> IndexSequence<N> {
    IndexSequence
}

/// A type-level list of [`Index`] tokens, such as the positions of a pack.
///
/// Every slot list names its positions through
/// [`SlotList::Indices`](crate::SlotList::Indices).
pub trait IndexList: Copy + Default {
    /// Number of tokens in the list.
    const LEN: usize;

    /// Calls `visit` with each position, in list order.
    fn visit(&self, visit: &mut impl FnMut(usize));

    /// Collects the positions into a vector.
    #[cfg(feature = "alloc")]
    fn to_vec(&self) -> alloc::vec::Vec<usize> {
        let mut out = alloc::vec::Vec::with_capacity(Self::LEN);
        self.visit(&mut |position| out.push(position));
        out
    }
}

impl IndexList for Nil {
    const LEN: usize = 0;

    fn visit(&self, _visit: &mut impl FnMut(usize)) {}
}

impl<const I: usize, T: IndexList> IndexList for Cons<Index<I>, T> {
    const LEN: usize = T::LEN + 1;

    fn visit(&self, visit: &mut impl FnMut(usize)) {
        visit(I);
        self.tail.visit(visit);
    }
}
