use quickcheck::{Arbitrary, Gen};

mod bst;
mod scenarios;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the tree
    Insert(T),
    /// Look the value up in the tree
    Lookup(T),
    /// Give every node a duplicate left child
    Double,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Doubling is
    /// rarer since it grows the tree fastest.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Lookup(T::arbitrary(g)),
            2 => Op::Double,
            _ => unreachable!(),
        }
    }
}
