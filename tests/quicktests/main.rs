#[macro_use]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the tree
    Insert(T),
    /// Delete the value from the tree
    Delete(T),
    /// Rebuild the tree into its balanced shape
    Rebalance,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Rebalancing is
    /// rarer than edits so trees get a chance to lean between rebuilds.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2]) {
            Some(0) => Op::Insert(T::arbitrary(g)),
            Some(1) => Op::Delete(T::arbitrary(g)),
            _ => Op::Rebalance,
        }
    }
}
