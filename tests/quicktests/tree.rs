use balanced_bst::Tree;

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts,
/// deletes and rebalances we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                assert_eq!(bst.insert(v.clone()), set.insert(v.clone()));
            }
            Op::Delete(v) => {
                assert_eq!(bst.delete(v), set.take(v));
            }
            Op::Rebalance => {
                bst.rebalance();
                assert!(bst.is_balanced());
            }
        }
    }
}

/// Whether an in-order walk yields strictly ascending values.
fn strictly_ascending<T: Ord>(tree: &Tree<T>) -> bool {
    tree.iter().zip(tree.iter().skip(1)).all(|(a, b)| a < b)
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    strictly_ascending(&tree) && tree.len() == set.len() && tree.iter().eq(set.iter())
}

#[quickcheck]
fn build_is_sorted_and_balanced(xs: Vec<i32>) -> bool {
    let tree = Tree::build(xs.clone());
    let n = xs.iter().collect::<BTreeSet<_>>().len();
    let levels = (usize::BITS - n.leading_zeros()) as usize;

    strictly_ascending(&tree)
        && tree.len() == n
        && tree.is_balanced()
        && tree.height() == levels.saturating_sub(1)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x).map(|node| node.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::build(xs.clone());
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none() && tree.depth(x).is_none())
}

#[quickcheck]
fn duplicate_insert_keeps_shape(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = Tree::build(xs);
    tree.insert(x);
    let before = tree.clone();

    !tree.insert(x) && tree == before
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::build(xs.clone());
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present: BTreeSet<_> = xs.into_iter().collect();
    for delete in &deletes {
        still_present.remove(delete);
    }

    deletes.iter().all(|x| tree.find(x).is_none())
        && strictly_ascending(&tree)
        && tree.iter().eq(still_present.iter())
}

#[quickcheck]
fn deleting_absent_changes_nothing(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = Tree::build(xs);
    tree.delete(&x);
    let before: Vec<i8> = tree.iter().copied().collect();

    tree.delete(&x).is_none() && tree.iter().copied().eq(before)
}

#[quickcheck]
fn rebalance_is_idempotent(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs);
    for delete in &deletes {
        tree.delete(delete);
    }

    tree.rebalance();
    let once = tree.clone();
    tree.rebalance();

    tree.is_balanced() && tree == once && tree == Tree::build(tree.iter().copied().collect())
}

#[quickcheck]
fn level_orders_agree(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs);

    tree.level_order_recursive() == tree.level_order().collect::<Vec<_>>()
}

#[quickcheck]
fn every_value_has_a_depth(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs);

    tree.iter().all(|x| tree.depth(x).is_some_and(|d| d <= tree.height()))
}

#[quickcheck]
fn clone_matches_original(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs);
    let copy = tree.clone();

    copy == tree && copy.pre_order().eq(tree.pre_order())
}
