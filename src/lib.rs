//! A Binary Search Tree (BST) that is built balanced and can be asked to become balanced again.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`, where `height` is the longest path from the root `Node` to a
//! leaf `Node`.
//!
//! ## Balance on request
//!
//! A [`Tree`] built from a list of values splits the sorted values at their midpoint, recursively,
//! so it starts out with the smallest possible height. [`insert`][Tree::insert] and
//! [`delete`][Tree::delete] then edit the tree in place without any rotations, which keeps them
//! cheap but lets the tree lean. [`is_balanced`][Tree::is_balanced] reports when that has
//! happened and [`rebalance`][Tree::rebalance] rebuilds the midpoint shape from the current
//! values.
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree: Tree<_> = (1..=9).collect();
//! assert_eq!(tree.root().map(|root| *root.value()), Some(5));
//! assert_eq!(tree.height(), 3);
//!
//! tree.extend(10..=15);
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), (1..=15).collect::<Vec<_>>());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod display;
mod error;
mod node;
mod traverse;
mod tree;
mod util;

pub use error::BuildError;
pub use node::Node;
pub use traverse::{IntoIter, Iter, LevelOrder, PostOrder, PreOrder};
pub use tree::Tree;
