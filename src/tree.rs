//! The mutable BST. Construction and [`rebalance`][Tree::rebalance] produce a height-balanced
//! shape by splitting a sorted run of values at its midpoint. `insert` and `delete` work on the
//! live tree without rebalancing, so a tree can drift out of balance until it is asked to rebuild.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::build(vec![120, 98, 1, 50, 62, 34, 24, 2, 9]);
//! assert!(tree.is_balanced());
//!
//! // Growing one branch tips the tree over.
//! for value in [422, 132, 122] {
//!     tree.insert(value);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.len(), 12);
//! ```

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::error::BuildError;
use crate::node::{Link, Node};
use crate::util;

/// A binary search tree of distinct values. Each value is its own key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<T> {
    pub(crate) root: Link<T>,
    pub(crate) len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // Unlinks nodes one at a time so a list-shaped tree doesn't recurse once per node.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a balanced tree from arbitrary input. The values are sorted and duplicates are
    /// dropped before the tree is built.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build(vec![3, 1, 2, 3, 1]);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.root().map(|root| *root.value()), Some(2));
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn build(values: Vec<T>) -> Self
    where
        T: Ord,
    {
        Self::from_ascending(util::sorted_unique(values))
    }

    /// Builds a balanced tree from values the caller already sorted. Input that isn't strictly
    /// ascending (which includes duplicates) is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{BuildError, Tree};
    ///
    /// let tree = Tree::from_sorted(vec![1, 2, 3]).unwrap();
    /// assert_eq!(tree.height(), 1);
    ///
    /// assert_eq!(
    ///     Tree::from_sorted(vec![1, 3, 2]),
    ///     Err(BuildError::NotStrictlyAscending { index: 2 })
    /// );
    /// ```
    pub fn from_sorted(values: Vec<T>) -> Result<Self, BuildError>
    where
        T: Ord,
    {
        match util::first_out_of_order(&values) {
            Some(index) => Err(BuildError::NotStrictlyAscending { index }),
            None => Ok(Self::from_ascending(values)),
        }
    }

    /// Builds the midpoint-split shape over `values`, trusting that they are strictly ascending.
    fn from_ascending(values: Vec<T>) -> Self {
        let len = values.len();
        let tree = Self {
            root: Self::build_link(len, &mut values.into_iter()),
            len,
        };
        debug!(len, height = tree.height(), "built tree");
        tree
    }

    /// Builds a subtree out of the next `len` values of `values`.
    ///
    /// The subtree root is the value at index `len / 2`, which matches rounding the midpoint of
    /// `0..=len - 1` half up. The values before it form the left subtree and the values after it
    /// form the right subtree, so values are consumed in order: left subtree, root, right subtree.
    fn build_link<I>(len: usize, values: &mut I) -> Link<T>
    where
        I: Iterator<Item = T>,
    {
        if len == 0 {
            return None;
        }

        let mid = len / 2;
        let left = Self::build_link(mid, values);
        let value = values.next()?;
        let right = Self::build_link(len - mid - 1, values);

        Some(Box::new(Node { value, left, right }))
    }

    /// The root node, or `None` when the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Inserts `value` as a new leaf. Returns `false` and leaves the tree untouched if the value
    /// is already present. The tree is not rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        // Walks down with a cursor instead of recursing so long unbalanced branches can't
        // exhaust the stack.
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    trace!("ignoring duplicate insert");
                    return false;
                }
                Ordering::Greater => &mut node.right,
            };
        }

        *link = Some(Box::new(Node::new(value)));
        self.len += 1;
        true
    }

    /// Deletes the node holding `value` and returns the value. If the tree doesn't contain it,
    /// nothing happens. The tree is not rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::build(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.delete(&2), None);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let deleted = Self::delete_at(&mut self.root, value);
        match deleted {
            Some(_) => self.len -= 1,
            None => trace!("delete found nothing to remove"),
        }
        deleted
    }

    fn delete_at(mut link: &mut Link<T>, value: &T) -> Option<T>
    where
        T: Ord,
    {
        // Same cursor walk as `insert`. The comparison is taken before the mutable borrow so the
        // cursor only moves when it isn't stopping here.
        loop {
            let ordering = value.cmp(&link.as_ref()?.value);
            if ordering == Ordering::Equal {
                break;
            }
            let node = link.as_mut()?;
            link = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }

        // With two children, the in-order successor moves up into this node.
        let node = link.as_mut()?;
        if node.left.is_some() && node.right.is_some() {
            let successor = Self::take_min(&mut node.right)?;
            return Some(std::mem::replace(&mut node.value, successor));
        }

        // With at most one child, that child takes this node's place.
        let mut node = link.take()?;
        *link = node.left.take().or_else(|| node.right.take());
        let Node { value, .. } = *node;
        Some(value)
    }

    /// Removes the smallest value from the subtree behind `link`, splicing its right child into
    /// its place.
    fn take_min(mut link: &mut Link<T>) -> Option<T> {
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }

        let node = link.take()?;
        let Node { value, right, .. } = *node;
        *link = right;
        Some(value)
    }

    /// Finds the node holding `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|node| node.height()), Some(0));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.root()?.find(value)
    }

    /// Whether the tree holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root().map(|root| root.leftmost().value())
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        self.root().map(|root| root.rightmost().value())
    }

    /// Number of edges from the root to the deepest leaf. Empty and single-node trees both have
    /// a height of 0.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Number of edges from the root down to the node holding `value`, or `None` if no node
    /// holds it. The root itself has a depth of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build((1..=9).collect());
    ///
    /// assert_eq!(tree.depth(&5), Some(0));
    /// assert_eq!(tree.depth(&1), Some(3));
    /// assert_eq!(tree.depth(&10), None);
    /// ```
    pub fn depth(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        self.root()?.depth_of(value)
    }

    /// Whether, at every node, the left and right subtrees differ in height by at most one.
    /// An empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        self.root().map_or(true, Node::is_balanced)
    }

    /// Rebuilds the whole tree into the same balanced shape [`build`][Tree::build] would produce
    /// for its current values. Rebalancing an already rebuilt tree leaves it unchanged.
    pub fn rebalance(&mut self) {
        let tree = std::mem::take(self);
        let len = tree.len;

        self.root = Self::build_link(len, &mut tree.into_iter());
        self.len = len;
        debug!(len, height = self.height(), "rebalanced tree");
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter.into_iter().collect())
    }
}

impl<T: Ord> From<Vec<T>> for Tree<T> {
    fn from(values: Vec<T>) -> Self {
        Self::build(values)
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
