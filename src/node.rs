//! The `Node` cell every [`Tree`][crate::Tree] is made of.
//!
//! A `Node` owns its value and both of its children outright. There are no parent pointers and
//! no shared links, so a subtree is dropped exactly when the link owning it is overwritten or
//! taken.

use std::cmp::Ordering;

/// An owning link to a subtree. `None` marks the empty pointer at the bottom of a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single cell of a binary search tree: one value and two owned children.
///
/// `Node` performs no validation of its own. Keeping the left subtree below and the right
/// subtree above `value` is the job of whoever links nodes together, normally [`Tree`].
///
/// # Examples
///
/// ```
/// use balanced_bst::Node;
///
/// let mut node = Node::new(2);
/// node.set_left(Some(Node::new(1)));
/// node.set_right(Some(Node::new(3)));
///
/// assert_eq!(node.value(), &2);
/// assert_eq!(node.left().map(Node::value), Some(&1));
/// assert_eq!(node.height(), 1);
/// ```
///
/// Cloning and comparing walk the subtree with an explicit stack. Dropping and `Debug` output
/// recurse once per level, so a very long chain of standalone nodes should be owned by a
/// [`Tree`], whose `Drop` is iterative.
///
/// [`Tree`]: crate::Tree
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            left: self.left().and_then(Self::copy_subtree),
            right: self.right().and_then(Self::copy_subtree),
        }
    }
}

/// Two nodes are equal when their subtrees have the same shape and the same values.
impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.value != b.value {
                return false;
            }
            for pair in [(a.left(), b.left()), (a.right(), b.right())] {
                match pair {
                    (Some(a), Some(b)) => stack.push((a, b)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T> Node<T> {
    /// Creates a leaf holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replaces the stored value, returning the old one.
    pub fn set_value(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Hands ownership of `left` to this node and returns the subtree it replaced.
    pub fn set_left(&mut self, left: Option<Self>) -> Option<Self> {
        std::mem::replace(&mut self.left, left.map(Box::new)).map(|old| *old)
    }

    /// Hands ownership of `right` to this node and returns the subtree it replaced.
    pub fn set_right(&mut self, right: Option<Self>) -> Option<Self> {
        std::mem::replace(&mut self.right, right.map(Box::new)).map(|old| *old)
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of edges between this node and its deepest descendant. A leaf has a height of 0.
    pub fn height(&self) -> usize {
        self.fold_post_order(|_, left, right| Some(Self::height_above(left, right)))
            .unwrap_or(0)
    }

    /// Height of a node whose children have the given heights. An empty side counts as 0,
    /// the same as a leaf.
    fn height_above(left: Option<usize>, right: Option<usize>) -> usize {
        match (left, right) {
            (None, None) => 0,
            (left, right) => left.unwrap_or(0).max(right.unwrap_or(0)) + 1,
        }
    }

    /// Whether, at every node in this subtree, the heights of the two children differ by at most
    /// 1. An empty child has a height of 0, so a node with one leaf child, or one child that has a
    /// single leaf below it, is still balanced.
    pub fn is_balanced(&self) -> bool {
        self.fold_post_order(|_, left: Option<usize>, right: Option<usize>| {
            let (l, r) = (left.unwrap_or(0), right.unwrap_or(0));
            (l.abs_diff(r) <= 1).then(|| Self::height_above(left, right))
        })
        .is_some()
    }

    /// Visits the subtree children first and combines each node with the results of its
    /// children. `combine` returning `None` stops the walk and makes the whole fold `None`.
    ///
    /// Uses an explicit stack, so the depth of the subtree doesn't limit it.
    pub(crate) fn fold_post_order<R, F>(&self, mut combine: F) -> Option<R>
    where
        F: FnMut(&Self, Option<R>, Option<R>) -> Option<R>,
    {
        let mut stack = vec![(self, false)];
        let mut results: Vec<R> = Vec::new();

        while let Some((node, expanded)) = stack.pop() {
            if !expanded {
                stack.push((node, true));
                stack.extend(node.right().map(|right| (right, false)));
                stack.extend(node.left().map(|left| (left, false)));
                continue;
            }

            // The left subtree finished first, so the right result sits on top.
            let right = if node.right.is_some() { results.pop() } else { None };
            let left = if node.left.is_some() { results.pop() } else { None };
            results.push(combine(node, left, right)?);
        }
        results.pop()
    }

    /// Binary search for `value` in this subtree.
    pub fn find(&self, value: &T) -> Option<&Self>
    where
        T: Ord,
    {
        let mut node = self;
        loop {
            node = match value.cmp(&node.value) {
                Ordering::Less => node.left()?,
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right()?,
            };
        }
    }

    /// Number of edges from this node down to the node holding `value`.
    pub(crate) fn depth_of(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        let mut node = self;
        let mut depth = 0;
        loop {
            node = match value.cmp(&node.value) {
                Ordering::Less => node.left()?,
                Ordering::Equal => return Some(depth),
                Ordering::Greater => node.right()?,
            };
            depth += 1;
        }
    }

    /// A deep copy of this subtree, built bottom up without recursion.
    fn copy_subtree(&self) -> Link<T>
    where
        T: Clone,
    {
        self.fold_post_order(|node, left, right| {
            Some(Box::new(Self {
                value: node.value.clone(),
                left,
                right,
            }))
        })
    }

    /// The leftmost node of this subtree, which holds its smallest value.
    pub(crate) fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// The rightmost node of this subtree, which holds its largest value.
    pub(crate) fn rightmost(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }
}
