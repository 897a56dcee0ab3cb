//! Ways of walking a [`Tree`].
//!
//! Every order is offered twice: as a lazy iterator over values, and as a `visit_*` method that
//! hands each [`Node`] to a callback. The iterators keep their own stack or queue, so they never
//! recurse and can be restarted by asking the tree for a new one.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let tree = Tree::build((1..=7).collect());
//!
//! assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), [4, 2, 6, 1, 3, 5, 7]);
//! assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), [4, 2, 1, 3, 6, 5, 7]);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6, 7]);
//! assert_eq!(tree.post_order().copied().collect::<Vec<_>>(), [1, 3, 2, 5, 7, 6, 4]);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::{Link, Node};
use crate::tree::Tree;

impl<T> Tree<T> {
    /// Iterates over values in ascending order (left subtree, node, right subtree).
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root());
        iter
    }

    /// Iterates over values node first, then the left subtree, then the right subtree.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            stack: self.root().into_iter().collect(),
            remaining: self.len,
        }
    }

    /// Iterates over values left subtree first, then the right subtree, then the node.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder {
            stack: self.root().map(|root| (root, false)).into_iter().collect(),
            remaining: self.len,
        }
    }

    /// Iterates over values breadth first, left to right within each level.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder {
            queue: self.root().into_iter().collect(),
            remaining: self.len,
        }
    }

    /// Collects values breadth first by recursing once per level. Yields the same sequence as
    /// [`level_order`][Tree::level_order].
    pub fn level_order_recursive(&self) -> Vec<&T> {
        fn collect<'a, T>(level: Vec<&'a Node<T>>, values: &mut Vec<&'a T>) {
            if level.is_empty() {
                return;
            }

            let mut next = Vec::with_capacity(level.len() * 2);
            for node in level {
                values.push(node.value());
                next.extend(node.left());
                next.extend(node.right());
            }
            collect(next, values);
        }

        let mut values = Vec::with_capacity(self.len);
        collect(self.root().into_iter().collect(), &mut values);
        values
    }

    /// Calls `visit` on every node, breadth first.
    pub fn visit_level_order<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<T>),
    {
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visit(node);
            queue.extend(node.left());
            queue.extend(node.right());
        }
    }

    /// Calls `visit` on every node, each node before its subtrees.
    pub fn visit_pre_order<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<T>),
    {
        fn walk<T, F: FnMut(&Node<T>)>(node: Option<&Node<T>>, visit: &mut F) {
            if let Some(node) = node {
                visit(node);
                walk(node.left(), visit);
                walk(node.right(), visit);
            }
        }
        walk(self.root(), &mut visit);
    }

    /// Calls `visit` on every node in ascending order of value.
    pub fn visit_in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<T>),
    {
        fn walk<T, F: FnMut(&Node<T>)>(node: Option<&Node<T>>, visit: &mut F) {
            if let Some(node) = node {
                walk(node.left(), visit);
                visit(node);
                walk(node.right(), visit);
            }
        }
        walk(self.root(), &mut visit);
    }

    /// Calls `visit` on every node, each node after its subtrees.
    pub fn visit_post_order<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<T>),
    {
        fn walk<T, F: FnMut(&Node<T>)>(node: Option<&Node<T>>, visit: &mut F) {
            if let Some(node) = node {
                walk(node.left(), visit);
                walk(node.right(), visit);
                visit(node);
            }
        }
        walk(self.root(), &mut visit);
    }
}

/// Fills in the iterator traits shared by every traversal that knows how many values remain.
macro_rules! exact_size {
    ($iter:ident<$($lt:lifetime,)? $t:ident>) => {
        impl<$($lt,)? $t> ExactSizeIterator for $iter<$($lt,)? $t> {}
        impl<$($lt,)? $t> FusedIterator for $iter<$($lt,)? $t> {}
    };
}

/// In-order iterator returned by [`Tree::iter`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

exact_size!(Iter<'a, T>);

/// Pre-order iterator returned by [`Tree::pre_order`].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is popped, and finished, before it.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

exact_size!(PreOrder<'a, T>);

/// Post-order iterator returned by [`Tree::post_order`].
pub struct PostOrder<'a, T> {
    /// Each node is paired with whether its children have already been pushed.
    stack: Vec<(&'a Node<T>, bool)>,
    remaining: usize,
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                self.remaining -= 1;
                return Some(node.value());
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

exact_size!(PostOrder<'a, T>);

/// Level-order iterator returned by [`Tree::level_order`].
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

exact_size!(LevelOrder<'a, T>);

/// Consuming in-order iterator returned by `Tree::into_iter`. Values come out in ascending order
/// and nodes are freed as they are passed.
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        self.remaining -= 1;

        let Node { value, .. } = *node;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

exact_size!(IntoIter<T>);

impl<T> Drop for IntoIter<T> {
    // Right subtrees still hang off the stacked nodes. Draining them keeps the drop iterative.
    fn drop(&mut self) {
        for _ in &mut *self {}
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut iter = IntoIter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.take());
        self.len = 0;
        iter
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
