use std::fmt;

use crate::node::Node;
use crate::tree::Tree;

/// Draws the tree sideways: the right subtree above each node, the left subtree below it.
///
/// # Examples
///
/// ```
/// use balanced_bst::Tree;
///
/// let tree = Tree::build(vec![1, 2, 3]);
///
/// assert_eq!(tree.to_string(), "│   ┌── 3\n└── 2\n    └── 1\n");
/// ```
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => draw(root, "", true, f),
            None => Ok(()),
        }
    }
}

/// Writes `node` and its subtrees. `is_left` says which side of its parent `node` hangs from,
/// which decides both its connector and where the vertical rail runs for its children.
fn draw<T: fmt::Display>(
    node: &Node<T>,
    prefix: &str,
    is_left: bool,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    if let Some(right) = node.right() {
        let rail = if is_left { "│   " } else { "    " };
        draw(right, &format!("{prefix}{rail}"), false, f)?;
    }

    let connector = if is_left { "└── " } else { "┌── " };
    writeln!(f, "{prefix}{connector}{}", node.value())?;

    if let Some(left) = node.left() {
        let rail = if is_left { "    " } else { "│   " };
        draw(left, &format!("{prefix}{rail}"), true, f)?;
    }
    Ok(())
}
