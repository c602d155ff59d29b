//! Everything related to traversing binary trees.
//!
//! Every traversal here is a plain function which takes the root of a subtree (or `None` for an empty one) and returns a freshly built `Vec` of references to the keys, in the order the nodes were visited. Nothing is cached between calls, so traversing the same unchanged tree twice always produces the same sequence.
//!
//! The supported [`Order`]s are:
//! - **Inorder** — left subtree, then the node, then the right subtree
//! - **Preorder** — the node, then the left subtree, then the right subtree
//! - **Postorder** — left subtree, then the right subtree, then the node
//! - **Boundary** — the perimeter of the tree, counterclockwise starting from the root (see [`boundary`])
//!
//! # Example
//! ```rust
//! use sapling::{traversal, Node, Side};
//!
//! let mut root = Node::new(1);
//! root.insert(Side::Left, 2);
//! root.insert(Side::Right, 3);
//!
//! assert_eq!(traversal::inorder(Some(&root)), [&2, &1, &3]);
//! assert_eq!(traversal::preorder(Some(&root)), [&1, &2, &3]);
//! assert_eq!(traversal::postorder(Some(&root)), [&2, &3, &1]);
//! assert_eq!(traversal::boundary(Some(&root)), [&1, &2, &3]);
//! ```
//!
//! [`Order`]: enum.Order.html " "
//! [`boundary`]: fn.boundary.html " "

use core::fmt::{self, Formatter, Display};
use alloc::vec::Vec;
use crate::Node;

/// The order in which a traversal visits the nodes of a tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, then the node, then the right subtree.
    Inorder,
    /// The node, then the left subtree, then the right subtree.
    Preorder,
    /// Left subtree, then the right subtree, then the node.
    Postorder,
    /// The perimeter of the tree. See [`boundary`].
    ///
    /// [`boundary`]: fn.boundary.html " "
    Boundary,
}
impl Display for Order {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Inorder => "inorder",
            Self::Preorder => "preorder",
            Self::Postorder => "postorder",
            Self::Boundary => "boundary",
        })
    }
}

/// Returns the keys of the subtree in the specified order.
pub fn traverse<T>(root: Option<&Node<T>>, order: Order) -> Vec<&T> {
    match order {
        Order::Inorder => inorder(root),
        Order::Preorder => preorder(root),
        Order::Postorder => postorder(root),
        Order::Boundary => boundary(root),
    }
}

/// Returns the keys of the subtree in inorder: left subtree, then the node, then the right subtree.
pub fn inorder<T>(root: Option<&Node<T>>) -> Vec<&T> {
    let mut keys = Vec::new();
    collect_inorder(root, &mut keys);
    keys
}
/// Returns the keys of the subtree in preorder: the node, then the left subtree, then the right subtree.
pub fn preorder<T>(root: Option<&Node<T>>) -> Vec<&T> {
    let mut keys = Vec::new();
    collect_preorder(root, &mut keys);
    keys
}
/// Returns the keys of the subtree in postorder: left subtree, then the right subtree, then the node.
pub fn postorder<T>(root: Option<&Node<T>>) -> Vec<&T> {
    let mut keys = Vec::new();
    collect_postorder(root, &mut keys);
    keys
}

/// Returns the keys of the boundary nodes of the subtree, counterclockwise starting from the root.
///
/// The sequence is made of, in this order:
/// 1. the root;
/// 2. the left boundary, top-down: starting from the left child of the root, every node which has children, moving to the left child if there is one and to the right one otherwise;
/// 3. the leaves of the left subtree, left to right;
/// 4. the leaves of the right subtree, left to right;
/// 5. the right boundary, bottom-up: the mirror image of the left boundary, starting from the right child of the root and preferring right children.
///
/// Leaves are only ever produced by steps 3 and 4, so no key is repeated even when a leaf ends one of the boundary paths, as it does for a tree which is a single chain:
/// ```rust
/// use sapling::{traversal, Node, Side};
///
/// let mut root = Node::new(1);
/// root.insert(Side::Left, 2);
/// root.child_mut(Side::Left).unwrap().insert(Side::Left, 3);
///
/// assert_eq!(traversal::boundary(Some(&root)), [&1, &2, &3]);
/// ```
pub fn boundary<T>(root: Option<&Node<T>>) -> Vec<&T> {
    let mut keys = Vec::new();
    if let Some(root) = root {
        keys.push(root.key());
        collect_left_boundary(root.left(), &mut keys);
        collect_leaves(root.left(), &mut keys);
        collect_leaves(root.right(), &mut keys);
        collect_right_boundary(root.right(), &mut keys);
    }
    keys
}

fn collect_inorder<'a, T>(node: Option<&'a Node<T>>, keys: &mut Vec<&'a T>) {
    if let Some(node) = node {
        collect_inorder(node.left(), keys);
        keys.push(node.key());
        collect_inorder(node.right(), keys);
    }
}
fn collect_preorder<'a, T>(node: Option<&'a Node<T>>, keys: &mut Vec<&'a T>) {
    if let Some(node) = node {
        keys.push(node.key());
        collect_preorder(node.left(), keys);
        collect_preorder(node.right(), keys);
    }
}
fn collect_postorder<'a, T>(node: Option<&'a Node<T>>, keys: &mut Vec<&'a T>) {
    if let Some(node) = node {
        collect_postorder(node.left(), keys);
        collect_postorder(node.right(), keys);
        keys.push(node.key());
    }
}

fn collect_left_boundary<'a, T>(mut node: Option<&'a Node<T>>, keys: &mut Vec<&'a T>) {
    while let Some(current) = node {
        node = current.left().or_else(|| current.right());
        if node.is_some() {
            keys.push(current.key());
        }
    }
}
fn collect_right_boundary<'a, T>(node: Option<&'a Node<T>>, keys: &mut Vec<&'a T>) {
    if let Some(current) = node {
        let next = current.right().or_else(|| current.left());
        if next.is_some() {
            // Emitted on the way back up
            collect_right_boundary(next, keys);
            keys.push(current.key());
        }
    }
}
fn collect_leaves<'a, T>(node: Option<&'a Node<T>>, keys: &mut Vec<&'a T>) {
    if let Some(node) = node {
        collect_leaves(node.left(), keys);
        if node.is_leaf() {
            keys.push(node.key());
        }
        collect_leaves(node.right(), keys);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::boxed::Box;
    use rstest::rstest;
    use crate::binary_tree::Subtree;

    fn leaf(key: u32) -> Subtree<u32> {
        Some(Box::new(Node::new(key)))
    }
    fn branch(key: u32, left: Subtree<u32>, right: Subtree<u32>) -> Subtree<u32> {
        Some(Box::new(Node::with_children(key, left, right)))
    }

    //         1
    //       /   \
    //      2     3
    //     / \     \
    //    4   5     6
    //       / \   /
    //      7   8 9
    fn mixed() -> Subtree<u32> {
        branch(
            1,
            branch(2, leaf(4), branch(5, leaf(7), leaf(8))),
            branch(3, None, branch(6, leaf(9), None)),
        )
    }
    fn small() -> Subtree<u32> {
        branch(1, leaf(2), leaf(3))
    }

    #[rstest]
    #[case(Order::Inorder, &[2, 1, 3])]
    #[case(Order::Preorder, &[1, 2, 3])]
    #[case(Order::Postorder, &[2, 3, 1])]
    #[case(Order::Boundary, &[1, 2, 3])]
    fn three_nodes(#[case] order: Order, #[case] expected: &[u32]) {
        let root = small();
        let keys: Vec<u32> = traverse(root.as_deref(), order).into_iter().copied().collect();
        assert_eq!(keys, expected);
    }

    #[rstest]
    #[case(Order::Inorder, &[4, 2, 7, 5, 8, 1, 3, 9, 6])]
    #[case(Order::Preorder, &[1, 2, 4, 5, 7, 8, 3, 6, 9])]
    #[case(Order::Postorder, &[4, 7, 8, 5, 2, 9, 6, 3, 1])]
    #[case(Order::Boundary, &[1, 2, 4, 7, 8, 9, 6, 3])]
    fn mixed_shape(#[case] order: Order, #[case] expected: &[u32]) {
        let root = mixed();
        let keys: Vec<u32> = traverse(root.as_deref(), order).into_iter().copied().collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn empty_subtree() {
        for &order in &[Order::Inorder, Order::Preorder, Order::Postorder, Order::Boundary] {
            assert!(traverse::<u32>(None, order).is_empty(), "{} of nothing", order);
        }
    }

    #[test]
    fn single_node() {
        let root = Node::new(42_u32);
        assert_eq!(inorder(Some(&root)), [&42]);
        assert_eq!(boundary(Some(&root)), [&42]);
    }

    #[test]
    fn boundary_of_right_chain() {
        // 1 -> 2 -> 3, all right children
        let root = branch(1, None, branch(2, None, leaf(3)));
        assert_eq!(boundary(root.as_deref()), [&1, &3, &2]);
    }

    #[test]
    fn boundary_follows_zigzag() {
        // Left boundary falls back to right children when there is no left one
        let root = branch(1, branch(2, None, branch(3, leaf(4), None)), None);
        assert_eq!(boundary(root.as_deref()), [&1, &2, &3, &4]);
    }

    #[test]
    fn repeated_traversals_agree() {
        let root = mixed();
        for &order in &[Order::Inorder, Order::Preorder, Order::Postorder, Order::Boundary] {
            assert_eq!(traverse(root.as_deref(), order), traverse(root.as_deref(), order));
        }
    }
}
