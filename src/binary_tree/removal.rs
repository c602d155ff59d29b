//! Deletion of arbitrary nodes.
//!
//! Nodes have no parent links, so removing a node means rebuilding the path to it: the search takes every subtree it descends into by value and hands back the (possibly replaced) subtree, which the level above reattaches in place of the old one. The same happens at the very top, which is why [`delete`] returns the new root.
//!
//! [`delete`]: fn.delete.html " "

use core::borrow::Borrow;
use alloc::boxed::Box;
use crate::{EmptySubtreeError, KeyNotFoundError};
use super::{Node, Side, Subtree};

/// Removes the node holding `target` from the subtree rooted at `root`, returning the new root of the subtree, or `None` if the subtree became empty.
///
/// The caller is responsible for reattaching the result where `root` used to live, since deleting the root node replaces it.
///
/// The node is removed as follows:
/// - a leaf simply disappears;
/// - a node with only one child is replaced by that child, which brings its whole subtree up one level;
/// - a node with two children is *not* physically removed: its key is replaced with the key of its inorder successor (the leftmost node of its right subtree), and that successor node, which never has a left child, is removed from the right subtree instead.
///
/// Children are searched before their parent, left before right, and at most one node is removed per call: if several nodes hold `target`, the first one in postorder is the one that goes.
///
/// If no node holds `target`, the subtree is returned unchanged. Use [`try_delete`] to find out about that.
///
/// [`try_delete`]: fn.try_delete.html " "
pub fn delete<T, Q>(root: Box<Node<T>>, target: &Q) -> Subtree<T>
where
    T: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    try_delete(root, target).unwrap_or_else(|error| Some(error.into_tree()))
}

/// Same as [`delete`], but reports whether a node was actually removed.
///
/// # Errors
/// Will fail if no node in the subtree holds `target`. The subtree is handed back untouched inside the error.
///
/// [`delete`]: fn.delete.html " "
pub fn try_delete<T, Q>(
    root: Box<Node<T>>,
    target: &Q,
) -> Result<Subtree<T>, KeyNotFoundError<Box<Node<T>>>>
where
    T: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    excise(root, target).map_err(|tree| {
        tracing::debug!("delete target not found, tree left unchanged");
        KeyNotFoundError { tree }
    })
}

/// Returns the leftmost node of the subtree, i.e. the node reached by following left children from its root for as long as there are any.
///
/// # Errors
/// Will fail if the subtree is absent, since it has no nodes at all.
pub fn leftmost<T>(subtree: Option<&Node<T>>) -> Result<&Node<T>, EmptySubtreeError> {
    subtree.map(Node::leftmost).ok_or(EmptySubtreeError)
}

/// Searches the subtree and unlinks the first matching node in postorder. Gives the subtree back as the error value if there is no match.
fn excise<T, Q>(mut node: Box<Node<T>>, target: &Q) -> Result<Subtree<T>, Box<Node<T>>>
where
    T: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    for &side in &[Side::Left, Side::Right] {
        if let Some(child) = node.take_child(side) {
            match excise(child, target) {
                Ok(replacement) => {
                    node.set_child(side, replacement);
                    return Ok(Some(node));
                }
                Err(child) => {
                    node.set_child(side, Some(child));
                }
            }
        }
    }
    if Borrow::<Q>::borrow(&node.key) == target {
        Ok(unlink(node))
    } else {
        Err(node)
    }
}

/// Removes the node from its own subtree, returning what takes its place.
fn unlink<T>(mut node: Box<Node<T>>) -> Subtree<T> {
    match (node.left.take(), node.right.take()) {
        (None, None) => {
            tracing::trace!("deleted leaf");
            None
        }
        (None, Some(right)) => {
            tracing::trace!("deleted node, promoted its right child");
            Some(right)
        }
        (Some(left), None) => {
            tracing::trace!("deleted node, promoted its left child");
            Some(left)
        }
        (Some(left), Some(right)) => {
            let (successor, rest) = take_leftmost(right);
            tracing::trace!(
                rest_of_right_subtree = rest.is_some(),
                "deleted full branch, moved inorder successor into it"
            );
            node.key = successor;
            node.left = Some(left);
            node.right = rest;
            Some(node)
        }
    }
}

/// Detaches the leftmost node of the subtree, returning its key and the remaining subtree. The detached node has no left child by definition, so its right subtree takes its place.
fn take_leftmost<T>(mut node: Box<Node<T>>) -> (T, Subtree<T>) {
    if let Some(left) = node.left.take() {
        let (key, rest) = take_leftmost(left);
        node.left = rest;
        (key, Some(node))
    } else {
        let right = node.right.take();
        (node.into_key(), right)
    }
}
