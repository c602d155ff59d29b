use core::borrow::Borrow;
use alloc::{boxed::Box, vec::Vec};
use crate::{traversal::{self, Order}, KeyNotFoundError};
use super::{removal, Node, Subtree};

/// A binary tree, which owns its root node and, through it, all other nodes.
///
/// This is a thin handle around an optional root: unlike a bare [`Node`], it can be empty, and it takes care of putting the new root in place after deletion.
///
/// [`Node`]: struct.Node.html " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryTree<T> {
    root: Subtree<T>,
}
impl<T> BinaryTree<T> {
    /// Creates a binary tree with a root node holding the specified key.
    #[inline]
    pub fn new(root: T) -> Self {
        Self {
            root: Some(Box::new(Node::new(root))),
        }
    }
    /// Creates a binary tree without any nodes.
    #[inline]
    pub const fn empty() -> Self {
        Self { root: None }
    }
    /// Wraps an existing subtree into a binary tree, making its root the root of the tree.
    #[inline]
    pub const fn from_root(root: Subtree<T>) -> Self {
        Self { root }
    }
    /// Returns a reference to the root node, or `None` if the tree is empty.
    #[inline]
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
    /// Returns a *mutable* reference to the root node, or `None` if the tree is empty.
    #[inline]
    pub fn root_mut(&mut self) -> Option<&mut Node<T>> {
        self.root.as_deref_mut()
    }
    /// Consumes the tree and returns its root, with all other nodes still attached to it.
    #[inline]
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    pub fn into_root(self) -> Subtree<T> {
        self.root
    }
    /// Returns `true` if the tree has no nodes, `false` otherwise.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }
    /// Returns the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.root().map_or(0, Node::len)
    }
    /// Returns the number of nodes on the longest path from the root down to a leaf, or 0 if the tree is empty.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Removes the node holding `target` and returns `true`, or returns `false` if there is no such node, in which case the tree is left unchanged.
    ///
    /// See [`binary_tree::delete`] for the details on how the node is removed.
    ///
    /// [`binary_tree::delete`]: fn.delete.html " "
    pub fn delete<Q>(&mut self, target: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.try_delete(target).is_ok()
    }
    /// Removes the node holding `target`.
    ///
    /// # Errors
    /// Will fail if there is no such node, leaving the tree unchanged. Since the tree stays in place, the error carries nothing back.
    pub fn try_delete<Q>(&mut self, target: &Q) -> Result<(), KeyNotFoundError<()>>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let root = self.root.take().ok_or(KeyNotFoundError { tree: () })?;
        match removal::try_delete(root, target) {
            Ok(new_root) => {
                self.root = new_root;
                Ok(())
            }
            Err(error) => {
                self.root = Some(error.into_tree());
                Err(KeyNotFoundError { tree: () })
            }
        }
    }

    /// Returns the keys in inorder.
    #[inline]
    pub fn inorder(&self) -> Vec<&T> {
        traversal::inorder(self.root())
    }
    /// Returns the keys in preorder.
    #[inline]
    pub fn preorder(&self) -> Vec<&T> {
        traversal::preorder(self.root())
    }
    /// Returns the keys in postorder.
    #[inline]
    pub fn postorder(&self) -> Vec<&T> {
        traversal::postorder(self.root())
    }
    /// Returns the keys of the boundary nodes, counterclockwise from the root.
    #[inline]
    pub fn boundary(&self) -> Vec<&T> {
        traversal::boundary(self.root())
    }
    /// Returns the keys in the specified order.
    #[inline]
    pub fn traverse(&self, order: Order) -> Vec<&T> {
        traversal::traverse(self.root(), order)
    }
}
impl<T> Default for BinaryTree<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::empty()
    }
}
impl<T> From<Node<T>> for BinaryTree<T> {
    #[inline]
    fn from(root: Node<T>) -> Self {
        Self::from_root(Some(Box::new(root)))
    }
}
impl<T> From<Box<Node<T>>> for BinaryTree<T> {
    #[inline]
    fn from(root: Box<Node<T>>) -> Self {
        Self::from_root(Some(root))
    }
}
