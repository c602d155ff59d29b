use core::{
    mem::{self, ManuallyDrop},
    ptr, // read
};
use alloc::{boxed::Box, vec::Vec};
use arrayvec::ArrayVec;
use crate::InvalidSideError;
use super::{Side, Subtree};

/// A node of a binary tree, which is also the root of the subtree formed by it and its descendants.
///
/// The node exclusively owns both of its children, so the structure can never contain cycles or nodes with more than one parent.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<T> {
    pub(super) key: T,
    pub(super) left: Subtree<T>,
    pub(super) right: Subtree<T>,
}
impl<T> Node<T> {
    /// Creates a leaf node holding the specified key.
    #[inline]
    pub const fn new(key: T) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
    /// Creates a node holding the specified key which adopts the specified subtrees as its children.
    #[inline]
    pub const fn with_children(key: T, left: Subtree<T>, right: Subtree<T>) -> Self {
        Self { key, left, right }
    }

    /// Returns a reference to the key stored in the node.
    #[inline(always)]
    pub const fn key(&self) -> &T {
        &self.key
    }
    /// Returns a *mutable* reference to the key stored in the node.
    #[inline(always)]
    pub fn key_mut(&mut self) -> &mut T {
        &mut self.key
    }
    /// Consumes the node, dropping its subtrees, and returns the key it stored.
    pub fn into_key(self) -> T {
        let mut this = ManuallyDrop::new(self);
        drop(this.left.take());
        drop(this.right.take());
        unsafe {
            // SAFETY: the node is never dropped or used again, so the key is read out exactly once;
            // both links are already empty, so nothing is leaked
            ptr::read(&this.key)
        }
    }

    /// Returns a reference to the left child, or `None` if there is none.
    #[inline]
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }
    /// Returns a reference to the right child, or `None` if there is none.
    #[inline]
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
    /// Returns a reference to the child at the specified side, or `None` if there is none.
    #[inline]
    pub fn child(&self, side: Side) -> Option<&Self> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }
    /// Returns a *mutable* reference to the child at the specified side, or `None` if there is none.
    #[inline]
    pub fn child_mut(&mut self, side: Side) -> Option<&mut Self> {
        self.slot_mut(side).as_deref_mut()
    }
    /// Detaches the subtree at the specified side and returns it, leaving the slot empty.
    #[inline]
    pub fn take_child(&mut self, side: Side) -> Subtree<T> {
        self.slot_mut(side).take()
    }
    /// Attaches an existing subtree at the specified side, returning the subtree which was there before.
    pub fn set_child(&mut self, side: Side, subtree: Subtree<T>) -> Subtree<T> {
        mem::replace(self.slot_mut(side), subtree)
    }
    /// Returns references to the children which are present, left one first.
    ///
    /// A leaf yields an empty pack, a full branch yields both children, and a node with a single child yields only that child regardless of its side.
    pub fn children(&self) -> ArrayVec<[&Self; 2]> {
        let mut pack = ArrayVec::new();
        if let Some(left) = self.left() {
            pack.push(left);
        }
        if let Some(right) = self.right() {
            pack.push(right);
        }
        pack
    }

    /// Attaches a brand-new leaf holding `key` at the specified side.
    ///
    /// Whatever subtree was previously at that side is unconditionally replaced and returned to the caller, which may simply drop it. No constraints are placed on the key: duplicates are fine and there is no ordering.
    pub fn insert(&mut self, side: Side, key: T) -> Subtree<T> {
        let previous = self.set_child(side, Some(Box::new(Self::new(key))));
        tracing::trace!(
            side = side.as_str(),
            overwrote = previous.is_some(),
            "inserted leaf"
        );
        previous
    }
    /// Same as [`insert`], but takes the side as a string, which has to be exactly `"left"` or `"right"`.
    ///
    /// # Errors
    /// Will fail if the side selector is anything else. The node is not modified in such a case.
    ///
    /// [`insert`]: #method.insert " "
    pub fn insert_str(&mut self, side: &str, key: T) -> Result<Subtree<T>, InvalidSideError> {
        let side = side.parse::<Side>()?;
        Ok(self.insert(side, key))
    }
    /// Replaces both children with new leaves built from the packed keys: the first one becomes the left child and the second one becomes the right child. A missing key clears the corresponding side.
    ///
    /// Returns the previous left and right subtrees, in that order.
    pub fn set_children(&mut self, keys: ArrayVec<[T; 2]>) -> (Subtree<T>, Subtree<T>) {
        let mut keys = keys.into_iter().map(|key| Box::new(Self::new(key)));
        let left = keys.next();
        let right = keys.next();
        (
            self.set_child(Side::Left, left),
            self.set_child(Side::Right, right),
        )
    }

    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
    /// Returns `true` if the node is a *branch*, i.e. has one or two child nodes; `false` otherwise.
    #[inline]
    pub const fn is_branch(&self) -> bool {
        !self.is_leaf()
    }
    /// Returns `true` if the node is a *full branch*, i.e. has exactly two child nodes; `false` otherwise.
    #[inline]
    pub const fn is_full_branch(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }
    /// Returns the number of nodes in the subtree, counting the node itself.
    #[allow(clippy::len_without_is_empty)] // a node is never empty
    pub fn len(&self) -> usize {
        1 + self.left().map_or(0, Self::len) + self.right().map_or(0, Self::len)
    }
    /// Returns the number of nodes on the longest path from the node down to a leaf, counting both ends. A leaf has a height of 1.
    pub fn height(&self) -> usize {
        let left = self.left().map_or(0, Self::height);
        let right = self.right().map_or(0, Self::height);
        1 + left.max(right)
    }
    /// Returns the leftmost node of the subtree, i.e. the node reached by following left children for as long as there are any. This is the node itself if it has no left child.
    ///
    /// See [`leftmost`] for a version which accepts an absent subtree.
    ///
    /// [`leftmost`]: fn.leftmost.html " "
    pub fn leftmost(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }

    #[inline(always)]
    fn slot_mut(&mut self, side: Side) -> &mut Subtree<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
impl<T> Drop for Node<T> {
    /// Tears the subtree down iteratively, so that dropping a deep tree cannot overflow the stack.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Self>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
            // `node` goes out of scope here with both links empty
        }
    }
}
impl<T> From<T> for Node<T> {
    #[inline(always)]
    fn from(key: T) -> Self {
        Self::new(key)
    }
}
