//! Trees which allow at most two children for their nodes.
//!
//! The [Wikipedia article] on binary trees covers their use cases and specifics in more detail.
//!
//! Every [`Node`] owns its left and right subtrees directly, so a node *is* a subtree and there are no parent links. Since nothing points upwards, operations which can change which node sits at the top of a subtree, like [`delete`], take the subtree by value and give back the new one, and the caller puts it back where the old one used to live. [`BinaryTree`] does exactly that for the root.
//!
//! Either child can exist without the other one; a node with only a right child is a perfectly valid node and is *not* normalized into having a left child.
//!
//! # Example
//! ```rust
//! use sapling::binary_tree::{self, Node, Side};
//!
//! // Create the root of the tree. A lone node is a leaf, which is a complete tree on its own.
//! let mut root = Box::new(Node::new(1));
//! assert!(root.is_leaf());
//!
//! // Attach some children. Inserting always creates a new leaf, replacing whatever was there.
//! root.insert(Side::Left, 2);
//! root.insert(Side::Right, 3);
//! root.child_mut(Side::Right).unwrap().insert(Side::Left, 4);
//!
//! // Deleting a node with two children moves its inorder successor up into it:
//! let root = binary_tree::delete(root, &1).expect("the tree still has nodes");
//! assert_eq!(*root.key(), 4);
//! assert_eq!(sapling::traversal::inorder(Some(&*root)), [&2, &4, &3]);
//! ```
//!
//! [Wikipedia article]: https://en.wikipedia.org/wiki/Binary_tree " "

use core::{
    fmt::{self, Formatter, Display},
    convert::TryFrom,
    str::FromStr,
};
use alloc::boxed::Box;
use crate::InvalidSideError;

mod base;
mod node;
mod removal;

pub use base::BinaryTree;
pub use node::Node;
pub use removal::{delete, try_delete, leftmost};


/// An owned subtree, which may be absent.
///
/// This is the type of the child links of a [`Node`] and of the result of deletion.
pub type Subtree<T> = Option<Box<Node<T>>>;

/// Selects one of the two child slots of a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left child.
    Left,
    /// The right child.
    Right,
}
impl Side {
    /// Returns the other side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
    /// Returns the lowercase name of the side, which is also what [`FromStr`] accepts.
    ///
    /// [`FromStr`]: https://doc.rust-lang.org/std/str/trait.FromStr.html " "
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}
impl Display for Side {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
impl FromStr for Side {
    type Err = InvalidSideError;
    /// Parses exactly `"left"` or `"right"`; anything else, including differently cased variants, is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(InvalidSideError),
        }
    }
}
impl TryFrom<&str> for Side {
    type Error = InvalidSideError;
    #[inline(always)]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
