//! Implements an owned-node binary tree and the classic algorithms for working with it.
//!
//! ------------------------
//!
//! # Overview
//! Sapling implements a plain binary tree: every node holds a key and exclusively owns up to two subtrees, the left one and the right one. There is no ordering among the keys (this is *not* a binary search tree) and no balancing, so the shape of the tree is exactly the shape it was built with.
//!
//! The crate provides:
//! - [`Node`], the recursive node type, which is also the subtree type, with insertion of new leaf children at either [`Side`]
//! - Deletion of an arbitrary node by key, which replaces nodes with two children by their inorder successor (see [`binary_tree::delete`])
//! - Traversals in inorder, preorder, postorder and boundary [`Order`], each producing a freshly built sequence of key references
//! - [`BinaryTree`], an owning handle which keeps track of the root across deletions
//!
//! # Example
//! ```rust
//! use sapling::{BinaryTree, Side};
//!
//! let mut tree = BinaryTree::new(1);
//! let root = tree.root_mut().expect("the tree was created with a root");
//! root.insert(Side::Left, 2);
//! root.insert(Side::Right, 3);
//!
//! assert_eq!(tree.inorder(), [&2, &1, &3]);
//! assert_eq!(tree.preorder(), [&1, &2, &3]);
//! assert_eq!(tree.postorder(), [&2, &3, &1]);
//!
//! assert!(tree.delete(&2));
//! assert_eq!(tree.inorder(), [&1, &3]);
//! ```
//!
//! # Feature flags
//! - `std` (**enabled by default**) — enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Error`] trait implementations for the error types. Without it, the crate still requires an allocator, since nodes are boxed.
//! - `doc_cfg` — annotates feature-gated items in the generated documentation. **Requires a nightly compiler**.
//!
//! # Public dependencies
//! - `arrayvec` (**required**) — `^0.5`
//!
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "

#![warn(
    rust_2018_idioms,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::items_after_statements,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_if_let_else,
    clippy::option_option,
    clippy::redundant_closure_for_method_calls,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::too_many_lines,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

pub mod binary_tree;
pub use binary_tree::{BinaryTree, Node, Side, Subtree};

pub mod traversal;
pub use traversal::Order;

/// A prelude for using Sapling, containing the most used types for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::binary_tree::{
        BinaryTree,
        Node as BinaryTreeNode,
        Side as BinaryTreeSide,
    };
    #[doc(no_inline)]
    pub use crate::traversal::Order as TraversalOrder;
}

use core::fmt::{self, Formatter, Display, Debug};

/// The error type returned when parsing a side selector from a string which is neither `"left"` nor `"right"`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct InvalidSideError;
impl Display for InvalidSideError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("invalid side selector, expected \"left\" or \"right\"")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for InvalidSideError {}

/// The error type returned when looking for the leftmost node of a subtree which does not exist.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EmptySubtreeError;
impl Display for EmptySubtreeError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("cannot find the leftmost node of an empty subtree")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for EmptySubtreeError {}

/// The error type returned by methods which delete a node by key when no node holds that key.
///
/// The tree which was searched is left untouched and handed back inside the error, so that it doesn't get dropped just because the deletion failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyNotFoundError<R> {
    /// The tree which was searched, returned to the caller unchanged.
    pub tree: R,
}
impl<R> KeyNotFoundError<R> {
    /// Extracts the tree which was searched.
    #[allow(clippy::missing_const_for_fn)] // Clippy has no idea what a destructor is
    pub fn into_tree(self) -> R {
        self.tree
    }
}
impl<R> Display for KeyNotFoundError<R> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("no node in the tree holds the requested key")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl<R: Debug> std::error::Error for KeyNotFoundError<R> {}
