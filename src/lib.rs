//! This crate collects the classic exercises on binary trees and Binary
//! Search Trees (BSTs), mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A binary tree is defined recursively using the notion of a `Node`. A
//! `Node` stores a value and has up to two child `Node`s, each of which owns
//! its own subtree. A binary tree is a BST when, for every `Node`:
//!
//! 1. all the `Node`s in its left subtree have a value less than or equal to
//!    its own value, and
//! 2. all the `Node`s in its right subtree have a value greater than its own
//!    value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching a BST takes `O(height)`, where `height` is the longest path from
//! the root `Node` to a leaf `Node`, and visiting the left subtree, then the
//! subtree root, then the right subtree yields the values in sorted order.
//! Nothing here rebalances, so inserting sorted values degrades a tree into a
//! list.
//!
//! ## Layout
//!
//! - [`tree`]: the [`Tree`] type with searching, insertion, sizes, equality
//!   and the in-place `mirror`/`double_tree` transforms.
//! - [`traverse`]: in-order and post-order printing, root-to-leaf paths and
//!   path sums.
//! - [`validate`]: two ways of checking that a tree is a BST.
//! - [`count`]: how many BST shapes exist for a number of keys.
//!
//! Everything is recursive, so very deep trees can overflow the stack.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod count;
pub mod error;
pub mod traverse;
pub mod tree;
pub mod validate;

pub use crate::count::count_trees;
pub use crate::error::TreeError;
pub use crate::tree::{Node, Tree};
pub use crate::validate::Successor;
