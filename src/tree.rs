//! An owned binary tree. Every `Node` exclusively owns its two children, which
//! are themselves `Tree`s and may be [`Leaf`][Tree::Leaf]s.
//!
//! Plain-tree operations (`size`, `mirror`, `same_tree`, ...) work on any
//! shape. The ordered ones (`lookup`, `insert`, `min_value`) assume the tree is
//! a BST and give meaningless answers otherwise.
//!
//! # Examples
//!
//! ```
//! use bintree::Tree;
//!
//! let tree = Tree::new();
//! assert!(tree.is_empty());
//!
//! // `insert` consumes the tree and hands back its root.
//! let tree = tree.insert(5).insert(3).insert(8);
//! assert!(tree.lookup(&3));
//! assert!(!tree.lookup(&4));
//! assert_eq!(tree.size(), 3);
//! assert_eq!(tree.max_depth(), 2);
//! assert_eq!(tree.min_value(), Ok(&3));
//! ```

use std::cmp;
use std::iter::FromIterator;
use std::mem;

use crate::error::TreeError;

/// A binary tree. Either empty or a boxed [`Node`] owning its subtrees.
#[derive(Clone, Debug)]
pub enum Tree<T> {
    /// A marker for the empty pointer at the bottom of a subtree.
    Leaf,
    /// A `Node` holding a value and two children.
    Node(Box<Node<T>>),
}

/// A single vertex of a [`Tree`].
#[derive(Clone, Debug)]
pub struct Node<T> {
    value: T,
    left: Tree<T>,
    right: Tree<T>,
}

impl<T> Node<T> {
    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left subtree.
    pub fn left(&self) -> &Tree<T> {
        &self.left
    }

    /// The right subtree.
    pub fn right(&self) -> &Tree<T> {
        &self.right
    }

    /// Whether both children are empty.
    pub fn is_leaf(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// A tree of one node with no children.
    pub fn singleton(value: T) -> Self {
        Self::node(value, Self::Leaf, Self::Leaf)
    }

    /// A tree whose root holds `value` and owns the given subtrees. No ordering
    /// is checked, so this can build trees that are not BSTs.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree = Tree::node(2, Tree::singleton(1), Tree::singleton(3));
    /// assert_eq!(tree.size(), 3);
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(2));
    /// ```
    pub fn node(value: T, left: Self, right: Self) -> Self {
        Self::Node(Box::new(Node { value, left, right }))
    }

    /// Whether this tree has no nodes.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&Node<T>> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(n),
        }
    }

    /// Searches the tree for `target`, descending left or right by comparing
    /// against each node. Only one branch is ever visited, so the tree must be
    /// a BST for the answer to mean anything. Use [`Tree::contains`] for
    /// arbitrary trees.
    pub fn lookup(&self, target: &T) -> bool
    where
        T: cmp::Ord,
    {
        match self {
            Self::Leaf => false,
            Self::Node(n) => match target.cmp(&n.value) {
                cmp::Ordering::Less => n.left.lookup(target),
                cmp::Ordering::Equal => true,
                cmp::Ordering::Greater => n.right.lookup(target),
            },
        }
    }

    /// Searches every node for `target`. Works on any tree.
    pub fn contains(&self, target: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Self::Leaf => false,
            Self::Node(n) => {
                n.value == *target || n.left.contains(target) || n.right.contains(target)
            }
        }
    }

    /// Inserts `value` below the first empty child found by descending the
    /// tree and returns the root. Values less than or equal to a node go
    /// left, so duplicates pile up in left subtrees.
    ///
    /// The root of an empty tree is a brand new node, which is why this takes
    /// `self` and the result must be kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree = Tree::new().insert(2).insert(2);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.left().root().map(|n| *n.value()), Some(2));
    /// assert!(root.right().is_empty());
    /// ```
    #[must_use]
    pub fn insert(self, value: T) -> Self
    where
        T: cmp::Ord,
    {
        match self {
            Self::Leaf => Self::singleton(value),
            Self::Node(mut n) => {
                match value.cmp(&n.value) {
                    cmp::Ordering::Less | cmp::Ordering::Equal => {
                        n.left = mem::take(&mut n.left).insert(value);
                    }
                    cmp::Ordering::Greater => {
                        n.right = mem::take(&mut n.right).insert(value);
                    }
                }
                Self::Node(n)
            }
        }
    }

    /// Counts the nodes in this tree.
    pub fn size(&self) -> usize {
        match self {
            Self::Leaf => 0,
            Self::Node(n) => 1 + n.left.size() + n.right.size(),
        }
    }

    /// The number of nodes along the longest path from the root down to the
    /// farthest leaf. An empty tree has a depth of 0, a single node 1.
    pub fn max_depth(&self) -> usize {
        match self {
            Self::Leaf => 0,
            Self::Node(n) => 1 + n.left.max_depth().max(n.right.max_depth()),
        }
    }

    /// The smallest value of a BST, found by following left children as far
    /// as they go.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if the tree has no nodes.
    pub fn min_value(&self) -> Result<&T, TreeError> {
        let mut node = self.root().ok_or(TreeError::EmptyTree)?;
        while let Some(left) = node.left.root() {
            node = left;
        }
        Ok(&node.value)
    }

    /// Whether both trees have the same shape and hold equal values in the
    /// same places.
    pub fn same_tree(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        match (self, other) {
            (Self::Leaf, Self::Leaf) => true,
            (Self::Node(a), Self::Node(b)) => {
                a.value == b.value && a.left.same_tree(&b.left) && a.right.same_tree(&b.right)
            }
            _ => false,
        }
    }

    /// Swaps the left and right children of every node, in place.
    ///
    /// ```txt
    ///       4              4
    ///      / \            / \
    ///     2   5    =>    5   2
    ///    / \                / \
    ///   1   3              3   1
    /// ```
    pub fn mirror(&mut self) {
        if let Self::Node(n) = self {
            n.left.mirror();
            n.right.mirror();
            mem::swap(&mut n.left, &mut n.right);
        }
    }

    /// Gives every node a duplicate of itself as its new left child. The
    /// duplicate takes over the node's old left subtree, so a BST stays a
    /// BST.
    ///
    /// ```txt
    ///                     2
    ///     2              / \
    ///    / \    =>      2   3
    ///   1   3          /   /
    ///                 1   3
    ///                /
    ///               1
    /// ```
    pub fn double_tree(&mut self)
    where
        T: Clone,
    {
        if let Self::Node(n) = self {
            n.left.double_tree();
            n.right.double_tree();
            let old_left = mem::take(&mut n.left);
            n.left = Self::node(n.value.clone(), old_left, Self::Leaf);
        }
    }
}

impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_tree(other)
    }
}

impl<T: Eq> Eq for Tree<T> {}

/// Builds a tree by inserting every value in order.
impl<T: cmp::Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::insert)
    }
}
