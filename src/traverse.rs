//! Depth-first traversals of a [`Tree`]: in-order and post-order listings,
//! root-to-leaf paths and path sums.
//!
//! The `print_*` methods write to any [`io::Write`] sink so callers pick where
//! the output goes.
//!
//! # Examples
//!
//! ```
//! use bintree::Tree;
//!
//! let tree: Tree<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
//!
//! let mut out = Vec::new();
//! tree.print_tree(&mut out).unwrap();
//! assert_eq!(out, b"1 3 4 5 8");
//!
//! let mut out = Vec::new();
//! let paths = tree.print_paths(&mut out).unwrap();
//! assert_eq!(paths, vec![vec![5, 3, 1], vec![5, 3, 4], vec![5, 8]]);
//! assert_eq!(out, b"[5, 3, 1]\n[5, 3, 4]\n[5, 8]\n");
//! ```

use std::fmt;
use std::io;

use num_traits::{CheckedAdd, Zero};

use crate::tree::Tree;

/// Writes values to a sink with a single space between consecutive values.
struct Emitter<'w, W> {
    out: &'w mut W,
    first: bool,
}

impl<'w, W: io::Write> Emitter<'w, W> {
    fn new(out: &'w mut W) -> Self {
        Self { out, first: true }
    }

    fn emit<T: fmt::Display>(&mut self, value: &T) -> io::Result<()> {
        if self.first {
            self.first = false;
        } else {
            self.out.write_all(b" ")?;
        }
        write!(self.out, "{}", value)
    }
}

impl<T> Tree<T> {
    /// The values of this tree visited left subtree first, then the node, then
    /// the right subtree. For a BST this is sorted order.
    pub fn in_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.size());
        collect_in_order(self, &mut values);
        values
    }

    /// The values of this tree visited bottom-up: both subtrees before the
    /// node itself.
    pub fn post_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.size());
        collect_post_order(self, &mut values);
        values
    }

    /// Writes the in-order values to `out`, separated by spaces.
    ///
    /// # Errors
    ///
    /// Any error returned by `out`.
    pub fn print_tree<W: io::Write>(&self, out: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
    {
        emit_in_order(self, &mut Emitter::new(out))
    }

    /// Writes the post-order values to `out`, separated by spaces.
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree = Tree::node(4, Tree::node(2, Tree::singleton(1), Tree::singleton(3)), Tree::singleton(5));
    ///
    /// let mut out = Vec::new();
    /// tree.print_postorder(&mut out).unwrap();
    /// assert_eq!(out, b"1 3 2 5 4");
    /// ```
    ///
    /// # Errors
    ///
    /// Any error returned by `out`.
    pub fn print_postorder<W: io::Write>(&self, out: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
    {
        emit_post_order(self, &mut Emitter::new(out))
    }

    /// Every root-to-leaf path, in the order the leaves are met walking the
    /// tree depth first from left to right.
    pub fn paths(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        let mut paths = Vec::new();
        let mut path = Vec::with_capacity(self.max_depth());
        collect_paths(self, &mut path, &mut paths);
        paths
    }

    /// Like [`Tree::paths`] but also writes each path to `out` on its own
    /// line.
    ///
    /// # Errors
    ///
    /// Any error returned by `out`. Paths written before the failure stay
    /// written.
    pub fn print_paths<W: io::Write>(&self, out: &mut W) -> io::Result<Vec<Vec<T>>>
    where
        T: Clone + fmt::Debug,
    {
        let paths = self.paths();
        for path in &paths {
            writeln!(out, "{:?}", path)?;
        }
        Ok(paths)
    }

    /// Whether some root-to-leaf path adds up to `target`. An empty tree has
    /// no paths, so this is `false` for it whatever the target.
    ///
    /// Running sums are checked: a path whose partial sum overflows `T` never
    /// matches.
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<i32> = vec![5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert!(tree.has_path_sum(9));
    /// assert!(tree.has_path_sum(13));
    /// assert!(!tree.has_path_sum(8));
    /// ```
    pub fn has_path_sum(&self, target: T) -> bool
    where
        T: CheckedAdd + Zero + PartialEq + Copy,
    {
        path_sum_from(self, T::zero(), target)
    }
}

fn collect_in_order<'a, T>(tree: &'a Tree<T>, values: &mut Vec<&'a T>) {
    if let Tree::Node(n) = tree {
        collect_in_order(n.left(), values);
        values.push(n.value());
        collect_in_order(n.right(), values);
    }
}

fn collect_post_order<'a, T>(tree: &'a Tree<T>, values: &mut Vec<&'a T>) {
    if let Tree::Node(n) = tree {
        collect_post_order(n.left(), values);
        collect_post_order(n.right(), values);
        values.push(n.value());
    }
}

fn emit_in_order<T, W>(tree: &Tree<T>, emitter: &mut Emitter<'_, W>) -> io::Result<()>
where
    T: fmt::Display,
    W: io::Write,
{
    if let Tree::Node(n) = tree {
        emit_in_order(n.left(), emitter)?;
        emitter.emit(n.value())?;
        emit_in_order(n.right(), emitter)?;
    }
    Ok(())
}

fn emit_post_order<T, W>(tree: &Tree<T>, emitter: &mut Emitter<'_, W>) -> io::Result<()>
where
    T: fmt::Display,
    W: io::Write,
{
    if let Tree::Node(n) = tree {
        emit_post_order(n.left(), emitter)?;
        emit_post_order(n.right(), emitter)?;
        emitter.emit(n.value())?;
    }
    Ok(())
}

/// `path` holds the values from the root down to, but not including, `tree`.
/// It is shared between sibling branches, so leaves store a copy of it.
fn collect_paths<T: Clone>(tree: &Tree<T>, path: &mut Vec<T>, paths: &mut Vec<Vec<T>>) {
    let node = match tree.root() {
        Some(n) => n,
        None => return,
    };

    path.push(node.value().clone());
    if node.is_leaf() {
        paths.push(path.clone());
    } else {
        if !node.left().is_empty() {
            collect_paths(node.left(), path, paths);
        }
        if !node.right().is_empty() {
            collect_paths(node.right(), path, paths);
        }
    }
    path.pop();
}

fn path_sum_from<T>(tree: &Tree<T>, sum: T, target: T) -> bool
where
    T: CheckedAdd + Zero + PartialEq + Copy,
{
    let node = match tree.root() {
        Some(n) => n,
        None => return false,
    };
    let sum = match sum.checked_add(node.value()) {
        Some(sum) => sum,
        None => return false,
    };

    if node.is_leaf() {
        sum == target
    } else {
        path_sum_from(node.left(), sum, target) || path_sum_from(node.right(), sum, target)
    }
}
