//! Checks of the BST invariant.
//!
//! There are two checks and they are deliberately kept apart:
//!
//! - [`Tree::is_bst_naive`] rescans whole subtrees at every node, asking for
//!   `max(left) <= value < min(right)`. Quadratic in the worst case.
//! - [`Tree::is_bst_bounded`] walks the tree once, narrowing an allowed range
//!   as it descends. The range handed to a right subtree starts at the
//!   [`Successor`] of the parent's value, which only matches the naive check
//!   when keys are integers.
//!
//! ```
//! use bintree::Tree;
//!
//! // 2.0 sits right of 1.5 but is below 1.5 + 1.
//! let tree = Tree::node(2.0, Tree::node(1.5, Tree::Leaf, Tree::singleton(2.0)), Tree::Leaf);
//!
//! assert!(tree.is_bst_naive());
//! assert!(!tree.is_bst_bounded());
//! ```

use crate::tree::Tree;

/// The next value after a given one, used as the lower bound for right
/// subtrees by [`Tree::is_bst_bounded`].
pub trait Successor: Sized {
    /// Returns `self + 1`, or `None` if that is not representable.
    fn successor(&self) -> Option<Self>;
}

macro_rules! impl_successor_for_int {
    ($($t:ty),*) => {
        $(
            impl Successor for $t {
                fn successor(&self) -> Option<Self> {
                    self.checked_add(1)
                }
            }
        )*
    };
}

macro_rules! impl_successor_for_float {
    ($($t:ty),*) => {
        $(
            impl Successor for $t {
                fn successor(&self) -> Option<Self> {
                    Some(self + 1.0)
                }
            }
        )*
    };
}

impl_successor_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_successor_for_float!(f32, f64);

/// A value extended with infinities. Variant order gives
/// `NegInf < Finite(_) < PosInf`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
enum Bound<T> {
    NegInf,
    Finite(T),
    PosInf,
}

impl<T> Tree<T> {
    /// Returns true if every node is no smaller than everything in its left
    /// subtree and strictly smaller than everything in its right subtree.
    ///
    /// Each node rescans both of its subtrees, so this is `O(n²)` on
    /// degenerate trees. See [`Tree::is_bst_bounded`] for a linear check.
    pub fn is_bst_naive(&self) -> bool
    where
        T: PartialOrd,
    {
        match self.root() {
            None => true,
            Some(n) => {
                let value = Bound::Finite(n.value());
                subtree_max(n.left()) <= value
                    && value < subtree_min(n.right())
                    && n.left().is_bst_naive()
                    && n.right().is_bst_naive()
            }
        }
    }

    /// Returns true if every value lies within the range its ancestors allow:
    /// at most the value of any ancestor it sits left of, and at least one
    /// more than the value of any ancestor it sits right of.
    ///
    /// For integers this accepts exactly the trees [`Tree::is_bst_naive`]
    /// accepts. For other keys the `+ 1` makes it stricter.
    pub fn is_bst_bounded(&self) -> bool
    where
        T: PartialOrd + Clone + Successor,
    {
        within(self, Bound::NegInf, Bound::PosInf)
    }
}

fn subtree_min<T: PartialOrd>(tree: &Tree<T>) -> Bound<&T> {
    match tree.root() {
        None => Bound::PosInf,
        Some(n) => lesser(
            lesser(Bound::Finite(n.value()), subtree_min(n.left())),
            subtree_min(n.right()),
        ),
    }
}

fn subtree_max<T: PartialOrd>(tree: &Tree<T>) -> Bound<&T> {
    match tree.root() {
        None => Bound::NegInf,
        Some(n) => greater(
            greater(Bound::Finite(n.value()), subtree_max(n.left())),
            subtree_max(n.right()),
        ),
    }
}

fn lesser<B: PartialOrd>(a: B, b: B) -> B {
    if b < a {
        b
    } else {
        a
    }
}

fn greater<B: PartialOrd>(a: B, b: B) -> B {
    if b > a {
        b
    } else {
        a
    }
}

fn within<T>(tree: &Tree<T>, low: Bound<T>, high: Bound<T>) -> bool
where
    T: PartialOrd + Clone + Successor,
{
    let node = match tree.root() {
        Some(n) => n,
        None => return true,
    };

    let value = Bound::Finite(node.value().clone());
    if !(low <= value && value <= high) {
        return false;
    }

    // No successor means the value is the largest representable one, so
    // nothing may sit to its right.
    let above = node
        .value()
        .successor()
        .map_or(Bound::PosInf, Bound::Finite);
    within(node.left(), low, value) && within(node.right(), above, high)
}
