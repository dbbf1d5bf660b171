//! Counting BST shapes.

/// Returns how many structurally different BSTs can store `num_keys`
/// distinct keys.
///
/// Each key in turn is tried as the root, with the smaller keys forming every
/// possible left subtree and the larger keys every possible right subtree.
/// The counts are the Catalan numbers.
///
/// This is the plain recursion with no memoization, so it takes exponential
/// time. It is meant for small inputs; past 36 keys the count no longer fits
/// in a `u64` anyway.
///
/// # Examples
///
/// ```
/// use bintree::count_trees;
///
/// assert_eq!(count_trees(0), 1);
/// assert_eq!(count_trees(3), 5);
/// assert_eq!(count_trees(4), 14);
/// ```
pub fn count_trees(num_keys: usize) -> u64 {
    if num_keys <= 1 {
        return 1;
    }

    (1..=num_keys)
        .map(|root| count_trees(root - 1) * count_trees(num_keys - root))
        .sum()
}
