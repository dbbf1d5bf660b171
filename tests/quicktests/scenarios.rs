use assert_matches::assert_matches;
use bintree::{count_trees, Tree, TreeError};

fn sample() -> Tree<i32> {
    vec![5, 3, 8, 1, 4].into_iter().collect()
}

#[test]
fn inserted_sample_queries() {
    let tree = sample();

    let mut out = Vec::new();
    tree.print_tree(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1 3 4 5 8");

    assert_eq!(tree.size(), 5);
    assert_eq!(tree.max_depth(), 3);
    assert_eq!(tree.min_value(), Ok(&1));
}

#[test]
fn inserted_sample_paths() {
    let tree = sample();
    let mut out = Vec::new();

    assert_eq!(
        tree.print_paths(&mut out).unwrap(),
        vec![vec![5, 3, 1], vec![5, 3, 4], vec![5, 8]]
    );
}

#[test]
fn empty_tree_has_no_minimum() {
    let tree: Tree<i32> = Tree::new();

    assert_matches!(tree.min_value(), Err(TreeError::EmptyTree));
    assert_eq!(
        TreeError::EmptyTree.to_string(),
        "operation requires a non-empty tree"
    );
}

#[test]
fn double_single_node() {
    let mut tree = Tree::singleton(2);
    tree.double_tree();

    assert_eq!(tree, Tree::node(2, Tree::singleton(2), Tree::Leaf));
    assert_eq!(tree.size(), 2);
}

#[test]
fn mirror_twice_restores_copy() {
    let before = sample();
    let mut copy = before.clone();
    copy.mirror();
    assert!(!copy.same_tree(&before));

    copy.mirror();
    assert!(copy.same_tree(&before));
}

#[test]
fn first_catalan_numbers() {
    assert_eq!(count_trees(0), 1);
    assert_eq!(count_trees(1), 1);
    assert_eq!(count_trees(2), 2);
    assert_eq!(count_trees(3), 5);
}

#[test]
fn bst_checks_diverge_on_fractional_keys() {
    let tree = Tree::node(
        2.0,
        Tree::node(1.5, Tree::Leaf, Tree::singleton(2.0)),
        Tree::Leaf,
    );

    assert!(tree.is_bst_naive());
    assert!(!tree.is_bst_bounded());
}
