use bintree::Tree;

use crate::Op;

/// Trees stop doubling past this many nodes.
const MAX_DOUBLING_SIZE: usize = 256;

/// Applies a set of operations to a tree and to a plain vector of the same
/// values, checking every lookup against the vector along the way.
fn do_ops<T>(ops: &[Op<T>], mut bst: Tree<T>, model: &mut Vec<T>) -> Option<Tree<T>>
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst = bst.insert(x.clone());
                model.push(x.clone());
            }
            Op::Lookup(x) => {
                if bst.lookup(x) != model.contains(x) {
                    return None;
                }
            }
            Op::Double => {
                if model.len() <= MAX_DOUBLING_SIZE {
                    bst.double_tree();
                    let copies = model.clone();
                    model.extend(copies);
                }
            }
        }
    }

    Some(bst)
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut model = Vec::new();
        let tree = match do_ops(&ops, Tree::new(), &mut model) {
            Some(tree) => tree,
            None => return false,
        };
        model.sort_unstable();

        tree.size() == model.len()
            && tree.in_order().into_iter().eq(model.iter())
            && tree.is_bst_naive()
            && tree.is_bst_bounded()
            && model.iter().all(|x| tree.lookup(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        nots.iter()
            .filter(|x| !xs.contains(x))
            .all(|x| !tree.lookup(x))
    }
}

quickcheck::quickcheck! {
    fn min_value_is_smallest(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        tree.min_value().ok() == xs.iter().min()
    }
}

quickcheck::quickcheck! {
    fn printed_in_sorted_order(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let mut sorted = xs;
        sorted.sort_unstable();
        let expected = sorted
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        let mut out = Vec::new();
        tree.print_tree(&mut out).is_ok() && out == expected.into_bytes()
    }
}

quickcheck::quickcheck! {
    fn paths_end_at_leaves(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let mut out = Vec::new();
        let paths = match tree.print_paths(&mut out) {
            Ok(paths) => paths,
            Err(_) => return false,
        };

        let lines = String::from_utf8(out).unwrap_or_default();
        lines.lines().count() == paths.len()
            && paths.iter().all(|p| p.first() == tree.root().map(|n| n.value()))
            && paths.iter().all(|p| p.len() <= tree.max_depth())
    }
}
