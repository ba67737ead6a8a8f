/*!
 * Threshold-bounded size aggregation over a finished tree
 */

use rayon::prelude::*;

use crate::types::{FsTree, NodeId};

/// Sum the total sizes of every directory at or below `node` whose total
/// does not exceed `cap`
///
/// Qualification is evaluated independently per directory: a subtree is
/// always descended into, even when its root is over the cap, so a small
/// directory nested inside a huge one still counts. Each directory
/// contributes at most once, and its total already folds in its files and
/// descendants, so nothing is double counted.
pub fn sum_within_cap(tree: &FsTree, node: NodeId, cap: u64) -> u64 {
    let dir = tree.node(node);
    let own = if dir.total_size <= cap {
        dir.total_size
    } else {
        0
    };

    own + dir
        .children
        .iter()
        .map(|&child| sum_within_cap(tree, child, cap))
        .sum::<u64>()
}

/// Parallel equivalent of [`sum_within_cap`] over the whole tree
///
/// Because qualification is per-node independent, the recursive walk from
/// the root equals a flat filtered sum over the arena, which parallelizes
/// trivially. Read-only, so safe to run across subtrees.
pub fn sum_within_cap_parallel(tree: &FsTree, cap: u64) -> u64 {
    tree.directories()
        .par_iter()
        .map(|dir| if dir.total_size <= cap { dir.total_size } else { 0 })
        .sum()
}
