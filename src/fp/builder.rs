use std::collections::HashMap;

use tracing::debug;

use super::tree::FpTree;
use crate::error::Result;
use crate::itemset::Item;
use crate::source::TransactionSource;

/// Two-pass FP-tree construction.
///
/// Every transaction is shown twice: once to `count` while global item
/// frequencies are tallied, then once to `insert` after `finish_counting`
/// has dropped the infrequent items and fixed the insertion order.
#[derive(Debug)]
struct TreeBuilder<T> {
    min_support: usize,
    counts: HashMap<T, usize>,
    /// Items in the order they were first seen.
    discovered: Vec<T>,
    ranks: HashMap<T, usize>,
    tree: FpTree<T>,
}

impl<T: Item> TreeBuilder<T> {
    fn new(min_support: usize) -> Self {
        Self {
            min_support,
            counts: HashMap::new(),
            discovered: Vec::new(),
            ranks: HashMap::new(),
            tree: FpTree::with_ranked_items(Vec::new()),
        }
    }

    /// Adds `weight` to the global frequency of each item.
    fn count(&mut self, items: &[T], weight: usize) {
        for item in items {
            match self.counts.get_mut(item) {
                Some(count) => *count += weight,
                None => {
                    self.counts.insert(item.clone(), weight);
                    self.discovered.push(item.clone());
                }
            }
        }
    }

    /// Drops infrequent items and ranks the rest by descending frequency.
    fn finish_counting(&mut self) {
        let mut frequent: Vec<(T, usize)> = self
            .discovered
            .iter()
            .filter_map(|item| {
                let count = self.counts.get(item).copied().unwrap_or(0);
                (count >= self.min_support).then(|| (item.clone(), count))
            })
            .collect();

        // Stable, so equal counts keep discovery order.
        frequent.sort_by(|a, b| b.1.cmp(&a.1));

        self.ranks = frequent
            .iter()
            .enumerate()
            .map(|(rank, (item, _))| (item.clone(), rank))
            .collect();
        debug!(
            distinct = self.discovered.len(),
            frequent = frequent.len(),
            min_support = self.min_support,
            "ranked items"
        );
        self.tree = FpTree::with_ranked_items(frequent);
    }

    /// Inserts the frequent part of `items`, in rank order, with `weight`.
    fn insert(&mut self, items: &[T], weight: usize) {
        let mut ranked: Vec<(usize, &T)> = items
            .iter()
            .filter_map(|item| self.ranks.get(item).map(|&rank| (rank, item)))
            .collect();
        if ranked.is_empty() {
            return;
        }

        ranked.sort_unstable_by_key(|&(rank, _)| rank);
        let ordered: Vec<T> = ranked.into_iter().map(|(_, item)| item.clone()).collect();
        self.tree.insert_ordered(&ordered, weight);
    }
}

/// Builds the FP-tree of `source` in two scans: one to count items, one to
/// insert transactions. Returns the tree and the number of transactions.
pub fn build_fp_tree<S: TransactionSource>(
    source: &mut S,
    min_support: usize,
) -> Result<(FpTree<S::Item>, usize)> {
    let mut builder = TreeBuilder::new(min_support);

    let transactions = source.scan(|transaction| builder.count(transaction.as_slice(), 1))?;
    builder.finish_counting();
    source.scan(|transaction| builder.insert(transaction.as_slice(), 1))?;

    debug!(
        transactions,
        nodes = builder.tree.node_count(),
        "built FP-tree"
    );
    Ok((builder.tree, transactions))
}

/// Builds the conditional FP-tree of a pattern base, pruned by `min_support`.
pub fn build_conditional_fp_tree<T: Item>(prefix_paths: &[(Vec<T>, usize)], min_support: usize) -> FpTree<T> {
    let mut builder = TreeBuilder::new(min_support);

    for (path, count) in prefix_paths {
        builder.count(path, *count);
    }
    builder.finish_counting();
    for (path, count) in prefix_paths {
        builder.insert(path, *count);
    }

    builder.tree
}
