use tracing::{debug, info};

use super::builder::{build_conditional_fp_tree, build_fp_tree};
use super::combinations::generate_combinations_from_path;
use super::tree::FpTree;
use crate::config::MiningConfig;
use crate::error::Result;
use crate::itemset::{Item, Itemset};
use crate::levels::FrequentLevels;
use crate::miner::FrequentItemsetMiner;
use crate::source::TransactionSource;

/// Everything produced by one FP-Growth run.
#[derive(Debug, Clone)]
pub struct FpGrowthRun<T> {
    pub tree: FpTree<T>,
    pub levels: FrequentLevels<T>,
    pub transactions: usize,
}

/// Frequent itemset mining over a prefix tree with recursive conditional
/// trees.
#[derive(Debug, Clone, Default)]
pub struct FpGrowth {
    config: MiningConfig,
}

impl FpGrowth {
    pub fn new(config: MiningConfig) -> Self {
        Self { config }
    }

    pub fn with_min_support(min_support: usize) -> Self {
        Self::new(MiningConfig::new(min_support))
    }

    pub fn config(&self) -> &MiningConfig {
        &self.config
    }

    /// Builds the global tree in two scans of `source`.
    pub fn build_tree<S: TransactionSource>(&self, source: &mut S) -> Result<(FpTree<S::Item>, usize)> {
        build_fp_tree(source, self.config.min_support)
    }

    pub fn run<S: TransactionSource>(&self, source: &mut S) -> Result<FpGrowthRun<S::Item>> {
        let (tree, transactions) = self.build_tree(source)?;
        let levels = self.mine_tree(&tree);
        info!(
            transactions,
            nodes = tree.node_count(),
            itemsets = levels.total_itemsets(),
            "fp-growth finished"
        );
        Ok(FpGrowthRun {
            tree,
            levels,
            transactions,
        })
    }

    /// Mines every frequent itemset held in `tree`.
    pub fn mine_tree<T: Item>(&self, tree: &FpTree<T>) -> FrequentLevels<T> {
        let mut levels = FrequentLevels::new();
        self.grow(tree, &[], &mut levels);
        levels
    }

    fn grow<T: Item>(&self, tree: &FpTree<T>, suffix: &[T], result: &mut FrequentLevels<T>) {
        let room = self
            .config
            .max_level
            .map_or(usize::MAX, |max| max.saturating_sub(suffix.len()));
        if room == 0 {
            return;
        }

        if tree.is_single_path() {
            let path = tree.single_path();
            for k in 1..=path.len().min(room) {
                generate_combinations_from_path(&path, k, suffix, result);
            }
            return;
        }

        let min_support = self.config.min_support;

        // Least frequent first.
        for item in tree.ranked_items().iter().rev() {
            let support = tree.item_support(item);
            if support < min_support {
                continue;
            }

            let mut pattern = suffix.to_vec();
            pattern.push(item.clone());
            result.record(Itemset::new(pattern.clone()), support);

            if room == 1 {
                continue;
            }

            let prefix_paths = tree.prefix_paths(item);
            if prefix_paths.is_empty() {
                continue;
            }

            let conditional = build_conditional_fp_tree(&prefix_paths, min_support);
            debug!(
                depth = pattern.len(),
                paths = prefix_paths.len(),
                nodes = conditional.node_count(),
                "conditional tree"
            );
            if !conditional.is_empty() {
                self.grow(&conditional, &pattern, result);
            }
        }
    }
}

impl FrequentItemsetMiner for FpGrowth {
    fn name(&self) -> &'static str {
        "fp-growth"
    }

    fn mine<S: TransactionSource>(&self, source: &mut S) -> Result<FrequentLevels<S::Item>> {
        self.run(source).map(|run| run.levels)
    }
}
