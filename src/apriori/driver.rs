use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::MiningConfig;
use crate::error::Result;
use crate::itemset::{Item, Itemset};
use crate::levels::{FrequentLevel, FrequentLevels, ItemsetTable};
use crate::miner::FrequentItemsetMiner;
use crate::source::TransactionSource;

use super::subsets::{enumerate_subsets, join_frequent_itemsets};

/// Candidate and survivor counts for one level of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelSummary {
    pub level: usize,
    pub candidates: usize,
    pub frequent: usize,
}

/// Everything produced by one Apriori run.
#[derive(Debug, Clone)]
pub struct AprioriRun<T> {
    pub levels: FrequentLevels<T>,
    pub summaries: Vec<LevelSummary>,
    pub transactions: usize,
}

/// Level-wise candidate generation and counting.
#[derive(Debug, Clone, Default)]
pub struct Apriori {
    config: MiningConfig,
}

impl Apriori {
    pub fn new(config: MiningConfig) -> Self {
        Self { config }
    }

    pub fn with_min_support(min_support: usize) -> Self {
        Self::new(MiningConfig::new(min_support))
    }

    pub fn config(&self) -> &MiningConfig {
        &self.config
    }

    /// Runs the level loop over `source`, scanning it once per level.
    pub fn run<S: TransactionSource>(&self, source: &mut S) -> Result<AprioriRun<S::Item>> {
        let min_support = self.config.min_support;
        let mut run = AprioriRun {
            levels: FrequentLevels::new(),
            summaries: Vec::new(),
            transactions: 0,
        };

        let (transactions, first) = count_singletons(source)?;
        run.transactions = transactions;
        let distinct = first.len();
        let first = retain_frequent(first, min_support);
        info!(
            transactions,
            distinct,
            frequent = first.len(),
            "frequent 1-itemsets"
        );
        run.summaries.push(LevelSummary {
            level: 1,
            candidates: distinct,
            frequent: first.len(),
        });
        if first.is_empty() {
            return Ok(run);
        }
        run.levels.insert_level(FrequentLevel::from_table(1, first));

        let mut k = 2;
        while self.config.allows_level(k) {
            let Some(previous) = run.levels.level(k - 1) else {
                break;
            };
            let mut candidates = join_frequent_itemsets(previous);
            let generated = candidates.len();
            debug!(level = k, candidates = generated, "generated candidates");

            if candidates.is_empty() {
                run.summaries.push(LevelSummary {
                    level: k,
                    candidates: 0,
                    frequent: 0,
                });
                break;
            }

            count_candidates(source, k, &mut candidates)?;
            let frequent = retain_frequent(candidates, min_support);
            info!(level = k, candidates = generated, frequent = frequent.len(), "counted level");
            run.summaries.push(LevelSummary {
                level: k,
                candidates: generated,
                frequent: frequent.len(),
            });

            if frequent.is_empty() {
                break;
            }
            run.levels.insert_level(FrequentLevel::from_table(k, frequent));
            k += 1;
        }

        Ok(run)
    }
}

impl FrequentItemsetMiner for Apriori {
    fn name(&self) -> &'static str {
        "apriori"
    }

    fn mine<S: TransactionSource>(&self, source: &mut S) -> Result<FrequentLevels<S::Item>> {
        self.run(source).map(|run| run.levels)
    }
}

/// Tallies every singleton in one scan. Returns the transaction count too.
fn count_singletons<S: TransactionSource>(source: &mut S) -> Result<(usize, ItemsetTable<S::Item>)> {
    let mut counts = ItemsetTable::new();
    let transactions = source.scan(|transaction| {
        for item in &transaction {
            *counts.entry(Itemset::singleton(item.clone())).or_insert(0) += 1;
        }
    })?;
    Ok((transactions, counts))
}

/// Adds one to every candidate for each transaction containing it.
///
/// Items that no candidate uses are dropped before the size-`k` subsets are
/// enumerated, which keeps the enumeration small without changing counts.
fn count_candidates<S: TransactionSource>(
    source: &mut S,
    k: usize,
    candidates: &mut ItemsetTable<S::Item>,
) -> Result<()> {
    let live: HashSet<S::Item> = candidates
        .keys()
        .flat_map(|candidate| candidate.iter().cloned())
        .collect();

    source.scan(|transaction| {
        let narrowed = transaction.retain_items(|item| live.contains(item));
        for subset in enumerate_subsets(k, &narrowed) {
            if let Some(count) = candidates.get_mut(&subset) {
                *count += 1;
            }
        }
    })?;
    Ok(())
}

fn retain_frequent<T: Item>(mut table: ItemsetTable<T>, min_support: usize) -> ItemsetTable<T> {
    table.retain(|_, count| *count >= min_support);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;

    fn worked_example() -> MemorySource<char> {
        MemorySource::from_transactions(vec![
            vec!['A', 'B', 'C'],
            vec!['A', 'B'],
            vec!['A', 'C'],
            vec!['A'],
            vec!['B', 'C'],
        ])
    }

    fn set(items: &[char]) -> Itemset<char> {
        Itemset::new(items.to_vec())
    }

    #[test]
    fn test_worked_example() {
        let run = Apriori::with_min_support(2).run(&mut worked_example()).unwrap();

        assert_eq!(run.transactions, 5);
        assert_eq!(run.levels.num_levels(), 2);
        assert_eq!(run.levels.support(&set(&['A'])), Some(4));
        assert_eq!(run.levels.support(&set(&['B'])), Some(3));
        assert_eq!(run.levels.support(&set(&['C'])), Some(3));
        assert_eq!(run.levels.support(&set(&['A', 'B'])), Some(2));
        assert_eq!(run.levels.support(&set(&['A', 'C'])), Some(2));
        assert_eq!(run.levels.support(&set(&['B', 'C'])), Some(2));
        assert!(run.levels.level(3).is_none());

        // ABC is generated but fails counting.
        assert_eq!(
            run.summaries.last(),
            Some(&LevelSummary {
                level: 3,
                candidates: 1,
                frequent: 0
            })
        );
    }

    #[test]
    fn test_threshold_above_transaction_count() {
        let run = Apriori::with_min_support(6).run(&mut worked_example()).unwrap();
        assert!(run.levels.is_empty());
        assert_eq!(run.summaries.len(), 1);
        assert_eq!(run.summaries[0].frequent, 0);
    }

    #[test]
    fn test_zero_threshold_keeps_unsupported_candidates() {
        let mut source = MemorySource::from_transactions(vec![vec![1, 2], vec![3]]);
        let run = Apriori::with_min_support(0).run(&mut source).unwrap();

        assert_eq!(run.levels.support(&Itemset::new(vec![1, 3])), Some(0));
        assert_eq!(run.levels.support(&Itemset::new(vec![1, 2, 3])), Some(0));
        assert_eq!(run.levels.max_level(), 3);
    }

    #[test]
    fn test_max_level_caps_search() {
        let config = MiningConfig::new(1).with_max_level(1);
        let run = Apriori::new(config).run(&mut worked_example()).unwrap();
        assert_eq!(run.levels.max_level(), 1);
        assert_eq!(run.summaries.len(), 1);
    }

    #[test]
    fn test_empty_source() {
        let mut source: MemorySource<u32> = MemorySource::new(Vec::new());
        let run = Apriori::with_min_support(1).run(&mut source).unwrap();
        assert_eq!(run.transactions, 0);
        assert!(run.levels.is_empty());
    }

    #[test]
    fn test_repeated_runs_match() {
        let apriori = Apriori::with_min_support(2);
        let mut source = worked_example();
        let first = apriori.run(&mut source).unwrap();
        let second = apriori.run(&mut source).unwrap();
        assert_eq!(first.levels, second.levels);
        assert_eq!(first.summaries, second.summaries);
    }
}
