//! Text and JSON rendering of mining results.

use std::fmt::Display;

use serde::Serialize;

use crate::apriori::LevelSummary;
use crate::fp::FpTree;
use crate::itemset::{Item, Itemset};
use crate::levels::FrequentLevels;

/// One section per level listing each itemset and its support.
pub fn render_levels<T: Item + Display>(levels: &FrequentLevels<T>) -> String {
    let mut out = String::new();
    for level in levels.iter() {
        out.push_str(&format!("Frequent {}-itemsets ({})\n", level.itemset_size, level.len()));
        for (itemset, support) in level.iter() {
            out.push_str(&format!("{} : {}\n", itemset, support));
        }
        out.push_str("_____________________\n");
    }
    out
}

/// Candidate and frequent counts for each Apriori level.
pub fn render_summaries(summaries: &[LevelSummary]) -> String {
    summaries
        .iter()
        .map(|summary| {
            format!(
                "level {}: {} candidates, {} frequent\n",
                summary.level, summary.candidates, summary.frequent
            )
        })
        .collect()
}

/// Header table in rank order, one `item count` line per item.
pub fn render_header_table<T: Item + Display>(tree: &FpTree<T>) -> String {
    let mut out = String::from("Header table:\n");
    for (item, entry) in tree.header() {
        out.push_str(&format!("{} {}\n", item, entry.count));
    }
    out
}

/// Every item's node chain as `item:count -> item:count`.
pub fn render_chains<T: Item + Display>(tree: &FpTree<T>) -> String {
    let mut out = String::from("Tree:\n");
    for item in tree.ranked_items() {
        let links: Vec<String> = tree
            .chain(item)
            .map(|node| format!("{}:{}", item, node.count))
            .collect();
        out.push_str(&links.join(" -> "));
        out.push('\n');
    }
    out
}

#[derive(Debug, Serialize)]
struct JsonReport<'a, T> {
    transactions: usize,
    levels: Vec<JsonLevel<'a, T>>,
}

#[derive(Debug, Serialize)]
struct JsonLevel<'a, T> {
    level: usize,
    itemsets: Vec<JsonItemset<'a, T>>,
}

#[derive(Debug, Serialize)]
struct JsonItemset<'a, T> {
    items: &'a Itemset<T>,
    support: usize,
}

/// Serializes every level as a JSON document.
pub fn levels_to_json<T: Item + Serialize>(
    levels: &FrequentLevels<T>,
    transactions: usize,
) -> serde_json::Result<String> {
    let report = JsonReport {
        transactions,
        levels: levels
            .iter()
            .map(|level| JsonLevel {
                level: level.itemset_size,
                itemsets: level
                    .iter()
                    .map(|(items, support)| JsonItemset { items, support })
                    .collect(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}
