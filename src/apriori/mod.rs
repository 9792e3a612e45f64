// Apriori: level-wise candidate generation and test
//
// Level k candidates come from joining level k-1 with itself. A candidate is
// counted only when every one of its (k-1)-subsets is already frequent,
// since support can never grow as an itemset gets larger.

mod driver;
mod subsets;

pub use driver::{Apriori, AprioriRun, LevelSummary};
pub use subsets::{enumerate_subsets, has_infrequent_subset, join_frequent_itemsets};
