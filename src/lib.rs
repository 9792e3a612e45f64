//! Frequent itemset mining.
//!
//! Two strategies find the same itemsets:
//!
//! - [`Apriori`] searches level by level, joining frequent `(k-1)`-itemsets
//!   into size-`k` candidates and counting them with one scan per level.
//! - [`FpGrowth`] compresses the transactions into a prefix tree in two
//!   scans and mines it through recursive conditional trees.
//!
//! Both read transactions through a [`TransactionSource`].
//!
//! # Example
//! ```
//! use basket::{Apriori, FpGrowth, FrequentItemsetMiner, Itemset, MemorySource};
//!
//! let mut source = MemorySource::from_transactions(vec![
//!     vec!["A", "B", "C"],
//!     vec!["A", "B"],
//!     vec!["A", "C"],
//!     vec!["A"],
//!     vec!["B", "C"],
//! ]);
//!
//! let levels = Apriori::with_min_support(2).mine(&mut source).unwrap();
//! assert_eq!(levels.support(&Itemset::new(vec!["A", "B"])), Some(2));
//! assert!(levels.level(3).is_none());
//!
//! let same = FpGrowth::with_min_support(2).mine(&mut source).unwrap();
//! assert_eq!(levels, same);
//! ```

pub mod apriori;
pub mod cli;
pub mod config;
pub mod error;
pub mod fp;
pub mod itemset;
pub mod levels;
pub mod miner;
pub mod report;
pub mod source;

pub use apriori::{Apriori, AprioriRun, LevelSummary};
pub use config::MiningConfig;
pub use error::{MiningError, Result};
pub use fp::{FpGrowth, FpGrowthRun, FpTree};
pub use itemset::{Item, Itemset};
pub use levels::{FrequentLevel, FrequentLevels, ItemsetTable};
pub use miner::FrequentItemsetMiner;
pub use source::{FileSource, MatrixSource, MemorySource, TransactionSource};
