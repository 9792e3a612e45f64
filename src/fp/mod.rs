pub mod builder;
pub mod combinations;
pub mod mining;
pub mod tree;

pub use builder::{build_conditional_fp_tree, build_fp_tree};
pub use mining::{FpGrowth, FpGrowthRun};
pub use tree::{Chain, FpNode, FpTree, HeaderEntry, NodeId};
