use crate::error::Result;
use crate::levels::FrequentLevels;
use crate::source::TransactionSource;

/// A frequent itemset mining algorithm.
///
/// Implementations differ in how they search, never in what they find: for
/// the same transactions and a threshold of at least one, every miner
/// returns the same itemsets with the same supports.
pub trait FrequentItemsetMiner {
    fn name(&self) -> &'static str;

    fn mine<S: TransactionSource>(&self, source: &mut S) -> Result<FrequentLevels<S::Item>>;
}
