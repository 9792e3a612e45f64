//! Sequential transaction sources.
//!
//! Every mining phase reopens its source and drains it from the start, so a
//! source must be rewindable. A scan is never nested inside another scan.

mod file;
mod matrix;
mod memory;

pub use file::FileSource;
pub use matrix::MatrixSource;
pub use memory::MemorySource;

use crate::error::Result;
use crate::itemset::{Item, Itemset};

pub trait TransactionSource {
    type Item: Item;

    /// Rewinds the source for a fresh scan. Calling it again restarts.
    fn open(&mut self) -> Result<()>;

    /// True once every transaction of the current scan has been returned.
    fn is_done(&self) -> bool;

    /// Next transaction of the current scan, `None` once exhausted.
    fn next_transaction(&mut self) -> Result<Option<Itemset<Self::Item>>>;

    /// Releases scan-local resources. Safe to call at any point.
    fn close(&mut self);

    /// Opens the source, hands every transaction to `visit` and closes it
    /// again, even when reading fails. Returns the number of transactions.
    fn scan<F>(&mut self, mut visit: F) -> Result<usize>
    where
        F: FnMut(Itemset<Self::Item>),
    {
        self.open()?;

        let mut scanned = 0;
        let outcome = loop {
            if self.is_done() {
                break Ok(scanned);
            }
            match self.next_transaction() {
                Ok(Some(transaction)) => {
                    visit(transaction);
                    scanned += 1;
                }
                Ok(None) => break Ok(scanned),
                Err(e) => break Err(e),
            }
        };

        self.close();
        tracing::trace!(transactions = scanned, "scan finished");
        outcome
    }
}
