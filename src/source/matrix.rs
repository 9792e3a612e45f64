use ndarray::ArrayView2;

use crate::error::Result;
use crate::itemset::Itemset;

use super::TransactionSource;

/// One-hot transaction matrix: each row is a transaction and every non-zero
/// column index is an item.
#[derive(Debug, Clone)]
pub struct MatrixSource<'a> {
    transactions: ArrayView2<'a, i32>,
    row: usize,
}

impl<'a> MatrixSource<'a> {
    pub fn new(transactions: ArrayView2<'a, i32>) -> Self {
        let row = transactions.nrows();
        Self { transactions, row }
    }

    pub fn num_transactions(&self) -> usize {
        self.transactions.nrows()
    }

    pub fn num_items(&self) -> usize {
        self.transactions.ncols()
    }
}

impl TransactionSource for MatrixSource<'_> {
    type Item = usize;

    fn open(&mut self) -> Result<()> {
        self.row = 0;
        Ok(())
    }

    fn is_done(&self) -> bool {
        self.row >= self.transactions.nrows()
    }

    fn next_transaction(&mut self) -> Result<Option<Itemset<usize>>> {
        if self.is_done() {
            return Ok(None);
        }

        let items: Vec<usize> = self
            .transactions
            .row(self.row)
            .iter()
            .enumerate()
            .filter(|&(_, &flag)| flag != 0)
            .map(|(item, _)| item)
            .collect();
        self.row += 1;

        Ok(Some(Itemset::from_sorted(items)))
    }

    fn close(&mut self) {
        self.row = self.transactions.nrows();
    }
}
