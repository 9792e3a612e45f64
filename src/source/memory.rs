use crate::error::Result;
use crate::itemset::{Item, Itemset};

use super::TransactionSource;

/// Transactions held in memory.
#[derive(Debug, Clone)]
pub struct MemorySource<T> {
    transactions: Vec<Itemset<T>>,
    cursor: usize,
}

impl<T: Item> MemorySource<T> {
    pub fn new(transactions: Vec<Itemset<T>>) -> Self {
        Self {
            transactions,
            cursor: 0,
        }
    }

    /// Builds a source from raw item lists. Duplicates within a list collapse.
    pub fn from_transactions<I, J>(transactions: I) -> Self
    where
        I: IntoIterator<Item = J>,
        J: IntoIterator<Item = T>,
    {
        Self::new(
            transactions
                .into_iter()
                .map(|items| items.into_iter().collect())
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn transactions(&self) -> &[Itemset<T>] {
        &self.transactions
    }
}

impl<T: Item> TransactionSource for MemorySource<T> {
    type Item = T;

    fn open(&mut self) -> Result<()> {
        self.cursor = 0;
        Ok(())
    }

    fn is_done(&self) -> bool {
        self.cursor >= self.transactions.len()
    }

    fn next_transaction(&mut self) -> Result<Option<Itemset<T>>> {
        let next = self.transactions.get(self.cursor).cloned();
        if next.is_some() {
            self.cursor += 1;
        }
        Ok(next)
    }

    fn close(&mut self) {
        self.cursor = self.transactions.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_rewinds() {
        let mut source = MemorySource::from_transactions(vec![vec![3, 1, 3], vec![2]]);
        source.open().unwrap();
        assert_eq!(source.next_transaction().unwrap().unwrap().as_slice(), &[1, 3]);

        source.open().unwrap();
        assert_eq!(source.next_transaction().unwrap().unwrap().as_slice(), &[1, 3]);
        assert_eq!(source.next_transaction().unwrap().unwrap().as_slice(), &[2]);
        assert!(source.is_done());
        assert!(source.next_transaction().unwrap().is_none());
    }

    #[test]
    fn test_close_before_exhaustion() {
        let mut source = MemorySource::from_transactions(vec![vec!['x'], vec!['y']]);
        source.open().unwrap();
        source.next_transaction().unwrap();
        source.close();
        assert!(source.is_done());
    }
}
