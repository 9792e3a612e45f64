use std::collections::BTreeMap;

use crate::itemset::{Item, Itemset};

/// Itemsets mapped to their support counts, iterated in canonical order.
pub type ItemsetTable<T> = BTreeMap<Itemset<T>, usize>;

/// The frequent itemsets of a single size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequentLevel<T> {
    pub itemset_size: usize,
    table: ItemsetTable<T>,
}

/// Frequent itemsets grouped by size, from level 1 upward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequentLevels<T> {
    levels: BTreeMap<usize, FrequentLevel<T>>,
}

impl<T: Item> FrequentLevel<T> {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            itemset_size,
            table: ItemsetTable::new(),
        }
    }

    pub fn from_table(itemset_size: usize, table: ItemsetTable<T>) -> Self {
        debug_assert!(table.keys().all(|set| set.len() == itemset_size));
        Self { itemset_size, table }
    }

    pub fn add_itemset_with_support(&mut self, itemset: Itemset<T>, support: usize) {
        debug_assert_eq!(itemset.len(), self.itemset_size);
        self.table.insert(itemset, support);
    }

    pub fn support(&self, itemset: &Itemset<T>) -> Option<usize> {
        self.table.get(itemset).copied()
    }

    pub fn contains(&self, itemset: &Itemset<T>) -> bool {
        self.table.contains_key(itemset)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Itemset<T>, usize)> {
        self.table.iter().map(|(set, &support)| (set, support))
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &Itemset<T>> {
        self.table.keys()
    }

    pub fn table(&self) -> &ItemsetTable<T> {
        &self.table
    }
}

impl<T: Item> Default for FrequentLevels<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Item> FrequentLevels<T> {
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Stores `level` under its own itemset size, replacing any previous one.
    pub fn insert_level(&mut self, level: FrequentLevel<T>) {
        self.levels.insert(level.itemset_size, level);
    }

    /// Files `itemset` under the level matching its size.
    pub fn record(&mut self, itemset: Itemset<T>, support: usize) {
        let size = itemset.len();
        if size == 0 {
            return;
        }
        self.levels
            .entry(size)
            .or_insert_with(|| FrequentLevel::new(size))
            .add_itemset_with_support(itemset, support);
    }

    pub fn level(&self, k: usize) -> Option<&FrequentLevel<T>> {
        self.levels.get(&k)
    }

    pub fn support(&self, itemset: &Itemset<T>) -> Option<usize> {
        self.levels.get(&itemset.len())?.support(itemset)
    }

    /// Highest level holding at least one itemset.
    pub fn max_level(&self) -> usize {
        self.levels
            .iter()
            .rev()
            .find(|(_, level)| !level.is_empty())
            .map_or(0, |(&k, _)| k)
    }

    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    pub fn total_itemsets(&self) -> usize {
        self.levels.values().map(FrequentLevel::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_itemsets() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrequentLevel<T>> {
        self.levels.values()
    }

    /// Copy without the itemsets that no transaction contains.
    pub fn supported(&self) -> Self {
        let mut supported = Self::new();
        for (itemset, support) in self.iter_all().filter(|&(_, support)| support > 0) {
            supported.record(itemset.clone(), support);
        }
        supported
    }

    /// Every `(itemset, support)` pair, level by level.
    pub fn iter_all(&self) -> impl Iterator<Item = (&Itemset<T>, usize)> {
        self.levels.values().flat_map(|level| level.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequent_level() {
        let mut level = FrequentLevel::new(2);
        level.add_itemset_with_support(Itemset::new(vec![1, 2]), 4);
        level.add_itemset_with_support(Itemset::new(vec![3, 4]), 2);

        assert_eq!(level.len(), 2);
        assert_eq!(level.itemset_size, 2);
        assert_eq!(level.support(&Itemset::new(vec![2, 1])), Some(4));
        assert!(!level.contains(&Itemset::new(vec![1, 3])));

        let itemsets: Vec<_> = level.iter_itemsets().collect();
        assert_eq!(itemsets[0].as_slice(), &[1, 2]);
    }

    #[test]
    fn test_record_files_by_size() {
        let mut levels = FrequentLevels::new();
        levels.record(Itemset::new(vec!['a']), 3);
        levels.record(Itemset::new(vec!['a', 'b']), 2);
        levels.record(Itemset::new(vec!['b']), 5);
        levels.record(Itemset::empty(), 9);

        assert_eq!(levels.num_levels(), 2);
        assert_eq!(levels.level(1).map(FrequentLevel::len), Some(2));
        assert_eq!(levels.support(&Itemset::new(vec!['b', 'a'])), Some(2));
        assert_eq!(levels.total_itemsets(), 3);
        assert_eq!(levels.max_level(), 2);
    }

    #[test]
    fn test_supported_drops_zero_support() {
        let mut levels = FrequentLevels::new();
        levels.record(Itemset::new(vec![1]), 1);
        levels.record(Itemset::new(vec![2]), 1);
        levels.record(Itemset::new(vec![1, 2]), 0);

        let supported = levels.supported();
        assert_eq!(supported.num_levels(), 1);
        assert_eq!(supported.total_itemsets(), 2);
        assert_eq!(supported.support(&Itemset::new(vec![1, 2])), None);
    }

    #[test]
    fn test_empty_levels() {
        let levels: FrequentLevels<u32> = FrequentLevels::new();
        assert!(levels.is_empty());
        assert_eq!(levels.max_level(), 0);
        assert_eq!(levels.support(&Itemset::new(vec![1])), None);
    }
}
