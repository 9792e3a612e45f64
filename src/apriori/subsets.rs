use crate::itemset::{Item, Itemset};
use crate::levels::{FrequentLevel, ItemsetTable};

/// All size-`k` subsets of `itemset`, in canonical order.
///
/// Subsets are grown from singletons one element at a time. Two subsets of
/// the same size are joined only when everything but their last item
/// matches, and the join appends the second subset's last item. Because
/// the working list stays lexicographically sorted, the matching partners
/// of a subset are the ones directly after it, and no subset is produced
/// twice.
///
/// Returns an empty list when `k` is zero or larger than the itemset.
pub fn enumerate_subsets<T: Item>(k: usize, itemset: &Itemset<T>) -> Vec<Itemset<T>> {
    if k == 0 || k > itemset.len() {
        return Vec::new();
    }
    if k == itemset.len() {
        return vec![itemset.clone()];
    }

    let mut subsets: Vec<Itemset<T>> = itemset.iter().cloned().map(Itemset::singleton).collect();

    for _ in 1..k {
        let mut grown = Vec::new();
        for (i, first) in subsets.iter().enumerate() {
            for second in &subsets[i + 1..] {
                if !first.shares_prefix_with(second) {
                    break;
                }
                if let Some(last) = second.last() {
                    grown.push(first.extended_with(last.clone()));
                }
            }
        }
        subsets = grown;
    }

    subsets
}

/// True when some `(k-1)`-subset of `candidate` is missing from `previous`.
pub fn has_infrequent_subset<T: Item>(candidate: &Itemset<T>, previous: &FrequentLevel<T>) -> bool {
    enumerate_subsets(candidate.len().saturating_sub(1), candidate)
        .iter()
        .any(|subset| !previous.contains(subset))
}

/// Apriori-gen: joins the frequent `(k-1)`-itemsets into size-`k`
/// candidates, each starting at support zero.
///
/// Pairs are joined when they share their first `k-2` items. A candidate
/// survives only if all of its `(k-1)`-subsets are frequent.
pub fn join_frequent_itemsets<T: Item>(previous: &FrequentLevel<T>) -> ItemsetTable<T> {
    let itemsets: Vec<&Itemset<T>> = previous.iter_itemsets().collect();
    let mut candidates = ItemsetTable::new();

    for (i, first) in itemsets.iter().enumerate() {
        for second in &itemsets[i + 1..] {
            // Sorted order keeps itemsets with a common prefix adjacent.
            if !first.shares_prefix_with(second) {
                break;
            }
            let Some(last) = second.last() else {
                continue;
            };

            let candidate = first.extended_with(last.clone());
            if !has_infrequent_subset(&candidate, previous) {
                candidates.insert(candidate, 0);
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[char]) -> Itemset<char> {
        Itemset::new(items.to_vec())
    }

    fn level(size: usize, itemsets: &[&[char]]) -> FrequentLevel<char> {
        let mut level = FrequentLevel::new(size);
        for items in itemsets {
            level.add_itemset_with_support(set(items), 1);
        }
        level
    }

    #[test]
    fn test_enumerate_pairs() {
        let subsets = enumerate_subsets(2, &set(&['a', 'b', 'c', 'd']));
        let expected: Vec<_> = [
            ['a', 'b'],
            ['a', 'c'],
            ['a', 'd'],
            ['b', 'c'],
            ['b', 'd'],
            ['c', 'd'],
        ]
        .iter()
        .map(|pair| set(pair))
        .collect();
        assert_eq!(subsets, expected);
    }

    #[test]
    fn test_enumerate_triples_count() {
        let items: Vec<u32> = (0..6).collect();
        let subsets = enumerate_subsets(3, &Itemset::new(items));
        assert_eq!(subsets.len(), 20);
        assert!(subsets.windows(2).all(|w| w[0] < w[1]));
        assert!(subsets.iter().all(|s| s.len() == 3));
    }

    #[test]
    fn test_enumerate_edge_cases() {
        let abc = set(&['a', 'b', 'c']);
        assert!(enumerate_subsets(0, &abc).is_empty());
        assert!(enumerate_subsets(4, &abc).is_empty());
        assert_eq!(enumerate_subsets(3, &abc), vec![abc.clone()]);
        assert_eq!(enumerate_subsets(1, &abc).len(), 3);
        assert!(enumerate_subsets(1, &Itemset::<char>::empty()).is_empty());
    }

    #[test]
    fn test_join_singletons() {
        let previous = level(1, &[&['a'], &['b'], &['c']]);
        let candidates = join_frequent_itemsets(&previous);

        let keys: Vec<_> = candidates.keys().cloned().collect();
        assert_eq!(keys, vec![set(&['a', 'b']), set(&['a', 'c']), set(&['b', 'c'])]);
        assert!(candidates.values().all(|&support| support == 0));
    }

    #[test]
    fn test_join_requires_shared_prefix() {
        // {a,b} and {c,d} share nothing; only {a,b}+{a,c} can join.
        let previous = level(2, &[&['a', 'b'], &['a', 'c'], &['b', 'c'], &['c', 'd']]);
        let candidates = join_frequent_itemsets(&previous);

        let keys: Vec<_> = candidates.keys().cloned().collect();
        assert_eq!(keys, vec![set(&['a', 'b', 'c'])]);
    }

    #[test]
    fn test_join_prunes_infrequent_subsets() {
        // {a,b,c} needs {b,c}, which is missing.
        let previous = level(2, &[&['a', 'b'], &['a', 'c']]);
        assert!(join_frequent_itemsets(&previous).is_empty());
        assert!(has_infrequent_subset(&set(&['a', 'b', 'c']), &previous));
    }

    #[test]
    fn test_join_empty_level() {
        let previous: FrequentLevel<char> = FrequentLevel::new(3);
        assert!(join_frequent_itemsets(&previous).is_empty());
    }
}
