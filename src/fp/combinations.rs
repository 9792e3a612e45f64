use crate::itemset::{Item, Itemset};
use crate::levels::FrequentLevels;

/// Records every size-`k` combination of `path` joined with `suffix`.
///
/// On a single path each item occurs once, so a combination's support is the
/// smallest count among its nodes.
pub fn generate_combinations_from_path<T: Item>(
    path: &[(T, usize)],
    k: usize,
    suffix: &[T],
    result: &mut FrequentLevels<T>,
) {
    if k == 0 || k > path.len() {
        return;
    }

    let mut current = Vec::with_capacity(k);
    generate_comb_recursive(path, k, 0, usize::MAX, &mut current, suffix, result);
}

fn generate_comb_recursive<T: Item>(
    path: &[(T, usize)],
    k: usize,
    start: usize,
    support: usize,
    current: &mut Vec<usize>,
    suffix: &[T],
    result: &mut FrequentLevels<T>,
) {
    if current.len() == k {
        let mut pattern = Vec::with_capacity(suffix.len() + k);
        pattern.extend_from_slice(suffix);
        pattern.extend(current.iter().map(|&idx| path[idx].0.clone()));
        result.record(Itemset::new(pattern), support);
        return;
    }

    for i in start..path.len() {
        current.push(i);
        generate_comb_recursive(path, k, i + 1, support.min(path[i].1), current, suffix, result);
        current.pop();
    }
}
