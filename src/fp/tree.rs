use std::collections::HashMap;

use crate::itemset::Item;

/// Index of a node in the tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct FpNode<T> {
    /// `None` only for the root.
    pub item: Option<T>,
    pub count: usize,
    pub parent: Option<NodeId>,
    /// In insertion order.
    pub children: Vec<NodeId>,
    /// Next node elsewhere in the tree holding the same item.
    pub next: Option<NodeId>,
}

/// Global frequency of an item plus the chain of nodes holding it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderEntry {
    pub count: usize,
    pub head: Option<NodeId>,
    pub tail: Option<NodeId>,
}

/// Prefix tree over frequency-ordered transactions.
///
/// Nodes live in an arena and refer to each other by [`NodeId`]. Slot 0 is
/// the root, which carries no item. Parent and chain links are plain
/// indices; the arena alone owns the nodes.
#[derive(Debug, Clone)]
pub struct FpTree<T> {
    nodes: Vec<FpNode<T>>,
    header_table: HashMap<T, HeaderEntry>,
    /// Frequent items by descending global count, ties in discovery order.
    ranked_items: Vec<T>,
}

impl<T> FpNode<T> {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: Vec::new(),
            next: None,
        }
    }

    pub fn new_item(item: T, count: usize, parent: NodeId) -> Self {
        Self {
            item: Some(item),
            count,
            parent: Some(parent),
            children: Vec::new(),
            next: None,
        }
    }
}

impl<T: Item> FpTree<T> {
    /// Empty tree whose header table holds `ranked` items and their counts.
    pub(crate) fn with_ranked_items(ranked: Vec<(T, usize)>) -> Self {
        let mut header_table = HashMap::with_capacity(ranked.len());
        let mut ranked_items = Vec::with_capacity(ranked.len());
        for (item, count) in ranked {
            header_table.insert(
                item.clone(),
                HeaderEntry {
                    count,
                    ..HeaderEntry::default()
                },
            );
            ranked_items.push(item);
        }

        Self {
            nodes: vec![FpNode::new_root()],
            header_table,
            ranked_items,
        }
    }

    /// Inserts items that are already in rank order, adding `weight` to every
    /// node on the path.
    pub(crate) fn insert_ordered(&mut self, items: &[T], weight: usize) {
        let mut current = NodeId::ROOT;

        for item in items {
            if let Some(child) = self.find_child(current, item) {
                self.nodes[child.0].count += weight;
                current = child;
                continue;
            }

            let child = NodeId(self.nodes.len());
            self.nodes.push(FpNode::new_item(item.clone(), weight, current));
            self.nodes[current.0].children.push(child);

            let entry = self.header_table.entry(item.clone()).or_default();
            match entry.tail {
                Some(tail) => self.nodes[tail.0].next = Some(child),
                None => entry.head = Some(child),
            }
            entry.tail = Some(child);

            current = child;
        }
    }

    fn find_child(&self, parent: NodeId, item: &T) -> Option<NodeId> {
        self.nodes[parent.0]
            .children
            .iter()
            .copied()
            .find(|child| self.nodes[child.0].item.as_ref() == Some(item))
    }

    pub fn root(&self) -> &FpNode<T> {
        &self.nodes[NodeId::ROOT.0]
    }

    pub fn node(&self, id: NodeId) -> &FpNode<T> {
        &self.nodes[id.0]
    }

    /// Number of item-carrying nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.root().children.is_empty()
    }

    /// Frequent items by descending global count.
    pub fn ranked_items(&self) -> &[T] {
        &self.ranked_items
    }

    pub fn header_entry(&self, item: &T) -> Option<&HeaderEntry> {
        self.header_table.get(item)
    }

    /// Header entries in rank order.
    pub fn header(&self) -> impl Iterator<Item = (&T, &HeaderEntry)> {
        self.ranked_items
            .iter()
            .filter_map(|item| self.header_table.get(item).map(|entry| (item, entry)))
    }

    /// Walks the chain of nodes holding `item`.
    pub fn chain(&self, item: &T) -> Chain<'_, T> {
        Chain {
            tree: self,
            next: self.header_table.get(item).and_then(|entry| entry.head),
        }
    }

    /// Sum of node counts along the item's chain.
    pub fn item_support(&self, item: &T) -> usize {
        self.chain(item).map(|node| node.count).sum()
    }

    /// Conditional pattern base of `item`: for every node holding it, the
    /// items on the path from the root down to its parent, weighted by the
    /// node's count. Nodes hanging directly off the root contribute nothing.
    pub fn prefix_paths(&self, item: &T) -> Vec<(Vec<T>, usize)> {
        self.chain(item)
            .filter_map(|node| {
                let mut path = Vec::new();
                let mut current = node.parent;

                while let Some(id) = current {
                    let ancestor = &self.nodes[id.0];
                    if let Some(item) = &ancestor.item {
                        path.push(item.clone());
                    }
                    current = ancestor.parent;
                }

                path.reverse();
                (!path.is_empty()).then_some((path, node.count))
            })
            .collect()
    }

    pub fn is_single_path(&self) -> bool {
        let mut current = NodeId::ROOT;

        loop {
            match self.nodes[current.0].children.as_slice() {
                [] => return true,
                [only] => current = *only,
                _ => return false,
            }
        }
    }

    /// `(item, count)` pairs from the root down the first branch. Only
    /// meaningful when [`is_single_path`](Self::is_single_path) holds.
    pub fn single_path(&self) -> Vec<(T, usize)> {
        let mut path = Vec::new();
        let mut current = NodeId::ROOT;

        while let Some(&child) = self.nodes[current.0].children.first() {
            let node = &self.nodes[child.0];
            if let Some(item) = &node.item {
                path.push((item.clone(), node.count));
            }
            current = child;
        }
        path
    }
}

pub struct Chain<'a, T> {
    tree: &'a FpTree<T>,
    next: Option<NodeId>,
}

impl<'a, T> Iterator for Chain<'a, T> {
    type Item = &'a FpNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.tree.nodes[self.next?.0];
        self.next = node.next;
        Some(node)
    }
}
