//! Disjoint-set union over node ids.

use std::collections::HashMap;

use crate::graph::NodeId;

/// Union-find with iterative path compression and union by size.
///
/// Ids never passed to [`make_set`](Self::make_set) are treated as
/// singletons and registered on first use.
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    parent: HashMap<NodeId, NodeId>,
    size: HashMap<NodeId, usize>,
    sets: usize,
}

impl DisjointSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One singleton set per id.
    pub fn from_ids(ids: impl IntoIterator<Item = NodeId>) -> Self {
        let mut dsu = Self::new();
        for id in ids {
            dsu.make_set(id);
        }
        dsu
    }

    /// Register `id` as its own set. No-op if already present.
    pub fn make_set(&mut self, id: NodeId) {
        if !self.parent.contains_key(&id) {
            self.parent.insert(id, id);
            self.size.insert(id, 1);
            self.sets += 1;
        }
    }

    /// Representative of the set containing `id`.
    pub fn find(&mut self, id: NodeId) -> NodeId {
        self.make_set(id);

        let mut root = id;
        while let Some(&parent) = self.parent.get(&root) {
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut node = id;
        while node != root {
            let next = self.parent.insert(node, root).unwrap_or(root);
            node = next;
        }

        root
    }

    /// Merge the sets of `a` and `b`; the smaller set is attached under the
    /// larger one. Returns false if they were already joined.
    pub fn union(&mut self, a: NodeId, b: NodeId) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }

        let sa = self.set_size(ra);
        let sb = self.set_size(rb);
        let (big, small) = if sa >= sb { (ra, rb) } else { (rb, ra) };

        self.parent.insert(small, big);
        self.size.insert(big, sa + sb);
        self.size.remove(&small);
        self.sets -= 1;
        true
    }

    pub fn connected(&mut self, a: NodeId, b: NodeId) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of disjoint sets.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Number of registered ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn set_size(&self, root: NodeId) -> usize {
        self.size.get(&root).copied().unwrap_or(1)
    }
}
