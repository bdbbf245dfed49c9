//! Union-find (disjoint set union) used by Kruskal's algorithm.
//!
//! `find` compresses paths iteratively: a first pass locates the
//! representative, a second pass repoints every visited node directly at it.
//! `union` links by rank.

/// Partition of `0..len` into disjoint sets.
///
/// # Examples
/// ```
/// use grafo_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1));
/// assert!(sets.union(2, 3));
/// assert!(!sets.union(1, 0));
/// assert_eq!(sets.set_count(), 2);
/// assert_eq!(sets.partition(), vec![vec![0, 1], vec![2, 3]]);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    set_count: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            set_count: len,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the structure holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub fn set_count(&self) -> usize { self.set_count }

    /// Returns the representative of `node`'s set, compressing the path so
    /// every node visited points straight at the representative.
    ///
    /// # Panics
    /// Panics if `node >= self.len()`.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Returns the representative of `node`'s set without modifying the
    /// structure.
    ///
    /// # Panics
    /// Panics if `node >= self.len()`.
    #[must_use]
    pub fn root(&self, mut node: usize) -> usize {
        while self.parent[node] != node {
            node = self.parent[node];
        }
        node
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// The lower-rank tree is attached beneath the higher-rank
    /// representative. On equal rank, `right`'s representative goes under
    /// `left`'s and `left`'s rank grows by one. Returns `false` when both
    /// already share a set, which Kruskal treats as a would-be cycle.
    ///
    /// # Panics
    /// Panics if either element is out of range.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.set_count -= 1;
        true
    }

    /// Returns the current sets, each in ascending order, ordered by their
    /// smallest member.
    #[must_use]
    pub fn partition(&self) -> Vec<Vec<usize>> {
        let mut slot_of_root = vec![usize::MAX; self.len()];
        let mut sets: Vec<Vec<usize>> = Vec::with_capacity(self.set_count);
        for node in 0..self.len() {
            let root = self.root(node);
            if slot_of_root[root] == usize::MAX {
                slot_of_root[root] = sets.len();
                sets.push(Vec::new());
            }
            sets[slot_of_root[root]].push(node);
        }
        sets
    }

    #[cfg(test)]
    pub(super) fn rank_of(&self, node: usize) -> u8 {
        self.rank[node]
    }

    #[cfg(test)]
    pub(super) fn parent_of(&self, node: usize) -> usize {
        self.parent[node]
    }
}
