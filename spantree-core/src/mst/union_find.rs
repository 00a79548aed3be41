//! Union-find (disjoint set) used by the Kruskal MST construction.
//!
//! Elements are vertex positions in the canonical (sorted) vertex order,
//! stored in a flat arena with parent links as indices. The structure is
//! rebuilt fresh for every MST computation and never outlives one call.

/// Disjoint-set forest with path compression and union by rank.
///
/// Parent links always terminate at a representative whose parent is
/// itself. Rank bounds the height of a tree and only changes when two
/// representatives of equal rank are linked.
#[derive(Clone, Debug)]
pub(super) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates `n` singleton sets, one per element of the universe.
    pub(super) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Returns the representative of the set containing `node`.
    ///
    /// Every element visited on the way up is redirected to point at the
    /// representative, so repeated lookups on the same path are O(1).
    pub(super) fn find(&mut self, mut node: usize) -> usize {
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

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` when the two elements already share a
    /// representative, so callers can tell a structural merge from a
    /// no-op. The higher-ranked representative wins; on equal ranks the
    /// right representative absorbs the left and its rank grows by one.
    pub(super) fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }

        if self.rank[left_root] > self.rank[right_root] {
            self.parent[right_root] = left_root;
        } else {
            self.parent[left_root] = right_root;
            if self.rank[left_root] == self.rank[right_root] {
                self.rank[right_root] = self.rank[right_root].saturating_add(1);
            }
        }
        true
    }
}
