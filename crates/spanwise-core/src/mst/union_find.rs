//! Disjoint-set forest over vertex indices.

/// Union-find with path compression and union by rank.
///
/// Lives for a single Kruskal run: every index starts as its own singleton
/// set and the structure is dropped once the tree is built.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    /// Creates `n` singleton sets `{0}, {1}, ..., {n-1}`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true when there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the root of `x`'s set, pointing every node on the walked path
    /// directly at that root.
    ///
    /// Iterative, so deep chains cannot overflow the stack.
    ///
    /// # Panics
    ///
    /// Panics if `x >= self.len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merges the sets of `x` and `y`.
    ///
    /// The lower-rank root goes under the higher-rank root; on a tie `x`'s
    /// root wins and its rank grows by one. Returns false if `x` and `y` were
    /// already in the same set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        true
    }

    /// Returns true if `x` and `y` are in the same set.
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Rank of `x` (an upper bound on its subtree height).
    #[must_use]
    pub fn rank(&self, x: usize) -> u32 {
        self.rank[x]
    }

    /// Direct parent pointer of `x`, without compression.
    #[must_use]
    pub fn parent(&self, x: usize) -> usize {
        self.parent[x]
    }
}
