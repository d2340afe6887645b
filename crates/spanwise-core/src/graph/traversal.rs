//! Breadth-first traversal, eccentricity and diameter.
//!
//! Scratch state (visited flags and hop distances) lives in a caller-owned
//! [`TraversalState`] indexed by vertex id, so a `Graph` is never mutated by a
//! traversal and two traversals never observe each other's marks.

use std::collections::VecDeque;

use crate::error::Result;

use super::store::Graph;

/// Per-vertex scratch buffers for one breadth-first traversal.
#[derive(Debug, Clone, Default)]
pub struct TraversalState {
    visited: Vec<bool>,
    distance: Vec<usize>,
}

impl TraversalState {
    /// Creates state sized for `vertex_count` vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            visited: vec![false; vertex_count],
            distance: vec![0; vertex_count],
        }
    }

    /// Clears all marks and resizes to `vertex_count`.
    pub fn reset(&mut self, vertex_count: usize) {
        self.visited.clear();
        self.visited.resize(vertex_count, false);
        self.distance.clear();
        self.distance.resize(vertex_count, 0);
    }

    /// Returns true if `v` was reached by the last traversal.
    #[must_use]
    pub fn is_visited(&self, v: usize) -> bool {
        self.visited.get(v).copied().unwrap_or(false)
    }

    /// Hop distance of `v` from the last start vertex, if reached.
    #[must_use]
    pub fn distance(&self, v: usize) -> Option<usize> {
        if self.is_visited(v) {
            self.distance.get(v).copied()
        } else {
            None
        }
    }

    /// Number of vertices reached by the last traversal, start included.
    #[must_use]
    pub fn reached(&self) -> usize {
        self.visited.iter().filter(|&&seen| seen).count()
    }
}

impl Graph {
    /// Breadth-first search from `start`, returning its eccentricity.
    ///
    /// `state` is reset first, then filled with the hop distance of every
    /// reached vertex. Vertices are explored in FIFO order and neighbours in
    /// id order. Unreachable vertices are ignored, so on a disconnected graph
    /// the result is the eccentricity within `start`'s component.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVertexId` if `start` is out of range.
    pub fn bfs_eccentricity(&self, start: usize, state: &mut TraversalState) -> Result<usize> {
        self.vertex(start)?;
        state.reset(self.vertex_count());

        let mut queue = VecDeque::new();
        let mut farthest = 0;

        state.visited[start] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let next_distance = state.distance[current] + 1;
            for &(neighbour, _) in self.neighbours(current)? {
                if state.visited[neighbour] {
                    continue;
                }
                state.visited[neighbour] = true;
                state.distance[neighbour] = next_distance;
                farthest = farthest.max(next_distance);
                queue.push_back(neighbour);
            }
        }

        Ok(farthest)
    }

    /// Eccentricity of `start` using a freshly allocated [`TraversalState`].
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVertexId` if `start` is out of range.
    pub fn eccentricity(&self, start: usize) -> Result<usize> {
        let mut state = TraversalState::new(self.vertex_count());
        self.bfs_eccentricity(start, &mut state)
    }

    /// Graph diameter: the largest eccentricity over all vertices.
    ///
    /// Runs one BFS per vertex, O(V·(V+E)). Returns 0 for graphs with fewer
    /// than two vertices.
    #[must_use]
    pub fn diameter(&self) -> usize {
        let mut state = TraversalState::new(self.vertex_count());
        let mut diameter = 0;

        for start in 0..self.vertex_count() {
            // start is always in range here
            if let Ok(eccentricity) = self.bfs_eccentricity(start, &mut state) {
                diameter = diameter.max(eccentricity);
            }
        }

        tracing::debug!(
            vertices = self.vertex_count(),
            edges = self.edge_count(),
            diameter,
            "computed diameter"
        );
        diameter
    }
}
