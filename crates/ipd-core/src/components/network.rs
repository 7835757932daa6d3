//! Social Network
//!
//! A symmetric, irreflexive adjacency relation over agent indices. Neighbor
//! sets are ordered so every scan visits neighbors in ascending index order.

use rand::rngs::SmallRng;
use rand::Rng;
use std::collections::BTreeSet;

use crate::error::{check_probability, SimError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Network {
    adjacency: Vec<BTreeSet<usize>>,
}

impl Network {
    /// A network of `size` nodes with no edges.
    pub fn empty(size: usize) -> Self {
        Self {
            adjacency: vec![BTreeSet::new(); size],
        }
    }

    /// Random graph: each unordered pair `i < j` is connected independently
    /// with probability `connection_probability`.
    ///
    /// Pairs are drawn in ascending `i`, then ascending `j`.
    pub fn build(
        size: usize,
        connection_probability: f64,
        rng: &mut SmallRng,
    ) -> Result<Self, SimError> {
        check_probability("connection_probability", connection_probability)?;

        let mut network = Self::empty(size);
        for i in 0..size {
            for j in (i + 1)..size {
                if rng.gen_bool(connection_probability) {
                    network.connect(i, j);
                }
            }
        }
        Ok(network)
    }

    /// Adds the symmetric edge `i <-> j`.
    ///
    /// Returns `false` without changing anything for self-loops, out-of-range
    /// indices and edges that already exist.
    pub fn connect(&mut self, i: usize, j: usize) -> bool {
        if i == j || i >= self.len() || j >= self.len() {
            return false;
        }
        let added = self.adjacency[i].insert(j);
        self.adjacency[j].insert(i);
        added
    }

    pub fn are_connected(&self, i: usize, j: usize) -> bool {
        self.adjacency.get(i).is_some_and(|n| n.contains(&j))
    }

    /// Neighbors of `i` in ascending index order.
    pub fn neighbors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency
            .get(i)
            .into_iter()
            .flat_map(|n| n.iter().copied())
    }

    pub fn degree(&self, i: usize) -> usize {
        self.adjacency.get(i).map_or(0, BTreeSet::len)
    }

    /// Every edge once, as `(i, j)` with `i < j`, ascending `i` then `j`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(i, n)| {
            n.range((i + 1)..).map(move |&j| (i, j))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Checks the symmetry and irreflexivity invariants.
    pub fn is_symmetric(&self) -> bool {
        self.adjacency.iter().enumerate().all(|(i, n)| {
            !n.contains(&i) && n.iter().all(|&j| self.are_connected(j, i))
        })
    }
}
