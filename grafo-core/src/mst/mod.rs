//! Minimum spanning tree (MST) construction.
//!
//! Two independent builders share one output type:
//!
//! - [`kruskal`] sorts every edge by weight and rejects cycle-forming edges
//!   with a [`DisjointSet`]. Disconnected input yields a spanning forest.
//! - [`prim`] grows a tree from a start vertex through a binary min-heap of
//!   frontier edges. Disconnected input yields the start component's tree.
//!
//! Both results list edges in the order they were accepted, not sorted by
//! endpoint.

mod kruskal;
mod prim;
mod union_find;

use crate::Edge;

pub use self::kruskal::{KruskalObserver, PartitionView, kruskal, kruskal_with_observer};
pub use self::prim::prim;
pub use self::union_find::DisjointSet;

/// The output of a minimum spanning tree/forest computation.
///
/// When every vertex is reached the forest is a minimum spanning tree.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MinimumSpanningForest {
    edges: Vec<Edge>,
    total_weight: u64,
}

impl MinimumSpanningForest {
    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> u64 { self.total_weight }

    /// Returns the number of accepted edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when no edge was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns `true` when the edges span all `vertex_count` vertices, i.e.
    /// there are exactly `vertex_count - 1` of them.
    ///
    /// A single vertex is trivially spanned; the empty graph is not.
    #[must_use]
    pub fn spans(&self, vertex_count: usize) -> bool {
        vertex_count > 0 && self.edges.len() == vertex_count - 1
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
            total_weight: 0,
        }
    }

    fn accept(&mut self, edge: Edge) {
        self.total_weight += u64::from(edge.weight());
        self.edges.push(edge);
    }
}

#[cfg(test)]
mod property;
