//! Sequential Kruskal over a dense [`Graph`].

use tracing::{debug, instrument};

use crate::{Edge, Graph};

use super::{DisjointSet, MinimumSpanningForest};

/// Receives a callback after every union Kruskal performs.
///
/// Any `FnMut(&Edge, &PartitionView<'_>)` closure is an observer.
pub trait KruskalObserver {
    /// Called once per accepted edge, after its endpoints' sets are merged.
    fn on_union(&mut self, edge: &Edge, partition: &PartitionView<'_>);
}

impl<F> KruskalObserver for F
where
    F: FnMut(&Edge, &PartitionView<'_>),
{
    fn on_union(&mut self, edge: &Edge, partition: &PartitionView<'_>) {
        self(edge, partition);
    }
}

/// Read-only view of Kruskal's union-find state handed to observers.
#[derive(Clone, Copy, Debug)]
pub struct PartitionView<'a> {
    sets: &'a DisjointSet,
}

impl PartitionView<'_> {
    /// Returns the number of sets in the current partition.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets.set_count()
    }

    /// Returns `true` when `left` and `right` are already connected.
    ///
    /// # Panics
    /// Panics if either vertex is outside the graph.
    #[must_use]
    pub fn connected(&self, left: usize, right: usize) -> bool {
        self.sets.root(left) == self.sets.root(right)
    }

    /// Returns the current partition, each set ascending, ordered by smallest
    /// member. Computed on demand.
    #[must_use]
    pub fn sets(&self) -> Vec<Vec<usize>> {
        self.sets.partition()
    }
}

/// Computes a minimum spanning forest with Kruskal's algorithm.
///
/// Edges are sorted by weight with a stable sort, so equal weights keep their
/// `(u, v)` scan order. Every edge is examined even after a spanning tree is
/// complete.
///
/// # Examples
/// ```
/// use grafo_core::{Edge, Graph, kruskal};
///
/// let graph = Graph::from_edges(3, [(0, 1, 1), (1, 2, 2), (0, 2, 3)])?;
/// let forest = kruskal(&graph);
/// assert_eq!(forest.edges(), &[Edge::new(0, 1, 1), Edge::new(1, 2, 2)]);
/// assert_eq!(forest.total_weight(), 3);
/// # Ok::<(), grafo_core::GraphError>(())
/// ```
#[must_use]
pub fn kruskal(graph: &Graph) -> MinimumSpanningForest {
    kruskal_with_observer(graph, |_: &Edge, _: &PartitionView<'_>| {})
}

/// Computes a minimum spanning forest, reporting every union to `observer`.
///
/// # Examples
/// ```
/// use grafo_core::{Edge, Graph, PartitionView, kruskal_with_observer};
///
/// let graph = Graph::from_edges(4, [(0, 1, 5), (2, 3, 7)])?;
/// let mut snapshots = Vec::new();
/// let forest = kruskal_with_observer(&graph, |_: &Edge, view: &PartitionView<'_>| {
///     snapshots.push(view.sets());
/// });
/// assert_eq!(forest.total_weight(), 12);
/// assert_eq!(snapshots.last(), Some(&vec![vec![0, 1], vec![2, 3]]));
/// # Ok::<(), grafo_core::GraphError>(())
/// ```
#[instrument(
    name = "grafo.kruskal",
    skip(graph, observer),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn kruskal_with_observer<O>(graph: &Graph, mut observer: O) -> MinimumSpanningForest
where
    O: KruskalObserver,
{
    let vertex_count = graph.vertex_count();
    let mut candidates: Vec<Edge> = graph.edges().collect();
    candidates.sort_by_key(Edge::weight);

    let mut sets = DisjointSet::new(vertex_count);
    let mut forest = MinimumSpanningForest::with_capacity(vertex_count.saturating_sub(1));

    for edge in candidates {
        let source_root = sets.find(edge.source());
        let target_root = sets.find(edge.target());
        if source_root == target_root {
            continue;
        }

        sets.union(source_root, target_root);
        forest.accept(edge);
        debug!(
            source = edge.source(),
            target = edge.target(),
            weight = edge.weight(),
            sets = sets.set_count(),
            "accepted edge"
        );
        observer.on_union(&edge, &PartitionView { sets: &sets });
    }

    debug!(
        accepted = forest.len(),
        total_weight = forest.total_weight(),
        "kruskal completed"
    );
    forest
}
