//! Connected-component enumeration.

use tracing::{debug, instrument};

use crate::Graph;

use super::bfs::breadth_first_forest;

/// The connected components of a graph.
///
/// Components are listed in discovery order (by their smallest vertex, since
/// sweeps start from ascending indices); members of each component ascend.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Components {
    components: Vec<Vec<usize>>,
    membership: Vec<usize>,
}

impl Components {
    /// Returns every component as an ascending list of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn components(&self) -> &[Vec<usize>] { &self.components }

    /// Returns the number of components.
    #[must_use]
    pub fn count(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` when there is exactly one component.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.components.len() == 1
    }

    /// Returns the index of the component containing `vertex`, or `None`
    /// when `vertex` is not in the graph.
    #[must_use]
    pub fn component_of(&self, vertex: usize) -> Option<usize> {
        self.membership.get(vertex).copied()
    }
}

/// Enumerates the connected components of `graph`.
///
/// # Examples
/// ```
/// use grafo_core::{Graph, connected_components};
///
/// let graph = Graph::from_edges(5, [(3, 1, 2), (0, 4, 1)])?;
/// let components = connected_components(&graph);
/// assert_eq!(components.components(), &[vec![0, 4], vec![1, 3], vec![2]]);
/// assert_eq!(components.component_of(3), Some(1));
/// assert!(!components.is_connected());
/// # Ok::<(), grafo_core::GraphError>(())
/// ```
#[must_use]
#[instrument(name = "grafo.components", skip(graph), fields(vertices = graph.vertex_count()))]
pub fn connected_components(graph: &Graph) -> Components {
    let (forest, passes) = breadth_first_forest(graph);
    let mut membership = vec![0; graph.vertex_count()];
    let components: Vec<Vec<usize>> = passes
        .into_iter()
        .enumerate()
        .map(|(index, pass)| {
            let mut members = forest.order()[pass].to_vec();
            members.sort_unstable();
            for &vertex in &members {
                membership[vertex] = index;
            }
            members
        })
        .collect();
    debug!(components = components.len(), "components enumerated");
    Components {
        components,
        membership,
    }
}

/// Returns `true` when `graph` has exactly one connected component.
///
/// The empty graph has no components and is therefore not connected.
#[must_use]
pub fn is_connected(graph: &Graph) -> bool {
    connected_components(graph).is_connected()
}
