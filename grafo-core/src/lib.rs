//! Grafo core library.
//!
//! Analyses a weighted undirected [`Graph`] built from an adjacency matrix:
//!
//! - minimum spanning trees with [`kruskal`] (spanning forest over every
//!   component) and [`prim`] (tree over the start vertex's component);
//! - [`breadth_first`] traversal with its discovery tree;
//! - [`connected_components`] and [`is_connected`];
//! - [`bipartition`], returning a two-colouring or an odd-cycle witness.
//!
//! Vertices are zero-based throughout. No analysis mutates the graph, so one
//! `&Graph` may feed any number of analyses, including across threads.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod bipartite;
mod error;
mod graph;
mod mst;
mod traversal;

#[cfg(test)]
mod test_utils;

pub use crate::{
    bipartite::{Bipartition, OddCycle, Side, TwoColouring, bipartition},
    error::{ErrorKind, GraphError, GraphErrorCode, Result},
    graph::{Edge, Graph},
    mst::{
        DisjointSet, KruskalObserver, MinimumSpanningForest, PartitionView, kruskal,
        kruskal_with_observer, prim,
    },
    traversal::{Components, Traversal, breadth_first, connected_components, is_connected},
};
