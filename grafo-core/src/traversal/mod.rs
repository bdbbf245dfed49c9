//! Breadth-first traversal and the analyses built on it.
//!
//! [`breadth_first`] records the visitation order, the discovery parent of
//! every reached vertex and the resulting spanning tree.
//! [`connected_components`] and [`is_connected`] repeat the same sweep from
//! every vertex not yet reached.

mod bfs;
mod components;

pub use self::bfs::{Traversal, breadth_first};
pub(crate) use self::bfs::breadth_first_forest;
pub use self::components::{Components, connected_components, is_connected};

#[cfg(test)]
mod property;
