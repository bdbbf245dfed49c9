//! Error types for the grafo kernel.
//!
//! Every kernel failure is a [`GraphError`]. Variants group into two broad
//! [`ErrorKind`]s: malformed input (non-square or asymmetric matrices, bad
//! edge lists) and vertex indices outside `[0, n)`.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Broad classification of a [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// The matrix or edge list does not describe a valid undirected graph.
    InvalidInput,
    /// A vertex index lies outside `[0, vertex_count)`.
    OutOfRange,
}

/// An error produced while building or analysing a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A matrix row does not have one entry per vertex.
    #[error("matrix row {row} has {actual} entries but the matrix has {expected} rows")]
    NotSquare {
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of rows, and therefore the required row length.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
    /// The matrix is not symmetric about its diagonal.
    #[error("matrix is not symmetric: w({row}, {column}) = {forward} but w({column}, {row}) = {backward}")]
    Asymmetric {
        /// Row of the first mismatching entry.
        row: usize,
        /// Column of the first mismatching entry.
        column: usize,
        /// Weight stored at `(row, column)`.
        forward: u32,
        /// Weight stored at `(column, row)`.
        backward: u32,
    },
    /// An edge list contained an edge from a vertex to itself.
    #[error("edge list contains a self-loop on vertex {vertex}")]
    SelfLoop {
        /// The vertex carrying the loop.
        vertex: usize,
    },
    /// An edge list contained an edge of weight zero.
    #[error("edge ({source_vertex}, {target}) has weight zero, which denotes a missing edge")]
    ZeroWeight {
        /// First endpoint as provided.
        source_vertex: usize,
        /// Second endpoint as provided.
        target: usize,
    },
    /// An edge list named the same vertex pair twice with different weights.
    #[error("edge ({source_vertex}, {target}) is given twice with weights {first} and {second}")]
    ConflictingEdge {
        /// First endpoint as provided.
        source_vertex: usize,
        /// Second endpoint as provided.
        target: usize,
        /// Weight recorded first.
        first: u32,
        /// Weight of the conflicting duplicate.
        second: u32,
    },
    /// A vertex index was outside the graph.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A matrix row does not have one entry per vertex.
        NotSquare => NotSquare { .. } => "GRAPH_NOT_SQUARE",
        /// The matrix is not symmetric about its diagonal.
        Asymmetric => Asymmetric { .. } => "GRAPH_ASYMMETRIC",
        /// An edge list contained a self-loop.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// An edge list contained a zero-weight edge.
        ZeroWeight => ZeroWeight { .. } => "GRAPH_ZERO_WEIGHT",
        /// An edge list contained conflicting duplicate edges.
        ConflictingEdge => ConflictingEdge { .. } => "GRAPH_CONFLICTING_EDGE",
        /// A vertex index was outside the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
    }
}

impl GraphError {
    /// Returns whether the error reports malformed input or a bad vertex index.
    ///
    /// # Examples
    /// ```
    /// use grafo_core::{ErrorKind, GraphError};
    ///
    /// let err = GraphError::VertexOutOfRange { vertex: 4, vertex_count: 3 };
    /// assert_eq!(err.kind(), ErrorKind::OutOfRange);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::VertexOutOfRange { .. } => ErrorKind::OutOfRange,
            Self::NotSquare { .. }
            | Self::Asymmetric { .. }
            | Self::SelfLoop { .. }
            | Self::ZeroWeight { .. }
            | Self::ConflictingEdge { .. } => ErrorKind::InvalidInput,
        }
    }
}

/// Convenient alias for results returned by the kernel.
pub type Result<T> = core::result::Result<T, GraphError>;
