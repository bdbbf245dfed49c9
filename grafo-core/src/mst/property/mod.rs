//! Property-based tests for Kruskal and Prim.
//!
//! Verifies both builders against an array-scan oracle, validates structural
//! invariants (acyclicity, edge count, edge provenance) and checks that
//! concurrent read-only analyses of one shared graph agree with a sequential
//! baseline across every generated topology.

mod equivalence;
mod structural;
