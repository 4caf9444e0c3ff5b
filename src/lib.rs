//! bmssp: O(m log^(2/3) n) single-source shortest paths
//!
//! This crate implements the Bounded Multi-Source Shortest Path (BMSSP)
//! algorithm from "Breaking the Sorting Barrier for Directed Single-Source
//! Shortest Paths" (Duan et al.). BMSSP computes single-source shortest
//! paths on directed graphs with non-negative real edge weights, replacing
//! a global priority queue with recursive level decomposition, bounded
//! batched frontiers (see [`data_structures::BatchHeap`]), and a
//! pivot-selection step ([`algorithm::find_pivots`]) that discards most of
//! each level's frontier before recursing.
//!
//! A classical binary-heap [`algorithm::dijkstra::Dijkstra`] is kept
//! alongside BMSSP: it is the correctness oracle the test suite checks
//! BMSSP against, and it is usable directly through the same
//! [`algorithm::ShortestPathResult`] shape.
//!
//! Language bindings, CLI glue, and graph file I/O are not part of this
//! crate; the graph is an in-process, read-only collaborator.

pub mod algorithm;
pub mod api;
pub mod data_structures;
pub mod graph;

pub use algorithm::{bmssp::Bmssp, dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
pub use api::{run_base_case, run_bmssp, run_dijkstra, shortest_paths};
pub use graph::directed::DirectedGraph;

/// Error taxonomy shared by every fallible boundary operation in this crate.
///
/// Kinds, not exhaustive wrapped types: callers that need to distinguish a
/// malformed call from an algorithmic precondition violation can match on
/// the variant; anything more specific belongs in the message.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Out-of-range vertex index, negative or NaN edge weight, or an empty
    /// source set passed to a top-level entry point.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An internal algorithmic precondition was violated: BMSSP invoked at
    /// level 0 with a frontier of size other than one, an accessor used
    /// before the corresponding `calc_*` ran, or a source vertex with an
    /// infinite distance.
    #[error("precondition violation: {0}")]
    PreconditionViolation(String),

    /// An allocation needed to carry out the request could not be
    /// satisfied.
    #[error("resource exhausted: {0}")]
    ResourceExhausted(String),

    /// Reserved for collaborators that interpose cancellation above this
    /// crate. Nothing in this crate raises it today.
    #[error("operation cancelled")]
    Cancelled,
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
