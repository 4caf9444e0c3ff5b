use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::Result;

/// A weighted directed graph, treated as a read-only collaborator by the
/// algorithms in this crate: nothing in `algorithm` mutates a `Graph`, only
/// the caller-owned distance/predecessor arrays.
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Number of vertices, indexed `0..vertex_count()`.
    fn vertex_count(&self) -> usize;

    /// Total number of directed edges.
    fn edge_count(&self) -> usize;

    /// Outgoing `(neighbor, weight)` pairs for `vertex`, in insertion order.
    /// Order carries no semantic weight beyond making relaxation order (and
    /// hence tie-breaking) deterministic for a fixed graph.
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Whether `vertex` is within `0..vertex_count()`.
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Whether a directed edge `from -> to` exists.
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Weight of the edge `from -> to`, if it exists.
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;

    /// Cached `k`, the pivot-subtree-size threshold. Fails with
    /// [`crate::Error::PreconditionViolation`] if `calc_k` has not run.
    fn get_k(&self) -> Result<usize>;

    /// Cached `t`, the level/branching parameter. Fails with
    /// [`crate::Error::PreconditionViolation`] if `calc_t` has not run.
    fn get_t(&self) -> Result<usize>;
}

/// Mutation surface for building up a [`Graph`]. Kept separate from `Graph`
/// itself so algorithms can be generic over read-only graphs.
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex and returns its id.
    fn add_vertex(&mut self) -> usize;

    /// Adds a directed edge `from -> to` with the given weight.
    ///
    /// Fails with [`crate::Error::InvalidArgument`] if `from` or `to` is out
    /// of range, or `weight` is negative or NaN.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;

    /// Removes a directed edge, if present. Returns whether one was removed.
    fn remove_edge(&mut self, from: usize, to: usize) -> bool;
}
