use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distance from the source to each vertex, `None` if unreached.
    pub distances: Vec<Option<W>>,

    /// Predecessor of each vertex on its shortest path, `None` if unreached
    /// or if the vertex is the source itself.
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex id.
    pub source: usize,
}

/// Common surface for single-source shortest path algorithms over a [`Graph`].
///
/// Path reconstruction beyond the predecessor array in [`ShortestPathResult`]
/// is outside this crate; callers who need a vertex sequence walk
/// `predecessors` themselves.
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Computes shortest paths from `source` to every vertex reachable from it.
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Name of the algorithm, for logging.
    fn name(&self) -> &'static str;
}
