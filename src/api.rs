//! Free-function boundary matching the "external interfaces" this crate
//! exposes to a caller that does not want to instantiate the
//! [`crate::algorithm::ShortestPathAlgorithm`] structs directly: a thin
//! layer over [`algorithm::dijkstra`], [`algorithm::base_case`], and
//! [`algorithm::bmssp`].
//!
//! Every function here assumes `graph` has already been prepared with
//! [`crate::graph::directed::DirectedGraph::prepare`] (or `calc_k`/`calc_t`
//! individually) where `k`/`t` are required; this mirrors the same
//! precondition `Bmssp::compute_shortest_paths` enforces.

use std::collections::HashSet;
use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::algorithm::base_case::base_case;
use crate::algorithm::bmssp::{bmssp, Bmssp};
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::{Error, Result};

/// Oracle / fallback entry: classical binary-heap Dijkstra from `source`.
pub fn run_dijkstra<W, G>(graph: &G, source: usize) -> Result<ShortestPathResult<W>>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    Dijkstra::new().compute_shortest_paths(graph, source)
}

/// Runs a single bounded-Dijkstra base case from `source`, bounded by `B`.
///
/// Allocates its own distance/predecessor arrays, seeded with `d[source] =
/// 0`, so it can be driven directly without a surrounding BMSSP recursion —
/// useful for exercising the base case in isolation.
pub fn run_base_case<W, G>(graph: &G, source: usize, bound: W) -> Result<(W, HashSet<usize>)>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    if !graph.has_vertex(source) {
        return Err(Error::InvalidArgument(format!(
            "source vertex {source} is out of range"
        )));
    }
    if bound.is_nan() {
        return Err(Error::InvalidArgument("bound must not be NaN".to_string()));
    }

    let k = graph.get_k()?;
    let n = graph.vertex_count();
    let mut d = vec![W::infinity(); n];
    let mut pred: Vec<Option<usize>> = vec![None; n];
    d[source] = W::zero();

    base_case(graph, source, bound, k, &mut d, &mut pred)
}

/// Runs one BMSSP recursion frame at `level`, bounded by `B`, from frontier
/// `s`. Mutates `d` and `pred` in place, exactly like [`crate::algorithm::bmssp::bmssp`].
///
/// Requires `graph.get_k()`/`graph.get_t()` to already be cached (see
/// [`crate::graph::directed::DirectedGraph::prepare`]).
pub fn run_bmssp<W, G>(
    graph: &G,
    d: &mut [W],
    pred: &mut [Option<usize>],
    level: usize,
    bound: W,
    s: &HashSet<usize>,
) -> Result<(W, HashSet<usize>)>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    if bound.is_nan() {
        return Err(Error::InvalidArgument("bound must not be NaN".to_string()));
    }
    let k = graph.get_k()?;
    let t = graph.get_t()?;
    bmssp(graph, level, bound, s, k, t, d, pred)
}

/// Top-level entry: computes the starting level `ceil(ln n / t)`, seeds
/// `d[source] = 0`, and drives [`run_bmssp`] to completion from `{source}`.
///
/// Equivalent to `Bmssp::new().compute_shortest_paths(graph, source)`,
/// offered as a free function to match the boundary shape of
/// [`run_dijkstra`]/[`run_base_case`]/[`run_bmssp`].
pub fn shortest_paths<W, G>(graph: &G, source: usize) -> Result<ShortestPathResult<W>>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    Bmssp::new().compute_shortest_paths(graph, source)
}
