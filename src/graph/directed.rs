use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};

/// An adjacency-list directed graph with non-negative real edge weights.
///
/// Vertices are dense indices `0..vertex_count()`. `k` and `t` — the two
/// integer parameters that drive BMSSP's branching factor — are cached on
/// the graph once computed, mirroring how the algorithm's source treats
/// them as graph-derived constants rather than recomputing them on every
/// call.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    vertex_count: usize,
    outgoing: HashMap<usize, Vec<(usize, W)>>,
    edge_count: usize,
    k: Option<usize>,
    t: Option<usize>,
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates an empty graph with no vertices.
    pub fn new() -> Self {
        DirectedGraph {
            vertex_count: 0,
            outgoing: HashMap::new(),
            edge_count: 0,
            k: None,
            t: None,
        }
    }

    /// Creates a graph pre-sized to `n` vertices and no edges.
    pub fn with_vertices(n: usize) -> Self {
        let mut graph = Self::new();
        for _ in 0..n {
            graph.add_vertex();
        }
        graph
    }

    /// Computes and caches `k = floor(ln(n)^(1/3))`, clamped to at least 1.
    /// `n <= 1` always yields 1. Idempotent.
    pub fn calc_k(&mut self) -> usize {
        let k = Self::floor_log_root(self.vertex_count, 1.0 / 3.0);
        self.k = Some(k);
        k
    }

    /// Computes and caches `t = floor(ln(n)^(2/3))`, clamped to at least 1.
    /// `n <= 1` always yields 1. Idempotent.
    pub fn calc_t(&mut self) -> usize {
        let t = Self::floor_log_root(self.vertex_count, 2.0 / 3.0);
        self.t = Some(t);
        t
    }

    /// Convenience for `calc_k()` followed by `calc_t()`.
    pub fn prepare(&mut self) {
        self.calc_k();
        self.calc_t();
    }

    fn floor_log_root(n: usize, exponent: f64) -> usize {
        if n <= 1 {
            return 1;
        }
        let value = (n as f64).ln().powf(exponent).floor();
        (value as usize).max(1)
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.outgoing.get(&vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing
            .get(&from)
            .is_some_and(|edges| edges.iter().any(|&(v, _)| v == to))
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing
            .get(&from)
            .and_then(|edges| edges.iter().find(|&&(v, _)| v == to).map(|&(_, w)| w))
    }

    fn get_k(&self) -> Result<usize> {
        self.k.ok_or_else(|| {
            Error::PreconditionViolation("calc_k has not been called".to_string())
        })
    }

    fn get_t(&self) -> Result<usize> {
        self.t.ok_or_else(|| {
            Error::PreconditionViolation("calc_t has not been called".to_string())
        })
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self) -> usize {
        let id = self.vertex_count;
        self.outgoing.insert(id, Vec::new());
        self.vertex_count += 1;
        id
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return Err(Error::InvalidArgument(format!(
                "edge ({from}, {to}) references a vertex outside 0..{}",
                self.vertex_count
            )));
        }
        if weight.is_nan() {
            return Err(Error::InvalidArgument(
                "edge weight must not be NaN".to_string(),
            ));
        }
        if weight < W::zero() {
            return Err(Error::InvalidArgument(format!(
                "edge ({from}, {to}) has negative weight"
            )));
        }

        self.outgoing.entry(from).or_default().push((to, weight));
        self.edge_count += 1;
        Ok(())
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        match self.outgoing.get_mut(&from) {
            Some(edges) => {
                let before = edges.len();
                edges.retain(|&(v, _)| v != to);
                let removed = before - edges.len();
                self.edge_count -= removed;
                removed > 0
            }
            None => false,
        }
    }
}
