use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classical binary-heap Dijkstra.
///
/// Used as the correctness oracle the test suite checks [`crate::Bmssp`]
/// against, and directly usable on its own through the same
/// [`ShortestPathResult`] shape.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance.
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidArgument(format!(
                "source vertex {source} is out of range"
            )));
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];

        distances[source] = Some(W::zero());

        let mut queue = BinaryHeapWrapper::new();
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            if let Some(current_dist) = distances[u] {
                if current_dist < dist_u {
                    continue;
                }
            }

            for (v, weight) in graph.neighbors(u) {
                let new_dist = dist_u + weight;

                let should_update = match distances[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    queue.push(v, new_dist);
                }
            }
        }

        log::debug!(
            "dijkstra from {source}: reached {} of {n} vertices",
            distances.iter().filter(|d| d.is_some()).count()
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}
