use num_traits::{Float, Zero};
use std::collections::HashSet;
use std::fmt::Debug;

use crate::algorithm::base_case::base_case;
use crate::algorithm::find_pivots::find_pivots;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::BatchHeap;
use crate::graph::Graph;
use crate::{Error, Result};

fn pow2_saturating(exponent: usize) -> usize {
    if exponent >= usize::BITS as usize {
        usize::MAX
    } else {
        1usize << exponent
    }
}

/// Recursive BMSSP core: combines [`find_pivots`], [`BatchHeap`], and
/// [`base_case`] to compute shortest paths bounded by `bound`, from a
/// frontier `s` all of whose members already carry a finite distance below
/// `bound`.
///
/// `level` starts at `ceil(ln(n) / t)` at the top-level call and decreases
/// by one per recursion, bottoming out at the bounded Dijkstra in
/// [`base_case`] when `level == 0` — at which point `s` must be a
/// singleton. `d` and `pred` are the caller-owned distance and predecessor
/// arrays, mutated in place throughout.
///
/// Returns `(B', U)`: the shrunk bound and the set of vertices this call
/// completed (with distance `< B'`).
pub fn bmssp<W, G>(
    graph: &G,
    level: usize,
    bound: W,
    s: &HashSet<usize>,
    k: usize,
    t: usize,
    d: &mut [W],
    pred: &mut [Option<usize>],
) -> Result<(W, HashSet<usize>)>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    for &v in s {
        if !graph.has_vertex(v) {
            return Err(Error::InvalidArgument(format!(
                "frontier vertex {v} is out of range"
            )));
        }
        if !d[v].is_finite() || d[v] >= bound {
            return Err(Error::PreconditionViolation(format!(
                "frontier vertex {v} must have a finite distance strictly below the bound"
            )));
        }
    }

    if level == 0 {
        if s.len() != 1 {
            return Err(Error::PreconditionViolation(format!(
                "bmssp called at level 0 with |S|={}, expected 1",
                s.len()
            )));
        }
        let x = *s.iter().next().expect("checked non-empty above");
        return base_case(graph, x, bound, k, d, pred);
    }

    log::debug!(
        "bmssp level {level}: entering with |S|={}, B={bound:?}",
        s.len()
    );

    let (pivots, witnesses) = find_pivots(graph, bound, s, k, d, pred)?;

    let block_size = pow2_saturating((level - 1).saturating_mul(t));
    let mut heap = BatchHeap::new(block_size, bound);
    for &p in &pivots {
        heap.insert(p, d[p]);
    }

    let size_cap = k.saturating_mul(pow2_saturating(level.saturating_mul(t)));
    let mut completed: HashSet<usize> = HashSet::new();
    let mut min_b_prime: Option<W> = None;
    let mut cap_triggered = false;

    loop {
        if completed.len() >= size_cap {
            cap_triggered = true;
            break;
        }
        if heap.is_empty() {
            break;
        }

        let (b_i, s_i) = heap.pull();
        if s_i.is_empty() {
            break;
        }

        let (b_prime_i, u_i) = bmssp(graph, level - 1, b_i, &s_i, k, t, d, pred)?;
        completed.extend(u_i.iter().copied());
        min_b_prime = Some(match min_b_prime {
            Some(current) if current < b_prime_i => current,
            _ => b_prime_i,
        });

        let mut prepend_batch: Vec<(usize, W)> = Vec::new();
        for &u in &u_i {
            for (v, weight) in graph.neighbors(u) {
                let candidate = d[u] + weight;
                if candidate < d[v] {
                    d[v] = candidate;
                    pred[v] = Some(u);
                    if b_i <= candidate && candidate < bound {
                        heap.insert(v, candidate);
                    } else if candidate < b_i {
                        prepend_batch.push((v, candidate));
                    }
                }
            }
        }
        for &x in &s_i {
            if b_prime_i <= d[x] && d[x] < b_i {
                prepend_batch.push((x, d[x]));
            }
        }
        heap.batch_prepend(prepend_batch);
    }

    let b_final = if cap_triggered {
        match min_b_prime {
            Some(value) if value < bound => value,
            _ => bound,
        }
    } else {
        bound
    };

    completed.extend(witnesses.iter().copied().filter(|&x| d[x] < b_final));

    let exit_reason = if cap_triggered {
        "size cap reached"
    } else {
        "heap exhausted"
    };
    log::debug!(
        "bmssp level {level}: exited pull loop ({exit_reason}), |S|={}, |P|={}, completed {}, B'={b_final:?}",
        s.len(),
        pivots.len(),
        completed.len()
    );

    Ok((b_final, completed))
}

/// Entry point that drives [`bmssp`] from a single source, computing the
/// starting level `ceil(ln(n) / t)` and seeding `d[source] = 0`.
#[derive(Debug, Default)]
pub struct Bmssp;

impl Bmssp {
    /// Creates a new BMSSP algorithm instance.
    pub fn new() -> Self {
        Bmssp
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Bmssp
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "BMSSP"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidArgument(format!(
                "source vertex {source} is out of range"
            )));
        }

        let n = graph.vertex_count();
        let k = graph.get_k()?;
        let t = graph.get_t()?;

        let level = if n <= 1 {
            0
        } else {
            ((n as f64).ln() / (t as f64)).ceil() as usize
        };

        let mut d = vec![W::infinity(); n];
        let mut pred: Vec<Option<usize>> = vec![None; n];
        d[source] = W::zero();

        let frontier = HashSet::from([source]);
        bmssp(graph, level, W::infinity(), &frontier, k, t, &mut d, &mut pred)?;

        let distances = d
            .iter()
            .map(|&dist| if dist.is_finite() { Some(dist) } else { None })
            .collect();

        Ok(ShortestPathResult {
            distances,
            predecessors: pred,
            source,
        })
    }
}
