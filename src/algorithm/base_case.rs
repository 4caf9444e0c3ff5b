use num_traits::{Float, Zero};
use std::collections::HashSet;
use std::fmt::Debug;

use crate::data_structures::BinaryHeapWrapper;
use crate::graph::Graph;
use crate::{Error, Result};

/// Bounded Dijkstra from a single source, capped at `k + 1` completions.
///
/// `x` must already carry a finite distance strictly less than `bound` in
/// `d`. Relaxes edges only into vertices whose tentative distance stays
/// strictly below `bound`, and stops as soon as either the completed set
/// reaches size `k + 1` or the local queue empties.
///
/// Returns `(B', U)`:
/// - if the queue emptied first, `B' = bound` and `U` is every vertex
///   completed (all with distance `< bound`);
/// - if the cap was hit, `B'` is the maximum distance among the `k + 1`
///   completions and `U` is trimmed to the `k` completions strictly below
///   `B'` — the overflowing vertex is left for the caller to re-insert.
///
/// `d` and `pred` are updated in place for every vertex successfully
/// relaxed; neither is ever raised or overwritten with a non-improving
/// value.
pub fn base_case<W, G>(
    graph: &G,
    x: usize,
    bound: W,
    k: usize,
    d: &mut [W],
    pred: &mut [Option<usize>],
) -> Result<(W, HashSet<usize>)>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    if !d[x].is_finite() || d[x] >= bound {
        return Err(Error::PreconditionViolation(format!(
            "base_case source {x} must have a finite distance strictly below the bound"
        )));
    }

    let mut queue = BinaryHeapWrapper::new();
    queue.push(x, d[x]);

    let mut completed: Vec<(W, usize)> = Vec::new();
    let mut completed_set: HashSet<usize> = HashSet::new();

    while let Some((u, du)) = queue.pop() {
        if du > d[u] {
            continue; // stale entry, a better distance already won
        }
        if completed_set.contains(&u) {
            continue;
        }

        completed_set.insert(u);
        completed.push((du, u));

        if completed.len() == k + 1 {
            break;
        }

        for (v, weight) in graph.neighbors(u) {
            let new_dist = du + weight;
            if new_dist >= bound {
                continue;
            }
            if new_dist < d[v] {
                d[v] = new_dist;
                pred[v] = Some(u);
                queue.push(v, new_dist);
            }
        }
    }

    let overflowed = completed.len() == k + 1;
    let (b_prime, u_set) = if overflowed {
        let b_prime = completed.last().expect("just checked length").0;
        let u_set = completed
            .into_iter()
            .filter(|&(dist, _)| dist < b_prime)
            .map(|(_, v)| v)
            .collect();
        (b_prime, u_set)
    } else {
        let u_set = completed.into_iter().map(|(_, v)| v).collect();
        (bound, u_set)
    };

    let termination = if overflowed {
        "k+1 overflow cap"
    } else {
        "queue exhaustion"
    };
    log::debug!(
        "base_case from {x}: terminated by {termination}, completed {} vertices, B'={b_prime:?}",
        u_set.len()
    );

    Ok((b_prime, u_set))
}
