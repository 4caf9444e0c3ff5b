use num_traits::{Float, Zero};
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use crate::graph::Graph;
use crate::Result;

/// Runs `k` rounds of Bellman-Ford-style relaxation from `s`, shrinking it
/// to a pivot set `P` with `|P| <= |s| / k`.
///
/// Maintains a witness set `W`, starting at `s` and growing with every
/// vertex relaxed to a distance below `bound` during the `k` rounds. If `W`
/// grows past `k * |s|`, pruning would save little, so `s` is returned
/// unchanged as both the pivot and the witness set. Otherwise, the forest
/// of relaxations performed during those rounds is used to pick as pivots
/// every root in `s` whose subtree reaches at least `k` vertices.
///
/// `d` and `pred` are updated in place for every relaxation performed,
/// exactly like [`crate::algorithm::base_case::base_case`]. Returns
/// `(∅, ∅)` for an empty `s`.
pub fn find_pivots<W, G>(
    graph: &G,
    bound: W,
    s: &HashSet<usize>,
    k: usize,
    d: &mut [W],
    pred: &mut [Option<usize>],
) -> Result<(HashSet<usize>, HashSet<usize>)>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    if s.is_empty() {
        return Ok((HashSet::new(), HashSet::new()));
    }

    let mut witnesses: HashSet<usize> = s.clone();
    let mut forest_parent: HashMap<usize, usize> = HashMap::new();

    for _ in 0..k {
        let frontier: Vec<usize> = witnesses.iter().copied().collect();
        for u in frontier {
            for (v, weight) in graph.neighbors(u) {
                let candidate = d[u] + weight;
                if candidate < bound && candidate < d[v] {
                    d[v] = candidate;
                    pred[v] = Some(u);
                    forest_parent.insert(v, u);
                    witnesses.insert(v);
                }
            }
        }
    }

    if witnesses.len() > k * s.len() {
        log::debug!(
            "find_pivots: witness growth {} exceeded k*|S|={}, skipping pruning",
            witnesses.len(),
            k * s.len()
        );
        return Ok((s.clone(), s.clone()));
    }

    let mut children: HashMap<usize, Vec<usize>> = HashMap::new();
    for (&child, &parent) in &forest_parent {
        children.entry(parent).or_default().push(child);
    }

    let mut pivots = HashSet::new();
    for &root in s {
        let mut size = 0usize;
        let mut stack = vec![root];
        let mut visited = HashSet::new();
        while let Some(node) = stack.pop() {
            if !visited.insert(node) {
                continue;
            }
            size += 1;
            if let Some(kids) = children.get(&node) {
                stack.extend(kids.iter().copied());
            }
        }
        if size >= k {
            pivots.insert(root);
        }
    }

    log::debug!(
        "find_pivots: |S|={} -> |P|={}, |W|={}",
        s.len(),
        pivots.len(),
        witnesses.len()
    );

    Ok((pivots, witnesses))
}
