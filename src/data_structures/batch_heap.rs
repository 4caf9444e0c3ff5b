use num_traits::{Float, Zero};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt::Debug;

/// Bound-aware, partially-sorted priority store backing each BMSSP
/// recursion frame (Lemma 3.3 of the source paper: `insert`,
/// `batch_prepend`, `pull`).
///
/// Every `(vertex, key)` pair with `key >= B` is rejected on sight, at most
/// one pair is kept per vertex (the smaller key wins), and `pull` hands
/// back the smallest block of at most `M` pairs along with a separating
/// bound `B_pull` such that every returned key is strictly less than
/// `B_pull`.
///
/// The "pull region" (the M smallest keys) is not a physically separate
/// container from the "hold region" (the remainder): both live in one
/// `BTreeSet<(key, vertex)>` ordered first by key and then by vertex
/// index, which gives the vertex-index tie-break required throughout this
/// crate for free. The pull region is simply the first `M` elements of
/// that set, a view rather than a maintained structure.
#[derive(Debug)]
pub struct BatchHeap<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    m: usize,
    bound: W,
    entries: BTreeSet<(W, usize)>,
    index: HashMap<usize, W>,
}

impl<W> BatchHeap<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Creates an empty heap with block size `m` and upper bound `bound`.
    pub fn new(m: usize, bound: W) -> Self {
        debug_assert!(m >= 1, "BatchHeap block size must be at least 1");
        BatchHeap {
            m: m.max(1),
            bound,
            entries: BTreeSet::new(),
            index: HashMap::new(),
        }
    }

    /// Whether the heap holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of distinct vertices currently held.
    pub fn size(&self) -> usize {
        self.index.len()
    }

    /// Inserts `(vertex, key)`, keeping the minimum key per vertex and
    /// silently dropping any key at or above the bound.
    pub fn insert(&mut self, vertex: usize, key: W) {
        if key >= self.bound {
            return;
        }
        if let Some(&existing) = self.index.get(&vertex) {
            if key >= existing {
                return;
            }
            self.entries.remove(&(existing, vertex));
        }
        self.index.insert(vertex, key);
        self.entries.insert((key, vertex));
    }

    /// Batch-inserts `pairs`, applying the same bound filter and
    /// min-per-vertex rule as [`Self::insert`]. If every surviving key is
    /// strictly less than every key currently in the pull region, those
    /// pairs become the new pull region — true automatically here, since
    /// inserting smaller keys into a globally sorted set always pushes them
    /// to the front.
    pub fn batch_prepend(&mut self, pairs: Vec<(usize, W)>) {
        let mut best: HashMap<usize, W> = HashMap::new();
        for (vertex, key) in pairs {
            if key >= self.bound {
                continue;
            }
            best.entry(vertex)
                .and_modify(|current| {
                    if key < *current {
                        *current = key;
                    }
                })
                .or_insert(key);
        }
        for (vertex, key) in best {
            self.insert(vertex, key);
        }
    }

    /// Removes up to `m` of the smallest-keyed pairs and returns the
    /// separating bound `B_pull` together with the removed vertices.
    ///
    /// `B_pull` is the smallest key remaining afterwards, or the heap's
    /// bound if nothing remains. If the cut point at `m` would split a
    /// group of equal keys, the block is extended to take the whole group
    /// — the returned keys must all be strictly less than `B_pull`, which a
    /// mid-tie cut cannot guarantee.
    pub fn pull(&mut self) -> (W, HashSet<usize>) {
        if self.entries.is_empty() {
            return (self.bound, HashSet::new());
        }

        let mut taken: Vec<(W, usize)> = Vec::with_capacity(self.m);
        let mut boundary_key: Option<W> = None;
        for &pair in self.entries.iter() {
            if taken.len() >= self.m && Some(pair.0) != boundary_key {
                break;
            }
            boundary_key = Some(pair.0);
            taken.push(pair);
        }

        let mut block = HashSet::with_capacity(taken.len());
        for &(key, vertex) in &taken {
            self.entries.remove(&(key, vertex));
            self.index.remove(&vertex);
            block.insert(vertex);
        }

        let b_pull = self
            .entries
            .iter()
            .next()
            .map(|&(key, _)| key)
            .unwrap_or(self.bound);

        (b_pull, block)
    }
}
