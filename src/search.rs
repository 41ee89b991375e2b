//! Generic breadth-first and Dijkstra searches which, unlike
//! [pathfinding's](https://docs.rs/pathfinding/latest/pathfinding/) versions, also report the
//! order in which nodes were settled so callers can replay the search.
use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use std::hash::Hash;

/// Parent index of the start node, which has none.
const NO_PARENT: usize = usize::MAX;

struct SmallestCostHolder<K> {
    cost: K,
    rank: usize,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cost.eq(&other.cost) && self.rank == other.rank
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: the smallest cost wins, and among equal costs the
        // smallest rank
        match other.cost.cmp(&self.cost) {
            Ordering::Equal => other.rank.cmp(&self.rank),
            s => s,
        }
    }
}

/// Walks parent indices back from `end` and returns the nodes leading there, excluding the
/// node without a parent and including `end`.
fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, parent: F, end: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: Fn(&V) -> usize,
{
    let mut path: Vec<N> = std::iter::successors(parents.get_index(end), |&(_, value)| {
        parents.get_index(parent(value))
    })
    .map(|(node, _)| node.clone())
    .collect();
    // Drops the start
    path.pop();
    path.reverse();
    path
}

/// Dijkstra's algorithm with lazy deletion: a node may sit in the queue several times and
/// only its cheapest entry is expanded, the rest are skipped once the node is finalized.
///
/// Entries of equal cost are popped in ascending `rank`, which for grids is the row-major
/// index of the cell.
///
/// Returns the finalized nodes in order, ending with the goal if it was reached, and the path
/// to the goal (empty when there is none).
pub fn dijkstra_trace<N, C, FN, IN, FR, FS>(
    start: &N,
    mut successors: FN,
    mut rank: FR,
    mut success: FS,
) -> (Vec<N>, Vec<N>)
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FR: FnMut(&N) -> usize,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        cost: Zero::zero(),
        rank: rank(start),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (NO_PARENT, Zero::zero()));
    let mut finalized: FxHashSet<usize> = FxHashSet::default();
    let mut visited = Vec::new();

    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        // A cheaper entry for this node was already expanded
        if !finalized.insert(index) {
            continue;
        }
        let successors = {
            let Some((node, _)) = parents.get_index(index) else {
                continue;
            };
            visited.push(node.clone());
            if success(node) {
                debug!("Goal finalized after {} nodes", visited.len());
                let path = reverse_path(&parents, |&(p, _)| p, index);
                return (visited, path);
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let r = rank(&successor);
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            to_see.push(SmallestCostHolder {
                cost: new_cost,
                rank: r,
                index: n,
            });
        }
    }
    debug!("Queue exhausted after {} nodes", visited.len());
    (visited, Vec::new())
}

/// Breadth-first search. Nodes are marked when they are queued, so each is queued once; the
/// trace lists them in dequeue order, ending with the goal if it was reached.
pub fn bfs_trace<N, FN, IN, FS>(start: &N, mut successors: FN, mut success: FS) -> (Vec<N>, Vec<N>)
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    // Insertion order doubles as the queue: `front` is the next index to dequeue
    let mut parents: FxIndexMap<N, usize> = FxIndexMap::default();
    parents.insert(start.clone(), NO_PARENT);
    let mut visited = Vec::new();
    let mut front = 0;

    while let Some((node, _)) = parents.get_index(front) {
        visited.push(node.clone());
        if success(node) {
            debug!("Goal dequeued after {} nodes", visited.len());
            let path = reverse_path(&parents, |&p| p, front);
            return (visited, path);
        }
        let successors = successors(node);
        for successor in successors {
            if let Vacant(e) = parents.entry(successor) {
                e.insert(front);
            }
        }
        front += 1;
    }
    debug!("Queue exhausted after {} nodes", visited.len());
    (visited, Vec::new())
}
