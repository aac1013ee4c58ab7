//! This module implements greedy best-first search in the shape of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html):
//! nodes are ordered purely by their heuristic value, a node is never re-parented once
//! discovered and expanded nodes are never expanded again.
use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index of the start node.
const NO_PARENT: usize = usize::MAX;

/// Search node stored in the arena. Its handle is its insertion index in the arena map.
#[derive(Clone, Copy, Debug)]
struct SearchNode<C> {
    parent: usize,
    priority: C,
}

/// Frontier entry, ordered by smallest priority first and, among equal priorities, by the
/// earliest insertion into the arena.
struct SmallestPriorityHolder<C> {
    priority: C,
    index: usize,
}

impl<C: PartialEq> Eq for SmallestPriorityHolder<C> {}

impl<C: PartialEq> PartialEq for SmallestPriorityHolder<C> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.eq(&other.priority) && self.index == other.index
    }
}

impl<C: Ord> PartialOrd for SmallestPriorityHolder<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for SmallestPriorityHolder<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so both keys are reversed
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => other.index.cmp(&self.index),
            s => s,
        }
    }
}

/// Result of a single search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome<N> {
    /// The path from the node after the start up to and including the node that satisfied the
    /// goal test. `Some` of an empty path means the start itself satisfied it, [None] means the
    /// frontier ran dry.
    pub path: Option<Vec<N>>,
    /// Expanded nodes in expansion order.
    pub expanded: Vec<N>,
    /// Number of distinct nodes ever inserted into the frontier, the start included.
    pub discovered: usize,
}

impl<N> SearchOutcome<N> {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

fn reverse_path<N, C>(nodes: &FxIndexMap<N, SearchNode<C>>, goal: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path = Vec::new();
    let mut i = goal;
    while let Some((node, search_node)) = nodes.get_index(i) {
        if search_node.parent == NO_PARENT {
            break;
        }
        path.push(node.clone());
        i = search_node.parent;
    }
    path.reverse();
    path
}

/// Greedy best-first search from `start`. The node with the smallest `heuristic` value is
/// expanded first, ties going to the node discovered first. Successors are inserted in the order
/// `successors` yields them, skipping nodes that were expanded or are already waiting in the
/// frontier.
pub fn greedy_best_first<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> SearchOutcome<N>
where
    N: Eq + Hash + Clone,
    C: Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut frontier = BinaryHeap::new();
    let mut nodes: FxIndexMap<N, SearchNode<C>> = FxIndexMap::default();
    let mut visited: FxHashSet<N> = FxHashSet::default();
    let mut expanded = Vec::new();

    let priority = heuristic(start);
    nodes.insert(
        start.clone(),
        SearchNode {
            parent: NO_PARENT,
            priority,
        },
    );
    frontier.push(SmallestPriorityHolder { priority, index: 0 });

    while let Some(SmallestPriorityHolder { priority, index }) = frontier.pop() {
        let successors = {
            let Some((node, search_node)) = nodes.get_index(index) else {
                continue;
            };
            // Priorities are fixed at discovery
            debug_assert!(search_node.priority == priority);
            if success(node) {
                return SearchOutcome {
                    path: Some(reverse_path(&nodes, index)),
                    expanded,
                    discovered: nodes.len(),
                };
            }
            visited.insert(node.clone());
            expanded.push(node.clone());
            successors(node)
        };
        for successor in successors {
            if visited.contains(&successor) {
                continue;
            }
            match nodes.entry(successor) {
                // Already waiting in the frontier, the first discovery keeps its parent
                Occupied(_) => continue,
                Vacant(e) => {
                    let priority = heuristic(e.key());
                    let n = e.index();
                    e.insert(SearchNode {
                        parent: index,
                        priority,
                    });
                    frontier.push(SmallestPriorityHolder { priority, index: n });
                }
            }
        }
    }
    SearchOutcome {
        path: None,
        expanded,
        discovered: nodes.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Small directed graph given as adjacency lists, node `i` having heuristic `h[i]`.
    fn run(adjacency: &[Vec<usize>], h: &[u32], start: usize, goal: usize) -> SearchOutcome<usize> {
        greedy_best_first(
            &start,
            |&n| adjacency[n].clone(),
            |&n| h[n],
            |&n| n == goal,
        )
    }

    #[test]
    fn start_satisfying_goal_gives_empty_path() {
        let outcome = run(&[vec![1], vec![0]], &[0, 1], 0, 0);
        assert_eq!(outcome.path, Some(vec![]));
        assert!(outcome.expanded.is_empty());
        assert_eq!(outcome.discovered, 1);
    }

    #[test]
    fn exhausted_frontier_gives_none() {
        // 3 is disconnected
        let adjacency = vec![vec![1, 2], vec![0, 2], vec![0, 1], vec![]];
        let outcome = run(&adjacency, &[3, 2, 1, 0], 0, 3);
        assert!(!outcome.found());
        assert_eq!(outcome.expanded, vec![0, 2, 1]);
        assert_eq!(outcome.discovered, 3);
    }

    #[test]
    fn ties_go_to_first_discovered() {
        // 1 and 2 tie, 1 is inserted first and leads to the goal
        let adjacency = vec![vec![1, 2], vec![3], vec![3], vec![]];
        let outcome = run(&adjacency, &[2, 1, 1, 0], 0, 3);
        assert_eq!(outcome.path, Some(vec![1, 3]));
        let adjacency = vec![vec![2, 1], vec![3], vec![3], vec![]];
        let outcome = run(&adjacency, &[2, 1, 1, 0], 0, 3);
        assert_eq!(outcome.path, Some(vec![2, 3]));
    }

    #[test]
    fn greedy_follows_heuristic_not_cost() {
        // 0 -> 1 -> 4 is short, 0 -> 2 -> 3 -> 4 looks better by heuristic
        let adjacency = vec![vec![1, 2], vec![4], vec![3], vec![4], vec![]];
        let outcome = run(&adjacency, &[9, 5, 1, 1, 0], 0, 4);
        assert_eq!(outcome.path, Some(vec![2, 3, 4]));
    }

    /// A node already in the frontier keeps the parent it was discovered from, even when a node
    /// expanded later also reaches it.
    #[test]
    fn first_discovery_keeps_parent() {
        // 3 is discovered from 1, then 2 is expanded and also links to 3
        let adjacency = vec![vec![1, 2], vec![3], vec![3], vec![]];
        let outcome = run(&adjacency, &[5, 1, 2, 3], 0, 3);
        assert_eq!(outcome.expanded, vec![0, 1, 2]);
        assert_eq!(outcome.path, Some(vec![1, 3]));
    }

    #[test]
    fn nodes_are_expanded_once() {
        let adjacency = vec![vec![1, 2], vec![0, 2, 3], vec![0, 1, 3], vec![1, 2]];
        let outcome = run(&adjacency, &[1, 1, 1, 1], 0, 9);
        let mut expanded = outcome.expanded.clone();
        expanded.sort();
        expanded.dedup();
        assert_eq!(expanded.len(), outcome.expanded.len());
        assert_eq!(outcome.expanded, vec![0, 1, 2, 3]);
    }
}
