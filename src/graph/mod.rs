//! Undirected graph over word-like values
//!
//! Nodes map to ordered neighbor sets. Breadth-first search expands neighbors in
//! ascending order, so when several shortest paths exist the one returned is
//! always the same.

pub mod builder;

use rustc_hash::FxHashMap;
use std::collections::{BTreeSet, VecDeque};
use std::hash::Hash;

use crate::core::Word;

pub use builder::{GraphBuilder, PatternIndex};

/// Graph whose nodes are dictionary words
pub type WordGraph = Graph<Word>;

/// Generic undirected graph stored as an adjacency list
///
/// The adjacency relation is symmetric and loop-free as long as edges are only
/// added through [`Graph::add_edge`].
#[derive(Debug, Clone)]
pub struct Graph<T> {
    adjacency: FxHashMap<T, BTreeSet<T>>,
    // Returned for nodes that are not in the graph
    empty: BTreeSet<T>,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self {
            adjacency: FxHashMap::default(),
            empty: BTreeSet::new(),
        }
    }
}

impl<T> Graph<T>
where
    T: Clone + Eq + Hash + Ord,
{
    /// Create an empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with no neighbors; existing nodes are left untouched
    pub fn add_node(&mut self, node: T) {
        self.adjacency.entry(node).or_default();
    }

    /// Add an undirected edge, inserting either endpoint if missing
    ///
    /// A self-edge only ensures the node exists. Returns `true` when a new edge
    /// was created.
    pub fn add_edge(&mut self, a: T, b: T) -> bool {
        if a == b {
            self.add_node(a);
            return false;
        }

        let inserted = self.adjacency.entry(a.clone()).or_default().insert(b.clone());
        self.adjacency.entry(b).or_default().insert(a);
        inserted
    }

    /// Check whether a node is present
    #[must_use]
    pub fn contains(&self, node: &T) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Neighbors of a node in ascending order
    ///
    /// Absent nodes have no neighbors.
    #[must_use]
    pub fn neighbors(&self, node: &T) -> &BTreeSet<T> {
        self.adjacency.get(node).unwrap_or(&self.empty)
    }

    /// Number of neighbors of a node (0 if absent)
    #[must_use]
    pub fn degree(&self, node: &T) -> usize {
        self.neighbors(node).len()
    }

    /// Number of nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Check whether the graph has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// All nodes in ascending order
    #[must_use]
    pub fn nodes(&self) -> Vec<&T> {
        let mut nodes: Vec<&T> = self.adjacency.keys().collect();
        nodes.sort_unstable();
        nodes
    }

    /// Shortest path from `start` to `end` by breadth-first search
    ///
    /// Returns an empty vector if either node is absent or no path connects
    /// them, and `[start]` when `start == end`.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_edge("CAT", "COT");
    /// graph.add_edge("COT", "COG");
    ///
    /// assert_eq!(graph.shortest_path(&"CAT", &"COG"), vec!["CAT", "COT", "COG"]);
    /// assert!(graph.shortest_path(&"CAT", &"DOG").is_empty());
    /// ```
    #[must_use]
    pub fn shortest_path(&self, start: &T, end: &T) -> Vec<T> {
        if !self.contains(start) || !self.contains(end) {
            return Vec::new();
        }

        if start == end {
            return vec![start.clone()];
        }

        // parent[n] is the node that first discovered n
        let mut parent: FxHashMap<&T, &T> = FxHashMap::default();
        let mut queue: VecDeque<&T> = VecDeque::new();

        parent.insert(start, start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for neighbor in self.neighbors(current) {
                if parent.contains_key(neighbor) {
                    continue;
                }
                parent.insert(neighbor, current);

                if neighbor == end {
                    return Self::reconstruct(&parent, start, end);
                }
                queue.push_back(neighbor);
            }
        }

        Vec::new()
    }

    fn reconstruct(parent: &FxHashMap<&T, &T>, start: &T, end: &T) -> Vec<T> {
        let mut path = vec![end.clone()];
        let mut node = end;

        while node != start {
            node = parent[node];
            path.push(node.clone());
        }

        path.reverse();
        path
    }

    /// Number of edges on a shortest path, or `None` if unreachable
    #[must_use]
    pub fn distance(&self, start: &T, end: &T) -> Option<usize> {
        let path = self.shortest_path(start, end);
        (!path.is_empty()).then(|| path.len() - 1)
    }

    /// All nodes reachable from `start`, including itself
    ///
    /// Empty if `start` is absent.
    #[must_use]
    pub fn component(&self, start: &T) -> BTreeSet<T> {
        let mut seen = BTreeSet::new();
        if !self.contains(start) {
            return seen;
        }

        let mut queue = VecDeque::from([start]);
        seen.insert(start.clone());

        while let Some(current) = queue.pop_front() {
            for neighbor in self.neighbors(current) {
                if seen.insert(neighbor.clone()) {
                    queue.push_back(neighbor);
                }
            }
        }

        seen
    }

    /// Connected components, ordered by their smallest member
    #[must_use]
    pub fn components(&self) -> Vec<BTreeSet<T>> {
        let mut assigned: BTreeSet<&T> = BTreeSet::new();
        let mut components = Vec::new();

        for node in self.nodes() {
            if assigned.contains(node) {
                continue;
            }
            let component = self.component(node);
            for member in &component {
                if let Some((key, _)) = self.adjacency.get_key_value(member) {
                    assigned.insert(key);
                }
            }
            components.push(component);
        }

        components
    }
}
