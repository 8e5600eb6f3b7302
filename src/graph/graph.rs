use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// An undirected adjacency mapping from node key to the set of neighbor keys.
///
/// Edges are always stored in both directions and self-loops are dropped, so
/// the mapping stays symmetric. Nodes and neighbor sets are kept ordered so
/// that traversals over the graph are reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyGraph<K: Ord> {
    nodes: BTreeMap<K, BTreeSet<K>>,
}

impl<K: Ord> Default for AdjacencyGraph<K> {
    fn default() -> Self { Self { nodes: BTreeMap::new() } }
}

impl<K: Ord + Copy> AdjacencyGraph<K> {
    /// Construct an empty graph.
    pub fn new() -> Self { Self::default() }

    /// Get the number of nodes in the graph.
    #[inline] pub fn node_count(&self) -> usize { self.nodes.len() }

    /// Check if the graph has no nodes.
    #[inline] pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Insert a node with no neighbors, if it is not already present.
    pub fn add_node(&mut self, key: K) {
        self.nodes.entry(key).or_default();
    }

    /// Insert an undirected edge, adding both endpoints as nodes.
    /// Returns false for self-loops and edges already present.
    pub fn add_edge(&mut self, a: K, b: K) -> bool {
        if a == b {
            self.add_node(a);
            return false;
        }
        let inserted = self.nodes.entry(a).or_default().insert(b);
        self.nodes.entry(b).or_default().insert(a);
        inserted
    }

    /// Check whether a node is present.
    #[inline] pub fn contains_node(&self, key: K) -> bool { self.nodes.contains_key(&key) }

    /// Check whether `a` and `b` are adjacent.
    pub fn contains_edge(&self, a: K, b: K) -> bool {
        self.nodes.get(&a).is_some_and(|nbrs| nbrs.contains(&b))
    }

    /// Neighbor set of a node, `None` if the node is absent.
    #[inline] pub fn neighbors(&self, key: K) -> Option<&BTreeSet<K>> { self.nodes.get(&key) }

    /// Get the degree of a node (0 if absent).
    #[inline]
    pub fn degree(&self, key: K) -> usize {
        self.nodes.get(&key).map_or(0, BTreeSet::len)
    }

    /// Iterate over all node keys in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = K> + '_ { self.nodes.keys().copied() }

    /// Iterate over `(node, neighbors)` pairs in ascending node order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &BTreeSet<K>)> + '_ {
        self.nodes.iter().map(|(&key, nbrs)| (key, nbrs))
    }

    /// Every edge `a -> b` has a matching `b -> a`, and no node lists itself.
    pub fn is_symmetric(&self) -> bool {
        self.nodes.iter().all(|(a, nbrs)| {
            nbrs.iter().all(|b| b != a && self.contains_edge(*b, *a))
        })
    }
}

impl<K: Ord + Copy> FromIterator<(K, K)> for AdjacencyGraph<K> {
    fn from_iter<I: IntoIterator<Item = (K, K)>>(edges: I) -> Self {
        let mut graph = Self::new();
        edges.into_iter().for_each(|(a, b)| { graph.add_edge(a, b); });
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_graph() -> AdjacencyGraph<u64> {
        let mut graph: AdjacencyGraph<u64> = [(0, 1), (0, 2), (1, 2), (2, 3)].into_iter().collect();
        graph.add_node(4);
        graph
    }

    #[test]
    fn graph_construction() {
        let graph = make_test_graph();

        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 4);
        assert!(graph.is_symmetric());

        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        assert_eq!(graph.neighbors(2).unwrap().iter().copied().collect::<Vec<_>>(), vec![0, 1, 3]);
    }

    #[test]
    fn edges_are_stored_both_ways() {
        let graph = make_test_graph();
        for (a, nbrs) in graph.iter() {
            for &b in nbrs {
                assert!(graph.contains_edge(b, a), "missing reverse edge {b} -> {a}");
            }
        }
    }

    #[test]
    fn degree_matches_neighbors() {
        let graph = make_test_graph();

        assert_eq!(graph.degree(0), 2);
        assert_eq!(graph.degree(2), 3);
        assert_eq!(graph.degree(3), 1);
        assert_eq!(graph.degree(4), 0);
        assert_eq!(graph.degree(99), 0);
    }

    #[test]
    fn isolated_nodes_have_empty_neighbor_sets() {
        let graph = make_test_graph();
        assert!(graph.contains_node(4));
        assert!(graph.neighbors(4).unwrap().is_empty());
        assert!(graph.neighbors(99).is_none());
    }

    #[test]
    fn self_loops_are_ignored_but_node_is_kept() {
        let mut graph = AdjacencyGraph::new();
        assert!(!graph.add_edge(7u64, 7));
        assert!(graph.contains_node(7));
        assert_eq!(graph.degree(7), 0);
        assert!(graph.is_symmetric());
    }

    #[test]
    fn duplicate_edges_are_reported() {
        let mut graph = AdjacencyGraph::new();
        assert!(graph.add_edge(1u64, 2));
        assert!(!graph.add_edge(2, 1));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn empty_graph_is_valid() {
        let graph = AdjacencyGraph::<u64>::new();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_symmetric());
    }

    #[test]
    fn serializes_as_plain_mapping() {
        let graph: AdjacencyGraph<u64> = [(1, 2)].into_iter().collect();
        let json = serde_json::to_string(&graph).unwrap();
        assert_eq!(json, r#"{"1":[2],"2":[1]}"#);
    }
}
