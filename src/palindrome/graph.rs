//! The palindrome state graph: start edges, forward edges, and distances to
//! the terminal node, tied together and pruned to what's actually reachable.
//!
//! A [`Node`](super::elements::Node) stands in for every partial palindrome
//! sharing the same unmatched tail. Instead of enumerating sentences
//! directly, the engine first builds this graph once per dictionary, then
//! runs a bounded search over it (see [`super::enumerate`]).

use std::collections::HashMap;

use log::debug;

use super::building::{calculate_distances, forward_edges, start_edges};
use super::elements::{Edge, Node, StartEdge};

/// The complete palindrome graph for a given word list: every start edge,
/// every forward edge grouped by origin node, and the distance-to-terminal
/// oracle used to prune the enumerator.
#[derive(Debug)]
pub struct PalindromeGraph {
    pub start_edges: Vec<StartEdge>,
    pub edges_from_node: HashMap<Node, Vec<Edge>>,
    pub distances: HashMap<Node, u32>,
}

impl PalindromeGraph {
    /// Builds the graph from a dictionary, pruning any node that cannot
    /// reach the terminal node at all (no finite palindrome continuation
    /// exists from it).
    pub fn build(word_list: &[&str]) -> Self {
        let start_edges = start_edges(word_list);
        let start_targets: Vec<Node> = start_edges.iter().map(|e| e.to_node.clone()).collect();

        let edges_from_node = forward_edges(&start_targets, word_list);
        let distances = calculate_distances(&edges_from_node);

        let start_edges: Vec<StartEdge> = start_edges
            .into_iter()
            .filter(|edge| distances.contains_key(&edge.to_node))
            .collect();

        let edges_from_node: HashMap<Node, Vec<Edge>> = edges_from_node
            .into_iter()
            .filter(|(from_node, _)| distances.contains_key(from_node))
            .map(|(from_node, edges)| {
                let edges: Vec<Edge> =
                    edges.into_iter().filter(|edge| distances.contains_key(&edge.to_node)).collect();
                (from_node, edges)
            })
            .collect();

        debug!(
            "built palindrome graph: {} start edges, {} nodes with outgoing edges, {} reachable nodes",
            start_edges.len(),
            edges_from_node.len(),
            distances.len(),
        );

        Self { start_edges, edges_from_node, distances }
    }

    /// The distance (in words) from `node` to the terminal node, if it can
    /// reach it at all within the graph.
    pub fn distance(&self, node: &Node) -> Option<u32> {
        self.distances.get(node).copied()
    }

    /// Outgoing edges from `node`, or an empty slice if it has none.
    pub fn edges_from(&self, node: &Node) -> &[Edge] {
        self.edges_from_node.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_self_palindromic_word_reaches_terminal() {
        let graph = PalindromeGraph::build(&["ala"]);
        assert!(graph.start_edges.iter().any(|e| graph.distance(&e.to_node) == Some(0)));
    }

    #[test]
    fn unreachable_nodes_are_pruned() {
        // "ab" alone can never close into a palindrome with itself repeated,
        // so every node in its graph must be reachable or absent entirely.
        let graph = PalindromeGraph::build(&["ab"]);
        for edges in graph.edges_from_node.values() {
            for edge in edges {
                assert!(graph.distances.contains_key(&edge.to_node));
            }
        }
    }
}
