//! Graph construction: start edges, forward edges, and the distance oracle.
//!
//! These free functions mirror the original implementation's
//! `get_start_edges` / `get_edges` / `calculate_distances`, generalized to
//! work over `&str` dictionary slices instead of Python lists.

use std::collections::{HashMap, HashSet, VecDeque};

use super::elements::{reverse, sign, slice_by_offset, Edge, Node, StartEdge};

/// Enumerates every start edge reachable from `word_list`.
///
/// For every word `W` and every signed offset `o` in `[-L, L)` (`L =
/// len(W)`), splits the case-folded word by `o`; if the matching part is
/// itself palindromic, a start edge `(W, Node(tail, o))` exists.
pub fn start_edges<'w>(word_list: &[&'w str]) -> Vec<StartEdge> {
    let mut edges = Vec::new();
    for &word in word_list {
        let lower = word.to_lowercase();
        let length = lower.len() as i32;
        for offset in -length..length {
            let (matching_part, tail) = slice_by_offset(&lower, offset);
            if reverse(matching_part) == matching_part {
                edges.push(StartEdge { word: word.to_string(), to_node: Node::new(tail, offset) });
            }
        }
    }
    edges
}

/// Attempts to build the edge from `from_node` via `word` (already
/// case-folded). Returns `None` if appending `word` does not yield a valid
/// palindrome-fragment node.
///
/// This is the matching rule from spec.md §4.2: splits on whether the new
/// word crosses the palindrome's midline, then checks that the two
/// "matching parts" are reverses of each other.
pub fn try_extend(from_node: &Node, lower_word: &str) -> Option<Node> {
    let word_length = lower_word.len() as i32;
    let to_offset = from_node.offset - sign(from_node.offset) * word_length;
    let word_offset = -sign(to_offset) * word_length;

    let (to_tail, tail_matching, word_matching): (&str, &str, &str);
    if sign(from_node.offset) == sign(to_offset) {
        let (tail, tail_match) = slice_by_offset(&from_node.tail, word_offset);
        to_tail = tail;
        tail_matching = tail_match;
        word_matching = lower_word;
    } else {
        let (tail, word_match) = slice_by_offset(lower_word, from_node.offset);
        to_tail = tail;
        word_matching = word_match;
        tail_matching = &from_node.tail;
    }

    if reverse(tail_matching) == word_matching {
        Some(Node::new(to_tail, to_offset))
    } else {
        None
    }
}

/// Performs the reachability traversal that builds every forward edge.
///
/// Starting from the set of start-edge targets, repeatedly tries every
/// dictionary word against each frontier node, following spec.md §4.3. The
/// returned map groups edges by their `from_node`; nodes unreachable from
/// any start edge never appear.
pub fn forward_edges(
    start_targets: &[Node],
    word_list: &[&str],
) -> HashMap<Node, Vec<Edge>> {
    let lower_words: Vec<(String, String)> =
        word_list.iter().map(|&w| (w.to_string(), w.to_lowercase())).collect();

    let mut edges_from_node: HashMap<Node, Vec<Edge>> = HashMap::new();
    let mut visited: HashSet<Node> = start_targets.iter().cloned().collect();
    let mut stack: Vec<Node> = start_targets.to_vec();

    while let Some(from_node) = stack.pop() {
        for (word, lower) in &lower_words {
            if let Some(to_node) = try_extend(&from_node, lower) {
                edges_from_node
                    .entry(from_node.clone())
                    .or_default()
                    .push(Edge { word: word.clone(), to_node: to_node.clone() });
                if visited.insert(to_node.clone()) {
                    stack.push(to_node);
                }
            }
        }
    }

    edges_from_node
}

/// Computes the minimum number of edges from every node to the terminal
/// node, via a FIFO BFS relaxation over the reversed edge graph (spec.md
/// §4.4 — the original uses a priority queue, but all edges are unit
/// weight, so plain BFS suffices and avoids the wasted log factor).
pub fn calculate_distances(edges_from_node: &HashMap<Node, Vec<Edge>>) -> HashMap<Node, u32> {
    let mut from_nodes_by_to_node: HashMap<Node, Vec<Node>> = HashMap::new();
    for (from_node, edges) in edges_from_node {
        for edge in edges {
            from_nodes_by_to_node.entry(edge.to_node.clone()).or_default().push(from_node.clone());
        }
    }

    let terminal = Node::terminal();
    let mut distances: HashMap<Node, u32> = HashMap::new();
    distances.insert(terminal.clone(), 0);

    let mut queue: VecDeque<(Node, u32)> = VecDeque::new();
    queue.push_back((terminal, 0));

    while let Some((node, distance)) = queue.pop_front() {
        let next_distance = distance + 1;
        if let Some(predecessors) = from_nodes_by_to_node.get(&node) {
            for predecessor in predecessors {
                let improves = match distances.get(predecessor) {
                    None => true,
                    Some(&existing) => existing > next_distance,
                };
                if improves {
                    distances.insert(predecessor.clone(), next_distance);
                    queue.push_back((predecessor.clone(), next_distance));
                }
            }
        }
    }

    distances
}
