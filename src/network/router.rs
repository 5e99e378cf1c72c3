use std::collections::{HashMap, HashSet, VecDeque};

use super::stop_index::AdjacencyGraph;

/// Route to the route it was first reached from.
pub type PredecessorMap = HashMap<String, String>;

/// Breadth-first search from `source` that stops as soon as `destination` is reached.
///
/// Returns the predecessors recorded up to that point, which is enough to walk
/// one shortest path back from `destination`. Returns `None` when the
/// destination is unreachable. Equal endpoints are not special-cased: callers
/// handle the single-route path themselves.
pub fn shortest_path_tree<'a>(
    source: &'a str,
    destination: &str,
    graph: &'a AdjacencyGraph,
) -> Option<PredecessorMap> {
    let mut visited: HashSet<&'a str> = HashSet::with_capacity(graph.len());
    let mut predecessors = PredecessorMap::new();
    let mut queue = VecDeque::new();

    visited.insert(source);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(current) {
            if !visited.insert(neighbor) {
                continue;
            }
            predecessors.insert(neighbor.to_string(), current.to_string());
            queue.push_back(neighbor);

            if neighbor == destination {
                return Some(predecessors);
            }
        }
    }

    None
}

/// Walks `predecessors` from `destination` back to `source`.
///
/// Returns `None` if the chain breaks or loops before reaching `source`.
pub fn reconstruct_path(
    predecessors: &PredecessorMap,
    source: &str,
    destination: &str,
) -> Option<Vec<String>> {
    let mut path = VecDeque::new();
    let mut current = destination;

    while current != source {
        // A well-formed tree never needs more steps than it has entries.
        if path.len() > predecessors.len() {
            return None;
        }
        path.push_front(current.to_string());
        current = predecessors.get(current).map(String::as_str)?;
    }
    path.push_front(source.to_string());

    Some(path.into())
}
