use tracing::trace;

use super::{
    router::{reconstruct_path, shortest_path_tree},
    stop_index::AdjacencyGraph,
};

/// Finds a sequence of routes leading from one of `from_routes` to one of `to_routes`.
///
/// Route pairs are tried in order, outer loop over `from_routes`, and the first
/// pair that connects wins. The result is a shortest path for that pair only,
/// not necessarily the shortest across every pair.
pub fn connect<F, T>(from_routes: &[F], to_routes: &[T], graph: &AdjacencyGraph) -> Option<Vec<String>>
where
    F: AsRef<str>,
    T: AsRef<str>,
{
    for from in from_routes.iter().map(AsRef::as_ref) {
        for to in to_routes.iter().map(AsRef::as_ref) {
            if from == to {
                return Some(vec![from.to_string()]);
            }

            trace!(from, to, "Searching for connection");
            let path = shortest_path_tree(from, to, graph)
                .and_then(|predecessors| reconstruct_path(&predecessors, from, to));
            if path.is_some() {
                return path;
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(&str, &str)]) -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::new();
        for (a, b) in edges {
            graph.add_edge(a, b);
        }
        graph
    }

    #[test]
    fn same_route() {
        let connection = connect(&["Red"], &["Red"], &AdjacencyGraph::new());
        assert_eq!(connection, Some(vec!["Red".to_string()]));
    }

    #[test]
    fn direct_connection() {
        let graph = graph(&[("Red", "Blue")]);
        assert_eq!(
            connect(&["Red"], &["Blue"], &graph),
            Some(vec!["Red".to_string(), "Blue".to_string()])
        );
    }

    #[test]
    fn traversal() {
        let graph = graph(&[("Red", "Green"), ("Green", "Blue"), ("Blue", "Orange")]);
        assert_eq!(
            connect(&["Red"], &["Orange"], &graph).unwrap(),
            vec!["Red", "Green", "Blue", "Orange"]
        );
    }

    #[test]
    fn no_route() {
        let graph = graph(&[("Red", "Green"), ("Green", "Orange")]);
        assert_eq!(connect(&["Red"], &["Blue"], &graph), None);
    }

    #[test]
    fn empty_candidates() {
        let graph = graph(&[("Red", "Green")]);
        assert_eq!(connect::<&str, &str>(&[], &["Green"], &graph), None);
        assert_eq!(connect::<&str, &str>(&["Red"], &[], &graph), None);
    }

    #[test]
    fn first_connecting_pair_wins() {
        // Mattapan -> Red -> Green is longer than Blue -> Green, but Mattapan is tried first.
        let graph = graph(&[
            ("Mattapan", "Red"),
            ("Red", "Green"),
            ("Blue", "Green"),
        ]);

        assert_eq!(
            connect(&["Mattapan", "Blue"], &["Green"], &graph).unwrap(),
            vec!["Mattapan", "Red", "Green"]
        );
    }

    #[test]
    fn identical_route_later_in_inner_loop() {
        let graph = graph(&[("Red", "Orange"), ("Orange", "Blue")]);

        // The search for Blue succeeds before Red is compared with itself.
        assert_eq!(
            connect(&["Red"], &["Blue", "Red"], &graph).unwrap(),
            vec!["Red", "Orange", "Blue"]
        );
        assert_eq!(
            connect(&["Red"], &["Silver", "Red"], &graph).unwrap(),
            vec!["Red"]
        );
    }

    #[test]
    fn falls_through_to_next_source_route() {
        let graph = graph(&[("Orange", "Green"), ("Silver", "Ferry")]);

        assert_eq!(
            connect(&["Silver", "Orange"], &["Green"], &graph).unwrap(),
            vec!["Orange", "Green"]
        );
    }
}
