use indexmap::IndexMap;
use serde::Serialize;

use super::ordered_set::OrderedSet;

/// A stop and every route that serves it, in the order the routes were indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopRecord {
    pub name: String,
    pub routes: Vec<String>,
}

impl StopRecord {
    fn new(name: &str) -> Self {
        StopRecord {
            name: name.to_string(),
            routes: Vec::new(),
        }
    }

    pub fn is_transfer(&self) -> bool {
        self.routes.len() > 1
    }
}

/// Stop name to stop record, iterated in the order stops were first seen.
pub type StopIndex = IndexMap<String, StopRecord>;

/// Undirected graph of routes, connected when they share at least one stop.
///
/// Every edge is stored in both directions, so `A` lists `B` iff `B` lists `A`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    routes: IndexMap<String, OrderedSet<String>>,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connects two routes. Self-edges and repeated edges are ignored.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        if a == b {
            return;
        }
        self.routes
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string());
        self.routes
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string());
    }

    /// Neighbors of `route` in discovery order. Unknown routes have none.
    pub fn neighbors<'a>(&'a self, route: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.routes
            .get(route)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter())
            .map(String::as_str)
    }

    pub fn contains_route(&self, route: &str) -> bool {
        self.routes.contains_key(route)
    }

    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Number of routes with at least one neighbor.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Output of [`IndexBuilder::finish`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkIndex {
    pub stops: StopIndex,
    pub adjacency: AdjacencyGraph,
}

/// Incrementally indexes routes as their stop lists arrive.
///
/// Edges are discovered while stops are recorded: when a stop already
/// belongs to other routes, the route being added is linked to each of them.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    stops: StopIndex,
    adjacency: Option<AdjacencyGraph>,
}

impl IndexBuilder {
    /// Builder that only records stop memberships.
    pub fn stops_only() -> Self {
        IndexBuilder {
            stops: StopIndex::new(),
            adjacency: None,
        }
    }

    /// Builder that also records route adjacency.
    pub fn with_adjacency() -> Self {
        IndexBuilder {
            stops: StopIndex::new(),
            adjacency: Some(AdjacencyGraph::new()),
        }
    }

    pub fn add_route<I, S>(&mut self, route: &str, stops: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for stop in stops {
            let stop = stop.as_ref();
            let record = self
                .stops
                .entry(stop.to_string())
                .or_insert_with(|| StopRecord::new(stop));

            if record.routes.last().map(String::as_str) != Some(route) {
                record.routes.push(route.to_string());
            }

            if let Some(adjacency) = self.adjacency.as_mut() {
                for other in &record.routes {
                    adjacency.add_edge(other, route);
                }
            }
        }
    }

    pub fn finish(self) -> NetworkIndex {
        NetworkIndex {
            stops: self.stops,
            adjacency: self.adjacency.unwrap_or_default(),
        }
    }
}
