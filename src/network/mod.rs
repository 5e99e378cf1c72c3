//! Route network built from stop lists: which routes serve each stop, which
//! routes share a stop, and how to chain routes from one stop to another.

mod connection;
mod ordered_set;
mod router;
mod stop_index;
mod stop_queries;

pub use connection::connect;
pub use ordered_set::OrderedSet;
pub use router::{reconstruct_path, shortest_path_tree, PredecessorMap};
pub use stop_index::{AdjacencyGraph, IndexBuilder, NetworkIndex, StopIndex, StopRecord};
pub use stop_queries::{route_by_stop_count, transfer_stations, Extremum};
