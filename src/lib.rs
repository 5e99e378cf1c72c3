//! Subway network queries against the MBTA v3 API.
//!
//! Routes are fetched one at a time, indexed by the stops they serve, and
//! linked into a route graph that answers "which lines get me from A to B?".

pub mod app;
pub mod commands;
pub mod network;
pub mod services;
pub mod types;
pub mod utils;
