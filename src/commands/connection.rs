use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::{
    network::connect, services::transit_service::transit_service::TransitService,
    utils::app_error::AppError,
};

use super::load_network;

#[derive(Debug, Serialize)]
pub struct ConnectionReport {
    pub from: String,
    pub to: String,
    /// Routes to ride in order, or `None` when the stops are not connected.
    pub routes: Option<Vec<String>>,
}

impl fmt::Display for ConnectionReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.routes {
            Some(routes) => write!(f, "{} to {}: [{}]", self.from, self.to, routes.join(" ")),
            None => write!(f, "No connecting route!"),
        }
    }
}

pub async fn connection(
    service: &TransitService,
    from: &str,
    to: &str,
) -> Result<ConnectionReport, AppError> {
    let index = load_network(service, true).await?;

    let from_routes = &index
        .stops
        .get(from)
        .ok_or_else(|| AppError::unknown_stop("from", from))?
        .routes;
    let to_routes = &index
        .stops
        .get(to)
        .ok_or_else(|| AppError::unknown_stop("to", to))?
        .routes;

    let routes = connect(from_routes, to_routes, &index.adjacency);
    match &routes {
        Some(routes) => info!(from, to, changes = routes.len() - 1, "Found connection"),
        None => info!(from, to, "No connection found"),
    }

    Ok(ConnectionReport {
        from: from.to_string(),
        to: to.to_string(),
        routes,
    })
}
