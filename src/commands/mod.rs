use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::{
    network::{Extremum, IndexBuilder, NetworkIndex},
    services::transit_service::transit_service::TransitService,
    utils::app_error::AppError,
};

mod connection;
mod list_routes;
mod list_stops;
mod route_by_stop_count;
mod transfers;

pub use connection::ConnectionReport;
pub use list_routes::RoutesReport;
pub use list_stops::{RouteStops, StopsReport};
pub use route_by_stop_count::{RouteStopCount, StopCountReport};
pub use transfers::{TransferStation, TransfersReport};

/// One query against the subway network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ListStops,
    ListRoutes,
    RouteByStopCount(Extremum),
    Transfers,
    Connection { from: String, to: String },
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Report {
    Stops(StopsReport),
    Routes(RoutesReport),
    StopCount(StopCountReport),
    Transfers(TransfersReport),
    Connection(ConnectionReport),
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Report::Stops(r) => write!(f, "{r}"),
            Report::Routes(r) => write!(f, "{r}"),
            Report::StopCount(r) => write!(f, "{r}"),
            Report::Transfers(r) => write!(f, "{r}"),
            Report::Connection(r) => write!(f, "{r}"),
        }
    }
}

pub async fn apply_command(
    service: &TransitService,
    command: &Command,
) -> Result<Report, AppError> {
    Ok(match command {
        Command::ListStops => Report::Stops(list_stops::list_stops(service).await?),
        Command::ListRoutes => Report::Routes(list_routes::list_routes(service).await?),
        Command::RouteByStopCount(extremum) => Report::StopCount(
            route_by_stop_count::route_by_stop_count(service, *extremum).await?,
        ),
        Command::Transfers => Report::Transfers(transfers::transfers(service).await?),
        Command::Connection { from, to } => {
            Report::Connection(connection::connection(service, from, to).await?)
        }
    })
}

/// Fetches every subway route's stops, one route at a time, and indexes them.
async fn load_network(
    service: &TransitService,
    with_adjacency: bool,
) -> Result<NetworkIndex, AppError> {
    let routes = service.fetch_routes().await?;

    let mut builder = if with_adjacency {
        IndexBuilder::with_adjacency()
    } else {
        IndexBuilder::stops_only()
    };
    for route in &routes {
        let stops = service.fetch_stops(&route.id).await?;
        builder.add_route(&route.long_name, &stops);
    }

    let index = builder.finish();
    info!(
        routes = routes.len(),
        stops = index.stops.len(),
        "Indexed subway network"
    );
    Ok(index)
}
