use std::fmt;

use serde::Serialize;

use crate::{
    services::transit_service::transit_service::TransitService, utils::app_error::AppError,
};

#[derive(Debug, Serialize)]
pub struct RouteStops {
    pub route: String,
    pub stops: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct StopsReport {
    pub stops: Vec<RouteStops>,
}

impl fmt::Display for StopsReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for stop in self.stops.iter().flat_map(|r| &r.stops) {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{}", stop)?;
            first = false;
        }
        Ok(())
    }
}

/// Every route's stops, route by route. Stops on several routes appear once per route.
pub async fn list_stops(service: &TransitService) -> Result<StopsReport, AppError> {
    let mut stops = Vec::new();
    for route in service.fetch_routes().await? {
        stops.push(RouteStops {
            stops: service.fetch_stops(&route.id).await?,
            route: route.long_name,
        });
    }

    Ok(StopsReport { stops })
}
