use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::{
    services::transit_service::transit_service::TransitService, utils::app_error::AppError,
};

#[derive(Debug, Serialize)]
pub struct RoutesReport {
    pub routes: Vec<String>,
}

impl fmt::Display for RoutesReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Available subway routes: {}", self.routes.join(", "))
    }
}

pub async fn list_routes(service: &TransitService) -> Result<RoutesReport, AppError> {
    let routes = service
        .fetch_routes()
        .await?
        .into_iter()
        .map(|r| r.long_name)
        .collect::<Vec<String>>();

    info!(count = routes.len(), "Fetched subway routes");

    Ok(RoutesReport { routes })
}
