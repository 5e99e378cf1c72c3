use std::fmt;

use serde::Serialize;

use crate::{
    network::transfer_stations, services::transit_service::transit_service::TransitService,
    utils::app_error::AppError,
};

use super::load_network;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TransferStation {
    pub name: String,
    pub routes: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TransfersReport {
    pub stations: Vec<TransferStation>,
}

impl fmt::Display for TransfersReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Stops with transfers:")?;
        for station in &self.stations {
            write!(f, "\n   {}: [{}]", station.name, station.routes.join(" "))?;
        }
        Ok(())
    }
}

pub async fn transfers(service: &TransitService) -> Result<TransfersReport, AppError> {
    let index = load_network(service, false).await?;

    let stations = transfer_stations(&index.stops)
        .map(|stop| TransferStation {
            name: stop.name.clone(),
            routes: stop.routes.clone(),
        })
        .collect();

    Ok(TransfersReport { stations })
}
