use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct GetStopsForRouteResponseStopAttributes {
    pub name: String,
}

#[derive(Deserialize, Serialize)]
pub struct GetStopsForRouteResponseStop {
    #[serde(default)]
    pub id: String,
    pub attributes: GetStopsForRouteResponseStopAttributes,
}

#[derive(Deserialize, Serialize)]
pub struct GetStopsForRouteResponse {
    pub data: Vec<GetStopsForRouteResponseStop>,
}
