use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct GetRoutesResponseRouteAttributes {
    pub long_name: String,
}

#[derive(Deserialize, Serialize)]
pub struct GetRoutesResponseRoute {
    #[serde(default)]
    pub id: String,
    pub attributes: GetRoutesResponseRouteAttributes,
}

#[derive(Deserialize, Serialize)]
pub struct GetRoutesResponse {
    pub data: Vec<GetRoutesResponseRoute>,
}
