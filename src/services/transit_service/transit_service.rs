use serde::de::DeserializeOwned;
use tracing::debug;
use urlencoding::encode;

use super::types::{
    mbta_get_routes_response::GetRoutesResponse,
    mbta_get_stops_for_route_response::GetStopsForRouteResponse,
    transit_service_error::TransitServiceError,
};

pub const DEFAULT_MBTA_HOST: &str = "https://api-v3.mbta.com";

/// Light rail (0) and heavy rail (1).
const SUBWAY_ROUTE_TYPES: &str = "0,1";

#[derive(Clone, Debug)]
pub struct TransitServiceConfig {
    pub host: String,
    pub api_key: Option<String>,
}

impl Default for TransitServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_MBTA_HOST.to_string(),
            api_key: None,
        }
    }
}

#[derive(Clone)]
pub struct TransitService {
    config: TransitServiceConfig,
    client: reqwest::Client,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub id: String,
    pub long_name: String,
}

impl TransitService {
    pub fn new(config: TransitServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// All subway routes, in the order the API lists them.
    pub async fn fetch_routes(&self) -> Result<Vec<Route>, TransitServiceError> {
        let endpoint = format!(
            "/routes?filter[type]={}&fields[route]=long_name",
            SUBWAY_ROUTE_TYPES
        );

        let body = self.get_json::<GetRoutesResponse>(endpoint).await?;

        Ok(body
            .data
            .into_iter()
            .map(|r| Route {
                id: r.id,
                long_name: r.attributes.long_name,
            })
            .collect())
    }

    /// Stop names served by `route_id`, in the order the API lists them.
    pub async fn fetch_stops(&self, route_id: &str) -> Result<Vec<String>, TransitServiceError> {
        let endpoint = format!(
            "/stops?filter[route]={}&fields[stop]=name",
            encode(route_id)
        );

        let body = self.get_json::<GetStopsForRouteResponse>(endpoint).await?;

        Ok(body
            .data
            .into_iter()
            .map(|s| s.attributes.name)
            .collect())
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: String) -> Result<T, TransitServiceError> {
        let mut url = format!("{}{}", self.config.host.trim_end_matches('/'), endpoint);
        if let Some(api_key) = &self.config.api_key {
            url.push_str(&format!("&api_key={}", encode(api_key)));
        }

        debug!("GET {}", endpoint);

        let resp = match self.client.get(&url).send().await {
            Ok(resp) => resp,
            Err(source) => {
                return Err(TransitServiceError::Request {
                    endpoint,
                    source: source.without_url(),
                })
            }
        };

        let status = resp.status();
        if !status.is_success() {
            return Err(TransitServiceError::Status { endpoint, status });
        }

        resp.json::<T>()
            .await
            .map_err(|source| TransitServiceError::Decode {
                endpoint,
                source: source.without_url(),
            })
    }
}
