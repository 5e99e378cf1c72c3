use crate::{
    commands::{apply_command, Command, Report},
    services::transit_service::transit_service::TransitService,
    types::{
        app_config::AppConfig,
        output_format::{render, OutputFormat},
    },
    utils::app_error::AppError,
};

pub struct App {
    transit_service: TransitService,
    format: OutputFormat,
}

impl App {
    pub async fn execute(&self, command: &Command) -> Result<Report, AppError> {
        apply_command(&self.transit_service, command).await
    }

    pub fn render(&self, report: &Report) -> Result<String, serde_json::Error> {
        render(report, self.format)
    }
}

pub fn gen_app(config: AppConfig) -> App {
    App {
        transit_service: TransitService::new(config.transit),
        format: config.format,
    }
}

#[cfg(test)]
pub struct MockApp {
    pub app: App,
    pub mbta_server: mockito::ServerGuard,
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    use crate::services::transit_service::transit_service::TransitServiceConfig;

    let mbta_server = mockito::Server::new_async().await;

    let app = gen_app(AppConfig {
        transit: TransitServiceConfig {
            host: mbta_server.url(),
            api_key: Some("key".to_string()),
        },
        format: OutputFormat::Text,
    });

    MockApp { app, mbta_server }
}

#[cfg(test)]
impl MockApp {
    /// Serves `routes` as `(id, long name)` pairs.
    pub async fn mock_routes(&mut self, routes: &[(&str, &str)]) -> mockito::Mock {
        use crate::services::transit_service::types::mbta_get_routes_response::{
            GetRoutesResponse, GetRoutesResponseRoute, GetRoutesResponseRouteAttributes,
        };

        let mock_response = GetRoutesResponse {
            data: routes
                .iter()
                .map(|(id, long_name)| GetRoutesResponseRoute {
                    id: id.to_string(),
                    attributes: GetRoutesResponseRouteAttributes {
                        long_name: long_name.to_string(),
                    },
                })
                .collect(),
        };

        self.mbta_server
            .mock("GET", "/routes")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("filter[type]".to_string(), "0,1".to_string()),
                mockito::Matcher::UrlEncoded("api_key".to_string(), "key".to_string()),
            ]))
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_response).unwrap())
            .create_async()
            .await
    }

    /// Serves the stop names for one route id.
    pub async fn mock_stops(&mut self, route_id: &str, stops: &[&str]) -> mockito::Mock {
        use crate::services::transit_service::types::mbta_get_stops_for_route_response::{
            GetStopsForRouteResponse, GetStopsForRouteResponseStop,
            GetStopsForRouteResponseStopAttributes,
        };

        let mock_response = GetStopsForRouteResponse {
            data: stops
                .iter()
                .map(|name| GetStopsForRouteResponseStop {
                    id: format!("place-{}", name.to_lowercase().replace(' ', "-")),
                    attributes: GetStopsForRouteResponseStopAttributes {
                        name: name.to_string(),
                    },
                })
                .collect(),
        };

        self.mbta_server
            .mock("GET", "/stops")
            .match_query(mockito::Matcher::UrlEncoded(
                "filter[route]".to_string(),
                route_id.to_string(),
            ))
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_response).unwrap())
            .create_async()
            .await
    }
}
