use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::{
    network::{self, Extremum},
    services::transit_service::transit_service::TransitService,
    utils::app_error::AppError,
};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RouteStopCount {
    pub name: String,
    pub stop_count: usize,
}

#[derive(Debug, Serialize)]
pub struct StopCountReport {
    pub extremum: Extremum,
    /// `None` when there were no routes to rank.
    pub route: Option<RouteStopCount>,
}

impl fmt::Display for StopCountReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.route {
            Some(route) => write!(
                f,
                "The {} route is: {} with {} stops",
                self.extremum, route.name, route.stop_count
            ),
            None => write!(f, "No {} subway route found", self.extremum),
        }
    }
}

/// Counts each route's stops and keeps the route at the requested extreme.
///
/// A failed stop fetch fails the whole command rather than counting as zero stops.
pub async fn route_by_stop_count(
    service: &TransitService,
    extremum: Extremum,
) -> Result<StopCountReport, AppError> {
    let mut counts = Vec::new();
    for route in service.fetch_routes().await? {
        let stop_count = service.fetch_stops(&route.id).await?.len();
        debug!(route = %route.long_name, stop_count, "Counted stops");
        counts.push((route.long_name, stop_count));
    }

    let route = network::route_by_stop_count(counts, extremum)
        .map(|(name, stop_count)| RouteStopCount { name, stop_count });

    Ok(StopCountReport { extremum, route })
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::{
        app::gen_mock_app,
        commands::{Command, Report},
    };

    async fn run(extremum: Extremum, stops: &[(&str, &str, &[&str])]) -> StopCountReport {
        let mut mock_app = gen_mock_app().await;
        let routes: Vec<(&str, &str)> = stops.iter().map(|(id, name, _)| (*id, *name)).collect();
        let _routes = mock_app.mock_routes(&routes).await;
        let mut stop_mocks = Vec::new();
        for (id, _, route_stops) in stops {
            stop_mocks.push(mock_app.mock_stops(id, route_stops).await);
        }

        match mock_app
            .app
            .execute(&Command::RouteByStopCount(extremum))
            .await
            .unwrap()
        {
            Report::StopCount(report) => report,
            other => panic!("unexpected report {other:?}"),
        }
    }

    #[tokio::test]
    async fn single_route() {
        let report = run(Extremum::Most, &[("Red", "Red Line", &["s1", "s2"])]).await;
        assert_eq!(
            report.route,
            Some(RouteStopCount {
                name: "Red Line".to_string(),
                stop_count: 2,
            })
        );
    }

    #[tokio::test]
    #[traced_test]
    async fn longest_and_shortest() {
        let network: &[(&str, &str, &[&str])] = &[
            ("Red", "Red Line", &["stop1", "stop2"]),
            ("Orange", "Orange Line", &["stop1"]),
        ];

        let longest = run(Extremum::Most, network).await;
        assert_eq!(longest.to_string(), "The longest route is: Red Line with 2 stops");

        let shortest = run(Extremum::Fewest, network).await;
        assert_eq!(
            shortest.to_string(),
            "The shortest route is: Orange Line with 1 stops"
        );
        assert!(logs_contain("Counted stops"));
    }

    #[tokio::test]
    async fn no_routes() {
        let report = run(Extremum::Fewest, &[]).await;
        assert_eq!(report.route, None);
        assert_eq!(report.to_string(), "No shortest subway route found");
    }

    #[tokio::test]
    async fn test_stop_fetch_failure_propagates() {
        let mut mock_app = gen_mock_app().await;
        let _routes = mock_app.mock_routes(&[("Red", "Red Line")]).await;
        let _stops = mock_app
            .mbta_server
            .mock("GET", "/stops")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let err = mock_app
            .app
            .execute(&Command::RouteByStopCount(Extremum::Most))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Fetch(_)));
    }
}
