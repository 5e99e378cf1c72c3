pub mod mbta_get_routes_response;
pub mod mbta_get_stops_for_route_response;
pub mod transit_service_error;
