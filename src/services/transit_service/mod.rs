pub mod transit_service;
pub mod types;
