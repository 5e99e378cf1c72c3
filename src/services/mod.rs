pub mod transit_service;
