use crate::services::transit_service::types::transit_service_error::TransitServiceError;

/// Errors that abort a command.
///
/// A query that simply has no answer (no connecting route, no routes to rank)
/// is reported through the command's result instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] TransitServiceError),

    #[error("--{flag} stop {stop} does not exist")]
    UnknownStop { flag: &'static str, stop: String },
}

impl AppError {
    pub fn unknown_stop(flag: &'static str, stop: &str) -> Self {
        AppError::UnknownStop {
            flag,
            stop: stop.to_string(),
        }
    }
}
