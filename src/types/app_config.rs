use crate::services::transit_service::transit_service::TransitServiceConfig;

use super::output_format::OutputFormat;

/// Everything an invocation needs, resolved from flags and environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub transit: TransitServiceConfig,
    pub format: OutputFormat,
}
