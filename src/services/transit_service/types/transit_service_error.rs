/// Failures talking to the transit API. None of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum TransitServiceError {
    #[error("failed to send request to {endpoint}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("transit API returned {status} for {endpoint}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode response from {endpoint}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}
