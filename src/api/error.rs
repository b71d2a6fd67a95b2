use thiserror::Error;

/// A request to the sensor backend that could not produce a usable body.
///
/// Every variant is treated alike by the loaders: logged once, and the
/// loader's state is reset to its empty value.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse JSON response from {url}")]
    JsonParse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
