/// Error types shared across the banner tool crates.
///
/// These errors represent failures in the HTTP layer (transport, unexpected
/// statuses, undecodable payloads) that are common to any client of a Banner
/// self-service instance. Application-specific errors should be defined in
/// each binary crate and wrap `CommonError` via `#[from]`.

#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    #[error("http transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub use reqwest::StatusCode;
