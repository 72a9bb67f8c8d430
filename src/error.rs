use thiserror::Error;

/// Failure talking to the Twitch token or Helix endpoints.
#[derive(Debug, Error)]
pub enum HelixError {
    /// Transport failure or undecodable body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: u16,
        body: String,
    },
}

pub type HelixResult<T> = Result<T, HelixError>;
