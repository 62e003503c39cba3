use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the search and delete clients.
///
/// Rate limits and archived-thread responses are absorbed inside the clients and never
/// appear here, except for `RateLimitExhausted` which is only reachable when a retry
/// ceiling has been configured.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request could not be sent or the response body could not be read.
    #[error("Failed to send request to Discord: {0}")]
    Transport(#[from] reqwest::Error),

    /// A body that had to be JSON was missing or malformed.
    #[error("Failed to parse {context} response: {source}")]
    Parse {
        /// Which response was being parsed (search page, rate limit, error body)
        context: &'static str,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Discord answered with a non-success status that is not handled by the client.
    #[error("Discord responded with {status}: {body}")]
    Http {
        /// HTTP status of the response
        status: StatusCode,
        /// Raw response body, lossily decoded
        body: String,
    },

    /// The configured retry ceiling was reached while still being rate limited.
    #[error("Still rate limited after {attempts} attempts (retry_after {retry_after}s)")]
    RateLimitExhausted {
        /// Number of requests sent, including the first one
        attempts: u32,
        /// `retry_after` of the last rate-limit response, in seconds
        retry_after: f64,
    },

    /// The configured API base URL does not form a valid endpoint URL.
    #[error("Invalid Discord API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Wraps a JSON error with the name of the response being parsed.
    pub fn parse(context: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| Self::Parse { context, source }
    }
}
