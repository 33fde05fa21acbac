//! Query failures.
//!
//! The feed core never inspects these beyond their display string, so each
//! variant's message is what ends up on screen. `GraphQl` messages pass
//! through verbatim; that is how the API's "404: Not Found" reaches the
//! not-found check unchanged.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    /// Could not reach the endpoint or the connection dropped
    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-2xx response without a GraphQL error body
    #[error("{code}: {reason}")]
    Status { code: u16, reason: String },

    /// The server answered with a GraphQL `errors` entry
    #[error("{0}")]
    GraphQl(String),

    /// Body was not the expected JSON shape
    #[error("Malformed response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Well-formed response without `data.characters.results`
    #[error("Response contained no character data")]
    MissingData,

    /// Request exceeded the configured timeout
    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },
}
