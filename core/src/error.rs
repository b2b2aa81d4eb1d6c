//! Error taxonomy for the car-catalog access layer.
//!
//! # Design
//! A closed set: every failure the layer can report lands in exactly one
//! variant, and translation short-circuits — once a failure is classified,
//! no decode attempt follows. Construction failures (bad target url, body
//! serialization) flow through the same channel as transport failures
//! rather than a separate soft-failure path.

use std::fmt;

/// Errors reported by the car-catalog access layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarError {
    /// The response carried no body where one was required.
    NoData,

    /// The target url was malformed, or the request was torn down before a
    /// response could be produced.
    Url,

    /// The request timed out without a response.
    NoResponse,

    /// The server answered with a non-200 status.
    ResponseStatusCode(u16),

    /// The response body could not be decoded into the expected shape.
    InvalidJson(String),

    /// Any other underlying transport or serialization failure.
    TaskError(String),
}

impl fmt::Display for CarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarError::NoData => write!(f, "server returned no data"),
            CarError::Url => write!(f, "invalid request url"),
            CarError::NoResponse => write!(f, "server did not respond in time"),
            CarError::ResponseStatusCode(code) => {
                write!(f, "server answered with status {code}")
            }
            CarError::InvalidJson(msg) => write!(f, "response is not valid JSON: {msg}"),
            CarError::TaskError(msg) => write!(f, "request failed: {msg}"),
        }
    }
}

impl std::error::Error for CarError {}
