//! HTTP exchange described as plain data.
//!
//! # Design
//! `CarClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network; `Rest` (or a test) performs the round-trip
//! in between. The split keeps request construction and error translation
//! deterministic. A response body of `None` models the absent-body case,
//! which is meaningful to the parse layer.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An outbound request, ready to be executed.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// A completed exchange, as seen by the parse layer.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    /// `None` when the server sent no body at all.
    pub body: Option<String>,
}
