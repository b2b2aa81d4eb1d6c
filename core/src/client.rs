//! Stateless request builder and response parser for the car-catalog API.
//!
//! # Design
//! `CarClient` holds only the two service urls and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an [`HttpRequest`] and a `parse_*` method that consumes an
//! [`HttpResponse`], so the I/O boundary stays explicit and everything here
//! is testable without a network.
//!
//! Response classification runs in a fixed priority order: absent body,
//! then non-200 status, then decode failure. Each check returns
//! immediately; a classified failure is never followed by a decode attempt.

use crate::error::CarError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Brand, Car};

/// Fixed url of the FIPE brand-lookup service. Lives on a different host
/// than the car service.
pub const BRANDS_URL: &str = "https://fipeapi.appspot.com/api/1/carros/marcas.json";

/// The mutation intent handed to [`CarClient::build_apply`]. Selects the
/// HTTP method; nothing else about the request varies by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Save,
    Update,
    Delete,
}

impl Operation {
    fn method(self) -> HttpMethod {
        match self {
            Operation::Save => HttpMethod::Post,
            Operation::Update => HttpMethod::Put,
            Operation::Delete => HttpMethod::Delete,
        }
    }
}

/// Stateless builder/parser for the car-catalog API.
#[derive(Debug, Clone)]
pub struct CarClient {
    base_url: String,
    brands_url: String,
}

impl CarClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            brands_url: BRANDS_URL.to_string(),
        }
    }

    /// Point the brand lookup somewhere other than the fixed FIPE url.
    /// Used by tests to aim at a local server.
    pub fn with_brands_url(mut self, url: &str) -> Self {
        self.brands_url = url.to_string();
        self
    }

    pub fn build_load_cars(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/cars", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Shared builder for the three mutation operations.
    ///
    /// The target url is plain string concatenation of the cars path, `/`,
    /// and the car's id — or the empty string when the id is absent, which
    /// leaves a trailing-slash path like `{base}/cars/`. That is the
    /// observable behavior of the service contract for id-less cars and is
    /// deliberately not second-guessed here.
    pub fn build_apply(&self, car: &Car, operation: Operation) -> Result<HttpRequest, CarError> {
        let url = format!("{}/cars/{}", self.base_url, car.id.as_deref().unwrap_or(""));
        let body =
            serde_json::to_string(car).map_err(|e| CarError::TaskError(e.to_string()))?;
        Ok(HttpRequest {
            method: operation.method(),
            url,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// `None` means the configured brand url does not parse as a url at
    /// all; the caller reports success-with-absent for that case. With the
    /// compile-time constant this never triggers.
    pub fn build_load_brands(&self) -> Option<HttpRequest> {
        url::Url::parse(&self.brands_url).ok()?;
        Some(HttpRequest {
            method: HttpMethod::Get,
            url: self.brands_url.clone(),
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn parse_load_cars(&self, response: HttpResponse) -> Result<Vec<Car>, CarError> {
        let body = require_body(&response)?;
        check_status(&response)?;
        serde_json::from_str(body).map_err(|e| CarError::InvalidJson(e.to_string()))
    }

    /// Mutation responses carry no payload the layer cares about: exactly
    /// HTTP 200 is success, anything else is reported with its code.
    pub fn parse_apply(&self, response: HttpResponse) -> Result<(), CarError> {
        check_status(&response)
    }

    pub fn parse_load_brands(&self, response: HttpResponse) -> Result<Vec<Brand>, CarError> {
        let body = require_body(&response)?;
        check_status(&response)?;
        serde_json::from_str(body).map_err(|e| CarError::InvalidJson(e.to_string()))
    }
}

fn require_body(response: &HttpResponse) -> Result<&str, CarError> {
    match response.body.as_deref() {
        Some(body) if !body.is_empty() => Ok(body),
        _ => Err(CarError::NoData),
    }
}

fn check_status(response: &HttpResponse) -> Result<(), CarError> {
    if response.status == 200 {
        return Ok(());
    }
    Err(CarError::ResponseStatusCode(response.status))
}
