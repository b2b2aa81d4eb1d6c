//! Async executor over the shared HTTP client.
//!
//! # Design
//! `Rest` owns one `reqwest::Client`, configured once at construction and
//! never mutated afterwards: a default `Content-Type: application/json`
//! header, a 15-second request timeout and at most 5 pooled connections per
//! host. `reqwest::Client` is an `Arc` internally, so `Rest` clones are
//! cheap and the one configuration is shared by every concurrent call.
//!
//! Each operation is a build → execute → parse pipeline over [`CarClient`]
//! and resolves exactly once, from the caller's perspective a plain future
//! yielding `Result`.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::client::{CarClient, Operation};
use crate::error::CarError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Brand, Car};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const MAX_CONNECTIONS_PER_HOST: usize = 5;

/// Async car-catalog API client with a shared, immutable configuration.
#[derive(Debug, Clone)]
pub struct Rest {
    http: reqwest::Client,
    client: CarClient,
}

impl Rest {
    /// Build the shared HTTP client and aim it at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, CarError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .pool_max_idle_per_host(MAX_CONNECTIONS_PER_HOST)
            .build()
            .map_err(|e| CarError::TaskError(e.to_string()))?;
        Ok(Self {
            http,
            client: CarClient::new(base_url),
        })
    }

    /// Point the brand lookup at a non-default url. Used by tests.
    pub fn with_brands_url(mut self, url: &str) -> Self {
        self.client = self.client.with_brands_url(url);
        self
    }

    /// Fetch the full car list, in server order.
    pub async fn load_cars(&self) -> Result<Vec<Car>, CarError> {
        let req = self.client.build_load_cars();
        let resp = self.execute(req).await?;
        self.client.parse_load_cars(resp)
    }

    /// Create `car` on the server. The car carries no id; the server
    /// assigns one.
    pub async fn save(&self, car: &Car) -> Result<(), CarError> {
        self.apply(car, Operation::Save).await
    }

    /// Replace the server's copy of `car`, addressed by its id.
    pub async fn update(&self, car: &Car) -> Result<(), CarError> {
        self.apply(car, Operation::Update).await
    }

    /// Remove `car` from the server, addressed by its id.
    pub async fn delete(&self, car: &Car) -> Result<(), CarError> {
        self.apply(car, Operation::Delete).await
    }

    /// Fetch the brand table from the lookup service. `Ok(None)` when the
    /// configured lookup url does not parse at all.
    pub async fn load_brands(&self) -> Result<Option<Vec<Brand>>, CarError> {
        let Some(req) = self.client.build_load_brands() else {
            return Ok(None);
        };
        let resp = self.execute(req).await?;
        self.client.parse_load_brands(resp).map(Some)
    }

    async fn apply(&self, car: &Car, operation: Operation) -> Result<(), CarError> {
        let req = self.client.build_apply(car, operation)?;
        let resp = self.execute(req).await?;
        self.client.parse_apply(resp)
    }

    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, CarError> {
        let url = reqwest::Url::parse(&req.url).map_err(|_| CarError::Url)?;
        let mut builder = match req.method {
            HttpMethod::Get => self.http.get(url),
            HttpMethod::Post => self.http.post(url),
            HttpMethod::Put => self.http.put(url),
            HttpMethod::Delete => self.http.delete(url),
        };
        for (name, value) in &req.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = req.body {
            builder = builder.body(body);
        }
        let response = builder.send().await.map_err(translate)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(translate)?;
        Ok(HttpResponse {
            status,
            body: if text.is_empty() { None } else { Some(text) },
        })
    }
}

/// Classify a transport failure. Runs once per exchange and returns the
/// first matching category; status checks on completed exchanges happen in
/// the parse layer instead.
fn translate(e: reqwest::Error) -> CarError {
    if e.is_builder() {
        return CarError::Url;
    }
    if e.is_timeout() {
        return CarError::NoResponse;
    }
    if let Some(status) = e.status() {
        return CarError::ResponseStatusCode(status.as_u16());
    }
    CarError::TaskError(e.to_string())
}
