//! Network-access layer for the car-catalog service.
//!
//! # Overview
//! CRUD operations against the car REST service plus a read-only brand
//! lookup against the FIPE table service, with JSON responses decoded into
//! typed records and failures mapped to a closed [`CarError`] taxonomy.
//!
//! # Design
//! - `CarClient` is stateless — it builds `HttpRequest` values and parses
//!   `HttpResponse` values without touching the network, so the request and
//!   parse logic is fully deterministic and testable.
//! - `Rest` wraps `CarClient` with a shared `reqwest::Client` configured
//!   once (json content-type, 15 s timeout, per-host connection cap) and
//!   exposes the async operations. Each call resolves exactly once.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod rest;
pub mod types;

pub use client::{CarClient, Operation, BRANDS_URL};
pub use error::CarError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use rest::Rest;
pub use types::{Brand, Car};
