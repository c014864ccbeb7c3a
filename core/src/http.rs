//! HTTP transport types and the executor seam.
//!
//! # Design
//! Requests and responses are plain data. The core builds `HttpRequest`
//! values and parses `HttpResponse` values without ever touching the
//! network; a [`Transport`] implementation performs the actual round-trip.
//! This keeps the synchronization logic deterministic and lets tests swap
//! in a scripted transport that records what was sent.

use crate::error::RequestFailed;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `TodoClient::build_*` methods and handed to a [`Transport`]
/// for execution.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a [`Transport`], then passed to `TodoClient::parse_*`
/// methods for status interpretation and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes one HTTP round-trip.
///
/// Implementations must return non-2xx responses as `Ok` data — status
/// interpretation belongs to the parse methods — and reserve `Err` for
/// failures that produced no response at all (connection refused, DNS,
/// broken transfer).
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RequestFailed>;
}
