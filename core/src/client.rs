//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Listing is split into `build_list_todos`, which produces an
//! `HttpRequest`, and `parse_list_todos`, which consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O dependencies.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Record;

/// Query parameter the upstream API uses to cap the number of items.
pub const LIMIT_PARAM: &str = "_limit";

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_todos(&self, limit: usize) -> HttpRequest {
        HttpRequest {
            url: format!("{}/todos", self.base_url),
            query: vec![(LIMIT_PARAM.to_string(), limit.to_string())],
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    /// Decode a list response. Any 2xx is accepted; the body must be a JSON
    /// array of records with every field present.
    pub fn parse_list_todos(
        &self,
        request: &HttpRequest,
        response: HttpResponse,
    ) -> Result<Vec<Record>, ApiError> {
        check_status(request, &response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

fn check_status(request: &HttpRequest, response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        reason: response.reason.clone(),
        url: request.display_url(),
        body: response.body.clone(),
    })
}
