//! Executes the core's list request with ureq and classifies failures.
//!
//! # Design
//! Every way the fetch can fail fatally is a `FetchError` variant, so the
//! binary maps them to a message and exit code in one place. A 2xx body
//! that does not decode is not a fetch failure; it surfaces as
//! `RunError::Other`.

use std::io;

use thiserror::Error;
use todo_export_core::{ApiError, HttpRequest, HttpResponse, Record, TodoClient};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::RunError;

#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS failure, refused or reset connection, unreachable host.
    #[error("could not connect: {0}")]
    Connect(String),

    /// No complete response within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Any other client-side failure (bad URL, TLS, protocol).
    #[error("{0}")]
    Transport(String),
}

impl FetchError {
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Map an error from `call()` onto the fetch taxonomy. No response
    /// exists yet, so any I/O failure other than a timeout (resolver
    /// included) means the server was never reached.
    pub fn from_call(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Io(e) if !is_timeout(&e) => FetchError::Connect(e.to_string()),
            other => Self::classify(other),
        }
    }

    /// Map a transport error from ureq onto the fetch taxonomy.
    pub fn classify(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Timeout(t) => FetchError::Timeout(t.to_string()),
            ureq::Error::HostNotFound | ureq::Error::ConnectionFailed => FetchError::Connect(err.to_string()),
            ureq::Error::Io(e) if is_timeout(&e) => FetchError::Timeout(e.to_string()),
            ureq::Error::Io(e) => match e.kind() {
                io::ErrorKind::ConnectionRefused
                | io::ErrorKind::ConnectionReset
                | io::ErrorKind::ConnectionAborted
                | io::ErrorKind::NotConnected
                | io::ErrorKind::AddrNotAvailable
                | io::ErrorKind::HostUnreachable
                | io::ErrorKind::NetworkUnreachable => FetchError::Connect(e.to_string()),
                _ => FetchError::Transport(e.to_string()),
            },
            other => FetchError::Transport(other.to_string()),
        }
    }
}

fn is_timeout(e: &io::Error) -> bool {
    matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
}

fn agent(config: &Config) -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(Some(config.timeout))
        .build()
        .new_agent()
}

/// Execute an `HttpRequest` and return an `HttpResponse`.
///
/// 4xx/5xx come back as data so the core client interprets the status.
pub fn execute(agent: &ureq::Agent, req: &HttpRequest) -> Result<HttpResponse, FetchError> {
    let mut builder = agent.get(&req.url);
    for (key, value) in &req.query {
        builder = builder.query(key, value);
    }
    for (key, value) in &req.headers {
        builder = builder.header(key, value);
    }
    let mut response = builder.call().map_err(FetchError::from_call)?;

    let status = response.status();
    let body = response.body_mut().read_to_string().map_err(FetchError::classify)?;
    debug!(status = status.as_u16(), bytes = body.len(), "response received");

    Ok(HttpResponse {
        status: status.as_u16(),
        reason: status.canonical_reason().map(str::to_string),
        body,
    })
}

/// One GET for the first `config.limit` todos.
pub fn fetch_todos(config: &Config, client: &TodoClient, req: &HttpRequest) -> Result<Vec<Record>, RunError> {
    info!(url = %req.display_url(), timeout_ms = config.timeout.as_millis() as u64, "fetching todos");

    let response = execute(&agent(config), req).inspect_err(|e| warn!(error = %e, "fetch failed"))?;
    match client.parse_list_todos(req, response) {
        Ok(records) => {
            info!(records = records.len(), "todos received");
            Ok(records)
        }
        Err(err @ ApiError::HttpError { .. }) => {
            warn!(error = %err, "upstream returned an error status");
            let status = err.status().unwrap_or_default();
            Err(FetchError::Status {
                status,
                message: err.to_string(),
            }
            .into())
        }
        Err(err) => Err(RunError::Other(anyhow::Error::new(err).context("decoding todo list"))),
    }
}
