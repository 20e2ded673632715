//! I/O-free core of the todo export.
//!
//! # Overview
//! Builds the list request and parses its response without touching the
//! network (host-does-IO pattern), then reshapes the records into a `Table`
//! that can be written as CSV or rendered as a fixed-width preview.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - The request is split into `build_list_todos` / `parse_list_todos` so the
//!   I/O boundary is explicit and the binary owns timeouts and transport
//!   error classification.
//! - `Record` is defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod table;
pub mod types;

pub use client::TodoClient;
pub use error::{ApiError, ExportError};
pub use http::{HttpRequest, HttpResponse};
pub use table::{Summary, Table, COLUMNS};
pub use types::{Record, Row, Status};
