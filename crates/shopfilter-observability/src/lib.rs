//! Observability for shop filter requests.
//!
//! This crate provides:
//! - `RequestId` - Unique identifier correlating every log line of one request
//! - `StructuredLogger` - Structured logging with request context

mod logging;
mod request_id;

pub use logging::*;
pub use request_id::RequestId;
