// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Async JSON-over-HTTP(S) request helper.
//!
//! One operation: [`json_request`] serializes a payload to JSON, sends it
//! per [`RequestOptions`], reads the full response body, and parses it back
//! as JSON. Failures are categorized by [`JsonRequestError`]: request-side
//! (serialization, connect, TLS) vs response-side (unparsable body). The
//! HTTP status code alone never causes a failure — a non-2xx response with
//! a valid JSON body still resolves, and interpreting it is the caller's
//! business.

pub mod error;
pub mod options;
pub mod request;

pub use error::{ErrorKind, JsonRequestError};
pub use options::{RequestOptions, Scheme};
pub use request::json_request;
