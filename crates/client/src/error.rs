// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy for the JSON request helper.

use std::fmt;

/// Which side of the exchange failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Failure before or during transmission: payload serialization,
    /// connection establishment, or TLS.
    Request,
    /// A response arrived but could not be interpreted.
    Response,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Request => "RequestError",
            Self::Response => "ResponseError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorized failure from [`json_request`](crate::json_request).
///
/// Response errors carry the HTTP status code of the offending response;
/// request errors never have one.
#[derive(Debug, Clone)]
pub enum JsonRequestError {
    Request { message: String },
    Response { message: String, code: u16 },
}

impl JsonRequestError {
    /// Payload serialization failed; no connection was attempted.
    pub(crate) fn stringify(cause: impl fmt::Display) -> Self {
        Self::Request { message: format!("Unable to stringify request data: {cause}") }
    }

    /// Transport-level failure: connect, DNS, TLS handshake, write.
    pub(crate) fn send(cause: impl fmt::Display) -> Self {
        Self::Request { message: format!("Unable to send request: {cause}") }
    }

    /// The response body could not be read or parsed as JSON.
    pub(crate) fn read(cause: impl fmt::Display, code: u16) -> Self {
        Self::Response { message: format!("Unable to read response data: {cause}"), code }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Request { .. } => ErrorKind::Request,
            Self::Response { .. } => ErrorKind::Response,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Request { message } | Self::Response { message, .. } => message,
        }
    }

    /// HTTP status code of the response, present only for response errors.
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::Response { code, .. } => Some(*code),
            Self::Request { .. } => None,
        }
    }
}

impl fmt::Display for JsonRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind(), self.message())
    }
}

impl std::error::Error for JsonRequestError {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
