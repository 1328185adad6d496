// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Connection parameters for a single JSON request.

use std::time::Duration;

use reqwest::Method;

/// Transport selection for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn default_port(&self) -> u16 {
        match self {
            Self::Http => 80,
            Self::Https => 443,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

/// Connection and transport parameters for [`json_request`](crate::json_request).
///
/// Every field has a usable default; a bare `RequestOptions::default()`
/// targets `https://localhost/` with `POST`. A missing leading `/` on
/// `path` is supplied when the URL is assembled.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub scheme: Scheme,
    pub host: String,
    /// Port to connect to. `None` uses the scheme default (80/443).
    pub port: Option<u16>,
    pub path: String,
    pub method: Method,
    /// Extra request headers as name/value pairs.
    pub headers: Vec<(String, String)>,
    /// Verify the server certificate chain. Disable to accept self-signed
    /// certificates.
    pub reject_unauthorized: bool,
    /// Overall request timeout. `None` means no deadline.
    pub timeout: Option<Duration>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            scheme: Scheme::Https,
            host: "localhost".to_owned(),
            port: None,
            path: "/".to_owned(),
            method: Method::POST,
            headers: Vec::new(),
            reject_unauthorized: true,
            timeout: None,
        }
    }
}

impl RequestOptions {
    /// Full request URL. The port is elided when it matches the scheme
    /// default, and a missing leading `/` on the path is supplied.
    pub fn url(&self) -> String {
        let mut url = format!("{}://{}", self.scheme.as_str(), self.host);
        if let Some(port) = self.port {
            if port != self.scheme.default_port() {
                url.push_str(&format!(":{port}"));
            }
        }
        if !self.path.starts_with('/') {
            url.push('/');
        }
        url.push_str(&self.path);
        url
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
