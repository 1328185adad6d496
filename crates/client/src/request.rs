// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `json_request` operation: serialize, send, parse.

use std::sync::Once;

use serde::Serialize;

use crate::error::JsonRequestError;
use crate::options::RequestOptions;

static CRYPTO_INIT: Once = Once::new();

/// reqwest's rustls backend needs a process-level crypto provider before a
/// client can be built, even for plain-HTTP requests.
/// Safe to call multiple times — only the first call has effect.
fn ensure_crypto_provider() {
    CRYPTO_INIT.call_once(|| {
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

/// Send `payload` as a JSON body per `options` and parse the response body
/// as JSON.
///
/// The body is parsed regardless of HTTP status code; a non-2xx response
/// with valid JSON resolves, and only unparsable bodies fail (as
/// [`JsonRequestError::Response`], carrying the status code). Serialization
/// and transport failures fail as [`JsonRequestError::Request`]. A
/// serialization failure short-circuits before any connection is opened.
///
/// Each call is exactly one network attempt with its own connection scope;
/// dropping the returned future releases the connection.
pub async fn json_request<T: Serialize + ?Sized>(
    options: &RequestOptions,
    payload: &T,
) -> Result<serde_json::Value, JsonRequestError> {
    let body = serde_json::to_string(payload).map_err(|e| JsonRequestError::stringify(e))?;

    ensure_crypto_provider();
    let mut builder = reqwest::Client::builder();
    if !options.reject_unauthorized {
        builder = builder.danger_accept_invalid_certs(true);
    }
    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build().map_err(|e| JsonRequestError::send(e))?;

    let url = options.url();
    tracing::debug!(method = %options.method, url = %url, "sending json request");

    let mut request = client
        .request(options.method.clone(), &url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body);
    for (name, value) in &options.headers {
        request = request.header(name, value);
    }

    let response = request.send().await.map_err(|e| {
        tracing::debug!(url = %url, err = %e, "transport failure");
        JsonRequestError::send(e)
    })?;

    let code = response.status().as_u16();
    let bytes = response.bytes().await.map_err(|e| {
        tracing::debug!(url = %url, code, err = %e, "failed reading response body");
        JsonRequestError::read(e, code)
    })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        tracing::debug!(url = %url, code, err = %e, "unparsable response body");
        JsonRequestError::read(e, code)
    })
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
