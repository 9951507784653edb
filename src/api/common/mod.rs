//
//  insightly-rs
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Common API Types for the Insightly client
//!
//! This module provides the error taxonomy shared by the request builder and
//! every resource facade method, plus the captured response that a failed
//! status check hands back to the caller.
//!
//! # Overview
//!
//! - [`InsightlyError`] - Unified error type for all API operations
//! - [`RawResponse`] - Status, headers and body of a response, kept for inspection
//! - [`Result`] - Crate-wide result alias
//! - Record helpers (re-exported from the [`record`] submodule)
//!
//! # Example
//!
//! ```rust
//! use insightly::api::common::InsightlyError;
//!
//! fn describe(err: &InsightlyError) -> &'static str {
//!     if err.is_unreachable() {
//!         "Insightly could not be reached"
//!     } else if err.is_not_found() {
//!         "No such record"
//!     } else if err.is_server_error() {
//!         "Insightly is having trouble"
//!     } else {
//!         "Request failed"
//!     }
//! }
//! ```

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use thiserror::Error;

mod record;

pub use record::*;

/// Result alias used by every API operation in this crate.
pub type Result<T> = std::result::Result<T, InsightlyError>;

/// Unified error type for all Insightly API operations.
///
/// # Variants
///
/// | Variant | Description | HTTP Status |
/// |---------|-------------|-------------|
/// | `Transport` | DNS, connect, TLS or timeout failure | N/A |
/// | `Status` | Server answered with a non-success status | anything but 200/201/202 |
/// | `Json` | Body could not be parsed as the requested JSON type | 200/201/202 |
/// | `UnexpectedBody` | Body was JSON, but not the requested shape | 200/201/202 |
/// | `InvalidUrl` | The configured endpoint is not a valid URL | N/A |
/// | `InvalidHeader` | An extra header name or value is not valid HTTP | N/A |
///
/// # Notes
///
/// - `Transport` converts automatically from `reqwest::Error`
/// - `Status` keeps the whole [`RawResponse`] so callers can look at the body
#[derive(Error, Debug)]
pub enum InsightlyError {
    /// A network-level error occurred during the request.
    ///
    /// The underlying `reqwest::Error` identifies the transport problem.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server returned a status code outside the success set.
    #[error("Server returned status code {}", .0.status.as_u16())]
    Status(Box<RawResponse>),

    /// The response body was not valid JSON for the requested type.
    #[error("Invalid JSON in response: {0}")]
    Json(#[from] serde_json::Error),

    /// The response body was valid JSON of the wrong shape.
    #[error("Expected a JSON {expected} in response, found {found}")]
    UnexpectedBody {
        /// The shape the accessor asked for (`object` or `array`).
        expected: &'static str,
        /// The shape actually received.
        found: &'static str,
    },

    /// The configured endpoint could not be parsed.
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// An extra header could not be converted into a valid HTTP header.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

impl InsightlyError {
    /// Returns the HTTP status code for status failures.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status(response) => Some(response.status),
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Returns `true` if the server answered and the response was captured.
    pub fn has_response(&self) -> bool {
        self.response().is_some()
    }

    /// Returns the captured response of a status failure.
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            Self::Status(response) => Some(response),
            _ => None,
        }
    }

    /// Returns `true` for a captured 5xx response.
    pub fn is_server_error(&self) -> bool {
        self.response()
            .map(|r| r.status.is_server_error())
            .unwrap_or(false)
    }

    /// Returns `true` for a captured 4xx response.
    pub fn is_client_error(&self) -> bool {
        self.response()
            .map(|r| r.status.is_client_error())
            .unwrap_or(false)
    }

    /// Returns `true` for a captured 404 response.
    pub fn is_not_found(&self) -> bool {
        self.response()
            .map(|r| r.status == StatusCode::NOT_FOUND)
            .unwrap_or(false)
    }

    /// Returns `true` when the server could not be reached at all.
    ///
    /// Covers connection failures and timeouts reported by the transport.
    pub fn is_unreachable(&self) -> bool {
        match self {
            Self::Transport(err) => err.is_connect() || err.is_timeout(),
            _ => false,
        }
    }
}

/// A response captured after a failed status check.
///
/// The body has already been read off the wire, so the value can be kept,
/// cloned and inspected after the request is gone.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// The HTTP status returned by the server.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// The response body as text. Empty when the server sent none.
    pub body: String,
}

impl RawResponse {
    /// Creates a captured response.
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Extracts a human readable message from an Insightly error body.
    ///
    /// Insightly reports failures as `{"Message": "..."}`; some gateways use
    /// a lowercase `message` key instead. Returns `None` if neither is present.
    pub fn server_message(&self) -> Option<String> {
        let json: serde_json::Value = serde_json::from_str(&self.body).ok()?;
        json.get("Message")
            .or_else(|| json.get("message"))
            .and_then(|m| m.as_str())
            .map(|m| m.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(code: u16, body: &str) -> InsightlyError {
        let status = StatusCode::from_u16(code).unwrap();
        InsightlyError::Status(Box::new(RawResponse::new(status, HeaderMap::new(), body)))
    }

    #[test]
    fn test_status_error_message_carries_code() {
        let err = status_error(404, "");
        assert_eq!(err.to_string(), "Server returned status code 404");
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn test_predicates() {
        let not_found = status_error(404, "");
        assert!(not_found.has_response());
        assert!(not_found.is_not_found());
        assert!(not_found.is_client_error());
        assert!(!not_found.is_server_error());
        assert!(!not_found.is_unreachable());

        let unavailable = status_error(503, "");
        assert!(unavailable.is_server_error());
        assert!(!unavailable.is_not_found());

        let redirect = status_error(302, "");
        assert!(!redirect.is_server_error());
        assert!(!redirect.is_client_error());
    }

    #[test]
    fn test_json_error_has_no_response() {
        let err: InsightlyError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert!(!err.has_response());
        assert!(err.status().is_none());
    }

    #[test]
    fn test_server_message() {
        let err = status_error(400, r#"{"Message": "FIRST_NAME is required"}"#);
        assert_eq!(
            err.response().unwrap().server_message().as_deref(),
            Some("FIRST_NAME is required")
        );

        let plain = status_error(500, "Internal Server Error");
        assert!(plain.response().unwrap().server_message().is_none());
    }
}
