//
//  insightly-rs
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Insightly API
//!
//! This module provides the client handle every request goes through. It owns
//! the underlying `reqwest` connection pool, the API key and the endpoint, and
//! hands out [`InsightlyRequest`] builders bound to it.
//!
//! ## Features
//!
//! - Explicitly constructed, injectable handle (no process-wide client)
//! - Basic authentication with the API key on every request
//! - Uniform status verification ([`verify_response`])
//! - Custom User-Agent header
//!
//! ## Lifecycle
//!
//! Create one client at application start, share it by reference for every
//! call, and drop it at shutdown. The client holds no mutable state, so it
//! can be used from several tasks at once.

use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

use super::common::{is_update, InsightlyError, RawResponse, Result};
use super::query::QueryParams;
use super::request::{InsightlyRequest, Method};
use crate::auth::ApiKey;
use crate::config::ClientConfig;

/// Status codes treated as success. Everything else is a failure.
pub const SUCCESS_STATUSES: [StatusCode; 3] =
    [StatusCode::OK, StatusCode::CREATED, StatusCode::ACCEPTED];

/// Returns `true` if the status is one of 200, 201 or 202.
pub fn is_success_status(status: StatusCode) -> bool {
    SUCCESS_STATUSES.contains(&status)
}

/// Checks a captured response against the success statuses.
///
/// Returns the response unchanged for 200, 201 and 202. Any other status,
/// including other 2xx codes, becomes [`InsightlyError::Status`] with the
/// response attached.
///
/// # Example
///
/// ```rust
/// use insightly::api::client::verify_response;
/// use insightly::api::common::RawResponse;
/// use reqwest::header::HeaderMap;
/// use reqwest::StatusCode;
///
/// let ok = RawResponse::new(StatusCode::CREATED, HeaderMap::new(), "{}");
/// assert!(verify_response(ok).is_ok());
///
/// let missing = RawResponse::new(StatusCode::NOT_FOUND, HeaderMap::new(), "");
/// let err = verify_response(missing).unwrap_err();
/// assert_eq!(err.to_string(), "Server returned status code 404");
/// ```
pub fn verify_response(response: RawResponse) -> Result<RawResponse> {
    if is_success_status(response.status) {
        return Ok(response);
    }

    let message = response.server_message().unwrap_or_default();
    warn!(
        status = response.status.as_u16(),
        %message,
        "Insightly request failed"
    );
    Err(InsightlyError::Status(Box::new(response)))
}

/// The client handle for the Insightly REST API.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use insightly::InsightlyClient;
///
/// // Production endpoint (https://api.insight.ly/v2.2)
/// let client = InsightlyClient::new("your-api-key")?;
///
/// // Any other endpoint, e.g. a sandbox or a mock server
/// let sandbox = InsightlyClient::with_endpoint("your-api-key", "http://localhost:8080/v2.2")?;
/// # Ok::<(), insightly::InsightlyError>(())
/// ```
#[derive(Debug, Clone)]
pub struct InsightlyClient {
    /// The underlying HTTP client
    http: Client,
    /// Base endpoint, without a trailing slash
    endpoint: String,
    /// Credential sent with every request
    credential: ApiKey,
}

impl InsightlyClient {
    /// Creates a client for the production endpoint with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(&ClientConfig::default(), api_key)
    }

    /// Creates a client for an explicit endpoint.
    ///
    /// `endpoint` includes the API version, e.g. `https://api.insight.ly/v2.2`.
    pub fn with_endpoint(api_key: impl Into<String>, endpoint: &str) -> Result<Self> {
        Self::build(ApiKey::new(api_key), endpoint, &default_user_agent())
    }

    /// Creates a client from a configuration section.
    ///
    /// The `api_key` argument always wins over any key stored in the config.
    pub fn from_config(config: &ClientConfig, api_key: impl Into<String>) -> Result<Self> {
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(default_user_agent);
        Self::build(ApiKey::new(api_key), &config.endpoint(), &user_agent)
    }

    fn build(credential: ApiKey, endpoint: &str, user_agent: &str) -> Result<Self> {
        Url::parse(endpoint)?;

        let http = Client::builder().user_agent(user_agent).build()?;
        debug!(endpoint, "Created Insightly client");

        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            credential,
        })
    }

    /// Returns the base endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn credential(&self) -> &ApiKey {
        &self.credential
    }

    /// Starts a request with an explicit verb.
    pub fn request(&self, method: Method, path: &str) -> InsightlyRequest<'_> {
        InsightlyRequest::new(self, method, path)
    }

    /// Starts a GET request.
    pub fn get(&self, path: &str) -> InsightlyRequest<'_> {
        self.request(Method::Get, path)
    }

    /// Starts a POST request.
    pub fn post(&self, path: &str) -> InsightlyRequest<'_> {
        self.request(Method::Post, path)
    }

    /// Starts a PUT request.
    pub fn put(&self, path: &str) -> InsightlyRequest<'_> {
        self.request(Method::Put, path)
    }

    /// Starts a DELETE request.
    pub fn delete(&self, path: &str) -> InsightlyRequest<'_> {
        self.request(Method::Delete, path)
    }

    // Shared shapes of the resource facade methods.

    pub(crate) async fn list(&self, path: &str) -> Result<Vec<Value>> {
        self.get(path).as_json_array().await
    }

    pub(crate) async fn list_with<Q: QueryParams + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Vec<Value>> {
        self.get(path).query(query).as_json_array().await
    }

    pub(crate) async fn fetch(&self, path: &str) -> Result<Map<String, Value>> {
        self.get(path).as_json_object().await
    }

    pub(crate) async fn remove(&self, path: &str) -> Result<()> {
        self.delete(path).send().await
    }

    pub(crate) async fn create(&self, path: &str, payload: &Value) -> Result<Map<String, Value>> {
        self.post(path).body(payload).as_json_object().await
    }

    pub(crate) async fn update(&self, path: &str, payload: &Value) -> Result<Map<String, Value>> {
        self.put(path).body(payload).as_json_object().await
    }

    /// Creates or updates a record depending on its own id field.
    pub(crate) async fn upsert(
        &self,
        path: &str,
        id_field: &str,
        payload: &Value,
    ) -> Result<Map<String, Value>> {
        if is_update(payload, id_field) {
            let id = payload.get(id_field).map(ToString::to_string).unwrap_or_default();
            debug!(path, id_field, %id, "Updating existing record");
            self.update(path, payload).await
        } else {
            debug!(path, id_field, "Creating new record");
            self.create(path, payload).await
        }
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", crate::APP_NAME, crate::VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderMap;

    #[test]
    fn test_success_statuses() {
        for code in [200, 201, 202] {
            assert!(is_success_status(StatusCode::from_u16(code).unwrap()));
        }
        for code in [100, 203, 204, 301, 304, 400, 401, 404, 429, 500, 503] {
            assert!(!is_success_status(StatusCode::from_u16(code).unwrap()));
        }
    }

    #[test]
    fn test_verify_response_keeps_body_and_code() {
        let ok = RawResponse::new(StatusCode::ACCEPTED, HeaderMap::new(), "[]");
        assert_eq!(verify_response(ok).unwrap().body, "[]");

        for code in [204, 302, 400, 500] {
            let status = StatusCode::from_u16(code).unwrap();
            let err = verify_response(RawResponse::new(status, HeaderMap::new(), "x"))
                .unwrap_err();
            assert_eq!(err.status(), Some(status));
            assert!(err.to_string().contains(&code.to_string()));
            assert_eq!(err.response().unwrap().body, "x");
        }
    }

    #[test]
    fn test_endpoint_trailing_slash_is_trimmed() {
        let client = InsightlyClient::with_endpoint("key", "https://api.example.com/v2.2/").unwrap();
        assert_eq!(client.endpoint(), "https://api.example.com/v2.2");
    }

    #[test]
    fn test_default_endpoint() {
        let client = InsightlyClient::new("key").unwrap();
        assert_eq!(client.endpoint(), "https://api.insight.ly/v2.2");
    }

    #[test]
    fn test_invalid_endpoint() {
        let err = InsightlyClient::with_endpoint("key", "not a url").unwrap_err();
        assert!(matches!(err, InsightlyError::InvalidUrl(_)));
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let client = InsightlyClient::new("super-secret-key").unwrap();
        assert!(!format!("{client:?}").contains("super-secret-key"));
    }
}
