//
//  insightly-rs
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Request Builder
//!
//! [`InsightlyRequest`] accumulates the pieces of a single HTTP call (verb,
//! path, query parameters, extra headers and body) and materializes them
//! into a `reqwest` request when one of its `as_*` methods is awaited.
//!
//! ## Lifecycle
//!
//! ```text
//! client.get("/Contacts")      Unsent
//!     .top(5)                  Unsent (configure)
//!     .order_by("NAME desc")   Unsent (configure)
//!     .as_json_array().await   Completed | Failed
//! ```
//!
//! The send methods take the builder by value, so a request can only be sent
//! once. There is no retry and no backoff.
//!
//! ## Wire format
//!
//! - Every request carries `Authorization: Basic base64("<api key>:")`
//! - POST and PUT carry `Content-Type: application/json` and the body, if set
//! - GET and DELETE never carry a body
//! - Query names and values are percent-encoded; the `$` of the OData names is kept
//! - `$top` and `$skip` are left out unless strictly positive
//! - Extra headers replace the defaults of the same name; `Authorization` is reserved
//!
//! ## Example
//!
//! ```rust,no_run
//! use insightly::InsightlyClient;
//!
//! # async fn example() -> insightly::Result<()> {
//! let client = InsightlyClient::new("my-api-key")?;
//! let contacts = client
//!     .get("/Contacts")
//!     .top(5)
//!     .order_by("DATE_UPDATED_UTC desc")
//!     .as_json_array()
//!     .await?;
//! println!("{} contacts", contacts.len());
//! # Ok(())
//! # }
//! ```

use std::fmt;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use super::client::{verify_response, InsightlyClient};
use super::common::{InsightlyError, RawResponse, Result};
use super::query::{self, QueryOptions, QueryParams};

const JSON_CONTENT_TYPE: &str = "application/json";

/// The HTTP verbs the Insightly API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Returns the verb as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` for verbs that send a JSON body.
    pub fn carries_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single, not yet sent, Insightly API request.
///
/// Created through [`InsightlyClient::get`], [`InsightlyClient::post`],
/// [`InsightlyClient::put`], [`InsightlyClient::delete`] or
/// [`InsightlyClient::request`]. Configuration methods take and return
/// `self` so calls can be chained.
#[must_use = "a request does nothing until one of its `as_*` methods is awaited"]
#[derive(Debug)]
pub struct InsightlyRequest<'a> {
    client: &'a InsightlyClient,
    method: Method,
    path: String,
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
    body: Option<String>,
}

impl<'a> InsightlyRequest<'a> {
    pub(crate) fn new(client: &'a InsightlyClient, method: Method, path: &str) -> Self {
        let path = if path.is_empty() || path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        Self {
            client,
            method,
            path,
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// The verb this request will be sent with.
    pub fn method(&self) -> Method {
        self.method
    }

    /// The resource path, relative to the client endpoint.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The serialized body, if one was set.
    pub fn body_text(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Appends a query parameter.
    ///
    /// Repeated names are all kept, in call order.
    pub fn query_param(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Appends every parameter produced by a query object.
    pub fn query<Q: QueryParams + ?Sized>(mut self, params: &Q) -> Self {
        self.query.extend(params.query_pairs());
        self
    }

    /// Appends the OData options (`$top`, `$skip`, `$orderby`, `$filter`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use insightly::api::query::QueryOptions;
    /// use insightly::InsightlyClient;
    ///
    /// let client = InsightlyClient::new("key").unwrap();
    /// let url = client
    ///     .get("/Tasks")
    ///     .options(&QueryOptions::new().top(0).skip(20))
    ///     .url();
    /// assert_eq!(url, "https://api.insight.ly/v2.2/Tasks?$skip=20");
    /// ```
    pub fn options(self, options: &QueryOptions) -> Self {
        self.query(options)
    }

    /// Adds an extra request header.
    ///
    /// Names and values are validated when the request is sent. A header
    /// named like one of the defaults (`Accept`, `Content-Type`) replaces
    /// it, and a later call with the same name replaces an earlier one.
    ///
    /// # Errors
    ///
    /// Sending fails with [`InsightlyError::InvalidHeader`] if the name or
    /// value is not valid HTTP, or if the name is `Authorization`, which is
    /// always derived from the API key.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the JSON body. A later call replaces an earlier one.
    pub fn body(mut self, payload: &Value) -> Self {
        self.body = Some(payload.to_string());
        self
    }

    /// Sets an already serialized body. A later call replaces an earlier one.
    pub fn body_raw(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Appends `$top=<n>`. Zero and negative values are ignored.
    pub fn top(self, top: i64) -> Self {
        if top > 0 {
            self.query_param(query::TOP, top)
        } else {
            self
        }
    }

    /// Appends `$skip=<n>`. Zero and negative values are ignored.
    pub fn skip(self, skip: i64) -> Self {
        if skip > 0 {
            self.query_param(query::SKIP, skip)
        } else {
            self
        }
    }

    /// Appends `$orderby=<expr>`.
    pub fn order_by(self, expr: &str) -> Self {
        self.query_param(query::ORDER_BY, expr)
    }

    /// Appends one `$filter=<expr>`.
    pub fn filter(self, expr: &str) -> Self {
        self.query_param(query::FILTER, expr)
    }

    /// Appends one `$filter` parameter per expression, in order.
    pub fn filters<I, S>(mut self, exprs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for expr in exprs {
            self = self.filter(expr.as_ref());
        }
        self
    }

    /// Returns the full URL this request will be sent to.
    ///
    /// ```rust
    /// use insightly::InsightlyClient;
    ///
    /// let client = InsightlyClient::new("key").unwrap();
    /// let url = client.get("/Contacts").top(5).order_by("NAME desc").url();
    /// assert_eq!(
    ///     url,
    ///     "https://api.insight.ly/v2.2/Contacts?$top=5&$orderby=NAME%20desc"
    /// );
    /// ```
    pub fn url(&self) -> String {
        let mut url = format!("{}{}", self.client.endpoint(), self.path);

        if !self.query.is_empty() {
            let query = self
                .query
                .iter()
                .map(|(name, value)| format!("{}={}", encode_name(name), urlencoding::encode(value)))
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query);
        }

        url
    }

    fn build(self) -> Result<reqwest::RequestBuilder> {
        let url = self.url();

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
        if self.method.carries_body() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }

        for (name, value) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| InsightlyError::InvalidHeader(name.clone()))?;
            if header_name == AUTHORIZATION {
                return Err(InsightlyError::InvalidHeader(format!(
                    "{name} is set from the API key"
                )));
            }
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| InsightlyError::InvalidHeader(format!("{name}: {value}")))?;
            headers.insert(header_name, header_value);
        }

        let mut request = self
            .client
            .http()
            .request(self.method.to_reqwest(), url)
            .headers(headers);
        request = self.client.credential().apply_to_request(request);

        if self.method.carries_body() {
            if let Some(body) = self.body {
                request = request.body(body);
            }
        } else if self.body.is_some() {
            debug!(method = %self.method, "Dropping body on a request that carries none");
        }

        Ok(request)
    }

    /// Sends the request and returns the verified body text.
    async fn execute(self) -> Result<String> {
        let method = self.method;
        let path = self.path.clone();
        let request = self.build()?;

        debug!(%method, %path, "Sending Insightly request");
        let response = request.send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        debug!(%method, %path, status = status.as_u16(), "Received Insightly response");

        let verified = verify_response(RawResponse::new(status, headers, body))?;
        Ok(verified.body)
    }

    /// Sends the request and returns the body as text.
    pub async fn as_string(self) -> Result<String> {
        self.execute().await
    }

    /// Sends the request, discarding the body.
    pub async fn send(self) -> Result<()> {
        self.execute().await.map(|_| ())
    }

    /// Sends the request and deserializes the body into `T`.
    pub async fn as_json<T: DeserializeOwned>(self) -> Result<T> {
        let body = self.execute().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Sends the request and returns the body as a JSON object.
    pub async fn as_json_object(self) -> Result<Map<String, Value>> {
        match self.as_json::<Value>().await? {
            Value::Object(object) => Ok(object),
            other => Err(InsightlyError::UnexpectedBody {
                expected: "object",
                found: json_kind(&other),
            }),
        }
    }

    /// Sends the request and returns the body as a JSON array.
    pub async fn as_json_array(self) -> Result<Vec<Value>> {
        match self.as_json::<Value>().await? {
            Value::Array(array) => Ok(array),
            other => Err(InsightlyError::UnexpectedBody {
                expected: "array",
                found: json_kind(&other),
            }),
        }
    }
}

// Percent-encodes a parameter name, leaving the `$` prefix of OData names readable.
fn encode_name(name: &str) -> String {
    urlencoding::encode(name).replace("%24", "$")
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
