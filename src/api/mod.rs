//
//  insightly-rs
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client for the Insightly REST API (v2.2).
//!
//! ## Architecture
//!
//! - [`client`]: The client handle, status verification and shared request shapes
//! - [`request`]: The chainable request builder and its send methods
//! - [`query`]: OData options and per-resource query parameters
//! - [`resources`]: One method per Insightly endpoint
//! - [`common`]: Error types and record helpers
//!
//! ## Usage
//!
//! ### High-level calls
//!
//! ```rust,no_run
//! use insightly::api::query::QueryOptions;
//! use insightly::InsightlyClient;
//!
//! # async fn example() -> insightly::Result<()> {
//! let client = InsightlyClient::new("your-api-key")?;
//! let open = client
//!     .opportunities(&QueryOptions::new().top(20).filter("OPPORTUNITY_STATE eq 'OPEN'"))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Raw requests
//!
//! ```rust,no_run
//! use insightly::InsightlyClient;
//!
//! # async fn example() -> insightly::Result<()> {
//! let client = InsightlyClient::new("your-api-key")?;
//! let body = client
//!     .get("/Contacts")
//!     .top(5)
//!     .order_by("DATE_UPDATED_UTC desc")
//!     .as_string()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`InsightlyError`]. Only 200, 201 and 202 count as
//! success; any other status becomes [`InsightlyError::Status`] and keeps
//! the captured response for inspection.

/// The client handle and response verification.
pub mod client;

/// Error types and record helpers.
pub mod common;

/// OData query options and resource-specific filters.
pub mod query;

/// The request builder.
pub mod request;

/// Insightly endpoints as methods on [`InsightlyClient`].
pub mod resources;

pub use client::InsightlyClient;
pub use common::{InsightlyError, RawResponse};
pub use request::{InsightlyRequest, Method};
