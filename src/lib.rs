//
//  insightly-rs
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Insightly API Client
//!
//! An async client library for the Insightly CRM REST API (v2.2).
//!
//! ## Overview
//!
//! Every call goes through one explicitly constructed [`InsightlyClient`].
//! It authenticates with the account's API key, builds the request from a
//! chainable [`InsightlyRequest`](api::InsightlyRequest), checks the
//! response status and hands back parsed JSON.
//!
//! ## Features
//!
//! - **Request builder**: verb, path, headers, body and OData options
//!   (`$top`, `$skip`, `$orderby`, `$filter`) in one chain
//! - **Resource facade**: a method per Insightly endpoint, from contacts and
//!   leads to pipelines and team members
//! - **Create or update**: `add_*` methods choose `PUT` or `POST` from the
//!   record's own id
//! - **Typed errors**: transport, status and JSON failures are distinct
//!   [`InsightlyError`] variants
//!
//! ## Module Structure
//!
//! - [`api`]: Client, request builder, query options and resources
//! - [`auth`]: API key handling and Basic authentication
//! - [`config`]: Configuration file management
//! - [`smoke`]: Live smoke test used by the `insightly-smoke` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use insightly::api::query::{ContactQuery, QueryOptions};
//! use insightly::InsightlyClient;
//!
//! # async fn example() -> insightly::Result<()> {
//! let client = InsightlyClient::new("your-api-key")?;
//!
//! let contacts = client
//!     .contacts(
//!         &ContactQuery::new()
//!             .tag("customer")
//!             .options(QueryOptions::new().top(10).order_by("LAST_NAME")),
//!     )
//!     .await?;
//!
//! for contact in &contacts {
//!     println!("{}", contact["LAST_NAME"]);
//! }
//! # Ok(())
//! # }
//! ```

/// HTTP client, request builder and resource methods for the Insightly API.
pub mod api;

/// API key handling.
///
/// Insightly uses HTTP Basic authentication with the API key as the
/// username and an empty password.
pub mod auth;

/// Configuration file management.
///
/// Settings live in platform-specific locations:
/// - Linux: `~/.config/insightly/config.toml`
/// - macOS: `~/Library/Application Support/insightly/config.toml`
/// - Windows: `%APPDATA%\insightly\config\config.toml`
pub mod config;

/// Live smoke test against a real account.
pub mod smoke;

/// Re-export of the client handle.
pub use api::client::InsightlyClient;

/// Re-export of the error type and result alias.
pub use api::common::{InsightlyError, Result};

/// Re-export of the configuration struct.
pub use config::Config;

/// Library name, used in the default User-Agent.
pub const APP_NAME: &str = "insightly-rs";

/// Library version, derived from Cargo.toml at compile time.
///
/// ```rust
/// use insightly::VERSION;
///
/// assert!(!VERSION.is_empty());
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the `insightly-smoke` binary.
///
/// # Example
///
/// ```rust,no_run
/// use insightly::exit_codes;
/// use std::process;
///
/// process::exit(exit_codes::USAGE);
/// ```
pub mod exit_codes {
    /// Every check passed.
    pub const SUCCESS: i32 = 0;

    /// At least one check failed, or the run could not start.
    pub const ERROR: i32 = 1;

    /// No API key was given.
    ///
    /// Pass the key as the first argument or set `INSIGHTLY_API_KEY`.
    pub const USAGE: i32 = 2;
}
