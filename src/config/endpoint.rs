//
//  insightly-rs
//  config/endpoint.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Endpoint Module
//!
//! Defaults for the Insightly API endpoint and the helper that joins a base
//! URL with a version segment.
//!
//! ```rust
//! use insightly::config::{join_endpoint, DEFAULT_API_VERSION, DEFAULT_BASE_URL};
//!
//! assert_eq!(
//!     join_endpoint(DEFAULT_BASE_URL, DEFAULT_API_VERSION),
//!     "https://api.insight.ly/v2.2"
//! );
//! ```

/// Scheme and host of the public Insightly API.
pub const DEFAULT_BASE_URL: &str = "https://api.insight.ly";

/// API version segment used when none is configured.
pub const DEFAULT_API_VERSION: &str = "v2.2";

/// Joins a base URL and a version segment with exactly one slash.
///
/// An empty (or all-slash) version yields the trimmed base URL.
pub fn join_endpoint(base_url: &str, api_version: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let version = api_version.trim().trim_matches('/');

    if version.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_endpoint() {
        assert_eq!(
            join_endpoint("https://api.insight.ly/", "/v2.1/"),
            "https://api.insight.ly/v2.1"
        );
        assert_eq!(
            join_endpoint("http://127.0.0.1:1234", ""),
            "http://127.0.0.1:1234"
        );
        assert_eq!(join_endpoint(" https://x.test ", " v3 "), "https://x.test/v3");
    }
}
