//
//  insightly-rs
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Insightly authenticates every request with HTTP Basic authentication:
//! the API key is the username and the password is empty. There is no
//! session, no token exchange and nothing to refresh.
//!
//! ## Finding Your API Key
//!
//! 1. Sign in to Insightly
//! 2. Open "User Settings" from the profile menu
//! 3. Copy the key shown under "API Key"
//!
//! ## Example
//!
//! ```rust
//! use insightly::auth::{resolve_api_key, ApiKey};
//!
//! let key = resolve_api_key(Some("  test-key\n".to_string()), None).unwrap();
//! assert_eq!(key, ApiKey::new("test-key"));
//!
//! // A blank or malformed key is treated as no key at all.
//! assert!(resolve_api_key(Some(String::new()), Some("fallback".to_string())).is_none());
//! ```
//!
//! ## Security Best Practices
//!
//! - Never commit API keys to version control
//! - Prefer the `INSIGHTLY_API_KEY` environment variable over the config file
//! - Regenerate the key from Insightly if it leaks

use std::fmt;

use reqwest::RequestBuilder;

/// An Insightly API key.
///
/// The `Debug` implementation never prints the key itself.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a raw API key. Surrounding whitespace is removed.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().trim().to_string())
    }

    /// Returns the raw key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Adds the Basic credential to an outgoing request.
    ///
    /// The key is the username and the password is empty, so the header
    /// reads `Basic base64("<key>:")`. The header is marked sensitive and
    /// is never printed by `reqwest`'s debug output.
    ///
    /// # Parameters
    ///
    /// - `request`: The [`RequestBuilder`] to authenticate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use insightly::auth::ApiKey;
    /// use reqwest::header::AUTHORIZATION;
    /// use reqwest::Client;
    ///
    /// let request = ApiKey::new("test-key")
    ///     .apply_to_request(Client::new().get("https://api.insight.ly/v2.2/Users/Me"))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(request.headers()[AUTHORIZATION], "Basic dGVzdC1rZXk6");
    /// ```
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(&self.0, Some(""))
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"<redacted>").finish()
    }
}

/// Validates the format of an API key.
///
/// A key must be non-empty and must not contain whitespace. This does not
/// check the key against Insightly.
///
/// ```rust
/// use insightly::auth::validate_api_key;
///
/// assert!(validate_api_key("8d7a3f1c-1234-4bcd-9a0b-2f3e4d5c6b7a"));
/// assert!(!validate_api_key(""));
/// assert!(!validate_api_key("two words"));
/// ```
pub fn validate_api_key(key: &str) -> bool {
    !key.is_empty() && !key.chars().any(char::is_whitespace)
}

/// Picks the API key to use from an explicit value and a configured fallback.
///
/// The explicit key (command line or environment) wins whenever it is
/// given, even if it turns out to be malformed. Surrounding whitespace is
/// ignored.
///
/// # Returns
///
/// `None` when no key was given, or when the chosen key fails
/// [`validate_api_key`].
pub fn resolve_api_key(explicit: Option<String>, configured: Option<String>) -> Option<ApiKey> {
    let key = ApiKey::new(explicit.or(configured)?);
    validate_api_key(key.as_str()).then_some(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD, Engine};
    use reqwest::header::AUTHORIZATION;

    fn authorization(key: &ApiKey) -> reqwest::header::HeaderValue {
        let request = key
            .apply_to_request(reqwest::Client::new().get("https://api.example.com/v2.2/Users"))
            .build()
            .unwrap();
        request.headers()[AUTHORIZATION].clone()
    }

    #[test]
    fn test_authorization_header_has_empty_password() {
        let header = authorization(&ApiKey::new("abc123"));
        let encoded = header
            .to_str()
            .unwrap()
            .strip_prefix("Basic ")
            .unwrap()
            .to_string();
        let decoded = String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap();
        assert_eq!(decoded, "abc123:");
    }

    #[test]
    fn test_authorization_header_is_sensitive() {
        assert!(authorization(&ApiKey::new("abc123")).is_sensitive());
    }

    #[test]
    fn test_key_is_trimmed() {
        assert_eq!(ApiKey::new("  abc \n").as_str(), "abc");
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = ApiKey::new("very-secret");
        assert!(!format!("{key:?}").contains("very-secret"));
    }

    #[test]
    fn test_validate_api_key() {
        assert!(validate_api_key("abc"));
        assert!(!validate_api_key(" "));
        assert!(!validate_api_key("a\tb"));
    }

    #[test]
    fn test_resolve_prefers_explicit_key() {
        let key = resolve_api_key(Some("cli".into()), Some("config".into()));
        assert_eq!(key, Some(ApiKey::new("cli")));

        let key = resolve_api_key(None, Some(" config ".into()));
        assert_eq!(key, Some(ApiKey::new("config")));

        assert_eq!(resolve_api_key(None, None), None);
    }

    #[test]
    fn test_resolve_rejects_blank_or_malformed_keys() {
        assert_eq!(resolve_api_key(Some(String::new()), None), None);
        assert_eq!(resolve_api_key(Some("   ".into()), Some("config".into())), None);
        assert_eq!(resolve_api_key(Some("two words".into()), None), None);
        assert_eq!(resolve_api_key(None, Some("a\tb".into())), None);
    }
}
