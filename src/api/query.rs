//
//  insightly-rs
//  api/query.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # OData Query Options
//!
//! Insightly list endpoints accept a small subset of OData query options:
//!
//! | Option | Parameter | Meaning |
//! |--------|-----------|---------|
//! | `top` | `$top` | Maximum number of records to return |
//! | `skip` | `$skip` | Number of records to skip |
//! | `orderby` | `$orderby` | Sort expression, passed through verbatim |
//! | `filters` | `$filter` | Filter expressions, all of which must match |
//!
//! A few collections add their own parameters on top of these:
//!
//! - Contacts: `email`, `tag`, `ids` ([`ContactQuery`])
//! - Leads: `email`, `tag`, `ids`, `includeConverted` ([`LeadQuery`])
//! - Organisations: `domain` ([`OrganizationQuery`])
//!
//! Resource-specific parameters are always emitted before the generic ones,
//! and the generic ones always in the order top, skip, orderby, filters, so
//! identical input gives an identical query string.
//!
//! ## Filter policy
//!
//! Each filter expression becomes its own `$filter` parameter, in input
//! order. They are never joined into one expression client side.
//!
//! ## Example
//!
//! ```rust
//! use insightly::api::query::{QueryOptions, QueryParams};
//!
//! let options = QueryOptions::new()
//!     .top(5)
//!     .order_by("DATE_UPDATED_UTC desc")
//!     .filter("FIRST_NAME eq 'Testy'");
//!
//! let pairs = options.query_pairs();
//! assert_eq!(pairs[0], ("$top".to_string(), "5".to_string()));
//! assert_eq!(pairs.len(), 3);
//! ```

// Reserved OData parameter names
pub const TOP: &str = "$top";
pub const SKIP: &str = "$skip";
pub const ORDER_BY: &str = "$orderby";
pub const FILTER: &str = "$filter";

/// Anything that can be turned into an ordered list of query parameters.
pub trait QueryParams {
    /// Returns the parameters to append, in emission order.
    fn query_pairs(&self) -> Vec<(String, String)>;
}

/// Generic OData options understood by every list endpoint.
///
/// `top` and `skip` are only emitted when strictly positive; `None`, zero
/// and negative values leave the parameter out entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Result-count cap (`$top`).
    pub top: Option<i64>,

    /// Offset into the result set (`$skip`).
    pub skip: Option<i64>,

    /// Sort expression (`$orderby`), e.g. `"LAST_NAME desc"`.
    pub orderby: Option<String>,

    /// Filter expressions (`$filter`), one parameter each.
    pub filters: Vec<String>,
}

impl QueryOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `$top`.
    pub fn top(mut self, top: i64) -> Self {
        self.top = Some(top);
        self
    }

    /// Sets `$skip`.
    pub fn skip(mut self, skip: i64) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Sets `$orderby`.
    pub fn order_by(mut self, expr: impl Into<String>) -> Self {
        self.orderby = Some(expr.into());
        self
    }

    /// Adds one `$filter` expression.
    pub fn filter(mut self, expr: impl Into<String>) -> Self {
        self.filters.push(expr.into());
        self
    }

    /// Adds several `$filter` expressions, keeping their order.
    pub fn filters<I, S>(mut self, exprs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.extend(exprs.into_iter().map(Into::into));
        self
    }

    /// Returns `true` when no parameter would be emitted.
    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

impl QueryParams for QueryOptions {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        if let Some(top) = self.top.filter(|n| *n > 0) {
            pairs.push((TOP.to_string(), top.to_string()));
        }
        if let Some(skip) = self.skip.filter(|n| *n > 0) {
            pairs.push((SKIP.to_string(), skip.to_string()));
        }
        if let Some(orderby) = &self.orderby {
            pairs.push((ORDER_BY.to_string(), orderby.clone()));
        }
        for filter in &self.filters {
            pairs.push((FILTER.to_string(), filter.clone()));
        }

        pairs
    }
}

/// Joins record ids the way the `ids` parameter expects them: `1,2,3`.
fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Parameters shared by the contact and lead collections.
fn push_person_filters(
    pairs: &mut Vec<(String, String)>,
    email: &Option<String>,
    tag: &Option<String>,
    ids: &[i64],
) {
    if let Some(email) = email {
        pairs.push(("email".to_string(), email.clone()));
    }
    if let Some(tag) = tag {
        pairs.push(("tag".to_string(), tag.clone()));
    }
    if !ids.is_empty() {
        pairs.push(("ids".to_string(), join_ids(ids)));
    }
}

/// Query for the `/Contacts` collection.
///
/// # Example
///
/// ```rust
/// use insightly::api::query::{ContactQuery, QueryParams};
///
/// let query = ContactQuery::new().ids([1, 2, 3]);
/// assert_eq!(
///     query.query_pairs(),
///     vec![("ids".to_string(), "1,2,3".to_string())]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactQuery {
    /// Only contacts with this email address.
    pub email: Option<String>,

    /// Only contacts carrying this tag.
    pub tag: Option<String>,

    /// Only contacts with these ids.
    pub ids: Vec<i64>,

    /// Generic OData options, applied after the fields above.
    pub options: QueryOptions,
}

impl ContactQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.ids = ids.into_iter().collect();
        self
    }

    pub fn options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }
}

impl QueryParams for ContactQuery {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_person_filters(&mut pairs, &self.email, &self.tag, &self.ids);
        pairs.extend(self.options.query_pairs());
        pairs
    }
}

/// Query for the `/Leads` collection.
///
/// Same filters as [`ContactQuery`] plus `includeConverted`, which is only
/// sent when explicitly set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadQuery {
    pub email: Option<String>,
    pub tag: Option<String>,
    pub ids: Vec<i64>,

    /// Whether leads already converted to contacts are included.
    pub include_converted: Option<bool>,

    pub options: QueryOptions,
}

impl LeadQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.ids = ids.into_iter().collect();
        self
    }

    pub fn include_converted(mut self, include: bool) -> Self {
        self.include_converted = Some(include);
        self
    }

    pub fn options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }
}

impl QueryParams for LeadQuery {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_person_filters(&mut pairs, &self.email, &self.tag, &self.ids);
        if let Some(include) = self.include_converted {
            pairs.push(("includeConverted".to_string(), include.to_string()));
        }
        pairs.extend(self.options.query_pairs());
        pairs
    }
}

/// Query for the `/Organisations` collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationQuery {
    /// Only organisations with this email/web domain.
    pub domain: Option<String>,

    pub options: QueryOptions,
}

impl OrganizationQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }
}

impl QueryParams for OrganizationQuery {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(domain) = &self.domain {
            pairs.push(("domain".to_string(), domain.clone()));
        }
        pairs.extend(self.options.query_pairs());
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn test_non_positive_paging_is_omitted() {
        for n in [-10, -1, 0] {
            let options = QueryOptions::new().top(n).skip(n);
            assert!(options.query_pairs().is_empty());
            assert!(options.is_empty());
        }

        let options = QueryOptions::new().top(25).skip(50);
        assert_eq!(
            options.query_pairs(),
            vec![pair("$top", "25"), pair("$skip", "50")]
        );
    }

    #[test]
    fn test_filters_are_repeated_in_order() {
        let options = QueryOptions::new()
            .filter("CITY eq 'Paris'")
            .filters(["AGE gt 30", "FIRST_NAME eq 'Ada'"]);

        assert_eq!(
            options.query_pairs(),
            vec![
                pair("$filter", "CITY eq 'Paris'"),
                pair("$filter", "AGE gt 30"),
                pair("$filter", "FIRST_NAME eq 'Ada'"),
            ]
        );
    }

    #[test]
    fn test_generic_order_is_fixed() {
        let options = QueryOptions::new()
            .filter("X eq 1")
            .order_by("NAME desc")
            .skip(2)
            .top(5);

        assert_eq!(
            options.query_pairs(),
            vec![
                pair("$top", "5"),
                pair("$skip", "2"),
                pair("$orderby", "NAME desc"),
                pair("$filter", "X eq 1"),
            ]
        );
    }

    #[test]
    fn test_contact_query_emits_specific_params_first() {
        let query = ContactQuery::new()
            .options(QueryOptions::new().top(3))
            .email("testy@example.com")
            .tag("vip")
            .ids([1, 2, 3]);

        assert_eq!(
            query.query_pairs(),
            vec![
                pair("email", "testy@example.com"),
                pair("tag", "vip"),
                pair("ids", "1,2,3"),
                pair("$top", "3"),
            ]
        );
    }

    #[test]
    fn test_lead_query_include_converted() {
        assert!(LeadQuery::new().query_pairs().is_empty());

        let query = LeadQuery::new().include_converted(true).ids([9]);
        assert_eq!(
            query.query_pairs(),
            vec![pair("ids", "9"), pair("includeConverted", "true")]
        );
    }

    #[test]
    fn test_organization_query_domain() {
        let query = OrganizationQuery::new()
            .domain("example.com")
            .options(QueryOptions::new().order_by("ORGANISATION_NAME"));

        assert_eq!(
            query.query_pairs(),
            vec![
                pair("domain", "example.com"),
                pair("$orderby", "ORGANISATION_NAME"),
            ]
        );
    }
}
