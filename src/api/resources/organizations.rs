//
//  insightly-rs
//  api/resources/organizations.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Organisations API.
//!
//! Insightly spells the collection `Organisations` and the id field
//! `ORGANISATION_ID`; the Rust methods use the American spelling. The list
//! can be narrowed by `domain` through [`OrganizationQuery`].
//!
//! # Endpoints
//!
//! | Method | Path |
//! |--------|------|
//! | [`organizations`](InsightlyClient::organizations) | `GET /Organisations` |
//! | [`organization`](InsightlyClient::organization) | `GET /Organisations/{id}` |
//! | [`add_organization`](InsightlyClient::add_organization) | `POST /Organisations` or `PUT /Organisations` |
//! | [`delete_organization`](InsightlyClient::delete_organization) | `DELETE /Organisations/{id}` |
//! | [`organization_emails`](InsightlyClient::organization_emails) | `GET /Organisations/{id}/Emails` |
//! | [`organization_notes`](InsightlyClient::organization_notes) | `GET /Organisations/{id}/Notes` |
//! | [`organization_tasks`](InsightlyClient::organization_tasks) | `GET /Organisations/{id}/Tasks` |

use serde_json::{Map, Value};

use crate::api::client::InsightlyClient;
use crate::api::common::Result;
use crate::api::query::OrganizationQuery;

const ORGANISATIONS: &str = "/Organisations";

/// Identifier field of an organisation. A positive value makes
/// `add_organization` an update.
pub const ORGANISATION_ID: &str = "ORGANISATION_ID";

impl InsightlyClient {
    /// Lists organisations matching the query.
    ///
    /// # Parameters
    ///
    /// * `query` - OData options plus an optional `domain` filter
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not 200, 201 or
    /// 202, or the body is not a JSON array.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use insightly::api::query::OrganizationQuery;
    /// use insightly::InsightlyClient;
    ///
    /// # async fn example() -> insightly::Result<()> {
    /// let client = InsightlyClient::new("your-api-key")?;
    /// let matches = client
    ///     .organizations(&OrganizationQuery::new().domain("example.com"))
    ///     .await?;
    /// println!("{} organisations on example.com", matches.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn organizations(&self, query: &OrganizationQuery) -> Result<Vec<Value>> {
        self.list_with(ORGANISATIONS, query).await
    }

    /// Fetches a single organisation.
    pub async fn organization(&self, id: i64) -> Result<Map<String, Value>> {
        self.fetch(&format!("{ORGANISATIONS}/{id}")).await
    }

    /// Creates an organisation, or updates it when `ORGANISATION_ID` is positive.
    ///
    /// # Parameters
    ///
    /// * `organization` - The organisation record; `ORGANISATION_NAME` is
    ///   required for new organisations
    ///
    /// # Returns
    ///
    /// The organisation as stored by Insightly, including its `ORGANISATION_ID`.
    pub async fn add_organization(&self, organization: &Value) -> Result<Map<String, Value>> {
        self.upsert(ORGANISATIONS, ORGANISATION_ID, organization).await
    }

    /// Deletes an organisation.
    ///
    /// # Errors
    ///
    /// Returns a status error if the organisation does not exist.
    pub async fn delete_organization(&self, id: i64) -> Result<()> {
        self.remove(&format!("{ORGANISATIONS}/{id}")).await
    }

    /// Lists the emails linked to an organisation.
    ///
    /// # Parameters
    ///
    /// * `id` - The `ORGANISATION_ID` of the owning organisation
    pub async fn organization_emails(&self, id: i64) -> Result<Vec<Value>> {
        self.list(&format!("{ORGANISATIONS}/{id}/Emails")).await
    }

    /// Lists the notes linked to an organisation.
    ///
    /// # Parameters
    ///
    /// * `id` - The `ORGANISATION_ID` of the owning organisation
    pub async fn organization_notes(&self, id: i64) -> Result<Vec<Value>> {
        self.list(&format!("{ORGANISATIONS}/{id}/Notes")).await
    }

    /// Lists the tasks linked to an organisation.
    ///
    /// # Parameters
    ///
    /// * `id` - The `ORGANISATION_ID` of the owning organisation
    pub async fn organization_tasks(&self, id: i64) -> Result<Vec<Value>> {
        self.list(&format!("{ORGANISATIONS}/{id}/Tasks")).await
    }
}
