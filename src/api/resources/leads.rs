//
//  insightly-rs
//  api/resources/leads.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Leads API, plus the lead source and lead status lookup lists.
//!
//! Leads are filtered like contacts ([`LeadQuery`] carries `email`, `tag` and
//! `ids`), and can additionally include or exclude leads that were already
//! converted with `includeConverted`.

use serde_json::{Map, Value};

use crate::api::client::InsightlyClient;
use crate::api::common::Result;
use crate::api::query::LeadQuery;

const LEADS: &str = "/Leads";
const LEAD_SOURCES: &str = "/LeadSources";
const LEAD_STATUSES: &str = "/LeadStatuses";

/// Identifier field of a lead. A positive value makes `add_lead` an update.
pub const LEAD_ID: &str = "LEAD_ID";

/// Identifier field of a lead source.
pub const LEAD_SOURCE_ID: &str = "LEAD_SOURCE_ID";

/// Identifier field of a lead status.
pub const LEAD_STATUS_ID: &str = "LEAD_STATUS_ID";

impl InsightlyClient {
    /// Lists leads matching the query.
    ///
    /// Resource filters (`email`, `tag`, `ids`, `includeConverted`) are sent
    /// before the OData options.
    ///
    /// # Parameters
    ///
    /// * `query` - Lead filters and OData options; [`LeadQuery::new`] for none
    ///
    /// # Returns
    ///
    /// The matching leads as raw JSON objects.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not 200, 201 or
    /// 202, or the body is not a JSON array.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use insightly::api::query::{LeadQuery, QueryOptions};
    /// use insightly::InsightlyClient;
    ///
    /// # async fn example() -> insightly::Result<()> {
    /// let client = InsightlyClient::new("your-api-key")?;
    /// let hot = client
    ///     .leads(
    ///         &LeadQuery::new()
    ///             .tag("hot")
    ///             .include_converted(false)
    ///             .options(QueryOptions::new().top(25)),
    ///     )
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn leads(&self, query: &LeadQuery) -> Result<Vec<Value>> {
        self.list_with(LEADS, query).await
    }

    /// Fetches a single lead.
    ///
    /// # Errors
    ///
    /// A missing lead gives a status error for which
    /// [`is_not_found`](crate::InsightlyError::is_not_found) is `true`.
    pub async fn lead(&self, id: i64) -> Result<Map<String, Value>> {
        self.fetch(&format!("{LEADS}/{id}")).await
    }

    /// Creates a lead, or updates it when the payload has a positive `LEAD_ID`.
    ///
    /// # Parameters
    ///
    /// * `lead` - The lead record; `LAST_NAME` is required for new leads
    ///
    /// # Returns
    ///
    /// The lead as stored by Insightly, including its `LEAD_ID`.
    ///
    /// # Errors
    ///
    /// Insightly answers 400 when required fields are missing.
    pub async fn add_lead(&self, lead: &Value) -> Result<Map<String, Value>> {
        self.upsert(LEADS, LEAD_ID, lead).await
    }

    /// Deletes a lead.
    ///
    /// # Errors
    ///
    /// Returns a status error if the lead does not exist or cannot be deleted.
    pub async fn delete_lead(&self, id: i64) -> Result<()> {
        self.remove(&format!("{LEADS}/{id}")).await
    }

    /// Lists the emails linked to a lead.
    ///
    /// # Parameters
    ///
    /// * `id` - The `LEAD_ID` of the owning lead
    pub async fn lead_emails(&self, id: i64) -> Result<Vec<Value>> {
        self.list(&format!("{LEADS}/{id}/Emails")).await
    }

    /// Lists the notes linked to a lead.
    ///
    /// # Parameters
    ///
    /// * `id` - The `LEAD_ID` of the owning lead
    pub async fn lead_notes(&self, id: i64) -> Result<Vec<Value>> {
        self.list(&format!("{LEADS}/{id}/Notes")).await
    }

    /// Lists the tasks linked to a lead.
    ///
    /// # Parameters
    ///
    /// * `id` - The `LEAD_ID` of the owning lead
    pub async fn lead_tasks(&self, id: i64) -> Result<Vec<Value>> {
        self.list(&format!("{LEADS}/{id}/Tasks")).await
    }

    /// Lists the lead sources configured for the account.
    pub async fn lead_sources(&self) -> Result<Vec<Value>> {
        self.list(LEAD_SOURCES).await
    }

    /// Creates a lead source, or updates it when `LEAD_SOURCE_ID` is positive.
    ///
    /// # Returns
    ///
    /// The stored lead source, including its `LEAD_SOURCE_ID`.
    pub async fn add_lead_source(&self, source: &Value) -> Result<Map<String, Value>> {
        self.upsert(LEAD_SOURCES, LEAD_SOURCE_ID, source).await
    }

    /// Deletes a lead source.
    ///
    /// # Errors
    ///
    /// Returns a status error if the source does not exist.
    pub async fn delete_lead_source(&self, id: i64) -> Result<()> {
        self.remove(&format!("{LEAD_SOURCES}/{id}")).await
    }

    /// Lists the lead statuses configured for the account.
    pub async fn lead_statuses(&self) -> Result<Vec<Value>> {
        self.list(LEAD_STATUSES).await
    }

    /// Creates a lead status, or updates it when `LEAD_STATUS_ID` is positive.
    ///
    /// # Returns
    ///
    /// The stored lead status, including its `LEAD_STATUS_ID`.
    pub async fn add_lead_status(&self, status: &Value) -> Result<Map<String, Value>> {
        self.upsert(LEAD_STATUSES, LEAD_STATUS_ID, status).await
    }

    /// Deletes a lead status.
    ///
    /// # Errors
    ///
    /// Returns a status error if the status does not exist.
    pub async fn delete_lead_status(&self, id: i64) -> Result<()> {
        self.remove(&format!("{LEAD_STATUSES}/{id}")).await
    }
}
