//
//  insightly-rs
//  api/resources/opportunities.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Opportunities API.
//!
//! Opportunities are potential deals. Apart from the usual linked emails,
//! notes and tasks they keep a history of state changes
//! ([`opportunity_state_history`](InsightlyClient::opportunity_state_history)).
//! The reasons a user can pick when changing state are listed by
//! [`opportunity_state_reasons`](InsightlyClient::opportunity_state_reasons).
//!
//! # Example
//!
//! ```rust,no_run
//! use insightly::api::query::QueryOptions;
//! use insightly::InsightlyClient;
//!
//! # async fn example() -> insightly::Result<()> {
//! let client = InsightlyClient::new("your-api-key")?;
//! let open = client
//!     .opportunities(
//!         &QueryOptions::new()
//!             .filter("OPPORTUNITY_STATE eq 'OPEN'")
//!             .order_by("BID_AMOUNT desc"),
//!     )
//!     .await?;
//! for deal in &open {
//!     println!("{} {}", deal["OPPORTUNITY_NAME"], deal["BID_AMOUNT"]);
//! }
//! # Ok(())
//! # }
//! ```

use serde_json::{Map, Value};

use crate::api::client::InsightlyClient;
use crate::api::common::Result;
use crate::api::query::QueryOptions;

const OPPORTUNITIES: &str = "/Opportunities";
const OPPORTUNITY_STATE_REASONS: &str = "/OpportunityStateReasons";

/// Identifier field of an opportunity. A positive value makes `add_opportunity` an update.
pub const OPPORTUNITY_ID: &str = "OPPORTUNITY_ID";

impl InsightlyClient {
    /// Lists opportunities.
    ///
    /// # Parameters
    ///
    /// * `options` - OData options; [`QueryOptions::new`] for none
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not 200, 201 or
    /// 202, or the body is not a JSON array.
    pub async fn opportunities(&self, options: &QueryOptions) -> Result<Vec<Value>> {
        self.list_with(OPPORTUNITIES, options).await
    }

    /// Fetches a single opportunity.
    pub async fn opportunity(&self, id: i64) -> Result<Map<String, Value>> {
        self.fetch(&format!("{OPPORTUNITIES}/{id}")).await
    }

    /// Creates an opportunity, or updates it when `OPPORTUNITY_ID` is positive.
    ///
    /// # Parameters
    ///
    /// * `opportunity` - The opportunity record; `OPPORTUNITY_NAME` is
    ///   required for new opportunities
    ///
    /// # Returns
    ///
    /// The opportunity as stored by Insightly, including its `OPPORTUNITY_ID`.
    pub async fn add_opportunity(&self, opportunity: &Value) -> Result<Map<String, Value>> {
        self.upsert(OPPORTUNITIES, OPPORTUNITY_ID, opportunity).await
    }

    /// Deletes an opportunity.
    ///
    /// # Errors
    ///
    /// Returns a status error if the opportunity does not exist.
    pub async fn delete_opportunity(&self, id: i64) -> Result<()> {
        self.remove(&format!("{OPPORTUNITIES}/{id}")).await
    }

    /// Lists the emails linked to an opportunity.
    ///
    /// # Parameters
    ///
    /// * `id` - The `OPPORTUNITY_ID` of the owning opportunity
    pub async fn opportunity_emails(&self, id: i64) -> Result<Vec<Value>> {
        self.list(&format!("{OPPORTUNITIES}/{id}/Emails")).await
    }

    /// Lists the notes linked to an opportunity.
    ///
    /// # Parameters
    ///
    /// * `id` - The `OPPORTUNITY_ID` of the owning opportunity
    pub async fn opportunity_notes(&self, id: i64) -> Result<Vec<Value>> {
        self.list(&format!("{OPPORTUNITIES}/{id}/Notes")).await
    }

    /// Lists the tasks linked to an opportunity.
    ///
    /// # Parameters
    ///
    /// * `id` - The `OPPORTUNITY_ID` of the owning opportunity
    pub async fn opportunity_tasks(&self, id: i64) -> Result<Vec<Value>> {
        self.list(&format!("{OPPORTUNITIES}/{id}/Tasks")).await
    }

    /// Lists the state changes an opportunity went through, oldest first.
    ///
    /// Each entry records the old and new state and the reason given.
    pub async fn opportunity_state_history(&self, id: i64) -> Result<Vec<Value>> {
        self.list(&format!("{OPPORTUNITIES}/{id}/StateHistory")).await
    }

    /// Lists the reasons available when an opportunity changes state.
    pub async fn opportunity_state_reasons(&self) -> Result<Vec<Value>> {
        self.list(OPPORTUNITY_STATE_REASONS).await
    }
}
