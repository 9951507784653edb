//
//  insightly-rs
//  api/resources/events.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Events (calendar entries) API.

use serde_json::{Map, Value};

use crate::api::client::InsightlyClient;
use crate::api::common::Result;
use crate::api::query::QueryOptions;

const EVENTS: &str = "/Events";

/// Identifier field of an event. A positive value makes `add_event` an update.
pub const EVENT_ID: &str = "EVENT_ID";

impl InsightlyClient {
    /// Lists calendar events.
    ///
    /// # Parameters
    ///
    /// * `options` - OData options; [`QueryOptions::new`] for none
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not 200, 201 or
    /// 202, or the body is not a JSON array.
    pub async fn events(&self, options: &QueryOptions) -> Result<Vec<Value>> {
        self.list_with(EVENTS, options).await
    }

    /// Fetches a single event.
    pub async fn event(&self, id: i64) -> Result<Map<String, Value>> {
        self.fetch(&format!("{EVENTS}/{id}")).await
    }

    /// Creates an event, or updates it when `EVENT_ID` is positive.
    ///
    /// # Parameters
    ///
    /// * `event` - The event record; `TITLE`, `START_DATE_UTC` and
    ///   `END_DATE_UTC` are required for new events
    ///
    /// # Returns
    ///
    /// The event as stored by Insightly, including its `EVENT_ID`.
    pub async fn add_event(&self, event: &Value) -> Result<Map<String, Value>> {
        self.upsert(EVENTS, EVENT_ID, event).await
    }

    /// Deletes an event.
    ///
    /// # Errors
    ///
    /// Returns a status error if the event does not exist.
    pub async fn delete_event(&self, id: i64) -> Result<()> {
        self.remove(&format!("{EVENTS}/{id}")).await
    }
}
