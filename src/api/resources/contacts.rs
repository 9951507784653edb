//
//  insightly-rs
//  api/resources/contacts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Contacts API.
//!
//! Contacts are people. Besides the generic OData options, the collection
//! can be narrowed by `email`, `tag` and an explicit list of `ids` through
//! [`ContactQuery`].
//!
//! # Endpoints
//!
//! | Method | Path |
//! |--------|------|
//! | [`contacts`](InsightlyClient::contacts) | `GET /Contacts` |
//! | [`contact`](InsightlyClient::contact) | `GET /Contacts/{id}` |
//! | [`add_contact`](InsightlyClient::add_contact) | `POST /Contacts` or `PUT /Contacts` |
//! | [`delete_contact`](InsightlyClient::delete_contact) | `DELETE /Contacts/{id}` |
//! | [`contact_emails`](InsightlyClient::contact_emails) | `GET /Contacts/{id}/Emails` |
//! | [`contact_notes`](InsightlyClient::contact_notes) | `GET /Contacts/{id}/Notes` |
//! | [`contact_tasks`](InsightlyClient::contact_tasks) | `GET /Contacts/{id}/Tasks` |
//!
//! # Example
//!
//! ```rust,no_run
//! use insightly::api::query::{ContactQuery, QueryOptions};
//! use insightly::InsightlyClient;
//! use serde_json::json;
//!
//! # async fn example() -> insightly::Result<()> {
//! let client = InsightlyClient::new("your-api-key")?;
//!
//! let created = client
//!     .add_contact(&json!({"FIRST_NAME": "Testy", "LAST_NAME": "McTesterson"}))
//!     .await?;
//! let id = created["CONTACT_ID"].as_i64().unwrap_or_default();
//!
//! let recent = client
//!     .contacts(&ContactQuery::new().options(QueryOptions::new().top(10)))
//!     .await?;
//! println!("{} recent contacts", recent.len());
//!
//! client.delete_contact(id).await?;
//! # Ok(())
//! # }
//! ```

use serde_json::{Map, Value};

use crate::api::client::InsightlyClient;
use crate::api::common::Result;
use crate::api::query::ContactQuery;

const CONTACTS: &str = "/Contacts";

/// Identifier field of a contact. A positive value makes `add_contact` an
/// update instead of a create.
pub const CONTACT_ID: &str = "CONTACT_ID";

impl InsightlyClient {
    /// Lists contacts matching the query.
    ///
    /// # Parameters
    ///
    /// * `query` - OData options plus the optional `email`, `tag` and `ids`
    ///   filters
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not 200, 201 or
    /// 202, or the body is not a JSON array.
    pub async fn contacts(&self, query: &ContactQuery) -> Result<Vec<Value>> {
        self.list_with(CONTACTS, query).await
    }

    /// Fetches a single contact.
    ///
    /// # Errors
    ///
    /// Returns a status error with code 404 if there is no such contact; see
    /// [`InsightlyError::is_not_found`](crate::InsightlyError::is_not_found).
    pub async fn contact(&self, id: i64) -> Result<Map<String, Value>> {
        self.fetch(&format!("{CONTACTS}/{id}")).await
    }

    /// Creates a contact, or updates it when the payload has a positive `CONTACT_ID`.
    ///
    /// # Parameters
    ///
    /// * `contact` - The contact record as a JSON object
    ///
    /// # Returns
    ///
    /// The record as stored by Insightly, including its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Insightly rejects the record.
    pub async fn add_contact(&self, contact: &Value) -> Result<Map<String, Value>> {
        self.upsert(CONTACTS, CONTACT_ID, contact).await
    }

    /// Deletes a contact.
    pub async fn delete_contact(&self, id: i64) -> Result<()> {
        self.remove(&format!("{CONTACTS}/{id}")).await
    }

    /// Lists the emails linked to a contact.
    ///
    /// # Parameters
    ///
    /// * `id` - The `CONTACT_ID` of the owning contact
    pub async fn contact_emails(&self, id: i64) -> Result<Vec<Value>> {
        self.list(&format!("{CONTACTS}/{id}/Emails")).await
    }

    /// Lists the notes linked to a contact.
    ///
    /// # Parameters
    ///
    /// * `id` - The `CONTACT_ID` of the owning contact
    pub async fn contact_notes(&self, id: i64) -> Result<Vec<Value>> {
        self.list(&format!("{CONTACTS}/{id}/Notes")).await
    }

    /// Lists the tasks linked to a contact.
    ///
    /// # Parameters
    ///
    /// * `id` - The `CONTACT_ID` of the owning contact
    pub async fn contact_tasks(&self, id: i64) -> Result<Vec<Value>> {
        self.list(&format!("{CONTACTS}/{id}/Tasks")).await
    }
}
