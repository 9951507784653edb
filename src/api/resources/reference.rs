//
//  insightly-rs
//  api/resources/reference.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Account-wide reference data.
//!
//! Small, read-only collections that describe the account rather than hold
//! CRM records: countries, currencies, custom field definitions,
//! relationship types, tags and the instance itself.

use serde_json::{Map, Value};

use crate::api::client::InsightlyClient;
use crate::api::common::Result;

const COUNTRIES: &str = "/Countries";
const CURRENCIES: &str = "/Currencies";
const CUSTOM_FIELDS: &str = "/CustomFields";
const INSTANCE: &str = "/Instance";
const RELATIONSHIPS: &str = "/Relationships";
const TAGS: &str = "/Tags";

impl InsightlyClient {
    /// Lists the countries Insightly knows about.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a JSON array.
    pub async fn countries(&self) -> Result<Vec<Value>> {
        self.list(COUNTRIES).await
    }

    /// Lists the currencies available to the account.
    pub async fn currencies(&self) -> Result<Vec<Value>> {
        self.list(CURRENCIES).await
    }

    /// Lists custom field definitions.
    pub async fn custom_fields(&self) -> Result<Vec<Value>> {
        self.list(CUSTOM_FIELDS).await
    }

    /// Fetches a single custom field definition.
    ///
    /// # Parameters
    ///
    /// * `id` - The field name, e.g. `CONTACT_FIELD_1`. It is percent-encoded
    ///   into the path.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use insightly::InsightlyClient;
    ///
    /// # async fn example() -> insightly::Result<()> {
    /// let client = InsightlyClient::new("your-api-key")?;
    /// let field = client.custom_field("CONTACT_FIELD_1").await?;
    /// println!("{}", field["FIELD_LABEL"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn custom_field(&self, id: &str) -> Result<Map<String, Value>> {
        let path = format!("{}/{}", CUSTOM_FIELDS, urlencoding::encode(id));
        self.fetch(&path).await
    }

    /// Fetches the account (instance) details.
    ///
    /// # Returns
    ///
    /// A single object describing the instance, such as its name and subdomain.
    pub async fn instance(&self) -> Result<Map<String, Value>> {
        self.fetch(INSTANCE).await
    }

    /// Lists the relationship types between contacts and organisations.
    pub async fn relationships(&self) -> Result<Vec<Value>> {
        self.list(RELATIONSHIPS).await
    }

    /// Lists the tags attached to a record.
    ///
    /// # Parameters
    ///
    /// * `id` - The id of the tagged record, e.g. a `CONTACT_ID`
    pub async fn tags(&self, id: i64) -> Result<Vec<Value>> {
        self.list(&format!("{TAGS}/{id}")).await
    }
}
