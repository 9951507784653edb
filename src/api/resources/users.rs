//
//  insightly-rs
//  api/resources/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Users API. Read-only.

use serde_json::{Map, Value};

use crate::api::client::InsightlyClient;
use crate::api::common::Result;

const USERS: &str = "/Users";

impl InsightlyClient {
    /// Lists the users of the account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a JSON array.
    pub async fn users(&self) -> Result<Vec<Value>> {
        self.list(USERS).await
    }

    /// Fetches a single user.
    ///
    /// # Parameters
    ///
    /// * `id` - The `USER_ID` of the user
    pub async fn user(&self, id: i64) -> Result<Map<String, Value>> {
        self.fetch(&format!("{USERS}/{id}")).await
    }

    /// Fetches the user that owns the API key.
    ///
    /// # Errors
    ///
    /// Returns a status error with code 401 when the key is not accepted.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use insightly::InsightlyClient;
    ///
    /// # async fn example() -> insightly::Result<()> {
    /// let client = InsightlyClient::new("your-api-key")?;
    /// let me = client.current_user().await?;
    /// println!("signed in as {} {}", me["FIRST_NAME"], me["LAST_NAME"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn current_user(&self) -> Result<Map<String, Value>> {
        self.fetch(&format!("{USERS}/Me")).await
    }
}
