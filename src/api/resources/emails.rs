//
//  insightly-rs
//  api/resources/emails.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Emails API.
//!
//! Emails are read-only apart from deletion and commenting: they enter
//! Insightly through the mail dropbox, not through the API.

use serde_json::{Map, Value};

use crate::api::client::InsightlyClient;
use crate::api::common::Result;
use crate::api::query::QueryOptions;

const EMAILS: &str = "/Emails";

impl InsightlyClient {
    /// Lists emails.
    ///
    /// # Parameters
    ///
    /// * `options` - OData options; [`QueryOptions::new`] for none
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not 200, 201 or
    /// 202, or the body is not a JSON array.
    pub async fn emails(&self, options: &QueryOptions) -> Result<Vec<Value>> {
        self.list_with(EMAILS, options).await
    }

    /// Fetches a single email.
    pub async fn email(&self, id: i64) -> Result<Map<String, Value>> {
        self.fetch(&format!("{EMAILS}/{id}")).await
    }

    /// Deletes an email.
    ///
    /// # Errors
    ///
    /// Returns a status error if the email does not exist.
    pub async fn delete_email(&self, id: i64) -> Result<()> {
        self.remove(&format!("{EMAILS}/{id}")).await
    }

    /// Lists the comments on an email.
    ///
    /// # Parameters
    ///
    /// * `id` - The `EMAIL_ID` of the email
    pub async fn email_comments(&self, id: i64) -> Result<Vec<Value>> {
        self.list(&format!("{EMAILS}/{id}/Comments")).await
    }

    /// Adds a comment to an email.
    ///
    /// # Parameters
    ///
    /// * `id` - The `EMAIL_ID` of the email
    /// * `comment` - The comment; needs at least `BODY` and `OWNER_USER_ID`
    ///
    /// # Returns
    ///
    /// The stored comment, including its `COMMENT_ID`.
    pub async fn add_email_comment(&self, id: i64, comment: &Value) -> Result<Map<String, Value>> {
        self.create(&format!("{EMAILS}/{id}/Comments"), comment).await
    }
}
