//
//  insightly-rs
//  api/resources/comments.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Comments API.
//!
//! Comments always belong to an email, note or task and are created through
//! the owning record (`add_email_comment`, `add_note_comment`,
//! `add_task_comment`). Once created they can be fetched, edited and deleted
//! here by their own id.
//!
//! Insightly has no endpoint that lists every comment in an account, so
//! [`comments`](InsightlyClient::comments) returns an empty list without
//! contacting the server.

use serde_json::{Map, Value};
use tracing::debug;

use crate::api::client::InsightlyClient;
use crate::api::common::Result;

const COMMENTS: &str = "/Comments";

impl InsightlyClient {
    /// Returns an empty list; comments are only listed per owning record.
    ///
    /// Use `email_comments`, `note_comments` or `task_comments` instead.
    pub async fn comments(&self) -> Result<Vec<Value>> {
        debug!("Account-wide comment listing is not offered by the API");
        Ok(Vec::new())
    }

    /// Fetches a single comment.
    ///
    /// # Parameters
    ///
    /// * `id` - The `COMMENT_ID` of the comment
    pub async fn comment(&self, id: i64) -> Result<Map<String, Value>> {
        self.fetch(&format!("{COMMENTS}/{id}")).await
    }

    /// Updates a comment.
    ///
    /// # Parameters
    ///
    /// * `comment` - The edited comment; it must carry its `COMMENT_ID`
    ///
    /// # Returns
    ///
    /// The comment as stored by Insightly.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use insightly::InsightlyClient;
    /// use serde_json::json;
    ///
    /// # async fn example() -> insightly::Result<()> {
    /// let client = InsightlyClient::new("your-api-key")?;
    /// let mut comment = client.comment(77).await?;
    /// comment.insert("BODY".to_string(), json!("Corrected figures attached"));
    /// client.update_comment(&serde_json::Value::Object(comment)).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn update_comment(&self, comment: &Value) -> Result<Map<String, Value>> {
        self.update(COMMENTS, comment).await
    }

    /// Deletes a comment.
    ///
    /// # Errors
    ///
    /// Returns a status error if the comment does not exist.
    pub async fn delete_comment(&self, id: i64) -> Result<()> {
        self.remove(&format!("{COMMENTS}/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use crate::InsightlyClient;

    #[test]
    fn test_comment_listing_never_hits_the_network() {
        // Port 9 (discard) on localhost: any real request would fail.
        let client = InsightlyClient::with_endpoint("key", "http://127.0.0.1:9/v2.2").unwrap();
        let comments = tokio_test::block_on(client.comments()).unwrap();
        assert!(comments.is_empty());
    }
}
