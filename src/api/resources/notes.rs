//
//  insightly-rs
//  api/resources/notes.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Notes API.
//!
//! Notes are free text attached to another record through `NOTELINKS`.
//! They carry a comment thread, read with
//! [`note_comments`](InsightlyClient::note_comments) and extended with
//! [`add_note_comment`](InsightlyClient::add_note_comment).

use serde_json::{Map, Value};

use crate::api::client::InsightlyClient;
use crate::api::common::Result;
use crate::api::query::QueryOptions;

const NOTES: &str = "/Notes";

/// Identifier field of a note. A positive value makes `add_note` an update.
pub const NOTE_ID: &str = "NOTE_ID";

impl InsightlyClient {
    /// Lists notes.
    ///
    /// # Parameters
    ///
    /// * `options` - OData options; [`QueryOptions::new`] for none
    pub async fn notes(&self, options: &QueryOptions) -> Result<Vec<Value>> {
        self.list_with(NOTES, options).await
    }

    /// Fetches a single note.
    pub async fn note(&self, id: i64) -> Result<Map<String, Value>> {
        self.fetch(&format!("{NOTES}/{id}")).await
    }

    /// Creates a note, or updates it when `NOTE_ID` is positive.
    ///
    /// # Parameters
    ///
    /// * `note` - The note record, with `TITLE` and a `NOTELINKS` entry
    ///
    /// # Returns
    ///
    /// The note as stored by Insightly, including its `NOTE_ID`.
    ///
    /// # Errors
    ///
    /// New notes must be linked to a record through `NOTELINKS`, otherwise
    /// Insightly answers 400.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use insightly::InsightlyClient;
    /// use serde_json::json;
    ///
    /// # async fn example() -> insightly::Result<()> {
    /// let client = InsightlyClient::new("your-api-key")?;
    /// let note = client
    ///     .add_note(&json!({
    ///         "TITLE": "Call summary",
    ///         "BODY": "Wants a quote by Friday",
    ///         "NOTELINKS": [{"CONTACT_ID": 1001}],
    ///     }))
    ///     .await?;
    /// println!("created note {}", note["NOTE_ID"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn add_note(&self, note: &Value) -> Result<Map<String, Value>> {
        self.upsert(NOTES, NOTE_ID, note).await
    }

    /// Deletes a note.
    ///
    /// # Errors
    ///
    /// Returns a status error if the note does not exist.
    pub async fn delete_note(&self, id: i64) -> Result<()> {
        self.remove(&format!("{NOTES}/{id}")).await
    }

    /// Lists the comments on a note.
    ///
    /// # Parameters
    ///
    /// * `id` - The `NOTE_ID` of the note
    pub async fn note_comments(&self, id: i64) -> Result<Vec<Value>> {
        self.list(&format!("{NOTES}/{id}/Comments")).await
    }

    /// Adds a comment to a note.
    ///
    /// # Parameters
    ///
    /// * `id` - The `NOTE_ID` of the note
    /// * `comment` - The comment; `BODY` is required
    ///
    /// # Returns
    ///
    /// The stored comment, including its `COMMENT_ID`.
    pub async fn add_note_comment(&self, id: i64, comment: &Value) -> Result<Map<String, Value>> {
        self.create(&format!("{NOTES}/{id}/Comments"), comment).await
    }
}
