//
//  insightly-rs
//  api/resources/tasks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Tasks API.
//!
//! Tasks carry a comment thread; comments are added with
//! [`add_task_comment`](InsightlyClient::add_task_comment) and edited or
//! removed through the [`comments`](super::comments) endpoints.

use serde_json::{Map, Value};

use crate::api::client::InsightlyClient;
use crate::api::common::Result;
use crate::api::query::QueryOptions;

const TASKS: &str = "/Tasks";

/// Identifier field of a task. A positive value makes `add_task` an update.
pub const TASK_ID: &str = "TASK_ID";

impl InsightlyClient {
    /// Lists tasks.
    ///
    /// # Parameters
    ///
    /// * `options` - OData options; [`QueryOptions::new`] for none
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use insightly::api::query::QueryOptions;
    /// use insightly::InsightlyClient;
    ///
    /// # async fn example() -> insightly::Result<()> {
    /// let client = InsightlyClient::new("your-api-key")?;
    /// let overdue = client
    ///     .tasks(&QueryOptions::new().filters(["COMPLETED eq false", "DUE_DATE lt 2026-10-17"]))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn tasks(&self, options: &QueryOptions) -> Result<Vec<Value>> {
        self.list_with(TASKS, options).await
    }

    /// Fetches a single task.
    pub async fn task(&self, id: i64) -> Result<Map<String, Value>> {
        self.fetch(&format!("{TASKS}/{id}")).await
    }

    /// Creates a task, or updates it when `TASK_ID` is positive.
    ///
    /// # Parameters
    ///
    /// * `task` - The task record; `TITLE`, `STATUS`, `COMPLETED`,
    ///   `PUBLICLY_VISIBLE` and `RESPONSIBLE_USER_ID` are required for new tasks
    ///
    /// # Returns
    ///
    /// The task as stored by Insightly, including its `TASK_ID`.
    ///
    /// # Errors
    ///
    /// Insightly answers 400 when required fields are missing.
    pub async fn add_task(&self, task: &Value) -> Result<Map<String, Value>> {
        self.upsert(TASKS, TASK_ID, task).await
    }

    /// Deletes a task.
    pub async fn delete_task(&self, id: i64) -> Result<()> {
        self.remove(&format!("{TASKS}/{id}")).await
    }

    /// Lists the comments on a task.
    ///
    /// # Parameters
    ///
    /// * `id` - The `TASK_ID` of the task
    pub async fn task_comments(&self, id: i64) -> Result<Vec<Value>> {
        self.list(&format!("{TASKS}/{id}/Comments")).await
    }

    /// Adds a comment to a task.
    ///
    /// # Parameters
    ///
    /// * `id` - The `TASK_ID` of the task
    /// * `comment` - The comment; `BODY` is required
    ///
    /// # Returns
    ///
    /// The stored comment, including its `COMMENT_ID`.
    pub async fn add_task_comment(&self, id: i64, comment: &Value) -> Result<Map<String, Value>> {
        self.create(&format!("{TASKS}/{id}/Comments"), comment).await
    }
}
