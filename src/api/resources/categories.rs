//
//  insightly-rs
//  api/resources/categories.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Category lookup lists.
//!
//! File attachments, opportunities, projects and tasks each have their own
//! category collection. All four share the same shape and the same id field,
//! `CATEGORY_ID`.
//!
//! | Collection | List | Get | Add/update | Delete |
//! |------------|------|-----|------------|--------|
//! | `/FileCategories` | `file_categories` | `file_category` | `add_file_category` | `delete_file_category` |
//! | `/OpportunityCategories` | `opportunity_categories` | `opportunity_category` | `add_opportunity_category` | `delete_opportunity_category` |
//! | `/ProjectCategories` | `project_categories` | `project_category` | `add_project_category` | `delete_project_category` |
//! | `/TaskCategories` | `task_categories` | `task_category` | `add_task_category` | `delete_task_category` |

use serde_json::{Map, Value};

use crate::api::client::InsightlyClient;
use crate::api::common::Result;

const FILE_CATEGORIES: &str = "/FileCategories";
const OPPORTUNITY_CATEGORIES: &str = "/OpportunityCategories";
const PROJECT_CATEGORIES: &str = "/ProjectCategories";
const TASK_CATEGORIES: &str = "/TaskCategories";

/// Identifier field shared by every category collection. A positive value
/// makes the `add_*_category` methods update instead of create.
pub const CATEGORY_ID: &str = "CATEGORY_ID";

impl InsightlyClient {
    /// Lists the file categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a JSON array.
    pub async fn file_categories(&self) -> Result<Vec<Value>> {
        self.list(FILE_CATEGORIES).await
    }

    /// Fetches a single file category.
    ///
    /// # Parameters
    ///
    /// * `id` - The `CATEGORY_ID` of the category
    pub async fn file_category(&self, id: i64) -> Result<Map<String, Value>> {
        self.fetch(&format!("{FILE_CATEGORIES}/{id}")).await
    }

    /// Creates a file category, or updates it when `CATEGORY_ID` is positive.
    ///
    /// # Parameters
    ///
    /// * `category` - The category record; `CATEGORY_NAME` is required
    ///
    /// # Returns
    ///
    /// The category as stored by Insightly, including its `CATEGORY_ID`.
    pub async fn add_file_category(&self, category: &Value) -> Result<Map<String, Value>> {
        self.upsert(FILE_CATEGORIES, CATEGORY_ID, category).await
    }

    /// Deletes a file category.
    ///
    /// # Errors
    ///
    /// Returns a status error if the category does not exist.
    pub async fn delete_file_category(&self, id: i64) -> Result<()> {
        self.remove(&format!("{FILE_CATEGORIES}/{id}")).await
    }

    /// Lists the opportunity categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a JSON array.
    pub async fn opportunity_categories(&self) -> Result<Vec<Value>> {
        self.list(OPPORTUNITY_CATEGORIES).await
    }

    /// Fetches a single opportunity category.
    ///
    /// # Parameters
    ///
    /// * `id` - The `CATEGORY_ID` of the category
    pub async fn opportunity_category(&self, id: i64) -> Result<Map<String, Value>> {
        self.fetch(&format!("{OPPORTUNITY_CATEGORIES}/{id}")).await
    }

    /// Creates a opportunity category, or updates it when `CATEGORY_ID` is positive.
    ///
    /// # Parameters
    ///
    /// * `category` - The category record; `CATEGORY_NAME` is required
    ///
    /// # Returns
    ///
    /// The category as stored by Insightly, including its `CATEGORY_ID`.
    pub async fn add_opportunity_category(&self, category: &Value) -> Result<Map<String, Value>> {
        self.upsert(OPPORTUNITY_CATEGORIES, CATEGORY_ID, category).await
    }

    /// Deletes a opportunity category.
    ///
    /// # Errors
    ///
    /// Returns a status error if the category does not exist.
    pub async fn delete_opportunity_category(&self, id: i64) -> Result<()> {
        self.remove(&format!("{OPPORTUNITY_CATEGORIES}/{id}")).await
    }

    /// Lists the project categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a JSON array.
    pub async fn project_categories(&self) -> Result<Vec<Value>> {
        self.list(PROJECT_CATEGORIES).await
    }

    /// Fetches a single project category.
    ///
    /// # Parameters
    ///
    /// * `id` - The `CATEGORY_ID` of the category
    pub async fn project_category(&self, id: i64) -> Result<Map<String, Value>> {
        self.fetch(&format!("{PROJECT_CATEGORIES}/{id}")).await
    }

    /// Creates a project category, or updates it when `CATEGORY_ID` is positive.
    ///
    /// # Parameters
    ///
    /// * `category` - The category record; `CATEGORY_NAME` is required
    ///
    /// # Returns
    ///
    /// The category as stored by Insightly, including its `CATEGORY_ID`.
    pub async fn add_project_category(&self, category: &Value) -> Result<Map<String, Value>> {
        self.upsert(PROJECT_CATEGORIES, CATEGORY_ID, category).await
    }

    /// Deletes a project category.
    ///
    /// # Errors
    ///
    /// Returns a status error if the category does not exist.
    pub async fn delete_project_category(&self, id: i64) -> Result<()> {
        self.remove(&format!("{PROJECT_CATEGORIES}/{id}")).await
    }

    /// Lists the task categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a JSON array.
    pub async fn task_categories(&self) -> Result<Vec<Value>> {
        self.list(TASK_CATEGORIES).await
    }

    /// Fetches a single task category.
    ///
    /// # Parameters
    ///
    /// * `id` - The `CATEGORY_ID` of the category
    pub async fn task_category(&self, id: i64) -> Result<Map<String, Value>> {
        self.fetch(&format!("{TASK_CATEGORIES}/{id}")).await
    }

    /// Creates a task category, or updates it when `CATEGORY_ID` is positive.
    ///
    /// # Parameters
    ///
    /// * `category` - The category record; `CATEGORY_NAME` is required
    ///
    /// # Returns
    ///
    /// The category as stored by Insightly, including its `CATEGORY_ID`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use insightly::InsightlyClient;
    /// use serde_json::json;
    ///
    /// # async fn example() -> insightly::Result<()> {
    /// let client = InsightlyClient::new("your-api-key")?;
    /// let category = client
    ///     .add_task_category(&json!({"CATEGORY_NAME": "Follow-up", "BACKGROUND_COLOR": "019B2A"}))
    ///     .await?;
    /// println!("created category {}", category["CATEGORY_ID"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn add_task_category(&self, category: &Value) -> Result<Map<String, Value>> {
        self.upsert(TASK_CATEGORIES, CATEGORY_ID, category).await
    }

    /// Deletes a task category.
    ///
    /// # Errors
    ///
    /// Returns a status error if the category does not exist.
    pub async fn delete_task_category(&self, id: i64) -> Result<()> {
        self.remove(&format!("{TASK_CATEGORIES}/{id}")).await
    }
}
