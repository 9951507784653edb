//
//  insightly-rs
//  api/resources/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Projects API.
//!
//! Projects track delivery work, usually after an opportunity is won. Like
//! contacts and organisations they have linked emails, notes and tasks.
//!
//! # Endpoints
//!
//! | Method | Path |
//! |--------|------|
//! | [`projects`](InsightlyClient::projects) | `GET /Projects` |
//! | [`project`](InsightlyClient::project) | `GET /Projects/{id}` |
//! | [`add_project`](InsightlyClient::add_project) | `POST /Projects` or `PUT /Projects` |
//! | [`delete_project`](InsightlyClient::delete_project) | `DELETE /Projects/{id}` |
//! | [`project_emails`](InsightlyClient::project_emails) | `GET /Projects/{id}/Emails` |
//! | [`project_notes`](InsightlyClient::project_notes) | `GET /Projects/{id}/Notes` |
//! | [`project_tasks`](InsightlyClient::project_tasks) | `GET /Projects/{id}/Tasks` |

use serde_json::{Map, Value};

use crate::api::client::InsightlyClient;
use crate::api::common::Result;
use crate::api::query::QueryOptions;

const PROJECTS: &str = "/Projects";

/// Identifier field of a project. A positive value makes `add_project` an update.
pub const PROJECT_ID: &str = "PROJECT_ID";

impl InsightlyClient {
    /// Lists projects.
    ///
    /// # Parameters
    ///
    /// * `options` - OData options; [`QueryOptions::new`] for none
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not 200, 201 or
    /// 202, or the body is not a JSON array.
    pub async fn projects(&self, options: &QueryOptions) -> Result<Vec<Value>> {
        self.list_with(PROJECTS, options).await
    }

    /// Fetches a single project.
    pub async fn project(&self, id: i64) -> Result<Map<String, Value>> {
        self.fetch(&format!("{PROJECTS}/{id}")).await
    }

    /// Creates a project, or updates it when `PROJECT_ID` is positive.
    ///
    /// # Parameters
    ///
    /// * `project` - The project record; `PROJECT_NAME` and `STATUS` are
    ///   required for new projects
    ///
    /// # Returns
    ///
    /// The project as stored by Insightly, including its `PROJECT_ID`.
    pub async fn add_project(&self, project: &Value) -> Result<Map<String, Value>> {
        self.upsert(PROJECTS, PROJECT_ID, project).await
    }

    /// Deletes a project.
    ///
    /// # Errors
    ///
    /// Returns a status error if the project does not exist.
    pub async fn delete_project(&self, id: i64) -> Result<()> {
        self.remove(&format!("{PROJECTS}/{id}")).await
    }

    /// Lists the emails linked to a project.
    ///
    /// # Parameters
    ///
    /// * `id` - The `PROJECT_ID` of the owning project
    pub async fn project_emails(&self, id: i64) -> Result<Vec<Value>> {
        self.list(&format!("{PROJECTS}/{id}/Emails")).await
    }

    /// Lists the notes linked to a project.
    ///
    /// # Parameters
    ///
    /// * `id` - The `PROJECT_ID` of the owning project
    pub async fn project_notes(&self, id: i64) -> Result<Vec<Value>> {
        self.list(&format!("{PROJECTS}/{id}/Notes")).await
    }

    /// Lists the tasks linked to a project.
    ///
    /// # Parameters
    ///
    /// * `id` - The `PROJECT_ID` of the owning project
    pub async fn project_tasks(&self, id: i64) -> Result<Vec<Value>> {
        self.list(&format!("{PROJECTS}/{id}/Tasks")).await
    }
}
