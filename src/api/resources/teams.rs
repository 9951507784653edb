//
//  insightly-rs
//  api/resources/teams.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Teams and team members API.
//!
//! Team members are a separate collection keyed by `PERMISSION_ID`. Unlike
//! most resources, adding and updating a member are two explicit calls.

use serde_json::{Map, Value};

use crate::api::client::InsightlyClient;
use crate::api::common::Result;
use crate::api::query::QueryOptions;

const TEAMS: &str = "/Teams";
const TEAM_MEMBERS: &str = "/TeamMembers";

/// Identifier field of a team. A positive value makes `add_team` an update.
pub const TEAM_ID: &str = "TEAM_ID";

impl InsightlyClient {
    /// Lists teams.
    ///
    /// # Parameters
    ///
    /// * `options` - OData options; [`QueryOptions::new`] for none
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not 200, 201 or
    /// 202, or the body is not a JSON array.
    pub async fn teams(&self, options: &QueryOptions) -> Result<Vec<Value>> {
        self.list_with(TEAMS, options).await
    }

    /// Fetches a single team.
    pub async fn team(&self, id: i64) -> Result<Map<String, Value>> {
        self.fetch(&format!("{TEAMS}/{id}")).await
    }

    /// Creates a team, or updates it when `TEAM_ID` is positive.
    ///
    /// # Parameters
    ///
    /// * `team` - The team record; `TEAM_NAME` is required for new teams
    ///
    /// # Returns
    ///
    /// The team as stored by Insightly, including its `TEAM_ID`.
    pub async fn add_team(&self, team: &Value) -> Result<Map<String, Value>> {
        self.upsert(TEAMS, TEAM_ID, team).await
    }

    /// Deletes a team.
    ///
    /// # Errors
    ///
    /// Returns a status error if the team does not exist.
    pub async fn delete_team(&self, id: i64) -> Result<()> {
        self.remove(&format!("{TEAMS}/{id}")).await
    }

    /// Lists the members of a team.
    ///
    /// Sends `GET /TeamMembers?teamid={team_id}`.
    ///
    /// # Parameters
    ///
    /// * `team_id` - The `TEAM_ID` of the team
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use insightly::InsightlyClient;
    ///
    /// # async fn example() -> insightly::Result<()> {
    /// let client = InsightlyClient::new("your-api-key")?;
    /// for member in client.team_members(42).await? {
    ///     println!("user {}", member["MEMBER_USER_ID"]);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn team_members(&self, team_id: i64) -> Result<Vec<Value>> {
        self.get(TEAM_MEMBERS)
            .query_param("teamid", team_id)
            .as_json_array()
            .await
    }

    /// Fetches a single team membership.
    ///
    /// # Parameters
    ///
    /// * `id` - The `PERMISSION_ID` of the membership
    pub async fn team_member(&self, id: i64) -> Result<Map<String, Value>> {
        self.fetch(&format!("{TEAM_MEMBERS}/{id}")).await
    }

    /// Adds a member to a team.
    ///
    /// # Parameters
    ///
    /// * `member` - The membership, with `TEAM_ID` and `MEMBER_USER_ID`
    ///
    /// # Returns
    ///
    /// The stored membership, including its `PERMISSION_ID`.
    pub async fn add_team_member(&self, member: &Value) -> Result<Map<String, Value>> {
        self.create(TEAM_MEMBERS, member).await
    }

    /// Updates a team membership.
    ///
    /// # Parameters
    ///
    /// * `member` - The membership; it must carry its `PERMISSION_ID`
    pub async fn update_team_member(&self, member: &Value) -> Result<Map<String, Value>> {
        self.update(TEAM_MEMBERS, member).await
    }

    /// Removes a team membership.
    ///
    /// # Errors
    ///
    /// Returns a status error if the membership does not exist.
    pub async fn delete_team_member(&self, id: i64) -> Result<()> {
        self.remove(&format!("{TEAM_MEMBERS}/{id}")).await
    }
}
