//
//  insightly-rs
//  api/resources/pipelines.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Pipelines and pipeline stages. Read-only through the API.

use serde_json::{Map, Value};

use crate::api::client::InsightlyClient;
use crate::api::common::Result;

const PIPELINES: &str = "/Pipelines";
const PIPELINE_STAGES: &str = "/PipelineStages";

impl InsightlyClient {
    /// Lists pipelines.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a JSON array.
    pub async fn pipelines(&self) -> Result<Vec<Value>> {
        self.list(PIPELINES).await
    }

    /// Fetches a single pipeline.
    ///
    /// # Parameters
    ///
    /// * `id` - The `PIPELINE_ID` of the pipeline
    pub async fn pipeline(&self, id: i64) -> Result<Map<String, Value>> {
        self.fetch(&format!("{PIPELINES}/{id}")).await
    }

    /// Lists the stages of every pipeline.
    ///
    /// Each stage carries its `PIPELINE_ID` and `STAGE_ORDER`.
    pub async fn pipeline_stages(&self) -> Result<Vec<Value>> {
        self.list(PIPELINE_STAGES).await
    }

    /// Fetches a single pipeline stage.
    ///
    /// # Parameters
    ///
    /// * `id` - The `STAGE_ID` of the stage
    pub async fn pipeline_stage(&self, id: i64) -> Result<Map<String, Value>> {
        self.fetch(&format!("{PIPELINE_STAGES}/{id}")).await
    }
}
