//
//  insightly-rs
//  smoke/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Live Smoke Test
//!
//! Runs a sequence of real calls against an Insightly account and reports
//! one `PASS` or `FAIL` line per call. Used by the `insightly-smoke` binary
//! to check that an API key works and that the endpoints behave as the
//! client expects.
//!
//! The scenario creates and deletes its own records. It never touches
//! existing records except to read them.

mod report;
mod scenario;

pub use report::SmokeReport;
pub use scenario::*;
