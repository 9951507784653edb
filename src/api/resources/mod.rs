//
//  insightly-rs
//  api/resources/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Resource Facade
//!
//! One module per Insightly collection. Each module adds methods to
//! [`InsightlyClient`](crate::InsightlyClient) that fill in the path, verb,
//! query and body of a request and return the parsed JSON.
//!
//! ## Return Shapes
//!
//! | Operation | Returns |
//! |-----------|---------|
//! | list | `Vec<serde_json::Value>` |
//! | get, add, update | `serde_json::Map<String, Value>` |
//! | delete | `()` |
//!
//! ## Create or Update
//!
//! `add_*` methods look at the record's own id field (`CONTACT_ID`,
//! `CATEGORY_ID`, ...). A positive id sends `PUT` to the collection path,
//! anything else sends `POST`.

pub mod categories;
pub mod comments;
pub mod contacts;
pub mod emails;
pub mod events;
pub mod leads;
pub mod notes;
pub mod opportunities;
pub mod organizations;
pub mod pipelines;
pub mod projects;
pub mod reference;
pub mod tasks;
pub mod teams;
pub mod users;
