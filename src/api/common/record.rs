//
//  insightly-rs
//  api/common/record.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Record identifier helpers
//!
//! Insightly decides between create and update from the payload itself: a
//! record carrying its own positive `<RESOURCE>_ID` is an update (PUT to the
//! collection path), anything else is a create (POST).
//!
//! Two questions are answered separately. [`is_update`] asks whether the id
//! field holds any positive number, so a payload is never re-created by
//! accident. [`record_id`] reads that number back as an integer id, which
//! only works for ids that are whole and fit in an `i64`.
//!
//! # Example
//!
//! ```rust
//! use insightly::api::common::{record_id, is_update};
//! use serde_json::json;
//!
//! let existing = json!({"CONTACT_ID": 42, "FIRST_NAME": "Testy"});
//! assert_eq!(record_id(&existing, "CONTACT_ID"), Some(42));
//! assert!(is_update(&existing, "CONTACT_ID"));
//!
//! let fresh = json!({"FIRST_NAME": "Testy"});
//! assert!(!is_update(&fresh, "CONTACT_ID"));
//! ```

use serde_json::Value;

/// Returns the positive integer identifier stored under `id_field`, if any.
///
/// Accepts integers, integral floats and numeric strings. Missing fields,
/// `null`, zero, negative numbers, fractions, booleans and non-numeric
/// strings all yield `None`. Integers above `i64::MAX` saturate.
pub fn record_id(payload: &Value, id_field: &str) -> Option<i64> {
    payload.get(id_field).and_then(positive_id)
}

/// Reads a single JSON value as a positive integer identifier.
pub fn positive_id(value: &Value) -> Option<i64> {
    let id = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|v| v.min(i64::MAX as u64) as i64))
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f <= i64::MAX as f64)
                    .map(|f| f as i64)
            })?,
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };

    (id > 0).then_some(id)
}

/// Returns `true` when the payload should be sent as an update.
///
/// Any positive number counts, whole or not and however large, as does a
/// string holding one. Everything else is a create.
pub fn is_update(payload: &Value, id_field: &str) -> bool {
    match payload.get(id_field) {
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f > 0.0),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .is_ok_and(|f| f.is_finite() && f > 0.0),
        _ => false,
    }
}
