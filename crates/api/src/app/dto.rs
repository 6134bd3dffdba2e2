use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use itemdesk_items::{Fields, Item, PatchOutcome};

use crate::app::errors;

pub const CREATED: &str = "Item created successfully.";
pub const REPLACED: &str = "Item replaced successfully.";
pub const PATCHED: &str = "Item partially updated.";
pub const NOTHING_TO_PATCH: &str = "No fields were provided to update.";
pub const DELETED: &str = "Item logically deleted.";

// -------------------------
// Request bodies
// -------------------------

/// Accept only a JSON object as an item payload.
pub fn fields_from_body(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Fields, axum::response::Response> {
    match body {
        Ok(Json(Value::Object(map))) => Ok(Fields::from(map)),
        Ok(Json(_)) => Err(errors::json_error(
            StatusCode::BAD_REQUEST,
            "invalid_body",
            "request body must be a JSON object",
        )),
        Err(rejection) => Err(errors::body_rejection_to_response(rejection)),
    }
}

// -------------------------
// Response envelopes
// -------------------------

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub message: &'static str,
    pub data: Item,
}

impl ItemResponse {
    pub fn new(message: &'static str, data: Item) -> Self {
        Self { message, data }
    }
}

#[derive(Debug, Serialize)]
pub struct PatchResponse {
    pub message: &'static str,
    pub updated_fields: Vec<String>,
    pub data: Item,
}

impl From<PatchOutcome> for PatchResponse {
    fn from(outcome: PatchOutcome) -> Self {
        let message = if outcome.is_noop() { NOTHING_TO_PATCH } else { PATCHED };
        Self {
            message,
            updated_fields: outcome.updated_fields,
            data: outcome.item,
        }
    }
}
