//! Decoding of the raw payload into typed items
//!
//! The payload must be a JSON array of objects. `id` and `listId` are
//! mandatory integers; any element missing one, or carrying one with the
//! wrong type, fails the entire batch — there is no partial decode. `name`
//! is the single tolerated anomaly: absent or `null` decodes as `""` (see
//! [`Item`]). Unknown extra keys are ignored.

use crate::error::{DecodeError, Result};
use crate::types::Item;

use tracing::debug;

/// Decode the payload bytes into items, preserving input order
///
/// # Errors
///
/// Returns [`DecodeError`] when the bytes are not valid JSON, the document
/// is not an array, or any element lacks a required field or has one of the
/// wrong type.
pub fn decode_items(bytes: &[u8]) -> Result<Vec<Item>> {
    let items: Vec<Item> = serde_json::from_slice(bytes).map_err(DecodeError::from)?;
    debug!(count = items.len(), "decoded items");
    Ok(items)
}
