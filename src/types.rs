//! Core types for itemfeed

use serde::{Deserialize, Deserializer, Serialize};

/// One entry from the remote item list
///
/// Items are decoded once from the wire payload and are immutable from then
/// on; every pipeline stage produces a new sequence rather than mutating
/// items in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Identifier of the item. Intended to be unique, but uniqueness is not
    /// enforced; duplicate ids are ordered by their input position.
    pub id: i64,

    /// Grouping key (wire field `listId`). A bare integer — there is no
    /// separate category entity to validate it against.
    #[serde(rename = "listId")]
    pub list_id: i64,

    /// Display label. Absent or `null` on the wire decodes to `""`; the
    /// payload may also legitimately contain an explicit empty string.
    #[serde(default, deserialize_with = "name_or_empty")]
    pub name: String,
}

/// Decode `name` treating both an absent key and an explicit `null` as `""`.
///
/// Only `name` gets this repair; `id` and `listId` stay mandatory.
fn name_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let name = Option::<String>::deserialize(deserializer)?;
    Ok(name.unwrap_or_default())
}

/// Token identifying one `load` invocation
///
/// Tokens are issued in strictly increasing order. A consumer holding a
/// completed load compares its token against the loader's latest issued
/// token and discards the result when a newer invocation has superseded it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadToken(pub u64);

impl LoadToken {
    /// Get the inner u64 value
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for LoadToken {
    fn from(token: u64) -> Self {
        Self(token)
    }
}

impl std::fmt::Display for LoadToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
