//! The sales representative record type

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One sales representative as stored in the data document.
///
/// Only the fields the query engine inspects are typed. Everything else
/// the document carries (skills, deals, clients, …) rides in `extra` and
/// is re-serialized verbatim, so the API exposes whatever the document
/// contains without the engine ever looking at it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesRep {
    /// Unique identifier within the collection
    pub id: i64,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Job title (e.g. "Senior Sales Executive")
    #[serde(default)]
    pub role: String,

    /// Sales region (e.g. "North America")
    #[serde(default)]
    pub region: String,

    /// Opaque passthrough fields, never inspected or mutated
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
