//! Loading the record collection from the data document
//!
//! The loader runs exactly once, before the listener binds. The
//! collection it returns is held immutably for the process lifetime; a
//! failure here is fatal to startup.

use serde::Deserialize;

use crate::core::{DataError, SalesRep};

/// Top-level shape of the data document
#[derive(Debug, Deserialize)]
struct DataDocument {
    /// The record array; an absent key means an empty collection
    #[serde(default, rename = "salesReps")]
    sales_reps: Vec<SalesRep>,
}

/// Load the record collection from a JSON document.
///
/// An unreadable path is [`DataError::NotFound`]; content that is not
/// valid JSON of the expected shape is [`DataError::Corrupt`]. A document
/// without a `salesReps` key loads as an empty collection.
pub fn load(path: &str) -> Result<Vec<SalesRep>, DataError> {
    let content = std::fs::read_to_string(path).map_err(|_| DataError::NotFound {
        path: path.to_string(),
    })?;

    let document: DataDocument =
        serde_json::from_str(&content).map_err(|e| DataError::Corrupt {
            message: e.to_string(),
        })?;

    Ok(document.sales_reps)
}
