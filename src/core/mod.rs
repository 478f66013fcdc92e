//! Core module containing the record type, query engine and error taxonomy

pub mod error;
pub mod query;
pub mod rep;

pub use error::{
    AiError, ConfigError, DashError, DashResult, DataError, ErrorResponse, ValidationError,
};
pub use query::{RepPage, RepQuery};
pub use rep::SalesRep;
