// Utility functions
pub mod bson_json;
pub mod error;

pub use bson_json::*;
pub use error::*;
