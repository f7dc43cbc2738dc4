pub mod json;
pub mod path;
pub mod query;

// Re-export commonly used extractors
pub use json::JsonBody;
pub use path::PathParam;
pub use query::QueryParams;
