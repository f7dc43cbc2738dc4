pub mod analytics;
pub mod common;
pub mod faults;
pub mod items;
pub mod users;

// Re-export commonly used types
pub use analytics::{ItemsSummary, UsersSummary};
pub use common::{DetailedHealthResponse, EndpointIndex, HealthResponse, MessageResponse, RootResponse};
pub use faults::*;
pub use items::ItemListResponse;
pub use users::UserListResponse;
