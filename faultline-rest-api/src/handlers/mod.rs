pub mod analytics;
pub mod faults;
pub mod health;
pub mod items;
pub mod root;
pub mod users;

// Re-export handler functions
pub use analytics::*;
pub use faults::*;
pub use health::*;
pub use items::*;
pub use root::*;
pub use users::*;
