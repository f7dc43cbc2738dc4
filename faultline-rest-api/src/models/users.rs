use faultline_api_types::{Page, User};
use serde::{Deserialize, Serialize};

/// One page of users plus the full table size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
    pub total: usize,
}

impl From<Page<User>> for UserListResponse {
    fn from(page: Page<User>) -> Self {
        Self {
            users: page.records,
            total: page.total,
        }
    }
}
