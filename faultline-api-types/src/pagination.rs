//! Offset pagination over table snapshots

use serde::{Deserialize, Serialize};

/// Default page size for list endpoints
pub const DEFAULT_LIMIT: usize = 10;

/// Skip/limit window requested by a caller
///
/// Out-of-range values are never an error: they simply produce a shorter
/// (possibly empty) slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(skip: usize, limit: usize) -> Self {
        Self { skip, limit }
    }
}

/// A window of records plus the size of the full collection
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = PageRequest::default();
        assert_eq!(request.skip, 0);
        assert_eq!(request.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let request: PageRequest = serde_json::from_str(r#"{"limit": 1}"#).unwrap();
        assert_eq!(request, PageRequest::new(0, 1));
    }
}
