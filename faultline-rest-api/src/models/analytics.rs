use faultline_api_types::{Item, User};
use serde::{Deserialize, Serialize};

/// Aggregate price statistics over the item table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemsSummary {
    pub total_items: usize,
    pub avg_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub total_value: f64,
}

impl ItemsSummary {
    /// Summarise a snapshot; an empty table yields all zeros
    pub fn from_items(items: &[Item]) -> Self {
        if items.is_empty() {
            return Self::default();
        }

        let total_value: f64 = items.iter().map(|item| item.price).sum();
        let min_price = items.iter().map(|item| item.price).fold(f64::INFINITY, f64::min);
        let max_price = items.iter().map(|item| item.price).fold(f64::NEG_INFINITY, f64::max);

        Self {
            total_items: items.len(),
            avg_price: total_value / items.len() as f64,
            min_price,
            max_price,
            total_value,
        }
    }
}

/// User count plus the full user records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsersSummary {
    pub total_users: usize,
    pub user_list: Vec<User>,
}

impl UsersSummary {
    pub fn from_users(users: &[User]) -> Self {
        Self {
            total_users: users.len(),
            user_list: users.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_is_all_zeros() {
        assert_eq!(ItemsSummary::from_items(&[]), ItemsSummary::default());
    }

    #[test]
    fn test_price_statistics() {
        let items = vec![Item::new(1, "Item 1", 10.0), Item::new(2, "Item 2", 20.0)];
        let summary = ItemsSummary::from_items(&items);

        assert_eq!(summary.total_items, 2);
        assert_eq!(summary.avg_price, 15.0);
        assert_eq!(summary.min_price, 10.0);
        assert_eq!(summary.max_price, 20.0);
        assert_eq!(summary.total_value, 30.0);
    }

    #[test]
    fn test_user_list_keeps_order() {
        let users = vec![
            User::new(1, "john", "john@example.com").with_full_name("John Doe"),
            User::new(2, "jane", "jane@example.com"),
        ];
        let summary = UsersSummary::from_users(&users);
        assert_eq!(summary.total_users, 2);
        assert_eq!(summary.user_list, users);
        assert_eq!(summary.user_list[0].full_name.as_deref(), Some("John Doe"));
    }
}
