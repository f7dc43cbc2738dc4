//! Demo records loaded at startup

use faultline_api_types::{Item, User};

pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new(1, "Item 1", 10.0).with_description("First item"),
        Item::new(2, "Item 2", 20.0).with_description("Second item"),
    ]
}

pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "john", "john@example.com").with_full_name("John Doe"),
        User::new(2, "jane", "jane@example.com").with_full_name("Jane Doe"),
    ]
}
