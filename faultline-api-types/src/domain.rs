use serde::{Deserialize, Serialize};

/// Integer key shared by every record table
pub type RecordId = i64;

/// A record that can live in a keyed table
pub trait Record: Clone + Send + Sync + 'static {
    /// Human-readable entity name used in error messages ("Item", "User")
    const ENTITY: &'static str;

    /// Key under which the record is stored on create
    fn id(&self) -> RecordId;
}

/// Catalogue item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

impl Item {
    pub fn new(id: RecordId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            price,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Record for Item {
    const ENTITY: &'static str = "Item";

    fn id(&self) -> RecordId {
        self.id
    }
}

/// Registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl User {
    pub fn new(id: RecordId, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            full_name: None,
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }
}

impl Record for User {
    const ENTITY: &'static str = "User";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_description_is_optional() {
        let item: Item = serde_json::from_value(json!({
            "id": 998,
            "name": "To Delete",
            "price": 10.0
        }))
        .unwrap();

        assert_eq!(item.id(), 998);
        assert!(item.description.is_none());
    }

    #[test]
    fn test_missing_optional_serializes_as_null() {
        let user = User::new(7, "sam", "sam@example.com");
        let value = serde_json::to_value(&user).unwrap();
        assert!(value["full_name"].is_null());
        assert_eq!(User::ENTITY, "User");
    }

    #[test]
    fn test_item_requires_price() {
        let result: Result<Item, _> = serde_json::from_value(json!({"id": 1, "name": "x"}));
        assert!(result.is_err());
    }
}
