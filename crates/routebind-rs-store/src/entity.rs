//! The resolved-entity record handed back by stores and installed into routes.

use std::collections::HashMap;

use crate::value::Value;

/// A record resolved from an entity store.
///
/// An `Entity` is a kind (the logical table or collection name, e.g. `"User"`)
/// plus a field map. It is what a successful binding installs into the route's
/// parameter bag, so downstream handlers read the already-resolved record
/// instead of repeating the lookup.
///
/// # Examples
///
/// ```
/// use routebind_rs_store::entity::Entity;
/// use routebind_rs_store::value::Value;
///
/// let user = Entity::new("User")
///     .with("id", 1_i64)
///     .with("username", "alice");
///
/// assert_eq!(user.kind(), "User");
/// assert_eq!(user.get("username"), Some(&Value::from("alice")));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Entity {
    kind: String,
    fields: HashMap<String, Value>,
}

impl Entity {
    /// Creates an empty entity of the given kind.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: HashMap::new(),
        }
    }

    /// Adds a field value, builder style.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Sets a field value in place.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Returns the entity kind.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the value of a field, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the string value of a field, if present and a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Returns `true` if the given field matches the raw URL-segment value.
    pub fn field_matches(&self, field: &str, raw: &str) -> bool {
        self.fields
            .get(field)
            .is_some_and(|value| value.matches_raw(raw))
    }

    /// Returns all fields as name-value pairs.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }
}
