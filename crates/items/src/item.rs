use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use itemdesk_core::{DomainError, DomainResult, Entity, ItemId};

/// Reserved key carrying the record identifier on the wire.
pub const ID_FIELD: &str = "id";

/// Reserved key carrying the soft-delete flag on the wire.
pub const ACTIVE_FIELD: &str = "is_active";

/// Fields every record must carry on create and replace.
pub const REQUIRED_FIELDS: [&str; 2] = ["name", "email"];

/// Open, caller-defined attributes of an item (insertion ordered).
///
/// Never contains [`ID_FIELD`] or [`ACTIVE_FIELD`] once stored; those live on
/// [`Item`] itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields(Map<String, Value>);

impl Fields {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A field "has a value" when present, not `null`, and not an empty string.
    pub fn has_value(&self, key: &str) -> bool {
        match self.0.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }

    /// Reject payloads lacking any of [`REQUIRED_FIELDS`].
    pub fn require(&self) -> DomainResult<()> {
        let missing: Vec<&str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|k| !self.has_value(k))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::validation(format!(
                "required fields missing: {}",
                missing.join(", ")
            )))
        }
    }

    /// Extract the soft-delete flag, if the caller supplied one.
    ///
    /// Only JSON booleans are accepted.
    pub(crate) fn take_active_flag(&mut self) -> DomainResult<Option<bool>> {
        match self.0.remove(ACTIVE_FIELD) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(b)),
            Some(other) => Err(DomainError::validation(format!(
                "{ACTIVE_FIELD} must be a boolean, got {other}"
            ))),
        }
    }
}

impl From<Map<String, Value>> for Fields {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

impl IntoIterator for Fields {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A stored item record.
///
/// Serializes flat: `{"id": ..., <fields>..., "is_active": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    id: ItemId,
    #[serde(flatten)]
    fields: Fields,
    is_active: bool,
}

impl Item {
    /// Build a record. Ids are only ever minted by the store.
    pub(crate) fn new(id: ItemId, fields: Fields, is_active: bool) -> Self {
        Self {
            id,
            fields,
            is_active,
        }
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    pub(crate) fn fields_mut(&mut self) -> &mut Fields {
        &mut self.fields
    }

    pub(crate) fn replace_fields(&mut self, fields: Fields, is_active: bool) {
        self.fields = fields;
        self.is_active = is_active;
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(v: Value) -> Fields {
        match v {
            Value::Object(map) => Fields::from(map),
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn require_accepts_name_and_email() {
        assert!(fields(json!({"name": "A", "email": "a@x.com"})).require().is_ok());
    }

    #[test]
    fn require_reports_every_missing_field() {
        let err = fields(json!({"phone": "1"})).require().unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("required fields missing: name, email")
        );
    }

    #[test]
    fn null_and_empty_strings_do_not_count_as_values() {
        let f = fields(json!({"name": "", "email": null}));
        assert!(!f.has_value("name"));
        assert!(!f.has_value("email"));
        assert!(f.require().is_err());
    }

    #[test]
    fn active_flag_must_be_boolean() {
        let mut f = fields(json!({"is_active": "no"}));
        assert!(matches!(f.take_active_flag(), Err(DomainError::Validation(_))));

        let mut f = fields(json!({"is_active": false, "name": "A"}));
        assert_eq!(f.take_active_flag().unwrap(), Some(false));
        assert!(!f.contains_key(ACTIVE_FIELD));
    }

    #[test]
    fn item_serializes_flat_with_id_first() {
        let id = ItemId::new();
        let item = Item::new(id, fields(json!({"name": "A", "email": "a@x.com"})), true);
        let text = serde_json::to_string(&item).unwrap();
        assert_eq!(
            text,
            format!(r#"{{"id":"{id}","name":"A","email":"a@x.com","is_active":true}}"#)
        );
    }
}
