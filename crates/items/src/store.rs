//! In-memory item store.
//!
//! One `RwLock` guards both the ordered record list and the id index, so every
//! operation observes and mutates a consistent snapshot. Operations validate
//! before touching a record: an `Err` return means nothing changed.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;
use tracing::debug;

use itemdesk_core::{DomainError, DomainResult, Entity, ItemId};

use crate::item::{Fields, Item, ACTIVE_FIELD, ID_FIELD};

/// Result of a partial update.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchOutcome {
    pub item: Item,
    /// Keys applied, in payload order.
    pub updated_fields: Vec<String>,
}

impl PatchOutcome {
    /// Nothing was applied (empty payload, or only `id`).
    pub fn is_noop(&self) -> bool {
        self.updated_fields.is_empty()
    }
}

#[derive(Debug, Default)]
struct Records {
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
}

impl Records {
    fn push(&mut self, item: Item) {
        self.index.insert(*item.id(), self.items.len());
        self.items.push(item);
    }

    fn get(&self, id: &ItemId) -> DomainResult<&Item> {
        self.index
            .get(id)
            .map(|&pos| &self.items[pos])
            .ok_or(DomainError::NotFound)
    }

    fn get_mut(&mut self, id: &ItemId) -> DomainResult<&mut Item> {
        match self.index.get(id) {
            Some(&pos) => Ok(&mut self.items[pos]),
            None => Err(DomainError::NotFound),
        }
    }
}

/// Canonical owner of every item record.
///
/// Records are kept in insertion order and never physically removed.
#[derive(Debug, Default)]
pub struct ItemStore {
    inner: RwLock<Records>,
}

impl ItemStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with [`crate::seed::seed_records`].
    pub fn with_seed() -> Self {
        Self::from_records(crate::seed::seed_records())
    }

    pub(crate) fn from_records(records: impl IntoIterator<Item = Item>) -> Self {
        let mut inner = Records::default();
        for item in records {
            inner.push(item);
        }
        Self {
            inner: RwLock::new(inner),
        }
    }

    /// Number of stored records, active or not.
    pub fn len(&self) -> usize {
        self.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every active record, in insertion order.
    pub fn list_active(&self) -> Vec<Item> {
        self.read()
            .items
            .iter()
            .filter(|item| item.is_active())
            .cloned()
            .collect()
    }

    /// Store a new record under a freshly minted id.
    ///
    /// Caller-supplied `id` and `is_active` are discarded; new records are active.
    pub fn create(&self, mut fields: Fields) -> DomainResult<Item> {
        fields.require()?;
        fields.remove(ID_FIELD);
        fields.remove(ACTIVE_FIELD);

        let item = Item::new(ItemId::new(), fields, true);
        self.write().push(item.clone());

        debug!(item_id = %item.id(), "item created");
        Ok(item)
    }

    /// Fetch a record regardless of its active flag.
    pub fn get_by_id(&self, id: &str) -> DomainResult<Item> {
        let id = lookup_key(id)?;
        self.read().get(&id).cloned()
    }

    /// Overwrite every field of a record except its id.
    ///
    /// `is_active` defaults to `true` unless the payload sets it.
    pub fn replace(&self, id: &str, mut fields: Fields) -> DomainResult<Item> {
        let id = lookup_key(id)?;
        let mut records = self.write();
        let item = records.get_mut(&id)?;

        fields.require()?;
        let is_active = fields.take_active_flag()?.unwrap_or(true);
        fields.remove(ID_FIELD);

        item.replace_fields(fields, is_active);
        debug!(item_id = %id, is_active, "item replaced");
        Ok(item.clone())
    }

    /// Merge the supplied fields into a record, ignoring `id`.
    pub fn patch(&self, id: &str, fields: Fields) -> DomainResult<PatchOutcome> {
        let id = lookup_key(id)?;
        let mut records = self.write();
        let item = records.get_mut(&id)?;

        if let Some(flag) = fields.get(ACTIVE_FIELD) {
            if !flag.is_boolean() {
                return Err(DomainError::validation(format!(
                    "{ACTIVE_FIELD} must be a boolean, got {flag}"
                )));
            }
        }

        let mut updated_fields = Vec::new();
        for (key, value) in fields {
            match (key.as_str(), value) {
                (ID_FIELD, _) => continue,
                (ACTIVE_FIELD, Value::Bool(active)) => item.set_active(active),
                (_, value) => {
                    item.fields_mut().insert(key.clone(), value);
                }
            }
            updated_fields.push(key);
        }

        debug!(item_id = %id, ?updated_fields, "item patched");
        Ok(PatchOutcome {
            item: item.clone(),
            updated_fields,
        })
    }

    /// Logically delete a record. Deleting an inactive record is a conflict.
    pub fn delete(&self, id: &str) -> DomainResult<Item> {
        let id = lookup_key(id)?;
        let mut records = self.write();
        let item = records.get_mut(&id)?;

        if !item.is_active() {
            return Err(DomainError::conflict("item already deleted"));
        }
        item.set_active(false);

        debug!(item_id = %id, "item deactivated");
        Ok(item.clone())
    }

    fn read(&self) -> RwLockReadGuard<'_, Records> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Records> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Only the exact stored spelling of an id names a record.
fn lookup_key(id: &str) -> DomainResult<ItemId> {
    id.parse::<ItemId>()
        .ok()
        .filter(|parsed| parsed.to_string() == id)
        .ok_or(DomainError::NotFound)
}
