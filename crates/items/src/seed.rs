//! Example records a fresh store starts with.

use itemdesk_core::ItemId;

use crate::item::{Fields, Item};

/// Three demo users: two active, one logically deleted.
pub fn seed_records() -> Vec<Item> {
    [("User01", true), ("User02", true), ("User03", false)]
        .into_iter()
        .map(|(name, active)| {
            let email = format!("{}@example.com", name.to_lowercase());
            let fields: Fields = [("name", name.to_string()), ("email", email)]
                .into_iter()
                .collect();
            Item::new(ItemId::new(), fields, active)
        })
        .collect()
}
