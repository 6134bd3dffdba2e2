//! Items domain module.
//!
//! The item record model and the in-memory `ItemStore` that owns every record.
//! No IO, no HTTP: the API crate maps requests onto these operations.

pub mod item;
pub mod seed;
pub mod store;

pub use item::{Fields, Item, ACTIVE_FIELD, ID_FIELD, REQUIRED_FIELDS};
pub use store::{ItemStore, PatchOutcome};
