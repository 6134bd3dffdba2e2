//! `itemdesk-core` — domain building blocks shared by the item store and the API.
//!
//! This crate is **pure domain**: identifiers, the entity trait and the error model.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ItemId;
