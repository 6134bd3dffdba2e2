//! HTTP API: server wiring, routing, and request/response mapping for the item store.

pub mod app;
pub mod config;
pub mod middleware;
