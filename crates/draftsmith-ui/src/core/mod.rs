//! Core, DOM-free primitives and helpers for the dashboard.
pub mod store;
