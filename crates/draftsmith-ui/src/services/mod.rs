//! Backend access: error taxonomy, resource bindings, and both client
//! implementations (REST and fixture-backed).

pub mod error;
pub mod fixtures;
pub mod resource;

#[cfg(target_arch = "wasm32")]
pub mod api;
