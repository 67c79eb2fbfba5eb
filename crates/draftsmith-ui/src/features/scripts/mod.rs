//! Video scripts feature surface: filters, form parsing, and views.

pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
