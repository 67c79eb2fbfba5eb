//! Shared list-view machinery: the one generic implementation behind every
//! resource list.
//!
//! # Design
//! - Filtering, pagination, load fencing, polling, and delete intents live
//!   here once; per-resource feature slices supply only records, filters,
//!   validation, and markup.
//! - Everything outside `hooks` is pure and tested on the host.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub mod hooks;
pub mod intent;
pub mod pagination;
pub mod state;
pub mod sync;
