//! Feature slices: one per resource list plus the shared list machinery.

pub mod articles;
pub mod images;
pub mod lists;
pub mod plans;
pub mod scripts;
