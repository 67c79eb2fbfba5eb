//! Composite controls shared across the list views.

pub(crate) mod confirm_modal;
pub(crate) mod pagination;

pub(crate) use confirm_modal::ConfirmModal;
pub(crate) use pagination::Pagination;
