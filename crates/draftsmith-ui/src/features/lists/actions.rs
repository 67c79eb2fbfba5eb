//! List-row actions and display helpers.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Each gesture maps to exactly one effect class; delete only ever opens a
//!   confirmation and never calls the backend directly.

use draftsmith_api_models::ResourceKind;
use uuid::Uuid;

/// Row-level actions emitted from list controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListAction {
    /// Open the record's read-only detail.
    View(Uuid),
    /// Open the record for editing.
    Edit(Uuid),
    /// Ask to delete the record.
    Delete(Uuid),
    /// Clone the record as a new draft (marketing plans only).
    Duplicate(Uuid),
    /// Download the record's generated artifact.
    Download(Uuid),
}

/// Effect class an action resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionEffect {
    /// Navigate or fetch a single record; the list store is untouched.
    Navigation,
    /// Open transient confirmation state only; no backend call yet.
    IntentOnly,
    /// Call the backend and prepend the returned record.
    BackendCall,
    /// Resolve the artifact URL and hand it to the browser.
    AssetDownload,
}

/// Classify an action into its single effect.
#[must_use]
pub const fn effect_of(action: ListAction) -> ActionEffect {
    match action {
        ListAction::View(_) | ListAction::Edit(_) => ActionEffect::Navigation,
        ListAction::Delete(_) => ActionEffect::IntentOnly,
        ListAction::Duplicate(_) => ActionEffect::BackendCall,
        ListAction::Download(_) => ActionEffect::AssetDownload,
    }
}

/// Id targeted by an action.
#[must_use]
pub const fn target_of(action: ListAction) -> Uuid {
    match action {
        ListAction::View(id)
        | ListAction::Edit(id)
        | ListAction::Delete(id)
        | ListAction::Duplicate(id)
        | ListAction::Download(id) => id,
    }
}

/// Toast message for a successful delete.
#[must_use]
pub fn deleted_message(kind: ResourceKind, title: &str) -> String {
    format!("Deleted {} \"{title}\"", kind.singular())
}

/// Toast message for a successful duplicate.
#[must_use]
pub fn duplicated_message(kind: ResourceKind, title: &str) -> String {
    format!("Duplicated {} as \"{title}\"", kind.singular())
}

/// Toast message for a failed list load; stale data stays on screen.
#[must_use]
pub fn load_failed_message(kind: ResourceKind, detail: &str) -> String {
    format!("Could not refresh {}s: {detail}", kind.singular())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_action_maps_to_one_effect() {
        let id = Uuid::from_u128(1);
        assert_eq!(effect_of(ListAction::View(id)), ActionEffect::Navigation);
        assert_eq!(effect_of(ListAction::Edit(id)), ActionEffect::Navigation);
        assert_eq!(effect_of(ListAction::Delete(id)), ActionEffect::IntentOnly);
        assert_eq!(
            effect_of(ListAction::Duplicate(id)),
            ActionEffect::BackendCall
        );
        assert_eq!(
            effect_of(ListAction::Download(id)),
            ActionEffect::AssetDownload
        );
        assert_eq!(target_of(ListAction::Delete(id)), id);
    }

    #[test]
    fn messages_name_the_resource() {
        assert_eq!(
            deleted_message(ResourceKind::Articles, "Spring recap"),
            "Deleted article \"Spring recap\""
        );
        assert!(
            load_failed_message(ResourceKind::MarketingPlans, "network error")
                .contains("marketing plans")
        );
        assert!(duplicated_message(ResourceKind::MarketingPlans, "Q3 (copy)").contains("Q3"));
    }
}
