//! Generic list-view state shared by every resource list.
//!
//! # Design
//! - One parametrized implementation instead of four near-identical copies.
//! - Pure transformation functions so the reducers test on the host.
//! - Replace rows wholesale on load; mutate locally only on delete/duplicate.

use crate::features::lists::pagination::{clamp_page, total_pages};
use draftsmith_api_models::JobStatus;
use uuid::Uuid;

/// Record shape every list row must expose.
pub trait ListRecord: Clone + PartialEq {
    /// Stable identifier used for identity matches on delete.
    fn id(&self) -> Uuid;
    /// Generation job state driving badges and polling.
    fn status(&self) -> &JobStatus;
    /// Display name used in confirmations and toasts.
    fn title(&self) -> &str;
}

/// Filter criteria for one list view.
///
/// All fields are strings defaulting to empty, meaning "no constraint".
/// `query_pairs` feeds the HTTP backend; `matches` feeds the in-memory
/// fixture backend, so both backends honor the same criteria.
pub trait ListFilter: Clone + Default + PartialEq {
    /// Record type the filter applies to.
    type Record: ListRecord;

    /// Whether every field is at its default (no constraint).
    fn is_empty(&self) -> bool;

    /// Non-empty fields as query-string pairs.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;

    /// Whether a record satisfies the active criteria.
    fn matches(&self, record: &Self::Record) -> bool;
}

/// List slice for one resource: the current page of rows plus paging state.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<R, F> {
    /// Rows for the currently displayed page, in backend order.
    pub rows: Vec<R>,
    /// Total matching records across all pages, as last reported.
    pub total_items: u64,
    /// One-based current page.
    pub current_page: usize,
    /// Active filter criteria.
    pub filters: F,
    /// Whether a visible (spinner-eligible) load is in flight.
    pub loading: bool,
}

impl<R, F: Default> Default for ListState<R, F> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total_items: 0,
            current_page: 1,
            filters: F::default(),
            loading: false,
        }
    }
}

/// Replace the page of rows and the total count atomically.
pub fn set_rows<R, F>(state: &mut ListState<R, F>, rows: Vec<R>, total_items: u64) {
    state.rows = rows;
    state.total_items = total_items;
    state.loading = false;
}

/// Remove exactly the row with the given id, preserving relative order.
///
/// Returns whether a row was removed. `total_items` is deliberately left
/// stale-by-one; the next load reconciles it.
pub fn remove_row<R: ListRecord, F>(state: &mut ListState<R, F>, id: Uuid) -> bool {
    let before = state.rows.len();
    state.rows.retain(|row| row.id() != id);
    state.rows.len() < before
}

/// Apply the outcome of a delete request for one record.
///
/// The row leaves the store only once the backend has acknowledged the
/// delete; a failed request leaves the rows exactly as they were, so the
/// view never shows a record as gone while it still exists server-side.
pub fn settle_delete<R: ListRecord, F>(state: &mut ListState<R, F>, id: Uuid, deleted: bool) {
    if deleted {
        remove_row(state, id);
    }
}

/// Prepend a freshly created record to the current page.
pub fn prepend_row<R, F>(state: &mut ListState<R, F>, row: R) {
    state.rows.insert(0, row);
    state.total_items = state.total_items.saturating_add(1);
}

/// Replace the filters wholesale and snap back to page 1.
///
/// The page reset is part of the same transition so a filter edit can never
/// leave the view parked on a now-out-of-range page.
pub fn set_filters<R, F>(state: &mut ListState<R, F>, filters: F) {
    state.filters = filters;
    state.current_page = 1;
}

/// Reset the filters to their defaults and snap back to page 1.
pub fn clear_filters<R, F: Default>(state: &mut ListState<R, F>) {
    state.filters = F::default();
    state.current_page = 1;
}

/// Move to a page, clamped into the range the last reported total allows.
pub fn set_page<R, F>(state: &mut ListState<R, F>, page: usize, page_size: usize) {
    state.current_page = clamp_page(page, total_pages(state.total_items, page_size));
}

/// Flag a visible load as started.
pub const fn set_loading<R, F>(state: &mut ListState<R, F>, loading: bool) {
    state.loading = loading;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use draftsmith_api_models::ArticleSummary;

    fn row(n: u128, title: &str) -> ArticleSummary {
        ArticleSummary {
            id: Uuid::from_u128(n),
            title: title.to_string(),
            category: "product".to_string(),
            status: JobStatus::Draft,
            created_at: Utc::now(),
        }
    }

    type State = ListState<ArticleSummary, crate::features::articles::state::ArticleFilters>;

    #[test]
    fn set_rows_replaces_page_and_total_together() {
        let mut state = State::default();
        state.loading = true;
        set_rows(&mut state, vec![row(1, "a"), row(2, "b")], 45);
        assert_eq!(state.rows.len(), 2);
        assert_eq!(state.total_items, 45);
        assert!(!state.loading);
    }

    #[test]
    fn remove_row_takes_exactly_the_identity_match() {
        let mut state = State::default();
        set_rows(&mut state, vec![row(1, "a"), row(2, "b"), row(3, "c")], 3);
        assert!(remove_row(&mut state, Uuid::from_u128(2)));
        let titles: Vec<&str> = state.rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["a", "c"]);
        // Count stays stale until the next load.
        assert_eq!(state.total_items, 3);
        assert!(!remove_row(&mut state, Uuid::from_u128(2)));
    }

    #[test]
    fn deleting_the_last_row_keeps_the_current_page() {
        let mut state = State::default();
        state.current_page = 2;
        set_rows(&mut state, vec![row(9, "last")], 13);
        remove_row(&mut state, Uuid::from_u128(9));
        assert!(state.rows.is_empty());
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn filter_edits_always_reset_the_page() {
        let mut state = State::default();
        state.current_page = 5;
        set_filters(
            &mut state,
            crate::features::articles::state::ArticleFilters {
                search: "launch".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(state.current_page, 1);
        state.current_page = 3;
        clear_filters(&mut state);
        assert_eq!(state.current_page, 1);
        assert!(state.filters.is_empty());
    }

    #[test]
    fn prepend_keeps_new_rows_first() {
        let mut state = State::default();
        set_rows(&mut state, vec![row(1, "a")], 1);
        prepend_row(&mut state, row(2, "copy"));
        assert_eq!(state.rows[0].title, "copy");
        assert_eq!(state.total_items, 2);
    }

    #[test]
    fn page_moves_clamp_into_range() {
        let mut state = State::default();
        set_page(&mut state, 0, 12);
        assert_eq!(state.current_page, 1);
        set_rows(&mut state, vec![row(1, "a")], 45);
        set_page(&mut state, 4, 12);
        assert_eq!(state.current_page, 4);
        // 45 records at 12 per page is 4 pages; a jump past the end lands
        // on the last page instead of an empty one.
        set_page(&mut state, 9, 12);
        assert_eq!(state.current_page, 4);
    }

    #[test]
    fn failed_delete_leaves_rows_untouched() {
        let mut state = State::default();
        set_rows(&mut state, vec![row(1, "a"), row(2, "b")], 2);
        settle_delete(&mut state, Uuid::from_u128(2), false);
        let titles: Vec<&str> = state.rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["a", "b"]);
        assert_eq!(state.total_items, 2);
        settle_delete(&mut state, Uuid::from_u128(2), true);
        assert_eq!(state.rows.len(), 1);
    }
}
