//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - One list slice per resource, all instances of the same generic state.

use crate::features::articles::state::ArticleFilters;
use crate::features::images::state::ImageFilters;
use crate::features::lists::state::ListState;
use crate::features::plans::state::PlanFilters;
use crate::features::scripts::state::ScriptFilters;
use crate::models::ToastState;
use draftsmith_api_models::{
    ArticleSummary, ImageJobSummary, MarketingPlanSummary, VideoScriptSummary,
};
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Article list state.
    pub articles: ListState<ArticleSummary, ArticleFilters>,
    /// Image job list state.
    pub images: ListState<ImageJobSummary, ImageFilters>,
    /// Marketing plan list state.
    pub plans: ListState<MarketingPlanSummary, PlanFilters>,
    /// Video script list state.
    pub scripts: ListState<VideoScriptSummary, ScriptFilters>,
    /// Toast queue shared across views.
    pub toasts: ToastState,
}
