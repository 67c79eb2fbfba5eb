//! Image job list filters and record bindings.

use crate::features::lists::state::{ListFilter, ListRecord};
use draftsmith_api_models::{ImageJobSummary, JobStatus};
use uuid::Uuid;

/// Style presets offered by the image filter dropdown.
pub const STYLE_OPTIONS: [&str; 4] = ["photo", "illustration", "render", "flat"];

/// Filter criteria for the image jobs list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageFilters {
    /// Free-text search over the prompt.
    pub search: String,
    /// Style preset, empty for any.
    pub style: String,
    /// Status label, empty for any.
    pub status: String,
}

impl ListFilter for ImageFilters {
    type Record = ImageJobSummary;

    fn is_empty(&self) -> bool {
        self.search.is_empty() && self.style.is_empty() && self.status.is_empty()
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.search.trim().is_empty() {
            pairs.push(("search", self.search.trim().to_string()));
        }
        if !self.style.is_empty() {
            pairs.push(("style", self.style.clone()));
        }
        if !self.status.is_empty() {
            pairs.push(("status", self.status.clone()));
        }
        pairs
    }

    fn matches(&self, record: &ImageJobSummary) -> bool {
        let search = self.search.trim().to_lowercase();
        (search.is_empty() || record.prompt.to_lowercase().contains(&search))
            && (self.style.is_empty() || record.style == self.style)
            && (self.status.is_empty() || record.status.label() == self.status)
    }
}

impl ListRecord for ImageJobSummary {
    fn id(&self) -> Uuid {
        self.id
    }

    fn status(&self) -> &JobStatus {
        &self.status
    }

    fn title(&self) -> &str {
        &self.prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn job(prompt: &str, style: &str, status: JobStatus) -> ImageJobSummary {
        ImageJobSummary {
            id: Uuid::from_u128(2),
            prompt: prompt.to_string(),
            style: style.to_string(),
            asset_path: None,
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn style_and_status_combine() {
        let filters = ImageFilters {
            style: "photo".to_string(),
            status: "completed".to_string(),
            ..Default::default()
        };
        assert!(filters.matches(&job(
            "bottle on marble",
            "photo",
            JobStatus::Completed { artifact: None }
        )));
        assert!(!filters.matches(&job(
            "bottle on marble",
            "render",
            JobStatus::Completed { artifact: None }
        )));
        assert!(!filters.matches(&job("bottle on marble", "photo", JobStatus::Queued)));
    }

    #[test]
    fn prompt_search_matches_substrings() {
        let filters = ImageFilters {
            search: "marble".to_string(),
            ..Default::default()
        };
        assert!(filters.matches(&job("Bottle on MARBLE slab", "photo", JobStatus::Draft)));
        assert!(!filters.matches(&job("Bottle on wood", "photo", JobStatus::Draft)));
    }
}
