//! Video script list filters and record bindings.

use crate::features::lists::state::{ListFilter, ListRecord};
use draftsmith_api_models::{JobStatus, VideoScriptSummary};
use uuid::Uuid;

/// Platforms offered by the script filter dropdown.
pub const PLATFORM_OPTIONS: [&str; 4] = ["youtube", "tiktok", "instagram", "linkedin"];

/// Filter criteria for the video scripts list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptFilters {
    /// Free-text search over the title.
    pub search: String,
    /// Target platform, empty for any.
    pub platform: String,
    /// Status label, empty for any.
    pub status: String,
}

impl ListFilter for ScriptFilters {
    type Record = VideoScriptSummary;

    fn is_empty(&self) -> bool {
        self.search.is_empty() && self.platform.is_empty() && self.status.is_empty()
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.search.trim().is_empty() {
            pairs.push(("search", self.search.trim().to_string()));
        }
        if !self.platform.is_empty() {
            pairs.push(("platform", self.platform.clone()));
        }
        if !self.status.is_empty() {
            pairs.push(("status", self.status.clone()));
        }
        pairs
    }

    fn matches(&self, record: &VideoScriptSummary) -> bool {
        let search = self.search.trim().to_lowercase();
        (search.is_empty() || record.title.to_lowercase().contains(&search))
            && (self.platform.is_empty() || record.platform == self.platform)
            && (self.status.is_empty() || record.status.label() == self.status)
    }
}

impl ListRecord for VideoScriptSummary {
    fn id(&self) -> Uuid {
        self.id
    }

    fn status(&self) -> &JobStatus {
        &self.status
    }

    fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn platform_filter_is_exact() {
        let filters = ScriptFilters {
            platform: "tiktok".to_string(),
            ..Default::default()
        };
        let script = VideoScriptSummary {
            id: Uuid::from_u128(4),
            title: "Unboxing teaser".to_string(),
            platform: "tiktok".to_string(),
            duration_secs: Some(30),
            status: JobStatus::Queued,
            created_at: Utc::now(),
        };
        assert!(filters.matches(&script));
        let other = VideoScriptSummary {
            platform: "youtube".to_string(),
            ..script
        };
        assert!(!filters.matches(&other));
    }
}
