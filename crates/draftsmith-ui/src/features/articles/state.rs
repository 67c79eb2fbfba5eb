//! Article list filters and record bindings.

use crate::features::lists::state::{ListFilter, ListRecord};
use draftsmith_api_models::{ArticleSummary, JobStatus};
use uuid::Uuid;

/// Status values offered by the article filter dropdown.
pub const STATUS_OPTIONS: [&str; 5] = ["draft", "queued", "processing", "completed", "failed"];

/// Filter criteria for the articles list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArticleFilters {
    /// Free-text search over the title.
    pub search: String,
    /// Editorial category, empty for any.
    pub category: String,
    /// Status label, empty for any.
    pub status: String,
}

impl ListFilter for ArticleFilters {
    type Record = ArticleSummary;

    fn is_empty(&self) -> bool {
        self.search.is_empty() && self.category.is_empty() && self.status.is_empty()
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.search.trim().is_empty() {
            pairs.push(("search", self.search.trim().to_string()));
        }
        if !self.category.is_empty() {
            pairs.push(("category", self.category.clone()));
        }
        if !self.status.is_empty() {
            pairs.push(("status", self.status.clone()));
        }
        pairs
    }

    fn matches(&self, record: &ArticleSummary) -> bool {
        let search = self.search.trim().to_lowercase();
        (search.is_empty() || record.title.to_lowercase().contains(&search))
            && (self.category.is_empty() || record.category == self.category)
            && (self.status.is_empty() || record.status.label() == self.status)
    }
}

impl ListRecord for ArticleSummary {
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

    fn article(title: &str, category: &str, status: JobStatus) -> ArticleSummary {
        ArticleSummary {
            id: Uuid::from_u128(1),
            title: title.to_string(),
            category: category.to_string(),
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_filters_match_everything() {
        let filters = ArticleFilters::default();
        assert!(filters.is_empty());
        assert!(filters.query_pairs().is_empty());
        assert!(filters.matches(&article("Anything", "seo", JobStatus::Draft)));
    }

    #[test]
    fn search_is_case_insensitive_over_titles() {
        let filters = ArticleFilters {
            search: "LAUNCH".to_string(),
            ..Default::default()
        };
        assert!(filters.matches(&article("Spring launch recap", "seo", JobStatus::Draft)));
        assert!(!filters.matches(&article("Holiday teaser", "seo", JobStatus::Draft)));
    }

    #[test]
    fn status_filter_uses_state_labels() {
        let filters = ArticleFilters {
            status: "processing".to_string(),
            ..Default::default()
        };
        assert!(filters.matches(&article(
            "a",
            "seo",
            JobStatus::Processing {
                last_heartbeat: None
            }
        )));
        assert!(!filters.matches(&article("a", "seo", JobStatus::Queued)));
    }

    #[test]
    fn query_pairs_skip_blank_fields() {
        let filters = ArticleFilters {
            search: "  launch ".to_string(),
            category: String::new(),
            status: "draft".to_string(),
        };
        assert_eq!(
            filters.query_pairs(),
            vec![("search", "launch".to_string()), ("status", "draft".to_string())]
        );
    }
}
