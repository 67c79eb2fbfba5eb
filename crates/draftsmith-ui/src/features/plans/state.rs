//! Marketing plan list filters and record bindings.

use crate::features::lists::state::{ListFilter, ListRecord};
use draftsmith_api_models::{JobStatus, MarketingPlanSummary};
use uuid::Uuid;

/// Channels offered by the plan filter dropdown.
pub const CHANNEL_OPTIONS: [&str; 4] = ["email", "social", "blog", "ads"];

/// Filter criteria for the marketing plans list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlanFilters {
    /// Free-text search over the title.
    pub search: String,
    /// Primary channel, empty for any.
    pub channel: String,
    /// Status label, empty for any.
    pub status: String,
}

impl ListFilter for PlanFilters {
    type Record = MarketingPlanSummary;

    fn is_empty(&self) -> bool {
        self.search.is_empty() && self.channel.is_empty() && self.status.is_empty()
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.search.trim().is_empty() {
            pairs.push(("search", self.search.trim().to_string()));
        }
        if !self.channel.is_empty() {
            pairs.push(("channel", self.channel.clone()));
        }
        if !self.status.is_empty() {
            pairs.push(("status", self.status.clone()));
        }
        pairs
    }

    fn matches(&self, record: &MarketingPlanSummary) -> bool {
        let search = self.search.trim().to_lowercase();
        (search.is_empty() || record.title.to_lowercase().contains(&search))
            && (self.channel.is_empty() || record.channel == self.channel)
            && (self.status.is_empty() || record.status.label() == self.status)
    }
}

impl ListRecord for MarketingPlanSummary {
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
    fn channel_filter_is_exact() {
        let filters = PlanFilters {
            channel: "email".to_string(),
            ..Default::default()
        };
        let plan = MarketingPlanSummary {
            id: Uuid::from_u128(3),
            title: "Q3 push".to_string(),
            channel: "email".to_string(),
            status: JobStatus::Draft,
            created_at: Utc::now(),
        };
        assert!(filters.matches(&plan));
        let social = MarketingPlanSummary {
            channel: "social".to_string(),
            ..plan
        };
        assert!(!filters.matches(&social));
    }
}
