//! Compile-time binding between a resource and its contract types.
//!
//! # Design
//! - One generic client surface instead of four copies of list/get/delete.
//! - Both backends (HTTP and fixture) are driven through this trait, so no
//!   component ever branches on which one is active.

use crate::features::lists::state::{ListFilter, ListRecord};
use crate::services::fixtures::FixtureStore;
use chrono::{DateTime, Utc};
use draftsmith_api_models::{
    ArticleDetail, ArticleInput, ArticleSummary, ImageJobDetail, ImageJobInput, ImageJobSummary,
    JobStatus, MarketingPlanDetail, MarketingPlanInput, MarketingPlanSummary, ResourceKind,
    VideoScriptDetail, VideoScriptInput, VideoScriptSummary,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use uuid::Uuid;

/// One page of records plus the total match count.
#[derive(Clone, Debug, PartialEq)]
pub struct ListPage<T> {
    /// Records for the requested page, in backend order.
    pub rows: Vec<T>,
    /// Total matching records across all pages.
    pub total: u64,
}

/// Binds a resource to its summary, detail, input, and filter types.
pub trait ApiResource {
    /// List-row record type.
    type Summary: ListRecord + Serialize + DeserializeOwned + 'static;
    /// Full record type served by the detail endpoint.
    type Detail: Clone + PartialEq + Serialize + DeserializeOwned + 'static;
    /// Generation request payload.
    type Input: Clone + PartialEq + Serialize + 'static;
    /// Filter criteria for the list view.
    type Filters: ListFilter<Record = Self::Summary> + 'static;

    /// Which backend resource this binding addresses.
    const KIND: ResourceKind;

    /// Page size for the list view.
    #[must_use]
    fn page_size() -> usize {
        Self::KIND.page_size()
    }

    /// Fixture-mode storage slot for this resource's rows.
    fn fixture_slot(store: &FixtureStore) -> &RefCell<Vec<Self::Summary>>;

    /// Fixture-mode synthesis of a full record from its list row.
    fn fixture_detail(summary: &Self::Summary) -> Self::Detail;

    /// Fixture-mode synthesis of a freshly submitted record.
    fn fixture_create(input: &Self::Input, id: Uuid, now: DateTime<Utc>) -> Self::Summary;
}

/// Marketing article resource binding.
pub struct Articles;

impl ApiResource for Articles {
    type Summary = ArticleSummary;
    type Detail = ArticleDetail;
    type Input = ArticleInput;
    type Filters = crate::features::articles::state::ArticleFilters;

    const KIND: ResourceKind = ResourceKind::Articles;

    fn fixture_slot(store: &FixtureStore) -> &RefCell<Vec<ArticleSummary>> {
        &store.articles
    }

    fn fixture_detail(summary: &ArticleSummary) -> ArticleDetail {
        ArticleDetail {
            id: summary.id,
            title: summary.title.clone(),
            category: summary.category.clone(),
            status: summary.status.clone(),
            created_at: summary.created_at,
            body: format!("# {}\n\nDraft copy pending review.", summary.title),
            keywords: Vec::new(),
        }
    }

    fn fixture_create(input: &ArticleInput, id: Uuid, now: DateTime<Utc>) -> ArticleSummary {
        ArticleSummary {
            id,
            title: input.topic.clone(),
            category: "product".to_string(),
            status: JobStatus::Queued,
            created_at: now,
        }
    }
}

/// Product image job resource binding.
pub struct ImageJobs;

impl ApiResource for ImageJobs {
    type Summary = ImageJobSummary;
    type Detail = ImageJobDetail;
    type Input = ImageJobInput;
    type Filters = crate::features::images::state::ImageFilters;

    const KIND: ResourceKind = ResourceKind::ImageJobs;

    fn fixture_slot(store: &FixtureStore) -> &RefCell<Vec<ImageJobSummary>> {
        &store.image_jobs
    }

    fn fixture_detail(summary: &ImageJobSummary) -> ImageJobDetail {
        ImageJobDetail {
            id: summary.id,
            prompt: summary.prompt.clone(),
            style: summary.style.clone(),
            size: "1024x1024".to_string(),
            asset_path: summary.asset_path.clone(),
            status: summary.status.clone(),
            created_at: summary.created_at,
        }
    }

    fn fixture_create(input: &ImageJobInput, id: Uuid, now: DateTime<Utc>) -> ImageJobSummary {
        ImageJobSummary {
            id,
            prompt: input.prompt.clone(),
            style: input.style.clone(),
            asset_path: None,
            status: JobStatus::Queued,
            created_at: now,
        }
    }
}

/// Marketing plan resource binding.
pub struct MarketingPlans;

impl ApiResource for MarketingPlans {
    type Summary = MarketingPlanSummary;
    type Detail = MarketingPlanDetail;
    type Input = MarketingPlanInput;
    type Filters = crate::features::plans::state::PlanFilters;

    const KIND: ResourceKind = ResourceKind::MarketingPlans;

    fn fixture_slot(store: &FixtureStore) -> &RefCell<Vec<MarketingPlanSummary>> {
        &store.marketing_plans
    }

    fn fixture_detail(summary: &MarketingPlanSummary) -> MarketingPlanDetail {
        MarketingPlanDetail {
            id: summary.id,
            title: summary.title.clone(),
            channel: summary.channel.clone(),
            status: summary.status.clone(),
            created_at: summary.created_at,
            entries: Vec::new(),
        }
    }

    fn fixture_create(
        input: &MarketingPlanInput,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> MarketingPlanSummary {
        MarketingPlanSummary {
            id,
            title: format!("{} ({})", input.product, input.month),
            channel: "email".to_string(),
            status: JobStatus::Queued,
            created_at: now,
        }
    }
}

/// Video script resource binding.
pub struct VideoScripts;

impl ApiResource for VideoScripts {
    type Summary = VideoScriptSummary;
    type Detail = VideoScriptDetail;
    type Input = VideoScriptInput;
    type Filters = crate::features::scripts::state::ScriptFilters;

    const KIND: ResourceKind = ResourceKind::VideoScripts;

    fn fixture_slot(store: &FixtureStore) -> &RefCell<Vec<VideoScriptSummary>> {
        &store.video_scripts
    }

    fn fixture_detail(summary: &VideoScriptSummary) -> VideoScriptDetail {
        VideoScriptDetail {
            id: summary.id,
            title: summary.title.clone(),
            platform: summary.platform.clone(),
            duration_secs: summary.duration_secs,
            status: summary.status.clone(),
            created_at: summary.created_at,
            scenes: Vec::new(),
        }
    }

    fn fixture_create(input: &VideoScriptInput, id: Uuid, now: DateTime<Utc>) -> VideoScriptSummary {
        VideoScriptSummary {
            id,
            title: input.topic.clone(),
            platform: input.platform.clone(),
            duration_secs: input.duration_secs,
            status: JobStatus::Queued,
            created_at: now,
        }
    }
}
