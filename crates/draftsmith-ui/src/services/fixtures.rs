//! In-memory backend double seeded with fixture records.
//!
//! # Design
//! - Implements the same operation set as the HTTP client so components
//!   never know which backend is active.
//! - Filtering and pagination run client-side over the seeded vectors,
//!   mirroring what the real backend does server-side.

use crate::features::lists::state::{ListFilter, ListRecord};
use crate::features::plans::logic::clone_as_draft;
use crate::services::error::ApiError;
use crate::services::resource::{ApiResource, ListPage};
use chrono::{DateTime, Utc};
use draftsmith_api_models::{
    ArticleSummary, ImageJobSummary, JobStatus, MarketingPlanSummary, VideoScriptSummary,
};
use std::cell::RefCell;
use uuid::Uuid;

/// Fixture-backed stand-in for the generation backend.
#[derive(Debug, Default)]
pub struct FixtureStore {
    /// Seeded article rows.
    pub articles: RefCell<Vec<ArticleSummary>>,
    /// Seeded image job rows.
    pub image_jobs: RefCell<Vec<ImageJobSummary>>,
    /// Seeded marketing plan rows.
    pub marketing_plans: RefCell<Vec<MarketingPlanSummary>>,
    /// Seeded video script rows.
    pub video_scripts: RefCell<Vec<VideoScriptSummary>>,
}

fn ts(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .map_or_else(|_| Utc::now(), |parsed| parsed.with_timezone(&Utc))
}

impl FixtureStore {
    /// Build a store populated with development fixtures.
    #[must_use]
    pub fn seeded() -> Self {
        let store = Self::default();
        store.articles.replace(seed_articles());
        store.image_jobs.replace(seed_image_jobs());
        store.marketing_plans.replace(seed_plans());
        store.video_scripts.replace(seed_scripts());
        store
    }

    /// Serve one page of records matching the filters.
    #[must_use]
    pub fn list<R: ApiResource>(&self, page: usize, filters: &R::Filters) -> ListPage<R::Summary> {
        let matching: Vec<R::Summary> = {
            let rows = R::fixture_slot(self).borrow();
            rows.iter()
                .filter(|row| filters.matches(row))
                .cloned()
                .collect()
        };
        let total = u64::try_from(matching.len()).unwrap_or(u64::MAX);
        let page_size = R::page_size();
        let start = page.saturating_sub(1).saturating_mul(page_size);
        let rows = matching
            .into_iter()
            .skip(start)
            .take(page_size)
            .collect();
        ListPage { rows, total }
    }

    /// Serve a full record by id.
    ///
    /// # Errors
    /// Returns [`ApiError::NotFound`] when no record has the id.
    pub fn get<R: ApiResource>(&self, id: Uuid) -> Result<R::Detail, ApiError> {
        let rows = R::fixture_slot(self).borrow();
        rows.iter()
            .find(|row| row.id() == id)
            .map(|row| R::fixture_detail(row))
            .ok_or(ApiError::NotFound)
    }

    /// Delete a record by id.
    ///
    /// # Errors
    /// Returns [`ApiError::NotFound`] when no record has the id.
    pub fn delete<R: ApiResource>(&self, id: Uuid) -> Result<(), ApiError> {
        let mut rows = R::fixture_slot(self).borrow_mut();
        let before = rows.len();
        rows.retain(|row| row.id() != id);
        if rows.len() == before {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }

    /// Accept a generation request and return the queued record.
    #[must_use]
    pub fn generate<R: ApiResource>(&self, input: &R::Input) -> R::Summary {
        let record = R::fixture_create(input, Uuid::new_v4(), Utc::now());
        R::fixture_slot(self).borrow_mut().insert(0, record.clone());
        record
    }

    /// Clone a marketing plan as a new draft with a fresh identity.
    ///
    /// # Errors
    /// Returns [`ApiError::NotFound`] when no plan has the id.
    pub fn duplicate_plan(&self, id: Uuid) -> Result<MarketingPlanSummary, ApiError> {
        let mut rows = self.marketing_plans.borrow_mut();
        let source = rows
            .iter()
            .find(|row| row.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)?;
        let clone = clone_as_draft(&source, Uuid::new_v4(), Utc::now());
        rows.insert(0, clone.clone());
        Ok(clone)
    }

    /// Store an uploaded asset and return its backend-relative URL.
    #[must_use]
    pub fn upload_asset(&self, file_name: &str, folder: &str) -> String {
        format!("/assets/{}/{}", folder.trim_matches('/'), file_name)
    }
}

fn seed_articles() -> Vec<ArticleSummary> {
    vec![
        ArticleSummary {
            id: Uuid::from_u128(0x11),
            title: "Spring launch recap".to_string(),
            category: "product".to_string(),
            status: JobStatus::Completed {
                artifact: Some("/assets/articles/spring-launch.md".to_string()),
            },
            created_at: ts("2026-08-20T09:00:00Z"),
        },
        ArticleSummary {
            id: Uuid::from_u128(0x12),
            title: "SEO checklist for indie stores".to_string(),
            category: "seo".to_string(),
            status: JobStatus::Processing {
                last_heartbeat: Some(ts("2026-08-29T10:00:00Z")),
            },
            created_at: ts("2026-08-29T09:58:00Z"),
        },
        ArticleSummary {
            id: Uuid::from_u128(0x13),
            title: "Holiday teaser outline".to_string(),
            category: "seasonal".to_string(),
            status: JobStatus::Draft,
            created_at: ts("2026-08-15T14:30:00Z"),
        },
        ArticleSummary {
            id: Uuid::from_u128(0x14),
            title: "Churn postmortem, August".to_string(),
            category: "retention".to_string(),
            status: JobStatus::Failed {
                reason: "model timeout".to_string(),
            },
            created_at: ts("2026-08-10T08:15:00Z"),
        },
    ]
}

fn seed_image_jobs() -> Vec<ImageJobSummary> {
    vec![
        ImageJobSummary {
            id: Uuid::from_u128(0x21),
            prompt: "Glass bottle on marble, morning light".to_string(),
            style: "photo".to_string(),
            asset_path: Some("/assets/images/bottle-marble.png".to_string()),
            status: JobStatus::Completed {
                artifact: Some("/assets/images/bottle-marble.png".to_string()),
            },
            created_at: ts("2026-08-22T11:00:00Z"),
        },
        ImageJobSummary {
            id: Uuid::from_u128(0x22),
            prompt: "Exploded-view render of the travel kit".to_string(),
            style: "render".to_string(),
            asset_path: None,
            status: JobStatus::Queued,
            created_at: ts("2026-08-29T10:05:00Z"),
        },
        ImageJobSummary {
            id: Uuid::from_u128(0x23),
            prompt: "Flat icon set for onboarding emails".to_string(),
            style: "flat".to_string(),
            asset_path: None,
            status: JobStatus::Processing {
                last_heartbeat: Some(ts("2026-08-29T10:02:00Z")),
            },
            created_at: ts("2026-08-29T09:45:00Z"),
        },
    ]
}

fn seed_plans() -> Vec<MarketingPlanSummary> {
    vec![
        MarketingPlanSummary {
            id: Uuid::from_u128(0x31),
            title: "September newsletter push".to_string(),
            channel: "email".to_string(),
            status: JobStatus::Completed { artifact: None },
            created_at: ts("2026-08-18T16:00:00Z"),
        },
        MarketingPlanSummary {
            id: Uuid::from_u128(0x32),
            title: "Q4 social calendar".to_string(),
            channel: "social".to_string(),
            status: JobStatus::Draft,
            created_at: ts("2026-08-25T13:20:00Z"),
        },
    ]
}

fn seed_scripts() -> Vec<VideoScriptSummary> {
    vec![
        VideoScriptSummary {
            id: Uuid::from_u128(0x41),
            title: "Unboxing teaser".to_string(),
            platform: "tiktok".to_string(),
            duration_secs: Some(30),
            status: JobStatus::Completed { artifact: None },
            created_at: ts("2026-08-21T12:00:00Z"),
        },
        VideoScriptSummary {
            id: Uuid::from_u128(0x42),
            title: "Founder story, long cut".to_string(),
            platform: "youtube".to_string(),
            duration_secs: Some(300),
            status: JobStatus::Processing {
                last_heartbeat: None,
            },
            created_at: ts("2026-08-29T09:30:00Z"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::articles::state::ArticleFilters;
    use crate::services::resource::{Articles, MarketingPlans};
    use draftsmith_api_models::ArticleInput;

    #[test]
    fn listing_filters_and_paginates() {
        let store = FixtureStore::seeded();
        let all = store.list::<Articles>(1, &ArticleFilters::default());
        assert_eq!(all.total, 4);
        assert_eq!(all.rows.len(), 4);

        let drafts = store.list::<Articles>(
            1,
            &ArticleFilters {
                status: "draft".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(drafts.total, 1);
        assert_eq!(drafts.rows[0].title, "Holiday teaser outline");
    }

    #[test]
    fn out_of_range_pages_serve_empty_rows_with_the_real_total() {
        let store = FixtureStore::seeded();
        let page = store.list::<Articles>(9, &ArticleFilters::default());
        assert!(page.rows.is_empty());
        assert_eq!(page.total, 4);
    }

    #[test]
    fn pagination_slices_forty_five_rows() {
        let store = FixtureStore::default();
        {
            let mut rows = store.articles.borrow_mut();
            for n in 1..=45u128 {
                rows.push(ArticleSummary {
                    id: Uuid::from_u128(n),
                    title: format!("Article {n}"),
                    category: "seo".to_string(),
                    status: JobStatus::Draft,
                    created_at: Utc::now(),
                });
            }
        }
        let page_one = store.list::<Articles>(1, &ArticleFilters::default());
        assert_eq!(page_one.rows.len(), 12);
        assert_eq!(page_one.total, 45);
        let page_four = store.list::<Articles>(4, &ArticleFilters::default());
        assert_eq!(page_four.rows.len(), 9);
        assert_eq!(page_four.rows[0].title, "Article 37");
    }

    #[test]
    fn delete_removes_exactly_one_record() {
        let store = FixtureStore::seeded();
        let target = store.articles.borrow()[1].id;
        store.delete::<Articles>(target).unwrap();
        assert_eq!(store.articles.borrow().len(), 3);
        assert!(store.articles.borrow().iter().all(|row| row.id != target));
        assert_eq!(store.delete::<Articles>(target), Err(ApiError::NotFound));
    }

    #[test]
    fn generate_prepends_a_queued_record() {
        let store = FixtureStore::seeded();
        let record = store.generate::<Articles>(&ArticleInput {
            topic: "Fall lookbook".to_string(),
            keywords: vec![],
            tone: "playful".to_string(),
            word_count: None,
        });
        assert_eq!(record.status, JobStatus::Queued);
        assert_eq!(store.articles.borrow()[0].id, record.id);
    }

    #[test]
    fn duplicate_plan_returns_a_new_draft_first_in_the_list() {
        let store = FixtureStore::seeded();
        let source = store.marketing_plans.borrow()[0].clone();
        let clone = store.duplicate_plan(source.id).unwrap();
        assert_ne!(clone.id, source.id);
        assert!(clone.title.ends_with(" (copy)"));
        assert_eq!(clone.status, JobStatus::Draft);
        assert_eq!(store.marketing_plans.borrow()[0].id, clone.id);
        assert_eq!(
            store.duplicate_plan(Uuid::from_u128(0xdead)),
            Err(ApiError::NotFound)
        );
    }

    #[test]
    fn detail_lookup_round_trips_summary_fields() {
        let store = FixtureStore::seeded();
        let id = store.marketing_plans.borrow()[0].id;
        let detail = store.get::<MarketingPlans>(id).unwrap();
        assert_eq!(detail.title, "September newsletter push");
        assert_eq!(
            store.get::<MarketingPlans>(Uuid::from_u128(0xdead)),
            Err(ApiError::NotFound)
        );
    }

    #[test]
    fn uploads_resolve_to_relative_asset_urls() {
        let store = FixtureStore::seeded();
        assert_eq!(
            store.upload_asset("ref.png", "/references/"),
            "/assets/references/ref.png"
        );
    }
}
