#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Draftsmith content API.
//!
//! These types are the single source of truth for the request/response
//! contract between the web UI and the generation backend. The UI never
//! invents its own wire shapes; both the HTTP client and the in-memory
//! fixture backend encode and decode through this crate so the two stay
//! interchangeable.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed set of content resource types served by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Generated marketing articles.
    Articles,
    /// Product image generation jobs.
    ImageJobs,
    /// Monthly marketing calendar plans.
    MarketingPlans,
    /// Short-form video scripts.
    VideoScripts,
}

impl ResourceKind {
    /// URL path segment under `/v1/` for this resource.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Articles => "articles",
            Self::ImageJobs => "image-jobs",
            Self::MarketingPlans => "marketing-plans",
            Self::VideoScripts => "video-scripts",
        }
    }

    /// Fixed page size used by the list view for this resource.
    #[must_use]
    pub const fn page_size(self) -> usize {
        match self {
            Self::Articles => 12,
            Self::ImageJobs => 20,
            Self::MarketingPlans => 6,
            Self::VideoScripts => 12,
        }
    }

    /// Human-readable singular label.
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Articles => "article",
            Self::ImageJobs => "image job",
            Self::MarketingPlans => "marketing plan",
            Self::VideoScripts => "video script",
        }
    }
}

/// Lifecycle state of a generation job, tagged on the wire as `state`.
///
/// Staleness of a processing job is judged from `last_heartbeat` via
/// [`JobStatus::is_stale`] rather than recomputed ad hoc by callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum JobStatus {
    /// Saved locally or cloned; no generation requested yet.
    Draft,
    /// Accepted by the backend, not yet picked up by a worker.
    Queued,
    /// A worker is generating content.
    Processing {
        /// Last worker heartbeat, when the backend reports one.
        #[serde(skip_serializing_if = "Option::is_none")]
        last_heartbeat: Option<DateTime<Utc>>,
    },
    /// Generation finished; the artifact is ready to download.
    Completed {
        /// Backend-relative path of the generated artifact, when one exists.
        #[serde(skip_serializing_if = "Option::is_none")]
        artifact: Option<String>,
    },
    /// Generation failed permanently.
    Failed {
        /// Failure description from the backend.
        reason: String,
    },
}

impl JobStatus {
    /// Whether the job still has backend-side work in flight.
    ///
    /// Queued jobs count: they have been submitted and will change state
    /// without further user input, so list views keep polling for them.
    #[must_use]
    pub const fn is_processing(&self) -> bool {
        matches!(self, Self::Queued | Self::Processing { .. })
    }

    /// Whether the job reached a final state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed { .. } | Self::Failed { .. })
    }

    /// Whether a processing job has gone quiet for longer than `threshold`.
    ///
    /// Only `Processing` jobs with a reported heartbeat can be judged stale;
    /// every other state returns `false`.
    #[must_use]
    pub fn is_stale(&self, now: DateTime<Utc>, threshold: Duration) -> bool {
        match self {
            Self::Processing {
                last_heartbeat: Some(beat),
            } => now.signed_duration_since(*beat) > threshold,
            _ => false,
        }
    }

    /// Artifact path for completed jobs, if any.
    #[must_use]
    pub fn artifact(&self) -> Option<&str> {
        match self {
            Self::Completed {
                artifact: Some(path),
            } => Some(path),
            _ => None,
        }
    }

    /// Short status label for badges and filter values.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Queued => "queued",
            Self::Processing { .. } => "processing",
            Self::Completed { .. } => "completed",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Pagination block returned alongside every list response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageInfo {
    /// Total matching records across all pages.
    pub total: u64,
    /// One-based page number that was served.
    pub page: u32,
    /// Page size that was applied.
    pub limit: u32,
}

/// List response envelope: a page of records plus pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListEnvelope<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// Records for the requested page, in backend order.
    pub data: Vec<T>,
    /// Pagination metadata for the query.
    pub pagination: PageInfo,
}

/// Single-record response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemEnvelope<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// The requested record.
    pub data: T,
}

/// Acknowledgement envelope for deletes and other bodyless operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AckEnvelope {
    /// Whether the request succeeded.
    pub success: bool,
    /// Backend-provided detail, usually present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response for asset uploads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    /// Backend-relative URL of the stored asset.
    pub url: String,
}

/// List row for a generated marketing article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleSummary {
    /// Stable record identifier.
    pub id: Uuid,
    /// Article headline.
    pub title: String,
    /// Editorial category (e.g. "product", "seo").
    pub category: String,
    /// Generation job state.
    pub status: JobStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Full marketing article record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleDetail {
    /// Stable record identifier.
    pub id: Uuid,
    /// Article headline.
    pub title: String,
    /// Editorial category.
    pub category: String,
    /// Generation job state.
    pub status: JobStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Rendered article body (markdown).
    pub body: String,
    /// Keywords the generation was steered with.
    pub keywords: Vec<String>,
}

/// Generation request for a marketing article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleInput {
    /// Subject the article should cover.
    pub topic: String,
    /// Keywords to work into the copy.
    pub keywords: Vec<String>,
    /// Writing tone (e.g. "friendly", "technical").
    pub tone: String,
    /// Target length in words, when constrained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u32>,
}

/// List row for a product image generation job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageJobSummary {
    /// Stable record identifier.
    pub id: Uuid,
    /// Prompt the image is generated from.
    pub prompt: String,
    /// Visual style preset.
    pub style: String,
    /// Backend-relative path of the rendered image, once available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_path: Option<String>,
    /// Generation job state.
    pub status: JobStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Full image job record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageJobDetail {
    /// Stable record identifier.
    pub id: Uuid,
    /// Prompt the image is generated from.
    pub prompt: String,
    /// Visual style preset.
    pub style: String,
    /// Output dimensions label (e.g. "1024x1024").
    pub size: String,
    /// Backend-relative path of the rendered image, once available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_path: Option<String>,
    /// Generation job state.
    pub status: JobStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Generation request for a product image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageJobInput {
    /// Prompt describing the desired image.
    pub prompt: String,
    /// Visual style preset.
    pub style: String,
    /// Output dimensions label.
    pub size: String,
    /// Backend-relative URL of a reference upload, when supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_url: Option<String>,
}

/// List row for a marketing calendar plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarketingPlanSummary {
    /// Stable record identifier.
    pub id: Uuid,
    /// Plan title.
    pub title: String,
    /// Primary channel the plan targets.
    pub channel: String,
    /// Generation job state.
    pub status: JobStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// One scheduled entry inside a marketing plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanEntry {
    /// Day of month the entry is scheduled for.
    pub day: u8,
    /// Channel the entry publishes to.
    pub channel: String,
    /// Headline or hook for the entry.
    pub headline: String,
}

/// Full marketing plan record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarketingPlanDetail {
    /// Stable record identifier.
    pub id: Uuid,
    /// Plan title.
    pub title: String,
    /// Primary channel the plan targets.
    pub channel: String,
    /// Generation job state.
    pub status: JobStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Scheduled calendar entries.
    pub entries: Vec<PlanEntry>,
}

/// Generation request for a marketing plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarketingPlanInput {
    /// Product or campaign the plan promotes.
    pub product: String,
    /// Target audience description.
    pub audience: String,
    /// Calendar month in `YYYY-MM` form.
    pub month: String,
}

/// List row for a video script.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoScriptSummary {
    /// Stable record identifier.
    pub id: Uuid,
    /// Script title.
    pub title: String,
    /// Platform the script is written for.
    pub platform: String,
    /// Target runtime in seconds, when constrained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<u32>,
    /// Generation job state.
    pub status: JobStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// One scene inside a video script.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScriptScene {
    /// Scene heading or shot description.
    pub heading: String,
    /// Narration or dialogue for the scene.
    pub narration: String,
}

/// Full video script record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoScriptDetail {
    /// Stable record identifier.
    pub id: Uuid,
    /// Script title.
    pub title: String,
    /// Platform the script is written for.
    pub platform: String,
    /// Target runtime in seconds, when constrained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<u32>,
    /// Generation job state.
    pub status: JobStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Ordered scenes.
    pub scenes: Vec<ScriptScene>,
}

/// Generation request for a video script.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoScriptInput {
    /// Subject the script should cover.
    pub topic: String,
    /// Platform the script is written for.
    pub platform: String,
    /// Target runtime in seconds, when constrained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<u32>,
}

/// Resolve a backend-relative asset path against the configured origin.
///
/// Absolute URLs pass through untouched so mixed fixtures keep working.
#[must_use]
pub fn resolve_asset_url(origin: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn status_tags_round_trip() {
        let statuses = vec![
            JobStatus::Draft,
            JobStatus::Queued,
            JobStatus::Processing {
                last_heartbeat: Some(at(1_700_000_000)),
            },
            JobStatus::Completed {
                artifact: Some("/assets/img/1.png".to_string()),
            },
            JobStatus::Failed {
                reason: "model timeout".to_string(),
            },
        ];
        for status in statuses {
            let json = serde_json::to_string(&status).unwrap();
            let back: JobStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn status_tag_is_snake_case_state() {
        let json = serde_json::to_value(JobStatus::Queued).unwrap();
        assert_eq!(json["state"], "queued");
        let json = serde_json::to_value(JobStatus::Completed { artifact: None }).unwrap();
        assert_eq!(json["state"], "completed");
        assert!(json.get("artifact").is_none());
    }

    #[test]
    fn processing_covers_queued_and_processing_only() {
        assert!(JobStatus::Queued.is_processing());
        assert!(
            JobStatus::Processing {
                last_heartbeat: None
            }
            .is_processing()
        );
        assert!(!JobStatus::Draft.is_processing());
        assert!(!JobStatus::Completed { artifact: None }.is_processing());
        assert!(
            !JobStatus::Failed {
                reason: "x".to_string()
            }
            .is_processing()
        );
    }

    #[test]
    fn staleness_needs_a_heartbeat() {
        let threshold = Duration::seconds(120);
        let now = at(1_000_000);
        let fresh = JobStatus::Processing {
            last_heartbeat: Some(at(1_000_000 - 60)),
        };
        let quiet = JobStatus::Processing {
            last_heartbeat: Some(at(1_000_000 - 300)),
        };
        let unknown = JobStatus::Processing {
            last_heartbeat: None,
        };
        assert!(!fresh.is_stale(now, threshold));
        assert!(quiet.is_stale(now, threshold));
        assert!(!unknown.is_stale(now, threshold));
        assert!(!JobStatus::Queued.is_stale(now, threshold));
    }

    #[test]
    fn list_envelope_decodes_wire_shape() {
        let json = r#"{
            "success": true,
            "data": [{
                "id": "00000000-0000-0000-0000-000000000001",
                "title": "Spring launch recap",
                "category": "product",
                "status": {"state": "processing"},
                "created_at": "2026-05-01T12:00:00Z"
            }],
            "pagination": {"total": 45, "page": 1, "limit": 12}
        }"#;
        let envelope: ListEnvelope<ArticleSummary> = serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.pagination.total, 45);
        assert!(envelope.data[0].status.is_processing());
    }

    #[test]
    fn resource_paths_and_page_sizes_are_fixed() {
        assert_eq!(ResourceKind::Articles.path(), "articles");
        assert_eq!(ResourceKind::ImageJobs.page_size(), 20);
        assert_eq!(ResourceKind::MarketingPlans.page_size(), 6);
        assert_eq!(ResourceKind::VideoScripts.page_size(), 12);
        assert_eq!(ResourceKind::Articles.page_size(), 12);
    }

    #[test]
    fn asset_urls_resolve_against_origin() {
        assert_eq!(
            resolve_asset_url("http://localhost:7070", "/assets/1.png"),
            "http://localhost:7070/assets/1.png"
        );
        assert_eq!(
            resolve_asset_url("http://localhost:7070/", "assets/1.png"),
            "http://localhost:7070/assets/1.png"
        );
        assert_eq!(
            resolve_asset_url("http://x", "https://cdn.example.net/a.png"),
            "https://cdn.example.net/a.png"
        );
    }
}
