//! Marketing plan form parsing and draft cloning.
//!
//! # Design
//! - Duplicate is a backend operation so the clone gets a durable,
//!   server-assigned id; `clone_as_draft` is the record synthesis shared by
//!   the backend contract and the in-memory fixture double.

use chrono::{DateTime, Utc};
use draftsmith_api_models::{JobStatus, MarketingPlanInput, MarketingPlanSummary};
use uuid::Uuid;

/// Build a validated generation payload from raw form fields.
///
/// # Errors
/// Returns a field-named message when the product or audience is missing, or
/// the month is not in `YYYY-MM` form.
pub fn build_plan_input(
    product: &str,
    audience: &str,
    month: &str,
) -> Result<MarketingPlanInput, String> {
    let product = product.trim();
    if product.is_empty() {
        return Err("product is required".to_string());
    }
    let audience = audience.trim();
    if audience.is_empty() {
        return Err("audience is required".to_string());
    }
    let month = month.trim();
    if !is_month(month) {
        return Err("month must be in YYYY-MM form".to_string());
    }
    Ok(MarketingPlanInput {
        product: product.to_string(),
        audience: audience.to_string(),
        month: month.to_string(),
    })
}

fn is_month(value: &str) -> bool {
    let Some((year, month)) = value.split_once('-') else {
        return false;
    };
    year.len() == 4
        && year.chars().all(|c| c.is_ascii_digit())
        && month.len() == 2
        && month.parse::<u8>().is_ok_and(|m| (1..=12).contains(&m))
}

/// Synthesize the draft clone of a plan.
///
/// New identity, title suffixed with " (copy)", status reset to draft, fresh
/// creation timestamp. The source record is untouched.
#[must_use]
pub fn clone_as_draft(
    source: &MarketingPlanSummary,
    id: Uuid,
    now: DateTime<Utc>,
) -> MarketingPlanSummary {
    MarketingPlanSummary {
        id,
        title: format!("{} (copy)", source.title),
        channel: source.channel.clone(),
        status: JobStatus::Draft,
        created_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn month_must_be_year_dash_month() {
        assert!(build_plan_input("Widget", "busy founders", "2026-09").is_ok());
        assert!(build_plan_input("Widget", "busy founders", "2026-13").is_err());
        assert!(build_plan_input("Widget", "busy founders", "Sept 2026").is_err());
        assert!(build_plan_input("Widget", "busy founders", "26-09").is_err());
    }

    #[test]
    fn product_and_audience_are_required() {
        assert!(build_plan_input("", "x", "2026-09").is_err());
        assert!(build_plan_input("x", " ", "2026-09").is_err());
    }

    #[test]
    fn clones_get_a_new_identity_and_draft_status() {
        let source = MarketingPlanSummary {
            id: Uuid::from_u128(7),
            title: "Q3 push".to_string(),
            channel: "email".to_string(),
            status: JobStatus::Completed { artifact: None },
            created_at: Utc.timestamp_opt(1_000, 0).unwrap(),
        };
        let now = Utc.timestamp_opt(2_000, 0).unwrap();
        let clone = clone_as_draft(&source, Uuid::from_u128(8), now);
        assert_eq!(clone.title, "Q3 push (copy)");
        assert_eq!(clone.status, JobStatus::Draft);
        assert_eq!(clone.created_at, now);
        assert_ne!(clone.id, source.id);
        assert_eq!(source.title, "Q3 push");
    }
}
