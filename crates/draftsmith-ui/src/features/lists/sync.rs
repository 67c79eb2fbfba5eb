//! Load sequencing and poll scheduling for list views.
//!
//! # Design
//! - Every load carries a sequence number; only the newest response applies,
//!   so a filter-triggered load can never be overwritten by a slower poll.
//! - Polling is a pure decision over the current rows; the wasm hook owns the
//!   actual timer handle and re-arms it whenever the rows change.

use crate::features::lists::state::ListRecord;

/// Fixed background poll interval while any job is processing.
pub const POLL_INTERVAL_MS: u32 = 8_000;

/// Monotonic request fence for list loads.
///
/// `begin` stamps an outgoing load; `admit` accepts a response only when it
/// is newer than everything already applied, discarding stale in-flight
/// replies instead of letting the last arrival win.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncGuard {
    issued: u64,
    applied: u64,
}

impl SyncGuard {
    /// Stamp a new outgoing load and return its sequence number.
    pub const fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Admit a response for the given sequence, rejecting stale ones.
    pub const fn admit(&mut self, seq: u64) -> bool {
        if seq > self.applied {
            self.applied = seq;
            true
        } else {
            false
        }
    }

    /// Whether a newer load than the last applied one is still outstanding.
    #[must_use]
    pub const fn in_flight(&self) -> bool {
        self.issued > self.applied
    }
}

/// Whether any row still has backend-side work in flight.
#[must_use]
pub fn has_processing<R: ListRecord>(rows: &[R]) -> bool {
    rows.iter().any(|row| row.status().is_processing())
}

/// Poll delay to arm after a successful load, if any.
///
/// Returns `None` when nothing is processing so no timer exists at all.
#[must_use]
pub fn poll_delay_ms<R: ListRecord>(rows: &[R]) -> Option<u32> {
    has_processing(rows).then_some(POLL_INTERVAL_MS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use draftsmith_api_models::{ArticleSummary, JobStatus};
    use uuid::Uuid;

    fn row(n: u128, status: JobStatus) -> ArticleSummary {
        ArticleSummary {
            id: Uuid::from_u128(n),
            title: "t".to_string(),
            category: "seo".to_string(),
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut guard = SyncGuard::default();
        let poll_seq = guard.begin();
        let filter_seq = guard.begin();
        // The newer filter-triggered load lands first.
        assert!(guard.admit(filter_seq));
        // The older poll response arrives late and must not apply.
        assert!(!guard.admit(poll_seq));
        assert!(!guard.in_flight());
    }

    #[test]
    fn responses_in_order_all_apply() {
        let mut guard = SyncGuard::default();
        let first = guard.begin();
        assert!(guard.in_flight());
        assert!(guard.admit(first));
        let second = guard.begin();
        assert!(guard.admit(second));
    }

    #[test]
    fn polling_arms_only_while_something_is_processing() {
        let settled = vec![
            row(1, JobStatus::Completed { artifact: None }),
            row(2, JobStatus::Draft),
        ];
        assert_eq!(poll_delay_ms(&settled), None);

        let busy = vec![
            row(1, JobStatus::Completed { artifact: None }),
            row(
                2,
                JobStatus::Processing {
                    last_heartbeat: None,
                },
            ),
        ];
        assert_eq!(poll_delay_ms(&busy), Some(POLL_INTERVAL_MS));
        assert_eq!(poll_delay_ms::<ArticleSummary>(&[]), None);
    }

    #[test]
    fn poll_stops_once_the_last_job_completes() {
        let mut rows = vec![row(
            1,
            JobStatus::Processing {
                last_heartbeat: None,
            },
        )];
        assert!(poll_delay_ms(&rows).is_some());
        // A poll response reports the job finished; the next scheduling
        // check finds nothing processing and does not re-arm.
        rows[0].status = JobStatus::Completed {
            artifact: Some("/assets/a.png".to_string()),
        };
        assert!(poll_delay_ms(&rows).is_none());
    }

    #[test]
    fn queued_rows_keep_the_poll_alive() {
        let rows = vec![row(1, JobStatus::Queued)];
        assert_eq!(poll_delay_ms(&rows), Some(POLL_INTERVAL_MS));
    }
}
