//! Transient delete-confirmation state.
//!
//! # Design
//! - Capture "user wants to delete record Y" separately from the store so a
//!   cancel discards nothing but the intent itself.
//! - The backend call happens only on explicit confirm.

/// Pending confirmation for a destructive action on one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmIntent<R> {
    target: Option<R>,
    busy: bool,
}

impl<R> Default for ConfirmIntent<R> {
    fn default() -> Self {
        Self {
            target: None,
            busy: false,
        }
    }
}

impl<R: Clone> ConfirmIntent<R> {
    /// Open the confirmation for a record.
    pub fn request(&mut self, target: R) {
        self.target = Some(target);
        self.busy = false;
    }

    /// Discard the intent without side effects.
    pub fn cancel(&mut self) {
        self.target = None;
        self.busy = false;
    }

    /// Whether a confirmation dialog should be visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.target.is_some()
    }

    /// Whether the confirmed request is in flight (confirm control disabled).
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// The record awaiting confirmation, if any.
    #[must_use]
    pub const fn target(&self) -> Option<&R> {
        self.target.as_ref()
    }

    /// Mark the confirmed request as in flight and return its target.
    ///
    /// Returns `None` when nothing is pending or a request is already
    /// running, so double-clicking confirm cannot submit twice.
    pub fn confirm(&mut self) -> Option<R> {
        if self.busy {
            return None;
        }
        let target = self.target.clone()?;
        self.busy = true;
        Some(target)
    }

    /// Close the intent once the request settles, success or failure.
    pub fn settle(&mut self) {
        self.target = None;
        self.busy = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_discards_without_side_effects() {
        let mut intent = ConfirmIntent::<u32>::default();
        intent.request(7);
        assert!(intent.is_open());
        intent.cancel();
        assert!(!intent.is_open());
        assert_eq!(intent.confirm(), None);
    }

    #[test]
    fn confirm_hands_out_the_target_once() {
        let mut intent = ConfirmIntent::<u32>::default();
        intent.request(7);
        assert_eq!(intent.confirm(), Some(7));
        assert!(intent.is_busy());
        // A second confirm while in flight is a no-op.
        assert_eq!(intent.confirm(), None);
        intent.settle();
        assert!(!intent.is_open());
        assert!(!intent.is_busy());
    }

    #[test]
    fn requesting_a_new_target_clears_stale_busy_state() {
        let mut intent = ConfirmIntent::<u32>::default();
        intent.request(1);
        let _ = intent.confirm();
        intent.request(2);
        assert!(!intent.is_busy());
        assert_eq!(intent.target(), Some(&2));
    }
}
