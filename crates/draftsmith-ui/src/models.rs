//! Shared UI models that are not part of the backend contract.

/// Severity classification for a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational notice.
    Info,
    /// Completed action confirmation.
    Success,
    /// Failure notice.
    Error,
}

/// Toast payload used by the host and app state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message for the toast.
    pub message: String,
    /// Severity classification.
    pub kind: ToastKind,
}

/// Queue of visible toasts plus the id counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    /// Toasts currently on screen, oldest first.
    pub entries: Vec<Toast>,
    /// Next id to hand out.
    pub next_id: u64,
}

/// Append a toast and advance the id counter.
pub fn push_toast(state: &mut ToastState, message: impl Into<String>, kind: ToastKind) {
    let id = state.next_id;
    state.next_id += 1;
    state.entries.push(Toast {
        id,
        message: message.into(),
        kind,
    });
}

/// Remove a toast by id; unknown ids are ignored.
pub fn dismiss_toast(state: &mut ToastState, id: u64) {
    state.entries.retain(|toast| toast.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_monotonic_ids() {
        let mut state = ToastState::default();
        push_toast(&mut state, "saved", ToastKind::Success);
        push_toast(&mut state, "failed", ToastKind::Error);
        assert_eq!(state.entries[0].id, 0);
        assert_eq!(state.entries[1].id, 1);
        assert_eq!(state.next_id, 2);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut state = ToastState::default();
        push_toast(&mut state, "one", ToastKind::Info);
        push_toast(&mut state, "two", ToastKind::Info);
        dismiss_toast(&mut state, 0);
        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.entries[0].message, "two");
        dismiss_toast(&mut state, 99);
        assert_eq!(state.entries.len(), 1);
    }
}
