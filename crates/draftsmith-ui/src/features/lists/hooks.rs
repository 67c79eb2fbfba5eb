//! Generic list controller hook wiring loads, polling, and delete intents.
//!
//! # Design
//! - One hook instance per resource view; the [`ListLens`] fn pointers pick
//!   the store slice so the hook itself stays fully generic.
//! - Loads triggered by filter or page changes show the spinner; background
//!   polls never do. Both are fenced through the shared [`SyncGuard`].
//! - The poll timer exists only while some row is still processing and is
//!   dropped on unmount.

use crate::core::store::AppStore;
use crate::features::lists::actions::{deleted_message, load_failed_message};
use crate::features::lists::intent::ConfirmIntent;
use crate::features::lists::state::{
    ListRecord, ListState, prepend_row, set_filters, set_loading, set_page, set_rows,
    settle_delete,
};
use crate::features::lists::sync::{SyncGuard, poll_delay_ms};
use crate::models::{ToastKind, push_toast};
use crate::services::api::ApiClient;
use crate::services::error::ApiError;
use crate::services::resource::ApiResource;
use draftsmith_api_models::ResourceKind;
use gloo::console;
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

/// Read/write access into the store slice for one resource list.
pub struct ListLens<R: ApiResource> {
    /// Borrow the slice for selectors.
    pub read: fn(&AppStore) -> &ListState<R::Summary, R::Filters>,
    /// Borrow the slice mutably for reducers.
    pub write: fn(&mut AppStore) -> &mut ListState<R::Summary, R::Filters>,
}

impl<R: ApiResource> Clone for ListLens<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ApiResource> Copy for ListLens<R> {}

/// Everything a list view needs: the slice snapshot plus callbacks.
pub struct ListController<R: ApiResource> {
    /// Current snapshot of the list slice.
    pub state: ListState<R::Summary, R::Filters>,
    /// Pending delete confirmation, if any.
    pub intent: ConfirmIntent<R::Summary>,
    /// Whether a generation submit is in flight.
    pub generating: bool,
    /// Jump to a page.
    pub on_set_page: Callback<usize>,
    /// Replace the filters (resets to page 1).
    pub on_set_filters: Callback<R::Filters>,
    /// Open the delete confirmation for a record.
    pub on_request_delete: Callback<R::Summary>,
    /// Dismiss the delete confirmation without side effects.
    pub on_cancel_delete: Callback<()>,
    /// Run the confirmed delete.
    pub on_confirm_delete: Callback<()>,
    /// Submit a generation request.
    pub on_generate: Callback<R::Input>,
}

fn describe(err: &ApiError, kind: ResourceKind) -> String {
    match err {
        ApiError::SessionExpired | ApiError::Backend(_) => err.user_message(),
        other => load_failed_message(kind, &other.user_message()),
    }
}

fn spawn_load<R: ApiResource + 'static>(
    client: Rc<ApiClient>,
    dispatch: Dispatch<AppStore>,
    lens: ListLens<R>,
    guard: Rc<RefCell<SyncGuard>>,
    visible: bool,
) {
    let seq = guard.borrow_mut().begin();
    if visible {
        dispatch.reduce_mut(|store| set_loading((lens.write)(store), true));
    }
    let (page, filters) = {
        let store = dispatch.get();
        let slice = (lens.read)(&store);
        (slice.current_page, slice.filters.clone())
    };
    yew::platform::spawn_local(async move {
        let outcome = client.list::<R>(page, &filters).await;
        if !guard.borrow_mut().admit(seq) {
            return;
        }
        match outcome {
            Ok(loaded) => {
                dispatch
                    .reduce_mut(|store| set_rows((lens.write)(store), loaded.rows, loaded.total));
            }
            Err(err) => {
                console::error!("list load failed", R::KIND.path(), err.to_string());
                dispatch.reduce_mut(|store| {
                    set_loading((lens.write)(store), false);
                    push_toast(&mut store.toasts, describe(&err, R::KIND), ToastKind::Error);
                });
            }
        }
    });
}

/// Drive one resource list: visible loads, background polling, confirmed
/// deletes, and generation submits.
#[hook]
pub fn use_list_controller<R: ApiResource + 'static>(
    client: Rc<ApiClient>,
    lens: ListLens<R>,
) -> ListController<R> {
    let dispatch = Dispatch::<AppStore>::new();
    let state = use_selector(move |store: &AppStore| (lens.read)(store).clone());
    let guard = use_mut_ref(SyncGuard::default);
    let poll = use_mut_ref(|| None as Option<Interval>);
    let intent = use_state(ConfirmIntent::<R::Summary>::default);
    let generating = use_state(|| false);

    // Visible load whenever the page or filters change (and on mount).
    {
        let client = client.clone();
        let dispatch = dispatch.clone();
        let guard = guard.clone();
        use_effect_with_deps(
            move |_| {
                spawn_load::<R>(client, dispatch, lens, guard, true);
                || ()
            },
            (state.current_page, state.filters.clone()),
        );
    }

    // Re-arm or drop the poll timer as the processing set changes.
    {
        let client = client.clone();
        let dispatch = dispatch.clone();
        let guard = guard.clone();
        let poll = poll.clone();
        use_effect_with_deps(
            move |delay: &Option<u32>| {
                *poll.borrow_mut() = delay.map(|ms| {
                    Interval::new(ms, move || {
                        spawn_load::<R>(
                            client.clone(),
                            dispatch.clone(),
                            lens,
                            guard.clone(),
                            false,
                        );
                    })
                });
                move || drop(poll.borrow_mut().take())
            },
            poll_delay_ms(&state.rows),
        );
    }

    let on_set_page = {
        let dispatch = dispatch.clone();
        Callback::from(move |page: usize| {
            dispatch.reduce_mut(|store| set_page((lens.write)(store), page, R::page_size()));
        })
    };

    let on_set_filters = {
        let dispatch = dispatch.clone();
        Callback::from(move |filters: R::Filters| {
            dispatch.reduce_mut(|store| set_filters((lens.write)(store), filters));
        })
    };

    let on_request_delete = {
        let intent = intent.clone();
        Callback::from(move |record: R::Summary| {
            let mut next = (*intent).clone();
            next.request(record);
            intent.set(next);
        })
    };

    let on_cancel_delete = {
        let intent = intent.clone();
        Callback::from(move |()| {
            let mut next = (*intent).clone();
            next.cancel();
            intent.set(next);
        })
    };

    let on_confirm_delete = {
        let client = client.clone();
        let dispatch = dispatch.clone();
        let intent = intent.clone();
        Callback::from(move |()| {
            let mut next = (*intent).clone();
            let Some(target) = next.confirm() else {
                return;
            };
            intent.set(next);
            let id = target.id();
            let title = target.title().to_string();
            let client = client.clone();
            let dispatch = dispatch.clone();
            let intent = intent.clone();
            yew::platform::spawn_local(async move {
                let outcome = client.delete::<R>(id).await;
                let mut settled = (*intent).clone();
                settled.settle();
                intent.set(settled);
                // The row leaves the store only once the backend has
                // acknowledged the delete; the stale-by-one total is
                // reconciled by the next load.
                dispatch.reduce_mut(|store| {
                    settle_delete((lens.write)(store), id, outcome.is_ok());
                    match &outcome {
                        Ok(()) => push_toast(
                            &mut store.toasts,
                            deleted_message(R::KIND, &title),
                            ToastKind::Success,
                        ),
                        Err(err) => {
                            push_toast(&mut store.toasts, err.user_message(), ToastKind::Error);
                        }
                    }
                });
            });
        })
    };

    let on_generate = {
        let generating = generating.clone();
        Callback::from(move |input: R::Input| {
            if *generating {
                return;
            }
            generating.set(true);
            let client = client.clone();
            let dispatch = dispatch.clone();
            let generating = generating.clone();
            yew::platform::spawn_local(async move {
                match client.generate::<R>(&input).await {
                    Ok(record) => {
                        dispatch.reduce_mut(|store| {
                            prepend_row((lens.write)(store), record);
                        });
                    }
                    Err(err) => {
                        dispatch.reduce_mut(|store| {
                            push_toast(&mut store.toasts, err.user_message(), ToastKind::Error);
                        });
                    }
                }
                generating.set(false);
            });
        })
    };

    ListController {
        state: (*state).clone(),
        intent: (*intent).clone(),
        generating: *generating,
        on_set_page,
        on_set_filters,
        on_request_delete,
        on_cancel_delete,
        on_confirm_delete,
        on_generate,
    }
}
