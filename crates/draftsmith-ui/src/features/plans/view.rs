//! Marketing plan list page.
//!
//! # Design
//! - Duplicate routes through the backend so the clone gets a server-issued
//!   identity; the returned draft is prepended like a fresh submission.

use crate::app::api::ApiCtx;
use crate::components::atoms::{EmptyState, SearchInput, StatusBadge};
use crate::components::molecules::{ConfirmModal, Pagination};
use crate::core::store::AppStore;
use crate::features::lists::actions::{
    ActionEffect, ListAction, duplicated_message, effect_of, target_of,
};
use crate::features::lists::hooks::{ListLens, use_list_controller};
use crate::features::lists::pagination::total_pages;
use crate::features::lists::state::{ListRecord, ListState, prepend_row};
use crate::features::plans::logic::build_plan_input;
use crate::features::plans::state::{CHANNEL_OPTIONS, PlanFilters};
use crate::models::{ToastKind, push_toast};
use crate::services::resource::{ApiResource, MarketingPlans};
use draftsmith_api_models::{MarketingPlanSummary, ResourceKind};
use uuid::Uuid;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

fn read_slice(store: &AppStore) -> &ListState<MarketingPlanSummary, PlanFilters> {
    &store.plans
}

fn write_slice(store: &mut AppStore) -> &mut ListState<MarketingPlanSummary, PlanFilters> {
    &mut store.plans
}

#[function_component(PlansPage)]
pub(crate) fn plans_page() -> Html {
    let Some(api_ctx) = use_context::<ApiCtx>() else {
        return html! { <p class="error">{"Missing API context."}</p> };
    };
    let ctrl = use_list_controller::<MarketingPlans>(
        api_ctx.client.clone(),
        ListLens {
            read: read_slice,
            write: write_slice,
        },
    );

    let product = use_state(String::new);
    let audience = use_state(String::new);
    let month = use_state(String::new);
    let form_error = use_state(|| None as Option<String>);

    let on_submit = {
        let product = product.clone();
        let audience = audience.clone();
        let month = month.clone();
        let form_error = form_error.clone();
        let on_generate = ctrl.on_generate.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match build_plan_input(&product, &audience, &month) {
                Ok(input) => {
                    form_error.set(None);
                    product.set(String::new());
                    audience.set(String::new());
                    on_generate.emit(input);
                }
                Err(message) => form_error.set(Some(message)),
            }
        })
    };

    let on_duplicate = {
        let client = api_ctx.client.clone();
        Callback::from(move |id: Uuid| {
            let client = client.clone();
            yew::platform::spawn_local(async move {
                let dispatch = Dispatch::<AppStore>::new();
                match client.duplicate_plan(id).await {
                    Ok(clone) => {
                        dispatch.reduce_mut(|store| {
                            let message = duplicated_message(
                                ResourceKind::MarketingPlans,
                                &clone.title,
                            );
                            prepend_row(&mut store.plans, clone);
                            push_toast(&mut store.toasts, message, ToastKind::Success);
                        });
                    }
                    Err(err) => {
                        dispatch.reduce_mut(|store| {
                            push_toast(&mut store.toasts, err.user_message(), ToastKind::Error);
                        });
                    }
                }
            });
        })
    };

    let on_search = {
        let filters = ctrl.state.filters.clone();
        let on_set_filters = ctrl.on_set_filters.clone();
        Callback::from(move |search: String| {
            on_set_filters.emit(PlanFilters {
                search,
                ..filters.clone()
            });
        })
    };

    let on_channel = {
        let filters = ctrl.state.filters.clone();
        let on_set_filters = ctrl.on_set_filters.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                on_set_filters.emit(PlanFilters {
                    channel: select.value(),
                    ..filters.clone()
                });
            }
        })
    };

    // Gestures route through the classifier; duplicate is the one action
    // here that resolves to a backend call.
    let on_action = {
        let rows = ctrl.state.rows.clone();
        let on_duplicate = on_duplicate.clone();
        let on_request_delete = ctrl.on_request_delete.clone();
        Callback::from(move |action: ListAction| {
            let id = target_of(action);
            match effect_of(action) {
                ActionEffect::BackendCall => on_duplicate.emit(id),
                ActionEffect::IntentOnly => {
                    if let Some(row) = rows.iter().find(|row| row.id == id) {
                        on_request_delete.emit(row.clone());
                    }
                }
                ActionEffect::Navigation | ActionEffect::AssetDownload => {}
            }
        })
    };

    let pages = total_pages(ctrl.state.total_items, MarketingPlans::page_size());
    let delete_title = ctrl
        .intent
        .target()
        .map(|target| target.title().to_string())
        .unwrap_or_default();

    html! {
        <section class="page plans">
            <header class="page-header">
                <h2>{"Marketing plans"}</h2>
            </header>

            <form class="generate-form" onsubmit={on_submit}>
                <input
                    placeholder="Product"
                    value={(*product).clone()}
                    oninput={oninput_state(&product)}
                />
                <input
                    placeholder="Audience"
                    value={(*audience).clone()}
                    oninput={oninput_state(&audience)}
                />
                <input
                    placeholder="Month (YYYY-MM)"
                    value={(*month).clone()}
                    oninput={oninput_state(&month)}
                />
                <button type="submit" disabled={ctrl.generating}>
                    {if ctrl.generating { "Submitting…" } else { "Generate plan" }}
                </button>
                {form_error.as_ref().map(|message| html! {
                    <p class="field-error">{message.clone()}</p>
                }).unwrap_or_default()}
            </form>

            <div class="toolbar">
                <SearchInput
                    value={ctrl.state.filters.search.clone()}
                    placeholder="Search plans"
                    on_search={on_search}
                />
                <select onchange={on_channel}>
                    <option value="" selected={ctrl.state.filters.channel.is_empty()}>
                        {"Any channel"}
                    </option>
                    {for CHANNEL_OPTIONS.iter().map(|option| html! {
                        <option
                            value={*option}
                            selected={ctrl.state.filters.channel == *option}>
                            {*option}
                        </option>
                    })}
                </select>
            </div>

            {if ctrl.state.loading && ctrl.state.rows.is_empty() {
                html! { <p class="muted">{"Loading…"}</p> }
            } else if ctrl.state.rows.is_empty() {
                html! {
                    <EmptyState
                        title="No marketing plans yet"
                        description="Describe a product and month above to draft a calendar." />
                }
            } else {
                html! {
                    <table class="record-table">
                        <thead>
                            <tr>
                                <th>{"Title"}</th>
                                <th>{"Channel"}</th>
                                <th>{"Status"}</th>
                                <th>{"Created"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {for ctrl.state.rows.iter().map(|row| plan_row(
                                row,
                                on_action.clone(),
                            ))}
                        </tbody>
                    </table>
                }
            }}

            <Pagination
                current={ctrl.state.current_page}
                total_pages={pages}
                on_change={ctrl.on_set_page.clone()}
            />

            <ConfirmModal
                open={ctrl.intent.is_open()}
                busy={ctrl.intent.is_busy()}
                title="Delete marketing plan"
                body={format!("Delete \"{delete_title}\"? This cannot be undone.")}
                on_cancel={ctrl.on_cancel_delete.clone()}
                on_confirm={ctrl.on_confirm_delete.clone()}
            />
        </section>
    }
}

fn oninput_state(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
            state.set(input.value());
        }
    })
}

fn plan_row(row: &MarketingPlanSummary, on_action: Callback<ListAction>) -> Html {
    let id = row.id;
    let duplicate = {
        let on_action = on_action.clone();
        Callback::from(move |_| on_action.emit(ListAction::Duplicate(id)))
    };
    let on_delete = Callback::from(move |_| on_action.emit(ListAction::Delete(id)));
    html! {
        <tr key={row.id.to_string()}>
            <td>{row.title.clone()}</td>
            <td>{row.channel.clone()}</td>
            <td><StatusBadge status={row.status.clone()} /></td>
            <td>{row.created_at.format("%Y-%m-%d").to_string()}</td>
            <td class="row-actions">
                <button class="ghost" onclick={duplicate}>{"Duplicate"}</button>
                <button class="ghost danger" onclick={on_delete}>{"Delete"}</button>
            </td>
        </tr>
    }
}
