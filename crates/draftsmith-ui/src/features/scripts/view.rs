//! Video script list page.

use crate::app::api::ApiCtx;
use crate::components::atoms::{EmptyState, SearchInput, StatusBadge};
use crate::components::molecules::{ConfirmModal, Pagination};
use crate::core::store::AppStore;
use crate::features::lists::actions::{ActionEffect, ListAction, effect_of, target_of};
use crate::features::lists::hooks::{ListLens, use_list_controller};
use crate::features::lists::pagination::total_pages;
use crate::features::lists::state::{ListRecord, ListState};
use crate::features::scripts::logic::build_script_input;
use crate::features::scripts::state::{PLATFORM_OPTIONS, ScriptFilters};
use crate::services::resource::{ApiResource, VideoScripts};
use draftsmith_api_models::VideoScriptSummary;
use yew::prelude::*;

fn read_slice(store: &AppStore) -> &ListState<VideoScriptSummary, ScriptFilters> {
    &store.scripts
}

fn write_slice(store: &mut AppStore) -> &mut ListState<VideoScriptSummary, ScriptFilters> {
    &mut store.scripts
}

#[function_component(ScriptsPage)]
pub(crate) fn scripts_page() -> Html {
    let Some(api_ctx) = use_context::<ApiCtx>() else {
        return html! { <p class="error">{"Missing API context."}</p> };
    };
    let ctrl = use_list_controller::<VideoScripts>(
        api_ctx.client.clone(),
        ListLens {
            read: read_slice,
            write: write_slice,
        },
    );

    let topic = use_state(String::new);
    let platform = use_state(|| PLATFORM_OPTIONS[0].to_string());
    let duration = use_state(String::new);
    let form_error = use_state(|| None as Option<String>);

    let on_submit = {
        let topic = topic.clone();
        let platform = platform.clone();
        let duration = duration.clone();
        let form_error = form_error.clone();
        let on_generate = ctrl.on_generate.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match build_script_input(&topic, &platform, &duration) {
                Ok(input) => {
                    form_error.set(None);
                    topic.set(String::new());
                    duration.set(String::new());
                    on_generate.emit(input);
                }
                Err(message) => form_error.set(Some(message)),
            }
        })
    };

    let on_search = {
        let filters = ctrl.state.filters.clone();
        let on_set_filters = ctrl.on_set_filters.clone();
        Callback::from(move |search: String| {
            on_set_filters.emit(ScriptFilters {
                search,
                ..filters.clone()
            });
        })
    };

    let on_platform_filter = {
        let filters = ctrl.state.filters.clone();
        let on_set_filters = ctrl.on_set_filters.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                on_set_filters.emit(ScriptFilters {
                    platform: select.value(),
                    ..filters.clone()
                });
            }
        })
    };

    let on_platform = {
        let platform = platform.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                platform.set(select.value());
            }
        })
    };

    let on_action = {
        let rows = ctrl.state.rows.clone();
        let on_request_delete = ctrl.on_request_delete.clone();
        Callback::from(move |action: ListAction| match effect_of(action) {
            ActionEffect::IntentOnly => {
                if let Some(row) = rows.iter().find(|row| row.id == target_of(action)) {
                    on_request_delete.emit(row.clone());
                }
            }
            ActionEffect::Navigation | ActionEffect::BackendCall | ActionEffect::AssetDownload => {}
        })
    };

    let pages = total_pages(ctrl.state.total_items, VideoScripts::page_size());
    let delete_title = ctrl
        .intent
        .target()
        .map(|target| target.title().to_string())
        .unwrap_or_default();

    html! {
        <section class="page scripts">
            <header class="page-header">
                <h2>{"Video scripts"}</h2>
            </header>

            <form class="generate-form" onsubmit={on_submit}>
                <input
                    placeholder="Topic"
                    value={(*topic).clone()}
                    oninput={{
                        let topic = topic.clone();
                        Callback::from(move |event: InputEvent| {
                            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                                topic.set(input.value());
                            }
                        })
                    }}
                />
                <select onchange={on_platform}>
                    {for PLATFORM_OPTIONS.iter().map(|option| html! {
                        <option value={*option} selected={*platform == *option}>{*option}</option>
                    })}
                </select>
                <input
                    placeholder="Duration (seconds)"
                    inputmode="numeric"
                    value={(*duration).clone()}
                    oninput={{
                        let duration = duration.clone();
                        Callback::from(move |event: InputEvent| {
                            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                                duration.set(input.value());
                            }
                        })
                    }}
                />
                <button type="submit" disabled={ctrl.generating}>
                    {if ctrl.generating { "Submitting…" } else { "Generate script" }}
                </button>
                {form_error.as_ref().map(|message| html! {
                    <p class="field-error">{message.clone()}</p>
                }).unwrap_or_default()}
            </form>

            <div class="toolbar">
                <SearchInput
                    value={ctrl.state.filters.search.clone()}
                    placeholder="Search scripts"
                    on_search={on_search}
                />
                <select onchange={on_platform_filter}>
                    <option value="" selected={ctrl.state.filters.platform.is_empty()}>
                        {"Any platform"}
                    </option>
                    {for PLATFORM_OPTIONS.iter().map(|option| html! {
                        <option
                            value={*option}
                            selected={ctrl.state.filters.platform == *option}>
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
                        title="No video scripts yet"
                        description="Pick a platform and topic above to draft your first script." />
                }
            } else {
                html! {
                    <table class="record-table">
                        <thead>
                            <tr>
                                <th>{"Title"}</th>
                                <th>{"Platform"}</th>
                                <th>{"Duration"}</th>
                                <th>{"Status"}</th>
                                <th>{"Created"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {for ctrl.state.rows.iter().map(|row| script_row(
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
                title="Delete video script"
                body={format!("Delete \"{delete_title}\"? This cannot be undone.")}
                on_cancel={ctrl.on_cancel_delete.clone()}
                on_confirm={ctrl.on_confirm_delete.clone()}
            />
        </section>
    }
}

fn script_row(row: &VideoScriptSummary, on_action: Callback<ListAction>) -> Html {
    let id = row.id;
    let on_delete = Callback::from(move |_| on_action.emit(ListAction::Delete(id)));
    let duration = row
        .duration_secs
        .map_or_else(|| "-".to_string(), |secs| format!("{secs}s"));
    html! {
        <tr key={row.id.to_string()}>
            <td>{row.title.clone()}</td>
            <td>{row.platform.clone()}</td>
            <td>{duration}</td>
            <td><StatusBadge status={row.status.clone()} /></td>
            <td>{row.created_at.format("%Y-%m-%d").to_string()}</td>
            <td class="row-actions">
                <button class="ghost danger" onclick={on_delete}>{"Delete"}</button>
            </td>
        </tr>
    }
}
