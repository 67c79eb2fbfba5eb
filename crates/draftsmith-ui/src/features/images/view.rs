//! Product image job list page.
//!
//! # Design
//! - Reference uploads are validated client-side before any bytes move, then
//!   stored through the asset endpoint; the returned URL rides along in the
//!   generation payload.
//! - Download resolves the artifact against the backend origin and hands the
//!   URL to the browser through a synthetic anchor click.

use crate::app::api::ApiCtx;
use crate::components::atoms::{EmptyState, SearchInput, StatusBadge};
use crate::components::molecules::{ConfirmModal, Pagination};
use crate::core::store::AppStore;
use crate::features::images::logic::{SIZE_OPTIONS, build_image_input, validate_upload_size};
use crate::features::images::state::{ImageFilters, STYLE_OPTIONS};
use crate::features::lists::actions::{ActionEffect, ListAction, effect_of, target_of};
use crate::features::lists::hooks::{ListLens, use_list_controller};
use crate::features::lists::pagination::total_pages;
use crate::features::lists::state::{ListRecord, ListState};
use crate::services::resource::{ApiResource, ImageJobs};
use draftsmith_api_models::{ImageJobSummary, resolve_asset_url};
use gloo::utils::document;
use wasm_bindgen::JsCast;
use yew::prelude::*;

fn read_slice(store: &AppStore) -> &ListState<ImageJobSummary, ImageFilters> {
    &store.images
}

fn write_slice(store: &mut AppStore) -> &mut ListState<ImageJobSummary, ImageFilters> {
    &mut store.images
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn file_size_bytes(file: &web_sys::File) -> u64 {
    let size = file.size();
    if size.is_finite() && size >= 0.0 {
        size as u64
    } else {
        u64::MAX
    }
}

fn artifact_url(row: &ImageJobSummary, origin: &str) -> Option<String> {
    row.asset_path
        .as_deref()
        .or_else(|| row.status.artifact())
        .map(|path| resolve_asset_url(origin, path))
}

fn trigger_download(url: &str) {
    let Ok(element) = document().create_element("a") else {
        return;
    };
    let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() else {
        return;
    };
    anchor.set_href(url);
    anchor.set_download("");
    anchor.click();
}

#[function_component(ImagesPage)]
pub(crate) fn images_page() -> Html {
    let Some(api_ctx) = use_context::<ApiCtx>() else {
        return html! { <p class="error">{"Missing API context."}</p> };
    };
    let ctrl = use_list_controller::<ImageJobs>(
        api_ctx.client.clone(),
        ListLens {
            read: read_slice,
            write: write_slice,
        },
    );

    let prompt = use_state(String::new);
    let style = use_state(String::new);
    let size = use_state(|| SIZE_OPTIONS[0].to_string());
    let reference_url = use_state(|| None as Option<String>);
    let form_error = use_state(|| None as Option<String>);

    let on_submit = {
        let prompt = prompt.clone();
        let style = style.clone();
        let size = size.clone();
        let reference_url = reference_url.clone();
        let form_error = form_error.clone();
        let on_generate = ctrl.on_generate.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match build_image_input(&prompt, &style, &size, (*reference_url).clone()) {
                Ok(input) => {
                    form_error.set(None);
                    prompt.set(String::new());
                    reference_url.set(None);
                    on_generate.emit(input);
                }
                Err(message) => form_error.set(Some(message)),
            }
        })
    };

    let on_upload = {
        let client = api_ctx.client.clone();
        let reference_url = reference_url.clone();
        let form_error = form_error.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if let Err(message) = validate_upload_size(file_size_bytes(&file)) {
                form_error.set(Some(message));
                return;
            }
            form_error.set(None);
            let client = client.clone();
            let reference_url = reference_url.clone();
            let form_error = form_error.clone();
            yew::platform::spawn_local(async move {
                match client.upload_asset(&file, "references").await {
                    Ok(url) => reference_url.set(Some(url)),
                    Err(err) => form_error.set(Some(err.user_message())),
                }
            });
        })
    };

    let on_search = {
        let filters = ctrl.state.filters.clone();
        let on_set_filters = ctrl.on_set_filters.clone();
        Callback::from(move |search: String| {
            on_set_filters.emit(ImageFilters {
                search,
                ..filters.clone()
            });
        })
    };

    let on_style_filter = {
        let filters = ctrl.state.filters.clone();
        let on_set_filters = ctrl.on_set_filters.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                on_set_filters.emit(ImageFilters {
                    style: select.value(),
                    ..filters.clone()
                });
            }
        })
    };

    let on_size = {
        let size = size.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                size.set(select.value());
            }
        })
    };

    let on_style_input = {
        let style = style.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                style.set(select.value());
            }
        })
    };

    let origin = api_ctx.client.asset_origin().to_string();

    // Gestures route through the classifier; this view binds downloads and
    // delete intent, neither of which touches the list slice directly.
    let on_action = {
        let rows = ctrl.state.rows.clone();
        let origin = origin.clone();
        let on_request_delete = ctrl.on_request_delete.clone();
        Callback::from(move |action: ListAction| {
            let Some(row) = rows.iter().find(|row| row.id == target_of(action)) else {
                return;
            };
            match effect_of(action) {
                ActionEffect::AssetDownload => {
                    if let Some(url) = artifact_url(row, &origin) {
                        trigger_download(&url);
                    }
                }
                ActionEffect::IntentOnly => on_request_delete.emit(row.clone()),
                ActionEffect::Navigation | ActionEffect::BackendCall => {}
            }
        })
    };

    let pages = total_pages(ctrl.state.total_items, ImageJobs::page_size());
    let delete_title = ctrl
        .intent
        .target()
        .map(|target| target.title().to_string())
        .unwrap_or_default();

    html! {
        <section class="page images">
            <header class="page-header">
                <h2>{"Product images"}</h2>
            </header>

            <form class="generate-form" onsubmit={on_submit}>
                <input
                    placeholder="Prompt"
                    value={(*prompt).clone()}
                    oninput={{
                        let prompt = prompt.clone();
                        Callback::from(move |event: InputEvent| {
                            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                                prompt.set(input.value());
                            }
                        })
                    }}
                />
                <select onchange={on_style_input}>
                    <option value="" selected={style.is_empty()}>{"Style (default photo)"}</option>
                    {for STYLE_OPTIONS.iter().map(|option| html! {
                        <option value={*option} selected={*style == *option}>{*option}</option>
                    })}
                </select>
                <select onchange={on_size}>
                    {for SIZE_OPTIONS.iter().map(|option| html! {
                        <option value={*option} selected={*size == *option}>{*option}</option>
                    })}
                </select>
                <label class="upload">
                    {"Reference image"}
                    <input type="file" accept="image/*" onchange={on_upload} />
                </label>
                {reference_url.as_ref().map(|url| html! {
                    <span class="muted">{format!("Attached: {url}")}</span>
                }).unwrap_or_default()}
                <button type="submit" disabled={ctrl.generating}>
                    {if ctrl.generating { "Submitting…" } else { "Generate image" }}
                </button>
                {form_error.as_ref().map(|message| html! {
                    <p class="field-error">{message.clone()}</p>
                }).unwrap_or_default()}
            </form>

            <div class="toolbar">
                <SearchInput
                    value={ctrl.state.filters.search.clone()}
                    placeholder="Search prompts"
                    on_search={on_search}
                />
                <select onchange={on_style_filter}>
                    <option value="" selected={ctrl.state.filters.style.is_empty()}>
                        {"Any style"}
                    </option>
                    {for STYLE_OPTIONS.iter().map(|option| html! {
                        <option
                            value={*option}
                            selected={ctrl.state.filters.style == *option}>
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
                        title="No image jobs yet"
                        description="Describe a shot above to queue your first render." />
                }
            } else {
                html! {
                    <div class="card-grid">
                        {for ctrl.state.rows.iter().map(|row| image_card(
                            row,
                            &origin,
                            on_action.clone(),
                        ))}
                    </div>
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
                title="Delete image job"
                body={format!("Delete \"{delete_title}\"? This cannot be undone.")}
                on_cancel={ctrl.on_cancel_delete.clone()}
                on_confirm={ctrl.on_confirm_delete.clone()}
            />
        </section>
    }
}

fn image_card(row: &ImageJobSummary, origin: &str, on_action: Callback<ListAction>) -> Html {
    let id = row.id;
    let artifact = artifact_url(row, origin);
    let on_download = artifact.as_ref().map(|_| {
        let on_action = on_action.clone();
        Callback::from(move |_| on_action.emit(ListAction::Download(id)))
    });
    let on_delete = Callback::from(move |_| on_action.emit(ListAction::Delete(id)));
    html! {
        <div class="card" key={row.id.to_string()}>
            {artifact.as_ref().map(|url| html! {
                <img src={url.clone()} alt={row.prompt.clone()} loading="lazy" />
            }).unwrap_or_else(|| html! {
                <div class="placeholder">{row.status.label()}</div>
            })}
            <div class="card-body">
                <p class="prompt">{row.prompt.clone()}</p>
                <p class="muted">{format!("{} · {}", row.style, row.created_at.format("%Y-%m-%d"))}</p>
                <StatusBadge status={row.status.clone()} />
            </div>
            <div class="row-actions">
                {match on_download {
                    Some(cb) => html! {
                        <button class="ghost" onclick={cb}>{"Download"}</button>
                    },
                    None => html! {
                        <button class="ghost" disabled=true>{"Download"}</button>
                    },
                }}
                <button class="ghost danger" onclick={on_delete}>{"Delete"}</button>
            </div>
        </div>
    }
}
